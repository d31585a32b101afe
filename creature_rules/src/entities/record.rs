//! Canonical records - the cleaned entries served by the catalog.

use serde::{Deserialize, Serialize};

use super::{lookup_key, NOT_AVAILABLE};
use crate::mechanics::{CanonicalTypeCode, ElementType};

/// Capture values for the three common balls, kept as display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatchValues {
    pub ultra: String,
    pub great: String,
    #[serde(rename = "super")]
    pub super_ball: String,
}

impl Default for CatchValues {
    fn default() -> Self {
        Self {
            ultra: NOT_AVAILABLE.to_string(),
            great: NOT_AVAILABLE.to_string(),
            super_ball: NOT_AVAILABLE.to_string(),
        }
    }
}

/// A creature entry after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    /// Name in its original casing.
    pub display_name: String,

    /// Trimmed, lowercased name. Unique within a catalog.
    pub lookup_key: String,

    /// Human-readable type line, e.g. "Fogo / Terrestre".
    pub type_label: String,

    pub primary_type: CanonicalTypeCode,
    pub secondary_type: CanonicalTypeCode,

    pub capture_tier_label: String,
    pub capture_level_label: String,
    pub image_ref: Option<String>,
    pub catch_values: CatchValues,

    pub is_fast: bool,
    pub is_heavy: bool,

    /// The common ball recommended by the source data.
    pub suggested_common_item: String,
}

impl CanonicalRecord {
    /// Create a record with the given name and every other field defaulted.
    pub fn new(display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        Self {
            lookup_key: lookup_key(&display_name),
            display_name,
            type_label: NOT_AVAILABLE.to_string(),
            primary_type: CanonicalTypeCode::None,
            secondary_type: CanonicalTypeCode::None,
            capture_tier_label: NOT_AVAILABLE.to_string(),
            capture_level_label: NOT_AVAILABLE.to_string(),
            image_ref: None,
            catch_values: CatchValues::default(),
            is_fast: false,
            is_heavy: false,
            suggested_common_item: NOT_AVAILABLE.to_string(),
        }
    }

    /// Set both type codes.
    pub fn with_types(
        mut self,
        primary: impl Into<CanonicalTypeCode>,
        secondary: impl Into<CanonicalTypeCode>,
    ) -> Self {
        self.primary_type = primary.into();
        self.secondary_type = secondary.into();
        self
    }

    /// Set the display type line.
    pub fn with_type_label(mut self, label: impl Into<String>) -> Self {
        self.type_label = label.into();
        self
    }

    /// Set the speed and weight flags.
    pub fn with_flags(mut self, is_fast: bool, is_heavy: bool) -> Self {
        self.is_fast = is_fast;
        self.is_heavy = is_heavy;
        self
    }

    /// Set the catch values.
    pub fn with_catch_values(mut self, catch_values: CatchValues) -> Self {
        self.catch_values = catch_values;
        self
    }

    /// Both type codes, primary first.
    pub fn types(&self) -> [&CanonicalTypeCode; 2] {
        [&self.primary_type, &self.secondary_type]
    }

    /// Check if either type code is the given element.
    pub fn has_type(&self, element: ElementType) -> bool {
        self.types()
            .iter()
            .any(|code| code.element() == Some(element))
    }
}
