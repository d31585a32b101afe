//! Type mechanics: the closed set of element types and the canonical code
//! stored on every catalog record.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// The eighteen element types known to the recommendation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ElementType {
    Steel,
    Psychic,
    Ghost,
    Dark,
    Electric,
    Ice,
    Flying,
    Rock,
    Fighting,
    Normal,
    Dragon,
    Fairy,
    Bug,
    Water,
    Poison,
    Grass,
    Fire,
    Ground,
}

impl ElementType {
    /// Every element type, in declaration order.
    pub const ALL: [ElementType; 18] = [
        ElementType::Steel,
        ElementType::Psychic,
        ElementType::Ghost,
        ElementType::Dark,
        ElementType::Electric,
        ElementType::Ice,
        ElementType::Flying,
        ElementType::Rock,
        ElementType::Fighting,
        ElementType::Normal,
        ElementType::Dragon,
        ElementType::Fairy,
        ElementType::Bug,
        ElementType::Water,
        ElementType::Poison,
        ElementType::Grass,
        ElementType::Fire,
        ElementType::Ground,
    ];

    /// The uppercase code used in data files and rule descriptions.
    pub fn code(&self) -> &'static str {
        match self {
            ElementType::Steel => "STEEL",
            ElementType::Psychic => "PSYCHIC",
            ElementType::Ghost => "GHOST",
            ElementType::Dark => "DARK",
            ElementType::Electric => "ELECTRIC",
            ElementType::Ice => "ICE",
            ElementType::Flying => "FLYING",
            ElementType::Rock => "ROCK",
            ElementType::Fighting => "FIGHTING",
            ElementType::Normal => "NORMAL",
            ElementType::Dragon => "DRAGON",
            ElementType::Fairy => "FAIRY",
            ElementType::Bug => "BUG",
            ElementType::Water => "WATER",
            ElementType::Poison => "POISON",
            ElementType::Grass => "GRASS",
            ElementType::Fire => "FIRE",
            ElementType::Ground => "GROUND",
        }
    }
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a string does not name one of the eighteen element types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown element type code '{0}'")]
pub struct UnknownTypeCode(pub String);

impl FromStr for ElementType {
    type Err = UnknownTypeCode;

    /// Parses a code case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ElementType::ALL
            .iter()
            .copied()
            .find(|t| t.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownTypeCode(s.to_string()))
    }
}

/// The canonical classification stored on a record.
///
/// Unrecognized labels are kept as an uppercased `Custom` code instead of
/// being rejected, so new or house-rule types survive ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalTypeCode {
    Known(ElementType),
    Custom(String),
    /// Absent secondary type.
    None,
}

impl CanonicalTypeCode {
    /// Build a code from already uppercased text, folding known names into
    /// `Known` so later rule checks see a single representation.
    pub fn from_upper(text: impl Into<String>) -> Self {
        let text = text.into();
        match text.parse::<ElementType>() {
            Ok(element) => CanonicalTypeCode::Known(element),
            Err(_) => CanonicalTypeCode::Custom(text),
        }
    }

    /// The element type, if this code is one of the known eighteen.
    pub fn element(&self) -> Option<ElementType> {
        match self {
            CanonicalTypeCode::Known(element) => Some(*element),
            _ => None,
        }
    }

    /// True for the `NONE` sentinel and for custom codes spelling a
    /// placeholder ("N/A", "NENHUM", ...).
    pub fn is_placeholder(&self) -> bool {
        match self {
            CanonicalTypeCode::None => true,
            CanonicalTypeCode::Custom(code) => {
                crate::taxonomy::is_placeholder_label(&code.to_lowercase())
            }
            CanonicalTypeCode::Known(_) => false,
        }
    }

    /// The code as text: the element code, the custom text, or "NONE".
    pub fn as_str(&self) -> &str {
        match self {
            CanonicalTypeCode::Known(element) => element.code(),
            CanonicalTypeCode::Custom(code) => code,
            CanonicalTypeCode::None => "NONE",
        }
    }
}

impl From<ElementType> for CanonicalTypeCode {
    fn from(element: ElementType) -> Self {
        CanonicalTypeCode::Known(element)
    }
}

impl std::fmt::Display for CanonicalTypeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
