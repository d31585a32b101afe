//! Catalog builder - turns raw records into a keyed catalog.

use serde_json::Value;

use creature_rules::{
    fields, lookup_key, normalize, taxonomy::is_placeholder_label, CanonicalRecord, CatchValues,
    RawRecord, TypeResolver, NOT_AVAILABLE,
};

use super::Catalog;
use crate::error::{CatalogError, Result};

/// Label used when a record has no secondary type field.
pub const DEFAULT_SECONDARY_LABEL: &str = "Nenhum";

/// Compose the display type line: "Primary" or "Primary / Secondary".
///
/// The secondary part is omitted when it is a placeholder ("Nenhum", "N/A",
/// empty, ...), compared case-insensitively.
pub fn type_label(primary: &str, secondary: &str) -> String {
    if is_placeholder_label(&normalize(secondary)) {
        primary.to_string()
    } else {
        format!("{} / {}", primary, secondary)
    }
}

/// Check the document shape and split it into raw records.
///
/// The top level must be an array and every element an object.
pub fn parse_records(value: &Value) -> Result<Vec<RawRecord>> {
    let items = value.as_array().ok_or_else(|| {
        CatalogError::MalformedSource(format!(
            "expected a list of records, found {}",
            json_kind(value)
        ))
    })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            RawRecord::from_value(item.clone()).ok_or_else(|| {
                CatalogError::MalformedSource(format!(
                    "entry {} is {}, expected an object",
                    index,
                    json_kind(item)
                ))
            })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Builds catalogs from raw records using a type resolver.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    resolver: TypeResolver,
}

impl CatalogBuilder {
    /// Create a builder with the given resolver.
    pub fn new(resolver: TypeResolver) -> Self {
        Self { resolver }
    }

    /// Create a builder with the built-in synonym table.
    pub fn with_defaults() -> Self {
        Self::new(TypeResolver::new())
    }

    /// The resolver used for type labels.
    pub fn resolver(&self) -> &TypeResolver {
        &self.resolver
    }

    /// Convert one raw record, or `None` if it lacks a name or ultra ball value.
    pub fn canonicalize(&self, raw: &RawRecord) -> Option<CanonicalRecord> {
        let name = raw.str_field(fields::NAME)?;
        if !raw.has(fields::ULTRA_BALL) {
            return None;
        }

        let primary_label = raw.text_or(fields::PRIMARY_TYPE, NOT_AVAILABLE);
        let secondary_label = raw.text_or(fields::SECONDARY_TYPE, DEFAULT_SECONDARY_LABEL);

        Some(CanonicalRecord {
            display_name: name.to_string(),
            lookup_key: lookup_key(name),
            type_label: type_label(&primary_label, &secondary_label),
            primary_type: self.resolver.resolve(&primary_label),
            secondary_type: self.resolver.resolve(&secondary_label),
            capture_tier_label: raw.text_or(fields::DIFFICULTY, NOT_AVAILABLE),
            capture_level_label: raw.text_or(fields::LEVEL, NOT_AVAILABLE),
            image_ref: raw.text(fields::IMAGE),
            catch_values: CatchValues {
                ultra: raw.text_or(fields::ULTRA_BALL, NOT_AVAILABLE),
                great: raw.text_or(fields::GREAT_BALL, NOT_AVAILABLE),
                super_ball: raw.text_or(fields::SUPER_BALL, NOT_AVAILABLE),
            },
            is_fast: raw.flag(fields::FAST),
            is_heavy: raw.flag(fields::HEAVY),
            suggested_common_item: raw.text_or(fields::COMMON_BALL, NOT_AVAILABLE),
        })
    }

    /// Build a catalog from raw records, in order.
    ///
    /// Records without a name or ultra ball value are dropped; a later record
    /// with the same lookup key replaces an earlier one.
    pub fn build(&self, raw_records: impl IntoIterator<Item = RawRecord>) -> Catalog {
        let mut catalog = Catalog::new();

        for (index, raw) in raw_records.into_iter().enumerate() {
            catalog.stats_mut().seen += 1;

            let Some(record) = self.canonicalize(&raw) else {
                tracing::debug!(index, "dropping record without name or ultra ball value");
                catalog.stats_mut().dropped += 1;
                continue;
            };

            if let Some(previous) = catalog.insert(record) {
                tracing::debug!(key = %previous.lookup_key, index, "record overwrites earlier entry");
                catalog.stats_mut().overwritten += 1;
            }
        }

        catalog
    }

    /// Validate a JSON document and build a catalog from it.
    pub fn build_value(&self, value: &Value) -> Result<Catalog> {
        let records = parse_records(value)?;
        Ok(self.build(records))
    }
}
