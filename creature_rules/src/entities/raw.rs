//! Raw records as they arrive from the data source.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field names used by the source spreadsheet export.
pub mod fields {
    pub const NAME: &str = "nome";
    pub const PRIMARY_TYPE: &str = "tipo1";
    pub const SECONDARY_TYPE: &str = "tipo2";
    pub const COMMON_BALL: &str = "ball1";
    pub const DIFFICULTY: &str = "dificuldade";
    pub const LEVEL: &str = "level";
    pub const IMAGE: &str = "image";
    pub const ULTRA_BALL: &str = "tableub";
    pub const GREAT_BALL: &str = "tablegb";
    pub const SUPER_BALL: &str = "tablesb";
    pub const FAST: &str = "fast";
    pub const HEAVY: &str = "heavy";
}

/// String values accepted as "true" in flag fields.
const TRUTHY_FLAGS: &[&str] = &["yes", "sim", "true"];

/// An untyped key-value record. Only lives for the duration of ingestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(pub Map<String, Value>);

impl RawRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field (builder style).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Wrap a JSON value, if it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Check whether a field is present with a non-null value.
    pub fn has(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(value) if !value.is_null())
    }

    /// Get a field only if it holds a JSON string.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Render a field as a display string, keeping the source text verbatim.
    ///
    /// Strings are returned as-is, numbers keep their JSON text, booleans
    /// render as `true`/`false`. Null and missing fields yield `None`.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Render a field as a display string, with a default for absent values.
    pub fn text_or(&self, key: &str, default: &str) -> String {
        self.text(key).unwrap_or_else(|| default.to_string())
    }

    /// Interpret a yes/no style field. Absent fields are false.
    pub fn flag(&self, key: &str) -> bool {
        match self.0.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => {
                let s = s.trim().to_lowercase();
                TRUTHY_FLAGS.contains(&s.as_str())
            }
            _ => false,
        }
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_keeps_source_formatting() {
        let raw = RawRecord::new()
            .with(fields::ULTRA_BALL, "10.50")
            .with(fields::GREAT_BALL, json!(7))
            .with(fields::SUPER_BALL, json!(2.5))
            .with(fields::LEVEL, Value::Null);

        assert_eq!(raw.text(fields::ULTRA_BALL).as_deref(), Some("10.50"));
        assert_eq!(raw.text(fields::GREAT_BALL).as_deref(), Some("7"));
        assert_eq!(raw.text(fields::SUPER_BALL).as_deref(), Some("2.5"));
        assert_eq!(raw.text(fields::LEVEL), None);
        assert_eq!(raw.text_or(fields::DIFFICULTY, "N/A"), "N/A");
    }

    #[test]
    fn test_has_ignores_null() {
        let raw = RawRecord::new()
            .with(fields::NAME, "Bulbasaur")
            .with(fields::ULTRA_BALL, Value::Null);

        assert!(raw.has(fields::NAME));
        assert!(!raw.has(fields::ULTRA_BALL));
        assert!(!raw.has(fields::IMAGE));
    }

    #[test]
    fn test_flags() {
        let raw = RawRecord::new()
            .with(fields::FAST, "Yes")
            .with(fields::HEAVY, "no")
            .with("other", json!(true))
            .with("portuguese", " sim ");

        assert!(raw.flag(fields::FAST));
        assert!(!raw.flag(fields::HEAVY));
        assert!(raw.flag("other"));
        assert!(raw.flag("portuguese"));
        assert!(!raw.flag("missing"));
    }

    #[test]
    fn test_from_value() {
        assert!(RawRecord::from_value(json!({"nome": "Eevee"})).is_some());
        assert!(RawRecord::from_value(json!(["nome"])).is_none());
        assert!(RawRecord::from_value(json!("Eevee")).is_none());
    }

    #[test]
    fn test_str_field() {
        let raw = RawRecord::new().with(fields::NAME, json!(25));
        assert_eq!(raw.str_field(fields::NAME), None);
    }
}
