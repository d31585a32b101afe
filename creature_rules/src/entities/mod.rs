//! Record definitions for the creature catalog.

mod raw;
mod record;

pub use raw::*;
pub use record::*;

/// Display value used for any absent text field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Derive the catalog index key from a name: trimmed and lowercased.
pub fn lookup_key(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_key() {
        assert_eq!(lookup_key("  Pikachu "), "pikachu");
        assert_eq!(lookup_key("MR. MIME"), "mr. mime");
        assert_eq!(lookup_key(""), "");
    }
}
