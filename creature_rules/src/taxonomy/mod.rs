//! Type taxonomy - turning free-text type labels into canonical codes.
//!
//! Labels in the catalog come from hand-edited spreadsheets in Portuguese,
//! with inconsistent accents and casing. Resolution runs in two steps:
//! - **normalize**: lowercase, fold accented letters to ASCII, trim
//! - **resolve**: look the normalized label up in the synonym table, falling
//!   back to the uppercased raw label

mod normalizer;
mod resolver;

pub use normalizer::*;
pub use resolver::*;

/// Normalized labels that mean "no type" (used for absent secondary types).
pub const PLACEHOLDER_LABELS: &[&str] = &["", "nenhum", "none", "n/a", "n-a"];

/// Check whether an already normalized label is a "no type" placeholder.
pub fn is_placeholder_label(normalized: &str) -> bool {
    PLACEHOLDER_LABELS.contains(&normalized)
}
