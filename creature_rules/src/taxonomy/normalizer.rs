//! Text normalization for type labels.

/// Accented Latin letters and the ASCII letter each one folds to.
///
/// Only lowercase forms are listed; `normalize` lowercases first, so the
/// uppercase variants go through the same table.
pub const DIACRITIC_TABLE: &[(char, char)] = &[
    ('á', 'a'),
    ('à', 'a'),
    ('â', 'a'),
    ('ã', 'a'),
    ('ä', 'a'),
    ('é', 'e'),
    ('è', 'e'),
    ('ê', 'e'),
    ('ë', 'e'),
    ('í', 'i'),
    ('ì', 'i'),
    ('î', 'i'),
    ('ï', 'i'),
    ('ó', 'o'),
    ('ò', 'o'),
    ('ô', 'o'),
    ('õ', 'o'),
    ('ö', 'o'),
    ('ú', 'u'),
    ('ù', 'u'),
    ('û', 'u'),
    ('ü', 'u'),
    ('ç', 'c'),
    ('ñ', 'n'),
];

/// Fold a single lowercase character through the diacritic table.
pub fn fold_diacritic(c: char) -> char {
    DIACRITIC_TABLE
        .iter()
        .find(|(accented, _)| *accented == c)
        .map(|(_, base)| *base)
        .unwrap_or(c)
}

/// Canonicalize a free-text label: lowercase, strip accents, trim.
///
/// Total over any input; characters outside the table pass through.
pub fn normalize(label: &str) -> String {
    let folded: String = label.to_lowercase().chars().map(fold_diacritic).collect();
    folded.trim().to_string()
}
