//! Synonym-based resolution of type labels to canonical codes.

use std::collections::HashMap;

use super::{is_placeholder_label, normalize};
use crate::mechanics::{CanonicalTypeCode, ElementType};

/// Built-in synonyms, keyed by normalized label.
///
/// Several labels may point to the same element type (literal names and
/// regional spellings alike).
pub const SYNONYMS: &[(&str, ElementType)] = &[
    ("metal", ElementType::Steel),
    ("aco", ElementType::Steel),
    ("psiquico", ElementType::Psychic),
    ("fantasma", ElementType::Ghost),
    ("sombrio", ElementType::Dark),
    ("noturno", ElementType::Dark),
    ("eletrico", ElementType::Electric),
    ("gelo", ElementType::Ice),
    ("voador", ElementType::Flying),
    ("rocha", ElementType::Rock),
    ("pedra", ElementType::Rock),
    ("lutador", ElementType::Fighting),
    ("normal", ElementType::Normal),
    ("dragao", ElementType::Dragon),
    ("fada", ElementType::Fairy),
    ("inseto", ElementType::Bug),
    ("aquatico", ElementType::Water),
    ("agua", ElementType::Water),
    ("venenoso", ElementType::Poison),
    ("veneno", ElementType::Poison),
    ("grama", ElementType::Grass),
    ("planta", ElementType::Grass),
    ("fogo", ElementType::Fire),
    ("terrestre", ElementType::Ground),
    ("terra", ElementType::Ground),
];

/// Maps free-text type labels to canonical type codes.
#[derive(Debug, Clone)]
pub struct TypeResolver {
    synonyms: HashMap<String, ElementType>,
}

impl Default for TypeResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeResolver {
    /// Create a resolver loaded with the built-in synonym table.
    pub fn new() -> Self {
        Self {
            synonyms: SYNONYMS
                .iter()
                .map(|(label, element)| (label.to_string(), *element))
                .collect(),
        }
    }

    /// Add or replace a synonym. The label is normalized before insertion.
    pub fn with_synonym(mut self, label: &str, element: ElementType) -> Self {
        self.synonyms.insert(normalize(label), element);
        self
    }

    /// Add multiple synonyms.
    pub fn with_synonyms<'a>(
        mut self,
        entries: impl IntoIterator<Item = (&'a str, ElementType)>,
    ) -> Self {
        for (label, element) in entries {
            self = self.with_synonym(label, element);
        }
        self
    }

    /// Resolve a raw label.
    ///
    /// Never fails: a label with no synonym comes back as its original text
    /// uppercased (folded into a known code when that text names one), and a
    /// placeholder or blank label resolves to `CanonicalTypeCode::None`.
    pub fn resolve(&self, raw_label: &str) -> CanonicalTypeCode {
        let normalized = normalize(raw_label);

        if is_placeholder_label(&normalized) {
            return CanonicalTypeCode::None;
        }

        if let Some(element) = self.synonyms.get(&normalized) {
            return CanonicalTypeCode::Known(*element);
        }

        let fallback = CanonicalTypeCode::from_upper(raw_label.to_uppercase());
        tracing::debug!(label = raw_label, code = %fallback, "type label has no synonym, using fallback");
        fallback
    }

    /// All labels that resolve to the given element type, sorted.
    pub fn synonyms_for(&self, element: ElementType) -> Vec<&str> {
        let mut labels: Vec<_> = self
            .synonyms
            .iter()
            .filter(|(_, e)| **e == element)
            .map(|(label, _)| label.as_str())
            .collect();
        labels.sort_unstable();
        labels
    }

    /// Number of synonym entries.
    pub fn len(&self) -> usize {
        self.synonyms.len()
    }

    /// True if the synonym table has no entries.
    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty()
    }
}
