//! Recommendation Engine - derives capture ball suggestions from a record.
//!
//! Evaluation runs in a fixed order, which is also the output order:
//! 1. **Flags**: the Fast Ball and Heavy Ball tags, from the record's flags
//! 2. **Categories**: each type-pair rule whose pair meets the record's types
//! 3. **Fallback**: a single "no special recommendation" tag if nothing matched
//!
//! Rules are independent; a dual-type record can trigger several of them.

mod rules;
mod tag;

pub use rules::*;
pub use tag::*;

use creature_rules::{CanonicalRecord, ElementType};
use std::collections::HashSet;

/// Evaluates the ordered rule table against canonical records.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    rules: Vec<CategoryRule>,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl RecommendationEngine {
    /// Create an engine with a custom rule list, evaluated in the given order.
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    /// Create an engine with the standard Engineer ball rules.
    pub fn with_defaults() -> Self {
        Self::new(CATEGORY_RULES.to_vec())
    }

    /// The rules this engine evaluates, in output order.
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// The record's element types, without placeholders.
    ///
    /// Custom codes that spell a known element in any case count as that
    /// element; other custom codes are ignored.
    pub fn working_types(record: &CanonicalRecord) -> HashSet<ElementType> {
        record
            .types()
            .iter()
            .filter(|code| !code.is_placeholder())
            .filter_map(|code| code.element().or_else(|| code.as_str().parse().ok()))
            .collect()
    }

    /// Produce the ordered tag list for a record. Never empty.
    pub fn evaluate(&self, record: &CanonicalRecord) -> Vec<RecommendationTag> {
        let mut tags = Vec::new();

        if record.is_fast {
            tags.push(FAST_TAG);
        }
        if record.is_heavy {
            tags.push(HEAVY_TAG);
        }

        let working_types = Self::working_types(record);
        tags.extend(
            self.rules
                .iter()
                .filter(|rule| rule.matches(&working_types))
                .map(|rule| rule.tag),
        );

        if tags.is_empty() {
            tags.push(NO_RECOMMENDATION_TAG);
        }

        tags
    }
}
