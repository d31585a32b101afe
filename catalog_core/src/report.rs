//! Capture report - the plain-text answer to a lookup.

use serde::Serialize;

use creature_rules::{CanonicalRecord, CatchValues};

use crate::recommendation::RecommendationTag;

/// Everything shown for a found creature.
#[derive(Debug, Clone, Serialize)]
pub struct CaptureReport {
    pub name: String,
    pub type_label: String,
    pub common_ball: String,
    pub difficulty: String,
    pub capture_level: String,
    pub image: Option<String>,
    pub recommendations: Vec<RecommendationTag>,
    pub catch_values: CatchValues,
}

impl CaptureReport {
    /// Collect the display fields of a record and its evaluated tags.
    pub fn new(record: &CanonicalRecord, recommendations: Vec<RecommendationTag>) -> Self {
        Self {
            name: record.display_name.clone(),
            type_label: record.type_label.clone(),
            common_ball: record.suggested_common_item.clone(),
            difficulty: record.capture_tier_label.clone(),
            capture_level: record.capture_level_label.clone(),
            image: record.image_ref.clone(),
            recommendations,
            catch_values: record.catch_values.clone(),
        }
    }

    /// Format the report as text.
    pub fn to_text(&self) -> String {
        let mut text = String::new();

        text.push_str(&format!("## Capture stats for {}\n", self.name.to_uppercase()));
        if let Some(image) = &self.image {
            text.push_str(&format!("Image: {}\n", image));
        }
        text.push('\n');

        text.push_str(&format!("Type(s): {}\n", self.type_label));
        text.push_str(&format!("Common ball: {}\n", self.common_ball));
        text.push('\n');

        text.push_str(&format!("Difficulty: {}\n", self.difficulty));
        text.push_str(&format!("Capture level: {}\n", self.capture_level));
        text.push('\n');

        text.push_str("## Engineer ball tips\n");
        for tag in &self.recommendations {
            text.push_str(&format!("- {}\n", tag.as_line()));
        }
        text.push('\n');

        text.push_str(&format!(
            "Ultra Ball (UB): {} | Great Ball (GB): {} | Super Ball (SB): {}\n",
            self.catch_values.ultra, self.catch_values.great, self.catch_values.super_ball
        ));

        text
    }
}

/// Message for a query that matched nothing in a loaded catalog.
pub fn not_found_message(query: &str) -> String {
    format!(
        "Creature not found: no data for {}. Check the spelling, e.g. `Bulbasaur`.",
        query.trim().to_uppercase()
    )
}

/// Message for a query made while no catalog is loaded.
pub fn unavailable_message(source: &str) -> String {
    format!("Data unavailable: the catalog could not be loaded from '{}'.", source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::RecommendationEngine;
    use creature_rules::ElementType;

    #[test]
    fn test_report_text() {
        let record = CanonicalRecord::new("Bronzor")
            .with_types(ElementType::Steel, ElementType::Psychic)
            .with_type_label("Metal / Psiquico")
            .with_catch_values(CatchValues {
                ultra: "10".to_string(),
                great: "15".to_string(),
                super_ball: "25".to_string(),
            });
        let tags = RecommendationEngine::with_defaults().evaluate(&record);

        let text = CaptureReport::new(&record, tags).to_text();

        assert!(text.contains("Capture stats for BRONZOR"));
        assert!(text.contains("Type(s): Metal / Psiquico"));
        assert!(text.contains("Tinker Ball"));
        assert!(text.contains("Yume Ball"));
        assert!(text.find("Tinker Ball") < text.find("Yume Ball"));
        assert!(text.contains("Ultra Ball (UB): 10 | Great Ball (GB): 15 | Super Ball (SB): 25"));
        assert!(!text.contains("Image:"));
    }

    #[test]
    fn test_report_sentinel_line() {
        let record = CanonicalRecord::new("Missingno");
        let tags = RecommendationEngine::with_defaults().evaluate(&record);

        let text = CaptureReport::new(&record, tags).to_text();
        assert!(text.contains("- No special Engineer ball suggested."));
    }

    #[test]
    fn test_messages_are_distinct() {
        let not_found = not_found_message(" missingno ");
        let unavailable = unavailable_message("pokemons.json");

        assert!(not_found.contains("MISSINGNO"));
        assert!(unavailable.contains("pokemons.json"));
        assert_ne!(not_found, unavailable);
    }
}
