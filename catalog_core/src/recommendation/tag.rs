//! Recommendation tags - the suggestions shown next to a catalog entry.

use serde::Serialize;

/// Identifies which rule produced a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TagKind {
    FastBall,
    HeavyBall,
    MoonBall,
    TinkerBall,
    SoraBall,
    DuskBall,
    YumeBall,
    TaleBall,
    NetBall,
    JanguruBall,
    MaguBall,
    /// No rule matched.
    NoRecommendation,
}

/// A static suggestion: icon, title and a one-line rationale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RecommendationTag {
    pub kind: TagKind,
    pub icon: &'static str,
    pub title: &'static str,
    pub rationale: &'static str,
}

impl RecommendationTag {
    /// Check whether this is the "no special recommendation" tag.
    pub fn is_sentinel(&self) -> bool {
        self.kind == TagKind::NoRecommendation
    }

    /// Render as a single display line, e.g. "🌕 Moon Ball - ...".
    pub fn as_line(&self) -> String {
        if self.is_sentinel() {
            self.rationale.to_string()
        } else {
            format!("{} {} - {}", self.icon, self.title, self.rationale)
        }
    }
}

impl std::fmt::Display for RecommendationTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_line())
    }
}

pub const FAST_TAG: RecommendationTag = RecommendationTag {
    kind: TagKind::FastBall,
    icon: "⚡",
    title: "Fast Ball",
    rationale: "Higher catch rate for creatures classified as FAST.",
};

pub const HEAVY_TAG: RecommendationTag = RecommendationTag {
    kind: TagKind::HeavyBall,
    icon: "⛰️",
    title: "Heavy Ball",
    rationale: "Higher catch rate for creatures classified as HEAVY.",
};

pub const NO_RECOMMENDATION_TAG: RecommendationTag = RecommendationTag {
    kind: TagKind::NoRecommendation,
    icon: "",
    title: "No special recommendation",
    rationale: "No special Engineer ball suggested.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel() {
        assert!(NO_RECOMMENDATION_TAG.is_sentinel());
        assert!(!FAST_TAG.is_sentinel());
    }

    #[test]
    fn test_as_line() {
        assert_eq!(
            FAST_TAG.as_line(),
            "⚡ Fast Ball - Higher catch rate for creatures classified as FAST."
        );
        assert_eq!(NO_RECOMMENDATION_TAG.to_string(), "No special Engineer ball suggested.");
    }
}
