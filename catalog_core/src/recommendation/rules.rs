//! The ordered table of type-category rules.

use creature_rules::ElementType;
use std::collections::HashSet;

use super::{RecommendationTag, TagKind};

/// Emits its tag when a record has either of two element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    pub types: [ElementType; 2],
    pub tag: RecommendationTag,
}

impl CategoryRule {
    /// Check whether the working type set intersects this rule's pair.
    pub fn matches(&self, working_types: &HashSet<ElementType>) -> bool {
        self.types.iter().any(|t| working_types.contains(t))
    }
}

const fn rule(
    first: ElementType,
    second: ElementType,
    kind: TagKind,
    icon: &'static str,
    title: &'static str,
    rationale: &'static str,
) -> CategoryRule {
    CategoryRule {
        types: [first, second],
        tag: RecommendationTag {
            kind,
            icon,
            title,
            rationale,
        },
    }
}

/// Engineer ball rules. Order matters: it is the output order.
pub const CATEGORY_RULES: [CategoryRule; 9] = [
    rule(
        ElementType::Ghost,
        ElementType::Dark,
        TagKind::MoonBall,
        "🌕",
        "Moon Ball",
        "Outperforms the Ultra Ball against GHOST/DARK types.",
    ),
    rule(
        ElementType::Electric,
        ElementType::Steel,
        TagKind::TinkerBall,
        "🔩",
        "Tinker Ball",
        "Outperforms the Ultra Ball against ELECTRIC/STEEL types.",
    ),
    rule(
        ElementType::Ice,
        ElementType::Flying,
        TagKind::SoraBall,
        "☁️",
        "Sora Ball",
        "Outperforms the Ultra Ball against ICE/FLYING types.",
    ),
    rule(
        ElementType::Rock,
        ElementType::Fighting,
        TagKind::DuskBall,
        "🌑",
        "Dusk Ball",
        "Outperforms the Ultra Ball against ROCK/FIGHTING types.",
    ),
    rule(
        ElementType::Normal,
        ElementType::Psychic,
        TagKind::YumeBall,
        "💭",
        "Yume Ball",
        "Outperforms the Ultra Ball against NORMAL/PSYCHIC types.",
    ),
    rule(
        ElementType::Dragon,
        ElementType::Fairy,
        TagKind::TaleBall,
        "🐉",
        "Tale Ball",
        "Outperforms the Ultra Ball against DRAGON/FAIRY types.",
    ),
    rule(
        ElementType::Bug,
        ElementType::Water,
        TagKind::NetBall,
        "💧",
        "Net Ball",
        "Outperforms the Ultra Ball against BUG/WATER types.",
    ),
    rule(
        ElementType::Poison,
        ElementType::Grass,
        TagKind::JanguruBall,
        "🌿",
        "Janguru Ball",
        "Outperforms the Ultra Ball against POISON/GRASS types.",
    ),
    rule(
        ElementType::Fire,
        ElementType::Ground,
        TagKind::MaguBall,
        "🔥",
        "Magu Ball",
        "Outperforms the Ultra Ball against FIRE/GROUND types.",
    ),
];
