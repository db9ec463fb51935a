//! Skills, skill categories and proficiency brackets.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Icon;

/// A single skill with a numeric proficiency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Stable unique identifier
    pub id: String,
    /// Display name, also the input for categorization
    pub name: String,
    /// Proficiency, 0..=100
    pub level: u8,
    /// Optional icon kind
    #[serde(default)]
    pub icon: Option<Icon>,
}

/// The fixed buckets skills are sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    /// AI, ML and product strategy
    AiMl,
    /// Everything that is not AI/ML or leadership
    Technical,
    /// People and organizational leadership
    Leadership,
}

impl SkillCategory {
    /// All categories in filter-chip order.
    pub const ALL: [Self; 3] = [Self::AiMl, Self::Technical, Self::Leadership];

    /// Stable identifier (`"ai-ml"`, `"technical"`, `"leadership"`).
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::AiMl => "ai-ml",
            Self::Technical => "technical",
            Self::Leadership => "leadership",
        }
    }

    /// Chip label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AiMl => "AI & ML",
            Self::Technical => "Technical",
            Self::Leadership => "Leadership",
        }
    }

    /// Parses a category identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.id() == id)
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Named proficiency bracket derived from a numeric level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SkillLevel {
    /// 0..=69
    Foundational,
    /// 70..=79
    Intermediate,
    /// 80..=89
    Advanced,
    /// 90..=100
    Expert,
}

impl SkillLevel {
    /// Brackets in descending threshold order; the first one whose minimum is
    /// at or below the level wins.
    const BRACKETS: [(u8, Self); 4] = [
        (90, Self::Expert),
        (80, Self::Advanced),
        (70, Self::Intermediate),
        (0, Self::Foundational),
    ];

    /// Maps a numeric level to its bracket.
    #[must_use]
    pub fn from_level(level: u8) -> Self {
        Self::BRACKETS
            .iter()
            .find(|(min, _)| *min <= level)
            .map_or(Self::Foundational, |(_, bracket)| *bracket)
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Expert => "Expert",
            Self::Advanced => "Advanced",
            Self::Intermediate => "Intermediate",
            Self::Foundational => "Foundational",
        }
    }
}
