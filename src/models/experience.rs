//! Professional experience entries shown on the timeline.

use serde::{Deserialize, Serialize};

use super::Icon;

/// A project delivered as part of a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project name
    pub name: String,
    /// One-line summary
    pub description: String,
}

/// One professional-experience record.
///
/// Entries are immutable once loaded. `id` must be unique across the list;
/// list order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Stable unique identifier (e.g., "exp-1")
    pub id: String,
    /// Role title
    pub title: String,
    /// Employer
    pub company: String,
    /// Where the role was based
    #[serde(default)]
    pub location: String,
    /// Free-text date range, e.g. "April 2017 - 2022" or "2022 - Present"
    pub date: String,
    /// Summary paragraph shown on the collapsed card
    pub description: String,
    /// Icon drawn on the timeline rail
    #[serde(default)]
    pub icon: Icon,
    /// Bullet points revealed when expanded
    #[serde(default)]
    pub achievements: Vec<String>,
    /// Technologies revealed when expanded
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Projects revealed when expanded
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Which side of the timeline rail a card sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Card left of the rail
    Left,
    /// Card right of the rail
    Right,
}

impl Side {
    /// Even indices go left, odd indices go right.
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Left
        } else {
            Self::Right
        }
    }
}
