//! Skill categorization, category filter and bar reveal tracking.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::models::{Skill, SkillCategory, SkillLevel};

/// Substrings that put a skill into AI & ML. Checked first.
const AI_ML_KEYWORDS: [&str; 13] = [
    "ai",
    "ml",
    "agent",
    "llm",
    "nlp",
    "gpt",
    "model",
    "embedding",
    "vector",
    "orchestration",
    "product",
    "roadmap",
    "strategy",
];

/// Substrings that put a skill into Leadership.
const LEADERSHIP_KEYWORDS: [&str; 7] = [
    "lead",
    "leadership",
    "manage",
    "team",
    "strategy",
    "vision",
    "executive",
];

/// How long a skill bar takes to fill after it scrolls into view.
pub const FILL_DURATION: Duration = Duration::from_millis(800);

/// Filter chips in display order; `None` is "All".
pub const CHIPS: [Option<SkillCategory>; 4] = [
    None,
    Some(SkillCategory::AiMl),
    Some(SkillCategory::Technical),
    Some(SkillCategory::Leadership),
];

/// Assigns a category by case-insensitive keyword match on the name.
///
/// AI & ML keywords win over leadership keywords, so a name matching both
/// (e.g. "strategy") is AI & ML. Anything unmatched is technical.
#[must_use]
pub fn categorize(name: &str) -> SkillCategory {
    let name = name.to_lowercase();
    let matches = |keywords: &[&str]| keywords.iter().any(|keyword| name.contains(keyword));

    if matches(&AI_ML_KEYWORDS) {
        SkillCategory::AiMl
    } else if matches(&LEADERSHIP_KEYWORDS) {
        SkillCategory::Leadership
    } else {
        SkillCategory::Technical
    }
}

/// A skill paired with its derived category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorizedSkill {
    /// The source skill
    pub skill: Skill,
    /// Derived category
    pub category: SkillCategory,
}

impl CategorizedSkill {
    /// Proficiency bracket of the skill.
    #[must_use]
    pub fn level(&self) -> SkillLevel {
        SkillLevel::from_level(self.skill.level)
    }
}

/// Categorizes every skill, keeping source order.
#[must_use]
pub fn categorize_all(skills: &[Skill]) -> Vec<CategorizedSkill> {
    skills
        .iter()
        .map(|skill| CategorizedSkill {
            skill: skill.clone(),
            category: categorize(&skill.name),
        })
        .collect()
}

/// Remembers when each skill row first entered the viewport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: HashMap<String, Instant>,
}

impl RevealTracker {
    /// Records the first sighting of `id`; later sightings are ignored.
    pub fn mark(&mut self, id: &str, now: Instant) {
        self.revealed.entry(id.to_string()).or_insert(now);
    }

    /// Forgets every sighting so bars fill again.
    pub fn reset(&mut self) {
        self.revealed.clear();
    }

    /// Whether `id` has been seen.
    #[must_use]
    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains_key(id)
    }

    /// How far the bar for `id` has filled, `0.0..=1.0`.
    #[must_use]
    pub fn fill_ratio(&self, id: &str, now: Instant, reduced_motion: bool) -> f32 {
        let Some(revealed) = self.revealed.get(id) else {
            return 0.0;
        };
        if reduced_motion {
            return 1.0;
        }
        let t = now.saturating_duration_since(*revealed).as_secs_f32() / FILL_DURATION.as_secs_f32();
        ease_out(t.clamp(0.0, 1.0))
    }
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Active category filter over the skills list.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillsFilterController {
    skills: Vec<CategorizedSkill>,
    active: Option<SkillCategory>,
    reveal: RevealTracker,
    chip_focus: usize,
}

impl SkillsFilterController {
    /// Categorizes the skills and shows all of them.
    #[must_use]
    pub fn new(skills: &[Skill]) -> Self {
        Self {
            skills: categorize_all(skills),
            active: None,
            reveal: RevealTracker::default(),
            chip_focus: 0,
        }
    }

    /// Active category, `None` for all.
    #[must_use]
    pub const fn active(&self) -> Option<SkillCategory> {
        self.active
    }

    /// Every skill with its category.
    #[must_use]
    pub fn all(&self) -> &[CategorizedSkill] {
        &self.skills
    }

    /// Skills passing the filter, in source order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&CategorizedSkill> {
        self.skills
            .iter()
            .filter(|skill| self.active.map_or(true, |active| skill.category == active))
            .collect()
    }

    /// Selects a category, or clears it if it is already active.
    /// `None` always shows all.
    ///
    /// Returns `true` when the active category changed; reveal tracking is
    /// reset in that case.
    pub fn toggle_category(&mut self, category: Option<SkillCategory>) -> bool {
        let next = match category {
            Some(category) if self.active != Some(category) => Some(category),
            _ => None,
        };
        if next == self.active {
            return false;
        }

        tracing::debug!(
            "Skills filter: {}",
            next.map_or("all", SkillCategory::id)
        );
        self.active = next;
        self.reveal.reset();
        true
    }

    /// Number of skills in `category`.
    #[must_use]
    pub fn count(&self, category: SkillCategory) -> usize {
        self.skills
            .iter()
            .filter(|skill| skill.category == category)
            .count()
    }

    /// Total number of skills.
    #[must_use]
    pub fn total(&self) -> usize {
        self.skills.len()
    }

    /// Index into [`CHIPS`] of the focused chip.
    #[must_use]
    pub const fn chip_focus(&self) -> usize {
        self.chip_focus
    }

    /// Moves chip focus right, stopping at the last chip.
    pub fn focus_next_chip(&mut self) {
        self.chip_focus = (self.chip_focus + 1).min(CHIPS.len() - 1);
    }

    /// Moves chip focus left, stopping at "All".
    pub fn focus_previous_chip(&mut self) {
        self.chip_focus = self.chip_focus.saturating_sub(1);
    }

    /// Activates the focused chip.
    pub fn activate_focused_chip(&mut self) -> bool {
        self.toggle_category(CHIPS[self.chip_focus])
    }

    /// Records that a skill row is on screen.
    pub fn mark_revealed(&mut self, id: &str, now: Instant) {
        self.reveal.mark(id, now);
    }

    /// Reveal state of every row.
    #[must_use]
    pub const fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }
}
