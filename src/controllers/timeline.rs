//! Experience timeline: single expanded entry and keyboard focus.
//!
//! The expanded entry is one `Option<String>`, so every transition replaces
//! the previous state and two entries can never be expanded at once.

use crate::models::ExperienceEntry;

/// The result of an interactive expand/collapse.
///
/// The app turns it into an announcement and, for expansions, an
/// auto-scroll request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineTransition {
    /// Entry that changed
    pub id: String,
    /// `true` when the entry is now expanded
    pub expanded: bool,
}

/// Expansion and focus state of the experience timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimelineController {
    entry_ids: Vec<String>,
    expanded_id: Option<String>,
    focused: usize,
}

impl TimelineController {
    /// Creates a controller over entries in display order, all collapsed.
    #[must_use]
    pub fn new(entries: &[ExperienceEntry]) -> Self {
        Self {
            entry_ids: entries.iter().map(|entry| entry.id.clone()).collect(),
            expanded_id: None,
            focused: 0,
        }
    }

    /// Id of the expanded entry.
    #[must_use]
    pub fn expanded_id(&self) -> Option<&str> {
        self.expanded_id.as_deref()
    }

    /// Whether `id` is expanded.
    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_id.as_deref() == Some(id)
    }

    /// Index of the focused entry.
    #[must_use]
    pub const fn focused(&self) -> usize {
        self.focused
    }

    /// Id of the focused entry.
    #[must_use]
    pub fn focused_id(&self) -> Option<&str> {
        self.entry_ids.get(self.focused).map(String::as_str)
    }

    /// Expands `id`, or collapses it if it is already expanded.
    ///
    /// Expanding collapses whatever was expanded before. Unknown ids are
    /// ignored. The entry also takes keyboard focus.
    pub fn toggle(&mut self, id: &str) -> Option<TimelineTransition> {
        let index = self.entry_ids.iter().position(|entry| entry == id)?;
        self.focused = index;

        let expanded = !self.is_expanded(id);
        self.expanded_id = expanded.then(|| id.to_string());
        Some(TimelineTransition {
            id: id.to_string(),
            expanded,
        })
    }

    /// Collapses the expanded entry, if any.
    pub fn collapse(&mut self) -> Option<TimelineTransition> {
        self.expanded_id.take().map(|id| TimelineTransition {
            id,
            expanded: false,
        })
    }

    /// Toggles the focused entry (Enter/Space).
    pub fn toggle_focused(&mut self) -> Option<TimelineTransition> {
        let id = self.focused_id()?.to_string();
        self.toggle(&id)
    }

    /// Moves focus down one entry, stopping at the last. Returns `true` if it moved.
    pub fn focus_next(&mut self) -> bool {
        if self.focused + 1 < self.entry_ids.len() {
            self.focused += 1;
            true
        } else {
            false
        }
    }

    /// Moves focus up one entry, stopping at the first. Returns `true` if it moved.
    pub fn focus_previous(&mut self) -> bool {
        if self.focused > 0 {
            self.focused -= 1;
            true
        } else {
            false
        }
    }
}

/// Status-line text for an expand/collapse.
#[must_use]
pub fn announcement(entry: &ExperienceEntry, expanded: bool) -> String {
    let verb = if expanded { "Expanded" } else { "Collapsed" };
    format!("{verb} details for {} at {}", entry.title, entry.company)
}
