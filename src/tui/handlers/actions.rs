//! Action dispatch for page shortcuts.

use anyhow::Result;

use crate::controllers::skills_filter::CHIPS;
use crate::controllers::Anchor;
use crate::models::SkillCategory;
use crate::shortcuts::Action;
use crate::tui::{AppState, FocusArea};

/// Handle quit action
fn handle_quit(state: &mut AppState) -> Result<bool> {
    tracing::info!("Quit requested");
    state.should_quit = true;
    Ok(true)
}

/// Escape: collapse the open entry, else hand focus back to the page
fn handle_cancel(state: &mut AppState) -> Result<bool> {
    if state.timeline.expanded_id().is_some() {
        state.collapse_timeline();
    } else {
        state.focus = FocusArea::Page;
    }
    Ok(false)
}

fn handle_scroll(state: &mut AppState, delta: i32) -> Result<bool> {
    state.scroll_by(delta);
    Ok(false)
}

fn handle_page(state: &mut AppState, down: bool) -> Result<bool> {
    let step = i32::from(state.viewport_height().saturating_sub(2).max(1));
    state.scroll_by(if down { step } else { -step });
    Ok(false)
}

fn handle_filter(state: &mut AppState, category: Option<SkillCategory>) -> Result<bool> {
    state.toggle_skill_category(category);
    Ok(false)
}

fn handle_entry_focus(state: &mut AppState, next: bool) -> Result<bool> {
    let moved = if next {
        state.timeline.focus_next()
    } else {
        state.timeline.focus_previous()
    };
    if moved {
        if let Some(id) = state.timeline.focused_id().map(str::to_string) {
            state.reveal_entry(&id);
        }
    }
    Ok(false)
}

/// Dispatch an action to its handler. Returns `Ok(true)` to quit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    tracing::trace!(action = action.id(), "Dispatch");
    match action {
        Action::ToggleCommandMenu => {
            state.toggle_command_menu();
            Ok(false)
        }

        Action::Cancel => handle_cancel(state),
        Action::ToggleTheme => {
            state.toggle_theme();
            Ok(false)
        }
        Action::Quit => handle_quit(state),
        Action::FocusNext => {
            state.cycle_focus(true);
            Ok(false)
        }
        Action::FocusPrevious => {
            state.cycle_focus(false);
            Ok(false)
        }

        // Scrolling
        Action::ScrollUp => handle_scroll(state, -1),
        Action::ScrollDown => handle_scroll(state, 1),
        Action::PageUp => handle_page(state, false),
        Action::PageDown => handle_page(state, true),
        Action::ScrollTop => {
            state.scroll_to_anchor(Anchor::Top);
            Ok(false)
        }
        Action::ScrollBottom => {
            state.scroll_to_bottom();
            Ok(false)
        }

        // Skill filters
        Action::FilterAll => handle_filter(state, None),
        Action::FilterAiMl => handle_filter(state, Some(SkillCategory::AiMl)),
        Action::FilterTechnical => handle_filter(state, Some(SkillCategory::Technical)),
        Action::FilterLeadership => handle_filter(state, Some(SkillCategory::Leadership)),

        // Timeline
        Action::PreviousEntry => handle_entry_focus(state, false),
        Action::NextEntry => handle_entry_focus(state, true),
        Action::ToggleEntry => {
            state.toggle_focused_entry();
            Ok(false)
        }

        // Skill chips
        Action::PreviousChip => {
            state.skills.focus_previous_chip();
            Ok(false)
        }
        Action::NextChip => {
            state.skills.focus_next_chip();
            Ok(false)
        }
        Action::ActivateChip => {
            if let Some(chip) = CHIPS.get(state.skills.chip_focus()).copied() {
                state.toggle_skill_category(chip);
            }
            Ok(false)
        }
    }
}
