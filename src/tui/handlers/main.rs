//! Page input handler.

use anyhow::Result;
use crossterm::event;

use crate::tui::AppState;

/// Handle input while no overlay is open
pub fn handle_main_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let context = state.focus.context();

    if let Some(action) = state.shortcuts.resolve(context, key) {
        super::dispatch_action(state, action)
    } else {
        // No action mapped - ignore key
        Ok(false)
    }
}
