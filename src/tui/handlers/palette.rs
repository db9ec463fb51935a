//! Command palette input handler.

use anyhow::Result;
use crossterm::event::{self, KeyCode, KeyModifiers};

use crate::controllers::PaletteEvent;
use crate::shortcuts::{Action, ShortcutContext};
use crate::tui::component::Component;
use crate::tui::AppState;

/// Handle input while the command palette is open.
///
/// The global toggle is checked first so Ctrl+K closes the palette it opened.
pub fn handle_palette_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if state
        .shortcuts
        .matches(ShortcutContext::Global, key, Action::ToggleCommandMenu)
    {
        return super::dispatch_action(state, Action::ToggleCommandMenu);
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return super::dispatch_action(state, Action::Quit);
    }

    let Some(palette) = state.palette.as_mut() else {
        return Ok(false);
    };

    match palette.handle_input(key) {
        Some(PaletteEvent::Execute(action)) => state.execute_command(action),
        Some(PaletteEvent::Close) => state.close_command_menu(),
        None => {}
    }
    Ok(false)
}
