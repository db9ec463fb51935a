//! Mouse input: clicks, hover and wheel.

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::controllers::skills_filter::CHIPS;
use crate::controllers::PaletteEvent;
use crate::tui::floating_view::{command_trigger_rect, hit, scroll_cue_rect};
use crate::tui::palette_view::{contains, is_close_button, palette_layout};
use crate::tui::{AppState, FocusArea};

/// Lines moved per wheel notch.
const WHEEL_STEP: i32 = 3;

/// Handle a mouse event. Returns `Ok(true)` to quit.
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) -> Result<bool> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(state, column, row),
        MouseEventKind::Moved => {
            handle_hover(state, column, row);
            Ok(false)
        }
        MouseEventKind::ScrollUp => {
            handle_wheel(state, -1);
            Ok(false)
        }
        MouseEventKind::ScrollDown => {
            handle_wheel(state, 1);
            Ok(false)
        }
        _ => Ok(false),
    }
}

fn handle_click(state: &mut AppState, column: u16, row: u16) -> Result<bool> {
    if state.command_menu.is_open() {
        handle_palette_click(state, column, row);
        return Ok(false);
    }

    let page_area = state.page_area();
    if state.command_trigger.is_shown() && hit(command_trigger_rect(page_area), column, row) {
        state.click_command_trigger();
        return Ok(false);
    }
    if state.scroll_cue.is_shown() && hit(scroll_cue_rect(page_area), column, row) {
        state.click_scroll_cue();
        return Ok(false);
    }
    if !hit(page_area, column, row) {
        return Ok(false);
    }

    let line = state.scroll.offset().saturating_add(row - page_area.y);
    let page = state.page();

    if let Some(chip) = page.chip_at(line, column) {
        state.focus = FocusArea::Skills;
        if let Some(category) = CHIPS.get(chip).copied() {
            state.toggle_skill_category(category);
        }
        return Ok(false);
    }

    match page.entry_at(line, column) {
        Some(entry) => {
            let id = entry.id.clone();
            state.toggle_entry(&id);
        }
        None => state.collapse_timeline(),
    }
    Ok(false)
}

/// Close button and backdrop close; a row click executes that command.
fn handle_palette_click(state: &mut AppState, column: u16, row: u16) {
    let layout = palette_layout(state.area);

    if is_close_button(&layout, column, row) || !contains(&layout, column, row) {
        state.close_command_menu();
        return;
    }

    let event = state.palette.as_mut().and_then(|palette| {
        if palette.is_closing() {
            return None;
        }
        let index = palette.item_at(&layout, column, row)?;
        palette.select(index);
        palette.execute_selected()
    });

    if let Some(PaletteEvent::Execute(action)) = event {
        state.execute_command(action);
    }
}

fn handle_hover(state: &mut AppState, column: u16, row: u16) {
    if state.command_menu.is_open() {
        let layout = palette_layout(state.area);
        if let Some(palette) = state.palette.as_mut() {
            if let Some(index) = palette.item_at(&layout, column, row) {
                palette.select(index);
            }
        }
        return;
    }

    let over_trigger = state.command_trigger.is_shown()
        && hit(command_trigger_rect(state.page_area()), column, row);
    if over_trigger {
        state.tooltip.hover_enter(state.now);
    } else if state.tooltip.is_hovered() {
        state.tooltip.hover_leave();
    }
}

fn handle_wheel(state: &mut AppState, direction: i32) {
    match state.palette.as_mut() {
        Some(palette) if direction < 0 => palette.select_previous(),
        Some(palette) => palette.select_next(),
        None => state.scroll_by(direction * WHEEL_STEP),
    }
}
