//! Integration tests for the command menu.
//!
//! Covers the global shortcut, every closing path, command execution with
//! the deferred close, and the floating command trigger.

mod fixtures;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use fixtures::{click, ctrl, hover, key, scenario_resume, scenario_state, state_with, super_key};
use std::time::{Duration, Instant};
use termfolio::controllers::{Anchor, TriggerPhase};
use termfolio::state::{MemoryPreferenceStore, ThemeMode};
use termfolio::tui::floating_view::command_trigger_rect;
use termfolio::tui::handlers::handle_mouse_event;
use termfolio::tui::palette_view::palette_layout;
use termfolio::tui::{handle_key_event, AppState};

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        handle_key_event(state, key(KeyCode::Char(c))).unwrap();
    }
}

fn open(state: &mut AppState) {
    handle_key_event(state, ctrl('k')).unwrap();
    assert!(state.command_menu.is_open());
}

#[test]
fn test_ctrl_k_opens_and_escape_closes() {
    let (mut state, _platform) = scenario_state(Instant::now());
    assert!(!state.command_menu.is_open());

    handle_key_event(&mut state, ctrl('k')).unwrap();
    assert!(state.command_menu.is_open());
    assert!(state.palette.is_some());

    handle_key_event(&mut state, key(KeyCode::Esc)).unwrap();
    assert!(!state.command_menu.is_open());
    assert!(state.palette.is_none());
}

#[test]
fn test_super_k_opens() {
    let (mut state, _platform) = scenario_state(Instant::now());
    handle_key_event(&mut state, super_key('k')).unwrap();
    assert!(state.command_menu.is_open());
}

#[test]
fn test_one_key_press_toggles_once() {
    let (mut state, _platform) = scenario_state(Instant::now());

    handle_key_event(&mut state, ctrl('k')).unwrap();
    // The release of the same key must not toggle again
    let release = KeyEvent::new_with_kind(
        KeyCode::Char('k'),
        KeyModifiers::CONTROL,
        KeyEventKind::Release,
    );
    handle_key_event(&mut state, release).unwrap();
    assert!(state.command_menu.is_open());

    handle_key_event(&mut state, ctrl('k')).unwrap();
    assert!(!state.command_menu.is_open());
}

#[test]
fn test_every_close_path_converges() {
    let (mut state, _platform) = scenario_state(Instant::now());
    let layout = palette_layout(state.area);

    // Backdrop click
    open(&mut state);
    handle_mouse_event(&mut state, click(0, 0)).unwrap();
    assert!(!state.command_menu.is_open());
    assert!(state.palette.is_none());

    // Close button
    open(&mut state);
    let button = layout.close_button;
    handle_mouse_event(&mut state, click(button.x + 1, button.y)).unwrap();
    assert!(!state.command_menu.is_open());
    assert!(state.palette.is_none());

    // Escape
    open(&mut state);
    handle_key_event(&mut state, key(KeyCode::Esc)).unwrap();
    assert!(!state.command_menu.is_open());
    assert!(state.palette.is_none());
}

#[test]
fn test_click_inside_popup_keeps_it_open() {
    let (mut state, _platform) = scenario_state(Instant::now());
    open(&mut state);

    let layout = palette_layout(state.area);
    handle_mouse_event(&mut state, click(layout.input.x + 2, layout.input.y)).unwrap();
    assert!(state.command_menu.is_open());
}

#[test]
fn test_copy_email_dwells_before_closing() {
    let now = Instant::now();
    let (mut state, platform) = scenario_state(now);
    open(&mut state);

    type_text(&mut state, "copy email");
    handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();

    assert_eq!(platform.log.borrow().copied, ["casey@example.com"]);
    assert_eq!(
        state.palette.as_ref().and_then(|p| p.confirmation()),
        Some("Copied to clipboard")
    );

    state.tick(now + Duration::from_millis(1000));
    assert!(state.command_menu.is_open());

    state.tick(now + Duration::from_millis(1600));
    assert!(!state.command_menu.is_open());
}

#[test]
fn test_copy_failure_still_closes() {
    let now = Instant::now();
    let (mut state, platform) = scenario_state(now);
    platform.log.borrow_mut().fail_copy = true;
    open(&mut state);

    type_text(&mut state, "copy email");
    handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
    assert!(state.palette.as_ref().is_some_and(|p| p.confirmation().is_none()));

    state.tick(now + Duration::from_millis(200));
    assert!(!state.command_menu.is_open());
}

#[test]
fn test_download_failure_still_closes() {
    let now = Instant::now();
    let (mut state, platform) = scenario_state(now);
    platform.log.borrow_mut().fail_save = true;
    open(&mut state);

    type_text(&mut state, "download");
    handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
    assert!(platform.log.borrow().saved.is_empty());

    state.tick(now + Duration::from_millis(200));
    assert!(!state.command_menu.is_open());
}

#[test]
fn test_download_saves_generated_resume() {
    let now = Instant::now();
    let (mut state, platform) = scenario_state(now);
    open(&mut state);

    type_text(&mut state, "download");
    handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();

    assert_eq!(platform.log.borrow().saved, ["casey-morgan-resume.md"]);
    assert!(state
        .announcer
        .current()
        .is_some_and(|m| m.contains("casey-morgan-resume.md")));
}

#[test]
fn test_scroll_command_scrolls_then_closes() {
    let now = Instant::now();
    let (mut state, _platform) = scenario_state(now);
    state.set_area(ratatui::layout::Rect::new(0, 0, 100, 10));
    open(&mut state);

    type_text(&mut state, "go to skills");
    handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();

    let page = state.page();
    let expected = page
        .anchor_offset(Anchor::Skills)
        .unwrap()
        .min(page.max_offset(state.viewport_height()));
    assert_eq!(state.scroll.offset(), expected);
    assert!(state.command_menu.is_open());

    state.tick(now + Duration::from_millis(100));
    assert!(state.command_menu.is_open());
    state.tick(now + Duration::from_millis(200));
    assert!(!state.command_menu.is_open());
}

#[test]
fn test_missing_anchor_leaves_palette_open() {
    let now = Instant::now();
    let mut resume = scenario_resume();
    resume.skills.clear();
    let (mut state, _platform) = state_with(resume, Box::new(MemoryPreferenceStore::new()), now);
    open(&mut state);

    type_text(&mut state, "go to skills");
    handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();

    state.tick(now + Duration::from_millis(1000));
    assert!(state.command_menu.is_open());
    assert!(state.palette.as_ref().is_some_and(|p| !p.is_closing()));
    assert_eq!(state.scroll.offset(), 0);
}

#[test]
fn test_open_link_uses_platform() {
    let now = Instant::now();
    let (mut state, platform) = scenario_state(now);
    open(&mut state);

    type_text(&mut state, "open github");
    handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
    assert_eq!(platform.log.borrow().opened, ["https://github.com/casey"]);

    state.tick(now + Duration::from_millis(200));
    assert!(!state.command_menu.is_open());
}

#[test]
fn test_clicking_a_row_executes_it() {
    let now = Instant::now();
    let (mut state, _platform) = scenario_state(now);
    open(&mut state);
    type_text(&mut state, "theme");

    // Row 0 is the "Preferences" heading, row 1 the toggle
    let layout = palette_layout(state.area);
    handle_mouse_event(&mut state, click(layout.list.x + 3, layout.list.y + 1)).unwrap();
    assert_eq!(state.theme_store.mode(), ThemeMode::Dark);

    state.tick(now + Duration::from_millis(200));
    assert!(!state.command_menu.is_open());
}

#[test]
fn test_input_ignored_while_closing() {
    let now = Instant::now();
    let (mut state, platform) = scenario_state(now);
    open(&mut state);

    type_text(&mut state, "open github");
    handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
    handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
    assert_eq!(platform.log.borrow().opened.len(), 1);
}

#[test]
fn test_command_trigger_click_opens_menu() {
    let now = Instant::now();
    let (mut state, _platform) = scenario_state(now);

    state.tick(now + Duration::from_millis(800));
    assert_eq!(state.command_trigger.phase(), TriggerPhase::Visible);

    let rect = command_trigger_rect(state.page_area());
    handle_mouse_event(&mut state, click(rect.x + 1, rect.y + 1)).unwrap();
    assert!(state.command_menu.is_open());

    // Acknowledged: no idle pulse afterwards
    handle_key_event(&mut state, key(KeyCode::Esc)).unwrap();
    state.tick(now + Duration::from_millis(5000));
    assert_eq!(state.command_trigger.phase(), TriggerPhase::Visible);
}

#[test]
fn test_tooltip_shows_after_hover_delay() {
    let now = Instant::now();
    let (mut state, _platform) = scenario_state(now);
    state.tick(now + Duration::from_millis(800));

    let rect = command_trigger_rect(state.page_area());
    state.now = now + Duration::from_millis(900);
    handle_mouse_event(&mut state, hover(rect.x + 1, rect.y + 1)).unwrap();
    assert!(state.tooltip.is_hovered());

    state.tick(now + Duration::from_millis(1200));
    assert!(!state.tooltip.is_visible());
    state.tick(now + Duration::from_millis(1350));
    assert!(state.tooltip.is_visible());

    handle_mouse_event(&mut state, hover(0, 0)).unwrap();
    assert!(!state.tooltip.is_visible());
}

#[test]
fn test_copy_without_clipboard_skips_platform() {
    let now = Instant::now();
    let platform = fixtures::RecordingPlatform::new();
    {
        let mut log = platform.log.borrow_mut();
        log.fail_copy = true;
        log.reduced_motion = Some(true);
    }
    let mut state = AppState::new(
        scenario_resume(),
        termfolio::config::Config::new(),
        Box::new(platform.clone()),
        Box::new(MemoryPreferenceStore::new()),
        now,
    );
    assert!(!state.capabilities.clipboard);
    open(&mut state);

    type_text(&mut state, "copy email");
    handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();

    assert!(platform.log.borrow().copied.is_empty());
    assert_eq!(
        state.announcer.current(),
        Some("Clipboard unavailable: casey@example.com")
    );
    state.tick(now + Duration::from_millis(200));
    assert!(!state.command_menu.is_open());
}
