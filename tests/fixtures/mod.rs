//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test file uses every fixture

use anyhow::{bail, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;
use termfolio::config::Config;
use termfolio::models::Resume;
use termfolio::platform::{Platform, ResumeAsset};
use termfolio::state::{MemoryPreferenceStore, PreferenceStore};
use termfolio::tui::AppState;

/// Two-entry résumé used by the timeline scenario.
pub const SCENARIO_RESUME: &str = r#"
[user]
name = "Casey Morgan"
title = "Product Manager"
bio = "Builds products around language models."
email = "casey@example.com"
location = "San Francisco, CA"

[[user.social]]
label = "GitHub"
url = "https://github.com/casey"
icon = "github"

[[experience]]
id = "exp-1"
title = "AI Product Manager"
company = "Anthropic"
location = "San Francisco, CA"
date = "2023 - Present"
description = "Product for model-backed developer tools."
icon = "brain"
achievements = ["Shipped the console evaluation view"]
technologies = ["Claude", "Prompt caching"]

[[experience.projects]]
name = "Workbench"
description = "Prompt iteration environment."

[[experience]]
id = "exp-2"
title = "Senior Product Manager"
company = "ForeSee"
location = "Ann Arbor, MI"
date = "April 2017 - 2022"
description = "Customer experience analytics."
icon = "chart"
achievements = ["Grew the analytics tier"]
technologies = ["Hadoop", "Tableau"]

[[experience.projects]]
name = "Pulse Dashboards"
description = "Real-time satisfaction reporting."

[[skills]]
id = "llm"
name = "LLM Evaluation"
level = 92

[[skills]]
id = "rust"
name = "Rust"
level = 75

[[skills]]
id = "teams"
name = "Team Leadership"
level = 85
"#;

/// Parses [`SCENARIO_RESUME`].
pub fn scenario_resume() -> Resume {
    Resume::from_toml_str(SCENARIO_RESUME).expect("scenario résumé parses")
}

/// Side effects seen by [`RecordingPlatform`].
#[derive(Debug, Default)]
pub struct PlatformLog {
    /// Text placed on the clipboard
    pub copied: Vec<String>,
    /// URLs opened
    pub opened: Vec<String>,
    /// File names of saved résumé assets
    pub saved: Vec<String>,
    /// Make `copy_text` fail
    pub fail_copy: bool,
    /// Make `open_url` fail
    pub fail_open: bool,
    /// Make `save_resume` fail
    pub fail_save: bool,
    /// Reported OS dark preference
    pub os_dark: Option<bool>,
    /// Reported reduced-motion preference
    pub reduced_motion: Option<bool>,
}

/// Fake platform that records side effects into a shared log.
#[derive(Debug, Clone, Default)]
pub struct RecordingPlatform {
    pub log: Rc<RefCell<PlatformLog>>,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Platform for RecordingPlatform {
    fn clipboard_available(&self) -> bool {
        !self.log.borrow().fail_copy
    }

    fn supports_transitions(&self) -> bool {
        false
    }

    fn os_prefers_dark(&self) -> Option<bool> {
        self.log.borrow().os_dark
    }

    fn prefers_reduced_motion(&self) -> Option<bool> {
        self.log.borrow().reduced_motion
    }

    fn copy_text(&mut self, text: &str) -> Result<()> {
        let mut log = self.log.borrow_mut();
        if log.fail_copy {
            bail!("clipboard unavailable");
        }
        log.copied.push(text.to_string());
        Ok(())
    }

    fn open_url(&mut self, url: &str) -> Result<()> {
        let mut log = self.log.borrow_mut();
        if log.fail_open {
            bail!("no opener");
        }
        log.opened.push(url.to_string());
        Ok(())
    }

    fn save_resume(&mut self, asset: &ResumeAsset) -> Result<PathBuf> {
        let mut log = self.log.borrow_mut();
        if log.fail_save {
            bail!("downloads directory is read-only");
        }
        let name = asset.file_name();
        log.saved.push(name.clone());
        Ok(PathBuf::from("/downloads").join(name))
    }
}

/// Builds app state over the scenario résumé with a recording platform.
///
/// Returns the platform handle so tests can inspect or steer it.
pub fn scenario_state(now: Instant) -> (AppState, RecordingPlatform) {
    state_with(scenario_resume(), Box::new(MemoryPreferenceStore::new()), now)
}

/// Builds app state with reduced motion so scrolls land immediately.
pub fn state_with(
    resume: Resume,
    store: Box<dyn PreferenceStore>,
    now: Instant,
) -> (AppState, RecordingPlatform) {
    let platform = RecordingPlatform::new();
    platform.log.borrow_mut().reduced_motion = Some(true);
    let state = AppState::new(
        resume,
        Config::new(),
        Box::new(platform.clone()),
        store,
        now,
    );
    (state, platform)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn super_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::SUPER)
}

pub fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

pub fn hover(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Moved,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Screen position of an entry's rail icon, scrolling it into view first.
pub fn icon_position(state: &mut AppState, id: &str) -> (u16, u16) {
    let page = state.page();
    let span = page.entry(id).expect("entry on page").clone();
    let max = page.max_offset(state.viewport_height());
    state.scroll.jump_to(span.lines.start, max);

    let row = state.page_area().y + (span.lines.start - state.scroll.offset());
    (span.icon_column, row)
}
