//! Terminal user interface: `AppState`, the event loop and rendering.
//!
//! `AppState` owns every store and controller. Input handlers mutate it,
//! `tick` advances timers and viewport observation, and `render` is a pure
//! function of it.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

pub mod component;
pub mod floating_view;
pub mod handlers;
pub mod page;
pub mod palette_view;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::branding::resume_file_name;
use crate::config::Config;
use crate::controllers::command_palette::{
    ACTION_CLOSE_DELAY, COPY_CONFIRMATION_DWELL, SCROLL_CLOSE_DELAY,
};
use crate::controllers::scroll::{center_offset, intersects, is_fully_visible};
use crate::controllers::timeline::announcement;
use crate::controllers::{
    default_commands, Anchor, Announcer, CommandAction, CommandPalette, FloatingTrigger,
    PageScroll, SkillsFilterController, TimelineController, TimelineTransition, Tooltip,
    TriggerKind,
};
use crate::models::{Resume, SkillCategory};
use crate::platform::{Capabilities, Platform, ResumeAsset};
use crate::shortcuts::{ShortcutContext, ShortcutRegistry};
use crate::state::{
    CommandMenuStore, PreferenceStore, ReducedMotionObserver, ThemeMode, ThemeStore,
    ViewTransitionRunner,
};
use crate::timers::Deadline;

pub use component::Component;
pub use page::{build_page, Page};
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Frame size assumed until the terminal reports one.
const DEFAULT_AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 100,
    height: 30,
};

/// Which part of the page receives context keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusArea {
    /// Scrolling only
    #[default]
    Page,
    /// Timeline entry navigation
    Timeline,
    /// Skill filter chips
    Skills,
}

impl FocusArea {
    /// Focus order for Tab.
    pub const ALL: [Self; 3] = [Self::Page, Self::Timeline, Self::Skills];

    /// Shortcut context consulted after the global one.
    #[must_use]
    pub const fn context(self) -> ShortcutContext {
        match self {
            Self::Page => ShortcutContext::Page,
            Self::Timeline => ShortcutContext::Timeline,
            Self::Skills => ShortcutContext::Skills,
        }
    }

    /// Status bar label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Page => "Page",
            Self::Timeline => "Timeline",
            Self::Skills => "Skills",
        }
    }
}

/// Application state
pub struct AppState {
    // Content
    /// Loaded résumé
    pub resume: Resume,
    /// User configuration
    pub config: Config,

    // Host integration
    /// Startup capability snapshot
    pub capabilities: Capabilities,
    /// Clipboard, opener and downloads
    pub platform: Box<dyn Platform>,

    // Stores
    /// Light/dark preference
    pub theme_store: ThemeStore,
    /// Command menu open flag
    pub command_menu: CommandMenuStore,
    /// Reduced-motion preference
    pub motion: ReducedMotionObserver,
    /// Cross-fade wrapper for theme changes
    pub transition: ViewTransitionRunner,

    // Controllers
    /// Palette state, present exactly while the command menu is open
    pub palette: Option<CommandPalette>,
    /// Experience timeline
    pub timeline: TimelineController,
    /// Skills filter and bar reveal
    pub skills: SkillsFilterController,
    /// Floating "scroll to experience" button
    pub scroll_cue: FloatingTrigger,
    /// Floating command menu button
    pub command_trigger: FloatingTrigger,
    /// Command trigger tooltip
    pub tooltip: Tooltip,
    /// Status line announcements
    pub announcer: Announcer,
    /// Page scroll position
    pub scroll: PageScroll,
    /// Focused page area
    pub focus: FocusArea,

    // System
    /// Last known frame size
    pub area: Rect,
    /// Key bindings, built once
    pub shortcuts: ShortcutRegistry,
    /// Time of the latest tick
    pub now: Instant,
    /// Set when the user asked to quit
    pub should_quit: bool,
    os_theme_poll: Deadline,
}

impl AppState {
    /// Builds the application state and probes the platform once.
    pub fn new(
        resume: Resume,
        config: Config,
        platform: Box<dyn Platform>,
        store: Box<dyn PreferenceStore>,
        now: Instant,
    ) -> Self {
        let capabilities = Capabilities::detect(platform.as_ref());
        let theme_store = ThemeStore::initialize(store, platform.os_prefers_dark());
        let motion =
            ReducedMotionObserver::new(config.ui.reduced_motion, platform.prefers_reduced_motion());
        tracing::info!(
            theme = %theme_store.mode(),
            reduced_motion = motion.reduced(),
            "Initialized application state"
        );

        let (scroll_cue, command_trigger) = if config.ui.floating_triggers {
            (
                FloatingTrigger::new(TriggerKind::ScrollCue, now),
                FloatingTrigger::new(TriggerKind::CommandTrigger, now),
            )
        } else {
            (
                FloatingTrigger::disabled(TriggerKind::ScrollCue, now),
                FloatingTrigger::disabled(TriggerKind::CommandTrigger, now),
            )
        };

        let os_theme_poll = if capabilities.os_theme {
            Deadline::after(now, Duration::from_millis(config.ui.os_theme_poll_ms))
        } else {
            Deadline::idle()
        };

        Self {
            timeline: TimelineController::new(&resume.experience),
            skills: SkillsFilterController::new(&resume.skills),
            resume,
            transition: ViewTransitionRunner::new(capabilities.transitions),
            capabilities,
            platform,
            theme_store,
            command_menu: CommandMenuStore::new(),
            motion,
            palette: None,
            scroll_cue,
            command_trigger,
            tooltip: Tooltip::default(),
            announcer: Announcer::new(),
            scroll: PageScroll::new(),
            focus: FocusArea::Page,
            area: DEFAULT_AREA,
            shortcuts: ShortcutRegistry::new(),
            now,
            should_quit: false,
            os_theme_poll,
            config,
        }
    }

    /// Active palette.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        self.theme_store.theme()
    }

    /// Frame area minus the status bar.
    #[must_use]
    pub fn page_area(&self) -> Rect {
        Rect {
            height: self.area.height.saturating_sub(1),
            ..self.area
        }
    }

    /// Visible page lines.
    #[must_use]
    pub fn viewport_height(&self) -> u16 {
        self.page_area().height
    }

    /// Lays out the page for the current frame width.
    #[must_use]
    pub fn page(&self) -> Page {
        build_page(self, self.page_area().width)
    }

    /// Records a new frame size.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Advances timers and viewport observation to `now`.
    pub fn tick(&mut self, now: Instant) {
        self.now = now;

        self.transition.tick(now);
        self.announcer.tick(now);
        self.tooltip.tick(now);
        self.scroll_cue.tick(now);
        self.command_trigger.tick(now);
        self.scroll.tick(now);

        if self.palette.as_mut().is_some_and(|palette| palette.tick(now)) {
            self.close_command_menu();
        }

        if self.os_theme_poll.fire(now) {
            self.poll_preferences();
            self.os_theme_poll
                .arm(now, Duration::from_millis(self.config.ui.os_theme_poll_ms));
        }

        self.observe_viewport();
    }

    /// Re-reads the OS theme and reduced-motion preferences.
    fn poll_preferences(&mut self) {
        if let Some(dark) = self.platform.os_prefers_dark() {
            if self.theme_store.on_os_preference_changed(dark) {
                tracing::info!(theme = %self.theme_store.mode(), "Followed OS theme change");
            }
        }
        if self.motion.refresh(self.platform.prefers_reduced_motion()) {
            tracing::info!(reduced = self.motion.reduced(), "Reduced motion preference changed");
        }
    }

    /// Viewport intersection: hides the scroll cue once the timeline shows
    /// and starts bar fills for skill rows scrolled into view.
    fn observe_viewport(&mut self) {
        let page = self.page();
        let height = self.viewport_height();
        self.scroll.clamp(page.max_offset(height));
        let offset = self.scroll.offset();

        if let Some(range) = page.section_range(Anchor::Timeline) {
            if intersects(&range, offset, height) {
                self.scroll_cue.target_in_view(self.now);
            }
        }
        for row in &page.skill_rows {
            if intersects(&(row.line..row.line + 1), offset, height) {
                self.skills.mark_revealed(&row.id, self.now);
            }
        }
    }

    // === Command menu ===

    /// Opens the command menu.
    pub fn open_command_menu(&mut self) {
        self.command_menu.set_open(true);
        self.sync_palette();
    }

    /// Flips the command menu.
    pub fn toggle_command_menu(&mut self) {
        self.command_menu.toggle();
        self.sync_palette();
    }

    /// Closes the command menu and drops the palette with any pending close.
    pub fn close_command_menu(&mut self) {
        self.command_menu.set_open(false);
        self.sync_palette();
    }

    fn sync_palette(&mut self) {
        match (self.command_menu.is_open(), self.palette.is_some()) {
            (true, false) => {
                tracing::debug!("Command menu opened");
                self.palette = Some(CommandPalette::new(default_commands(&self.resume.user)));
            }
            (false, true) => {
                tracing::debug!("Command menu closed");
                self.palette = None;
            }
            _ => {}
        }
    }

    fn schedule_palette_close(&mut self, delay: Duration) {
        if let Some(palette) = self.palette.as_mut() {
            palette.schedule_close(self.now, delay);
        }
    }

    /// Runs a palette command and schedules the palette close.
    ///
    /// A scroll to an anchor that is not on the page leaves the palette open.
    pub fn execute_command(&mut self, action: CommandAction) {
        tracing::debug!(?action, "Executing command");
        let now = self.now;

        match action {
            CommandAction::CopyEmail => {
                let email = self.resume.user.email.clone();
                let copied = if self.capabilities.clipboard {
                    self.platform.copy_text(&email)
                } else {
                    Err(anyhow::anyhow!("No clipboard on this system"))
                };
                match copied {
                    Ok(()) => {
                        if let Some(palette) = self.palette.as_mut() {
                            palette.show_confirmation("Copied to clipboard");
                        }
                        self.announcer.announce(now, "Email copied to clipboard");
                        self.schedule_palette_close(COPY_CONFIRMATION_DWELL);
                    }
                    Err(e) => {
                        tracing::error!("Failed to copy email: {e:#}");
                        self.announcer
                            .announce(now, format!("Clipboard unavailable: {email}"));
                        self.schedule_palette_close(ACTION_CLOSE_DELAY);
                    }
                }
            }
            CommandAction::ScrollTo(anchor) => {
                if self.scroll_to_anchor(anchor) {
                    self.schedule_palette_close(SCROLL_CLOSE_DELAY);
                } else {
                    tracing::debug!("Anchor {anchor} is not on the page");
                }
            }
            CommandAction::OpenLink(url) => {
                if let Err(e) = self.platform.open_url(&url) {
                    tracing::error!("Failed to open {url}: {e:#}");
                }
                self.schedule_palette_close(ACTION_CLOSE_DELAY);
            }
            CommandAction::DownloadResume => {
                let asset = self.resume_asset();
                match self.platform.save_resume(&asset) {
                    Ok(path) => {
                        tracing::info!("Saved résumé to {}", path.display());
                        self.announcer
                            .announce(now, format!("Saved résumé to {}", path.display()));
                    }
                    Err(e) => tracing::error!("Failed to save résumé: {e:#}"),
                }
                self.schedule_palette_close(ACTION_CLOSE_DELAY);
            }
            CommandAction::ToggleTheme => {
                self.toggle_theme();
                self.schedule_palette_close(ACTION_CLOSE_DELAY);
            }
        }
    }

    /// Asset offered for download: the configured file, else a Markdown export.
    #[must_use]
    pub fn resume_asset(&self) -> ResumeAsset {
        match &self.config.paths.resume_asset {
            Some(path) => ResumeAsset::File(path.clone()),
            None => ResumeAsset::Generated {
                file_name: resume_file_name(&self.resume.user.name),
                contents: self.resume.to_markdown(),
            },
        }
    }

    // === Floating triggers ===

    /// Scroll cue click: scroll to the experience section.
    pub fn click_scroll_cue(&mut self) {
        if self.scroll_cue.click(self.now) {
            self.scroll_to_anchor(Anchor::Timeline);
        }
    }

    /// Command trigger click: open the command menu.
    pub fn click_command_trigger(&mut self) {
        if self.command_trigger.click(self.now) {
            self.tooltip.hover_leave();
            self.open_command_menu();
        }
    }

    // === Scrolling ===

    /// Smooth-scrolls to a section. Returns `false` when the section is absent.
    pub fn scroll_to_anchor(&mut self, anchor: Anchor) -> bool {
        let page = self.page();
        let Some(offset) = page.anchor_offset(anchor) else {
            return false;
        };
        let max = page.max_offset(self.viewport_height());
        self.scroll
            .smooth_to(self.now, offset, max, self.motion.reduced());
        true
    }

    /// Scrolls to the end of the page.
    pub fn scroll_to_bottom(&mut self) {
        let max = self.page().max_offset(self.viewport_height());
        self.scroll.smooth_to(self.now, max, max, self.motion.reduced());
    }

    /// Moves the page by `delta` lines immediately.
    pub fn scroll_by(&mut self, delta: i32) {
        let max = self.page().max_offset(self.viewport_height());
        self.scroll.scroll_by(delta, max);
    }

    /// Centres an entry's card when it is not fully visible.
    pub fn reveal_entry(&mut self, id: &str) {
        let page = self.page();
        let Some(span) = page.entry(id) else {
            return;
        };
        let height = self.viewport_height();
        if is_fully_visible(&span.lines, self.scroll.target(), height) {
            return;
        }
        let max = page.max_offset(height);
        let target = center_offset(&span.lines, height, max);
        self.scroll
            .smooth_to(self.now, target, max, self.motion.reduced());
    }

    // === Timeline ===

    /// Expands or collapses an entry by id. Unknown ids are ignored.
    pub fn toggle_entry(&mut self, id: &str) {
        let transition = self.timeline.toggle(id);
        self.apply_timeline_transition(transition);
    }

    /// Expands or collapses the focused entry.
    pub fn toggle_focused_entry(&mut self) {
        let transition = self.timeline.toggle_focused();
        self.apply_timeline_transition(transition);
    }

    /// Collapses the expanded entry, if any.
    pub fn collapse_timeline(&mut self) {
        let transition = self.timeline.collapse();
        self.apply_timeline_transition(transition);
    }

    fn apply_timeline_transition(&mut self, transition: Option<TimelineTransition>) {
        let Some(transition) = transition else {
            return;
        };
        if let Some(entry) = self.resume.entry(&transition.id) {
            self.announcer
                .announce(self.now, announcement(entry, transition.expanded));
        }
        if transition.expanded {
            self.reveal_entry(&transition.id);
        }
    }

    // === Skills ===

    /// Applies a filter chip; the same category twice shows all skills again.
    pub fn toggle_skill_category(&mut self, category: Option<SkillCategory>) {
        if self.skills.toggle_category(category) {
            let label = self.skills.active().map_or("All", SkillCategory::label);
            let message = format!(
                "Showing {label} skills ({} of {})",
                self.skills.filtered().len(),
                self.skills.total()
            );
            self.announcer.announce(self.now, message);
        }
    }

    // === Theme and focus ===

    /// Flips light/dark through the view transition.
    pub fn toggle_theme(&mut self) {
        let reduced = self.motion.reduced();
        let theme_store = &mut self.theme_store;
        self.transition.run(self.now, reduced, || theme_store.toggle());

        let mode = self.theme_store.mode();
        tracing::info!(theme = %mode, "Theme toggled");
        self.announcer.announce(self.now, format!("Switched to {mode} theme"));
    }

    /// Sets an explicit theme.
    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.theme_store.set_mode(mode);
    }

    fn is_focusable(&self, area: FocusArea) -> bool {
        match area {
            FocusArea::Page => true,
            FocusArea::Timeline => !self.resume.experience.is_empty(),
            FocusArea::Skills => !self.resume.skills.is_empty(),
        }
    }

    /// Moves focus to the next (or previous) area that has content.
    pub fn cycle_focus(&mut self, forward: bool) {
        let order: Vec<FocusArea> = FocusArea::ALL
            .into_iter()
            .filter(|area| self.is_focusable(*area))
            .collect();
        let len = order.len();
        let index = order.iter().position(|area| *area == self.focus).unwrap_or(0);
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        self.focus = order.get(next).copied().unwrap_or_default();

        match self.focus {
            FocusArea::Timeline => {
                if let Some(id) = self.timeline.focused_id().map(str::to_string) {
                    self.reveal_entry(&id);
                }
            }
            FocusArea::Skills => {
                self.scroll_to_anchor(Anchor::Skills);
            }
            FocusArea::Page => {}
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(state.config.ui.tick_rate_ms);

    loop {
        let size = terminal.size().context("Failed to read terminal size")?;
        state.set_area(Rect::new(0, 0, size.width, size.height));

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events, waking at least once per tick
        if event::poll(tick_rate)? {
            let quit = match event::read()? {
                Event::Key(key) => handle_key_event(state, key)?,
                Event::Mouse(mouse) => handlers::handle_mouse_event(state, mouse)?,
                // Resize and focus changes re-render on the next loop
                _ => false,
            };
            if quit {
                break;
            }
        }

        state.tick(Instant::now());

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input events. Returns `Ok(true)` to quit.
///
/// Only presses count, so one physical key triggers one action.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.kind != KeyEventKind::Press {
        return Ok(false);
    }

    if state.command_menu.is_open() {
        handlers::handle_palette_input(state, key)
    } else {
        handlers::handle_main_input(state, key)
    }
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    let theme = state.theme();

    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(f.area());

    render_page(f, chunks[0], state);

    let reduced = state.motion.reduced();
    floating_view::render_scroll_cue(f, chunks[0], &state.scroll_cue, state.now, reduced, theme);
    floating_view::render_command_trigger(
        f,
        chunks[0],
        &state.command_trigger,
        &state.tooltip,
        state.now,
        reduced,
        theme,
    );

    StatusBar::render(f, chunks[1], state, theme);

    if let Some(palette) = &state.palette {
        palette.render(f, f.area(), theme);
    }
}

/// Render the scrolled page, dimmed while a theme transition runs
fn render_page(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = state.theme();
    let page = build_page(state, area.width);

    let mut style = Style::default().fg(theme.text).bg(theme.background);
    if state.transition.is_transitioning() {
        style = style.add_modifier(Modifier::DIM);
    }

    let paragraph = Paragraph::new(page.lines)
        .style(style)
        .scroll((state.scroll.offset(), 0));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MemoryPreferenceStore;
    use anyhow::bail;
    use std::path::PathBuf;

    struct NullPlatform;

    impl Platform for NullPlatform {
        fn clipboard_available(&self) -> bool {
            false
        }
        fn supports_transitions(&self) -> bool {
            false
        }
        fn os_prefers_dark(&self) -> Option<bool> {
            None
        }
        fn prefers_reduced_motion(&self) -> Option<bool> {
            None
        }
        fn copy_text(&mut self, _text: &str) -> Result<()> {
            bail!("no clipboard")
        }
        fn open_url(&mut self, _url: &str) -> Result<()> {
            Ok(())
        }
        fn save_resume(&mut self, _asset: &ResumeAsset) -> Result<PathBuf> {
            bail!("read-only")
        }
    }

    fn state() -> AppState {
        AppState::new(
            Resume::embedded().unwrap(),
            Config::new(),
            Box::new(NullPlatform),
            Box::new(MemoryPreferenceStore::new()),
            Instant::now(),
        )
    }

    #[test]
    fn test_new_state_defaults() {
        let state = state();
        assert_eq!(state.theme_store.mode(), ThemeMode::Light);
        assert!(!state.command_menu.is_open());
        assert!(state.palette.is_none());
        assert_eq!(state.focus, FocusArea::Page);
        assert!(!state.transition.supported());
    }

    #[test]
    fn test_palette_follows_menu_flag() {
        let mut state = state();
        state.toggle_command_menu();
        assert!(state.command_menu.is_open());
        assert!(state.palette.is_some());

        state.toggle_command_menu();
        assert!(!state.command_menu.is_open());
        assert!(state.palette.is_none());
    }

    #[test]
    fn test_focus_cycle_wraps() {
        let mut state = state();
        state.cycle_focus(true);
        assert_eq!(state.focus, FocusArea::Timeline);
        state.cycle_focus(true);
        assert_eq!(state.focus, FocusArea::Skills);
        state.cycle_focus(true);
        assert_eq!(state.focus, FocusArea::Page);
        state.cycle_focus(false);
        assert_eq!(state.focus, FocusArea::Skills);
    }

    #[test]
    fn test_generated_resume_asset() {
        let state = state();
        match state.resume_asset() {
            ResumeAsset::Generated { file_name, contents } => {
                assert_eq!(file_name, resume_file_name(&state.resume.user.name));
                assert!(contents.contains(&state.resume.user.name));
            }
            ResumeAsset::File(_) => panic!("expected generated asset"),
        }
    }

    #[test]
    fn test_page_has_every_section() {
        let state = state();
        let page = state.page();
        for anchor in Anchor::ALL {
            assert!(page.anchor_offset(anchor).is_some(), "{anchor}");
        }
        assert_eq!(page.entries.len(), state.resume.experience.len());
        assert_eq!(page.chips.len(), 4);
    }

    #[test]
    fn test_scroll_to_anchor_with_reduced_motion_jumps() {
        let mut state = state();
        state.motion = ReducedMotionObserver::new(crate::config::MotionPreference::On, None);
        assert!(state.scroll_to_anchor(Anchor::Skills));

        let page = state.page();
        let max = page.max_offset(state.viewport_height());
        let expected = page.anchor_offset(Anchor::Skills).unwrap().min(max);
        assert_eq!(state.scroll.offset(), expected);
    }

    #[test]
    fn test_filter_announces() {
        let mut state = state();
        state.toggle_skill_category(Some(SkillCategory::Leadership));
        assert_eq!(state.skills.active(), Some(SkillCategory::Leadership));
        assert!(state
            .announcer
            .current()
            .is_some_and(|m| m.starts_with("Showing Leadership skills")));

        state.toggle_skill_category(Some(SkillCategory::Leadership));
        assert_eq!(state.skills.active(), None);
    }
}
