//! Centralized shortcut and action system.
//!
//! Key events are mapped to [`Action`]s per [`ShortcutContext`]. The global
//! context is consulted first, then the focused area, then the page, so one
//! key press resolves to exactly one action.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Every action reachable from the keyboard outside the command palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === GLOBAL ===
    /// Open or close the command palette
    ToggleCommandMenu,

    // === PAGE ===
    /// Collapse the expanded entry
    Cancel,
    /// Switch light/dark
    ToggleTheme,
    /// Exit the application
    Quit,
    /// Cycle focus page → timeline → skills
    FocusNext,
    /// Cycle focus backwards
    FocusPrevious,
    /// Scroll one line up
    ScrollUp,
    /// Scroll one line down
    ScrollDown,
    /// Scroll one screen up
    PageUp,
    /// Scroll one screen down
    PageDown,
    /// Scroll to the top
    ScrollTop,
    /// Scroll to the bottom
    ScrollBottom,
    /// Show all skills
    FilterAll,
    /// Show AI & ML skills
    FilterAiMl,
    /// Show technical skills
    FilterTechnical,
    /// Show leadership skills
    FilterLeadership,

    // === TIMELINE ===
    /// Focus the previous entry
    PreviousEntry,
    /// Focus the next entry
    NextEntry,
    /// Expand or collapse the focused entry
    ToggleEntry,

    // === SKILLS ===
    /// Focus the chip to the left
    PreviousChip,
    /// Focus the chip to the right
    NextChip,
    /// Apply the focused chip
    ActivateChip,
}

impl Action {
    /// Stable action identifier.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::ToggleCommandMenu => "toggle_command_menu",

            Self::Cancel => "cancel",
            Self::ToggleTheme => "toggle_theme",
            Self::Quit => "quit",
            Self::FocusNext => "focus_next",
            Self::FocusPrevious => "focus_previous",
            Self::ScrollUp => "scroll_up",
            Self::ScrollDown => "scroll_down",
            Self::PageUp => "page_up",
            Self::PageDown => "page_down",
            Self::ScrollTop => "scroll_top",
            Self::ScrollBottom => "scroll_bottom",
            Self::FilterAll => "filter_all",
            Self::FilterAiMl => "filter_ai_ml",
            Self::FilterTechnical => "filter_technical",
            Self::FilterLeadership => "filter_leadership",

            Self::PreviousEntry => "previous_entry",
            Self::NextEntry => "next_entry",
            Self::ToggleEntry => "toggle_entry",

            Self::PreviousChip => "previous_chip",
            Self::NextChip => "next_chip",
            Self::ActivateChip => "activate_chip",
        }
    }
}

/// Where a binding applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutContext {
    /// Always active, checked first
    Global,
    /// Fallback for every focus area
    Page,
    /// Timeline has focus
    Timeline,
    /// Skills chip row has focus
    Skills,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Required modifiers, matched exactly
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// Built once when the app starts and kept for its lifetime.
#[derive(Debug, Clone)]
pub struct ShortcutRegistry {
    bindings: HashMap<(ShortcutContext, KeyBinding), Action>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_global_shortcuts();
        registry.register_page_shortcuts();
        registry.register_timeline_shortcuts();
        registry.register_skills_shortcuts();
        registry
    }

    fn register_global_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = ShortcutContext::Global;

        // Cmd arrives as SUPER on terminals that forward it
        self.register(ctx, K::Char('k'), M::CONTROL, Action::ToggleCommandMenu);
        self.register(ctx, K::Char('k'), M::SUPER, Action::ToggleCommandMenu);
    }

    fn register_page_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = ShortcutContext::Page;

        // === GENERAL ===
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
        self.register(ctx, K::Char('t'), M::NONE, Action::ToggleTheme);
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);

        // === FOCUS ===
        self.register(ctx, K::Tab, M::NONE, Action::FocusNext);
        self.register(ctx, K::BackTab, M::NONE, Action::FocusPrevious);
        self.register(ctx, K::BackTab, M::SHIFT, Action::FocusPrevious);

        // === SCROLLING ===
        self.register(ctx, K::Up, M::NONE, Action::ScrollUp);
        self.register(ctx, K::Down, M::NONE, Action::ScrollDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::ScrollUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::ScrollDown);
        self.register(ctx, K::PageUp, M::NONE, Action::PageUp);
        self.register(ctx, K::PageDown, M::NONE, Action::PageDown);
        self.register(ctx, K::Char(' '), M::NONE, Action::PageDown);
        self.register(ctx, K::Home, M::NONE, Action::ScrollTop);
        self.register(ctx, K::End, M::NONE, Action::ScrollBottom);
        self.register(ctx, K::Char('g'), M::NONE, Action::ScrollTop);
        self.register(ctx, K::Char('G'), M::SHIFT, Action::ScrollBottom);

        // === SKILL FILTERS ===
        self.register(ctx, K::Char('0'), M::NONE, Action::FilterAll);
        self.register(ctx, K::Char('1'), M::NONE, Action::FilterAiMl);
        self.register(ctx, K::Char('2'), M::NONE, Action::FilterTechnical);
        self.register(ctx, K::Char('3'), M::NONE, Action::FilterLeadership);
    }

    fn register_timeline_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = ShortcutContext::Timeline;

        self.register(ctx, K::Up, M::NONE, Action::PreviousEntry);
        self.register(ctx, K::Down, M::NONE, Action::NextEntry);
        self.register(ctx, K::Char('k'), M::NONE, Action::PreviousEntry);
        self.register(ctx, K::Char('j'), M::NONE, Action::NextEntry);
        self.register(ctx, K::Enter, M::NONE, Action::ToggleEntry);
        self.register(ctx, K::Char(' '), M::NONE, Action::ToggleEntry);
    }

    fn register_skills_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = ShortcutContext::Skills;

        self.register(ctx, K::Left, M::NONE, Action::PreviousChip);
        self.register(ctx, K::Right, M::NONE, Action::NextChip);
        self.register(ctx, K::Char('h'), M::NONE, Action::PreviousChip);
        self.register(ctx, K::Char('l'), M::NONE, Action::NextChip);
        self.register(ctx, K::Enter, M::NONE, Action::ActivateChip);
        self.register(ctx, K::Char(' '), M::NONE, Action::ActivateChip);
    }

    /// Register a shortcut binding.
    fn register(
        &mut self,
        context: ShortcutContext,
        code: KeyCode,
        modifiers: KeyModifiers,
        action: Action,
    ) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context, binding), action);
    }

    /// Look up an action in one context only.
    #[must_use]
    pub fn lookup(&self, context: ShortcutContext, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context, binding)).copied()
    }

    /// Resolves a key for the focused context: global, then `focused`, then page.
    #[must_use]
    pub fn resolve(&self, focused: ShortcutContext, event: KeyEvent) -> Option<Action> {
        self.lookup(ShortcutContext::Global, event)
            .or_else(|| self.lookup(focused, event))
            .or_else(|| self.lookup(ShortcutContext::Page, event))
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: ShortcutContext, event: KeyEvent, action: Action) -> bool {
        self.lookup(context, event) == Some(action)
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
