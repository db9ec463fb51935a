//! Light/dark theme flag with persistence.
//!
//! The store is the single writer of the theme. Every mutation writes the
//! preference first and then swaps the applied palette, inside one `&mut self`
//! call, so no caller can observe the two out of step.

use std::fmt;

use crate::tui::theme::Theme;

use super::PreferenceStore;

/// Preference key holding `"light"` or `"dark"`.
pub const THEME_KEY: &str = "theme";

/// Theme mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    /// Light background
    #[default]
    Light,
    /// Dark background
    Dark,
}

impl ThemeMode {
    /// Persisted representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a persisted value. Unknown values are treated as absent.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Maps an OS "prefers dark" flag to a mode.
    #[must_use]
    pub const fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owner of the theme mode, its persisted value and the applied palette.
pub struct ThemeStore {
    mode: ThemeMode,
    applied: Theme,
    store: Box<dyn PreferenceStore>,
    explicit: bool,
}

impl ThemeStore {
    /// Resolves the starting mode: persisted value, then OS preference, then light.
    #[must_use]
    pub fn initial_mode(store: &dyn PreferenceStore, os_prefers_dark: Option<bool>) -> ThemeMode {
        store
            .get(THEME_KEY)
            .as_deref()
            .and_then(ThemeMode::parse)
            .or_else(|| os_prefers_dark.map(ThemeMode::from_dark))
            .unwrap_or_default()
    }

    /// Builds the store and applies the initial palette.
    #[must_use]
    pub fn initialize(store: Box<dyn PreferenceStore>, os_prefers_dark: Option<bool>) -> Self {
        let explicit = store
            .get(THEME_KEY)
            .as_deref()
            .and_then(ThemeMode::parse)
            .is_some();
        let mode = Self::initial_mode(store.as_ref(), os_prefers_dark);
        tracing::debug!(%mode, explicit, "Initialized theme");

        Self {
            mode,
            applied: Theme::from_mode(mode),
            store,
            explicit,
        }
    }

    /// Flips between light and dark.
    pub fn toggle(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// Sets the mode explicitly and persists it.
    ///
    /// A failed write is logged and the in-memory change still applies; the
    /// choice then lasts for the session only.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        if let Err(err) = self.store.set(THEME_KEY, mode.as_str()) {
            tracing::warn!("Failed to persist theme preference: {err:#}");
        }
        self.explicit = true;
        self.mode = mode;
        self.applied = Theme::from_mode(mode);
    }

    /// Follows an OS theme change unless the user has chosen a theme.
    ///
    /// Returns `true` when the applied mode changed.
    pub fn on_os_preference_changed(&mut self, prefers_dark: bool) -> bool {
        if self.explicit {
            return false;
        }
        let mode = ThemeMode::from_dark(prefers_dark);
        if mode == self.mode {
            return false;
        }
        tracing::debug!(%mode, "Following OS theme change");
        self.mode = mode;
        self.applied = Theme::from_mode(mode);
        true
    }

    /// Whether an explicit choice has been made (persisted or this session).
    #[must_use]
    pub const fn has_explicit_preference(&self) -> bool {
        self.explicit
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Whether the dark palette is applied.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    /// The applied palette.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.applied
    }

    /// The backing preference store.
    #[must_use]
    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }

    /// Releases the backing store, e.g. to re-initialize from it.
    #[must_use]
    pub fn into_store(self) -> Box<dyn PreferenceStore> {
        self.store
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("mode", &self.mode)
            .field("explicit", &self.explicit)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MemoryPreferenceStore;

    fn empty() -> Box<dyn PreferenceStore> {
        Box::new(MemoryPreferenceStore::new())
    }

    #[test]
    fn test_initial_mode_order() {
        let stored = MemoryPreferenceStore::with_entry(THEME_KEY, "light");
        assert_eq!(ThemeStore::initial_mode(&stored, Some(true)), ThemeMode::Light);

        let none = MemoryPreferenceStore::new();
        assert_eq!(ThemeStore::initial_mode(&none, Some(true)), ThemeMode::Dark);
        assert_eq!(ThemeStore::initial_mode(&none, None), ThemeMode::Light);
    }

    #[test]
    fn test_garbage_value_ignored() {
        let stored = MemoryPreferenceStore::with_entry(THEME_KEY, "purple");
        assert_eq!(ThemeStore::initial_mode(&stored, Some(true)), ThemeMode::Dark);
    }

    #[test]
    fn test_persistence_round_trip() {
        let mut themes = ThemeStore::initialize(empty(), Some(true));
        assert_eq!(themes.mode(), ThemeMode::Dark);
        assert_eq!(themes.theme(), &Theme::dark());

        themes.toggle();
        assert_eq!(themes.mode(), ThemeMode::Light);
        assert_eq!(themes.theme(), &Theme::light());
        assert_eq!(themes.store().get(THEME_KEY), Some("light".to_string()));

        let reloaded = ThemeStore::initialize(themes.into_store(), Some(true));
        assert_eq!(reloaded.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_write_failure_still_flips() {
        let mut themes = ThemeStore::initialize(Box::new(MemoryPreferenceStore::read_only()), None);
        themes.toggle();
        assert!(themes.is_dark());
        assert_eq!(themes.theme(), &Theme::dark());
        assert_eq!(themes.store().get(THEME_KEY), None);
    }

    #[test]
    fn test_os_change_followed_until_explicit_choice() {
        let mut themes = ThemeStore::initialize(empty(), Some(false));
        assert!(themes.on_os_preference_changed(true));
        assert!(themes.is_dark());
        assert!(!themes.on_os_preference_changed(true));

        themes.set_mode(ThemeMode::Light);
        assert!(!themes.on_os_preference_changed(true));
        assert_eq!(themes.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_persisted_choice_is_sticky() {
        let stored = Box::new(MemoryPreferenceStore::with_entry(THEME_KEY, "dark"));
        let mut themes = ThemeStore::initialize(stored, Some(false));
        assert!(themes.has_explicit_preference());
        assert!(!themes.on_os_preference_changed(false));
        assert!(themes.is_dark());
    }
}
