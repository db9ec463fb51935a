//! Open/closed flag of the command palette.

/// Visibility of the command menu.
///
/// Every mutation goes through [`CommandMenuStore::update`], which receives
/// the current value, so a toggle is always relative to the latest state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandMenuStore {
    is_open: bool,
}

impl CommandMenuStore {
    /// Creates a closed menu.
    #[must_use]
    pub const fn new() -> Self {
        Self { is_open: false }
    }

    /// Whether the menu is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Replaces the flag with a value derived from the current one.
    pub fn update(&mut self, f: impl FnOnce(bool) -> bool) {
        self.is_open = f(self.is_open);
    }

    /// Sets the flag.
    pub fn set_open(&mut self, open: bool) {
        self.update(|_| open);
    }

    /// Flips the flag.
    pub fn toggle(&mut self) {
        self.update(|open| !open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!CommandMenuStore::new().is_open());
    }

    #[test]
    fn test_rapid_toggles_never_cancel() {
        let mut menu = CommandMenuStore::new();
        for expected in [true, false, true, false, true] {
            menu.toggle();
            assert_eq!(menu.is_open(), expected);
        }
    }

    #[test]
    fn test_set_open_is_idempotent() {
        let mut menu = CommandMenuStore::new();
        menu.set_open(true);
        menu.set_open(true);
        assert!(menu.is_open());
        menu.set_open(false);
        assert!(!menu.is_open());
    }
}
