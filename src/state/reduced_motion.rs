//! Reduced-motion preference tracking.

use crate::config::MotionPreference;

/// Tracks whether animations should be reduced.
///
/// The configured preference wins when it is `On` or `Off`; `Auto` follows
/// what the platform reports, defaulting to full motion when nothing is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReducedMotionObserver {
    preference: MotionPreference,
    reduced: bool,
}

impl ReducedMotionObserver {
    /// Creates the observer from the configured preference and the platform's answer.
    #[must_use]
    pub const fn new(preference: MotionPreference, reported: Option<bool>) -> Self {
        Self {
            preference,
            reduced: Self::resolve(preference, reported),
        }
    }

    const fn resolve(preference: MotionPreference, reported: Option<bool>) -> bool {
        match (preference, reported) {
            (MotionPreference::On, _) => true,
            (MotionPreference::Off, _) => false,
            (MotionPreference::Auto, Some(reduced)) => reduced,
            (MotionPreference::Auto, None) => false,
        }
    }

    /// Whether motion is reduced.
    #[must_use]
    pub const fn reduced(&self) -> bool {
        self.reduced
    }

    /// Re-queries with a fresh platform answer. Returns `true` if the value changed.
    pub fn refresh(&mut self, reported: Option<bool>) -> bool {
        let reduced = Self::resolve(self.preference, reported);
        let changed = reduced != self.reduced;
        if changed {
            tracing::debug!(reduced, "Reduced motion preference changed");
        }
        self.reduced = reduced;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_overrides_platform() {
        assert!(ReducedMotionObserver::new(MotionPreference::On, Some(false)).reduced());
        assert!(!ReducedMotionObserver::new(MotionPreference::Off, Some(true)).reduced());
    }

    #[test]
    fn test_auto_follows_platform() {
        assert!(ReducedMotionObserver::new(MotionPreference::Auto, Some(true)).reduced());
        assert!(!ReducedMotionObserver::new(MotionPreference::Auto, None).reduced());
    }

    #[test]
    fn test_refresh_reports_changes() {
        let mut motion = ReducedMotionObserver::new(MotionPreference::Auto, None);
        assert!(motion.refresh(Some(true)));
        assert!(!motion.refresh(Some(true)));
        assert!(motion.reduced());

        let mut pinned = ReducedMotionObserver::new(MotionPreference::Off, None);
        assert!(!pinned.refresh(Some(true)));
    }
}
