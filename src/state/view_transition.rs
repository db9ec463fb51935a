//! Cross-fade wrapper around state changes.

use std::time::{Duration, Instant};

use crate::timers::Deadline;

/// Length of the dimmed frame window after a transitioned change.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(220);

/// Runs state mutations through a short transition when the terminal supports it.
///
/// Support is decided once at startup. Unsupported terminals and reduced motion
/// both fall back to applying the mutation directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewTransitionRunner {
    supported: bool,
    end: Deadline,
}

impl ViewTransitionRunner {
    /// Creates a runner.
    #[must_use]
    pub const fn new(supported: bool) -> Self {
        Self {
            supported,
            end: Deadline::idle(),
        }
    }

    /// Whether transitions can run at all.
    #[must_use]
    pub const fn supported(&self) -> bool {
        self.supported
    }

    /// Applies `mutate`, starting a transition window first when possible.
    pub fn run<R>(&mut self, now: Instant, reduced_motion: bool, mutate: impl FnOnce() -> R) -> R {
        if self.supported && !reduced_motion {
            self.end.arm(now, TRANSITION_DURATION);
        }
        mutate()
    }

    /// Ends the window once its duration has passed.
    pub fn tick(&mut self, now: Instant) {
        self.end.fire(now);
    }

    /// Whether a transition window is open.
    #[must_use]
    pub const fn is_transitioning(&self) -> bool {
        self.end.is_pending()
    }
}
