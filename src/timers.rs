//! Single-slot timers driven by the event loop clock.
//!
//! Every delayed UI behavior (auto-close, appear delays, tooltips) owns one
//! [`Deadline`]. Arming a deadline that is already pending replaces it, so a
//! re-triggered delay restarts instead of stacking a second timer.

use std::time::{Duration, Instant};

/// A cancellable point in time at which something should happen once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deadline {
    due: Option<Instant>,
}

impl Deadline {
    /// Creates a deadline with nothing scheduled.
    #[must_use]
    pub const fn idle() -> Self {
        Self { due: None }
    }

    /// Creates a deadline already armed for `now + delay`.
    #[must_use]
    pub fn after(now: Instant, delay: Duration) -> Self {
        Self {
            due: Some(now + delay),
        }
    }

    /// Schedules the deadline, replacing any pending one.
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.due = Some(now + delay);
    }

    /// Drops the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.due = None;
    }

    /// Whether a deadline is scheduled and has not fired yet.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// Time left until the deadline fires.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.due.map(|due| due.saturating_duration_since(now))
    }

    /// Returns `true` exactly once, on the first call at or after the due time.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}
