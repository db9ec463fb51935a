//! Transient status-line announcements.

use std::time::{Duration, Instant};

use crate::timers::Deadline;

/// How long an announcement stays on the status line.
pub const ANNOUNCEMENT_LIFETIME: Duration = Duration::from_secs(1);

/// Holds the latest announcement and removes it after its lifetime.
///
/// A new announcement replaces the current one and restarts the timer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Announcer {
    message: Option<String>,
    expiry: Deadline,
}

impl Announcer {
    /// Creates an empty announcer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a message for [`ANNOUNCEMENT_LIFETIME`].
    pub fn announce(&mut self, now: Instant, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("Announce: {message}");
        self.message = Some(message);
        self.expiry.arm(now, ANNOUNCEMENT_LIFETIME);
    }

    /// Removes the message once it has expired.
    pub fn tick(&mut self, now: Instant) {
        if self.expiry.fire(now) {
            self.message = None;
        }
    }

    /// The message currently shown.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
