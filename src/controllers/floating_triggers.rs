//! Floating scroll cue and command trigger buttons.
//!
//! Each button is a small state machine with named phases and triggers.
//! A button owns one [`Deadline`]; every transition replaces or cancels it,
//! so there is never more than one pending delay per button.

use std::time::{Duration, Instant};

use crate::branding::COMMAND_MENU_HINT;
use crate::timers::Deadline;

/// Delay before a button first appears.
pub const APPEAR_DELAY: Duration = Duration::from_millis(750);

/// Delay from appearing to starting the idle animation.
pub const IDLE_DELAY: Duration = Duration::from_millis(2500);

/// Delay between a scroll cue click and the cue disappearing.
pub const SCROLL_HIDE_DELAY: Duration = Duration::from_millis(800);

/// Hover time before the tooltip shows.
pub const TOOLTIP_DELAY: Duration = Duration::from_millis(400);

/// Fade-in length.
pub const FADE_DURATION: Duration = Duration::from_millis(300);

/// Length of one idle animation frame.
const IDLE_FRAME: Duration = Duration::from_millis(500);

/// Which floating button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    /// Scrolls to the experience section
    ScrollCue,
    /// Opens the command menu
    CommandTrigger,
}

/// Lifecycle phase of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerPhase {
    /// Waiting for the appear delay
    Hidden,
    /// Shown, not animating
    Visible,
    /// Shown with the looping idle animation (bounce or pulse)
    Idle,
    /// Gone for the rest of the session
    PermanentlyHidden,
}

/// Inputs that drive a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    /// The pending delay fired
    DelayElapsed,
    /// The button's target section became visible
    TargetInView,
    /// The user clicked the button
    Clicked,
}

/// One floating button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatingTrigger {
    kind: TriggerKind,
    phase: TriggerPhase,
    since: Instant,
    pending: Deadline,
    hiding: bool,
    acknowledged: bool,
}

impl FloatingTrigger {
    /// Creates a hidden button that appears after [`APPEAR_DELAY`].
    #[must_use]
    pub fn new(kind: TriggerKind, now: Instant) -> Self {
        Self {
            kind,
            phase: TriggerPhase::Hidden,
            since: now,
            pending: Deadline::after(now, APPEAR_DELAY),
            hiding: false,
            acknowledged: false,
        }
    }

    /// Creates a button that never shows.
    #[must_use]
    pub fn disabled(kind: TriggerKind, now: Instant) -> Self {
        Self {
            kind,
            phase: TriggerPhase::PermanentlyHidden,
            since: now,
            pending: Deadline::idle(),
            hiding: false,
            acknowledged: false,
        }
    }

    /// Which button this is.
    #[must_use]
    pub const fn kind(&self) -> TriggerKind {
        self.kind
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> TriggerPhase {
        self.phase
    }

    /// Whether a delay is pending.
    #[must_use]
    pub const fn has_pending_delay(&self) -> bool {
        self.pending.is_pending()
    }

    /// Fires the pending delay when due.
    pub fn tick(&mut self, now: Instant) {
        if self.pending.fire(now) {
            self.handle(TriggerEvent::DelayElapsed, now);
        }
    }

    /// Applies a trigger. Returns `true` when the event was accepted.
    pub fn handle(&mut self, event: TriggerEvent, now: Instant) -> bool {
        if self.phase == TriggerPhase::PermanentlyHidden {
            return false;
        }

        match (event, self.phase) {
            (TriggerEvent::DelayElapsed, TriggerPhase::Hidden) => {
                self.enter(TriggerPhase::Visible, now);
                if !self.acknowledged {
                    self.pending.arm(now, IDLE_DELAY);
                }
                true
            }
            (TriggerEvent::DelayElapsed, TriggerPhase::Visible) if self.hiding => {
                self.hide_forever(now);
                true
            }
            (TriggerEvent::DelayElapsed, TriggerPhase::Visible) => {
                self.enter(TriggerPhase::Idle, now);
                true
            }
            (TriggerEvent::TargetInView, _) if self.kind == TriggerKind::ScrollCue => {
                self.hide_forever(now);
                true
            }
            (TriggerEvent::Clicked, TriggerPhase::Visible | TriggerPhase::Idle) => {
                match self.kind {
                    TriggerKind::ScrollCue => {
                        if self.hiding {
                            return false;
                        }
                        self.hiding = true;
                        self.pending.arm(now, SCROLL_HIDE_DELAY);
                    }
                    TriggerKind::CommandTrigger => {
                        self.acknowledged = true;
                        self.pending.cancel();
                    }
                }
                if self.phase == TriggerPhase::Idle {
                    self.enter(TriggerPhase::Visible, now);
                }
                true
            }
            _ => false,
        }
    }

    /// Shorthand for [`TriggerEvent::Clicked`].
    pub fn click(&mut self, now: Instant) -> bool {
        self.handle(TriggerEvent::Clicked, now)
    }

    /// Shorthand for [`TriggerEvent::TargetInView`].
    pub fn target_in_view(&mut self, now: Instant) -> bool {
        self.handle(TriggerEvent::TargetInView, now)
    }

    fn enter(&mut self, phase: TriggerPhase, now: Instant) {
        tracing::trace!(kind = ?self.kind, ?phase, "Floating trigger phase");
        self.phase = phase;
        self.since = now;
    }

    fn hide_forever(&mut self, now: Instant) {
        self.pending.cancel();
        self.enter(TriggerPhase::PermanentlyHidden, now);
    }

    /// Whether the button is drawn and clickable.
    #[must_use]
    pub const fn is_shown(&self) -> bool {
        matches!(self.phase, TriggerPhase::Visible | TriggerPhase::Idle)
    }

    /// Whether the looping idle animation runs. Reduced motion turns it off.
    #[must_use]
    pub const fn is_animating(&self, reduced_motion: bool) -> bool {
        matches!(self.phase, TriggerPhase::Idle) && !reduced_motion
    }

    /// Alternating idle animation frame, `0` or `1`; always `0` when not animating.
    #[must_use]
    pub fn animation_frame(&self, now: Instant, reduced_motion: bool) -> usize {
        if !self.is_animating(reduced_motion) {
            return 0;
        }
        let elapsed = now.saturating_duration_since(self.since).as_millis();
        usize::from((elapsed / IDLE_FRAME.as_millis()) % 2 == 1)
    }

    /// Drawing opacity, `0.0..=1.0`.
    ///
    /// Fades in after appearing and out while a clicked scroll cue waits to
    /// hide. Reduced motion skips the fades.
    #[must_use]
    pub fn opacity(&self, now: Instant, reduced_motion: bool) -> f32 {
        if !self.is_shown() {
            return 0.0;
        }
        if reduced_motion {
            return 1.0;
        }
        if self.hiding {
            let remaining = self.pending.remaining(now).unwrap_or_default();
            return (remaining.as_secs_f32() / FADE_DURATION.as_secs_f32()).clamp(0.0, 1.0);
        }
        if self.phase == TriggerPhase::Visible && !self.acknowledged {
            let elapsed = now.saturating_duration_since(self.since);
            return (elapsed.as_secs_f32() / FADE_DURATION.as_secs_f32()).clamp(0.0, 1.0);
        }
        1.0
    }
}

/// Hover tooltip for the command trigger.
///
/// Entering arms one show delay; leaving cancels it and hides the tooltip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tooltip {
    hovered: bool,
    visible: bool,
    show: Deadline,
}

impl Tooltip {
    /// Tooltip text.
    #[must_use]
    pub fn text() -> String {
        format!("Open command menu ({COMMAND_MENU_HINT})")
    }

    /// Pointer entered the button. Repeated calls while hovering do nothing.
    pub fn hover_enter(&mut self, now: Instant) {
        if !self.hovered {
            self.hovered = true;
            self.show.arm(now, TOOLTIP_DELAY);
        }
    }

    /// Pointer left the button.
    pub fn hover_leave(&mut self) {
        self.hovered = false;
        self.visible = false;
        self.show.cancel();
    }

    /// Shows the tooltip once the delay has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.show.fire(now) {
            self.visible = true;
        }
    }

    /// Whether the tooltip is showing.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the pointer is over the button.
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn advance(trigger: &mut FloatingTrigger, start: Instant, at: u64) {
        trigger.tick(start + ms(at));
    }

    #[test]
    fn test_appear_then_idle() {
        let start = Instant::now();
        let mut cue = FloatingTrigger::new(TriggerKind::ScrollCue, start);

        advance(&mut cue, start, 749);
        assert_eq!(cue.phase(), TriggerPhase::Hidden);
        advance(&mut cue, start, 750);
        assert_eq!(cue.phase(), TriggerPhase::Visible);
        advance(&mut cue, start, 3249);
        assert_eq!(cue.phase(), TriggerPhase::Visible);
        advance(&mut cue, start, 3250);
        assert_eq!(cue.phase(), TriggerPhase::Idle);
        assert!(cue.is_animating(false));
        assert!(!cue.has_pending_delay());
    }

    #[test]
    fn test_scroll_cue_click_hides_after_scroll() {
        let start = Instant::now();
        let mut cue = FloatingTrigger::new(TriggerKind::ScrollCue, start);
        advance(&mut cue, start, 750);

        assert!(cue.click(start + ms(1000)));
        assert!(cue.is_shown());
        assert!(!cue.click(start + ms(1100)));

        advance(&mut cue, start, 1799);
        assert!(cue.is_shown());
        advance(&mut cue, start, 1800);
        assert_eq!(cue.phase(), TriggerPhase::PermanentlyHidden);
    }

    #[test]
    fn test_target_in_view_hides_cue_even_before_it_appears() {
        let start = Instant::now();
        let mut cue = FloatingTrigger::new(TriggerKind::ScrollCue, start);
        assert!(cue.target_in_view(start + ms(100)));
        assert_eq!(cue.phase(), TriggerPhase::PermanentlyHidden);

        advance(&mut cue, start, 10_000);
        assert_eq!(cue.phase(), TriggerPhase::PermanentlyHidden);
    }

    #[test]
    fn test_permanently_hidden_is_terminal() {
        let start = Instant::now();
        let mut cue = FloatingTrigger::new(TriggerKind::ScrollCue, start);
        advance(&mut cue, start, 750);
        cue.target_in_view(start + ms(800));

        for event in [
            TriggerEvent::DelayElapsed,
            TriggerEvent::Clicked,
            TriggerEvent::TargetInView,
        ] {
            assert!(!cue.handle(event, start + ms(900)));
            assert_eq!(cue.phase(), TriggerPhase::PermanentlyHidden);
        }
    }

    #[test]
    fn test_command_trigger_click_acknowledges() {
        let start = Instant::now();
        let mut trigger = FloatingTrigger::new(TriggerKind::CommandTrigger, start);
        advance(&mut trigger, start, 750);
        advance(&mut trigger, start, 3250);
        assert_eq!(trigger.phase(), TriggerPhase::Idle);

        assert!(trigger.click(start + ms(4000)));
        assert_eq!(trigger.phase(), TriggerPhase::Visible);
        assert!(!trigger.has_pending_delay());

        advance(&mut trigger, start, 60_000);
        assert_eq!(trigger.phase(), TriggerPhase::Visible);
        // Not a scroll target
        assert!(!trigger.target_in_view(start + ms(60_001)));
    }

    #[test]
    fn test_hidden_button_ignores_clicks() {
        let start = Instant::now();
        let mut trigger = FloatingTrigger::new(TriggerKind::CommandTrigger, start);
        assert!(!trigger.click(start));
        assert_eq!(trigger.phase(), TriggerPhase::Hidden);
    }

    #[test]
    fn test_reduced_motion_suppresses_animation_only() {
        let start = Instant::now();
        let mut cue = FloatingTrigger::new(TriggerKind::ScrollCue, start);
        advance(&mut cue, start, 750);
        assert!((cue.opacity(start + ms(750), true) - 1.0).abs() < f32::EPSILON);
        assert!(cue.opacity(start + ms(750), false) < 0.1);

        advance(&mut cue, start, 3250);
        assert_eq!(cue.phase(), TriggerPhase::Idle);
        assert!(!cue.is_animating(true));
        assert_eq!(cue.animation_frame(start + ms(3800), true), 0);
        assert_eq!(cue.animation_frame(start + ms(3800), false), 1);
    }

    #[test]
    fn test_disabled_never_shows() {
        let start = Instant::now();
        let mut trigger = FloatingTrigger::disabled(TriggerKind::CommandTrigger, start);
        advance(&mut trigger, start, 10_000);
        assert!(!trigger.is_shown());
    }

    #[test]
    fn test_tooltip_delay_and_cancel() {
        let start = Instant::now();
        let mut tooltip = Tooltip::default();

        tooltip.hover_enter(start);
        tooltip.tick(start + ms(300));
        tooltip.hover_leave();
        tooltip.tick(start + ms(500));
        assert!(!tooltip.is_visible());

        // Re-entering restarts the delay instead of inheriting the old one
        tooltip.hover_enter(start + ms(600));
        tooltip.tick(start + ms(900));
        assert!(!tooltip.is_visible());
        tooltip.hover_enter(start + ms(950));
        tooltip.tick(start + ms(1000));
        assert!(tooltip.is_visible());
        assert_eq!(Tooltip::text(), "Open command menu (Ctrl+K)");
    }
}
