//! Page scrolling, section anchors and viewport intersection.

use std::fmt;
use std::ops::Range;
use std::time::{Duration, Instant};

/// Duration of a smooth scroll.
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(400);

/// Named scroll targets on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Hero header
    Top,
    /// Experience section
    Timeline,
    /// Skills section
    Skills,
    /// Footer
    End,
}

impl Anchor {
    /// All anchors in page order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Timeline, Self::Skills, Self::End];

    /// Fragment identifier without the `#`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Timeline => "timeline",
            Self::Skills => "skills",
            Self::End => "end",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScrollAnimation {
    from: u16,
    to: u16,
    started: Instant,
}

/// Vertical scroll position of the page, with optional easing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageScroll {
    offset: u16,
    animation: Option<ScrollAnimation>,
}

impl PageScroll {
    /// Starts at the top.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            offset: 0,
            animation: None,
        }
    }

    /// Current first visible line.
    #[must_use]
    pub const fn offset(&self) -> u16 {
        self.offset
    }

    /// Where the page will rest once any animation finishes.
    #[must_use]
    pub fn target(&self) -> u16 {
        self.animation.map_or(self.offset, |animation| animation.to)
    }

    /// Whether a smooth scroll is running.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Scrolls to `target`, easing unless motion is reduced.
    pub fn smooth_to(&mut self, now: Instant, target: u16, max: u16, reduced_motion: bool) {
        let target = target.min(max);
        if reduced_motion || target == self.offset {
            self.jump_to(target, max);
            return;
        }
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to: target,
            started: now,
        });
    }

    /// Moves immediately, cancelling any animation.
    pub fn jump_to(&mut self, target: u16, max: u16) {
        self.animation = None;
        self.offset = target.min(max);
    }

    /// Moves by `delta` lines from the current position.
    pub fn scroll_by(&mut self, delta: i32, max: u16) {
        let next = (i32::from(self.offset) + delta).clamp(0, i32::from(max));
        self.jump_to(u16::try_from(next).unwrap_or(max), max);
    }

    /// Keeps the offset inside a page that may have shrunk.
    pub fn clamp(&mut self, max: u16) {
        if let Some(animation) = &mut self.animation {
            animation.to = animation.to.min(max);
        }
        self.offset = self.offset.min(max);
    }

    /// Advances the animation.
    pub fn tick(&mut self, now: Instant) {
        let Some(animation) = self.animation else {
            return;
        };

        let elapsed = now.saturating_duration_since(animation.started);
        if elapsed >= SMOOTH_SCROLL_DURATION {
            self.offset = animation.to;
            self.animation = None;
            return;
        }

        let t = elapsed.as_secs_f32() / SMOOTH_SCROLL_DURATION.as_secs_f32();
        let from = f32::from(animation.from);
        let to = f32::from(animation.to);
        let position = (to - from).mul_add(ease_in_out(t), from).round();
        // position lies between two u16 values
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            self.offset = position as u16;
        }
    }
}

/// Cubic ease-in-out on `0.0..=1.0`.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0f32).mul_add(t, 2.0).powi(3) / 2.0
    }
}

/// Offset that places `range` in the vertical center of the viewport.
///
/// Ranges taller than the viewport are aligned to the top instead.
#[must_use]
pub fn center_offset(range: &Range<u16>, viewport_height: u16, max: u16) -> u16 {
    let len = range.end.saturating_sub(range.start);
    let offset = if len >= viewport_height {
        range.start
    } else {
        range.start.saturating_sub((viewport_height - len) / 2)
    };
    offset.min(max)
}

/// Whether `range` lies entirely inside the viewport.
#[must_use]
pub fn is_fully_visible(range: &Range<u16>, offset: u16, viewport_height: u16) -> bool {
    range.start >= offset && range.end <= offset.saturating_add(viewport_height)
}

/// Whether any line of `range` is inside the viewport.
#[must_use]
pub fn intersects(range: &Range<u16>, offset: u16, viewport_height: u16) -> bool {
    range.start < offset.saturating_add(viewport_height) && range.end > offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_display() {
        assert_eq!(Anchor::Skills.to_string(), "#skills");
        assert_eq!(Anchor::Top.id(), "top");
    }

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let now = Instant::now();
        let mut scroll = PageScroll::new();
        scroll.smooth_to(now, 40, 100, false);
        assert!(scroll.is_animating());
        assert_eq!(scroll.target(), 40);

        scroll.tick(now + SMOOTH_SCROLL_DURATION / 2);
        assert!(scroll.offset() > 0 && scroll.offset() < 40);

        scroll.tick(now + SMOOTH_SCROLL_DURATION);
        assert_eq!(scroll.offset(), 40);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn test_reduced_motion_jumps() {
        let mut scroll = PageScroll::new();
        scroll.smooth_to(Instant::now(), 40, 100, true);
        assert_eq!(scroll.offset(), 40);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn test_targets_are_clamped() {
        let mut scroll = PageScroll::new();
        scroll.smooth_to(Instant::now(), 500, 60, false);
        assert_eq!(scroll.target(), 60);

        scroll.scroll_by(-10, 60);
        assert_eq!(scroll.offset(), 0);
        scroll.scroll_by(1000, 60);
        assert_eq!(scroll.offset(), 60);

        scroll.clamp(20);
        assert_eq!(scroll.offset(), 20);
    }

    #[test]
    fn test_center_offset() {
        // 4-line card at 50 in a 20-line viewport: top at 42
        assert_eq!(center_offset(&(50..54), 20, 200), 42);
        // Near the top the offset saturates
        assert_eq!(center_offset(&(3..7), 20, 200), 0);
        // Tall cards align to their top
        assert_eq!(center_offset(&(10..40), 20, 200), 10);
        assert_eq!(center_offset(&(190..194), 20, 180), 180);
    }

    #[test]
    fn test_visibility() {
        assert!(is_fully_visible(&(10..15), 5, 10));
        assert!(!is_fully_visible(&(10..16), 5, 10));
        assert!(intersects(&(10..16), 5, 10));
        assert!(!intersects(&(15..20), 5, 10));
        assert!(!intersects(&(0..5), 5, 10));
    }

    #[test]
    fn test_easing_endpoints() {
        assert!(ease_in_out(0.0).abs() < f32::EPSILON);
        assert!((ease_in_out(1.0) - 1.0).abs() < f32::EPSILON);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
    }
}
