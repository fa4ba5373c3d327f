//! Horizontal swipe detection for a single list row.
//!
//! A gesture moves through `Idle -> Dragging -> Committing | SnappingBack -> Idle`.
//! Releasing past `width / threshold_divisor` in a direction that has a
//! handler commits: the row flies off to that side and, once the animation
//! has finished, the handler is handed back to the caller exactly once.
//! Any other release snaps the row back and fires nothing.
//!
//! The detector never draws anything. Entering `Committing` or
//! `SnappingBack` produces an [`Animation`] for whoever renders the row.

use std::time::Duration;

pub const DEFAULT_THRESHOLD_DIVISOR: f32 = 3.0;
pub const DEFAULT_ANIMATION: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    None,
    Left,
    Right,
}

/// Row background shown while a swipe is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    Neutral,
    /// Swiping right
    Green,
    /// Swiping left
    Pink,
}

impl Affordance {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Affordance::Neutral => (0xEF, 0xEF, 0xEF),
            Affordance::Green => (0x98, 0xFB, 0x98),
            Affordance::Pink => (0xFF, 0xC0, 0xCB),
        }
    }
}

/// Input to the detector, in row-local horizontal coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Start(f32),
    Move(f32),
    End(f32),
}

/// Handlers for the two swipe directions. A missing handler makes that
/// direction inert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwipeHandlers<H> {
    pub left: Option<H>,
    pub right: Option<H>,
}

impl<H> Default for SwipeHandlers<H> {
    fn default() -> Self {
        SwipeHandlers {
            left: None,
            right: None,
        }
    }
}

/// Linear tween of the row offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
}

impl Animation {
    /// Offset `elapsed` into the animation, clamped to its end.
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * t
    }

    pub fn is_done(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Idle,
    Dragging { start_x: f32 },
    Committing { direction: Direction, animation: Animation },
    SnappingBack { animation: Animation },
}

#[derive(Debug, Clone)]
pub struct SwipeDetector<H> {
    handlers: SwipeHandlers<H>,
    width: f32,
    threshold_divisor: f32,
    duration: Duration,
    phase: Phase,
    offset: f32,
    direction: Direction,
}

impl<H> SwipeDetector<H> {
    pub fn new(handlers: SwipeHandlers<H>) -> Self {
        SwipeDetector {
            handlers,
            width: 0.0,
            threshold_divisor: DEFAULT_THRESHOLD_DIVISOR,
            duration: DEFAULT_ANIMATION,
            phase: Phase::Idle,
            offset: 0.0,
            direction: Direction::None,
        }
    }

    /// Divisors that are not finite and positive fall back to the default.
    pub fn with_threshold_divisor(mut self, divisor: f32) -> Self {
        self.threshold_divisor = if divisor.is_finite() && divisor > 0.0 {
            divisor
        } else {
            DEFAULT_THRESHOLD_DIVISOR
        };
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record the measured width of the row.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current horizontal offset of the row content.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn affordance(&self) -> Affordance {
        match self.direction {
            Direction::None => Affordance::Neutral,
            Direction::Right => Affordance::Green,
            Direction::Left => Affordance::Pink,
        }
    }

    pub fn handle(&mut self, event: GestureEvent) -> Option<Animation> {
        match event {
            GestureEvent::Start(x) => {
                self.start(x);
                None
            }
            GestureEvent::Move(x) => {
                self.drag(x);
                None
            }
            GestureEvent::End(x) => self.release(x),
        }
    }

    /// Begin a gesture at `x`. Always resets, even over a running
    /// animation; a commit that had not finished is dropped.
    pub fn start(&mut self, x: f32) {
        self.phase = Phase::Dragging { start_x: x };
        self.offset = 0.0;
        self.direction = Direction::None;
    }

    /// Follow the pointer to `x`. Ignored unless dragging.
    pub fn drag(&mut self, x: f32) -> Direction {
        let Phase::Dragging { start_x } = self.phase else {
            return self.direction;
        };
        let distance = x - start_x;
        self.offset = distance;
        self.direction = self.classify(distance);
        self.direction
    }

    /// Let go at `x`. Returns the animation the row should now play, or
    /// `None` if no gesture was in progress.
    pub fn release(&mut self, x: f32) -> Option<Animation> {
        let Phase::Dragging { start_x } = self.phase else {
            return None;
        };
        let distance = x - start_x;
        self.offset = distance;
        let threshold = self.width / self.threshold_divisor;

        let (phase, animation) = if distance > threshold && self.handlers.right.is_some() {
            let animation = self.animate_to(self.width);
            (
                Phase::Committing {
                    direction: Direction::Right,
                    animation,
                },
                animation,
            )
        } else if distance < -threshold && self.handlers.left.is_some() {
            let animation = self.animate_to(-self.width);
            (
                Phase::Committing {
                    direction: Direction::Left,
                    animation,
                },
                animation,
            )
        } else {
            let animation = self.animate_to(0.0);
            (Phase::SnappingBack { animation }, animation)
        };
        self.phase = phase;
        Some(animation)
    }

    /// The running animation has reached its end. Returns the committed
    /// handler, once; snap-backs and repeated calls return `None`.
    pub fn finish(&mut self) -> Option<&H> {
        let phase = std::mem::replace(&mut self.phase, Phase::Idle);
        match phase {
            Phase::Committing { direction, .. } => {
                self.offset = 0.0;
                self.direction = Direction::None;
                match direction {
                    Direction::Right => self.handlers.right.as_ref(),
                    Direction::Left => self.handlers.left.as_ref(),
                    Direction::None => None,
                }
            }
            Phase::SnappingBack { .. } => {
                self.offset = 0.0;
                self.direction = Direction::None;
                None
            }
            other => {
                self.phase = other;
                None
            }
        }
    }

    fn classify(&self, distance: f32) -> Direction {
        if distance > 0.0 && self.handlers.right.is_some() {
            Direction::Right
        } else if distance < 0.0 && self.handlers.left.is_some() {
            Direction::Left
        } else {
            Direction::None
        }
    }

    fn animate_to(&self, to: f32) -> Animation {
        Animation {
            from: self.offset,
            to,
            duration: self.duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Handler {
        Left,
        Right,
    }

    fn both() -> SwipeDetector<Handler> {
        let mut d = SwipeDetector::new(SwipeHandlers {
            left: Some(Handler::Left),
            right: Some(Handler::Right),
        });
        d.set_width(90.0);
        d
    }

    #[test]
    fn drag_sets_offset_and_direction() {
        let mut d = both();
        d.start(10.0);
        assert_eq!(d.drag(30.0), Direction::Right);
        assert_eq!(d.offset(), 20.0);
        assert_eq!(d.affordance(), Affordance::Green);

        assert_eq!(d.drag(0.0), Direction::Left);
        assert_eq!(d.offset(), -10.0);
        assert_eq!(d.affordance(), Affordance::Pink);

        assert_eq!(d.drag(10.0), Direction::None);
        assert_eq!(d.affordance(), Affordance::Neutral);
    }

    #[test]
    fn direction_without_handler_is_none() {
        let mut d = SwipeDetector::new(SwipeHandlers {
            left: None,
            right: Some(Handler::Right),
        });
        d.set_width(90.0);
        d.start(50.0);
        assert_eq!(d.drag(10.0), Direction::None);
        assert_eq!(d.affordance(), Affordance::Neutral);
    }

    #[test]
    fn release_past_threshold_commits_right_once() {
        let mut d = both();
        d.start(0.0);
        d.drag(40.0);
        let animation = d.release(40.0).unwrap();
        assert_eq!(animation.from, 40.0);
        assert_eq!(animation.to, 90.0);
        assert_eq!(animation.duration, DEFAULT_ANIMATION);
        assert!(matches!(
            d.phase(),
            Phase::Committing {
                direction: Direction::Right,
                ..
            }
        ));

        assert_eq!(d.finish(), Some(&Handler::Right));
        assert_eq!(d.offset(), 0.0);
        assert_eq!(d.direction(), Direction::None);
        assert_eq!(d.phase(), Phase::Idle);
        assert_eq!(d.finish(), None);
    }

    #[test]
    fn release_past_threshold_commits_left() {
        let mut d = both();
        d.start(80.0);
        d.drag(40.0);
        let animation = d.release(30.0).unwrap();
        assert_eq!(animation.to, -90.0);
        assert_eq!(d.finish(), Some(&Handler::Left));
        assert_eq!(d.offset(), 0.0);
    }

    #[test]
    fn release_below_threshold_snaps_back() {
        let mut d = both();
        d.start(0.0);
        d.drag(30.0);
        let animation = d.release(30.0).unwrap();
        assert_eq!(animation.from, 30.0);
        assert_eq!(animation.to, 0.0);
        assert!(matches!(d.phase(), Phase::SnappingBack { .. }));

        assert_eq!(d.finish(), None);
        assert_eq!(d.offset(), 0.0);
        assert_eq!(d.phase(), Phase::Idle);
    }

    #[test]
    fn release_without_handler_snaps_back() {
        let mut d = SwipeDetector::new(SwipeHandlers {
            left: Some(Handler::Left),
            right: None,
        });
        d.set_width(90.0);
        d.start(0.0);
        d.drag(89.0);
        let animation = d.release(89.0).unwrap();
        assert_eq!(animation.to, 0.0);
        assert_eq!(d.finish(), None);
    }

    #[test]
    fn threshold_divisor_is_configurable() {
        let mut d = both().with_threshold_divisor(4.0);
        d.start(0.0);
        d.release(25.0);
        assert_eq!(d.finish(), Some(&Handler::Right));
    }

    #[test]
    fn invalid_threshold_divisor_falls_back_to_default() {
        for divisor in [0.0, -3.0, f32::NAN, f32::INFINITY] {
            let mut d = both().with_threshold_divisor(divisor);
            d.start(10.0);
            d.release(10.0);
            assert!(matches!(d.phase(), Phase::SnappingBack { .. }));
            assert_eq!(d.finish(), None);
        }
    }

    #[test]
    fn events_outside_a_gesture_are_ignored() {
        let mut d = both();
        assert_eq!(d.drag(50.0), Direction::None);
        assert_eq!(d.offset(), 0.0);
        assert!(d.release(50.0).is_none());
        assert_eq!(d.finish(), None);
        assert_eq!(d.phase(), Phase::Idle);
    }

    #[test]
    fn new_start_discards_pending_commit() {
        let mut d = both();
        d.start(0.0);
        d.release(80.0);
        d.start(5.0);
        assert_eq!(d.phase(), Phase::Dragging { start_x: 5.0 });
        assert_eq!(d.offset(), 0.0);
        assert_eq!(d.finish(), None);
    }

    #[test]
    fn handle_dispatches_events() {
        let mut d = both();
        assert!(d.handle(GestureEvent::Start(0.0)).is_none());
        assert!(d.handle(GestureEvent::Move(-50.0)).is_none());
        let animation = d.handle(GestureEvent::End(-50.0)).unwrap();
        assert_eq!(animation.to, -90.0);
        assert_eq!(d.finish(), Some(&Handler::Left));
    }

    #[test]
    fn animation_interpolates_and_clamps() {
        let animation = Animation {
            from: 0.0,
            to: 100.0,
            duration: Duration::from_millis(200),
        };
        assert_eq!(animation.value_at(Duration::ZERO), 0.0);
        assert_eq!(animation.value_at(Duration::from_millis(100)), 50.0);
        assert_eq!(animation.value_at(Duration::from_millis(500)), 100.0);
        assert!(!animation.is_done(Duration::from_millis(199)));
        assert!(animation.is_done(Duration::from_millis(200)));
    }
}
