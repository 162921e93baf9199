// SPDX-License-Identifier: MPL-2.0
//! Enter/exit transitions for toast cards.
//!
//! Cards fade and scale in when added and fade and scale out when removed.
//! Removed toasts leave the registry immediately; a [`Leaving`] copy keeps
//! rendering between its old siblings until the exit transition finishes.

use super::notification::Toast;
use std::time::{Duration, Instant};

/// Length of both the enter and the exit transition.
pub const DURATION: Duration = Duration::from_millis(250);

/// Scale a card starts from when it appears.
const ENTER_SCALE: f32 = 0.95;

/// Scale a card shrinks to when it disappears.
const EXIT_SCALE: f32 = 0.9;

/// Visual state of a card at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub opacity: f32,
    pub scale: f32,
}

impl Frame {
    pub const SETTLED: Frame = Frame {
        opacity: 1.0,
        scale: 1.0,
    };
}

/// Cubic ease-out.
fn ease_out(t: f32) -> f32 {
    let inverse = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inverse * inverse * inverse
}

fn progress(since: Instant, now: Instant) -> f32 {
    let elapsed = now.saturating_duration_since(since);
    (elapsed.as_secs_f32() / DURATION.as_secs_f32()).min(1.0)
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Frame of a card that appeared at `since`.
#[must_use]
pub fn enter(since: Instant, now: Instant) -> Frame {
    let t = ease_out(progress(since, now));
    Frame {
        opacity: t,
        scale: lerp(ENTER_SCALE, 1.0, t),
    }
}

/// Frame of a card that started leaving at `since`.
#[must_use]
pub fn exit(since: Instant, now: Instant) -> Frame {
    let t = ease_out(progress(since, now));
    Frame {
        opacity: 1.0 - t,
        scale: lerp(1.0, EXIT_SCALE, t),
    }
}

/// Whether a transition that started at `since` is still running.
#[must_use]
pub fn is_running(since: Instant, now: Instant) -> bool {
    now.saturating_duration_since(since) < DURATION
}

/// A removed toast still playing its exit transition.
#[derive(Debug, Clone)]
pub struct Leaving {
    pub toast: Toast,
    pub since: Instant,
}

impl Leaving {
    #[must_use]
    pub fn frame(&self, now: Instant) -> Frame {
        exit(self.since, now)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        !is_running(self.since, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn enter_starts_transparent_and_small() {
        let start = Instant::now();
        let frame = enter(start, start);
        assert!(frame.opacity.abs() < EPSILON);
        assert!((frame.scale - ENTER_SCALE).abs() < EPSILON);
    }

    #[test]
    fn enter_settles_after_duration() {
        let start = Instant::now();
        assert_eq!(enter(start, start + DURATION), Frame::SETTLED);
        assert_eq!(enter(start, start + DURATION * 4), Frame::SETTLED);
    }

    #[test]
    fn exit_ends_invisible_and_shrunk() {
        let start = Instant::now();
        let frame = exit(start, start + DURATION);
        assert!(frame.opacity.abs() < EPSILON);
        assert!((frame.scale - EXIT_SCALE).abs() < EPSILON);
    }

    #[test]
    fn ease_out_is_ahead_of_linear_halfway() {
        let start = Instant::now();
        let frame = enter(start, start + DURATION / 2);
        assert!(frame.opacity > 0.5);
        assert!(frame.opacity < 1.0);
    }

    #[test]
    fn clock_going_backwards_is_clamped() {
        let later = Instant::now() + Duration::from_secs(1);
        let frame = enter(later, later - Duration::from_millis(100));
        assert!(frame.opacity.abs() < EPSILON);
    }

    #[test]
    fn running_until_duration_elapses() {
        let start = Instant::now();
        assert!(is_running(start, start));
        assert!(is_running(start, start + DURATION - Duration::from_millis(1)));
        assert!(!is_running(start, start + DURATION));
    }
}
