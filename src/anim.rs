// SPDX-License-Identifier: MPL-2.0
//! Small time-based animation helpers shared by the reveal effects and the
//! smooth-scroll navigation.

use std::time::{Duration, Instant};

/// Cubic ease-in-out over `t` in `[0, 1]`.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// An in-flight animated scroll of the page scrollable.
///
/// The app keeps at most one of these; starting a new one replaces the
/// previous animation mid-flight from its current position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    /// Starts an animation between two relative offsets in `[0, 1]`.
    #[must_use]
    pub fn new(from: f32, to: f32, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to: to.clamp(0.0, 1.0),
            started,
            duration,
        }
    }

    /// Target relative offset.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Eased offset at `now`; clamps to the target once the duration has
    /// elapsed.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * ease_in_out(t)
    }

    /// Whether the animation has reached its target.
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_in_out_hits_endpoints_and_midpoint() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn ease_in_out_clamps_out_of_range_input() {
        assert_eq!(ease_in_out(-1.0), 0.0);
        assert_eq!(ease_in_out(2.0), 1.0);
    }

    #[test]
    fn ease_in_out_is_monotonic() {
        let mut previous = 0.0;
        for step in 0..=100 {
            let value = ease_in_out(step as f32 / 100.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn scroll_animation_starts_at_origin_and_ends_at_target() {
        let start = Instant::now();
        let anim = ScrollAnimation::new(0.0, 0.8, start, Duration::from_millis(400));

        assert_eq!(anim.value_at(start), 0.0);
        assert_eq!(anim.value_at(start + Duration::from_millis(400)), 0.8);
        assert!(anim.is_finished(start + Duration::from_millis(400)));
    }

    #[test]
    fn scroll_animation_is_partway_at_half_time() {
        let start = Instant::now();
        let anim = ScrollAnimation::new(0.0, 1.0, start, Duration::from_millis(400));

        let halfway = anim.value_at(start + Duration::from_millis(200));
        assert!(halfway > 0.0 && halfway < 1.0);
        assert!(!anim.is_finished(start + Duration::from_millis(200)));
    }

    #[test]
    fn scroll_animation_clamps_target_to_unit_range() {
        let start = Instant::now();
        let anim = ScrollAnimation::new(0.5, 3.0, start, Duration::from_millis(100));
        assert_eq!(anim.target(), 1.0);
    }
}
