// SPDX-License-Identifier: MPL-2.0
//! Staggered fade-in of card groups.
//!
//! Each section of cards is a `RevealGroup`. A group starts hidden and is
//! triggered either when the page scrolls it into view or, for the contact
//! details, a fixed delay after load. Once triggered, item `i` fades in
//! over the configured duration starting `i * stagger` after the trigger,
//! reproducing the staggered entrance of the original page.

use std::time::{Duration, Instant};

use crate::anim::ease_in_out;
use crate::config::{REVEAL_FADE_MS, REVEAL_STAGGER_MS};

/// One group of cards revealed together with a per-item stagger.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealGroup {
    item_count: usize,
    triggered_at: Option<Instant>,
    fade: Duration,
    stagger: Duration,
}

impl RevealGroup {
    /// Creates an untriggered group with the default fade and stagger.
    #[must_use]
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            triggered_at: None,
            fade: Duration::from_millis(REVEAL_FADE_MS),
            stagger: Duration::from_millis(REVEAL_STAGGER_MS),
        }
    }

    /// Overrides the per-item stagger (the value items use a doubled
    /// stagger on the original page).
    #[must_use]
    pub fn with_stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Marks the group as revealed starting at `start`. The first trigger
    /// wins; repeated triggers (e.g. scrolling back and forth) are no-ops.
    pub fn trigger(&mut self, start: Instant) {
        if self.triggered_at.is_none() {
            self.triggered_at = Some(start);
        }
    }

    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.triggered_at.is_some()
    }

    /// Opacity of item `index` at `now`, in `[0, 1]`.
    #[must_use]
    pub fn item_opacity(&self, index: usize, now: Instant) -> f32 {
        let Some(start) = self.triggered_at else {
            return 0.0;
        };
        let item_start = start + self.stagger * index as u32;
        if now < item_start {
            return 0.0;
        }
        let elapsed = now.duration_since(item_start);
        if elapsed >= self.fade {
            return 1.0;
        }
        ease_in_out(elapsed.as_secs_f32() / self.fade.as_secs_f32())
    }

    /// Vertical entrance offset of item `index` at `now`, in logical
    /// pixels: items slide up from 20px below their resting position.
    #[must_use]
    pub fn item_rise(&self, index: usize, now: Instant) -> f32 {
        20.0 * (1.0 - self.item_opacity(index, now))
    }

    /// Whether every item has finished fading in (no more redraws needed).
    #[must_use]
    pub fn is_settled(&self, now: Instant) -> bool {
        match self.triggered_at {
            None => false,
            Some(start) => {
                let last = self.item_count.saturating_sub(1);
                now >= start + self.stagger * last as u32 + self.fade
            }
        }
    }

    /// Whether this group still needs animation ticks.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.is_triggered() && !self.is_settled(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untriggered_items_are_invisible() {
        let group = RevealGroup::new(3);
        assert_eq!(group.item_opacity(0, Instant::now()), 0.0);
        assert!(!group.is_triggered());
        assert!(!group.is_settled(Instant::now()));
    }

    #[test]
    fn items_start_staggered_by_index() {
        let mut group = RevealGroup::new(3);
        let start = Instant::now();
        group.trigger(start);

        // At 150ms: item 0 is mid-fade, item 1 just started, item 2 not yet.
        let now = start + Duration::from_millis(150);
        assert!(group.item_opacity(0, now) > 0.0);
        assert!(group.item_opacity(1, now) > 0.0);
        assert_eq!(group.item_opacity(2, now), 0.0);
    }

    #[test]
    fn item_completes_after_fade_duration() {
        let mut group = RevealGroup::new(2);
        let start = Instant::now();
        group.trigger(start);

        let done = start + Duration::from_millis(REVEAL_FADE_MS);
        assert_eq!(group.item_opacity(0, done), 1.0);
        assert_eq!(group.item_rise(0, done), 0.0);
    }

    #[test]
    fn group_settles_when_last_item_finishes() {
        let mut group = RevealGroup::new(3);
        let start = Instant::now();
        group.trigger(start);

        let last_start = Duration::from_millis(2 * REVEAL_STAGGER_MS);
        let settle = start + last_start + Duration::from_millis(REVEAL_FADE_MS);

        assert!(!group.is_settled(settle - Duration::from_millis(10)));
        assert!(group.is_settled(settle));
        assert!(!group.is_animating(settle));
    }

    #[test]
    fn first_trigger_wins() {
        let mut group = RevealGroup::new(1);
        let first = Instant::now();
        group.trigger(first);
        group.trigger(first + Duration::from_secs(10));

        let done = first + Duration::from_millis(REVEAL_FADE_MS);
        assert_eq!(group.item_opacity(0, done), 1.0);
    }

    #[test]
    fn custom_stagger_delays_later_items() {
        let mut group = RevealGroup::new(2).with_stagger(Duration::from_millis(400));
        let start = Instant::now();
        group.trigger(start);

        let now = start + Duration::from_millis(300);
        assert!(group.item_opacity(0, now) > 0.0);
        assert_eq!(group.item_opacity(1, now), 0.0);
    }

    #[test]
    fn rise_moves_items_up_as_they_fade_in() {
        let mut group = RevealGroup::new(1);
        let start = Instant::now();
        group.trigger(start);

        assert_eq!(group.item_rise(0, start), 20.0);
        let mid = start + Duration::from_millis(REVEAL_FADE_MS / 2);
        let rise = group.item_rise(0, mid);
        assert!(rise > 0.0 && rise < 20.0);
    }
}
