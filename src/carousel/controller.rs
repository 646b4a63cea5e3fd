// SPDX-License-Identifier: MPL-2.0
//! The carousel state machine.
//!
//! `Carousel` owns the current slide index and the autoplay/resume timer
//! slots. Every UI input is expressed as a [`Command`] and applied
//! synchronously; the returned [`Effect`] tells the shell which timer to
//! schedule, if any. The controller itself never sleeps, which keeps all of
//! its transitions unit-testable without a runtime.
//!
//! Two logical states exist: autoplaying (the autoplay slot is armed) and
//! paused. Manual interactions pause immediately and arm a resume timer;
//! hover pauses and resumes without any delay.

use super::schedule::{TimerSlot, TimerToken};

/// Discrete inputs consumed by the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Advance one slide (no wraparound). Manual interaction.
    Next,
    /// Go back one slide (no wraparound). Manual interaction.
    Prev,
    /// Jump to a specific slide. Out-of-range or redundant indices are
    /// silently ignored. Manual interaction.
    GoTo(usize),
    /// Pointer entered the carousel area: pause immediately.
    HoverEnter,
    /// Pointer left the carousel area: resume immediately.
    HoverLeave,
    /// The autoplay timer fired. Advances, wrapping at the end.
    AutoplayTick(TimerToken),
    /// The post-interaction quiet period elapsed.
    ResumeElapsed(TimerToken),
}

/// Side effect requested from the shell after applying a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to schedule.
    None,
    /// Schedule an autoplay tick after the configured interval, delivering
    /// `Command::AutoplayTick` with this token.
    ScheduleTick(TimerToken),
    /// Schedule a resume wake-up after the configured quiet period,
    /// delivering `Command::ResumeElapsed` with this token.
    ScheduleResume(TimerToken),
}

/// Controller for one slide carousel.
///
/// Constructed once per carousel found in the content; multiple instances
/// are fully independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    current_slide: usize,
    total_slides: usize,
    autoplay: TimerSlot,
    resume: TimerSlot,
}

impl Carousel {
    /// Creates a controller for `total_slides` slides, starting at slide 0.
    ///
    /// Returns `None` when there are no slides: the carousel is simply not
    /// constructed rather than existing in a degenerate state.
    #[must_use]
    pub fn new(total_slides: usize) -> Option<Self> {
        if total_slides == 0 {
            return None;
        }
        Some(Self {
            current_slide: 0,
            total_slides,
            autoplay: TimerSlot::new(),
            resume: TimerSlot::new(),
        })
    }

    /// Starts (or restarts) autoplay.
    ///
    /// Any previously armed autoplay timer is unconditionally superseded
    /// and a pending resume wake-up is cancelled, so at most one timer per
    /// slot stays live.
    pub fn start_autoplay(&mut self) -> Effect {
        self.resume.cancel();
        Effect::ScheduleTick(self.autoplay.arm())
    }

    /// Stops autoplay. Idempotent; pending resume wake-ups are untouched.
    pub fn stop_autoplay(&mut self) {
        self.autoplay.cancel();
    }

    /// Applies a command and returns the effect the shell must execute.
    pub fn apply(&mut self, command: Command) -> Effect {
        match command {
            Command::Next => {
                if self.can_go_next() {
                    self.set_current(self.current_slide + 1);
                }
                self.pause_for_interaction()
            }
            Command::Prev => {
                if self.can_go_previous() {
                    self.set_current(self.current_slide - 1);
                }
                self.pause_for_interaction()
            }
            Command::GoTo(index) => {
                if index < self.total_slides && index != self.current_slide {
                    self.set_current(index);
                }
                self.pause_for_interaction()
            }
            Command::HoverEnter => {
                self.stop_autoplay();
                // Hover-stop supersedes any scheduled resume.
                self.resume.cancel();
                Effect::None
            }
            Command::HoverLeave => self.start_autoplay(),
            Command::AutoplayTick(token) => {
                if !self.autoplay.fire(token) {
                    return Effect::None;
                }
                // The only place the carousel wraps around.
                if self.is_at_last() {
                    self.set_current(0);
                } else {
                    self.set_current(self.current_slide + 1);
                }
                Effect::ScheduleTick(self.autoplay.arm())
            }
            Command::ResumeElapsed(token) => {
                if !self.resume.fire(token) {
                    return Effect::None;
                }
                self.start_autoplay()
            }
        }
    }

    /// Stops autoplay and arms the post-interaction resume timer.
    ///
    /// Arming supersedes any resume timer a previous interaction left
    /// outstanding, so rapid repeated input keeps exactly one pending.
    fn pause_for_interaction(&mut self) -> Effect {
        self.stop_autoplay();
        Effect::ScheduleResume(self.resume.arm())
    }

    fn set_current(&mut self, index: usize) {
        // Defensive clamp; commands are already range-checked.
        self.current_slide = index.min(self.total_slides - 1);
    }

    /// Index of the slide currently shown.
    #[must_use]
    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    /// Number of slides; fixed for the controller's lifetime.
    #[must_use]
    pub fn total_slides(&self) -> usize {
        self.total_slides
    }

    /// Whether the autoplay timer is currently live.
    #[must_use]
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_armed()
    }

    /// Whether a post-interaction resume wake-up is outstanding.
    #[must_use]
    pub fn is_resume_pending(&self) -> bool {
        self.resume.is_armed()
    }

    /// Checks if the current slide is the first.
    #[must_use]
    pub fn is_at_first(&self) -> bool {
        self.current_slide == 0
    }

    /// Checks if the current slide is the last.
    #[must_use]
    pub fn is_at_last(&self) -> bool {
        self.current_slide == self.total_slides - 1
    }

    /// Whether the "previous" control should be enabled.
    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        !self.is_at_first()
    }

    /// Whether the "next" control should be enabled.
    #[must_use]
    pub fn can_go_next(&self) -> bool {
        !self.is_at_last()
    }

    /// Counter label in the form `"3 / 4"` (1-based).
    #[must_use]
    pub fn counter_text(&self) -> String {
        format!("{} / {}", self.current_slide + 1, self.total_slides)
    }

    /// Whether the indicator dot at `index` is the active one.
    #[must_use]
    pub fn is_dot_active(&self, index: usize) -> bool {
        index == self.current_slide
    }

    /// Horizontal offset of the slide track, in percent of one slide width.
    /// Slide 0 sits at 0%, each further slide shifts the track left by 100%.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // slide counts are tiny
    pub fn track_offset_percent(&self) -> f32 {
        -(self.current_slide as f32) * 100.0
    }
}
