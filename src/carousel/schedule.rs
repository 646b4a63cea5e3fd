// SPDX-License-Identifier: MPL-2.0
//! Generation-tagged timer handles.
//!
//! The carousel controller never touches the runtime's timers directly. It
//! owns `TimerSlot`s; arming a slot yields a `TimerToken` that the shell
//! attaches to a scheduled wake-up. Arming again (or cancelling) supersedes
//! the previous token, so a wake-up that races a cancellation arrives with a
//! stale token and is ignored. This keeps the at-most-one-live-timer
//! invariant inside the controller instead of relying on runtime behavior.

/// Handle identifying one scheduled wake-up of a `TimerSlot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    generation: u64,
}

/// Owner of at most one outstanding timer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerSlot {
    /// Monotonic counter; every `arm` bumps it.
    generation: u64,
    /// Generation of the live timer, if one is outstanding.
    armed: Option<u64>,
}

impl TimerSlot {
    /// Creates an empty slot with no timer outstanding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the slot, superseding any previously issued token, and returns
    /// the token the shell must hand back when the timer fires.
    pub fn arm(&mut self) -> TimerToken {
        self.generation += 1;
        self.armed = Some(self.generation);
        TimerToken {
            generation: self.generation,
        }
    }

    /// Cancels the outstanding timer, if any. Idempotent.
    pub fn cancel(&mut self) {
        self.armed = None;
    }

    /// Returns whether a timer is currently outstanding.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Consumes the outstanding timer if `token` is the live one.
    ///
    /// Returns `false` for stale tokens (superseded or cancelled); the
    /// caller must treat such wake-ups as no-ops.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.armed == Some(token.generation) {
            self.armed = None;
            true
        } else {
            false
        }
    }
}
