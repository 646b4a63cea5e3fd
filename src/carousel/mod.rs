// SPDX-License-Identifier: MPL-2.0
//! Carousel controller and its timer-handle abstraction.
//!
//! The controller in [`controller`] is a pure state machine; the shell in
//! `app` translates its effects into scheduled tasks. See the module docs
//! there for the state diagram.

mod controller;
pub mod schedule;

pub use controller::{Carousel, Command, Effect};
pub use schedule::TimerToken;
