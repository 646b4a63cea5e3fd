// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::carousel;
use crate::ui::contact;
use crate::ui::navbar;
use iced::widget::scrollable;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Carousel(carousel::Command),
    Contact(contact::Message),
    /// The simulated form-submission latency elapsed.
    FormSubmissionCompleted,
    /// The page scrollable moved (user wheel, drag, or a smooth-scroll
    /// frame).
    PageScrolled(scrollable::Viewport),
    /// Animation frame for the smooth scroll and the card reveals.
    AnimationFrame(Instant),
    /// Slow housekeeping tick; expires the form's success banner.
    Tick(Instant),
    /// Fixed post-launch delay elapsed; reveal the contact details.
    RevealContactDetails,
}

/// Launch options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional config directory override (for `settings.toml`).
    pub config_dir: Option<String>,
    /// Optional content document replacing the embedded brochure.
    pub content_path: Option<String>,
}
