// SPDX-License-Identifier: MPL-2.0
//! `brochure` is a single-page studio brochure built with the Iced GUI
//! framework.
//!
//! It renders a scrollable page of content sections with staggered card
//! reveals, an autoplaying testimonial carousel with a pause-and-resume
//! contract around manual input, and a contact form with simulated
//! submission.

#![doc(html_root_url = "https://docs.rs/brochure/0.1.0")]

pub mod anim;
pub mod app;
pub mod carousel;
pub mod config;
pub mod content;
pub mod error;
pub mod form;
pub mod reveal;
pub mod ui;
