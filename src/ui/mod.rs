// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down,
//! messages up" pattern.
//!
//! - [`navbar`] - Navigation bar with smooth-scroll section links
//! - [`sections`] - Hero block and reveal-animated card grids
//! - [`carousel_panel`] - Testimonial carousel with controls and dots
//! - [`contact`] - Contact form with validation feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod carousel_panel;
pub mod contact;
pub mod design_tokens;
pub mod navbar;
pub mod sections;
pub mod styles;
