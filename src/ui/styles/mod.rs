// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles, grouped by widget kind.

pub mod button;
pub mod container;
