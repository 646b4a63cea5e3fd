// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Autoplay**: Carousel autoplay tick interval and bounds
//! - **Resume**: Quiet period before autoplay resumes after manual input
//! - **Form**: Simulated submission latency and banner lifetime
//! - **Animation**: Reveal and smooth-scroll timing

// ==========================================================================
// Autoplay Defaults
// ==========================================================================

/// Default interval between autoplay ticks (milliseconds).
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5000;

/// Minimum allowed autoplay interval.
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 1000;

/// Maximum allowed autoplay interval.
pub const MAX_AUTOPLAY_INTERVAL_MS: u64 = 60_000;

// ==========================================================================
// Resume Defaults
// ==========================================================================

/// Default quiet period after a manual interaction before autoplay
/// resumes (milliseconds).
pub const DEFAULT_RESUME_DELAY_MS: u64 = 3000;

/// Minimum allowed resume delay.
pub const MIN_RESUME_DELAY_MS: u64 = 500;

/// Maximum allowed resume delay.
pub const MAX_RESUME_DELAY_MS: u64 = 30_000;

// ==========================================================================
// Contact Form Defaults
// ==========================================================================

/// Simulated submission latency (milliseconds). The form never contacts a
/// server; this delay stands in for one.
pub const FORM_SUBMIT_LATENCY_MS: u64 = 2000;

/// Lifetime of the success banner before it auto-dismisses (milliseconds).
pub const SUCCESS_BANNER_LIFETIME_MS: u64 = 5000;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Duration of a single card's fade-in reveal (milliseconds).
pub const REVEAL_FADE_MS: u64 = 600;

/// Stagger between consecutive cards in a reveal group (milliseconds).
pub const REVEAL_STAGGER_MS: u64 = 100;

/// Delay before the load-triggered contact detail group starts revealing
/// (milliseconds).
pub const REVEAL_LOAD_DELAY_MS: u64 = 500;

/// Duration of the carousel track's slide transition (milliseconds).
pub const SLIDE_TRANSITION_MS: u64 = 500;

/// Duration of the smooth scroll animation between sections (milliseconds).
pub const SMOOTH_SCROLL_MS: u64 = 450;

/// Period of the animation tick subscription (milliseconds).
pub const ANIMATION_TICK_MS: u64 = 16;

/// Period of the housekeeping tick subscription used for banner
/// auto-dismiss and reveal progress (milliseconds).
pub const HOUSEKEEPING_TICK_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Autoplay validation
    assert!(MIN_AUTOPLAY_INTERVAL_MS > 0);
    assert!(MAX_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS <= MAX_AUTOPLAY_INTERVAL_MS);

    // Resume validation
    assert!(MIN_RESUME_DELAY_MS > 0);
    assert!(MAX_RESUME_DELAY_MS >= MIN_RESUME_DELAY_MS);
    assert!(DEFAULT_RESUME_DELAY_MS >= MIN_RESUME_DELAY_MS);
    assert!(DEFAULT_RESUME_DELAY_MS <= MAX_RESUME_DELAY_MS);

    // The resume delay must be shorter than the autoplay interval so a
    // resumed carousel does not tick before its first full period.
    assert!(DEFAULT_RESUME_DELAY_MS < DEFAULT_AUTOPLAY_INTERVAL_MS);

    // Form validation
    assert!(FORM_SUBMIT_LATENCY_MS > 0);
    assert!(SUCCESS_BANNER_LIFETIME_MS > 0);

    // Animation validation
    assert!(REVEAL_FADE_MS > 0);
    assert!(REVEAL_STAGGER_MS > 0);
    assert!(SMOOTH_SCROLL_MS > 0);
    assert!(ANIMATION_TICK_MS > 0);
    assert!(ANIMATION_TICK_MS < HOUSEKEEPING_TICK_MS);

    // The slide transition must finish well before the next autoplay tick.
    assert!(SLIDE_TRANSITION_MS < DEFAULT_AUTOPLAY_INTERVAL_MS);
};
