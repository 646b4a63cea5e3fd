// SPDX-License-Identifier: MPL-2.0
use brochure::carousel::{Carousel, Command, Effect};
use brochure::config::{self, Config, DEFAULT_AUTOPLAY_INTERVAL_MS};
use brochure::content::Brochure;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_carousel_timing_follows_persisted_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: stock timing
    let initial_config = Config::default();
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    assert_eq!(
        loaded.autoplay_interval(),
        Duration::from_millis(DEFAULT_AUTOPLAY_INTERVAL_MS)
    );

    // 2. Slow the autoplay down and persist
    let slow_config = Config {
        autoplay_interval_ms: Some(9000),
        resume_delay_ms: Some(2000),
        theme: None,
    };
    config::save_to_path(&slow_config, &temp_config_file_path)
        .expect("Failed to write slowed config file");

    let reloaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load slowed config from path");
    assert_eq!(reloaded.autoplay_interval(), Duration::from_millis(9000));
    assert_eq!(reloaded.resume_delay(), Duration::from_millis(2000));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_embedded_content_drives_a_working_carousel() {
    let content = Brochure::embedded().expect("embedded content must parse");
    let mut carousel =
        Carousel::new(content.slide_count()).expect("embedded content has testimonials");

    // A full autoplay lap returns to the first slide.
    let mut token = match carousel.start_autoplay() {
        Effect::ScheduleTick(token) => token,
        other => panic!("expected ScheduleTick, got {other:?}"),
    };
    for _ in 0..content.slide_count() {
        match carousel.apply(Command::AutoplayTick(token)) {
            Effect::ScheduleTick(next) => token = next,
            other => panic!("expected ScheduleTick, got {other:?}"),
        }
    }
    assert_eq!(carousel.current_slide(), 0);
    assert!(carousel.is_autoplaying());
}

#[test]
fn test_interaction_pause_and_resume_cycle() {
    let mut carousel = Carousel::new(4).expect("non-empty carousel");
    carousel.start_autoplay();

    // Manual click pauses and leaves one resume wake-up outstanding.
    let resume = match carousel.apply(Command::GoTo(2)) {
        Effect::ScheduleResume(token) => token,
        other => panic!("expected ScheduleResume, got {other:?}"),
    };
    assert_eq!(carousel.counter_text(), "3 / 4");
    assert!(!carousel.is_autoplaying());

    // Hover before the quiet period elapses cancels the wake-up entirely.
    carousel.apply(Command::HoverEnter);
    assert_eq!(carousel.apply(Command::ResumeElapsed(resume)), Effect::None);
    assert!(!carousel.is_autoplaying());

    // Leaving the carousel resumes without any delay.
    assert!(matches!(
        carousel.apply(Command::HoverLeave),
        Effect::ScheduleTick(_)
    ));
    assert!(carousel.is_autoplaying());
    assert_eq!(carousel.current_slide(), 2);
}

#[test]
fn test_custom_content_document_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let content_path = dir.path().join("brochure.toml");

    std::fs::write(
        &content_path,
        r#"
studio = "Test Studio"
tagline = "Testing"

[[testimonials]]
quote = "Works."
author = "QA"
"#,
    )
    .expect("Failed to write content file");

    let content = Brochure::from_path(&content_path).expect("content file should parse");
    assert_eq!(content.studio, "Test Studio");
    assert_eq!(content.slide_count(), 1);

    dir.close().expect("Failed to close temporary directory");
}
