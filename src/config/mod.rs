// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use brochure::config::{self, Config};
//! use std::path::Path;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.autoplay_interval_ms = Some(8000);
//!
//! // Save the modified configuration
//! config::save_to_path(&config, Path::new("settings.toml")).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod defaults;

pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Brochure";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Interval between carousel autoplay ticks, in milliseconds.
    #[serde(default)]
    pub autoplay_interval_ms: Option<u64>,
    /// Quiet period before autoplay resumes after manual input, in
    /// milliseconds.
    #[serde(default)]
    pub resume_delay_ms: Option<u64>,
    /// Preferred theme: "light" or "dark".
    #[serde(default)]
    pub theme: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: Some(DEFAULT_AUTOPLAY_INTERVAL_MS),
            resume_delay_ms: Some(DEFAULT_RESUME_DELAY_MS),
            theme: None,
        }
    }
}

impl Config {
    /// Returns the autoplay interval as a clamped `Duration`.
    #[must_use]
    pub fn autoplay_interval(&self) -> Duration {
        let ms = self
            .autoplay_interval_ms
            .unwrap_or(DEFAULT_AUTOPLAY_INTERVAL_MS)
            .clamp(MIN_AUTOPLAY_INTERVAL_MS, MAX_AUTOPLAY_INTERVAL_MS);
        Duration::from_millis(ms)
    }

    /// Returns the resume delay as a clamped `Duration`.
    #[must_use]
    pub fn resume_delay(&self) -> Duration {
        let ms = self
            .resume_delay_ms
            .unwrap_or(DEFAULT_RESUME_DELAY_MS)
            .clamp(MIN_RESUME_DELAY_MS, MAX_RESUME_DELAY_MS);
        Duration::from_millis(ms)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_intervals() {
        let config = Config {
            autoplay_interval_ms: Some(8000),
            resume_delay_ms: Some(1500),
            theme: Some("dark".to_string()),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.autoplay_interval_ms, config.autoplay_interval_ms);
        assert_eq!(loaded.resume_delay_ms, config.resume_delay_ms);
        assert_eq!(loaded.theme, config.theme);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(
            loaded.autoplay_interval_ms,
            Some(DEFAULT_AUTOPLAY_INTERVAL_MS)
        );
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn autoplay_interval_clamps_out_of_range_values() {
        let too_small = Config {
            autoplay_interval_ms: Some(1),
            ..Config::default()
        };
        assert_eq!(
            too_small.autoplay_interval(),
            Duration::from_millis(MIN_AUTOPLAY_INTERVAL_MS)
        );

        let too_large = Config {
            autoplay_interval_ms: Some(u64::MAX),
            ..Config::default()
        };
        assert_eq!(
            too_large.autoplay_interval(),
            Duration::from_millis(MAX_AUTOPLAY_INTERVAL_MS)
        );
    }

    #[test]
    fn resume_delay_defaults_when_unset() {
        let config = Config {
            resume_delay_ms: None,
            ..Config::default()
        };
        assert_eq!(
            config.resume_delay(),
            Duration::from_millis(DEFAULT_RESUME_DELAY_MS)
        );
    }
}
