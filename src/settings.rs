//! Runtime settings
//!
//! Game rules are fixed constants; settings only cover how the game is driven.
//! Loaded from a JSON file named by `MAZE_CHASE_SETTINGS`, defaults otherwise.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{MAX_SUBSTEPS, TICK_RATE_HZ};

/// Environment variable holding the settings file path
pub const SETTINGS_ENV: &str = "MAZE_CHASE_SETTINGS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for adversary wandering. `None` picks one from the clock.
    pub seed: Option<u64>,
    /// Simulation ticks per second
    pub tick_rate_hz: u32,
    /// Cap on ticks run per frame
    pub max_substeps: u32,

    // === Headless driver ===
    /// Ticks to run before exiting
    pub demo_ticks: u64,
    /// Steer the player with random turns
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            tick_rate_hz: TICK_RATE_HZ,
            max_substeps: MAX_SUBSTEPS,
            demo_ticks: 2400,
            autopilot: true,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Settings from `MAZE_CHASE_SETTINGS`, falling back to defaults
    pub fn load() -> Self {
        let Ok(path) = std::env::var(SETTINGS_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Wall-clock length of one tick (a zero rate is treated as 1 Hz)
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate_hz.max(1)
    }

    /// Configured seed, or one derived from the system clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.tick_rate_hz, 20);
        assert_eq!(s.tick_interval(), Duration::from_millis(50));
        assert_eq!(s.seed, None);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{ "seed": 7, "tick_rate_hz": 40 }"#).unwrap();
        assert_eq!(s.seed, Some(7));
        assert_eq!(s.resolve_seed(), 7);
        assert_eq!(s.tick_interval(), Duration::from_millis(25));
        assert_eq!(s.max_substeps, MAX_SUBSTEPS);
        assert!(s.autopilot);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(matches!(
            Settings::from_json("{ seed: }"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(matches!(
            Settings::from_file("/definitely/not/here.json"),
            Err(SettingsError::Io(_))
        ));
    }

    #[test]
    fn test_zero_rate_does_not_divide_by_zero() {
        let s = Settings {
            tick_rate_hz: 0,
            ..Default::default()
        };
        assert_eq!(s.tick_interval(), Duration::from_secs(1));
    }
}
