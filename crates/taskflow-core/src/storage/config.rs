//! TOML-based application configuration.
//!
//! Holds the weekly work-hours pattern edited by the `hours` commands.
//! Stored at `~/.config/taskflow/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::availability::{WeekSchedule, WorkDayConfig};
use crate::error::ConfigError;

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/taskflow/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub workweek: WeekSchedule,
}

impl Default for Config {
    fn default() -> Self {
        let mut workweek = WeekSchedule::default();
        workweek.monday = WorkDayConfig::new("09:00", "17:00", true);
        workweek.tuesday = WorkDayConfig::new("09:00", "17:00", true);
        workweek.wednesday = WorkDayConfig::new("09:00", "16:00", true);
        workweek.thursday = WorkDayConfig::new("09:00", "17:00", true);
        workweek.friday = WorkDayConfig::new("09:00", "15:00", true);
        workweek.saturday = WorkDayConfig::new("10:00", "14:00", false);
        workweek.sunday = WorkDayConfig::new("10:00", "14:00", false);
        Self { workweek }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|err| ConfigError::DirUnavailable(err.to_string()))?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing the default config on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|err| ConfigError::LoadFailed {
                path,
                message: err.to_string(),
            }),
            Err(_) => {
                let config = Self::default();
                config.save()?;
                Ok(config)
            }
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|err| ConfigError::SaveFailed {
            path: path.clone(),
            message: err.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|err| ConfigError::SaveFailed {
            path,
            message: err.to_string(),
        })
    }

    /// Load from disk, returning the default on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}
