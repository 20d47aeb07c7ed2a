//! TOML-based application configuration.
//!
//! Covers presentation defaults only (dashboard window size, color
//! output). The urgency tier boundaries are business rules and are
//! deliberately not configurable.
//!
//! Configuration is stored at `~/.config/duetrack/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::{ConfigError, Result};

/// Dashboard configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Horizon (in days) fetched for the urgent-subset dashboard view.
    #[serde(default = "default_window_days")]
    pub window_days: i64,
    /// Whether CLI output colors rows by urgency tier.
    #[serde(default = "default_true")]
    pub show_colors: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/duetrack/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

fn default_window_days() -> i64 {
    crate::dashboard::DEFAULT_DASHBOARD_DAYS
}
fn default_true() -> bool {
    true
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            show_colors: true,
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load the configuration, falling back to defaults when the file
    /// does not exist yet.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let config = toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        Ok(config)
    }

    /// Save the configuration.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        let raw =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(&path, raw).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}
