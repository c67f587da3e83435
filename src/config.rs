//! Application configuration management.
//!
//! This module handles loading and saving the application configuration,
//! which currently holds the analytics API base URL.
//!
//! Configuration is stored at `~/.config/pitwall/config.json`; the
//! `PITWALL_API_BASE` environment variable overrides the file.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config directory paths
const APP_NAME: &str = "pitwall";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the API base URL
const ENV_API_BASE: &str = "PITWALL_API_BASE";

/// Base URL used when nothing is configured
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Season shown when the user has not picked one
pub const DEFAULT_SEASON: i32 = 2025;

/// Seasons the dashboard supports, in prefetch fallback order
pub const SUPPORTED_SEASONS: [i32; 5] = [2025, 2024, 2023, 2022, 2021];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base")]
    pub api_base_url: String,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            Self::default()
        };

        if let Ok(base) = std::env::var(ENV_API_BASE) {
            if !base.is_empty() {
                config.api_base_url = base;
            }
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(Config::default().api_base_url, DEFAULT_API_BASE);
    }

    #[test]
    fn test_missing_field_falls_back_to_default() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE);
    }
}
