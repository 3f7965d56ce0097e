//! Application configuration management.
//!
//! This module handles loading and saving the application configuration:
//! where the two cached exports live on disk and which URLs they are
//! fetched from. Every field is optional; anything unset falls back to
//! the RadioID exports under the platform cache directory.
//!
//! Configuration is stored at `~/.config/dmrdir/config.json`.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/cache directory paths
const APP_NAME: &str = "dmrdir";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Default source for the user directory export.
const DEFAULT_USER_URL: &str = "https://radioid.net/static/users.json";

/// Default source for the repeater directory export.
const DEFAULT_REPEATER_URL: &str = "https://radioid.net/static/rptrs.json";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub user_file: Option<PathBuf>,
    pub repeater_file: Option<PathBuf>,
    pub user_url: Option<String>,
    pub repeater_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
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

    pub fn cache_dir() -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }

    pub fn user_file(&self) -> Result<PathBuf> {
        match &self.user_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::cache_dir()?.join("users.json")),
        }
    }

    pub fn repeater_file(&self) -> Result<PathBuf> {
        match &self.repeater_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::cache_dir()?.join("rptrs.json")),
        }
    }

    pub fn user_url(&self) -> &str {
        self.user_url.as_deref().unwrap_or(DEFAULT_USER_URL)
    }

    pub fn repeater_url(&self) -> &str {
        self.repeater_url.as_deref().unwrap_or(DEFAULT_REPEATER_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let config = Config::default();
        assert_eq!(config.user_url(), DEFAULT_USER_URL);
        assert_eq!(config.repeater_url(), DEFAULT_REPEATER_URL);
    }

    #[test]
    fn test_explicit_values_win() {
        let config = Config {
            user_file: Some(PathBuf::from("/tmp/u.json")),
            repeater_file: None,
            user_url: Some("https://example.com/u.json".to_string()),
            repeater_url: None,
        };
        assert_eq!(config.user_file().unwrap(), PathBuf::from("/tmp/u.json"));
        assert_eq!(config.user_url(), "https://example.com/u.json");
        assert_eq!(config.repeater_url(), DEFAULT_REPEATER_URL);
    }

    #[test]
    fn test_round_trips_through_json() {
        let config = Config {
            user_file: Some(PathBuf::from("/var/cache/dmrdir/users.json")),
            repeater_file: Some(PathBuf::from("/var/cache/dmrdir/rptrs.json")),
            user_url: None,
            repeater_url: None,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.user_file().unwrap(), config.user_file().unwrap());
        assert!(back.user_url.is_none());
    }
}
