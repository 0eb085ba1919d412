//! TOML-based application configuration.
//!
//! Stores the user's default session parameters and notification
//! preferences at `~/.config/timegarden/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.toml";

/// Default parameters offered when starting a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionDefaults {
    #[serde(default = "default_active_minutes")]
    pub active_minutes: u64,
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u64,
    #[serde(default = "default_cycles")]
    pub cycles: u32,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            active_minutes: default_active_minutes(),
            break_minutes: default_break_minutes(),
            cycles: default_cycles(),
        }
    }
}

/// Notification preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/timegarden/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionDefaults,
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

fn default_active_minutes() -> u64 {
    25
}
fn default_break_minutes() -> u64 {
    5
}
fn default_cycles() -> u32 {
    2
}
fn default_true() -> bool {
    true
}

impl Config {
    /// Load from the default location; a missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::path()?)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Self::path()?)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), content).map_err(|source| ConfigError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        Ok(())
    }

    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|source| ConfigError::Io {
            path: PathBuf::from("~/.config/timegarden"),
            source,
        })?;
        Ok(dir.join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_start_form() {
        let config = Config::default();
        assert_eq!(config.session.active_minutes, 25);
        assert_eq!(config.session.break_minutes, 5);
        assert_eq!(config.session.cycles, 2);
        assert!(config.notifications.enabled);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.session.active_minutes, 25);
    }

    #[test]
    fn round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.session.cycles = 4;
        config.notifications.enabled = false;
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.session.cycles, 4);
        assert!(!reloaded.notifications.enabled);
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[session]\nactive_minutes = 50\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.session.active_minutes, 50);
        assert_eq!(config.session.break_minutes, 5);
        assert!(config.notifications.enabled);
    }
}
