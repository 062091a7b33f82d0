//! # Configuration Persistence
//!
//! Save and load display settings to/from disk, and locate the session
//! file.

use anyhow::Context;
use mytrip_nav::{CategoryId, ThemeMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Palette of the navigation bar.
    #[serde(default)]
    pub theme: ThemeMode,

    /// Category tab to highlight.
    ///
    /// When unset the flights tab is highlighted.
    #[serde(default)]
    pub selected_category: Option<CategoryId>,
}

/// Everything the UI needs from startup, handed to the app as root context.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub config: Config,
    /// Session file, or `None` to keep the session in memory only.
    pub session_path: Option<PathBuf>,
}

/// Returns the config file path.
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("mytrip").join("config.json"))
}

/// Returns the session file path.
pub fn session_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("mytrip").join("session.json"))
}

impl Config {
    /// Loads configuration from disk, or returns default if not found.
    pub fn load() -> Self {
        let Some(path) = config_path() else {
            tracing::warn!("Could not determine config directory");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(?path, "Config file not found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    tracing::info!(?path, "Loaded configuration");
                    config
                }
                Err(e) => {
                    tracing::warn!(?path, error = %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(?path, error = %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Applies command-line overrides on top of the loaded values.
    #[must_use]
    pub fn merge_cli(mut self, theme: Option<ThemeMode>, selected: Option<CategoryId>) -> Self {
        if let Some(theme) = theme {
            self.theme = theme;
        }
        if selected.is_some() {
            self.selected_category = selected;
        }
        self
    }

    /// Saves configuration to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path().context("Could not determine config directory")?;
        self.save_to(&path)
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents).context("Failed to write config")?;

        tracing::info!(?path, "Saved configuration");
        Ok(())
    }
}
