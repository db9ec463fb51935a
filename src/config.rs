//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::branding::{APP_DATA_DIR, LOG_FILE_NAME};

/// Reduced-motion preference override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MotionPreference {
    /// Follow the environment (`REDUCE_MOTION` / `NO_MOTION`)
    #[default]
    Auto,
    /// Always reduce motion
    On,
    /// Never reduce motion
    Off,
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Résumé data file (TOML or JSON) replacing the embedded content
    #[serde(default)]
    pub resume: Option<PathBuf>,
    /// File copied into the downloads directory by the "Download résumé" command.
    /// When unset, a Markdown export of the résumé is written instead.
    #[serde(default)]
    pub resume_asset: Option<PathBuf>,
    /// Download target directory (defaults to the platform downloads dir)
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Reduced-motion override
    #[serde(default)]
    pub reduced_motion: MotionPreference,
    /// Event loop tick in milliseconds (animation resolution)
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How often the OS color scheme is re-read, in milliseconds
    #[serde(default = "default_os_theme_poll_ms")]
    pub os_theme_poll_ms: u64,
    /// Show the scroll cue and command trigger buttons
    #[serde(default = "default_true")]
    pub floating_triggers: bool,
}

const fn default_tick_rate_ms() -> u64 {
    50
}

const fn default_os_theme_poll_ms() -> u64 {
    2000
}

const fn default_true() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            reduced_motion: MotionPreference::default(),
            tick_rate_ms: default_tick_rate_ms(),
            os_theme_poll_ms: default_os_theme_poll_ms(),
            floating_triggers: true,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/termfolio/config.toml`
/// - macOS: `~/Library/Application Support/termfolio/config.toml`
/// - Windows: `%APPDATA%\termfolio\config.toml`
///
/// Every field is optional; a missing file means defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Gets the full path to the key-value preference file (theme choice).
    pub fn preferences_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("preferences.toml"))
    }

    /// Gets the full path to the log file.
    pub fn log_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(LOG_FILE_NAME))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration using temp file + rename for an atomic write.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        write_atomic(path, &content)
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `resume` and `resume_asset` point at existing files (if set)
    /// - `tick_rate_ms` is between 10 and 1000
    /// - `os_theme_poll_ms` is at least 250
    pub fn validate(&self) -> Result<()> {
        if let Some(resume) = &self.paths.resume {
            if !resume.is_file() {
                anyhow::bail!("Résumé file does not exist: {}", resume.display());
            }
        }

        if let Some(asset) = &self.paths.resume_asset {
            if !asset.is_file() {
                anyhow::bail!("Résumé asset does not exist: {}", asset.display());
            }
        }

        if !(10..=1000).contains(&self.ui.tick_rate_ms) {
            anyhow::bail!(
                "ui.tick_rate_ms must be between 10 and 1000, got {}",
                self.ui.tick_rate_ms
            );
        }

        if self.ui.os_theme_poll_ms < 250 {
            anyhow::bail!(
                "ui.os_theme_poll_ms must be at least 250, got {}",
                self.ui.os_theme_poll_ms
            );
        }

        Ok(())
    }
}

/// Writes `content` to `path` through a sibling temp file and a rename.
pub(crate) fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .context(format!("Failed to create directory: {}", parent.display()))?;
    }

    let temp_path = path.with_extension("toml.tmp");

    fs::write(&temp_path, content)
        .context(format!("Failed to write temp file: {}", temp_path.display()))?;

    fs::rename(&temp_path, path).context(format!(
        "Failed to rename temp file to: {}",
        path.display()
    ))?;

    Ok(())
}
