// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[notifications]` - Defaults applied to new toasts and the tick rate
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `ICED_TOASTS_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.notifications.close_in_secs = 5.0;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::notifications::{Position, ToastOptions};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key reported when an existing settings file cannot be parsed.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: ThemeMode::System,
        }
    }
}

/// Defaults for newly shown toasts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    /// Whether toasts close on their own.
    #[serde(default = "default_auto_close")]
    pub auto_close: bool,

    /// Seconds before an auto-closing toast is removed.
    #[serde(default = "default_close_in_secs")]
    pub close_in_secs: f32,

    /// Screen anchor for new toasts.
    #[serde(default, deserialize_with = "deserialize_position")]
    pub position: Position,

    /// Interval of the expiry/animation tick in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            auto_close: DEFAULT_AUTO_CLOSE,
            close_in_secs: DEFAULT_CLOSE_IN_SECS,
            position: Position::default(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl NotificationsConfig {
    /// Auto-close delay clamped to the supported range.
    #[must_use]
    pub fn close_in(&self) -> Duration {
        let secs = if self.close_in_secs.is_finite() {
            self.close_in_secs
                .clamp(MIN_CLOSE_IN_SECS, MAX_CLOSE_IN_SECS)
        } else {
            DEFAULT_CLOSE_IN_SECS
        };
        Duration::from_secs_f32(secs)
    }

    /// Tick interval clamped to the supported range.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(
            self.tick_interval_ms
                .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS),
        )
    }

    /// Options for a toast created with these defaults.
    #[must_use]
    pub fn toast_options(&self) -> ToastOptions {
        ToastOptions::default()
            .auto_close(self.auto_close)
            .close_in(self.close_in())
            .position(self.position)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Toast defaults.
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_auto_close() -> bool {
    DEFAULT_AUTO_CLOSE
}

fn default_close_in_secs() -> f32 {
    DEFAULT_CLOSE_IN_SECS
}

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(D::Error::custom)
}

fn deserialize_position<'de, D>(deserializer: D) -> std::result::Result<Position, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(D::Error::custom)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a translation key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default settings");
                    return (Config::default(), Some(LOAD_ERROR_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
