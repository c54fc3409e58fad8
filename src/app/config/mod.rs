// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[handle]` - Divider line and knob geometry
//! - `[display]` - Caption visibility
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_COMPARE_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_compare::app::config;
//! use std::path::Path;
//!
//! let (mut config, _warning) = config::load();
//! config.display.show_labels = Some(false);
//! config::save_to_path(&config, Path::new("settings.toml")).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::widgets::compare_canvas::HandleStyle;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Divider handle geometry, in logical pixels.
///
/// Out-of-range values are accepted on load and clamped by
/// [`Config::handle_style`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HandleConfig {
    #[serde(default = "default_line_width", skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f32>,

    #[serde(default = "default_knob_radius", skip_serializing_if = "Option::is_none")]
    pub knob_radius: Option<f32>,

    #[serde(default = "default_hit_slop", skip_serializing_if = "Option::is_none")]
    pub hit_slop: Option<f32>,
}

impl Default for HandleConfig {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
            knob_radius: default_knob_radius(),
            hit_slop: default_hit_slop(),
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Show "Before"/"After" captions over the layers.
    #[serde(default = "default_show_labels", skip_serializing_if = "Option::is_none")]
    pub show_labels: Option<bool>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_labels: default_show_labels(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub handle: HandleConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Resolves the handle section into a drawable style, clamping each value
    /// to its allowed range.
    #[must_use]
    pub fn handle_style(&self) -> HandleStyle {
        let pick = |value: Option<f32>, default: f32, min: f32, max: f32| {
            value
                .filter(|v| v.is_finite())
                .unwrap_or(default)
                .clamp(min, max)
        };

        HandleStyle {
            line_width: pick(
                self.handle.line_width,
                DEFAULT_LINE_WIDTH,
                MIN_LINE_WIDTH,
                MAX_LINE_WIDTH,
            ),
            knob_radius: pick(
                self.handle.knob_radius,
                DEFAULT_KNOB_RADIUS,
                MIN_KNOB_RADIUS,
                MAX_KNOB_RADIUS,
            ),
            hit_slop: pick(
                self.handle.hit_slop,
                DEFAULT_HIT_SLOP,
                MIN_HIT_SLOP,
                MAX_HIT_SLOP,
            ),
        }
    }

    #[must_use]
    pub fn show_labels(&self) -> bool {
        self.display.show_labels.unwrap_or(DEFAULT_SHOW_LABELS)
    }
}

fn default_line_width() -> Option<f32> {
    Some(DEFAULT_LINE_WIDTH)
}

fn default_knob_radius() -> Option<f32> {
    Some(DEFAULT_KNOB_RADIUS)
}

fn default_hit_slop() -> Option<f32> {
    Some(DEFAULT_HIT_SLOP)
}

fn default_show_labels() -> Option<bool> {
    Some(DEFAULT_SHOW_LABELS)
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
/// default config with the i18n key of a warning explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
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
