// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read once at startup
//! from a `settings.toml` file. Settings are never written back.
//!
//! # Configuration Sections
//!
//! - `[navigation]` - Activation band for marker-driven paging
//! - `[overlay]` - Cursor circle radius and color
//! - `[tracking]` - External tracker command, pointer emulation, queue sizing
//!
//! # Examples
//!
//! ```no_run
//! use touchless_viewer::config;
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! println!("band = {}", config.navigation.activation_band().fraction());
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::Result;
use crate::marker_navigation::ActivationBand;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Marker navigation settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NavigationConfig {
    /// Fraction of the display width forming each edge zone.
    #[serde(default = "default_activation_band")]
    pub activation_band: Option<f32>,
}

impl NavigationConfig {
    pub fn activation_band(&self) -> ActivationBand {
        self.activation_band
            .map(ActivationBand::new)
            .unwrap_or_default()
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            activation_band: default_activation_band(),
        }
    }
}

/// Cursor overlay settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OverlayConfig {
    #[serde(default = "default_cursor_radius")]
    pub cursor_radius: Option<f32>,

    /// Cursor color as `#RRGGBB`.
    #[serde(default = "default_cursor_color")]
    pub cursor_color: Option<String>,
}

impl OverlayConfig {
    pub fn cursor_radius(&self) -> f32 {
        let radius = self.cursor_radius.unwrap_or(DEFAULT_CURSOR_RADIUS);
        if radius.is_finite() {
            radius.clamp(MIN_CURSOR_RADIUS, MAX_CURSOR_RADIUS)
        } else {
            DEFAULT_CURSOR_RADIUS
        }
    }

    /// Cursor color as RGB bytes, falling back to the default on bad input.
    pub fn cursor_rgb(&self) -> [u8; 3] {
        self.cursor_color
            .as_deref()
            .and_then(parse_hex_color)
            .or_else(|| parse_hex_color(DEFAULT_CURSOR_COLOR))
            .unwrap_or([255, 0, 0])
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            cursor_radius: default_cursor_radius(),
            cursor_color: default_cursor_color(),
        }
    }
}

/// Tracking collaborator settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct TrackingConfig {
    /// External tracker program and arguments.
    #[serde(default)]
    pub command: Option<Vec<String>>,

    /// Emulate the marker with the mouse pointer.
    #[serde(default)]
    pub pointer_marker: Option<bool>,

    #[serde(default)]
    pub queue_capacity: Option<usize>,

    #[serde(default)]
    pub poll_interval_ms: Option<u64>,
}

impl TrackingConfig {
    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity
            .unwrap_or(DEFAULT_QUEUE_CAPACITY)
            .clamp(MIN_QUEUE_CAPACITY, MAX_QUEUE_CAPACITY)
    }

    pub fn poll_interval_ms(&self) -> u64 {
        self.poll_interval_ms
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS)
            .clamp(MIN_POLL_INTERVAL_MS, MAX_POLL_INTERVAL_MS)
    }

    pub fn pointer_marker(&self) -> bool {
        self.pointer_marker.unwrap_or(false)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub overlay: OverlayConfig,

    #[serde(default)]
    pub tracking: TrackingConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_activation_band() -> Option<f32> {
    Some(DEFAULT_ACTIVATION_BAND)
}

fn default_cursor_radius() -> Option<f32> {
    Some(DEFAULT_CURSOR_RADIUS)
}

fn default_cursor_color() -> Option<String> {
    Some(DEFAULT_CURSOR_COLOR.to_string())
}

/// Parses `#RRGGBB` (leading `#` optional).
pub fn parse_hex_color(raw: &str) -> Option<[u8; 3]> {
    let hex = raw.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

// =============================================================================
// Load Functions
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    log::info!("Loaded settings from {}", path.display());
                    return (config, None);
                }
                Err(err) => {
                    log::warn!("Ignoring {}: {}", path.display(), err);
                    return (Config::default(), Some(err.status_text()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_all_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r##"
[navigation]
activation_band = 0.25

[overlay]
cursor_radius = 10.0
cursor_color = "#00FF80"

[tracking]
command = ["python3", "marker.py"]
queue_capacity = 8
poll_interval_ms = 33
"##,
        )
        .expect("failed to write config");

        let config = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(config.navigation.activation_band().fraction(), 0.25);
        assert_eq!(config.overlay.cursor_radius(), 10.0);
        assert_eq!(config.overlay.cursor_rgb(), [0x00, 0xFF, 0x80]);
        assert_eq!(
            config.tracking.command,
            Some(vec!["python3".to_string(), "marker.py".to_string()])
        );
        assert_eq!(config.tracking.queue_capacity(), 8);
        assert_eq!(config.tracking.poll_interval_ms(), 33);
        assert!(!config.tracking.pointer_marker());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "").expect("failed to write config");

        let config = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(config, Config::default());
        assert_eq!(config.navigation.activation_band(), ActivationBand::default());
    }

    #[test]
    fn load_from_path_errors_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn load_with_override_warns_and_falls_back_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[navigation\n")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            navigation: NavigationConfig {
                activation_band: Some(0.9),
            },
            overlay: OverlayConfig {
                cursor_radius: Some(-3.0),
                cursor_color: Some("not a color".into()),
            },
            tracking: TrackingConfig {
                queue_capacity: Some(0),
                poll_interval_ms: Some(60_000),
                ..TrackingConfig::default()
            },
        };

        assert_eq!(
            config.navigation.activation_band().fraction(),
            MAX_ACTIVATION_BAND
        );
        assert_eq!(config.overlay.cursor_radius(), MIN_CURSOR_RADIUS);
        assert_eq!(config.overlay.cursor_rgb(), [255, 0, 0]);
        assert_eq!(config.tracking.queue_capacity(), MIN_QUEUE_CAPACITY);
        assert_eq!(config.tracking.poll_interval_ms(), MAX_POLL_INTERVAL_MS);
    }

    #[test]
    fn non_finite_band_falls_back_to_default() {
        let nav = NavigationConfig {
            activation_band: Some(f32::NAN),
        };
        assert_eq!(nav.activation_band(), ActivationBand::default());
    }

    #[test]
    fn parse_hex_color_accepts_with_and_without_hash() {
        assert_eq!(parse_hex_color("#102030"), Some([0x10, 0x20, 0x30]));
        assert_eq!(parse_hex_color("ffffff"), Some([255, 255, 255]));
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
    }
}
