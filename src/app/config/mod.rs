// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[glass]` - Startup values of the glass style sliders
//! - `[capture]` - Screenshot timing
//! - `[wallpaper]` - Where applied wallpapers are written
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `LIQUID_GLASS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use liquid_glass::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::style::newtypes::{
    blur_bounds, corner_radius_bounds, opacity_bounds, refraction_amount_bounds,
    refraction_height_bounds,
};
use crate::domain::style::{
    BlurRadius, CornerRadius, GlassOpacity, GlassStyle, RefractionAmount, RefractionHeight,
};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Initial glass style of each editing session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GlassConfig {
    #[serde(default = "default_blur_radius")]
    pub blur_radius: f32,
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    #[serde(default = "default_refraction_height")]
    pub refraction_height: f32,
    #[serde(default = "default_refraction_amount")]
    pub refraction_amount: f32,
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f32,
}

impl Default for GlassConfig {
    fn default() -> Self {
        Self {
            blur_radius: blur_bounds::DEFAULT,
            opacity: opacity_bounds::DEFAULT,
            refraction_height: refraction_height_bounds::DEFAULT,
            refraction_amount: refraction_amount_bounds::DEFAULT,
            corner_radius: corner_radius_bounds::DEFAULT,
        }
    }
}

impl GlassConfig {
    /// Converts the raw values into a style, clamping each one.
    #[must_use]
    pub fn style(&self) -> GlassStyle {
        GlassStyle {
            blur_radius: BlurRadius::new(self.blur_radius),
            opacity: GlassOpacity::new(self.opacity),
            refraction_height: RefractionHeight::new(self.refraction_height),
            refraction_amount: RefractionAmount::new(self.refraction_amount),
            corner_radius: CornerRadius::new(self.corner_radius),
        }
    }
}

/// Screenshot timing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CaptureConfig {
    /// Milliseconds to wait after hiding the chrome before capturing.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// Seconds after which a pending capture is abandoned.
    #[serde(default = "default_capture_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            timeout_secs: DEFAULT_CAPTURE_TIMEOUT_SECS,
        }
    }
}

impl CaptureConfig {
    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(
            self.settle_delay_ms
                .clamp(MIN_SETTLE_DELAY_MS, MAX_SETTLE_DELAY_MS),
        )
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(
            self.timeout_secs
                .clamp(MIN_CAPTURE_TIMEOUT_SECS, MAX_CAPTURE_TIMEOUT_SECS),
        )
    }
}

/// Wallpaper output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WallpaperConfig {
    /// Directory receiving the generated PNG files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl WallpaperConfig {
    /// Configured directory, or `<data dir>/wallpapers`.
    #[must_use]
    pub fn resolved_output_dir(&self) -> Option<PathBuf> {
        self.output_dir.clone().or_else(paths::default_wallpaper_dir)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub glass: GlassConfig,

    #[serde(default)]
    pub capture: CaptureConfig,

    #[serde(default)]
    pub wallpaper: WallpaperConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_blur_radius() -> f32 {
    blur_bounds::DEFAULT
}

fn default_opacity() -> f32 {
    opacity_bounds::DEFAULT
}

fn default_refraction_height() -> f32 {
    refraction_height_bounds::DEFAULT
}

fn default_refraction_amount() -> f32 {
    refraction_amount_bounds::DEFAULT
}

fn default_corner_radius() -> f32 {
    corner_radius_bounds::DEFAULT
}

fn default_settle_delay_ms() -> u64 {
    DEFAULT_SETTLE_DELAY_MS
}

fn default_capture_timeout_secs() -> u64 {
    DEFAULT_CAPTURE_TIMEOUT_SECS
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

// =============================================================================
// Load / Save
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|path| path.join(CONFIG_FILE))
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "loaded configuration");
            (config, None)
        }
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "invalid configuration, using defaults"
            );
            (
                Config::default(),
                Some("notification-config-load-error".to_string()),
            )
        }
    }
}

/// Whether a settings file exists at the default path.
#[must_use]
pub fn exists() -> bool {
    get_config_path_with_override(None).is_some_and(|path| path.exists())
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

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
