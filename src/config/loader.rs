//! Configuration file loading with precedence handling.

use crate::state::{DEFAULT_ZOOM_SCALE, SMALL_SCREEN_MAX_WIDTH};
use crate::viewport::ViewportSize;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "PIXQUERY_CONFIG";

/// Environment variable overriding the log file path.
pub const LOG_ENV_VAR: &str = "PIXQUERY_LOG";

/// Failure to turn a config file into a [`ResolvedConfig`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// File that was being read.
        path: PathBuf,
        /// I/O error text.
        reason: String,
    },

    /// Malformed TOML, wrong types or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// File that was being parsed.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// A value parsed but is out of range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Offending key.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// On-disk settings. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Viewports this wide or narrower never auto-scroll.
    #[serde(default)]
    pub small_screen_max_width: Option<u32>,

    /// Magnification applied when the overlay image is zoomed.
    #[serde(default)]
    pub zoom_scale: Option<f32>,

    /// Viewport width assumed before the first measurement.
    #[serde(default)]
    pub initial_viewport_width: Option<u32>,

    /// Viewport height assumed before the first measurement.
    #[serde(default)]
    pub initial_viewport_height: Option<u32>,

    /// Where tracing output is written.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Settings with defaults filled in and overrides applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Small-screen auto-scroll threshold.
    pub small_screen_max_width: u32,
    /// Overlay zoom magnification.
    pub zoom_scale: f32,
    /// Viewport assumed at mount.
    pub initial_viewport: ViewportSize,
    /// Tracing output file.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            small_screen_max_width: SMALL_SCREEN_MAX_WIDTH,
            zoom_scale: DEFAULT_ZOOM_SCALE,
            initial_viewport: ViewportSize::new(1280, 800),
            log_file_path: default_log_path(),
        }
    }
}

/// `pixquery/pixquery.log` under the platform state directory, or
/// `pixquery.log` in the working directory when there is none (macOS, Windows).
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("pixquery").join("pixquery.log")
    } else {
        PathBuf::from("pixquery.log")
    }
}

/// Read and parse the TOML file at `path`.
///
/// A file that does not exist yields `Ok(None)` and the defaults apply.
///
/// # Errors
///
/// [`ConfigError::ReadError`] or [`ConfigError::ParseError`] when the file
/// exists but cannot be used.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();
    if !path.exists() {
        debug!(path = %path.display(), "no config file");
        return Ok(None);
    }

    let text = std::fs::read_to_string(&path).map_err(|err| ConfigError::ReadError {
        path: path.clone(),
        reason: err.to_string(),
    })?;
    let parsed = toml::from_str::<ConfigFile>(&text).map_err(|err| ConfigError::ParseError {
        path: path.clone(),
        reason: err.to_string(),
    })?;

    debug!(path = %path.display(), "loaded config file");
    Ok(Some(parsed))
}

/// `config.toml` under the platform config directory, e.g.
/// `~/.config/pixquery/config.toml` on Linux.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pixquery").join("config.toml"))
}

/// Pick the config file and load it.
///
/// The first available source wins: `config_path`, then `PIXQUERY_CONFIG`,
/// then [`default_config_path`].
///
/// # Errors
///
/// Same as [`load_config_file`] for the chosen path.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    let chosen = config_path
        .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
        .or_else(default_config_path);

    match chosen {
        Some(path) => load_config_file(path),
        None => Ok(None),
    }
}

/// A non-empty `PIXQUERY_LOG` replaces the log file path.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(path) = std::env::var(LOG_ENV_VAR) {
        if !path.is_empty() {
            config.log_file_path = PathBuf::from(path);
        }
    }

    config
}

/// Fill unset keys from [`ResolvedConfig::default`] and validate the result.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] for a non-positive or non-finite
/// zoom scale, or a zero initial viewport width.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let zoom_scale = config.zoom_scale.unwrap_or(defaults.zoom_scale);
    if !zoom_scale.is_finite() || zoom_scale <= 0.0 {
        return Err(ConfigError::InvalidValue {
            field: "zoom_scale",
            reason: format!("must be a positive number, got {zoom_scale}"),
        });
    }

    let width = config
        .initial_viewport_width
        .unwrap_or(defaults.initial_viewport.width);
    if width == 0 {
        return Err(ConfigError::InvalidValue {
            field: "initial_viewport_width",
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(ResolvedConfig {
        small_screen_max_width: config
            .small_screen_max_width
            .unwrap_or(defaults.small_screen_max_width),
        zoom_scale,
        initial_viewport: ViewportSize::new(
            width,
            config
                .initial_viewport_height
                .unwrap_or(defaults.initial_viewport.height),
        ),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Full resolution chain: file (by precedence) → defaults → env overrides.
///
/// # Errors
///
/// Propagates read, parse and validation errors.
pub fn resolve(config_path: Option<PathBuf>) -> Result<ResolvedConfig, ConfigError> {
    let file = load_config_with_precedence(config_path)?;
    let merged = merge_config(file)?;
    Ok(apply_env_overrides(merged))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
