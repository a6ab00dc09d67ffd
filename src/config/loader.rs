//! Configuration file loading with precedence handling.

use crate::model::{DateRange, View};
use crate::state::CalendarConfig;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "CALNAV_CONFIG";

/// Environment variable enabling right-to-left mode.
pub const RTL_ENV_VAR: &str = "CALNAV_RTL";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/calnav/config.toml`:
///
/// ```toml
/// min = "2000-01-01"
/// max = "2030-12-31"
/// views = ["month", "year", "decade"]
/// view = "year"
/// rtl = false
/// footer = true
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Earliest selectable date.
    #[serde(default)]
    pub min: Option<NaiveDate>,

    /// Latest selectable date.
    #[serde(default)]
    pub max: Option<NaiveDate>,

    /// Configured view levels, finest first.
    #[serde(default)]
    pub views: Option<Vec<View>>,

    /// Initial view.
    #[serde(default)]
    pub view: Option<View>,

    /// Right-to-left mode.
    #[serde(default)]
    pub rtl: Option<bool>,

    /// Show the "today" footer.
    #[serde(default)]
    pub footer: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Earliest selectable date.
    pub min: NaiveDate,
    /// Latest selectable date.
    pub max: NaiveDate,
    /// View levels, finest first.
    pub views: Vec<View>,
    /// Initial view; `None` starts at the finest configured view.
    pub view: Option<View>,
    /// Mirror the plain horizontal arrow keys.
    pub rtl: bool,
    /// Show the "today" footer.
    pub footer: bool,
    /// Colored output. Only settable from the command line.
    pub color: bool,
    /// Log file location.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let range = DateRange::default();
        Self {
            min: range.min(),
            max: range.max(),
            views: View::ALL.to_vec(),
            view: None,
            rtl: false,
            footer: true,
            color: true,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Navigation configuration for this resolved config.
    pub fn calendar_config(
        &self,
        initial_date: Option<NaiveDate>,
        initial_value: Option<NaiveDate>,
    ) -> CalendarConfig {
        CalendarConfig {
            min: self.min,
            max: self.max,
            views: self.views.clone(),
            initial_view: self.view,
            initial_date,
            initial_value,
            rtl: self.rtl,
        }
    }
}

/// Overrides collected from command-line flags.
///
/// `None` means the flag was not given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--min`
    pub min: Option<NaiveDate>,
    /// `--max`
    pub max: Option<NaiveDate>,
    /// `--views`
    pub views: Option<Vec<View>>,
    /// `--view`
    pub view: Option<View>,
    /// `--rtl`
    pub rtl: Option<bool>,
    /// `--no-footer`
    pub footer: Option<bool>,
    /// `--no-color`
    pub color: Option<bool>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/calnav/calnav.log` on Linux, or the appropriate
/// platform path elsewhere. Falls back to the current directory when no
/// state directory is known.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("calnav").join("calnav.log")
    } else {
        PathBuf::from("calnav.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/calnav/config.toml` on Unix, appropriate path on other
/// platforms. Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("calnav").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CALNAV_CONFIG` environment variable
/// 3. Default path `~/.config/calnav/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        min: config.min.unwrap_or(defaults.min),
        max: config.max.unwrap_or(defaults.max),
        views: config.views.unwrap_or(defaults.views),
        view: config.view.or(defaults.view),
        rtl: config.rtl.unwrap_or(defaults.rtl),
        footer: config.footer.unwrap_or(defaults.footer),
        color: defaults.color,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CALNAV_RTL`: `1`/`true` enables, `0`/`false` disables mirrored mode.
///   Any other value is ignored with a warning.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(RTL_ENV_VAR) {
        match parse_flag(&raw) {
            Some(rtl) => config.rtl = rtl,
            None => warn!(value = %raw, "Ignoring unrecognized {}", RTL_ENV_VAR),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only flags that were explicitly set are applied.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(min) = overrides.min {
        config.min = min;
    }
    if let Some(max) = overrides.max {
        config.max = max;
    }
    if let Some(views) = overrides.views {
        config.views = views;
    }
    if let Some(view) = overrides.view {
        config.view = Some(view);
    }
    if let Some(rtl) = overrides.rtl {
        config.rtl = rtl;
    }
    if let Some(footer) = overrides.footer {
        config.footer = footer;
    }
    if let Some(color) = overrides.color {
        config.color = color;
    }

    config
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
