//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/relens/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/relens/` (~/.config/relens/)
//! - State/Logs: `$XDG_STATE_HOME/relens/` (~/.local/state/relens/)
//!
//! All defaults reproduce the stock reconstruction behavior; a missing config
//! file is not an error.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Reconstruction engine knobs
    #[serde(default)]
    pub engine: EngineConfig,

    /// Presentation knobs
    #[serde(default)]
    pub render: RenderConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Reconstruction engine configuration.
///
/// The marker phrases drive phase-window detection; they are matched as
/// case-insensitive substrings of assistant turn digests.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Phrase opening the research-activity window
    #[serde(default = "default_start_marker")]
    pub start_marker: String,

    /// Phrase closing the research-activity window
    #[serde(default = "default_end_marker")]
    pub end_marker: String,

    /// Characters of tool-call arguments kept as an activity description
    #[serde(default = "default_args_preview_chars")]
    pub args_preview_chars: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            start_marker: default_start_marker(),
            end_marker: default_end_marker(),
            args_preview_chars: default_args_preview_chars(),
        }
    }
}

fn default_start_marker() -> String {
    "clarify with user".to_string()
}

fn default_end_marker() -> String {
    "final report".to_string()
}

fn default_args_preview_chars() -> usize {
    160
}

/// Presentation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Characters kept in collapsed previews before "show more"
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            preview_chars: default_preview_chars(),
        }
    }
}

fn default_preview_chars() -> usize {
    280
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/relens/config.toml` (~/.config/relens/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("relens").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/relens/` (~/.local/state/relens/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("relens")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/relens/relens.log` (~/.local/state/relens/relens.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("relens.log")
    }
}
