//! Application context that holds resolved configuration
//!
//! The config file is chosen with the precedence order:
//! 1. `--config` flag
//! 2. `IMAGE_LIST_CONFIG` environment variable
//! 3. `<config dir>/image-list/config.yaml`, if it exists
//! 4. Built-in defaults
//!
//! Once built, the context is passed as read-only throughout the application.

use crate::format::ColorChoice;
use libimagelist::{Config, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "IMAGE_LIST_CONFIG";

/// Diagnostic verbosity, raised by repeating `--verbose`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// Warnings and errors only
    Normal,
    /// Progress summaries
    Verbose,
    /// Per-file and per-image detail
    VeryVerbose,
    Trace,
}

impl VerbosityLevel {
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => VerbosityLevel::Normal,
            1 => VerbosityLevel::Verbose,
            2 => VerbosityLevel::VeryVerbose,
            _ => VerbosityLevel::Trace,
        }
    }

    /// Default `tracing` filter directive for this level
    pub fn as_filter(&self) -> &'static str {
        match self {
            VerbosityLevel::Normal => "warn",
            VerbosityLevel::Verbose => "info",
            VerbosityLevel::VeryVerbose => "debug",
            VerbosityLevel::Trace => "trace",
        }
    }
}

/// Application context with resolved configuration and runtime state
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Resolved configuration
    pub config: Config,
    /// Path the configuration was loaded from, if any
    pub config_path: Option<PathBuf>,
    pub color: ColorChoice,
}

impl AppContext {
    /// Build the context, loading the config file if one is found.
    ///
    /// An explicitly named file (flag or environment) must load successfully.
    pub fn build(cli_config: Option<&Path>, color: ColorChoice) -> Result<Self> {
        let env_config = env::var_os(CONFIG_ENV).map(PathBuf::from);
        let config_path = resolve_config_path(cli_config, env_config);
        let config = Config::load(config_path.as_deref())?;

        Ok(Self {
            config,
            config_path,
            color,
        })
    }
}

/// Pick the config file to load.
pub fn resolve_config_path(
    cli_config: Option<&Path>,
    env_config: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = cli_config {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env_config {
        return Some(path);
    }
    default_config_path().filter(|path| path.is_file())
}

/// Get the default configuration file path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("image-list").join("config.yaml"))
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
