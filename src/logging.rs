// File logging. The TUI owns the terminal, so log output goes to a file.

use anyhow::{Context, Result};
use std::env::VarError;
use std::fs::OpenOptions;
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

use crate::config::LoggingConfig;

/// Overrides `logging.level` from the config file.
pub const LOG_ENV: &str = "QUITPATH_LOG";

#[derive(Debug, Error)]
pub enum LogLevelError {
    #[error("Unknown log level '{0}' (expected error, warn, info, debug, trace or off)")]
    Unknown(String),

    #[error("QUITPATH_LOG is not valid UTF-8")]
    NotUnicode,
}

pub fn parse_level(level: &str) -> Result<LevelFilter, LogLevelError> {
    LevelFilter::from_str(level.trim()).map_err(|_| LogLevelError::Unknown(level.to_string()))
}

/// Pick the level: `QUITPATH_LOG` when set, otherwise `config.level`.
pub fn resolve_level(
    env: Option<&str>,
    config: &LoggingConfig,
) -> Result<LevelFilter, LogLevelError> {
    parse_level(env.unwrap_or(config.level.as_str()))
}

// Unset is `None`. A non-UTF-8 value is an error rather than "unset".
fn env_override(var: Result<String, VarError>) -> Result<Option<String>, LogLevelError> {
    match var {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(LogLevelError::NotUnicode),
    }
}

/// Install the global subscriber writing to `config.file`.
///
/// Returns Ok(false) when logging is disabled by an empty file name.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    if config.file.trim().is_empty() {
        return Ok(false);
    }

    let from_env = env_override(std::env::var(LOG_ENV))?;
    let level = resolve_level(from_env.as_deref(), config)?;

    let log_path = std::env::current_dir()?.join(Path::new(config.file.trim()));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to install log subscriber")?;

    tracing::info!(path = %log_path.display(), %level, "logging initialised");
    Ok(true)
}
