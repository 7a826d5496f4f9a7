//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI, so `tracing` output is written to a daily
//! file named `countercard_<date>.log` inside the configured log directory
//! (default: `~/.local/share/countercard/logs/`). Nothing is installed when
//! logging is disabled, which makes every `tracing` macro a no-op.

use crate::config::{ConfigError, LoggingConfig};
use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;

pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level = parse_level(&config.level)?;
    let (_, file) = open_log_file(config)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(())
}

/// Create the log directory and open today's log file for appending.
pub fn open_log_file(config: &LoggingConfig) -> Result<(PathBuf, File)> {
    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let filepath = log_dir.join(format!("countercard_{}.log", date));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&filepath)
        .with_context(|| format!("Failed to open log file {}", filepath.display()))?;

    Ok((filepath, file))
}

pub fn parse_level(level: &str) -> Result<Level, ConfigError> {
    level
        .trim()
        .parse::<Level>()
        .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))
}

/// Expand a leading `~` to the user's home directory.
fn expand_home(dir: &str) -> PathBuf {
    if let Some(rest) = dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if dir == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(dir)
}
