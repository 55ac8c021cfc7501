//! Diagnostic logging to disk.
//!
//! The terminal is in raw mode while the app runs, so tracing output goes to
//! a daily file `greetform_<date>.log` in the configured log directory
//! (default: `~/.local/share/greetform/logs/`) instead of stderr.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Expands a leading `~` to the home directory.
pub fn expand_log_dir(log_dir: &str) -> PathBuf {
    if let Some(rest) = log_dir.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest.trim_start_matches(['/', '\\']));
        }
    }
    PathBuf::from(log_dir)
}

pub fn log_file_name(date: chrono::NaiveDate) -> String {
    format!("greetform_{}.log", date.format("%Y-%m-%d"))
}

fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Installs the global subscriber. Returns the log file path, or `None` when
/// logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let log_dir = expand_log_dir(&config.log_dir);
    let path = open_target(&log_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter_for(&config.level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(Some(path))
}

fn open_target(log_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let date = chrono::Local::now().date_naive();
    Ok(log_dir.join(log_file_name(date)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_log_dir("~/logs/x"), home.join("logs/x"));
        }
        assert_eq!(expand_log_dir("/var/log/g"), PathBuf::from("/var/log/g"));
    }

    #[test]
    fn test_log_file_name() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(log_file_name(date), "greetform_2024-03-09.log");
    }

    #[test]
    fn test_disabled_installs_nothing() {
        let cfg = LoggingConfig {
            enabled: false,
            ..LoggingConfig::default()
        };
        assert!(init(&cfg).unwrap().is_none());
    }

    #[test]
    fn test_open_target_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("a").join("b");
        let path = open_target(&log_dir).unwrap();
        assert!(log_dir.is_dir());
        assert_eq!(path.parent(), Some(log_dir.as_path()));
    }
}
