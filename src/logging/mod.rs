//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI, so tracing output goes to a daily log file
//! named `funhub_<date>.log` in the configured log directory (default:
//! `~/.local/share/funhub/logs/`).

use crate::config::LoggingConfig;
use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;

/// Installs the global subscriber. No-op when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level: Level = config
        .level
        .parse()
        .with_context(|| format!("Unknown log level {:?}", config.level))?;

    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let path = log_dir.join(format!("funhub_{}.log", date));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;
    Ok(())
}

/// Expands a leading `~/` to the home directory.
fn expand_home(dir: &str) -> PathBuf {
    match dir.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(dir),
        },
        None => PathBuf::from(dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/var/log/funhub"), PathBuf::from("/var/log/funhub"));
        assert_eq!(expand_home("logs"), PathBuf::from("logs"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/logs"), home.join("logs"));
        }
    }

    #[test]
    fn test_disabled_installs_nothing() {
        let config = LoggingConfig {
            enabled: false,
            level: "not-a-level".into(),
            log_dir: String::new(),
        };
        assert!(init(&config).is_ok());
    }

    #[test]
    fn test_bad_level_is_rejected() {
        let config = LoggingConfig {
            enabled: true,
            level: "loud".into(),
            log_dir: std::env::temp_dir().display().to_string(),
        };
        assert!(init(&config).is_err());
    }
}
