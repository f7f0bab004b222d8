pub mod model;

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;

pub use model::{AppConfig, LoggingConfig};

/// A config file that parsed but describes an unplayable setup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("memory.icons must list at least one icon")]
    NoIcons,
    #[error("memory.icons lists {0:?} more than once")]
    DuplicateIcon(String),
    #[error("timing.spin_min_ms ({min}) is greater than timing.spin_max_ms ({max})")]
    SpinRange { min: u64, max: u64 },
    #[error("ui.tick_rate_ms must be greater than zero")]
    ZeroTickRate,
}

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("funhub")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("Invalid config file {}", path.display()))
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents).context("Failed to parse config file")?;
    validate(&config)?;
    Ok(config)
}

pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.memory.icons.is_empty() {
        return Err(ConfigError::NoIcons);
    }
    let mut seen = HashSet::new();
    for icon in &config.memory.icons {
        if !seen.insert(icon.as_str()) {
            return Err(ConfigError::DuplicateIcon(icon.clone()));
        }
    }
    let timing = &config.timing;
    if timing.spin_min_ms > timing.spin_max_ms {
        return Err(ConfigError::SpinRange {
            min: timing.spin_min_ms,
            max: timing.spin_max_ms,
        });
    }
    if config.ui.tick_rate_ms == 0 {
        return Err(ConfigError::ZeroTickRate);
    }
    Ok(())
}
