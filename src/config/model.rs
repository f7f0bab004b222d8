//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML. Every field has a
//! sensible default so the hub works without a config file.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::games::spinner::SpinTiming;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Fixed seed for a reproducible session. Drawn at startup when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub memory: MemoryConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Cosmetic delays, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_opponent_delay")]
    pub opponent_delay_ms: u64,
    #[serde(default = "default_mismatch_delay")]
    pub mismatch_delay_ms: u64,
    #[serde(default = "default_spin_min")]
    pub spin_min_ms: u64,
    #[serde(default = "default_spin_max")]
    pub spin_max_ms: u64,
    #[serde(default = "default_spin_reveal")]
    pub spin_reveal_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            opponent_delay_ms: default_opponent_delay(),
            mismatch_delay_ms: default_mismatch_delay(),
            spin_min_ms: default_spin_min(),
            spin_max_ms: default_spin_max(),
            spin_reveal_ms: default_spin_reveal(),
        }
    }
}

impl TimingConfig {
    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }

    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    pub fn spin_timing(&self) -> SpinTiming {
        SpinTiming {
            min_spin: Duration::from_millis(self.spin_min_ms),
            max_spin: Duration::from_millis(self.spin_max_ms),
            reveal: Duration::from_millis(self.spin_reveal_ms),
        }
    }
}

/// Memory Match deck settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Each icon is dealt twice.
    #[serde(default = "default_icons")]
    pub icons: Vec<String>,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            icons: default_icons(),
        }
    }
}

/// Front-end settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    #[serde(default)]
    pub bell_on_finish: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            bell_on_finish: false,
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_level(),
            log_dir: default_log_dir(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_opponent_delay() -> u64 {
    420
}
fn default_mismatch_delay() -> u64 {
    700
}
fn default_spin_min() -> u64 {
    1200
}
fn default_spin_max() -> u64 {
    2000
}
fn default_spin_reveal() -> u64 {
    700
}
fn default_icons() -> Vec<String> {
    ["🍎", "🍌", "🍇", "🍓", "🍍", "🥝"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_tick_rate() -> u64 {
    50
}
fn default_level() -> String {
    "info".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/funhub/logs".to_string()
}
