//! Configuration file management.

use std::path::{Path, PathBuf};

use payline_engine::StatusPolicy;
use serde::{Deserialize, Serialize};

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Payout computation settings.
    #[serde(default)]
    pub payouts: PayoutsConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Storage configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory. Empty = platform default.
    #[serde(default)]
    pub data_dir: String,
}

/// Payout computation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutsConfig {
    /// "manual_paid_only" | "paid_after_payout_date".
    #[serde(default)]
    pub status_policy: StatusPolicy,
    /// Seed demo affiliates into an empty store.
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "debug" | "info" | "warn" | "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for PayoutsConfig {
    fn default() -> Self {
        Self {
            status_policy: StatusPolicy::default(),
            seed_demo_data: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Load configuration from `config.toml` in `dir`, or from the default
    /// location when `dir` is `None`.
    ///
    /// Falls back to defaults if the file does not exist. A `dir` given here
    /// also becomes the data directory.
    pub fn load(dir: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = match dir {
            Some(d) => d.join("config.toml"),
            None => Self::default_data_dir().join("config.toml"),
        };
        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str::<CliConfig>(&content)?
        } else {
            Self::default()
        };
        if let Some(d) = dir {
            config.storage.data_dir = d.to_string_lossy().into_owned();
        }
        Ok(config)
    }

    /// Get the data directory path.
    pub fn data_dir(&self) -> PathBuf {
        if self.storage.data_dir.is_empty() {
            Self::default_data_dir()
        } else {
            PathBuf::from(&self.storage.data_dir)
        }
    }

    /// Platform-specific default data directory.
    fn default_data_dir() -> PathBuf {
        if let Ok(dir) = std::env::var("PAYLINE_DATA_DIR") {
            return PathBuf::from(dir);
        }
        #[cfg(target_os = "macos")]
        {
            dirs_fallback("Library/Application Support/Payline")
        }
        #[cfg(target_os = "windows")]
        {
            dirs_fallback("Payline")
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            dirs_fallback(".payline")
        }
    }
}

/// Fallback home directory resolution.
fn dirs_fallback(subpath: &str) -> PathBuf {
    std::env::var("HOME")
        .map(|h| PathBuf::from(h).join(subpath))
        .unwrap_or_else(|_| PathBuf::from("/tmp/payline"))
}
