//! Application settings configuration
//!
//! Defines probe timeouts, the concurrency cap and the expiry threshold.

use crate::models::ExpiryThreshold;
use crate::utils::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Default location checked when no `--config` is given
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Probe settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProbeSettings {
    pub connect_timeout_secs: u64,
    pub handshake_timeout_secs: u64,
    pub concurrency: usize,
    pub threshold_days: i64,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            handshake_timeout_secs: 15,
            concurrency: 4,
            threshold_days: ExpiryThreshold::DEFAULT_DAYS,
        }
    }
}

impl ProbeSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn handshake_timeout(&self) -> Duration {
        Duration::from_secs(self.handshake_timeout_secs)
    }

    pub fn threshold(&self) -> ExpiryThreshold {
        ExpiryThreshold::from_days(self.threshold_days)
    }

    /// Reject values the probe engine cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(invalid("probe.concurrency", "must be at least 1"));
        }
        if self.threshold_days < 0 {
            return Err(invalid("probe.threshold_days", "must not be negative"));
        }
        if self.threshold_days > ExpiryThreshold::MAX_DAYS {
            return Err(invalid(
                "probe.threshold_days",
                &format!("must be at most {}", ExpiryThreshold::MAX_DAYS),
            ));
        }
        if self.connect_timeout_secs == 0 {
            return Err(invalid("probe.connect_timeout_secs", "must be at least 1"));
        }
        if self.handshake_timeout_secs == 0 {
            return Err(invalid("probe.handshake_timeout_secs", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    }
}

/// Application settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub probe: ProbeSettings,
}

impl Settings {
    /// Load settings from the default config file, falling back to defaults
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Path::new(DEFAULT_CONFIG_PATH);
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
    }
}
