//! # Configuration State
//!
//! Desk configuration loaded at startup.
//!
//! ## Configuration Sources (later overrides earlier)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Defaults (this file)                                               │
//! │  2. Config file                                                        │
//! │     ~/.config/frontdesk/frontdesk.toml (Linux)                         │
//! │     ~/Library/Application Support/com.grandhotel.frontdesk/ (macOS)    │
//! │  3. Environment variables (FRONTDESK_*)                                │
//! │  4. validate()                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ```toml
//! # frontdesk.toml
//! property_name = "Grand Hotel"
//! currency_symbol = "$"
//! currency_decimals = 2
//! camera_delay_ms = 2000
//! role_delay_ms = 1000
//! lookup_delay_ms = 1000
//! ```
//!
//! Read-only after initialization, so no mutex.

use std::path::PathBuf;
use std::time::Duration;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Desk configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Shown on invoices and the desk header
    pub property_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Simulated camera warm-up per capture
    pub camera_delay_ms: u64,

    /// Simulated role setup after choosing a role
    pub role_delay_ms: u64,

    /// Simulated guest history lookup
    pub lookup_delay_ms: u64,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            property_name: "Grand Hotel".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            camera_delay_ms: 2000,
            role_delay_ms: 1000,
            lookup_delay_ms: 1000,
        }
    }
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading desk config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load desk config: {}. Using defaults.", e);
            Self::default()
        })
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.property_name.trim().is_empty() {
            return Err(ConfigError::Invalid("property_name must not be empty".into()));
        }

        if self.currency_decimals > 4 {
            return Err(ConfigError::Invalid(format!(
                "currency_decimals must be at most 4, got {}",
                self.currency_decimals
            )));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(name) = std::env::var("FRONTDESK_PROPERTY_NAME") {
            debug!(property_name = %name, "Overriding property name from environment");
            self.property_name = name;
        }

        if let Ok(symbol) = std::env::var("FRONTDESK_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        let delays = [
            ("FRONTDESK_CAMERA_DELAY_MS", &mut self.camera_delay_ms),
            ("FRONTDESK_ROLE_DELAY_MS", &mut self.role_delay_ms),
            ("FRONTDESK_LOOKUP_DELAY_MS", &mut self.lookup_delay_ms),
        ];
        for (var, slot) in delays {
            if let Ok(value) = std::env::var(var) {
                match value.parse::<u64>() {
                    Ok(ms) => *slot = ms,
                    Err(_) => warn!(var, value = %value, "Ignoring non-numeric delay"),
                }
            }
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "grandhotel", "frontdesk")
            .map(|dirs| dirs.config_dir().join("frontdesk.toml"))
    }

    pub fn camera_delay(&self) -> Duration {
        Duration::from_millis(self.camera_delay_ms)
    }

    pub fn role_delay(&self) -> Duration {
        Duration::from_millis(self.role_delay_ms)
    }

    pub fn lookup_delay(&self) -> Duration {
        Duration::from_millis(self.lookup_delay_ms)
    }

    /// Formats an amount for display, rounding half away from zero to
    /// `currency_decimals`. The only place amounts are rounded.
    pub fn format_currency(&self, amount: Decimal) -> String {
        let decimals = u32::from(self.currency_decimals);
        let rounded =
            amount.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };

        format!(
            "{}{}{:.prec$}",
            sign,
            self.currency_symbol,
            rounded.abs(),
            prec = decimals as usize
        )
    }
}
