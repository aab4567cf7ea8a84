//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file. Every section is optional; a
//! missing file section falls back to the built-in demo market and defaults.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use crate::domain::{RateEntry, RateTable};
use crate::error::{ConfigError, Result};

mod logging;
mod market;
mod simulation;

pub use logging::LoggingConfig;
pub use market::{default_rates, BridgeConfig};
pub use simulation::{RewardConfig, SimulationConfig};

/// Largest accepted per-tick move, in percentage points.
const MAX_PERTURBATION_BOUND: Decimal = Decimal::ONE_HUNDRED;

/// Largest accepted reward draw per action.
const MAX_REWARD_INCREMENT: Decimal = Decimal::ONE_THOUSAND;

/// Main application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub rewards: RewardConfig,
    #[serde(default)]
    pub bridge: BridgeConfig,
    /// Seed rates, in display order.
    #[serde(default = "default_rates")]
    pub rates: Vec<RateEntry>,
    /// Referral code shown to the user.
    #[serde(default = "default_referral_code")]
    pub referral_code: String,
    /// Maximum notifications kept in the in-memory feed.
    #[serde(default = "default_notification_capacity")]
    pub notification_capacity: usize,
}

fn default_referral_code() -> String {
    "BLEND123".into()
}

const fn default_notification_capacity() -> usize {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            simulation: SimulationConfig::default(),
            rewards: RewardConfig::default(),
            bridge: BridgeConfig::default(),
            rates: default_rates(),
            referral_code: default_referral_code(),
            notification_capacity: default_notification_capacity(),
        }
    }
}

impl Config {
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text.
    #[allow(clippy::result_large_err)]
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.simulation.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_interval_ms",
                reason: "must be greater than zero".into(),
            }
            .into());
        }
        let bound = self.simulation.perturbation_bound;
        if bound < Decimal::ZERO || bound > MAX_PERTURBATION_BOUND {
            return Err(ConfigError::InvalidValue {
                field: "perturbation_bound",
                reason: format!("must be between 0 and {MAX_PERTURBATION_BOUND}"),
            }
            .into());
        }
        let increment = self.rewards.max_increment;
        if increment < Decimal::ZERO || increment > MAX_REWARD_INCREMENT {
            return Err(ConfigError::InvalidValue {
                field: "max_increment",
                reason: format!("must be between 0 and {MAX_REWARD_INCREMENT}"),
            }
            .into());
        }
        if self.rewards.token.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "token" }.into());
        }

        let mut seen = HashSet::new();
        for entry in &self.rates {
            if entry.rate < Decimal::ZERO {
                return Err(ConfigError::InvalidValue {
                    field: "rates",
                    reason: format!(
                        "{}/{}/{} has negative rate {}",
                        entry.asset, entry.chain, entry.protocol, entry.rate
                    ),
                }
                .into());
            }
            if !seen.insert((&entry.asset, &entry.chain, &entry.protocol)) {
                return Err(ConfigError::InvalidValue {
                    field: "rates",
                    reason: format!(
                        "duplicate entry {}/{}/{}",
                        entry.asset, entry.chain, entry.protocol
                    ),
                }
                .into());
            }
        }

        Ok(())
    }

    /// Build the seeded rate table.
    #[must_use]
    pub fn rate_table(&self) -> RateTable {
        RateTable::from_entries(self.rates.iter().cloned())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
