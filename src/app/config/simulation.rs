//! Simulation and reward tuning.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::RewardPoint;

/// Rate simulator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// Milliseconds between rate ticks.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Maximum absolute change per tick, in percentage points.
    #[serde(default = "default_perturbation_bound")]
    pub perturbation_bound: Decimal,
    /// Fixed RNG seed for reproducible runs. Entropy when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

const fn default_tick_interval_ms() -> u64 {
    5_000
}

fn default_perturbation_bound() -> Decimal {
    Decimal::new(2, 1) // 0.2
}

impl SimulationConfig {
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            perturbation_bound: default_perturbation_bound(),
            seed: None,
        }
    }
}

/// Placeholder reward model configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RewardConfig {
    /// Upper bound (exclusive) of each reward draw.
    #[serde(default = "default_max_increment")]
    pub max_increment: Decimal,
    /// Token symbol rewards are denominated in.
    #[serde(default = "default_token")]
    pub token: String,
    /// Points charted before the session starts.
    #[serde(default)]
    pub history: Vec<RewardPoint>,
}

fn default_max_increment() -> Decimal {
    Decimal::from(5)
}

fn default_token() -> String {
    "OP".into()
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            max_increment: default_max_increment(),
            token: default_token(),
            history: Vec::new(),
        }
    }
}
