//! Canonical test configurations.
//!
//! Single source of truth for config structs used across tests.

use crate::app::{Config, SimulationConfig};

/// Simulation config with a short tick and a fixed seed.
pub fn fast_simulation(tick_interval_ms: u64) -> SimulationConfig {
    SimulationConfig {
        tick_interval_ms,
        seed: Some(7),
        ..SimulationConfig::default()
    }
}

/// Default config with a fast simulator and no seed history.
pub fn fast(tick_interval_ms: u64) -> Config {
    Config {
        simulation: fast_simulation(tick_interval_ms),
        ..Config::default()
    }
}
