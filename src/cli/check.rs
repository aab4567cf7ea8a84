//! Handler for `blend check config`.

use std::path::Path;

use crate::app::Config;
use crate::cli::output;
use crate::error::Result;

/// Validate configuration file without starting the engine.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    println!("Checking configuration: {}", path.display());

    let config = Config::load(path)?;
    output::ok("Configuration file is valid");

    output::section("Summary");
    output::key_value("Rates", config.rates.len());
    output::key_value("Tick", format!("{} ms", config.simulation.tick_interval_ms));
    output::key_value("Bound", config.simulation.perturbation_bound);
    output::key_value(
        "Seed",
        config
            .simulation
            .seed
            .map_or_else(|| "entropy".to_string(), |s| s.to_string()),
    );
    output::key_value("Reward token", &config.rewards.token);
    output::key_value(
        "Bridge chains",
        config
            .bridge
            .chains
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
    );
    output::key_value("Log level", &config.logging.level);
    println!();

    Ok(())
}
