//! Handler for the `run` command.

use tracing::info;

use crate::app::{App, Config};
use crate::cli::RunArgs;
use crate::error::{ConfigError, Result};

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;

    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }
    if let Some(tick_ms) = args.tick_ms {
        if tick_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_interval_ms",
                reason: "must be greater than zero".into(),
            }
            .into());
        }
        config.simulation.tick_interval_ms = tick_ms;
    }

    config.init_logging();
    info!(
        config = %args.config.display(),
        version = env!("CARGO_PKG_VERSION"),
        "blend starting"
    );

    App::run(config).await?;

    info!("blend stopped");
    Ok(())
}
