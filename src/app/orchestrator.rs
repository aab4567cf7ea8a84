//! App orchestration module.
//!
//! Runs the engine headless: seeds the dashboard from configuration, starts
//! the rate simulator and logs every published market snapshot until a
//! shutdown signal arrives.

use std::future::Future;

use tokio::signal;
use tracing::{debug, info, warn};

use crate::app::config::Config;
use crate::app::dashboard::Dashboard;
use crate::app::state::MarketSnapshot;
use crate::error::Result;

/// Main application struct.
pub struct App;

impl App {
    /// Run until Ctrl-C.
    pub async fn run(config: Config) -> Result<()> {
        Self::run_until(config, async {
            if let Err(e) = signal::ctrl_c().await {
                warn!(error = %e, "Failed to listen for shutdown signal");
            }
        })
        .await
    }

    /// Run until `shutdown` resolves, then stop the simulator cleanly.
    pub async fn run_until<F>(config: Config, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        let dashboard = Dashboard::from_config(&config);
        info!(
            rates = dashboard.rates().len(),
            tick_ms = config.simulation.tick_interval_ms,
            bound = %config.simulation.perturbation_bound,
            "Dashboard initialized"
        );

        for (asset, action, quote) in dashboard.best_rates() {
            info!(
                asset = %asset,
                action = %action,
                rate = %quote.rate,
                protocol = %quote.protocol,
                chain = %quote.chain,
                "Best rate"
            );
        }

        let (handle, mut snapshots) = dashboard.start_simulator(&config.simulation);

        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Shutdown signal received");
                    break;
                }
                changed = snapshots.changed() => {
                    if changed.is_err() {
                        warn!("Simulator stopped publishing snapshots");
                        break;
                    }
                    log_snapshot(&snapshots.borrow_and_update());
                }
            }
        }

        handle.shutdown().await;
        info!(
            positions = dashboard.positions().len(),
            rewards = %dashboard.reward_total(),
            token = dashboard.reward_token(),
            "Engine stopped"
        );
        Ok(())
    }
}

fn log_snapshot(snapshot: &MarketSnapshot) {
    let suboptimal = snapshot
        .positions
        .iter()
        .filter(|p| !p.is_optimal())
        .count();
    info!(
        tick = snapshot.tick,
        rates = snapshot.rates.len(),
        positions = snapshot.positions.len(),
        suboptimal,
        "Market snapshot"
    );
    for entry in snapshot.rates.entries() {
        debug!(
            asset = %entry.asset,
            chain = %entry.chain,
            protocol = %entry.protocol,
            rate = %entry.rate,
            "Rate"
        );
    }
}
