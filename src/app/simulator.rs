//! Background rate simulator.
//!
//! Emulates live market movement by nudging every rate on a fixed interval,
//! then asks the optimization service to re-check position optimality.
//!
//! # Architecture
//!
//! ```text
//! tokio interval --> RateSimulator::step()
//!                        |
//!                        +-- perturb RateTable (one write-locked transaction)
//!                        +-- OptimizationService::recheck_optimality()
//!                        |
//!                        v
//!              watch::Sender<MarketSnapshot> --> observers
//! ```

use std::sync::Arc;
use std::time::Duration;

use rust_decimal::{Decimal, RoundingStrategy};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::app::config::SimulationConfig;
use crate::app::optimizer::OptimizationService;
use crate::app::state::{AppState, MarketSnapshot};
use crate::domain::{RateTable, RecheckSummary};
use crate::port::RandomSource;

/// Decimal places kept on every simulated rate.
const RATE_PRECISION: u32 = 2;

/// Outcome of perturbing one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Entries whose new rate was applied.
    pub updated: usize,
    /// Entries left unchanged because the new rate could not be computed.
    pub skipped: usize,
}

/// Handle for controlling the simulator lifecycle.
pub struct SimulatorHandle {
    shutdown_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl SimulatorHandle {
    /// Signal the simulator to stop and wait for it to finish.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(()).await;
        let _ = self.task.await;
    }
}

/// Periodically perturbs the shared rate table.
#[derive(Debug, Clone)]
pub struct RateSimulator {
    bound: Decimal,
    interval: Duration,
}

impl RateSimulator {
    #[must_use]
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            bound: config.perturbation_bound.abs(),
            interval: config.tick_interval(),
        }
    }

    /// Apply one random step to every entry of `table`.
    ///
    /// Each rate moves by a uniform draw in `[-bound, bound)`, is clamped at
    /// zero and rounded to two decimals. An entry whose sum overflows keeps
    /// its old rate; the rest of the table is still updated.
    pub fn perturb(&self, table: &mut RateTable, random: &mut dyn RandomSource) -> TickReport {
        let mut report = TickReport::default();

        table.for_each_rate_mut(|asset, chain, protocol, rate| {
            let delta = random.symmetric(self.bound);
            match rate.checked_add(delta) {
                Some(next) => {
                    *rate = next.max(Decimal::ZERO).round_dp_with_strategy(
                        RATE_PRECISION,
                        RoundingStrategy::MidpointAwayFromZero,
                    );
                    report.updated += 1;
                }
                None => {
                    warn!(
                        asset = %asset,
                        chain = %chain,
                        protocol = %protocol,
                        rate = %rate,
                        delta = %delta,
                        "Rate update overflowed, keeping previous rate"
                    );
                    report.skipped += 1;
                }
            }
        });

        report
    }

    /// Perturb the shared table as a single transaction.
    ///
    /// The rates write lock is held for the whole tick, so readers never see
    /// a half-updated table.
    pub fn tick(&self, state: &AppState) -> TickReport {
        let mut rates = state.rates_mut();
        let mut random = state.random();
        self.perturb(&mut rates, random.as_mut())
    }

    /// One full simulation step: tick the table, then re-check positions.
    pub fn step(&self, service: &OptimizationService) -> (TickReport, RecheckSummary) {
        let report = self.tick(service.state());
        let summary = service.recheck_optimality();
        (report, summary)
    }

    /// Start the background simulator.
    ///
    /// Spawns a task that steps the simulation every interval and publishes a
    /// [`MarketSnapshot`] after each step. The first step happens one full
    /// interval after start. Dropping the handle also stops the task.
    pub fn start(
        self,
        service: Arc<OptimizationService>,
    ) -> (SimulatorHandle, watch::Receiver<MarketSnapshot>) {
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let (snapshot_tx, snapshot_rx) = watch::channel(service.state().snapshot(0));

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(
                tokio::time::Instant::now() + self.interval,
                self.interval,
            );
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut tick: u64 = 0;

            info!(
                interval_ms = self.interval.as_millis() as u64,
                bound = %self.bound,
                "Rate simulator started"
            );

            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        info!(ticks = tick, "Rate simulator shutting down");
                        break;
                    }
                    _ = ticker.tick() => {
                        tick += 1;
                        let (report, summary) = self.step(&service);
                        debug!(
                            tick,
                            updated = report.updated,
                            skipped = report.skipped,
                            optimal = summary.optimal,
                            suboptimal = summary.suboptimal,
                            "Rates ticked"
                        );
                        // No receivers left is fine; the simulation keeps running.
                        let _ = snapshot_tx.send(service.state().snapshot(tick));
                    }
                }
            }
        });

        (SimulatorHandle { shutdown_tx, task }, snapshot_rx)
    }
}

impl Default for RateSimulator {
    fn default() -> Self {
        Self::new(&SimulationConfig::default())
    }
}
