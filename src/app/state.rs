//! Shared application state.
//!
//! All engine state lives here and is passed around as `Arc<AppState>`.
//! Locks are always taken in the order rates, positions, rewards, random.

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::Serialize;

use crate::domain::{Position, PositionLedger, RateTable, RewardLedger};
use crate::port::RandomSource;

/// Point-in-time copy of the rate table and ledger for observers.
#[derive(Debug, Clone, Serialize)]
pub struct MarketSnapshot {
    /// Number of simulator ticks applied so far.
    pub tick: u64,
    pub taken_at: DateTime<Utc>,
    pub rates: RateTable,
    pub positions: Vec<Position>,
}

/// Shared application state accessible by all services.
pub struct AppState {
    rates: RwLock<RateTable>,
    positions: RwLock<PositionLedger>,
    rewards: RwLock<RewardLedger>,
    random: Mutex<Box<dyn RandomSource>>,
}

impl AppState {
    /// Create state seeded with `rates` and `rewards`.
    #[must_use]
    pub fn new(rates: RateTable, rewards: RewardLedger, random: Box<dyn RandomSource>) -> Self {
        Self {
            rates: RwLock::new(rates),
            positions: RwLock::new(PositionLedger::new()),
            rewards: RwLock::new(rewards),
            random: Mutex::new(random),
        }
    }

    /// Get read access to the rate table.
    pub fn rates(&self) -> RwLockReadGuard<'_, RateTable> {
        self.rates.read()
    }

    /// Get write access to the rate table.
    pub fn rates_mut(&self) -> RwLockWriteGuard<'_, RateTable> {
        self.rates.write()
    }

    /// Get read access to positions.
    pub fn positions(&self) -> RwLockReadGuard<'_, PositionLedger> {
        self.positions.read()
    }

    /// Get write access to positions.
    pub fn positions_mut(&self) -> RwLockWriteGuard<'_, PositionLedger> {
        self.positions.write()
    }

    /// Get read access to the reward ledger.
    pub fn rewards(&self) -> RwLockReadGuard<'_, RewardLedger> {
        self.rewards.read()
    }

    /// Get write access to the reward ledger.
    pub fn rewards_mut(&self) -> RwLockWriteGuard<'_, RewardLedger> {
        self.rewards.write()
    }

    /// Get exclusive access to the random source.
    pub fn random(&self) -> MutexGuard<'_, Box<dyn RandomSource>> {
        self.random.lock()
    }

    /// Consistent copy of rates and positions.
    pub fn snapshot(&self, tick: u64) -> MarketSnapshot {
        let rates = self.rates.read();
        let positions = self.positions.read();
        MarketSnapshot {
            tick,
            taken_at: Utc::now(),
            rates: rates.clone(),
            positions: positions.snapshot(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Action, Asset, RateEntry, RateOracle};
    use crate::testkit::random::ScriptedRandom;
    use rust_decimal_macros::dec;

    fn state() -> AppState {
        AppState::new(
            RateTable::from_entries([RateEntry::new("USDC", "Base", "MorphoBlue", dec!(3.8))]),
            RewardLedger::new(),
            Box::new(ScriptedRandom::new(vec![])),
        )
    }

    #[test]
    fn new_state_has_empty_ledger() {
        let state = state();
        assert!(state.positions().is_empty());
        assert_eq!(state.rewards().total(), dec!(0));
        assert_eq!(state.rates().len(), 1);
    }

    #[test]
    fn snapshot_copies_rates_and_positions() {
        let state = state();
        {
            let rates = state.rates();
            let quote = RateOracle::new(&rates)
                .best_rate(&Asset::from("USDC"), Action::Supply)
                .unwrap();
            state
                .positions_mut()
                .open(Asset::from("USDC"), dec!(10), Action::Supply, quote, Utc::now());
        }

        let snapshot = state.snapshot(3);
        state.rates_mut().upsert("USDC", "Base", "MorphoBlue", dec!(9));

        assert_eq!(snapshot.tick, 3);
        assert_eq!(snapshot.positions.len(), 1);
        assert_eq!(snapshot.rates.entries()[0].rate, dec!(3.8));
    }
}
