//! Position optimization service.
//!
//! Opens positions at the best available rate, re-checks their optimality
//! after every rate tick, and on request moves them all to the current best
//! venue. Re-checks only flip the optimal flag; positions are re-priced
//! exclusively by [`OptimizationService::reoptimize_all`].

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::adapter::notifier::NotifierRegistry;
use crate::app::rewards::RewardAccrualModel;
use crate::app::state::AppState;
use crate::domain::{
    parse_positive_amount, Action, Asset, DomainError, Position, RateOracle, RateQuote,
    RecheckSummary,
};
use crate::port::{Event, PositionEvent};

/// Orchestrates the rate oracle, position ledger and reward model.
pub struct OptimizationService {
    state: Arc<AppState>,
    rewards: RewardAccrualModel,
    notifiers: Arc<NotifierRegistry>,
}

impl OptimizationService {
    pub fn new(
        state: Arc<AppState>,
        rewards: RewardAccrualModel,
        notifiers: Arc<NotifierRegistry>,
    ) -> Self {
        Self {
            state,
            rewards,
            notifiers,
        }
    }

    /// Shared state this service operates on.
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    pub fn reward_model(&self) -> &RewardAccrualModel {
        &self.rewards
    }

    /// Current best quote for an asset and action.
    pub fn best_rate(&self, asset: &Asset, action: Action) -> Option<RateQuote> {
        let rates = self.state.rates();
        RateOracle::new(&rates).best_rate(asset, action)
    }

    /// Open a position at the best available rate.
    ///
    /// Fails with [`DomainError::InvalidInput`] when `amount` is not a number
    /// greater than zero, and with [`DomainError::NoRateAvailable`] when the
    /// asset has no rates. On failure neither the ledger nor the rewards change.
    pub fn open_position(
        &self,
        asset: &Asset,
        amount: &str,
        action: Action,
    ) -> Result<Position, DomainError> {
        let amount = parse_positive_amount(amount).ok_or_else(|| DomainError::InvalidInput {
            input: amount.to_string(),
        })?;

        let (position, accrual) = {
            let rates = self.state.rates();
            let quote = RateOracle::new(&rates).best_rate(asset, action).ok_or_else(|| {
                DomainError::NoRateAvailable {
                    asset: asset.clone(),
                    action,
                }
            })?;

            let mut positions = self.state.positions_mut();
            let mut rewards = self.state.rewards_mut();
            let mut random = self.state.random();

            let now = Utc::now();
            let position = positions.open(asset.clone(), amount, action, quote, now);
            let accrual = self
                .rewards
                .accrue(&mut rewards, random.as_mut(), now.date_naive());
            (position, accrual)
        };

        debug!(
            position = %position.id(),
            reward = %accrual.point.reward_amount,
            total = %accrual.total,
            token = self.rewards.token(),
            "Reward accrued"
        );
        self.notifiers
            .emit(Event::PositionOpened(PositionEvent::from(&position)));

        Ok(position)
    }

    /// Move every position to the current best rate for its asset and action.
    ///
    /// Returns the rewritten positions in display order. An empty ledger is a
    /// no-op: nothing is accrued and nothing is emitted.
    pub fn reoptimize_all(&self) -> Vec<Position> {
        let (positions, changed) = {
            let rates = self.state.rates();
            let mut ledger = self.state.positions_mut();
            if ledger.is_empty() {
                return Vec::new();
            }

            let changed = ledger.reoptimize(&RateOracle::new(&rates));

            let mut rewards = self.state.rewards_mut();
            let mut random = self.state.random();
            self.rewards
                .accrue(&mut rewards, random.as_mut(), Utc::now().date_naive());

            (ledger.snapshot(), changed)
        };

        self.notifiers.emit(Event::PositionsOptimized {
            positions: positions.len(),
            changed,
        });

        positions
    }

    /// Recompute every position's optimal flag against the current best rates.
    ///
    /// Called after each simulator tick. Compares each position's stored rate
    /// to the fresh best rate and never re-prices. Emits a notification only
    /// when at least one position has just become suboptimal.
    pub fn recheck_optimality(&self) -> RecheckSummary {
        let summary = {
            let rates = self.state.rates();
            let mut ledger = self.state.positions_mut();
            ledger.recheck(&RateOracle::new(&rates))
        };

        if !summary.unpriced.is_empty() {
            warn!(
                positions = summary.unpriced.len(),
                "Positions have no rate to compare against"
            );
        }

        if !summary.newly_suboptimal.is_empty() {
            info!(
                newly_suboptimal = summary.newly_suboptimal.len(),
                suboptimal = summary.suboptimal,
                "Better rates available"
            );
            self.notifiers.emit(Event::OptimizationAvailable {
                positions: summary.suboptimal,
            });
        }

        summary
    }
}
