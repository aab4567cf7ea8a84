//! Placeholder reward model.
//!
//! Every successful position action earns a random increment. The amount has
//! no relation to real protocol incentives.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::app::config::RewardConfig;
use crate::domain::{RewardAccrual, RewardLedger};
use crate::port::RandomSource;

/// Draws reward increments in `[0, max_increment)`.
#[derive(Debug, Clone)]
pub struct RewardAccrualModel {
    max_increment: Decimal,
    token: String,
}

impl RewardAccrualModel {
    #[must_use]
    pub fn new(config: &RewardConfig) -> Self {
        Self {
            max_increment: config.max_increment.max(Decimal::ZERO),
            token: config.token.clone(),
        }
    }

    /// Draw an increment, add it to the ledger's total and append a point for `today`.
    pub fn accrue(
        &self,
        ledger: &mut RewardLedger,
        random: &mut dyn RandomSource,
        today: NaiveDate,
    ) -> RewardAccrual {
        let increment = random.uniform(Decimal::ZERO, self.max_increment);
        ledger.record(increment, today)
    }

    /// Token symbol rewards are denominated in.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl Default for RewardAccrualModel {
    fn default() -> Self {
        Self::new(&RewardConfig::default())
    }
}
