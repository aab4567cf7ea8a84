//! Reward time series and running total.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One sample of the reward chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardPoint {
    /// Calendar day, serialized as ISO 8601 (`2024-05-01`).
    pub date: NaiveDate,
    pub reward_amount: Decimal,
}

/// Result of a single accrual: the appended point and the new total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardAccrual {
    pub point: RewardPoint,
    pub total: Decimal,
}

/// Append-only reward series plus the running total earned this session.
///
/// Historical points seeded at startup are charted but do not count toward
/// the total.
#[derive(Debug, Clone, Default)]
pub struct RewardLedger {
    total: Decimal,
    series: Vec<RewardPoint>,
}

impl RewardLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger whose chart starts with `history`.
    #[must_use]
    pub fn with_history(history: Vec<RewardPoint>) -> Self {
        Self {
            total: Decimal::ZERO,
            series: history,
        }
    }

    /// Record an increment earned on `date`. Negative increments are floored at zero.
    pub fn record(&mut self, increment: Decimal, date: NaiveDate) -> RewardAccrual {
        let reward_amount = increment.max(Decimal::ZERO);
        self.total = self.total.saturating_add(reward_amount);

        let point = RewardPoint {
            date,
            reward_amount,
        };
        self.series.push(point.clone());

        RewardAccrual {
            point,
            total: self.total,
        }
    }

    #[must_use]
    pub fn total(&self) -> Decimal {
        self.total
    }

    #[must_use]
    pub fn series(&self) -> &[RewardPoint] {
        &self.series
    }
}
