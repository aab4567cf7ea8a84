//! Positions opened by the user and the ledger that holds them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::action::Action;
use super::ids::{Asset, Chain, PositionId, Protocol};
use super::money::{Amount, Rate};
use super::oracle::{RateOracle, RateQuote};

/// A simulated supply or borrow position.
///
/// `amount` is fixed at open. Venue, rate and optimality change in place
/// when the position is re-checked or re-optimized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Position {
    id: PositionId,
    asset: Asset,
    amount: Amount,
    action: Action,
    protocol: Protocol,
    chain: Chain,
    rate: Rate,
    is_optimal: bool,
    opened_at: DateTime<Utc>,
}

impl Position {
    /// Create a position at the given quote. New positions start optimal.
    #[must_use]
    pub fn new(
        id: PositionId,
        asset: Asset,
        amount: Amount,
        action: Action,
        quote: RateQuote,
        opened_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            asset,
            amount,
            action,
            protocol: quote.protocol,
            chain: quote.chain,
            rate: quote.rate,
            is_optimal: true,
            opened_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> PositionId {
        self.id
    }

    #[must_use]
    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    #[must_use]
    pub fn amount(&self) -> Amount {
        self.amount
    }

    #[must_use]
    pub fn action(&self) -> Action {
        self.action
    }

    #[must_use]
    pub fn protocol(&self) -> &Protocol {
        &self.protocol
    }

    #[must_use]
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Rate snapshot taken at open or at the last re-optimization.
    #[must_use]
    pub fn rate(&self) -> Rate {
        self.rate
    }

    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.is_optimal
    }

    #[must_use]
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Move the position to a new venue and mark it optimal.
    pub fn reprice(&mut self, quote: RateQuote) {
        self.protocol = quote.protocol;
        self.chain = quote.chain;
        self.rate = quote.rate;
        self.is_optimal = true;
    }

    /// Recompute the optimal flag against the current best rate.
    ///
    /// Returns the new flag. The stored rate is never touched.
    pub fn recheck(&mut self, best: Rate) -> bool {
        self.is_optimal = self.action.is_at_least_as_good(self.rate, best);
        self.is_optimal
    }
}

/// Outcome of a passive optimality re-check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecheckSummary {
    /// Positions that are optimal after the check.
    pub optimal: usize,
    /// Positions that are not optimal after the check.
    pub suboptimal: usize,
    /// Positions that went from optimal to not optimal in this check.
    pub newly_suboptimal: Vec<PositionId>,
    /// Positions whose asset no longer has any rate; their flag is left as is.
    pub unpriced: Vec<PositionId>,
}

/// Ordered store of positions. Insertion order is display order.
#[derive(Debug, Default)]
pub struct PositionLedger {
    positions: Vec<Position>,
    next_id: u64,
}

impl PositionLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a new position at `quote` and return a copy of it.
    pub fn open(
        &mut self,
        asset: Asset,
        amount: Amount,
        action: Action,
        quote: RateQuote,
        opened_at: DateTime<Utc>,
    ) -> Position {
        let id = PositionId::new(self.next_id.max(1));
        self.next_id = id.value() + 1;

        let position = Position::new(id, asset, amount, action, quote, opened_at);
        self.positions.push(position.clone());
        position
    }

    /// Recompute every position's optimal flag against the oracle.
    pub fn recheck(&mut self, oracle: &RateOracle<'_>) -> RecheckSummary {
        let mut summary = RecheckSummary::default();

        for position in &mut self.positions {
            match oracle.best_rate(&position.asset, position.action) {
                Some(best) => {
                    let was_optimal = position.is_optimal;
                    if !position.recheck(best.rate) && was_optimal {
                        summary.newly_suboptimal.push(position.id);
                    }
                }
                None => summary.unpriced.push(position.id),
            }

            if position.is_optimal {
                summary.optimal += 1;
            } else {
                summary.suboptimal += 1;
            }
        }

        summary
    }

    /// Move every position to the current best quote for its asset and action.
    ///
    /// Returns the number of positions whose venue or rate changed. Positions
    /// whose asset has no rate are left untouched.
    pub fn reoptimize(&mut self, oracle: &RateOracle<'_>) -> usize {
        let mut changed = 0;

        for position in &mut self.positions {
            let Some(best) = oracle.best_rate(&position.asset, position.action) else {
                continue;
            };
            if best.rate != position.rate
                || best.protocol != position.protocol
                || best.chain != position.chain
            {
                changed += 1;
            }
            position.reprice(best);
        }

        changed
    }

    /// Iterate positions in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.positions.iter()
    }

    /// Copy of all positions in display order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Position> {
        self.positions.clone()
    }

    /// Sum of all position amounts, saturating at [`Decimal::MAX`].
    #[must_use]
    pub fn total_amount(&self) -> Amount {
        self.positions
            .iter()
            .map(Position::amount)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Number of positions that are not at the best available rate.
    #[must_use]
    pub fn suboptimal_count(&self) -> usize {
        self.positions.iter().filter(|p| !p.is_optimal).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
