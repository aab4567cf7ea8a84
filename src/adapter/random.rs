//! `rand`-backed implementation of the random source port.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use tracing::warn;

use crate::port::RandomSource;

/// Fraction digits kept from each draw.
const DRAW_PRECISION: u32 = 8;

/// Uniform draws from a [`StdRng`].
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Seed from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for reproducible runs.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is set, otherwise from entropy.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl RandomSource for StdRandom {
    fn uniform(&mut self, low: Decimal, high: Decimal) -> Decimal {
        if high <= low {
            return low;
        }
        let unit = Decimal::from_f64(self.rng.gen::<f64>()).unwrap_or(Decimal::ZERO);
        // Truncating keeps the offset strictly below the span.
        let drawn = high
            .checked_sub(low)
            .and_then(|span| span.checked_mul(unit))
            .map(|offset| offset.round_dp_with_strategy(DRAW_PRECISION, RoundingStrategy::ToZero))
            .and_then(|offset| low.checked_add(offset));
        match drawn {
            Some(value) => value,
            None => {
                warn!(low = %low, high = %high, "Random range overflowed, returning lower bound");
                low
            }
        }
    }
}
