//! Deterministic random source for tests.

use std::collections::VecDeque;

use rust_decimal::Decimal;

use crate::port::RandomSource;

/// Replays a fixed sequence of draws.
///
/// Each call to [`uniform`](RandomSource::uniform) pops the next scripted
/// value and returns it unchanged. Once the script is exhausted, draws return
/// the midpoint of the requested range, which is zero for symmetric draws.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<Decimal>,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = Decimal>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Number of scripted draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform(&mut self, low: Decimal, high: Decimal) -> Decimal {
        self.values
            .pop_front()
            .unwrap_or_else(|| low + (high - low) / Decimal::from(2))
    }
}
