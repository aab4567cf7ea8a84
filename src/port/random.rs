//! Random source port.
//!
//! Rate perturbations and reward draws go through this trait so tests can
//! script the exact values that come out.

use rust_decimal::Decimal;

/// A source of uniformly distributed decimals.
pub trait RandomSource: Send {
    /// Draw a value from the half-open range `[low, high)`.
    ///
    /// Implementations return `low` when `high <= low`.
    fn uniform(&mut self, low: Decimal, high: Decimal) -> Decimal;

    /// Draw a value symmetric around zero, in `[-bound, bound)`.
    fn symmetric(&mut self, bound: Decimal) -> Decimal {
        self.uniform(-bound, bound)
    }
}
