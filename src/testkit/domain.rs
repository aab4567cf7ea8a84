//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for rate tables and identifiers so
//! tests focus on assertions rather than construction boilerplate.

use rust_decimal::Decimal;

use crate::domain::{Asset, RateEntry, RateTable};

/// Create an [`Asset`] from a string.
pub fn asset(symbol: &str) -> Asset {
    Asset::from(symbol)
}

/// Build a table from `(asset, chain, protocol, rate)` tuples, in order.
pub fn table(entries: &[(&str, &str, &str, Decimal)]) -> RateTable {
    RateTable::from_entries(
        entries
            .iter()
            .map(|&(asset, chain, protocol, rate)| RateEntry::new(asset, chain, protocol, rate)),
    )
}

/// The two-venue USDC market on Base: MorphoBlue 3.8, AAVEV3 3.6.
pub fn usdc_base() -> RateTable {
    table(&[
        ("USDC", "Base", "MorphoBlue", Decimal::new(38, 1)),
        ("USDC", "Base", "AAVEV3", Decimal::new(36, 1)),
    ])
}
