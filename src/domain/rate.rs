//! Rate table keyed by asset, chain and protocol.
//!
//! The table keeps insertion order at every level, so iteration order is the
//! seeding order. Best-rate ties are resolved against this order (see
//! [`RateOracle`](super::RateOracle)).

use serde::{Deserialize, Serialize};

use super::ids::{Asset, Chain, Protocol};
use super::money::Rate;

/// A single rate keyed by (asset, chain, protocol).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateEntry {
    pub asset: Asset,
    pub chain: Chain,
    pub protocol: Protocol,
    pub rate: Rate,
}

impl RateEntry {
    /// Create a new rate entry.
    pub fn new(
        asset: impl Into<Asset>,
        chain: impl Into<Chain>,
        protocol: impl Into<Protocol>,
        rate: Rate,
    ) -> Self {
        Self {
            asset: asset.into(),
            chain: chain.into(),
            protocol: protocol.into(),
            rate,
        }
    }

    fn matches(&self, asset: &Asset, chain: &Chain, protocol: &Protocol) -> bool {
        &self.asset == asset && &self.chain == chain && &self.protocol == protocol
    }
}

/// Current interest rates, at most one per (asset, chain, protocol).
///
/// Triples that were never inserted are absent, not zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RateTable {
    entries: Vec<RateEntry>,
}

impl RateTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from entries; a repeated triple overwrites the earlier rate.
    pub fn from_entries(entries: impl IntoIterator<Item = RateEntry>) -> Self {
        let mut table = Self::new();
        for entry in entries {
            table.upsert(entry.asset, entry.chain, entry.protocol, entry.rate);
        }
        table
    }

    /// Insert or replace a rate. Returns the previous rate if the triple existed.
    pub fn upsert(
        &mut self,
        asset: impl Into<Asset>,
        chain: impl Into<Chain>,
        protocol: impl Into<Protocol>,
        rate: Rate,
    ) -> Option<Rate> {
        let (asset, chain, protocol) = (asset.into(), chain.into(), protocol.into());
        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|e| e.matches(&asset, &chain, &protocol))
        {
            return Some(std::mem::replace(&mut existing.rate, rate));
        }

        // Keep entries of the same asset and chain contiguous so grouped
        // iteration matches nested-map order.
        let position = self
            .entries
            .iter()
            .rposition(|e| e.asset == asset && e.chain == chain)
            .or_else(|| self.entries.iter().rposition(|e| e.asset == asset))
            .map_or(self.entries.len(), |i| i + 1);
        self.entries.insert(
            position,
            RateEntry {
                asset,
                chain,
                protocol,
                rate,
            },
        );
        None
    }

    /// Look up the rate for an exact triple.
    #[must_use]
    pub fn rate(&self, asset: &Asset, chain: &Chain, protocol: &Protocol) -> Option<Rate> {
        self.entries
            .iter()
            .find(|e| e.matches(asset, chain, protocol))
            .map(|e| e.rate)
    }

    /// All entries in table order.
    #[must_use]
    pub fn entries(&self) -> &[RateEntry] {
        &self.entries
    }

    /// Entries for one asset in table order.
    pub fn entries_for<'a>(&'a self, asset: &'a Asset) -> impl Iterator<Item = &'a RateEntry> {
        self.entries.iter().filter(move |e| &e.asset == asset)
    }

    /// Distinct assets in table order.
    #[must_use]
    pub fn assets(&self) -> Vec<&Asset> {
        let mut assets: Vec<&Asset> = Vec::new();
        for entry in &self.entries {
            if !assets.contains(&&entry.asset) {
                assets.push(&entry.asset);
            }
        }
        assets
    }

    /// Distinct chains listed for an asset, in table order.
    #[must_use]
    pub fn chains(&self, asset: &Asset) -> Vec<&Chain> {
        let mut chains: Vec<&Chain> = Vec::new();
        for entry in self.entries.iter().filter(|e| &e.asset == asset) {
            if !chains.contains(&&entry.chain) {
                chains.push(&entry.chain);
            }
        }
        chains
    }

    /// Visit every rate mutably. Keys cannot be changed, only rates.
    pub fn for_each_rate_mut(&mut self, mut f: impl FnMut(&Asset, &Chain, &Protocol, &mut Rate)) {
        for entry in &mut self.entries {
            f(&entry.asset, &entry.chain, &entry.protocol, &mut entry.rate);
        }
    }

    /// Number of rate entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table holds no rates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
