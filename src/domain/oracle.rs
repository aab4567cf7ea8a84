//! Best-rate queries over a [`RateTable`].

use serde::Serialize;

use super::action::Action;
use super::ids::{Asset, Chain, Protocol};
use super::money::Rate;
use super::rate::{RateEntry, RateTable};

/// The winning venue for an (asset, action) query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateQuote {
    pub rate: Rate,
    pub protocol: Protocol,
    pub chain: Chain,
}

impl From<&RateEntry> for RateQuote {
    fn from(entry: &RateEntry) -> Self {
        Self {
            rate: entry.rate,
            protocol: entry.protocol.clone(),
            chain: entry.chain.clone(),
        }
    }
}

/// Read-only query layer over a rate table.
#[derive(Debug, Clone, Copy)]
pub struct RateOracle<'a> {
    table: &'a RateTable,
}

impl<'a> RateOracle<'a> {
    #[must_use]
    pub fn new(table: &'a RateTable) -> Self {
        Self { table }
    }

    /// Best rate for `asset`: maximum for supply, minimum for borrow.
    ///
    /// Scans entries in table order and only replaces the incumbent on a
    /// strictly better rate, so the first-seen entry wins ties. Returns
    /// `None` when the asset has no entries.
    #[must_use]
    pub fn best_rate(&self, asset: &Asset, action: Action) -> Option<RateQuote> {
        self.table
            .entries_for(asset)
            .fold(None::<&RateEntry>, |best, entry| match best {
                Some(incumbent) if !action.prefers(entry.rate, incumbent.rate) => Some(incumbent),
                _ => Some(entry),
            })
            .map(RateQuote::from)
    }

    /// Best quote for every asset in the table, for both actions.
    #[must_use]
    pub fn best_rates(&self) -> Vec<(Asset, Action, RateQuote)> {
        self.table
            .assets()
            .into_iter()
            .flat_map(|asset| {
                Action::ALL.into_iter().filter_map(move |action| {
                    self.best_rate(asset, action)
                        .map(|quote| (asset.clone(), action, quote))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn table() -> RateTable {
        RateTable::from_entries([
            RateEntry::new("USDC", "Base", "MorphoBlue", dec!(3.8)),
            RateEntry::new("USDC", "Base", "AAVEV3", dec!(3.6)),
        ])
    }

    #[test]
    fn supply_picks_highest_rate() {
        let table = table();
        let quote = RateOracle::new(&table)
            .best_rate(&Asset::from("USDC"), Action::Supply)
            .unwrap();

        assert_eq!(quote.rate, dec!(3.8));
        assert_eq!(quote.protocol, Protocol::from("MorphoBlue"));
        assert_eq!(quote.chain, Chain::from("Base"));
    }

    #[test]
    fn borrow_picks_lowest_rate() {
        let table = table();
        let quote = RateOracle::new(&table)
            .best_rate(&Asset::from("USDC"), Action::Borrow)
            .unwrap();

        assert_eq!(quote.rate, dec!(3.6));
        assert_eq!(quote.protocol, Protocol::from("AAVEV3"));
    }

    #[test]
    fn unknown_asset_is_not_found() {
        let table = table();
        let oracle = RateOracle::new(&table);

        assert_eq!(oracle.best_rate(&Asset::from("DAI"), Action::Supply), None);
        assert_eq!(oracle.best_rate(&Asset::from("DAI"), Action::Borrow), None);
    }

    #[test]
    fn zero_rate_is_a_real_candidate() {
        let table = RateTable::from_entries([RateEntry::new("ETH", "Mode", "LayerBank", dec!(0))]);
        let oracle = RateOracle::new(&table);

        let supply = oracle.best_rate(&Asset::from("ETH"), Action::Supply).unwrap();
        let borrow = oracle.best_rate(&Asset::from("ETH"), Action::Borrow).unwrap();
        assert_eq!(supply.rate, dec!(0));
        assert_eq!(borrow.rate, dec!(0));
    }

    #[test]
    fn ties_go_to_first_entry_in_table_order() {
        let table = RateTable::from_entries([
            RateEntry::new("ETH", "Base", "MorphoBlue", dec!(2.2)),
            RateEntry::new("ETH", "Optimism", "AAVEV3", dec!(2.2)),
        ]);
        let oracle = RateOracle::new(&table);

        for action in Action::ALL {
            let quote = oracle.best_rate(&Asset::from("ETH"), action).unwrap();
            assert_eq!(quote.protocol, Protocol::from("MorphoBlue"));
            assert_eq!(quote.chain, Chain::from("Base"));
        }
    }

    #[test]
    fn best_rates_lists_both_actions_per_asset() {
        let table = RateTable::from_entries([
            RateEntry::new("USDC", "Base", "MorphoBlue", dec!(3.8)),
            RateEntry::new("ETH", "Base", "MorphoBlue", dec!(2.3)),
        ]);
        let best = RateOracle::new(&table).best_rates();

        assert_eq!(best.len(), 4);
        assert_eq!(best[0].0, Asset::from("USDC"));
        assert_eq!(best[0].1, Action::Supply);
        assert_eq!(best[3].0, Asset::from("ETH"));
        assert_eq!(best[3].1, Action::Borrow);
    }
}
