//! Handler for the `rates` command.

use std::path::Path;

use serde::Serialize;
use tabled::{Table, Tabled};

use crate::app::Config;
use crate::cli::output;
use crate::domain::{Action, Asset, RateEntry, RateOracle, RateQuote};
use crate::error::Result;

#[derive(Tabled)]
struct RateRow {
    #[tabled(rename = "Asset")]
    asset: String,
    #[tabled(rename = "Chain")]
    chain: String,
    #[tabled(rename = "Protocol")]
    protocol: String,
    #[tabled(rename = "APY %")]
    rate: String,
}

#[derive(Tabled, Serialize)]
struct BestRow {
    #[tabled(rename = "Asset")]
    asset: Asset,
    #[tabled(rename = "Action")]
    action: Action,
    #[tabled(rename = "Best %")]
    rate: String,
    #[tabled(rename = "Protocol")]
    protocol: String,
    #[tabled(rename = "Chain")]
    chain: String,
}

impl From<(Asset, Action, RateQuote)> for BestRow {
    fn from((asset, action, quote): (Asset, Action, RateQuote)) -> Self {
        Self {
            asset,
            action,
            rate: quote.rate.to_string(),
            protocol: quote.protocol.to_string(),
            chain: quote.chain.to_string(),
        }
    }
}

#[derive(Serialize)]
struct RatesReport<'a> {
    rates: &'a [RateEntry],
    best: Vec<BestRow>,
}

/// Print the configured rate table and the best quote per asset and action.
pub fn execute<P: AsRef<Path>>(config_path: P, json: bool) -> Result<()> {
    let config = Config::load(config_path)?;
    let table = config.rate_table();
    let best: Vec<BestRow> = RateOracle::new(&table)
        .best_rates()
        .into_iter()
        .map(BestRow::from)
        .collect();

    if json {
        let report = RatesReport {
            rates: table.entries(),
            best,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::section("Rates");
    let rows = table.entries().iter().map(|e| RateRow {
        asset: e.asset.to_string(),
        chain: e.chain.to_string(),
        protocol: e.protocol.to_string(),
        rate: e.rate.to_string(),
    });
    output::table(&Table::new(rows).to_string());

    output::section("Best rates");
    output::table(&Table::new(best).to_string());
    println!();

    Ok(())
}
