//! Handler for the `demo` command.
//!
//! Plays a short scripted session: connect a wallet, open two positions,
//! advance the simulator, re-optimize and bridge. Ticks are stepped directly
//! instead of waiting on the timer, so a seeded run is reproducible.

use std::path::Path;

use tabled::{Table, Tabled};

use crate::adapter::notifier::NotifierRegistry;
use crate::adapter::random::StdRandom;
use crate::app::{Config, Dashboard, RateSimulator, DEMO_ACCOUNT};
use crate::cli::output;
use crate::domain::{Action, Asset, BridgeRequest, Position};
use crate::error::Result;
use crate::port::format_amount;

#[derive(Tabled)]
struct PositionRow {
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Action")]
    action: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Asset")]
    asset: String,
    #[tabled(rename = "Protocol")]
    protocol: String,
    #[tabled(rename = "Chain")]
    chain: String,
    #[tabled(rename = "APY %")]
    rate: String,
    #[tabled(rename = "Optimal")]
    optimal: &'static str,
}

impl From<&Position> for PositionRow {
    fn from(p: &Position) -> Self {
        Self {
            id: p.id().to_string(),
            action: p.action().to_string(),
            amount: format_amount(p.amount()),
            asset: p.asset().to_string(),
            protocol: p.protocol().to_string(),
            chain: p.chain().to_string(),
            rate: format_amount(p.rate()),
            optimal: if p.is_optimal() { "yes" } else { "no" },
        }
    }
}

/// Run the scripted session and print what happened.
pub fn execute<P: AsRef<Path>>(config_path: P, ticks: u32, seed: Option<u64>) -> Result<()> {
    let mut config = Config::load(config_path)?;
    if seed.is_some() {
        config.simulation.seed = seed;
    }

    let dashboard = Dashboard::new(
        &config,
        Box::new(StdRandom::new(config.simulation.seed)),
        NotifierRegistry::new(),
    );
    let simulator = RateSimulator::new(&config.simulation);

    dashboard.connect_wallet(DEMO_ACCOUNT);
    dashboard.open_position(&Asset::from("USDC"), "1500", Action::Supply)?;
    dashboard.open_position(&Asset::from("ETH"), "2.5", Action::Borrow)?;

    output::section("Simulation");
    for _ in 0..ticks {
        let (report, summary) = simulator.step(dashboard.service());
        println!(
            "  tick: {} rates updated, {} optimal, {} suboptimal",
            report.updated, summary.optimal, summary.suboptimal
        );
    }

    let positions = dashboard.reoptimize_all()?;
    dashboard.bridge(&BridgeRequest::new("Ethereum", "Optimism", "ETH", "2.5"))?;

    output::section("Positions");
    output::table(&Table::new(positions.iter().map(PositionRow::from)).to_string());

    output::section("Summary");
    output::key_value("Account", DEMO_ACCOUNT);
    output::key_value("Portfolio", format_amount(dashboard.portfolio_value()));
    output::key_value(
        "Rewards",
        format!(
            "{} {}",
            format_amount(dashboard.reward_total()),
            dashboard.reward_token()
        ),
    );
    output::key_value("Referral", dashboard.referral_code());

    output::section(&format!("Notifications ({})", dashboard.notification_count()));
    for notification in dashboard.notifications().iter().rev() {
        println!(
            "  [{}] {}: {}",
            notification.timestamp.format("%H:%M:%S"),
            notification.title,
            notification.description
        );
    }
    println!();

    Ok(())
}
