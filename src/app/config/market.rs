//! Seed rates and bridge chain list.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{Chain, RateEntry};

/// Bridge admission configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BridgeConfig {
    /// Chains the bridge can move assets between. Empty allows any chain.
    #[serde(default = "default_bridge_chains")]
    pub chains: Vec<Chain>,
}

fn default_bridge_chains() -> Vec<Chain> {
    ["Ethereum", "Optimism", "Base", "Mode"]
        .into_iter()
        .map(Chain::from)
        .collect()
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            chains: default_bridge_chains(),
        }
    }
}

/// Mock market used when the config file lists no `[[rates]]`.
#[must_use]
pub fn default_rates() -> Vec<RateEntry> {
    const SEED: &[(&str, &str, &str, i64)] = &[
        ("USDC", "Mode", "LayerBank", 35),
        ("USDC", "Mode", "IonicProtocol", 32),
        ("USDC", "Base", "MorphoBlue", 38),
        ("USDC", "Base", "AAVEV3", 36),
        ("USDC", "Base", "Moonwell", 34),
        ("USDC", "Optimism", "AAVEV3", 37),
        ("USDC", "Optimism", "CompoundV3", 33),
        ("USDC", "Optimism", "SiloFinance", 35),
        ("ETH", "Mode", "LayerBank", 21),
        ("ETH", "Mode", "IonicProtocol", 20),
        ("ETH", "Base", "MorphoBlue", 23),
        ("ETH", "Base", "AAVEV3", 22),
        ("ETH", "Base", "Moonwell", 21),
        ("ETH", "Optimism", "AAVEV3", 22),
        ("ETH", "Optimism", "CompoundV3", 20),
        ("ETH", "Optimism", "SiloFinance", 21),
    ];

    SEED.iter()
        .map(|&(asset, chain, protocol, tenths)| {
            RateEntry::new(asset, chain, protocol, Decimal::new(tenths, 1))
        })
        .collect()
}
