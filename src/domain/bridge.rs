//! Admission check for cross-chain transfer requests.
//!
//! No funds move here. A request that passes validation is only eligible to
//! be dispatched to a real bridge.

use super::error::BridgeError;
use super::ids::{Asset, Chain};
use super::money::{parse_positive_amount, Amount};

/// A proposed transfer between two chains. Validated and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeRequest {
    pub source_chain: Chain,
    pub destination_chain: Chain,
    pub asset: Asset,
    /// Amount as entered by the user.
    pub amount: String,
}

impl BridgeRequest {
    pub fn new(
        source_chain: impl Into<Chain>,
        destination_chain: impl Into<Chain>,
        asset: impl Into<Asset>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            source_chain: source_chain.into(),
            destination_chain: destination_chain.into(),
            asset: asset.into(),
            amount: amount.into(),
        }
    }
}

/// Stateless validator for [`BridgeRequest`]s.
///
/// Rules are applied in order: positive amount, distinct chains, then
/// (when a chain list is configured) supported chains.
#[derive(Debug, Clone, Default)]
pub struct BridgeValidator {
    supported_chains: Vec<Chain>,
}

impl BridgeValidator {
    /// Create a validator restricted to `supported_chains`. An empty list allows any chain.
    #[must_use]
    pub fn new(supported_chains: Vec<Chain>) -> Self {
        Self { supported_chains }
    }

    #[must_use]
    pub fn supported_chains(&self) -> &[Chain] {
        &self.supported_chains
    }

    /// Validate a request, returning the parsed amount on acceptance.
    pub fn validate(&self, request: &BridgeRequest) -> Result<Amount, BridgeError> {
        let amount =
            parse_positive_amount(&request.amount).ok_or_else(|| BridgeError::InvalidAmount {
                input: request.amount.clone(),
            })?;

        if request.source_chain == request.destination_chain {
            return Err(BridgeError::SameChain {
                chain: request.source_chain.clone(),
            });
        }

        if !self.supported_chains.is_empty() {
            for chain in [&request.source_chain, &request.destination_chain] {
                if !self.supported_chains.contains(chain) {
                    return Err(BridgeError::UnsupportedChain {
                        chain: chain.clone(),
                    });
                }
            }
        }

        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn validator() -> BridgeValidator {
        BridgeValidator::new(
            ["Ethereum", "Optimism", "Base", "Mode"]
                .into_iter()
                .map(Chain::from)
                .collect(),
        )
    }

    #[test]
    fn accepts_valid_request() {
        let request = BridgeRequest::new("Ethereum", "Optimism", "USDC", "250");
        assert_eq!(validator().validate(&request), Ok(dec!(250)));
    }

    #[test]
    fn rejects_non_positive_or_non_numeric_amount() {
        for amount in ["0", "-3", "", "ten"] {
            let request = BridgeRequest::new("Ethereum", "Optimism", "USDC", amount);
            assert!(matches!(
                validator().validate(&request),
                Err(BridgeError::InvalidAmount { .. })
            ));
        }
    }

    #[test]
    fn rejects_same_chain_for_any_valid_amount() {
        for amount in ["1", "0.5", "1000000"] {
            let request = BridgeRequest::new("Base", "Base", "ETH", amount);
            assert_eq!(
                validator().validate(&request),
                Err(BridgeError::SameChain {
                    chain: Chain::from("Base")
                })
            );
        }
    }

    #[test]
    fn same_chain_with_bad_amount_is_still_rejected() {
        let request = BridgeRequest::new("Base", "Base", "ETH", "-1");
        assert!(validator().validate(&request).is_err());
    }

    #[test]
    fn rejects_unsupported_chain() {
        let request = BridgeRequest::new("Ethereum", "Arbitrum", "USDC", "10");
        assert_eq!(
            validator().validate(&request),
            Err(BridgeError::UnsupportedChain {
                chain: Chain::from("Arbitrum")
            })
        );
    }

    #[test]
    fn empty_chain_list_allows_any_distinct_chains() {
        let request = BridgeRequest::new("Ethereum", "Arbitrum", "USDC", "10");
        assert!(BridgeValidator::default().validate(&request).is_ok());
    }
}
