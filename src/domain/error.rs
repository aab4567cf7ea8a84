//! Domain validation errors for core domain types.
//!
//! These errors are returned to the caller, which is expected to surface a
//! notification and carry on. A failed operation leaves all state unchanged.
//!
//! # Examples
//!
//! ```
//! use blend::domain::{BridgeError, BridgeRequest, BridgeValidator};
//!
//! let validator = BridgeValidator::default();
//! let request = BridgeRequest::new("Base", "Base", "USDC", "100");
//!
//! assert!(matches!(
//!     validator.validate(&request),
//!     Err(BridgeError::SameChain { .. })
//! ));
//! ```

use thiserror::Error;

use super::action::Action;
use super::ids::{Asset, Chain};

/// Errors that occur when position inputs violate domain rules.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Amount was not a number or was not strictly positive.
    #[error("invalid amount '{input}': expected a number greater than zero")]
    InvalidInput {
        /// The text that was provided.
        input: String,
    },

    /// The asset has no rate entries to choose from.
    #[error("no {action} rate available for {asset}")]
    NoRateAvailable {
        /// The requested asset.
        asset: Asset,
        /// The requested action.
        action: Action,
    },

    /// Action text was neither `supply` nor `borrow`.
    #[error("unknown action '{input}': expected supply or borrow")]
    UnknownAction {
        /// The text that was provided.
        input: String,
    },
}

/// Reasons a bridge request is refused admission.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BridgeError {
    #[error("invalid bridge amount '{input}': expected a number greater than zero")]
    InvalidAmount { input: String },

    #[error("source and destination chain are both {chain}")]
    SameChain { chain: Chain },

    #[error("chain {chain} is not supported by the bridge")]
    UnsupportedChain { chain: Chain },
}
