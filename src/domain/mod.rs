//! Rate, position, reward and bridge domain logic.
//!
//! Nothing here performs I/O, takes locks, or draws random numbers. The
//! application layer wires these types to shared state and injected ports.

mod action;
mod bridge;
pub mod error;
mod ids;
mod money;
mod oracle;
mod position;
mod rate;
mod reward;

pub use action::Action;
pub use bridge::{BridgeRequest, BridgeValidator};
pub use error::{BridgeError, DomainError};
pub use ids::{Asset, Chain, PositionId, Protocol};
pub use money::{parse_decimal, parse_positive_amount, Amount, Rate};
pub use oracle::{RateOracle, RateQuote};
pub use position::{Position, PositionLedger, RecheckSummary};
pub use rate::{RateEntry, RateTable};
pub use reward::{RewardAccrual, RewardLedger, RewardPoint};
