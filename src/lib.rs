//! Blend - cross-chain yield aggregation engine.
//!
//! Tracks lending and borrowing rates for assets across protocols and chains,
//! opens positions at the best available rate, and keeps an eye on whether
//! those positions stay optimal as a background simulator moves the market.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - [`domain`] - Rate table, oracle, position ledger, rewards and bridge
//!   validation. Pure data and rules, no I/O.
//! - [`port`] - Traits the engine depends on: [`port::Notifier`] and
//!   [`port::RandomSource`].
//! - [`adapter`] - Implementations of those ports (logging and in-memory
//!   notifiers, a seeded RNG).
//! - [`app`] - Configuration, shared state, the optimization service, the
//!   rate simulator and the [`app::Dashboard`] facade.
//! - [`cli`] - Command-line entry points.
//!
//! # Example
//!
//! ```
//! use blend::app::{Config, Dashboard};
//! use blend::domain::{Action, Asset};
//!
//! let dashboard = Dashboard::from_config(&Config::default());
//! dashboard.connect_wallet("0xabc");
//!
//! let position = dashboard
//!     .open_position(&Asset::from("USDC"), "1500", Action::Supply)
//!     .unwrap();
//! assert_eq!(position.protocol().as_str(), "MorphoBlue");
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
