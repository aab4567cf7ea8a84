//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`random`] - [`ScriptedRandom`](random::ScriptedRandom), a
//!   [`RandomSource`](crate::port::RandomSource) that replays fixed draws.
//! - [`domain`] - Builders for rate tables and assets.
//! - [`config`] - Canonical test configurations (fast ticks, fixed seed).

pub mod config;
pub mod domain;
pub mod random;
