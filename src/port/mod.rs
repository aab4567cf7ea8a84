//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the engine and its collaborators:
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!                    │  (state, simulator,     │
//!                    │   optimization service) │
//!                    └─────────────────────────┘
//!                       │                  │
//!                       ▼                  ▼
//!                 ┌───────────┐     ┌──────────────┐
//!                 │ Notifier  │     │ RandomSource │
//!                 │  Adapter  │     │   Adapter    │
//!                 └───────────┘     └──────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`Notifier`] - Notification delivery (logs, in-memory feed, UI bridge)
//! - [`RandomSource`] - Uniform draws for rate perturbation and rewards

mod notifier;
mod random;

pub use notifier::{
    format_amount, BridgeEvent, Event, Notification, Notifier, PositionEvent, RejectionEvent,
    Severity,
};
pub use random::RandomSource;
