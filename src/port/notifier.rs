//! Notifier port for user-facing notifications.
//!
//! Every mutating operation emits an [`Event`]. The event is wrapped in a
//! [`Notification`] carrying the title, description and creation time a
//! toast or notification list would render.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{Action, Asset, Chain, Position, Protocol, Rate};

/// Events that can trigger notifications.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    /// A simulated wallet was connected.
    WalletConnected { account: String },
    /// The wallet was disconnected.
    WalletDisconnected,
    /// A position was opened at the best available rate.
    PositionOpened(PositionEvent),
    /// All positions were moved to the current best rates.
    PositionsOptimized { positions: usize, changed: usize },
    /// A rate tick left some positions below the best available rate.
    OptimizationAvailable { positions: usize },
    /// A bridge request passed validation.
    BridgeInitiated(BridgeEvent),
    /// A user action was refused.
    ActionRejected(RejectionEvent),
}

/// Details of an opened position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionEvent {
    pub asset: Asset,
    pub amount: Decimal,
    pub action: Action,
    pub protocol: Protocol,
    pub chain: Chain,
    pub rate: Rate,
}

impl From<&Position> for PositionEvent {
    fn from(position: &Position) -> Self {
        Self {
            asset: position.asset().clone(),
            amount: position.amount(),
            action: position.action(),
            protocol: position.protocol().clone(),
            chain: position.chain().clone(),
            rate: position.rate(),
        }
    }
}

/// Details of an accepted bridge request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BridgeEvent {
    pub asset: Asset,
    pub amount: Decimal,
    pub source_chain: Chain,
    pub destination_chain: Chain,
}

/// A refused action and why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectionEvent {
    /// Short title shown to the user.
    pub title: String,
    /// The error message.
    pub reason: String,
}

impl RejectionEvent {
    pub fn new(title: impl Into<String>, reason: &impl std::fmt::Display) -> Self {
        Self {
            title: title.into(),
            reason: reason.to_string(),
        }
    }
}

/// Severity used by presentation layers to style a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Error,
}

impl Event {
    /// Short phrase shown as the notification title.
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Event::WalletConnected { .. } => "Wallet Connected".into(),
            Event::WalletDisconnected => "Wallet Disconnected".into(),
            Event::PositionOpened(_) => "Transaction Successful".into(),
            Event::PositionsOptimized { .. } => "Positions Optimized".into(),
            Event::OptimizationAvailable { .. } => "Better Rates Available".into(),
            Event::BridgeInitiated(_) => "Bridge Transaction Initiated".into(),
            Event::ActionRejected(e) => e.title.clone(),
        }
    }

    /// Human-readable sentence describing the event.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Event::WalletConnected { account } => {
                format!("You have successfully connected wallet {account}.")
            }
            Event::WalletDisconnected => "Your wallet has been disconnected.".into(),
            Event::PositionOpened(e) => format!(
                "You have {} {} {} at {}% APY on {} ({}).",
                e.action.past_tense(),
                format_amount(e.amount),
                e.asset,
                format_amount(e.rate),
                e.protocol,
                e.chain
            ),
            Event::PositionsOptimized { positions, changed } => format!(
                "Your {positions} position(s) have been optimized to the best rates; {changed} moved."
            ),
            Event::OptimizationAvailable { positions } => format!(
                "{positions} position(s) are no longer at the best available rate."
            ),
            Event::BridgeInitiated(e) => format!(
                "Bridging {} {} from {} to {}.",
                format_amount(e.amount),
                e.asset,
                e.source_chain,
                e.destination_chain
            ),
            Event::ActionRejected(e) => format!("{}.", capitalize(&e.reason)),
        }
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Event::ActionRejected(_) => Severity::Error,
            _ => Severity::Info,
        }
    }
}

/// An event stamped with its creation time and rendered text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub event: Event,
}

impl Notification {
    /// Render `event` with the current wall-clock time.
    #[must_use]
    pub fn new(event: Event) -> Self {
        Self::at(event, Utc::now())
    }

    /// Render `event` with an explicit timestamp.
    #[must_use]
    pub fn at(event: Event, timestamp: DateTime<Utc>) -> Self {
        Self {
            title: event.title(),
            description: event.description(),
            timestamp,
            severity: event.severity(),
            event,
        }
    }
}

/// Format a decimal with exactly two fraction digits.
#[must_use]
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Trait for notification handlers.
///
/// Implement this trait to receive notifications from the engine.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - The `notify` method is called while no engine lock is held, but it
///   should still return quickly
pub trait Notifier: Send + Sync {
    /// Handle a notification.
    fn notify(&self, notification: Notification);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn opened() -> Event {
        Event::PositionOpened(PositionEvent {
            asset: Asset::from("USDC"),
            amount: dec!(1500),
            action: Action::Supply,
            protocol: Protocol::from("MorphoBlue"),
            chain: Chain::from("Base"),
            rate: dec!(3.8),
        })
    }

    #[test]
    fn position_opened_mentions_amount_asset_and_rate() {
        let notification = Notification::new(opened());

        assert_eq!(notification.title, "Transaction Successful");
        assert!(notification.description.contains("supplied 1500.00 USDC"));
        assert!(notification.description.contains("3.80% APY"));
        assert_eq!(notification.severity, Severity::Info);
    }

    #[test]
    fn bridge_description_names_both_chains() {
        let event = Event::BridgeInitiated(BridgeEvent {
            asset: Asset::from("ETH"),
            amount: dec!(2.5),
            source_chain: Chain::from("Ethereum"),
            destination_chain: Chain::from("Optimism"),
        });

        assert_eq!(
            event.description(),
            "Bridging 2.50 ETH from Ethereum to Optimism."
        );
    }

    #[test]
    fn rejection_is_error_with_custom_title() {
        let event = Event::ActionRejected(RejectionEvent::new(
            "Invalid Amount",
            &"amount must be positive",
        ));
        let notification = Notification::new(event);

        assert_eq!(notification.title, "Invalid Amount");
        assert_eq!(notification.description, "Amount must be positive.");
        assert_eq!(notification.severity, Severity::Error);
    }

    #[test]
    fn timestamp_is_creation_time() {
        let before = Utc::now();
        let notification = Notification::new(Event::WalletDisconnected);
        assert!(notification.timestamp >= before);
        assert!(notification.timestamp <= Utc::now());
    }

    #[test]
    fn format_amount_pads_two_places() {
        assert_eq!(format_amount(dec!(3)), "3.00");
        assert_eq!(format_amount(dec!(3.456)), "3.46");
    }
}
