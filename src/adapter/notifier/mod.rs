//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for the backends the engine ships
//! with: structured logs and an in-memory feed.

mod feed;

pub use feed::NotificationFeed;

use crate::port::{Event, Notification, Notifier};

/// Registry of notifiers.
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { notifiers: vec![] }
    }

    /// Register a notifier.
    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Render `event` once and deliver it to every registered notifier.
    pub fn emit(&self, event: Event) -> Notification {
        let notification = Notification::new(event);
        self.notify_all(&notification);
        notification
    }

    /// Notify all registered notifiers.
    pub fn notify_all(&self, notification: &Notification) {
        for notifier in &self.notifiers {
            notifier.notify(notification.clone());
        }
    }

    /// Number of registered notifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A logging notifier that logs notifications via tracing.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        use tracing::{info, warn};

        match &notification.event {
            Event::PositionOpened(e) => {
                info!(
                    asset = %e.asset,
                    action = %e.action,
                    amount = %e.amount,
                    protocol = %e.protocol,
                    chain = %e.chain,
                    rate = %e.rate,
                    "Position opened"
                );
            }
            Event::PositionsOptimized { positions, changed } => {
                info!(positions = *positions, changed = *changed, "Positions optimized");
            }
            Event::OptimizationAvailable { positions } => {
                info!(positions = *positions, "Better rates available");
            }
            Event::BridgeInitiated(e) => {
                info!(
                    asset = %e.asset,
                    amount = %e.amount,
                    from = %e.source_chain,
                    to = %e.destination_chain,
                    "Bridge initiated"
                );
            }
            Event::WalletConnected { account } => {
                info!(account = %account, "Wallet connected");
            }
            Event::WalletDisconnected => {
                info!("Wallet disconnected");
            }
            Event::ActionRejected(e) => {
                warn!(title = %e.title, reason = %e.reason, "Action rejected");
            }
        }
    }
}
