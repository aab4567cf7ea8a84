//! Simulated wallet session.
//!
//! There is no real wallet behind this. The session only records whether a
//! wallet is connected and which opaque account identifier it reported, so
//! callers can gate user actions on it.

use crate::error::SessionError;
use crate::port::Event;

/// Account shown when the demo connects without an explicit identifier.
pub const DEMO_ACCOUNT: &str = "0x1234...ABCD";

/// Connection state of the user's wallet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletSession {
    account: Option<String>,
}

impl WalletSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the wallet connected with `account`. Reconnecting replaces the account.
    pub fn connect(&mut self, account: impl Into<String>) -> Event {
        let account = account.into();
        self.account = Some(account.clone());
        Event::WalletConnected { account }
    }

    /// Clear the connection. Returns `None` if no wallet was connected.
    pub fn disconnect(&mut self) -> Option<Event> {
        self.account.take().map(|_| Event::WalletDisconnected)
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    #[must_use]
    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    /// The connected account, or [`SessionError::WalletNotConnected`].
    pub fn require_connected(&self) -> Result<&str, SessionError> {
        self.account().ok_or(SessionError::WalletNotConnected)
    }
}
