//! Caller facade driven by a UI or API layer.
//!
//! The dashboard owns the wallet session and checks the "wallet connected"
//! precondition before delegating to the optimization service and bridge
//! validator. Every refused action emits an error notification, and every
//! accepted one emits an informational one.

use std::sync::Arc;

use parking_lot::RwLock;
use rust_decimal::Decimal;
use tokio::sync::watch;
use tracing::debug;

use crate::adapter::notifier::{LogNotifier, NotificationFeed, NotifierRegistry};
use crate::adapter::random::StdRandom;
use crate::app::config::{Config, SimulationConfig};
use crate::app::optimizer::OptimizationService;
use crate::app::rewards::RewardAccrualModel;
use crate::app::simulator::{RateSimulator, SimulatorHandle};
use crate::app::state::{AppState, MarketSnapshot};
use crate::app::wallet::WalletSession;
use crate::domain::{
    Action, Amount, Asset, BridgeError, BridgeRequest, BridgeValidator, DomainError, Position,
    RateOracle, RateQuote, RateTable, RewardLedger, RewardPoint,
};
use crate::error::{Error, Result, SessionError};
use crate::port::{BridgeEvent, Event, Notification, RandomSource, RejectionEvent};

/// Entry point for user actions and display reads.
pub struct Dashboard {
    service: Arc<OptimizationService>,
    validator: BridgeValidator,
    wallet: RwLock<WalletSession>,
    notifiers: Arc<NotifierRegistry>,
    feed: NotificationFeed,
    referral_code: String,
}

impl Dashboard {
    /// Build a dashboard seeded from `config`.
    ///
    /// A [`NotificationFeed`] is registered alongside `notifiers` so recent
    /// notifications can be listed with [`Dashboard::notifications`].
    pub fn new(
        config: &Config,
        random: Box<dyn RandomSource>,
        mut notifiers: NotifierRegistry,
    ) -> Self {
        let feed = NotificationFeed::new(config.notification_capacity);
        notifiers.register(Box::new(feed.clone()));
        let notifiers = Arc::new(notifiers);
        debug!(notifiers = notifiers.len(), "Notifiers initialized");

        let state = Arc::new(AppState::new(
            config.rate_table(),
            RewardLedger::with_history(config.rewards.history.clone()),
            random,
        ));
        let service = Arc::new(OptimizationService::new(
            state,
            RewardAccrualModel::new(&config.rewards),
            Arc::clone(&notifiers),
        ));

        Self {
            service,
            validator: BridgeValidator::new(config.bridge.chains.clone()),
            wallet: RwLock::new(WalletSession::new()),
            notifiers,
            feed,
            referral_code: config.referral_code.clone(),
        }
    }

    /// Build a dashboard that logs notifications and draws from `rand`.
    pub fn from_config(config: &Config) -> Self {
        let mut notifiers = NotifierRegistry::new();
        notifiers.register(Box::new(LogNotifier));
        Self::new(
            config,
            Box::new(StdRandom::new(config.simulation.seed)),
            notifiers,
        )
    }

    pub fn service(&self) -> &Arc<OptimizationService> {
        &self.service
    }

    /// Start the background rate simulator for this dashboard's state.
    pub fn start_simulator(
        &self,
        config: &SimulationConfig,
    ) -> (SimulatorHandle, watch::Receiver<MarketSnapshot>) {
        RateSimulator::new(config).start(Arc::clone(&self.service))
    }

    pub fn connect_wallet(&self, account: impl Into<String>) -> Notification {
        let event = self.wallet.write().connect(account);
        self.notifiers.emit(event)
    }

    pub fn disconnect_wallet(&self) -> Option<Notification> {
        let event = self.wallet.write().disconnect();
        event.map(|e| self.notifiers.emit(e))
    }

    #[must_use]
    pub fn is_wallet_connected(&self) -> bool {
        self.wallet.read().is_connected()
    }

    #[must_use]
    pub fn account(&self) -> Option<String> {
        self.wallet.read().account().map(str::to_string)
    }

    /// Open a position at the best rate. Requires a connected wallet.
    pub fn open_position(&self, asset: &Asset, amount: &str, action: Action) -> Result<Position> {
        self.require_wallet()?;
        self.service
            .open_position(asset, amount, action)
            .map_err(|e| self.reject(e.into()))
    }

    /// Move every position to the current best rate. Requires a connected wallet.
    pub fn reoptimize_all(&self) -> Result<Vec<Position>> {
        self.require_wallet()?;
        Ok(self.service.reoptimize_all())
    }

    /// Validate a bridge request and announce it. Requires a connected wallet.
    ///
    /// No funds move; the returned amount is what a real bridge would be asked
    /// to transfer.
    pub fn bridge(&self, request: &BridgeRequest) -> Result<Amount> {
        self.require_wallet()?;
        let amount = self
            .validator
            .validate(request)
            .map_err(|e| self.reject(e.into()))?;

        self.notifiers.emit(Event::BridgeInitiated(BridgeEvent {
            asset: request.asset.clone(),
            amount,
            source_chain: request.source_chain.clone(),
            destination_chain: request.destination_chain.clone(),
        }));
        Ok(amount)
    }

    /// Copy of the current rate table.
    #[must_use]
    pub fn rates(&self) -> RateTable {
        self.service.state().rates().clone()
    }

    #[must_use]
    pub fn best_rate(&self, asset: &Asset, action: Action) -> Option<RateQuote> {
        self.service.best_rate(asset, action)
    }

    /// Best quote for each asset and action, in table order.
    #[must_use]
    pub fn best_rates(&self) -> Vec<(Asset, Action, RateQuote)> {
        let rates = self.service.state().rates();
        RateOracle::new(&rates).best_rates()
    }

    #[must_use]
    pub fn positions(&self) -> Vec<Position> {
        self.service.state().positions().snapshot()
    }

    /// Sum of all position amounts.
    #[must_use]
    pub fn portfolio_value(&self) -> Decimal {
        self.service.state().positions().total_amount()
    }

    #[must_use]
    pub fn reward_total(&self) -> Decimal {
        self.service.state().rewards().total()
    }

    #[must_use]
    pub fn reward_series(&self) -> Vec<RewardPoint> {
        self.service.state().rewards().series().to_vec()
    }

    #[must_use]
    pub fn reward_token(&self) -> &str {
        self.service.reward_model().token()
    }

    /// Recent notifications, newest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.feed.recent()
    }

    #[must_use]
    pub fn notification_count(&self) -> usize {
        self.feed.len()
    }

    #[must_use]
    pub fn referral_code(&self) -> &str {
        &self.referral_code
    }

    fn require_wallet(&self) -> Result<()> {
        if self.wallet.read().require_connected().is_ok() {
            return Ok(());
        }
        Err(self.reject(SessionError::WalletNotConnected.into()))
    }

    /// Emit an error notification for `error` and hand it back.
    fn reject(&self, error: Error) -> Error {
        let title = match &error {
            Error::Session(SessionError::WalletNotConnected) => "Wallet Not Connected",
            Error::Domain(DomainError::InvalidInput { .. }) => "Invalid Amount",
            Error::Domain(DomainError::NoRateAvailable { .. }) => "No Rate Available",
            Error::Domain(DomainError::UnknownAction { .. }) => "Invalid Action",
            Error::Bridge(BridgeError::InvalidAmount { .. })
            | Error::Bridge(BridgeError::SameChain { .. })
            | Error::Bridge(BridgeError::UnsupportedChain { .. }) => "Invalid Bridge Transaction",
            _ => "Action Failed",
        };
        self.notifiers
            .emit(Event::ActionRejected(RejectionEvent::new(title, &error)));
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::Severity;
    use crate::testkit::random::ScriptedRandom;
    use rust_decimal_macros::dec;

    fn dashboard() -> Dashboard {
        Dashboard::new(
            &Config::default(),
            Box::new(ScriptedRandom::default()),
            NotifierRegistry::new(),
        )
    }

    #[test]
    fn actions_require_connected_wallet() {
        let dashboard = dashboard();

        let result = dashboard.open_position(&Asset::from("USDC"), "100", Action::Supply);

        assert!(matches!(
            result,
            Err(Error::Session(SessionError::WalletNotConnected))
        ));
        assert!(dashboard.reoptimize_all().is_err());
        assert!(dashboard
            .bridge(&BridgeRequest::new("Ethereum", "Optimism", "USDC", "1"))
            .is_err());
        assert!(dashboard.positions().is_empty());

        let latest = &dashboard.notifications()[0];
        assert_eq!(latest.title, "Wallet Not Connected");
        assert_eq!(latest.severity, Severity::Error);
    }

    #[test]
    fn open_position_notifies_and_accrues() {
        let dashboard = dashboard();
        dashboard.connect_wallet("0xabc");

        let position = dashboard
            .open_position(&Asset::from("USDC"), "1500", Action::Supply)
            .unwrap();

        assert_eq!(position.rate(), dec!(3.8));
        assert_eq!(dashboard.portfolio_value(), dec!(1500));
        assert_eq!(dashboard.reward_total(), dec!(2.5));
        assert_eq!(dashboard.reward_series().len(), 1);

        let titles: Vec<String> = dashboard
            .notifications()
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["Transaction Successful", "Wallet Connected"]);
        assert_eq!(dashboard.notification_count(), 2);
    }

    #[test]
    fn invalid_amount_is_rejected_with_notification() {
        let dashboard = dashboard();
        dashboard.connect_wallet("0xabc");

        let result = dashboard.open_position(&Asset::from("ETH"), "-1", Action::Borrow);

        assert!(matches!(
            result,
            Err(Error::Domain(DomainError::InvalidInput { .. }))
        ));
        assert_eq!(dashboard.notifications()[0].title, "Invalid Amount");
        assert_eq!(dashboard.reward_total(), dec!(0));
    }

    #[test]
    fn bridge_rejects_same_chain_and_accepts_distinct() {
        let dashboard = dashboard();
        dashboard.connect_wallet("0xabc");

        let same = dashboard.bridge(&BridgeRequest::new("Base", "Base", "USDC", "10"));
        assert!(matches!(
            same,
            Err(Error::Bridge(BridgeError::SameChain { .. }))
        ));
        assert_eq!(
            dashboard.notifications()[0].title,
            "Invalid Bridge Transaction"
        );

        let amount = dashboard
            .bridge(&BridgeRequest::new("Ethereum", "Optimism", "USDC", "10"))
            .unwrap();
        assert_eq!(amount, dec!(10));
        assert_eq!(
            dashboard.notifications()[0].description,
            "Bridging 10.00 USDC from Ethereum to Optimism."
        );
    }

    #[test]
    fn disconnect_blocks_further_actions() {
        let dashboard = dashboard();
        dashboard.connect_wallet("0xabc");
        assert_eq!(dashboard.account().as_deref(), Some("0xabc"));

        assert!(dashboard.disconnect_wallet().is_some());
        assert!(dashboard.disconnect_wallet().is_none());
        assert!(!dashboard.is_wallet_connected());
        assert!(dashboard.reoptimize_all().is_err());
    }

    #[test]
    fn read_accessors_reflect_config() {
        let dashboard = dashboard();

        assert_eq!(dashboard.referral_code(), "BLEND123");
        assert_eq!(dashboard.reward_token(), "OP");
        assert_eq!(dashboard.rates().len(), 16);
        assert_eq!(dashboard.best_rates().len(), 4);
        assert_eq!(
            dashboard
                .best_rate(&Asset::from("ETH"), Action::Supply)
                .unwrap()
                .rate,
            dec!(2.3)
        );
    }

    #[test]
    fn portfolio_value_saturates_on_huge_positions() {
        let dashboard = dashboard();
        dashboard.connect_wallet("0xabc");

        for _ in 0..2 {
            dashboard
                .open_position(
                    &Asset::from("USDC"),
                    "50000000000000000000000000000",
                    Action::Supply,
                )
                .unwrap();
        }

        assert_eq!(dashboard.positions().len(), 2);
        assert_eq!(dashboard.portfolio_value(), Decimal::MAX);
    }
}
