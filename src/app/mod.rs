//! Application layer - configuration, shared state and engine services.

mod config;
mod dashboard;
mod optimizer;
mod orchestrator;
mod rewards;
mod simulator;
mod state;
mod wallet;

pub use config::{
    default_rates, BridgeConfig, Config, LoggingConfig, RewardConfig, SimulationConfig,
};
pub use dashboard::Dashboard;
pub use optimizer::OptimizationService;
pub use orchestrator::App;
pub use rewards::RewardAccrualModel;
pub use simulator::{RateSimulator, SimulatorHandle, TickReport};
pub use state::{AppState, MarketSnapshot};
pub use wallet::{WalletSession, DEMO_ACCOUNT};
