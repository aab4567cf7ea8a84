//! Background simulator lifecycle tests.

use std::sync::Arc;
use std::time::Duration;

use blend::adapter::notifier::NotifierRegistry;
use blend::adapter::random::StdRandom;
use blend::app::{App, Dashboard};
use blend::domain::Action;
use blend::testkit::config::{fast, fast_simulation};
use blend::testkit::domain::asset;
use rust_decimal::Decimal;

fn dashboard(tick_ms: u64) -> Dashboard {
    let config = fast(tick_ms);
    Dashboard::new(
        &config,
        Box::new(StdRandom::new(config.simulation.seed)),
        NotifierRegistry::new(),
    )
}

#[tokio::test]
async fn publishes_snapshots_after_each_tick() {
    let dashboard = dashboard(10);
    dashboard.connect_wallet("0xabc");
    dashboard
        .open_position(&asset("USDC"), "100", Action::Supply)
        .unwrap();

    let (handle, mut snapshots) = dashboard.start_simulator(&fast_simulation(10));
    assert_eq!(snapshots.borrow().tick, 0);

    tokio::time::timeout(Duration::from_secs(5), snapshots.changed())
        .await
        .expect("snapshot within timeout")
        .expect("simulator still running");

    let snapshot = snapshots.borrow_and_update().clone();
    assert!(snapshot.tick >= 1);
    assert_eq!(snapshot.positions.len(), 1);
    assert_eq!(snapshot.rates.len(), 16);
    assert!(snapshot
        .rates
        .entries()
        .iter()
        .all(|e| e.rate >= Decimal::ZERO));

    handle.shutdown().await;
}

#[tokio::test]
async fn shutdown_before_first_tick_leaves_rates_untouched() {
    let dashboard = dashboard(60_000);
    let before = dashboard.rates();

    let (handle, snapshots) = dashboard.start_simulator(&fast_simulation(60_000));
    tokio::time::timeout(Duration::from_secs(5), handle.shutdown())
        .await
        .expect("shutdown completes promptly");

    assert_eq!(snapshots.borrow().tick, 0);
    assert_eq!(dashboard.rates(), before);
}

#[tokio::test]
async fn service_handle_is_shared_with_simulator() {
    let dashboard = dashboard(5);
    let service = Arc::clone(dashboard.service());

    let (handle, mut snapshots) = dashboard.start_simulator(&fast_simulation(5));
    tokio::time::timeout(Duration::from_secs(5), snapshots.changed())
        .await
        .expect("snapshot within timeout")
        .expect("simulator still running");
    handle.shutdown().await;

    assert_eq!(*service.state().rates(), dashboard.rates());
}

#[tokio::test]
async fn app_stops_when_shutdown_resolves() {
    let result = tokio::time::timeout(
        Duration::from_secs(5),
        App::run_until(fast(10), tokio::time::sleep(Duration::from_millis(50))),
    )
    .await
    .expect("app stops within timeout");

    assert!(result.is_ok());
}
