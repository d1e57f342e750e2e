//! Lifecycle tests for `CoinListViewModel` against an in-memory data source.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::StreamExt;
use rust_decimal::Decimal;
use tokio::sync::Semaphore;
use tokio::time::timeout;

use crypto_tracker::prelude::*;

const TEST_TIMEOUT: Duration = Duration::from_secs(2);
const GRACE: Duration = Duration::from_millis(150);

/// Answers `get_coins` with a fixed result once the test opens the gate.
struct FakeSource {
    result: Result<Vec<Coin>, NetworkError>,
    gate: Semaphore,
    calls: AtomicUsize,
}

impl FakeSource {
    fn new(result: Result<Vec<Coin>, NetworkError>) -> Arc<Self> {
        Arc::new(Self {
            result,
            gate: Semaphore::new(0),
            calls: AtomicUsize::new(0),
        })
    }

    fn open(&self, loads: usize) {
        self.gate.add_permits(loads);
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CoinDataSource for FakeSource {
    async fn get_coins(&self) -> Result<Vec<Coin>, NetworkError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate
            .acquire()
            .await
            .expect("gate is never closed")
            .forget();
        self.result.clone()
    }

    async fn get_coin_history(
        &self,
        _coin_id: &str,
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> Result<Vec<CoinPrice>, NetworkError> {
        Ok(Vec::new())
    }
}

fn coin(id: &str, rank: u32, symbol: &str, price: &str) -> Coin {
    Coin {
        id: id.to_string(),
        rank,
        name: id.to_string(),
        symbol: symbol.to_string(),
        market_cap_usd: Decimal::from(1_000_000),
        price_usd: price.parse().unwrap(),
        change_percent_24hr: "-0.81".parse().unwrap(),
    }
}

fn view_model(source: &Arc<FakeSource>) -> CoinListViewModel {
    CoinListViewModel::with_grace_period(Arc::clone(source) as Arc<dyn CoinDataSource>, GRACE)
}

/// Wait until a published state satisfies `pred`.
async fn wait_for(
    subscription: &mut CoinListSubscription,
    pred: impl Fn(&CoinListState) -> bool,
) -> CoinListState {
    let current = subscription.current();
    if pred(&current) {
        return current;
    }
    timeout(TEST_TIMEOUT, async {
        loop {
            let state = subscription.next().await.expect("state channel closed");
            if pred(&state) {
                return state;
            }
        }
    })
    .await
    .expect("timed out waiting for state")
}

async fn wait_for_calls(source: &FakeSource, calls: usize) {
    timeout(TEST_TIMEOUT, async {
        while source.calls() < calls {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("timed out waiting for a load");
}

#[tokio::test]
async fn test_initial_state_is_empty_and_idle() {
    let source = FakeSource::new(Ok(Vec::new()));
    let vm = view_model(&source);
    assert_eq!(vm.state(), CoinListState::default());
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn test_successful_load_toggles_loading_and_maps_coins() {
    let source = FakeSource::new(Ok(vec![
        coin("bitcoin", 1, "BTC", "6929.8217"),
        coin("ethereum", 2, "ETH", "404.9774"),
    ]));
    let vm = view_model(&source);

    let mut sub = vm.subscribe();
    let loading = wait_for(&mut sub, |s| s.is_loading).await;
    assert!(loading.coins.is_empty());

    source.open(1);
    let loaded = wait_for(&mut sub, |s| !s.is_loading).await;
    assert_eq!(loaded.coins.len(), 2);
    assert_eq!(loaded.coins[0].id, "bitcoin");
    assert_eq!(loaded.coins[0].price_usd.formatted, "6,929.82");
    assert_eq!(loaded.coins[0].change_label(), "-0.81 %");
    assert_eq!(loaded.coins[1].symbol, "ETH");
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn test_failed_load_emits_one_event_and_keeps_list_empty() {
    let source = FakeSource::new(Err(NetworkError::ServerError));
    source.open(1);
    let vm = view_model(&source);
    let mut events = vm.events();

    let mut sub = vm.subscribe();
    let event = timeout(TEST_TIMEOUT, events.next())
        .await
        .expect("timed out waiting for error event");
    assert_eq!(event, Some(CoinListEvent::Error(NetworkError::ServerError)));

    let state = wait_for(&mut sub, |s| !s.is_loading).await;
    assert!(state.coins.is_empty());

    assert!(
        timeout(Duration::from_millis(100), events.next()).await.is_err(),
        "error must be delivered once"
    );
}

#[tokio::test]
async fn test_additional_subscribers_share_one_load() {
    let source = FakeSource::new(Ok(vec![coin("bitcoin", 1, "BTC", "1")]));
    let vm = view_model(&source);

    let mut first = vm.subscribe();
    let mut second = vm.subscribe();
    assert_eq!(vm.subscriber_count(), 2);

    source.open(2);
    wait_for(&mut first, |s| !s.coins.is_empty()).await;
    wait_for(&mut second, |s| !s.coins.is_empty()).await;
    assert_eq!(source.calls(), 1);

    drop(first);
    assert_eq!(vm.subscriber_count(), 1);
}

#[tokio::test]
async fn test_resubscribe_within_grace_does_not_reload() {
    let source = FakeSource::new(Ok(vec![coin("bitcoin", 1, "BTC", "1")]));
    source.open(2);
    let vm = view_model(&source);

    let mut sub = vm.subscribe();
    wait_for(&mut sub, |s| !s.coins.is_empty()).await;
    drop(sub);

    let sub = vm.subscribe();
    tokio::time::sleep(GRACE * 2).await;
    assert_eq!(source.calls(), 1);
    assert_eq!(sub.current().coins.len(), 1);
}

#[tokio::test]
async fn test_resubscribe_after_grace_reloads() {
    let source = FakeSource::new(Ok(vec![coin("bitcoin", 1, "BTC", "1")]));
    source.open(2);
    let vm = view_model(&source);

    let mut sub = vm.subscribe();
    wait_for(&mut sub, |s| !s.coins.is_empty()).await;
    drop(sub);

    tokio::time::sleep(GRACE * 3).await;
    let _sub = vm.subscribe();
    wait_for_calls(&source, 2).await;
}

#[tokio::test]
async fn test_grace_expiry_cancels_in_flight_load() {
    let source = FakeSource::new(Ok(vec![coin("bitcoin", 1, "BTC", "1")]));
    let vm = view_model(&source);

    let mut sub = vm.subscribe();
    wait_for(&mut sub, |s| s.is_loading).await;
    drop(sub);

    tokio::time::sleep(GRACE * 3).await;
    assert!(!vm.state().is_loading);

    // the cancelled load never lands, even once its call would have returned
    source.open(1);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(vm.state().coins.is_empty());
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn test_coin_click_leaves_state_untouched() {
    let source = FakeSource::new(Ok(vec![coin("bitcoin", 1, "BTC", "1")]));
    source.open(1);
    let vm = view_model(&source);

    let mut sub = vm.subscribe();
    let before = wait_for(&mut sub, |s| !s.coins.is_empty()).await;
    vm.on_action(CoinListAction::OnCoinClick(before.coins[0].clone()));
    assert_eq!(vm.state(), before);
}
