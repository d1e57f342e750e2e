//! Lifecycle-scoped loading of the coin list.
//!
//! State lives in a `tokio::sync::watch` channel so any number of observers
//! can read it. The first [`CoinListSubscription`] starts the upstream, which
//! runs exactly one load. When the last subscription is dropped a grace window
//! starts; if nobody subscribes again before it elapses, the in-flight load is
//! cancelled and the next subscription loads afresh.

use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use futures_util::stream::Stream;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::{CoinListAction, CoinListEvent, CoinListState};
use crate::domain::source::CoinDataSource;
use crate::presentation::models::CoinUi;

/// How long the upstream outlives its last subscriber.
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_secs(5);

// ─── Shared state ────────────────────────────────────────────────────────────

#[derive(Default)]
struct Lifecycle {
    subscribers: usize,
    active: bool,
    load_task: Option<JoinHandle<()>>,
    stop_task: Option<JoinHandle<()>>,
}

struct Inner {
    data_source: Arc<dyn CoinDataSource>,
    state: watch::Sender<CoinListState>,
    event_tx: mpsc::UnboundedSender<CoinListEvent>,
    event_rx: tokio::sync::Mutex<mpsc::UnboundedReceiver<CoinListEvent>>,
    grace_period: Duration,
    lifecycle: Mutex<Lifecycle>,
}

impl Inner {
    fn lifecycle(&self) -> MutexGuard<'_, Lifecycle> {
        self.lifecycle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Compute the next state from the current one and publish it.
    fn update(&self, f: impl FnOnce(&CoinListState) -> CoinListState) {
        let next = {
            let current = self.state.borrow();
            f(&current)
        };
        self.state.send_replace(next);
    }

    fn acquire(self: &Arc<Self>) {
        let mut lifecycle = self.lifecycle();
        lifecycle.subscribers += 1;

        if let Some(stop) = lifecycle.stop_task.take() {
            stop.abort();
        }
        if lifecycle.active {
            return;
        }

        lifecycle.active = true;
        let in_flight = lifecycle
            .load_task
            .as_ref()
            .is_some_and(|handle| !handle.is_finished());
        if !in_flight {
            tracing::info!("Coin list upstream started");
            lifecycle.load_task = Some(tokio::spawn(load_coins(Arc::clone(self))));
        }
    }

    fn release(self: &Arc<Self>) {
        let mut lifecycle = self.lifecycle();
        lifecycle.subscribers = lifecycle.subscribers.saturating_sub(1);
        if lifecycle.subscribers > 0 || !lifecycle.active {
            return;
        }

        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                let weak: Weak<Inner> = Arc::downgrade(self);
                let grace = self.grace_period;
                lifecycle.stop_task = Some(runtime.spawn(async move {
                    tokio::time::sleep(grace).await;
                    if let Some(inner) = weak.upgrade() {
                        inner.stop_if_idle();
                    }
                }));
            }
            Err(_) => {
                drop(lifecycle);
                self.stop_if_idle();
            }
        }
    }

    fn stop_if_idle(&self) {
        let mut lifecycle = self.lifecycle();
        if lifecycle.subscribers > 0 || !lifecycle.active {
            return;
        }
        lifecycle.active = false;
        lifecycle.stop_task = None;
        if let Some(load) = lifecycle.load_task.take() {
            if !load.is_finished() {
                tracing::info!("Cancelling in-flight coin list load");
                load.abort();
            }
        }
        drop(lifecycle);

        self.state.send_if_modified(|state| {
            let was_loading = state.is_loading;
            state.is_loading = false;
            was_loading
        });
        tracing::info!("Coin list upstream stopped");
    }
}

async fn load_coins(inner: Arc<Inner>) {
    inner.update(|state| CoinListState {
        is_loading: true,
        ..state.clone()
    });

    match inner.data_source.get_coins().await {
        Ok(coins) => {
            tracing::debug!(count = coins.len(), "Coins loaded");
            let coins: Vec<CoinUi> = coins.into_iter().map(CoinUi::from).collect();
            inner.update(|_| CoinListState {
                coins,
                is_loading: false,
            });
        }
        Err(error) => {
            tracing::warn!(?error, "Coin list load failed");
            inner.update(|state| CoinListState {
                is_loading: false,
                ..state.clone()
            });
            let _ = inner.event_tx.send(CoinListEvent::Error(error));
        }
    }
}

// ─── Public view-model ───────────────────────────────────────────────────────

/// View-model behind the coin list screen.
///
/// Subscribing spawns work on the current Tokio runtime, so
/// [`subscribe`](Self::subscribe) must be called from within one.
pub struct CoinListViewModel {
    inner: Arc<Inner>,
}

impl CoinListViewModel {
    pub fn new(data_source: Arc<dyn CoinDataSource>) -> Self {
        Self::with_grace_period(data_source, DEFAULT_GRACE_PERIOD)
    }

    pub fn with_grace_period(data_source: Arc<dyn CoinDataSource>, grace_period: Duration) -> Self {
        let (state, _) = watch::channel(CoinListState::default());
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            inner: Arc::new(Inner {
                data_source,
                state,
                event_tx,
                event_rx: tokio::sync::Mutex::new(event_rx),
                grace_period,
                lifecycle: Mutex::new(Lifecycle::default()),
            }),
        }
    }

    /// Start observing state. The first live subscription triggers a load.
    pub fn subscribe(&self) -> CoinListSubscription {
        let receiver = self.inner.state.subscribe();
        self.inner.acquire();
        CoinListSubscription {
            receiver,
            inner: Arc::clone(&self.inner),
        }
    }

    /// Snapshot of the current state without subscribing.
    pub fn state(&self) -> CoinListState {
        self.inner.state.borrow().clone()
    }

    /// One-shot events. Each event is yielded once, to whichever stream polls first.
    pub fn events(&self) -> Pin<Box<dyn Stream<Item = CoinListEvent> + Send + '_>> {
        Box::pin(futures_util::stream::unfold(
            &self.inner.event_rx,
            |rx| async move {
                let mut guard = rx.lock().await;
                guard.recv().await.map(|event| (event, rx))
            },
        ))
    }

    pub fn on_action(&self, action: CoinListAction) {
        match action {
            CoinListAction::OnCoinClick(coin) => {
                tracing::debug!(coin_id = %coin.id, "Coin selected");
            }
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.lifecycle().subscribers
    }
}

impl Drop for CoinListViewModel {
    fn drop(&mut self) {
        let mut lifecycle = self.inner.lifecycle();
        if let Some(handle) = lifecycle.load_task.take() {
            handle.abort();
        }
        if let Some(handle) = lifecycle.stop_task.take() {
            handle.abort();
        }
    }
}

// ─── Subscription ────────────────────────────────────────────────────────────

/// A live view of [`CoinListState`]. Dropping it counts as unsubscribing.
pub struct CoinListSubscription {
    receiver: watch::Receiver<CoinListState>,
    inner: Arc<Inner>,
}

impl CoinListSubscription {
    /// The latest state.
    pub fn current(&self) -> CoinListState {
        self.receiver.borrow().clone()
    }

    /// Wait for the next state change and return it.
    ///
    /// Returns `None` if the state channel has closed.
    pub async fn next(&mut self) -> Option<CoinListState> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }
}

impl Drop for CoinListSubscription {
    fn drop(&mut self) {
        self.inner.release();
    }
}
