//! Coin list screen: state, inbound actions, one-shot events and the view-model.

pub mod view_model;

use crate::error::NetworkError;
use crate::presentation::models::CoinUi;

pub use view_model::{CoinListSubscription, CoinListViewModel, DEFAULT_GRACE_PERIOD};

/// Everything the list screen renders.
///
/// Replaced wholesale on every update; `coins` is always the full set from the
/// most recent successful load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoinListState {
    pub coins: Vec<CoinUi>,
    pub is_loading: bool,
}

/// Commands the UI sends to the view-model.
#[derive(Debug, Clone, PartialEq)]
pub enum CoinListAction {
    OnCoinClick(CoinUi),
}

/// Notifications delivered to the UI exactly once and never kept in state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinListEvent {
    Error(NetworkError),
}
