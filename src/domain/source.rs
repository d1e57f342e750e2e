//! The data-source seam between the view-models and the network.
//!
//! `CoinCapClient` is the remote implementation; tests and hosts can supply
//! their own (fixtures, caches) without touching the presentation layer.

use crate::domain::coin::Coin;
use crate::domain::price_history::CoinPrice;
use crate::error::NetworkError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Read-only access to coins and their price history.
///
/// Implementations perform no retries: a failure is reported once, as-is.
#[async_trait]
pub trait CoinDataSource: Send + Sync {
    /// All listed coins, in rank order as delivered by the source.
    async fn get_coins(&self) -> Result<Vec<Coin>, NetworkError>;

    /// Price samples for `coin_id` between `start` and `end`, sampled every six hours.
    async fn get_coin_history(
        &self,
        coin_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CoinPrice>, NetworkError>;
}
