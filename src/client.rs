//! High-level client — `CoinCapClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the accessor methods, and the
//! [`CoinDataSource`] implementation the view-models consume.

use crate::domain::coin::client::Coins;
use crate::domain::coin::Coin;
use crate::domain::price_history::client::PriceHistory;
use crate::domain::price_history::CoinPrice;
use crate::domain::source::CoinDataSource;
use crate::error::{ClientError, NetworkError};
use crate::http::{CoinCapHttp, HttpConfig};
use crate::shared::Interval;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::coin::client::Coins as CoinsClient;
pub use crate::domain::price_history::client::PriceHistory as PriceHistoryClient;

/// The primary entry point for talking to CoinCap.
///
/// Provides nested sub-client accessors for each domain:
/// `client.coins()`, `client.price_history()`.
#[derive(Clone)]
pub struct CoinCapClient {
    pub(crate) http: CoinCapHttp,
    /// Interval used by [`CoinDataSource::get_coin_history`].
    pub(crate) history_interval: Interval,
}

impl CoinCapClient {
    pub fn builder() -> CoinCapClientBuilder {
        CoinCapClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }

    pub fn price_history(&self) -> PriceHistory<'_> {
        PriceHistory { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

#[async_trait]
impl CoinDataSource for CoinCapClient {
    async fn get_coins(&self) -> Result<Vec<Coin>, NetworkError> {
        self.coins().list().await
    }

    async fn get_coin_history(
        &self,
        coin_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<CoinPrice>, NetworkError> {
        self.price_history()
            .get(coin_id, self.history_interval, &start, &end)
            .await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinCapClientBuilder {
    base_url: String,
    http_config: HttpConfig,
    history_interval: Interval,
}

impl Default for CoinCapClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            http_config: HttpConfig::default(),
            history_interval: Interval::Hour6,
        }
    }
}

impl CoinCapClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.http_config.request_timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.http_config.connect_timeout = timeout;
        self
    }

    pub fn pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.http_config.pool_max_idle_per_host = max;
        self
    }

    /// Override the sampling interval of the data-source history call.
    pub fn history_interval(mut self, interval: Interval) -> Self {
        self.history_interval = interval;
        self
    }

    pub fn build(self) -> Result<CoinCapClient, ClientError> {
        Ok(CoinCapClient {
            http: CoinCapHttp::new(&self.base_url, &self.http_config)?,
            history_interval: self.history_interval,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = CoinCapClient::builder().build().unwrap();
        assert_eq!(client.base_url(), crate::network::DEFAULT_API_URL);
        assert_eq!(client.history_interval, Interval::Hour6);
    }

    #[test]
    fn test_builder_overrides() {
        let client = CoinCapClient::builder()
            .base_url("http://127.0.0.1:9000/v2/")
            .request_timeout(Duration::from_secs(1))
            .history_interval(Interval::Day1)
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9000/v2");
        assert_eq!(client.history_interval, Interval::Day1);
    }

    #[test]
    fn test_builder_invalid_url() {
        let result = CoinCapClient::builder().base_url("not a url").build();
        assert!(matches!(result, Err(ClientError::InvalidBaseUrl(_))));
    }
}
