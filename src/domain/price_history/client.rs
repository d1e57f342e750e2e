//! Price history sub-client — per-asset history queries.

use crate::client::CoinCapClient;
use crate::domain::price_history::wire::CoinHistoryResponse;
use crate::domain::price_history::CoinPrice;
use crate::error::NetworkError;
use crate::shared::{Interval, ResultExt};
use chrono::{DateTime, TimeZone, Utc};

/// Sub-client for price history operations.
pub struct PriceHistory<'a> {
    pub(crate) client: &'a CoinCapClient,
}

impl<'a> PriceHistory<'a> {
    /// `GET /assets/{coin_id}/history` for `[start, end]`.
    ///
    /// Both bounds are normalized to UTC epoch millis before they go on the wire,
    /// so callers may pass timestamps in any zone.
    pub async fn get<Tz: TimeZone>(
        &self,
        coin_id: &str,
        interval: Interval,
        start: &DateTime<Tz>,
        end: &DateTime<Tz>,
    ) -> Result<Vec<CoinPrice>, NetworkError> {
        let start_ms = start.with_timezone(&Utc).timestamp_millis();
        let end_ms = end.with_timezone(&Utc).timestamp_millis();

        let resp: CoinHistoryResponse = self
            .client
            .http
            .get_asset_history(coin_id, interval, start_ms, end_ms)
            .await
            .on_success(|resp| {
                tracing::debug!(coin_id, samples = resp.data.len(), "Price history fetched")
            })?;

        Ok(resp.data.into_iter().map(CoinPrice::from).collect())
    }
}
