//! Wire types for `/assets/{id}/history`.

use crate::shared::serde_util;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single history sample from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinPriceDto {
    #[serde(deserialize_with = "serde_util::decimal")]
    pub price_usd: Decimal,
    /// Unix timestamp in milliseconds on the wire.
    #[serde(with = "serde_util::timestamp_ms")]
    pub time: DateTime<Utc>,
}

/// REST envelope for the history endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinHistoryResponse {
    pub data: Vec<CoinPriceDto>,
}
