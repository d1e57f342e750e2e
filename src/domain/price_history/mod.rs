//! Price history domain — per-asset price samples over a time window.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One price sample, timestamped in UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinPrice {
    pub price_usd: Decimal,
    pub date_time: DateTime<Utc>,
}
