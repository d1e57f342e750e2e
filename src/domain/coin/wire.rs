//! Wire types for the `/assets` listing.

use crate::shared::serde_util;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single asset as CoinCap sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinDto {
    pub id: String,
    #[serde(deserialize_with = "serde_util::u32_from_str_or_num")]
    pub rank: u32,
    pub name: String,
    pub symbol: String,
    #[serde(default, deserialize_with = "serde_util::opt_decimal")]
    pub market_cap_usd: Option<Decimal>,
    #[serde(deserialize_with = "serde_util::decimal")]
    pub price_usd: Decimal,
    #[serde(default, deserialize_with = "serde_util::opt_decimal")]
    pub change_percent_24hr: Option<Decimal>,
}

/// REST envelope for the assets list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinsResponse {
    pub data: Vec<CoinDto>,
}
