//! Coin domain — ranked crypto assets from the `/assets` listing.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A crypto asset as listed by CoinCap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: String,
    pub rank: u32,
    pub name: String,
    pub symbol: String,
    pub market_cap_usd: Decimal,
    pub price_usd: Decimal,
    pub change_percent_24hr: Decimal,
}
