//! Presentation-formatted projections of domain types.

use crate::domain::coin::Coin;
use crate::shared::fmt::decimal;
use rust_decimal::Decimal;

/// A number paired with its display string.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayableNumber {
    pub value: Decimal,
    /// Two fraction digits, thousands grouped: `"1,234.57"`.
    pub formatted: String,
}

impl From<Decimal> for DisplayableNumber {
    fn from(value: Decimal) -> Self {
        Self {
            formatted: decimal::display_fixed(&value, 2),
            value,
        }
    }
}

/// A coin ready for a list row.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinUi {
    pub id: String,
    pub rank: u32,
    pub name: String,
    pub symbol: String,
    pub market_cap_usd: DisplayableNumber,
    pub price_usd: DisplayableNumber,
    pub change_percent_24hr: DisplayableNumber,
    /// Icon asset key, see [`coin_icon`].
    pub icon: &'static str,
}

impl CoinUi {
    /// `"$ 6,929.82"`
    pub fn price_label(&self) -> String {
        format!("$ {}", self.price_usd.formatted)
    }

    /// `"$ 119.15B"`
    pub fn market_cap_label(&self) -> String {
        format!("$ {}", decimal::abbr_number(&self.market_cap_usd.value, None, None))
    }

    /// `"+1.23 %"` / `"-0.81 %"`
    pub fn change_label(&self) -> String {
        if self.is_change_positive() {
            format!("+{} %", self.change_percent_24hr.formatted)
        } else {
            format!("{} %", self.change_percent_24hr.formatted)
        }
    }

    pub fn is_change_positive(&self) -> bool {
        self.change_percent_24hr.value > Decimal::ZERO
    }
}

impl From<Coin> for CoinUi {
    fn from(coin: Coin) -> Self {
        Self {
            icon: coin_icon(&coin.symbol),
            id: coin.id,
            rank: coin.rank,
            name: coin.name,
            symbol: coin.symbol,
            market_cap_usd: coin.market_cap_usd.into(),
            price_usd: coin.price_usd.into(),
            change_percent_24hr: coin.change_percent_24hr.into(),
        }
    }
}

/// Icon asset key for a ticker symbol; `"unknown"` when no icon ships for it.
pub fn coin_icon(symbol: &str) -> &'static str {
    match symbol.to_ascii_uppercase().as_str() {
        "BTC" => "btc",
        "ETH" => "eth",
        "USDT" => "usdt",
        "BNB" => "bnb",
        "SOL" => "sol",
        "USDC" => "usdc",
        "XRP" => "xrp",
        "DOGE" => "doge",
        "TON" => "ton",
        "ADA" => "ada",
        "TRX" => "trx",
        "AVAX" => "avax",
        "SHIB" => "shib",
        "DOT" => "dot",
        "LINK" => "link",
        "BCH" => "bch",
        "LTC" => "ltc",
        "MATIC" => "matic",
        "XLM" => "xlm",
        "XMR" => "xmr",
        "ETC" => "etc",
        "UNI" => "uni",
        "ATOM" => "atom",
        "FIL" => "fil",
        "NEAR" => "near",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn btc() -> Coin {
        Coin {
            id: "bitcoin".to_string(),
            rank: 1,
            name: "Bitcoin".to_string(),
            symbol: "BTC".to_string(),
            market_cap_usd: Decimal::from_str("119150835874.4699281625807300").unwrap(),
            price_usd: Decimal::from_str("6929.8217756835584756").unwrap(),
            change_percent_24hr: Decimal::from_str("-0.8101417214350335").unwrap(),
        }
    }

    #[test]
    fn test_coin_ui_projection() {
        let ui: CoinUi = btc().into();
        assert_eq!(ui.id, "bitcoin");
        assert_eq!(ui.rank, 1);
        assert_eq!(ui.icon, "btc");
        assert_eq!(ui.price_usd.formatted, "6,929.82");
        assert_eq!(ui.market_cap_usd.formatted, "119,150,835,874.47");
        assert_eq!(ui.change_percent_24hr.formatted, "-0.81");
        assert_eq!(ui.price_usd.value, btc().price_usd);
    }

    #[test]
    fn test_labels() {
        let ui: CoinUi = btc().into();
        assert_eq!(ui.price_label(), "$ 6,929.82");
        assert_eq!(ui.market_cap_label(), "$ 119.15B");
        assert_eq!(ui.change_label(), "-0.81 %");
        assert!(!ui.is_change_positive());

        let up = CoinUi::from(Coin {
            change_percent_24hr: Decimal::from_str("1.234").unwrap(),
            ..btc()
        });
        assert_eq!(up.change_label(), "+1.23 %");
    }

    #[test]
    fn test_coin_icon_fallback() {
        assert_eq!(coin_icon("eth"), "eth");
        assert_eq!(coin_icon("NOPE"), "unknown");
    }
}
