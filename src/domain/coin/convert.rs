//! Conversion: CoinDto → Coin.

use super::wire::CoinDto;
use super::Coin;
use rust_decimal::Decimal;

impl From<CoinDto> for Coin {
    fn from(dto: CoinDto) -> Self {
        Self {
            id: dto.id,
            rank: dto.rank,
            name: dto.name,
            symbol: dto.symbol,
            market_cap_usd: dto.market_cap_usd.unwrap_or(Decimal::ZERO),
            price_usd: dto.price_usd,
            change_percent_24hr: dto.change_percent_24hr.unwrap_or(Decimal::ZERO),
        }
    }
}
