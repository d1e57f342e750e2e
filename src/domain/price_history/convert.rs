//! Conversion: CoinPriceDto → CoinPrice.

use super::wire::CoinPriceDto;
use super::CoinPrice;

impl From<CoinPriceDto> for CoinPrice {
    fn from(dto: CoinPriceDto) -> Self {
        Self {
            price_usd: dto.price_usd,
            date_time: dto.time,
        }
    }
}
