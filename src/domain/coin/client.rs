//! Coins sub-client — asset listing.

use crate::client::CoinCapClient;
use crate::domain::coin::wire::CoinsResponse;
use crate::domain::coin::Coin;
use crate::error::NetworkError;
use crate::shared::ResultExt;

pub struct Coins<'a> {
    pub(crate) client: &'a CoinCapClient,
}

impl<'a> Coins<'a> {
    /// `GET /assets`, mapped to domain coins in source order.
    pub async fn list(&self) -> Result<Vec<Coin>, NetworkError> {
        let resp: CoinsResponse = self
            .client
            .http
            .get_assets()
            .await
            .on_success(|resp| tracing::debug!(count = resp.data.len(), "Assets fetched"))?;
        Ok(resp.data.into_iter().map(Coin::from).collect())
    }
}
