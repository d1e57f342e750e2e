//! Low-level HTTP client — `CoinCapHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens in the sub-clients). Every request goes through [`safe_call`], which
//! is the only place transport and status failures become [`NetworkError`]s.

use crate::domain::coin::wire::CoinsResponse;
use crate::domain::price_history::wire::CoinHistoryResponse;
use crate::error::{ClientError, NetworkError};
use crate::network::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_POOL_MAX_IDLE_PER_HOST, DEFAULT_REQUEST_TIMEOUT,
};
use crate::shared::Interval;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;

/// Transport settings for [`CoinCapHttp`].
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Total time allowed for one request, body included.
    pub request_timeout: Duration,
    /// Time allowed to establish the TCP/TLS connection.
    pub connect_timeout: Duration,
    pub pool_max_idle_per_host: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            pool_max_idle_per_host: DEFAULT_POOL_MAX_IDLE_PER_HOST,
        }
    }
}

/// Low-level HTTP client for the CoinCap REST API.
#[derive(Clone)]
pub struct CoinCapHttp {
    base_url: String,
    client: Client,
}

impl CoinCapHttp {
    pub fn new(base_url: &str, config: &HttpConfig) -> Result<Self, ClientError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .build()?;

        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` onto the base URL. Absolute URLs pass through untouched.
    pub fn construct_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    // ── Assets ───────────────────────────────────────────────────────────

    pub async fn get_assets(&self) -> Result<CoinsResponse, NetworkError> {
        let url = self.construct_url("/assets");
        self.get(&url).await
    }

    pub async fn get_asset_history(
        &self,
        coin_id: &str,
        interval: Interval,
        start_ms: i64,
        end_ms: i64,
    ) -> Result<CoinHistoryResponse, NetworkError> {
        let url = format!(
            "{}?interval={}&start={}&end={}",
            self.construct_url(&format!("/assets/{}/history", urlencoding::encode(coin_id))),
            interval.as_str(),
            start_ms,
            end_ms
        );
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, NetworkError> {
        tracing::debug!(url, "GET");
        safe_call(|| self.client.get(url).send()).await
    }
}

/// Run `call` and turn everything that can go wrong into a [`NetworkError`].
///
/// On a 2xx status the body is decoded into `T`; any other status, transport
/// failure or decode failure is classified and logged.
pub async fn safe_call<T, F, Fut>(call: F) -> Result<T, NetworkError>
where
    T: DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Response, reqwest::Error>>,
{
    let response = match call().await {
        Ok(response) => response,
        Err(e) => {
            let kind = classify_transport_error(&e);
            tracing::warn!(error = %e, ?kind, "Request failed");
            return Err(kind);
        }
    };
    response_to_result(response).await
}

async fn response_to_result<T: DeserializeOwned>(response: Response) -> Result<T, NetworkError> {
    let status = response.status();

    if !status.is_success() {
        let kind = NetworkError::from_status(status.as_u16());
        tracing::warn!(status = status.as_u16(), url = %response.url(), ?kind, "Unsuccessful response");
        return Err(kind);
    }

    let body = response.bytes().await.map_err(|e| {
        let kind = classify_transport_error(&e);
        tracing::warn!(error = %e, ?kind, "Failed to read response body");
        kind
    })?;

    serde_json::from_slice::<T>(&body).map_err(|e| {
        tracing::warn!(error = %e, "Failed to decode response body");
        NetworkError::Serialization
    })
}

/// Classify a `reqwest` failure.
///
/// Timeouts win over connectivity, so a connect timeout is a timeout.
pub fn classify_transport_error(err: &reqwest::Error) -> NetworkError {
    if err.is_timeout() {
        NetworkError::RequestTimeout
    } else if err.is_connect() {
        NetworkError::NoInternet
    } else if err.is_decode() {
        NetworkError::Serialization
    } else if let Some(status) = err.status() {
        NetworkError::from_status(status.as_u16())
    } else {
        NetworkError::Unknown
    }
}
