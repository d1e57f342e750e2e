//! HTTP client layer — `CoinCapHttp` and the error-classifying `safe_call` wrapper.

pub mod client;

pub use client::{classify_transport_error, safe_call, CoinCapHttp, HttpConfig};
