//! Unified error types.

use thiserror::Error;

/// Every remote failure the core can report.
///
/// All transport, status and decode failures are funneled into one of these
/// kinds by [`crate::http::safe_call`]; nothing else crosses the network
/// boundary.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkError {
    #[error("The request timed out")]
    RequestTimeout,

    #[error("Oops, it seems like your quota is exceeded")]
    TooManyRequests,

    #[error("Couldn't reach server, please check your internet connection")]
    NoInternet,

    #[error("Something went wrong on the server")]
    ServerError,

    #[error("Couldn't read the server response")]
    Serialization,

    #[error("Oops, something went wrong")]
    Unknown,
}

impl NetworkError {
    /// Classify a non-success HTTP status.
    ///
    /// Statuses the core has no dedicated kind for map to [`NetworkError::Unknown`].
    pub fn from_status(status: u16) -> Self {
        match status {
            408 => NetworkError::RequestTimeout,
            429 => NetworkError::TooManyRequests,
            500..=599 => NetworkError::ServerError,
            _ => NetworkError::Unknown,
        }
    }
}

/// Client construction errors.
#[derive(Error, Debug)]
pub enum ClientError {
    #[cfg(feature = "http")]
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}
