//! # Crypto Tracker Core
//!
//! Headless core of a crypto price tracker backed by the CoinCap REST API.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Result helpers, formatting, domain models and the `CoinDataSource` seam
//! 2. **HTTP API** — `CoinCapHttp` and `safe_call`, which folds every failure into a `NetworkError`
//! 3. **High-Level Client** — `CoinCapClient` with nested sub-clients
//! 4. **Presentation** — UI models, the coin list view-model and the line chart layout
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use crypto_tracker::prelude::*;
//! use std::sync::Arc;
//!
//! let client = Arc::new(CoinCapClient::builder().build()?);
//! let view_model = CoinListViewModel::new(client);
//!
//! let mut subscription = view_model.subscribe();
//! while let Some(state) = subscription.next().await {
//!     if !state.is_loading {
//!         break;
//!     }
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Result helpers, formatting and serde utilities.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Error types.
pub mod error;

/// Network URL and timeout constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client and the `safe_call` wrapper.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CoinCapClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: Presentation ────────────────────────────────────────────────────

/// UI models, view-models and chart layout.
pub mod presentation;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared
    pub use crate::shared::{Interval, ResultExt};

    // Domain types
    pub use crate::domain::coin::Coin;
    pub use crate::domain::price_history::CoinPrice;
    pub use crate::domain::source::CoinDataSource;

    // Errors
    pub use crate::error::{ClientError, NetworkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{CoinCapClient, CoinCapClientBuilder, CoinsClient, PriceHistoryClient};
    #[cfg(feature = "http")]
    pub use crate::http::{safe_call, HttpConfig};

    // Presentation
    pub use crate::presentation::chart::{
        ChartFrame, ChartStyle, DataPoint, LineChart, MonospaceMeasurer, TextMeasurer,
    };
    pub use crate::presentation::coin_list::{
        CoinListAction, CoinListEvent, CoinListState, CoinListSubscription, CoinListViewModel,
    };
    pub use crate::presentation::models::{CoinUi, DisplayableNumber};
}
