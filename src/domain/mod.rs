//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types, as the rest of the app sees them
//! - `wire.rs` — Raw serde structs matching CoinCap responses
//! - `convert.rs` — `From` conversions from wire to domain
//! - `client.rs` — Sub-client with HTTP methods
//!
//! `source` ties the slices together behind the `CoinDataSource` trait.

pub mod coin;
pub mod price_history;
pub mod source;
