//! Human-readable number formatting.
//!
//! - `num` — `f32`/`f64` values (chart labels)
//! - `decimal` — `rust_decimal::Decimal` values (prices, market caps, percentages)

pub mod decimal;
pub mod num;

pub use num::group_thousands;
