//! Shared types and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format CoinCap sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;
pub mod result;
pub mod serde_util;

pub use result::ResultExt;

use serde::{Deserialize, Serialize};

// ─── Interval ────────────────────────────────────────────────────────────────

/// Price history sampling interval, as accepted by `/assets/{id}/history`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "m1")]
    Minute1,
    #[serde(rename = "m5")]
    Minute5,
    #[serde(rename = "m15")]
    Minute15,
    #[serde(rename = "m30")]
    Minute30,
    #[serde(rename = "h1")]
    Hour1,
    #[serde(rename = "h2")]
    Hour2,
    #[default]
    #[serde(rename = "h6")]
    Hour6,
    #[serde(rename = "h12")]
    Hour12,
    #[serde(rename = "d1")]
    Day1,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute1 => "m1",
            Self::Minute5 => "m5",
            Self::Minute15 => "m15",
            Self::Minute30 => "m30",
            Self::Hour1 => "h1",
            Self::Hour2 => "h2",
            Self::Hour6 => "h6",
            Self::Hour12 => "h12",
            Self::Day1 => "d1",
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_default_is_h6() {
        assert_eq!(Interval::default(), Interval::Hour6);
        assert_eq!(Interval::default().as_str(), "h6");
    }

    #[test]
    fn test_interval_serde() {
        let i: Interval = serde_json::from_str("\"h12\"").unwrap();
        assert_eq!(i, Interval::Hour12);
        assert_eq!(serde_json::to_string(&Interval::Minute15).unwrap(), "\"m15\"");
    }
}
