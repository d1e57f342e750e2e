//! Custom serde helpers for CoinCap wire formats.
//!
//! CoinCap encodes every numeric field as a JSON string (`"rank": "1"`,
//! `"priceUsd": "6931.5058"`), but mirrors and fixtures often send plain
//! numbers. These helpers accept both.

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum StrOrNum {
    Str(String),
    Num(serde_json::Number),
}

impl StrOrNum {
    fn into_decimal<E: serde::de::Error>(self) -> Result<Decimal, E> {
        let raw = match self {
            StrOrNum::Str(s) => s,
            StrOrNum::Num(n) => n.to_string(),
        };
        let trimmed = raw.trim();
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|e| E::custom(format!("Invalid decimal {:?}: {}", raw, e)))
    }
}

/// Deserializes a required decimal from a string or a number.
pub fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    StrOrNum::deserialize(deserializer)?.into_decimal()
}

/// Deserializes a nullable decimal from a string or a number.
///
/// Pair with `#[serde(default)]` so a missing field also becomes `None`.
pub fn opt_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StrOrNum>::deserialize(deserializer)? {
        Some(v) => v.into_decimal().map(Some),
        None => Ok(None),
    }
}

/// Deserializes a `u32` from a string or a number.
pub fn u32_from_str_or_num<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match StrOrNum::deserialize(deserializer)? {
        StrOrNum::Str(s) => s
            .trim()
            .parse::<u32>()
            .map_err(|e| D::Error::custom(format!("Invalid integer {:?}: {}", s, e))),
        StrOrNum::Num(n) => n
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| D::Error::custom(format!("Invalid integer: {}", n))),
    }
}

/// Epoch-millisecond timestamps, as a string or a number.
///
/// Values chrono cannot represent are rejected rather than clamped.
pub mod timestamp_ms {
    use super::StrOrNum;
    use chrono::{DateTime, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(value.timestamp_millis())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = match StrOrNum::deserialize(deserializer)? {
            StrOrNum::Str(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|e| D::Error::custom(format!("Invalid timestamp {:?}: {}", s, e)))?,
            StrOrNum::Num(n) => n
                .as_i64()
                .ok_or_else(|| D::Error::custom(format!("Invalid timestamp: {}", n)))?,
        };
        DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or_else(|| D::Error::custom(format!("Timestamp out of range: {}", millis)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "decimal")]
        price: Decimal,
        #[serde(default, deserialize_with = "opt_decimal")]
        change: Option<Decimal>,
        #[serde(deserialize_with = "u32_from_str_or_num")]
        rank: u32,
        #[serde(deserialize_with = "timestamp_ms::deserialize")]
        time: DateTime<Utc>,
    }

    #[test]
    fn test_accepts_strings() {
        let p: Sample = serde_json::from_str(
            r#"{"price":"6931.5058","change":"-0.81","rank":"1","time":"1530403200000"}"#,
        )
        .unwrap();
        assert_eq!(p.price, Decimal::from_str("6931.5058").unwrap());
        assert_eq!(p.change, Some(Decimal::from_str("-0.81").unwrap()));
        assert_eq!(p.rank, 1);
        assert_eq!(p.time, Utc.with_ymd_and_hms(2018, 7, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_accepts_numbers() {
        let p: Sample =
            serde_json::from_str(r#"{"price":6931.5,"change":2,"rank":3,"time":1530403200000}"#)
                .unwrap();
        assert_eq!(p.price, Decimal::from_str("6931.5").unwrap());
        assert_eq!(p.change, Some(Decimal::from(2)));
        assert_eq!(p.rank, 3);
    }

    #[test]
    fn test_null_and_missing_optional() {
        let p: Sample =
            serde_json::from_str(r#"{"price":"1","change":null,"rank":1,"time":0}"#).unwrap();
        assert_eq!(p.change, None);
        let p: Sample = serde_json::from_str(r#"{"price":"1","rank":1,"time":0}"#).unwrap();
        assert_eq!(p.change, None);
    }

    #[test]
    fn test_scientific_notation() {
        let p: Sample =
            serde_json::from_str(r#"{"price":"1.5e-7","rank":1,"time":0}"#).unwrap();
        assert_eq!(p.price, Decimal::from_str("0.00000015").unwrap());
    }

    #[test]
    fn test_rejects_garbage() {
        let r: Result<Sample, _> =
            serde_json::from_str(r#"{"price":"abc","rank":1,"time":0}"#);
        assert!(r.is_err());
        let r: Result<Sample, _> = serde_json::from_str(r#"{"price":"1","rank":-1,"time":0}"#);
        assert!(r.is_err());
    }

    #[test]
    fn test_timestamp_out_of_range_rejected() {
        let r: Result<Sample, _> =
            serde_json::from_str(r#"{"price":"1","rank":1,"time":9999999999999999}"#);
        assert!(r.is_err());
        let r: Result<Sample, _> =
            serde_json::from_str(r#"{"price":"1","rank":1,"time":"9999999999999999"}"#);
        assert!(r.is_err());
    }

    #[test]
    fn test_timestamp_serializes_as_millis() {
        #[derive(serde::Serialize)]
        struct Out {
            #[serde(with = "timestamp_ms")]
            time: DateTime<Utc>,
        }
        let time = Utc.with_ymd_and_hms(2018, 7, 1, 0, 0, 0).unwrap();
        assert_eq!(
            serde_json::to_string(&Out { time }).unwrap(),
            r#"{"time":1530403200000}"#
        );
    }
}
