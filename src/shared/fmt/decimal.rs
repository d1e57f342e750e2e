//! Decimal formatting utilities for human-readable display.
//!
//! Handles `rust_decimal::Decimal` values with a fixed number of fraction
//! digits and abbreviated suffixes (K/M/B/T).

use rust_decimal::prelude::*;
use std::sync::OnceLock;

static TRILLION: OnceLock<Decimal> = OnceLock::new();
static BILLION: OnceLock<Decimal> = OnceLock::new();
static MILLION: OnceLock<Decimal> = OnceLock::new();
static THOUSAND: OnceLock<Decimal> = OnceLock::new();

fn get_trillion() -> &'static Decimal {
    TRILLION.get_or_init(|| Decimal::from(1_000_000_000_000u64))
}

fn get_billion() -> &'static Decimal {
    BILLION.get_or_init(|| Decimal::from(1_000_000_000u64))
}

fn get_million() -> &'static Decimal {
    MILLION.get_or_init(|| Decimal::from(1_000_000u64))
}

fn get_thousand() -> &'static Decimal {
    THOUSAND.get_or_init(|| Decimal::from(1_000u64))
}

/// Format with exactly `decimals` fraction digits and thousands separators.
///
/// Rounds half away from zero: `1234.565` at 2 → `"1,234.57"`.
pub fn display_fixed(value: &Decimal, decimals: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let formatted = format!("{:.1$}", rounded, decimals as usize);
    let grouped = super::num::group_thousands(&formatted);
    if rounded.is_zero() {
        grouped.trim_start_matches('-').to_string()
    } else {
        grouped
    }
}

/// Abbreviate a `Decimal` with K/M/B/T suffixes.
pub fn abbr_number(amount: &Decimal, digits: Option<usize>, show_sign: Option<bool>) -> String {
    let digits = digits.unwrap_or(2);
    let show_sign = show_sign.unwrap_or(true);
    let sign = if show_sign && amount < &Decimal::ZERO {
        "-"
    } else {
        ""
    };
    let abs_amount = amount.abs();

    let (scaled, suffix) = if abs_amount >= *get_trillion() {
        (abs_amount / get_trillion(), "T")
    } else if abs_amount >= *get_billion() {
        (abs_amount / get_billion(), "B")
    } else if abs_amount >= *get_million() {
        (abs_amount / get_million(), "M")
    } else if abs_amount >= *get_thousand() {
        (abs_amount / get_thousand(), "K")
    } else {
        (abs_amount, "")
    };

    format!("{}{:.precision$}{}", sign, scaled, suffix, precision = digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_display_fixed_two_decimals() {
        assert_eq!(display_fixed(&dec("0"), 2), "0.00");
        assert_eq!(display_fixed(&dec("1"), 2), "1.00");
        assert_eq!(display_fixed(&dec("6931.5058"), 2), "6,931.51");
        assert_eq!(display_fixed(&dec("1234.565"), 2), "1,234.57");
        assert_eq!(display_fixed(&dec("119150835874.4699281625807300"), 2), "119,150,835,874.47");
    }

    #[test]
    fn test_display_fixed_negative() {
        assert_eq!(display_fixed(&dec("-0.8101"), 2), "-0.81");
        assert_eq!(display_fixed(&dec("-1234.5"), 2), "-1,234.50");
        assert_eq!(display_fixed(&dec("-0.001"), 2), "0.00");
    }

    #[test]
    fn test_abbr_number_below_thousand() {
        assert_eq!(abbr_number(&dec("0"), None, None), "0.00");
        assert_eq!(abbr_number(&dec("999"), None, None), "999.00");
    }

    #[test]
    fn test_abbr_number_suffixes() {
        assert_eq!(abbr_number(&dec("1500"), None, None), "1.50K");
        assert_eq!(abbr_number(&dec("1500000"), None, None), "1.50M");
        assert_eq!(abbr_number(&dec("119150835874"), None, None), "119.15B");
        assert_eq!(abbr_number(&dec("1200000000000"), Some(1), None), "1.2T");
    }

    #[test]
    fn test_abbr_number_negative() {
        assert_eq!(abbr_number(&dec("-1500000"), None, None), "-1.50M");
        assert_eq!(abbr_number(&dec("-1500000"), None, Some(false)), "1.50M");
    }
}
