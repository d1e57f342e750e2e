//! Float formatting for chart labels.
//!
//! For `Decimal` formatting, use the `decimal` sibling module.

/// Inserts `,` thousands separators into a plain decimal string.
///
/// Accepts an optional leading `-` and an optional fractional part, which is
/// left untouched: `"-1234567.891"` → `"-1,234,567.891"`.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Trims trailing fractional zeros (and a dangling `.`), then groups thousands.
pub fn display_formatted_string(formatted: String) -> String {
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };
    let grouped = group_thousands(trimmed);
    // "-0" after rounding a tiny negative reads as noise
    if grouped == "-0" {
        "0".to_string()
    } else {
        grouped
    }
}

/// Format with at most `max_decimals` fraction digits, trailing zeros trimmed.
pub fn display_with_max_decimals(amount: f64, max_decimals: usize) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    display_formatted_string(format!("{:.1$}", amount, max_decimals))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("123456"), "123,456");
        assert_eq!(group_thousands("1234567.891"), "1,234,567.891");
        assert_eq!(group_thousands("-1234.5"), "-1,234.5");
        assert_eq!(group_thousands("-123"), "-123");
    }

    #[test]
    fn test_display_formatted_string_trailing_zeros_trimmed() {
        assert_eq!(display_formatted_string("1.00".to_string()), "1");
        assert_eq!(display_formatted_string("1.50".to_string()), "1.5");
        assert_eq!(display_formatted_string("1000.00".to_string()), "1,000");
        assert_eq!(display_formatted_string("100".to_string()), "100");
    }

    #[test]
    fn test_display_formatted_string_negative_zero() {
        assert_eq!(display_formatted_string("-0.000".to_string()), "0");
    }

    #[test]
    fn test_display_with_max_decimals() {
        assert_eq!(display_with_max_decimals(1234.567, 0), "1,235");
        assert_eq!(display_with_max_decimals(15.456, 2), "15.46");
        assert_eq!(display_with_max_decimals(1.5, 3), "1.5");
        assert_eq!(display_with_max_decimals(0.1234, 3), "0.123");
        assert_eq!(display_with_max_decimals(-1234567.0, 2), "-1,234,567");
    }
}
