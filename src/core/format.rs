//! Presentation formatters
//!
//! Pure transforms from quote values to the exact display strings the
//! identity store receives. Rounding is fixed to round-half-up
//! (`MidpointAwayFromZero`) so the same input always yields the same
//! string.

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency-format a price for the display name.
///
/// Leading `$`, thousands separators, exactly two fraction digits:
/// `1234.5` → `"$1,234.50"`, `67890.125` → `"$67,890.13"`.
pub fn format_name(price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded);

    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (text, "00".to_string()),
    };

    format!("${}.{}", group_thousands(&int_part), frac_part)
}

/// Format a 24h percent change for the status line.
///
/// Two fraction digits, explicit `+` for non-negative values (zero
/// included), inherent minus for negatives, then the symbol label:
/// `(3.256, "BTCUSD")` → `"+3.26% BTCUSD"`.
pub fn format_status(percent_change: Decimal, display_symbol: &str) -> String {
    let mut rounded =
        percent_change.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    // A negative value that rounds to zero must not print as "-0.00"
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }

    if rounded >= Decimal::ZERO {
        format!("+{:.2}% {}", rounded, display_symbol)
    } else {
        format!("{:.2}% {}", rounded, display_symbol)
    }
}

/// Insert a comma every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_name_basic() {
        assert_eq!(format_name(dec("1234.5")), "$1,234.50");
        assert_eq!(format_name(dec("0")), "$0.00");
        assert_eq!(format_name(dec("999.999")), "$1,000.00");
    }

    #[test]
    fn test_format_name_round_half_up() {
        assert_eq!(format_name(dec("67890.125")), "$67,890.13");
        assert_eq!(format_name(dec("67890.124")), "$67,890.12");
    }

    #[test]
    fn test_format_name_grouping() {
        assert_eq!(format_name(dec("1")), "$1.00");
        assert_eq!(format_name(dec("12")), "$12.00");
        assert_eq!(format_name(dec("123")), "$123.00");
        assert_eq!(format_name(dec("1234")), "$1,234.00");
        assert_eq!(format_name(dec("1234567.89")), "$1,234,567.89");
        assert_eq!(format_name(dec("1000000000")), "$1,000,000,000.00");
    }

    #[test]
    fn test_format_name_deterministic() {
        let price = dec("42013.37");
        assert_eq!(format_name(price), format_name(price));
    }

    #[test]
    fn test_format_status_positive_has_plus() {
        assert_eq!(format_status(dec("3.256"), "BTCUSD"), "+3.26% BTCUSD");
        assert_eq!(format_status(dec("0.004"), "BTCUSD"), "+0.00% BTCUSD");
    }

    #[test]
    fn test_format_status_zero_has_plus() {
        assert_eq!(format_status(dec("0"), "BTCUSD"), "+0.00% BTCUSD");
    }

    #[test]
    fn test_format_status_negative_bare_minus() {
        assert_eq!(format_status(dec("-2.5"), "BTCUSD"), "-2.50% BTCUSD");
        assert_eq!(format_status(dec("-0.005"), "ETHUSD"), "-0.01% ETHUSD");
    }

    #[test]
    fn test_format_status_negative_rounding_to_zero() {
        // -0.001 rounds to zero; zero is non-negative, so it gets the plus
        assert_eq!(format_status(dec("-0.001"), "BTCUSD"), "+0.00% BTCUSD");
    }

    #[test]
    fn test_format_status_symbol_suffix() {
        assert_eq!(format_status(dec("1.5"), "SOL/USD"), "+1.50% SOL/USD");
    }
}
