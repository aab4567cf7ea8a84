//! Monetary types for rate and amount representation.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Interest rate as a percentage (3.8 means 3.8% APY).
pub type Rate = Decimal;

/// Token amount represented as a Decimal for precision.
pub type Amount = Decimal;

/// Parse user-entered text as a decimal number.
///
/// Accepts plain and scientific notation with surrounding whitespace.
/// Returns `None` for anything that is not a finite number.
#[must_use]
pub fn parse_decimal(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Parse user-entered text as a strictly positive amount.
#[must_use]
pub fn parse_positive_amount(input: &str) -> Option<Amount> {
    parse_decimal(input).filter(|amount| *amount > Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_plain_and_padded_numbers() {
        assert_eq!(parse_decimal("100"), Some(dec!(100)));
        assert_eq!(parse_decimal("  12.50 "), Some(dec!(12.50)));
        assert_eq!(parse_decimal("1e3"), Some(dec!(1000)));
    }

    #[test]
    fn rejects_non_numeric_text() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("   "), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("12abc"), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("inf"), None);
    }

    #[test]
    fn positive_amount_rejects_zero_and_negative() {
        assert_eq!(parse_positive_amount("0"), None);
        assert_eq!(parse_positive_amount("-5"), None);
        assert_eq!(parse_positive_amount("0.01"), Some(dec!(0.01)));
    }
}
