//! Decimal type utilities for precise money calculations

use rust_decimal::{Decimal, RoundingStrategy};
pub use rust_decimal_macros::dec;

use crate::error::{Error, Result};

/// Money amount with exact decimal precision
pub type Amount = Decimal;

/// Largest representable balance
pub const MAX_AMOUNT: Amount = Decimal::MAX;

/// Precision helpers for common operations
pub mod precision {
    use super::*;

    /// Display precision for money (cents)
    pub const CENTS_PRECISION: u32 = 2;

    /// Round to the nearest cent, halves away from zero
    pub fn round_cents(amount: Amount) -> Amount {
        amount.round_dp_with_strategy(CENTS_PRECISION, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Render an amount rounded to cents with exactly two decimals
    pub fn format_cents(amount: Amount) -> String {
        format!("{:.2}", round_cents(amount))
    }
}

/// Parse user-entered text as an amount
pub fn parse_amount(text: &str) -> Result<Amount> {
    let text = text.trim();
    text.parse::<Amount>()
        .map_err(|_| Error::MalformedNumericInput(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::precision::*;
    use super::*;

    #[test]
    fn test_round_cents_half_up() {
        assert_eq!(round_cents(dec!(126.825)), dec!(126.83));
        assert_eq!(round_cents(dec!(0.004)), dec!(0.00));
        assert_eq!(round_cents(dec!(10)), dec!(10));
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(dec!(60)), "60.00");
        assert_eq!(format_cents(dec!(1.5)), "1.50");
        assert_eq!(format_cents(dec!(99.999)), "100.00");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 12.5 ").unwrap(), dec!(12.5));
        assert_eq!(parse_amount("-3").unwrap(), dec!(-3));
        assert!(matches!(parse_amount("ten"), Err(Error::MalformedNumericInput(_))));
        assert!(matches!(parse_amount(""), Err(Error::MalformedNumericInput(_))));
    }
}
