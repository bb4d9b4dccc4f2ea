//! Transaction amount formatting (tag 54).
//!
//! Amounts are written with exactly two decimals, `.` as separator, no
//! grouping and no currency symbol: `1234.5` becomes `"1234.50"`.
//!
//! Rounding works on the exact binary value of the float, with ties going
//! away from zero. `1.005` is really `1.00499999…` and becomes `"1.00"`;
//! `0.125` is exact and becomes `"0.13"`.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of decimal places in the encoded amount.
pub const AMOUNT_SCALE: u32 = 2;

/// A transaction amount in currency units (reais, not centavos).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    /// A float as received from a form or settings row.
    Float(f64),
    /// An exact decimal, e.g. an order total.
    Decimal(Decimal),
}

impl Amount {
    /// The encoded tag 54 value.
    pub fn to_field_value(&self) -> String {
        match self {
            Self::Float(value) => format_amount(*value),
            Self::Decimal(value) => format_decimal(*value),
        }
    }

    /// Whether the amount is a finite value strictly above zero.
    pub fn is_positive(&self) -> bool {
        match self {
            Self::Float(value) => value.is_finite() && *value > 0.0,
            Self::Decimal(value) => value.is_sign_positive() && !value.is_zero(),
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_field_value())
    }
}

/// Format a float amount for tag 54.
///
/// Total over `f64`: non-finite values come out as `NaN`, `Infinity` or
/// `-Infinity`, and magnitudes too large for a decimal fall back to plain
/// fixed-point formatting.
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if amount == 0.0 {
        // Covers -0.0 as well.
        return "0.00".to_string();
    }

    match Decimal::from_f64_retain(amount) {
        Some(exact) => format_decimal(exact),
        None => format!("{:.2}", amount),
    }
}

/// Format an exact decimal amount for tag 54.
pub fn format_decimal(amount: Decimal) -> String {
    let mut rounded =
        amount.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(AMOUNT_SCALE);
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_pads_to_two_decimals() {
        assert_eq!(format_amount(1234.5), "1234.50");
        assert_eq!(format_amount(100.0), "100.00");
        assert_eq!(format_amount(10.0), "10.00");
        assert_eq!(format_amount(0.1), "0.10");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(-0.0), "0.00");
    }

    #[test]
    fn test_no_grouping() {
        assert_eq!(format_amount(1_234_567.89), "1234567.89");
    }

    #[test]
    fn test_rounds_on_exact_binary_value() {
        assert_eq!(format_amount(0.125), "0.13");
        assert_eq!(format_amount(0.375), "0.38");
        assert_eq!(format_amount(1.005), "1.00");
        assert_eq!(format_amount(2.675), "2.67");
        assert_eq!(format_amount(19.999), "20.00");
    }

    #[test]
    fn test_non_finite_does_not_panic() {
        assert_eq!(format_amount(f64::NAN), "NaN");
        assert_eq!(format_amount(f64::INFINITY), "Infinity");
        assert_eq!(format_amount(f64::NEG_INFINITY), "-Infinity");
        assert!(format_amount(f64::MAX).ends_with(".00"));
    }

    #[test]
    fn test_decimal_amounts() {
        let total = Decimal::from_str("4350.5").unwrap();
        assert_eq!(Amount::from(total).to_field_value(), "4350.50");

        let third = Decimal::from_str("33.335").unwrap();
        assert_eq!(format_decimal(third), "33.34");
    }

    #[test]
    fn test_is_positive() {
        assert!(Amount::from(0.01).is_positive());
        assert!(!Amount::from(0.0).is_positive());
        assert!(!Amount::from(-1.0).is_positive());
        assert!(!Amount::from(f64::NAN).is_positive());
        assert!(!Amount::from(f64::INFINITY).is_positive());
        assert!(!Amount::from(Decimal::ZERO).is_positive());
        assert!(Amount::from(Decimal::ONE).is_positive());
    }
}
