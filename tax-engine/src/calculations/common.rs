//! Shared helpers for tax calculations: financial rounding and money parsing.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero). Every monetary boundary in
/// the engine rounds through this function; intermediate products are never
/// accumulated in floating point.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_engine::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_engine::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(-200.00)), dec!(-100.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Rounds a rate (a fraction, not a percentage) to four decimal places,
/// half-up. Used for derived rates such as the effective rate; bracket
/// rates are constants and pass through untouched.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_engine::calculations::common::round_rate;
///
/// assert_eq!(round_rate(dec!(0.31132756)), dec!(0.3113));
/// ```
pub fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(4, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Error returned when a money string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse money amount: {0:?}")]
pub struct ParseMoneyError(pub String);

/// Parses a user-supplied money string into a [`Decimal`].
///
/// Accepts an optional leading `$`, thousands separators, and surrounding
/// whitespace. Intended for CLI-adjacent callers; the engine itself only
/// works with already-typed decimals.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_engine::calculations::common::parse_money;
///
/// assert_eq!(parse_money("$1,234.56"), Ok(dec!(1234.56)));
/// assert_eq!(parse_money("150000"), Ok(dec!(150000)));
/// assert!(parse_money("12x4").is_err());
/// ```
pub fn parse_money(input: &str) -> Result<Decimal, ParseMoneyError> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    if cleaned.is_empty() {
        return Err(ParseMoneyError(input.to_string()));
    }

    Decimal::from_str(&cleaned).map_err(|_| ParseMoneyError(input.to_string()))
}
