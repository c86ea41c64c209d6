//! Rounding and comparison helpers shared by the engine and the formatters.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept on effective rates (0.1382 = 13.82%).
pub const RATE_DECIMAL_PLACES: u32 = 4;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use lux_tax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a rate fraction to [`RATE_DECIMAL_PLACES`] using half-up rounding.
///
/// ```
/// use rust_decimal_macros::dec;
/// use lux_tax_core::calculations::common::round_rate;
///
/// assert_eq!(round_rate(dec!(0.13824399)), dec!(0.1382));
/// assert_eq!(round_rate(dec!(0.18355)), dec!(0.1836));
/// ```
pub fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RATE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// `numerator / denominator` rounded with [`round_rate`], or zero when the
/// denominator is zero.
pub fn ratio_or_zero(
    numerator: Decimal,
    denominator: Decimal,
) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        round_rate(numerator / denominator)
    }
}

/// Returns the maximum of two decimal values.
///
/// ```
/// use rust_decimal_macros::dec;
/// use lux_tax_core::calculations::common::max;
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
