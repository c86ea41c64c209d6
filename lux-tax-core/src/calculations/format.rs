//! Display formatting for euro amounts and rates.
//!
//! Output is fixed to one style regardless of host locale, so identical
//! input always produces identical strings.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;

pub const CURRENCY_SYMBOL: &str = "€";

/// Formats an amount as euros with thousands separators and two decimals.
///
/// ```
/// use rust_decimal_macros::dec;
/// use lux_tax_core::calculations::format_currency;
///
/// assert_eq!(format_currency(dec!(12441.96)), "€12,441.96");
/// assert_eq!(format_currency(dec!(-5)), "-€5.00");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!("{sign}{CURRENCY_SYMBOL}{}.{cents}", group_thousands(whole))
}

/// Formats a rate fraction as a percentage with two decimals.
///
/// ```
/// use rust_decimal_macros::dec;
/// use lux_tax_core::calculations::format_percentage;
///
/// assert_eq!(format_percentage(dec!(0.1382)), "13.82%");
/// assert_eq!(format_percentage(dec!(0)), "0.00%");
/// ```
pub fn format_percentage(rate: Decimal) -> String {
    let percent = round_half_up(rate * Decimal::ONE_HUNDRED);
    // Avoid "-0.00%" for tiny negative inputs.
    let percent = if percent.is_zero() { Decimal::ZERO } else { percent };
    format!("{percent:.2}%")
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
