use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Error returned when a string cannot be used as an annual income.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseIncomeError {
    #[error("invalid income '{input}': {reason}")]
    Invalid { input: String, reason: String },

    #[error("income must not be negative, got '{0}'")]
    Negative(String),
}

/// Normalizes input for decimal parsing: trims whitespace, drops a leading
/// euro sign and removes commas (thousands separator).
fn normalize_income_input(s: &str) -> String {
    let trimmed = s.trim();
    let trimmed = trimmed.strip_prefix('€').unwrap_or(trimmed);
    trimmed.trim().replace(',', "")
}

/// Parses a string into a non-negative income.
///
/// Handles comma as thousands separator (e.g. `"70,000"`) and an optional
/// leading `€`. Empty or whitespace-only input is treated as 0. Negative
/// values are rejected rather than clamped.
pub fn parse_income(s: &str) -> Result<Decimal, ParseIncomeError> {
    let normalized = normalize_income_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let value: Decimal = normalized.parse().map_err(|e: rust_decimal::Error| {
        tracing::error!(input = %s, "invalid income: {}", e);
        ParseIncomeError::Invalid {
            input: s.to_string(),
            reason: e.to_string(),
        }
    })?;
    if value < Decimal::ZERO {
        tracing::warn!(input = %s, "rejected negative income");
        return Err(ParseIncomeError::Negative(s.to_string()));
    }
    Ok(value)
}

/// Formats an income ratio as `"3.5:1"`, or `"—"` when undefined.
pub fn ratio_display(ratio: Option<Decimal>) -> String {
    ratio
        .map(|r| {
            let rounded = r.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.1}:1")
        })
        .unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_income_accepts_comma_thousands_separator() {
        assert_eq!(parse_income("70,000").unwrap(), dec!(70000));
        assert_eq!(parse_income("1,234,567.89").unwrap(), dec!(1234567.89));
    }

    #[test]
    fn parse_income_accepts_euro_sign() {
        assert_eq!(parse_income("€20,000").unwrap(), dec!(20000));
        assert_eq!(parse_income(" € 20000 ").unwrap(), dec!(20000));
    }

    #[test]
    fn parse_income_trims_whitespace() {
        assert_eq!(parse_income("  123.45  ").unwrap(), dec!(123.45));
    }

    #[test]
    fn parse_income_empty_treated_as_zero() {
        assert_eq!(parse_income("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_income("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_income_invalid_returns_error() {
        assert!(matches!(
            parse_income("abc"),
            Err(ParseIncomeError::Invalid { .. })
        ));
    }

    #[test]
    fn parse_income_rejects_negative_values() {
        assert_eq!(
            parse_income("-500"),
            Err(ParseIncomeError::Negative("-500".to_string()))
        );
    }

    #[test]
    fn ratio_display_rounds_to_one_place() {
        assert_eq!(ratio_display(Some(dec!(3.5))), "3.5:1");
        assert_eq!(ratio_display(Some(dec!(1))), "1.0:1");
        assert_eq!(ratio_display(Some(dec!(0.28571))), "0.3:1");
    }

    #[test]
    fn ratio_display_rounds_midpoint_away_from_zero() {
        assert_eq!(ratio_display(Some(dec!(0.25))), "0.3:1");
        assert_eq!(ratio_display(Some(dec!(2.25))), "2.3:1");
        assert_eq!(ratio_display(Some(dec!(0.35))), "0.4:1");
    }

    #[test]
    fn ratio_display_handles_missing_ratio() {
        assert_eq!(ratio_display(None), "—");
    }
}
