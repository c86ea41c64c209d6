//! Progressive tax on a single income.
//!
//! Each bracket taxes only the slice of income that falls inside it, so tax
//! rises continuously with income while the marginal rate steps up at every
//! bracket boundary.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use lux_tax_core::calculations::compute_tax_for_schedule;
//! use lux_tax_core::{BracketSchedule, TaxBracket};
//!
//! let schedule = BracketSchedule::new(vec![
//!     TaxBracket::new(dec!(0), Some(dec!(10000)), dec!(0)),
//!     TaxBracket::new(dec!(10000), Some(dec!(40000)), dec!(0.20)),
//!     TaxBracket::new(dec!(40000), None, dec!(0.40)),
//! ])
//! .unwrap();
//!
//! // 30,000 × 20% + 10,000 × 40%
//! let tax = compute_tax_for_schedule(dec!(50000), &schedule).unwrap();
//! assert_eq!(tax, dec!(10000.00));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::BracketSchedule;
use crate::calculations::common::round_half_up;

/// Errors raised by the tax engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    /// Incomes must be zero or positive.
    #[error("income must not be negative, got {0}")]
    NegativeIncome(Decimal),

    /// The combined household income does not fit in a `Decimal`.
    #[error("combined income of {income1} and {income2} is out of range")]
    IncomeOverflow { income1: Decimal, income2: Decimal },
}

/// Computes tax on `income` under `schedule`, rounded to cents.
///
/// # Errors
///
/// Returns [`CalculationError::NegativeIncome`] for negative input. Callers
/// that want clamping must clamp before calling.
pub fn compute_tax_for_schedule(
    income: Decimal,
    schedule: &BracketSchedule,
) -> Result<Decimal, CalculationError> {
    if income < Decimal::ZERO {
        return Err(CalculationError::NegativeIncome(income));
    }
    Ok(tax_on(income, schedule))
}

/// Bracket walk for an income already known to be non-negative.
pub(crate) fn tax_on(
    income: Decimal,
    schedule: &BracketSchedule,
) -> Decimal {
    let tax: Decimal = schedule
        .brackets()
        .iter()
        .take_while(|b| income > b.min_income)
        .map(|b| b.taxable_portion(income) * b.tax_rate)
        .sum();

    round_half_up(tax)
}
