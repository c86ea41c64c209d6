use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::CalculationError;
use crate::calculations::common::max;

/// Annual gross incomes of the two partners in a household.
///
/// Both values are non-negative and their sum fits in a `Decimal`.
/// [`IncomePair::new`] rejects negative input; [`IncomePair::clamped`] raises
/// it to zero instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawIncomePair")]
pub struct IncomePair {
    income1: Decimal,
    income2: Decimal,
}

#[derive(Deserialize)]
struct RawIncomePair {
    income1: Decimal,
    income2: Decimal,
}

impl TryFrom<RawIncomePair> for IncomePair {
    type Error = CalculationError;

    fn try_from(raw: RawIncomePair) -> Result<Self, Self::Error> {
        Self::new(raw.income1, raw.income2)
    }
}

impl IncomePair {
    pub fn new(
        income1: Decimal,
        income2: Decimal,
    ) -> Result<Self, CalculationError> {
        for income in [income1, income2] {
            if income < Decimal::ZERO {
                return Err(CalculationError::NegativeIncome(income));
            }
        }
        if income1.checked_add(income2).is_none() {
            return Err(CalculationError::IncomeOverflow { income1, income2 });
        }
        Ok(Self { income1, income2 })
    }

    /// Like [`IncomePair::new`], but negative incomes count as zero.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::IncomeOverflow`] if the combined income is
    /// out of range.
    pub fn clamped(
        income1: Decimal,
        income2: Decimal,
    ) -> Result<Self, CalculationError> {
        Self::new(max(income1, Decimal::ZERO), max(income2, Decimal::ZERO))
    }

    pub fn income1(&self) -> Decimal {
        self.income1
    }

    pub fn income2(&self) -> Decimal {
        self.income2
    }

    /// Combined household income.
    pub fn total(&self) -> Decimal {
        // checked in `new`
        self.income1 + self.income2
    }

    /// The same household with the earners swapped.
    pub fn swapped(&self) -> Self {
        Self {
            income1: self.income2,
            income2: self.income1,
        }
    }

    /// `income1 / income2`, or `None` when the second partner earns nothing
    /// or the quotient is out of range.
    pub fn ratio(&self) -> Option<Decimal> {
        self.income1.checked_div(self.income2)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn new_accepts_non_negative_incomes() {
        let pair = IncomePair::new(dec!(70000), dec!(0)).expect("valid incomes");

        assert_eq!(pair.income1(), dec!(70000));
        assert_eq!(pair.income2(), dec!(0));
        assert_eq!(pair.total(), dec!(70000));
    }

    #[test]
    fn new_rejects_negative_income() {
        assert_eq!(
            IncomePair::new(dec!(70000), dec!(-1)),
            Err(CalculationError::NegativeIncome(dec!(-1)))
        );
        assert_eq!(
            IncomePair::new(dec!(-0.01), dec!(20000)),
            Err(CalculationError::NegativeIncome(dec!(-0.01)))
        );
    }

    #[test]
    fn new_accepts_negative_zero() {
        let pair = IncomePair::new(-dec!(0), dec!(0)).expect("negative zero is zero");

        assert_eq!(pair.total(), dec!(0));
    }

    #[test]
    fn clamped_raises_negative_values_to_zero() {
        let pair = IncomePair::clamped(dec!(-500), dec!(20000)).unwrap();

        assert_eq!(pair.income1(), dec!(0));
        assert_eq!(pair.income2(), dec!(20000));
    }

    #[test]
    fn ratio_divides_first_by_second() {
        let pair = IncomePair::new(dec!(70000), dec!(20000)).unwrap();

        assert_eq!(pair.ratio(), Some(dec!(3.5)));
    }

    #[test]
    fn ratio_is_none_without_second_income() {
        let pair = IncomePair::new(dec!(70000), dec!(0)).unwrap();

        assert_eq!(pair.ratio(), None);
    }

    #[test]
    fn new_rejects_combined_income_out_of_range() {
        assert_eq!(
            IncomePair::new(Decimal::MAX, Decimal::ONE),
            Err(CalculationError::IncomeOverflow {
                income1: Decimal::MAX,
                income2: Decimal::ONE,
            })
        );
        assert!(IncomePair::clamped(Decimal::MAX, Decimal::MAX).is_err());
    }

    #[test]
    fn new_accepts_maximum_single_income() {
        let pair = IncomePair::new(Decimal::MAX, dec!(0)).unwrap();

        assert_eq!(pair.total(), Decimal::MAX);
    }

    #[test]
    fn ratio_is_none_when_quotient_is_out_of_range() {
        let pair = IncomePair::new(Decimal::MAX, dec!(0.5)).unwrap();

        assert_eq!(pair.ratio(), None);
    }

    #[test]
    fn deserialize_validates_incomes() {
        let ok: IncomePair =
            serde_json::from_str(r#"{"income1":"70000","income2":"20000"}"#).unwrap();
        let negative: Result<IncomePair, _> =
            serde_json::from_str(r#"{"income1":"-1","income2":"20000"}"#);

        assert_eq!(ok.total(), dec!(90000));
        assert!(negative.is_err());
    }

    #[test]
    fn swapped_exchanges_earners() {
        let pair = IncomePair::new(dec!(70000), dec!(20000)).unwrap().swapped();

        assert_eq!(pair.income1(), dec!(20000));
        assert_eq!(pair.income2(), dec!(70000));
    }
}
