//! Joint versus individual assessment of a two-earner household.
//!
//! Joint filing taxes the combined income against the joint schedule.
//! Individual filing taxes each partner against the individual schedule on
//! their own, so the progressive brackets start over for the second earner.
//! That reset is what makes the two methods diverge for uneven income splits.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use lux_tax_core::calculations::compare_taxation_methods;
//! use lux_tax_core::FilingMethod;
//!
//! let result = compare_taxation_methods(dec!(70000), dec!(20000)).unwrap();
//!
//! assert_eq!(result.joint.tax, dec!(12441.96));
//! assert_eq!(result.individual.tax, dec!(16520.11));
//! assert_eq!(result.recommendation, FilingMethod::Joint);
//! assert_eq!(result.savings, dec!(4078.15));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::ratio_or_zero;
use crate::calculations::progressive::{CalculationError, tax_on};
use crate::calculations::schedules::{luxembourg_individual, luxembourg_joint};
use crate::{BracketSchedule, ComparisonResult, FilingMethod, IncomePair, TaxationResult};

/// Tax engine holding the joint and individual bracket schedules.
///
/// The engine is immutable once built; one instance can serve any number of
/// callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxationEngine {
    joint_schedule: BracketSchedule,
    individual_schedule: BracketSchedule,
}

impl TaxationEngine {
    pub fn new(
        joint_schedule: BracketSchedule,
        individual_schedule: BracketSchedule,
    ) -> Self {
        Self {
            joint_schedule,
            individual_schedule,
        }
    }

    /// Engine using the built-in Luxembourg schedules.
    pub fn luxembourg() -> Self {
        Self::new(luxembourg_joint(), luxembourg_individual())
    }

    pub fn joint_schedule(&self) -> &BracketSchedule {
        &self.joint_schedule
    }

    pub fn individual_schedule(&self) -> &BracketSchedule {
        &self.individual_schedule
    }

    pub fn schedule_for(
        &self,
        method: FilingMethod,
    ) -> &BracketSchedule {
        match method {
            FilingMethod::Joint => &self.joint_schedule,
            FilingMethod::Individual => &self.individual_schedule,
        }
    }

    /// Taxes the combined household income under the joint schedule.
    pub fn compute_joint(
        &self,
        incomes: &IncomePair,
    ) -> TaxationResult {
        let gross_income = incomes.total();
        let tax = tax_on(gross_income, &self.joint_schedule);

        build_result(FilingMethod::Joint, gross_income, tax)
    }

    /// Taxes each partner separately under the individual schedule.
    ///
    /// The effective rate is measured against combined gross income so it is
    /// comparable with [`TaxationEngine::compute_joint`].
    pub fn compute_individual(
        &self,
        incomes: &IncomePair,
    ) -> TaxationResult {
        let tax1 = tax_on(incomes.income1(), &self.individual_schedule);
        let tax2 = tax_on(incomes.income2(), &self.individual_schedule);

        build_result(FilingMethod::Individual, incomes.total(), tax1 + tax2)
    }

    /// Assesses the household under both methods and recommends the cheaper.
    ///
    /// Joint filing is recommended when both methods cost the same.
    pub fn compare(
        &self,
        incomes: &IncomePair,
    ) -> ComparisonResult {
        let joint = self.compute_joint(incomes);
        let individual = self.compute_individual(incomes);

        let difference = individual.tax - joint.tax;
        let recommendation = if difference >= Decimal::ZERO {
            FilingMethod::Joint
        } else {
            FilingMethod::Individual
        };

        debug!(
            income1 = %incomes.income1(),
            income2 = %incomes.income2(),
            joint_tax = %joint.tax,
            individual_tax = %individual.tax,
            %recommendation,
            "compared filing methods"
        );

        ComparisonResult {
            joint,
            individual,
            difference,
            recommendation,
            savings: difference.abs(),
        }
    }
}

impl Default for TaxationEngine {
    fn default() -> Self {
        Self::luxembourg()
    }
}

/// Compares joint and individual filing under the built-in Luxembourg
/// schedules.
///
/// # Errors
///
/// Returns [`CalculationError::NegativeIncome`] if either income is negative,
/// or [`CalculationError::IncomeOverflow`] if their sum is out of range.
pub fn compare_taxation_methods(
    income1: Decimal,
    income2: Decimal,
) -> Result<ComparisonResult, CalculationError> {
    let incomes = IncomePair::new(income1, income2)?;
    Ok(TaxationEngine::luxembourg().compare(&incomes))
}

fn build_result(
    method: FilingMethod,
    gross_income: Decimal,
    tax: Decimal,
) -> TaxationResult {
    TaxationResult {
        method,
        gross_income,
        tax,
        net_income: gross_income - tax,
        effective_rate: ratio_or_zero(tax, gross_income),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::TaxBracket;

    fn pair(
        income1: Decimal,
        income2: Decimal,
    ) -> IncomePair {
        IncomePair::new(income1, income2).expect("non-negative incomes")
    }

    /// Joint schedule with a narrow tax-free band and a flat 30% above it;
    /// individual schedule with a generous tax-free band per earner.
    fn reform_engine() -> TaxationEngine {
        let joint = BracketSchedule::new(vec![
            TaxBracket::new(dec!(0), Some(dec!(10000)), dec!(0)),
            TaxBracket::new(dec!(10000), None, dec!(0.30)),
        ])
        .unwrap();
        let individual = BracketSchedule::new(vec![
            TaxBracket::new(dec!(0), Some(dec!(20000)), dec!(0)),
            TaxBracket::new(dec!(20000), None, dec!(0.30)),
        ])
        .unwrap();
        TaxationEngine::new(joint, individual)
    }

    // =========================================================================
    // canonical scenario
    // =========================================================================

    #[test]
    fn canonical_household_regression() {
        let engine = TaxationEngine::luxembourg();

        let result = engine.compare(&pair(dec!(70000), dec!(20000)));

        assert_eq!(
            result.joint,
            TaxationResult {
                method: FilingMethod::Joint,
                gross_income: dec!(90000),
                tax: dec!(12441.96),
                net_income: dec!(77558.04),
                effective_rate: dec!(0.1382),
            }
        );
        assert_eq!(
            result.individual,
            TaxationResult {
                method: FilingMethod::Individual,
                gross_income: dec!(90000),
                tax: dec!(16520.11),
                net_income: dec!(73479.89),
                effective_rate: dec!(0.1836),
            }
        );
        assert_eq!(result.difference, dec!(4078.15));
        assert_eq!(result.recommendation, FilingMethod::Joint);
        assert_eq!(result.savings, dec!(4078.15));
        assert_eq!(result.monthly_savings(), dec!(339.85));
    }

    #[test]
    fn individual_tax_sums_each_earner() {
        let engine = TaxationEngine::luxembourg();

        let result = engine.compute_individual(&pair(dec!(70000), dec!(20000)));

        // 15,812.49 on the first earner plus 707.62 on the second
        assert_eq!(result.tax, dec!(15812.49) + dec!(707.62));
    }

    // =========================================================================
    // zero and tie cases
    // =========================================================================

    #[test]
    fn zero_incomes_tie_toward_joint() {
        let result = compare_taxation_methods(dec!(0), dec!(0)).unwrap();

        assert_eq!(result.joint.tax, dec!(0));
        assert_eq!(result.individual.tax, dec!(0));
        assert_eq!(result.joint.effective_rate, dec!(0));
        assert_eq!(result.individual.effective_rate, dec!(0));
        assert_eq!(result.difference, dec!(0));
        assert_eq!(result.savings, dec!(0));
        assert_eq!(result.recommendation, FilingMethod::Joint);
        assert!(result.is_tie());
    }

    #[test]
    fn equal_incomes_tie_under_splitting() {
        let result = compare_taxation_methods(dec!(45000), dec!(45000)).unwrap();

        assert_eq!(result.joint.tax, dec!(12441.96));
        assert_eq!(result.individual.tax, dec!(12441.96));
        assert_eq!(result.recommendation, FilingMethod::Joint);
        assert!(result.is_tie());
    }

    #[test]
    fn single_earner_household() {
        let result = compare_taxation_methods(dec!(100000), dec!(0)).unwrap();

        assert_eq!(result.joint.tax, dec!(16040.00));
        assert_eq!(result.individual.tax, dec!(27512.49));
        assert_eq!(result.savings, dec!(11472.49));
        assert_eq!(result.recommendation, FilingMethod::Joint);
    }

    // =========================================================================
    // swappable schedules
    // =========================================================================

    #[test]
    fn individual_recommended_when_schedules_favour_it() {
        let engine = reform_engine();

        let result = engine.compare(&pair(dec!(30000), dec!(30000)));

        // joint: 50,000 × 30%; individual: 2 × 10,000 × 30%
        assert_eq!(result.joint.tax, dec!(15000.00));
        assert_eq!(result.individual.tax, dec!(6000.00));
        assert_eq!(result.difference, dec!(-9000.00));
        assert_eq!(result.recommendation, FilingMethod::Individual);
        assert_eq!(result.savings, dec!(9000.00));
        assert_eq!(result.recommended().tax, dec!(6000.00));
    }

    #[test]
    fn schedule_for_returns_matching_schedule() {
        let engine = reform_engine();

        assert_eq!(
            engine.schedule_for(FilingMethod::Joint).brackets()[0].max_income,
            Some(dec!(10000))
        );
        assert_eq!(
            engine.schedule_for(FilingMethod::Individual).brackets()[0].max_income,
            Some(dec!(20000))
        );
    }

    // =========================================================================
    // properties
    // =========================================================================

    fn sample_incomes() -> Vec<Decimal> {
        (0..=60).map(|i| Decimal::from(i * 5_000)).collect()
    }

    #[test]
    fn taxes_are_never_negative() {
        let engine = TaxationEngine::luxembourg();

        for a in sample_incomes() {
            for b in [dec!(0), dec!(20000), dec!(150000)] {
                let result = engine.compare(&pair(a, b));

                assert!(result.joint.tax >= Decimal::ZERO);
                assert!(result.individual.tax >= Decimal::ZERO);
                assert!(result.savings >= Decimal::ZERO);
            }
        }
    }

    #[test]
    fn raising_one_income_never_lowers_tax() {
        let engine = TaxationEngine::luxembourg();

        for other in [dec!(0), dec!(20000), dec!(70000)] {
            let mut previous: Option<ComparisonResult> = None;
            for income in sample_incomes() {
                let result = engine.compare(&pair(income, other));
                if let Some(prev) = &previous {
                    assert!(result.joint.tax >= prev.joint.tax, "joint at {income}");
                    assert!(
                        result.individual.tax >= prev.individual.tax,
                        "individual at {income}"
                    );
                }
                previous = Some(result);
            }
        }
    }

    #[test]
    fn individual_filing_ignores_earner_order() {
        let engine = TaxationEngine::luxembourg();

        for a in sample_incomes() {
            let incomes = pair(a, dec!(37500));

            assert_eq!(
                engine.compute_individual(&incomes),
                engine.compute_individual(&incomes.swapped())
            );
        }
    }

    #[test]
    fn splitting_never_costs_more_than_individual_filing() {
        let engine = TaxationEngine::luxembourg();

        for a in sample_incomes() {
            for b in sample_incomes().into_iter().step_by(7) {
                let result = engine.compare(&pair(a, b));

                assert_eq!(result.recommendation, FilingMethod::Joint, "{a} / {b}");
            }
        }
    }

    #[test]
    fn net_income_is_gross_minus_tax() {
        let engine = TaxationEngine::luxembourg();

        let result = engine.compare(&pair(dec!(250000), dec!(50000)));

        assert_eq!(result.joint.net_income, dec!(300000) - result.joint.tax);
        assert_eq!(
            result.individual.net_income,
            dec!(300000) - result.individual.tax
        );
        assert_eq!(result.joint.tax, dec!(94816.92));
        assert_eq!(result.individual.tax, dec!(96564.58));
    }

    #[test]
    fn repeated_comparisons_are_identical() {
        let first = compare_taxation_methods(dec!(70000), dec!(20000)).unwrap();
        let second = compare_taxation_methods(dec!(70000), dec!(20000)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn negative_income_is_rejected() {
        let result = compare_taxation_methods(dec!(70000), dec!(-20000));

        assert_eq!(result, Err(CalculationError::NegativeIncome(dec!(-20000))));
    }

    #[test]
    fn combined_income_out_of_range_is_an_error() {
        let result = compare_taxation_methods(Decimal::MAX, Decimal::ONE);

        assert_eq!(
            result,
            Err(CalculationError::IncomeOverflow {
                income1: Decimal::MAX,
                income2: Decimal::ONE,
            })
        );
    }

    #[test]
    fn very_large_incomes_compare_without_overflow() {
        let income = dec!(30000000000000000000000000000);

        let result = compare_taxation_methods(income, income).unwrap();

        assert_eq!(result.joint.gross_income, income * Decimal::TWO);
        for taxed in [&result.joint, &result.individual] {
            assert_eq!(taxed.net_income, taxed.gross_income - taxed.tax);
            assert!(taxed.effective_rate > dec!(0.41));
            assert!(taxed.effective_rate <= dec!(0.42));
        }
        assert_eq!(result.savings, result.difference.abs());
    }
}
