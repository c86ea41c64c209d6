//! Built-in Luxembourg bracket schedules.
//!
//! The individual schedule follows the 2024 class 1 income tax tariff: a
//! tax-free band up to EUR 12,438, marginal rates rising from 8% to 38% in
//! steps up to EUR 50,751, then 39%, 40%, 41% and 42% above EUR 220,788.
//!
//! The joint schedule applies income splitting: the same rates with every
//! bound doubled, so a couple is taxed as if each partner earned half of the
//! household income.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{BracketSchedule, TaxBracket};

fn individual_brackets() -> Vec<TaxBracket> {
    vec![
        TaxBracket::new(dec!(0), Some(dec!(12438)), dec!(0)),
        TaxBracket::new(dec!(12438), Some(dec!(14508)), dec!(0.08)),
        TaxBracket::new(dec!(14508), Some(dec!(16578)), dec!(0.09)),
        TaxBracket::new(dec!(16578), Some(dec!(18648)), dec!(0.10)),
        TaxBracket::new(dec!(18648), Some(dec!(20718)), dec!(0.11)),
        TaxBracket::new(dec!(20718), Some(dec!(22788)), dec!(0.12)),
        TaxBracket::new(dec!(22788), Some(dec!(24939)), dec!(0.14)),
        TaxBracket::new(dec!(24939), Some(dec!(27090)), dec!(0.16)),
        TaxBracket::new(dec!(27090), Some(dec!(29241)), dec!(0.18)),
        TaxBracket::new(dec!(29241), Some(dec!(31392)), dec!(0.20)),
        TaxBracket::new(dec!(31392), Some(dec!(33543)), dec!(0.22)),
        TaxBracket::new(dec!(33543), Some(dec!(35694)), dec!(0.24)),
        TaxBracket::new(dec!(35694), Some(dec!(37845)), dec!(0.26)),
        TaxBracket::new(dec!(37845), Some(dec!(39996)), dec!(0.28)),
        TaxBracket::new(dec!(39996), Some(dec!(42147)), dec!(0.30)),
        TaxBracket::new(dec!(42147), Some(dec!(44298)), dec!(0.32)),
        TaxBracket::new(dec!(44298), Some(dec!(46449)), dec!(0.34)),
        TaxBracket::new(dec!(46449), Some(dec!(48600)), dec!(0.36)),
        TaxBracket::new(dec!(48600), Some(dec!(50751)), dec!(0.38)),
        TaxBracket::new(dec!(50751), Some(dec!(110403)), dec!(0.39)),
        TaxBracket::new(dec!(110403), Some(dec!(165600)), dec!(0.40)),
        TaxBracket::new(dec!(165600), Some(dec!(220788)), dec!(0.41)),
        TaxBracket::new(dec!(220788), None, dec!(0.42)),
    ]
}

/// Schedule applied to each partner separately under individual filing.
pub fn luxembourg_individual() -> BracketSchedule {
    BracketSchedule::from_validated(individual_brackets())
}

/// Schedule applied to combined income under joint filing.
pub fn luxembourg_joint() -> BracketSchedule {
    let brackets = individual_brackets()
        .into_iter()
        .map(|b| {
            TaxBracket::new(
                b.min_income * Decimal::TWO,
                b.max_income.map(|max| max * Decimal::TWO),
                b.tax_rate,
            )
        })
        .collect();
    BracketSchedule::from_validated(brackets)
}
