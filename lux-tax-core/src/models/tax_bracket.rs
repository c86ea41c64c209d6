use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One band of a progressive schedule.
///
/// `min_income` is inclusive, `max_income` is exclusive. The top band of a
/// schedule has no upper bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
}

impl TaxBracket {
    pub fn new(
        min_income: Decimal,
        max_income: Option<Decimal>,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            min_income,
            max_income,
            tax_rate,
        }
    }

    /// Portion of `income` that falls inside this bracket.
    pub fn taxable_portion(
        &self,
        income: Decimal,
    ) -> Decimal {
        if income <= self.min_income {
            return Decimal::ZERO;
        }
        let top = match self.max_income {
            Some(max) => income.min(max),
            None => income,
        };
        top - self.min_income
    }
}
