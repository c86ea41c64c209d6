use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FilingMethod;

/// Outcome of assessing a household under one filing method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxationResult {
    pub method: FilingMethod,

    /// Combined gross income of both partners.
    pub gross_income: Decimal,

    /// Total tax owed by the household.
    pub tax: Decimal,

    /// Disposable income after tax (gross - tax).
    pub net_income: Decimal,

    /// Tax as a fraction of gross income, 0 when gross income is 0.
    pub effective_rate: Decimal,
}
