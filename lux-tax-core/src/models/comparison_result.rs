use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{FilingMethod, TaxationResult};
use crate::calculations::common::round_half_up;

/// Side-by-side assessment of a household under both filing methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub joint: TaxationResult,
    pub individual: TaxationResult,

    /// Individual tax minus joint tax. Positive when joint filing is cheaper.
    pub difference: Decimal,

    /// Method with the lower household tax. Ties go to joint filing.
    pub recommendation: FilingMethod,

    /// Absolute value of `difference`.
    pub savings: Decimal,
}

impl ComparisonResult {
    pub fn result_for(
        &self,
        method: FilingMethod,
    ) -> &TaxationResult {
        match method {
            FilingMethod::Joint => &self.joint,
            FilingMethod::Individual => &self.individual,
        }
    }

    pub fn recommended(&self) -> &TaxationResult {
        self.result_for(self.recommendation)
    }

    /// Annual savings spread over twelve months, rounded to cents.
    pub fn monthly_savings(&self) -> Decimal {
        round_half_up(self.savings / Decimal::from(12))
    }

    pub fn is_tie(&self) -> bool {
        self.difference.is_zero()
    }
}
