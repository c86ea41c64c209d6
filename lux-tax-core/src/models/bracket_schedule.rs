use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::TaxBracket;

/// Errors raised when a list of brackets does not form a usable schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// No brackets were provided.
    #[error("schedule has no brackets")]
    Empty,

    /// The first bracket does not start at zero.
    #[error("first bracket must start at 0, got {0}")]
    FirstBracketNotAtZero(Decimal),

    /// A bracket's upper bound does not meet the next bracket's lower bound.
    #[error("bracket {index} ends at {max_income:?} but the next bracket starts at {next_min}")]
    Gap {
        index: usize,
        max_income: Option<Decimal>,
        next_min: Decimal,
    },

    /// A bracket's upper bound is not above its lower bound.
    #[error("bracket {index} has upper bound {max_income} not above lower bound {min_income}")]
    EmptyRange {
        index: usize,
        min_income: Decimal,
        max_income: Decimal,
    },

    /// The last bracket has an upper bound.
    #[error("top bracket must be unbounded, got upper bound {0}")]
    BoundedTopBracket(Decimal),

    /// A rate lies outside [0, 1].
    #[error("bracket {index} has rate {rate} outside [0, 1]")]
    InvalidRate { index: usize, rate: Decimal },

    /// A bracket's rate is lower than the one below it.
    #[error("bracket {index} has rate {rate} below the previous rate {previous}")]
    DecreasingRate {
        index: usize,
        rate: Decimal,
        previous: Decimal,
    },
}

/// An ordered, contiguous set of brackets covering 0 to infinity.
///
/// Construct with [`BracketSchedule::new`], which checks that brackets start
/// at zero, meet end to end, end in an unbounded bracket, and carry
/// non-decreasing rates in [0, 1].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TaxBracket>", into = "Vec<TaxBracket>")]
pub struct BracketSchedule {
    brackets: Vec<TaxBracket>,
}

impl BracketSchedule {
    pub fn new(brackets: Vec<TaxBracket>) -> Result<Self, ScheduleError> {
        let first = brackets.first().ok_or(ScheduleError::Empty)?;
        if first.min_income != Decimal::ZERO {
            return Err(ScheduleError::FirstBracketNotAtZero(first.min_income));
        }

        let mut previous_rate = Decimal::ZERO;
        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.tax_rate < Decimal::ZERO || bracket.tax_rate > Decimal::ONE {
                return Err(ScheduleError::InvalidRate {
                    index,
                    rate: bracket.tax_rate,
                });
            }
            if bracket.tax_rate < previous_rate {
                return Err(ScheduleError::DecreasingRate {
                    index,
                    rate: bracket.tax_rate,
                    previous: previous_rate,
                });
            }
            previous_rate = bracket.tax_rate;

            if let Some(max_income) = bracket.max_income {
                if max_income <= bracket.min_income {
                    return Err(ScheduleError::EmptyRange {
                        index,
                        min_income: bracket.min_income,
                        max_income,
                    });
                }
            }

            match brackets.get(index + 1) {
                Some(next) if bracket.max_income != Some(next.min_income) => {
                    return Err(ScheduleError::Gap {
                        index,
                        max_income: bracket.max_income,
                        next_min: next.min_income,
                    });
                }
                None => {
                    if let Some(max_income) = bracket.max_income {
                        return Err(ScheduleError::BoundedTopBracket(max_income));
                    }
                }
                _ => {}
            }
        }

        Ok(Self { brackets })
    }

    /// Wraps brackets already known to satisfy [`BracketSchedule::new`].
    pub(crate) fn from_validated(brackets: Vec<TaxBracket>) -> Self {
        debug_assert!(Self::new(brackets.clone()).is_ok());
        Self { brackets }
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Highest marginal rate, applied to income in the top bracket.
    pub fn top_rate(&self) -> Decimal {
        self.brackets
            .last()
            .map(|b| b.tax_rate)
            .unwrap_or(Decimal::ZERO)
    }
}

impl TryFrom<Vec<TaxBracket>> for BracketSchedule {
    type Error = ScheduleError;

    fn try_from(brackets: Vec<TaxBracket>) -> Result<Self, Self::Error> {
        Self::new(brackets)
    }
}

impl From<BracketSchedule> for Vec<TaxBracket> {
    fn from(schedule: BracketSchedule) -> Self {
        schedule.brackets
    }
}
