mod bracket_schedule;
mod comparison_result;
mod filing_method;
mod income_pair;
mod tax_bracket;
mod taxation_result;

pub use bracket_schedule::{BracketSchedule, ScheduleError};
pub use comparison_result::ComparisonResult;
pub use filing_method::FilingMethod;
pub use income_pair::IncomePair;
pub use tax_bracket::TaxBracket;
pub use taxation_result::TaxationResult;
