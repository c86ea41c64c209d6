//! Tax calculation for two-earner households.
//!
//! [`progressive`] taxes a single income against a bracket schedule,
//! [`engine`] applies it under joint and individual filing and compares the
//! outcomes, and [`format`] renders amounts and rates for display.

pub mod common;
pub mod engine;
pub mod format;
pub mod progressive;
pub mod schedules;

pub use engine::{TaxationEngine, compare_taxation_methods};
pub use format::{format_currency, format_percentage};
pub use progressive::{CalculationError, compute_tax_for_schedule};
pub use schedules::{luxembourg_individual, luxembourg_joint};
