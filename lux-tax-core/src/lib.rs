pub mod calculations;
pub mod models;

pub use calculations::{
    CalculationError, TaxationEngine, compare_taxation_methods, luxembourg_individual,
    luxembourg_joint,
};
pub use models::*;
