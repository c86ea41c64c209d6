pub mod app;
pub mod config;
pub mod findings;
pub mod logging;
pub mod report;
pub mod utils;
