//! CSV-backed bracket schedules for the taxation engine.

mod loader;

pub use loader::{ScheduleLoader, ScheduleLoaderError, ScheduleRecord, ScheduleSet};
