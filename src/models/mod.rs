pub mod day_record;
pub mod document;
pub mod schedule;
pub mod staff_row;
pub mod stats;

// Re-export the types used across module boundaries
pub use day_record::{DayRecord, DayStatus};
pub use document::{ParsedDocument, SourceDocument, WeekKey};
pub use schedule::{ScheduleEntry, WeekPlan, WeeklySchedule};
pub use staff_row::{StaffRow, Weekday};
pub use stats::RunStats;
