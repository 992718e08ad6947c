//! Durable output model: one weekly schedule plus its entries.

use super::day_record::DayStatus;
use super::document::WeekKey;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One logical schedule per ISO week after reconciliation.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklySchedule {
    pub week: WeekKey,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub source_filename: String,
}

impl WeeklySchedule {
    pub fn notes(&self) -> String {
        format!("Imported from {}", self.source_filename)
    }
}

/// Final emitted unit, naturally keyed by (week, staff_id, day_of_week).
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleEntry {
    pub staff_id: i64,
    pub day_of_week: u8,
    pub work_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub status: DayStatus,
    pub notes: Option<String>,
}

/// One reconciled week ready for the sink.
#[derive(Debug, Clone, Serialize)]
pub struct WeekPlan {
    pub schedule: WeeklySchedule,
    pub entries: Vec<ScheduleEntry>,
}
