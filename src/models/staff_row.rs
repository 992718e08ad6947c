use super::day_record::DayRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Day-of-week as stored (1 = Monday .. 5 = Friday).
    pub fn number(&self) -> u8 {
        *self as u8 + 1
    }

    /// Offset in days from the schedule's start date (a Monday).
    pub fn offset(&self) -> i64 {
        *self as i64
    }
}

/// One qualifying table row: a staff member and their five weekday slots.
/// Transient, consumed within a single document's processing.
#[derive(Debug, Clone, Serialize)]
pub struct StaffRow {
    pub last_name: String,
    pub first_name: String,
    pub role: String,
    pub days: [DayRecord; 5],
}

impl StaffRow {
    pub fn day(&self, day: Weekday) -> &DayRecord {
        &self.days[day as usize]
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
