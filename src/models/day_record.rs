use chrono::NaiveTime;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayStatus {
    Normal,
    Frei,
    Krank,
    Urlaub,
    Fortbildung,
}

impl DayStatus {
    /// Convert enum → store string ('NORMAL', 'FREI', ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Normal => "NORMAL",
            DayStatus::Frei => "FREI",
            DayStatus::Krank => "KRANK",
            DayStatus::Urlaub => "URLAUB",
            DayStatus::Fortbildung => "FORTBILDUNG",
        }
    }
}

/// One weekday slot for one staff member.
///
/// A non-Normal status never carries times. A Normal record without times
/// is *empty*: it holds no schedulable fact and must not reach the sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRecord {
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub status: DayStatus,
    pub notes: Option<String>,
}

impl DayRecord {
    pub fn empty() -> Self {
        Self {
            start: None,
            end: None,
            status: DayStatus::Normal,
            notes: None,
        }
    }

    pub fn with_status(status: DayStatus, notes: &str) -> Self {
        Self {
            start: None,
            end: None,
            status,
            notes: Some(notes.to_string()),
        }
    }

    pub fn working(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            status: DayStatus::Normal,
            notes: None,
        }
    }

    /// Normal status with no times → no information, dropped downstream.
    pub fn is_empty(&self) -> bool {
        self.status == DayStatus::Normal && self.start.is_none() && self.end.is_none()
    }
}
