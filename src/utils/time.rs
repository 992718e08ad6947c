//! Time formatting helpers for the two sink dialects.

use chrono::NaiveTime;

/// "HH:MM" as the REST API expects.
pub fn hm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// "HH:MM:SS" as the SQL script emits (seconds always :00).
pub fn hms(t: NaiveTime) -> String {
    t.format("%H:%M:%S").to_string()
}

pub fn opt_hm(t: Option<NaiveTime>) -> Option<String> {
    t.map(hm)
}
