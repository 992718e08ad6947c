//! Day-cell interpretation: raw weekday cell text → typed DayRecord.
//!
//! Status keywords win over anything that looks like a time: a cell such as
//! "Urlaub 9:00" is a vacation day, the stray digits are noise. Only when
//! no keyword matches is the first line scanned for time tokens.

use crate::models::{DayRecord, DayStatus};
use chrono::NaiveTime;
use regex::Regex;

/// Parse one weekday cell. A missing or blank cell yields an empty record.
pub fn parse(cell: Option<&str>) -> DayRecord {
    let text = match cell {
        Some(t) if !t.trim().is_empty() => t.trim().to_lowercase(),
        _ => return DayRecord::empty(),
    };

    // Keyword precedence over the whole cell, first match wins.
    // "fachschule" also contains "schule"; both mark training days.
    if text.contains("frei") {
        return DayRecord::with_status(DayStatus::Frei, "frei");
    }
    if text.contains("krank") {
        return DayRecord::with_status(DayStatus::Krank, "krank");
    }
    if text.contains("schule") {
        return DayRecord::with_status(DayStatus::Fortbildung, "Schule");
    }
    if text.contains("urlaub") {
        return DayRecord::with_status(DayStatus::Urlaub, "Urlaub");
    }

    // No keyword: only the first line may carry a start/end time pair.
    let first_line = text.lines().next().unwrap_or("").trim();

    let tokens = time_tokens(first_line);

    // One single time written twice ("8:30 8:30") is a data-entry
    // convention for a day off without the keyword. Three or more tokens
    // are a regular pair again, whatever their values.
    let repeated_pair = tokens.len() == 2 && tokens[0].0 == tokens[1].0;

    if tokens.len() >= 2 && !repeated_pair {
        return DayRecord::working(tokens[0].1, tokens[1].1);
    }
    if let Some((raw, _)) = tokens.first() {
        if first_line.matches(raw.as_str()).count() >= 2 {
            return DayRecord::with_status(DayStatus::Frei, "frei");
        }
    }

    DayRecord::empty()
}

/// Extract all H:MM / HH:MM tokens from one line, keeping the raw match
/// for the repeated-token check. Hours above 23 are not times.
fn time_tokens(line: &str) -> Vec<(String, NaiveTime)> {
    let re = Regex::new(r"(\d{1,2}):(\d{2})").unwrap();
    re.captures_iter(line)
        .filter_map(|c| {
            let hour: u32 = c[1].parse().ok()?;
            let minute: u32 = c[2].parse().ok()?;
            let t = NaiveTime::from_hms_opt(hour, minute, 0)?;
            Some((c[0].to_string(), t))
        })
        .collect()
}
