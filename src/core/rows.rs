//! Row classification: which table rows carry a staff member.
//!
//! The table format leaks its "Arbeitszeit" column header into every data
//! row's second cell; that leak is the structural signature this classifier
//! keys on. Section headers, spacer rows and totals all fail the test.

use super::day_cell;
use crate::models::{DayRecord, StaffRow};

/// Classify one raw table row. Returns None for everything that is not a
/// staff row.
pub fn classify(row: &[Option<String>]) -> Option<StaffRow> {
    if row.len() < 2 {
        return None;
    }

    let identity = row[0].as_deref()?.trim();
    if identity.is_empty() {
        return None;
    }

    let marker = row[1].as_deref()?;
    if !marker.contains("Arbeitszeit") {
        return None;
    }

    // First cell: line 0 last name, line 1 role. A single line means this
    // is not a staff row (e.g. a group header).
    let mut identity_lines = identity.lines();
    let last_name = identity_lines.next()?.trim().to_string();
    let role = identity_lines.next()?.trim().to_string();

    // Second cell: line 0 is the first name.
    let first_name = marker.lines().next()?.trim().to_string();

    // Weekday cells are columns 2..=6; missing trailing columns yield
    // empty day records.
    let days: [DayRecord; 5] = std::array::from_fn(|i| {
        let cell = row.get(i + 2).and_then(|c| c.as_deref());
        day_cell::parse(cell)
    });

    Some(StaffRow {
        last_name,
        first_name,
        role,
        days,
    })
}

/// Parse a whole table into its staff rows.
pub fn classify_table(rows: &[Vec<Option<String>>]) -> Vec<StaffRow> {
    rows.iter().filter_map(|r| classify(r)).collect()
}
