//! Week-key resolution: filename → date range → canonical ISO week.
//!
//! Schedule filenames carry two six-digit date tokens ("YYMMDD-YYMMDD"),
//! optionally followed by a version letter ('p' marks a preliminary issue).
//! The reconciliation key is always derived from the start date via the
//! ISO-8601 calendar, never from the filename's literal year: an ISO week
//! can belong to the neighbouring Gregorian year around New Year.

use crate::models::{SourceDocument, WeekKey};
use chrono::{Datelike, NaiveDate};
use regex::Regex;

/// Parse a document filename into its week identity.
/// Returns None when the filename has no date-range token (structural
/// failure: the whole document is skipped and counted by the caller).
pub fn resolve(filename: &str) -> Option<SourceDocument> {
    let re = Regex::new(r"(\d{6})-(\d{6})([a-z]?)").unwrap();
    let caps = re.captures(filename)?;

    let start_date = parse_date_token(&caps[1])?;
    let end_date = parse_date_token(&caps[2])?;
    let preliminary = &caps[3] == "p";

    let iso = start_date.iso_week();

    Some(SourceDocument {
        filename: filename.to_string(),
        start_date,
        end_date,
        week: WeekKey {
            iso_year: iso.year(),
            iso_week: iso.week(),
        },
        preliminary,
    })
}

/// "YYMMDD" → NaiveDate. Two-digit years < 50 map to the 2000s, the rest
/// to the 1900s, applied to each token independently.
fn parse_date_token(token: &str) -> Option<NaiveDate> {
    let yy: i32 = token[0..2].parse().ok()?;
    let month: u32 = token[2..4].parse().ok()?;
    let day: u32 = token[4..6].parse().ok()?;

    let year = if yy < 50 { 2000 + yy } else { 1900 + yy };

    NaiveDate::from_ymd_opt(year, month, day)
}
