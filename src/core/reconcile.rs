//! Week reconciliation: many parsed documents → one record set per ISO week.
//!
//! When a week was published more than once, exactly one document is
//! authoritative: a final issue beats a preliminary one, and among equals
//! the first in filename-sorted order wins. Losing documents are skipped
//! whole; weeks are never merged field by field.

use super::staff::StaffDirectory;
use crate::models::{
    ParsedDocument, RunStats, ScheduleEntry, WeekKey, WeekPlan, Weekday, WeeklySchedule,
};
use chrono::Days;
use std::collections::BTreeMap;

/// Pick the authoritative document per week and build its entries.
/// Returned plans are ordered by week key.
pub fn reconcile(
    documents: Vec<ParsedDocument>,
    directory: &StaffDirectory,
    stats: &mut RunStats,
) -> Vec<WeekPlan> {
    let mut winners: BTreeMap<WeekKey, ParsedDocument> = BTreeMap::new();

    let mut documents = documents;
    documents.sort_by(|a, b| a.source.filename.cmp(&b.source.filename));

    for doc in documents {
        let key = doc.source.week;
        let take = match winners.get(&key) {
            None => true,
            Some(current) => {
                stats.weeks_skipped_duplicate += 1;
                // a final issue displaces a preliminary one
                current.source.preliminary && !doc.source.preliminary
            }
        };
        if take {
            winners.insert(key, doc);
        }
    }

    winners
        .into_values()
        .map(|doc| build_plan(doc, directory, stats))
        .collect()
}

/// Turn the winning document for one week into its candidate entries.
/// Empty day records carry no schedulable fact and are dropped; staff that
/// fail identity resolution contribute no entries but feed the report.
fn build_plan(doc: ParsedDocument, directory: &StaffDirectory, stats: &mut RunStats) -> WeekPlan {
    let schedule = WeeklySchedule {
        week: doc.source.week,
        start_date: doc.source.start_date,
        end_date: doc.source.end_date,
        source_filename: doc.source.filename.clone(),
    };

    let mut entries = Vec::new();

    for row in &doc.staff {
        let staff_id = match directory.resolve(&row.first_name, &row.last_name) {
            Some(id) => id,
            None => {
                stats.record_unresolved(&row.display_name());
                continue;
            }
        };

        for day in Weekday::ALL {
            let record = row.day(day);
            if record.is_empty() {
                continue;
            }

            let work_date = schedule
                .start_date
                .checked_add_days(Days::new(day.offset() as u64))
                .unwrap_or(schedule.start_date);

            entries.push(ScheduleEntry {
                staff_id,
                day_of_week: day.number(),
                work_date,
                start_time: record.start,
                end_time: record.end,
                status: record.status,
                notes: record.notes.clone(),
            });
        }
    }

    WeekPlan { schedule, entries }
}
