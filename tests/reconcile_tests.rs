use chrono::{NaiveDate, NaiveTime};
use dienstplan_import::core::reconcile::reconcile;
use dienstplan_import::core::staff::StaffDirectory;
use dienstplan_import::models::{
    DayRecord, DayStatus, ParsedDocument, RunStats, SourceDocument, StaffRow, WeekKey,
};
use std::collections::BTreeMap;

fn directory() -> StaffDirectory {
    let mut map: BTreeMap<String, Option<i64>> = BTreeMap::new();
    map.insert("anna_schmidt".to_string(), Some(7));
    StaffDirectory::new(map)
}

fn source(filename: &str, preliminary: bool) -> SourceDocument {
    SourceDocument {
        filename: filename.to_string(),
        start_date: NaiveDate::from_ymd_opt(2025, 8, 25).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 8, 29).unwrap(),
        week: WeekKey {
            iso_year: 2025,
            iso_week: 35,
        },
        preliminary,
    }
}

fn anna(start_h: u32) -> StaffRow {
    let mut days: [DayRecord; 5] = std::array::from_fn(|_| DayRecord::empty());
    days[0] = DayRecord::working(
        NaiveTime::from_hms_opt(start_h, 15, 0).unwrap(),
        NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
    );
    days[1] = DayRecord::with_status(DayStatus::Frei, "frei");
    StaffRow {
        last_name: "Schmidt".to_string(),
        first_name: "Anna".to_string(),
        role: "Erzieherin".to_string(),
        days,
    }
}

#[test]
fn test_final_document_beats_preliminary() {
    let prelim = ParsedDocument {
        source: source("PDienstplan 250825-250829p.json", true),
        staff: vec![anna(8)],
    };
    let fin = ParsedDocument {
        source: source("PDienstplan 250825-250829r.json", false),
        staff: vec![anna(9)],
    };

    // order of arrival must not matter
    for docs in [
        vec![prelim.clone(), fin.clone()],
        vec![fin.clone(), prelim.clone()],
    ] {
        let mut stats = RunStats::default();
        let plans = reconcile(docs, &directory(), &mut stats);

        assert_eq!(plans.len(), 1);
        assert_eq!(stats.weeks_skipped_duplicate, 1);
        assert_eq!(
            plans[0].schedule.source_filename,
            "PDienstplan 250825-250829r.json"
        );
        assert_eq!(
            plans[0].entries[0].start_time,
            Some(NaiveTime::from_hms_opt(9, 15, 0).unwrap())
        );
    }
}

#[test]
fn test_equal_rank_duplicates_keep_first_in_filename_order() {
    let a = ParsedDocument {
        source: source("A 250825-250829.json", false),
        staff: vec![anna(8)],
    };
    let b = ParsedDocument {
        source: source("B 250825-250829.json", false),
        staff: vec![anna(9)],
    };

    let mut stats = RunStats::default();
    let plans = reconcile(vec![b, a], &directory(), &mut stats);

    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].schedule.source_filename, "A 250825-250829.json");
    assert_eq!(stats.weeks_skipped_duplicate, 1);
}

#[test]
fn test_empty_day_records_are_suppressed() {
    let doc = ParsedDocument {
        source: source("PDienstplan 250825-250829.json", false),
        staff: vec![anna(9)],
    };

    let mut stats = RunStats::default();
    let plans = reconcile(vec![doc], &directory(), &mut stats);

    // Monday working, Tuesday frei, Wednesday-Friday empty
    let entries = &plans[0].entries;
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].day_of_week, 1);
    assert_eq!(
        entries[0].work_date,
        NaiveDate::from_ymd_opt(2025, 8, 25).unwrap()
    );
    assert_eq!(entries[0].status, DayStatus::Normal);

    assert_eq!(entries[1].day_of_week, 2);
    assert_eq!(
        entries[1].work_date,
        NaiveDate::from_ymd_opt(2025, 8, 26).unwrap()
    );
    assert_eq!(entries[1].status, DayStatus::Frei);
    assert!(entries[1].start_time.is_none());
}

#[test]
fn test_unresolved_staff_feed_the_report_not_the_output() {
    let mut unknown = anna(9);
    unknown.first_name = "Ute".to_string();
    unknown.last_name = "Weber".to_string();

    let doc = ParsedDocument {
        source: source("PDienstplan 250825-250829.json", false),
        staff: vec![unknown],
    };

    let mut stats = RunStats::default();
    let plans = reconcile(vec![doc], &directory(), &mut stats);

    assert!(plans[0].entries.is_empty());
    assert!(stats.unresolved_staff.contains("Ute Weber"));
}

#[test]
fn test_distinct_weeks_are_kept_apart() {
    let mut other = source("PDienstplan 250901-250905.json", false);
    other.start_date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
    other.end_date = NaiveDate::from_ymd_opt(2025, 9, 5).unwrap();
    other.week = WeekKey {
        iso_year: 2025,
        iso_week: 36,
    };

    let docs = vec![
        ParsedDocument {
            source: source("PDienstplan 250825-250829.json", false),
            staff: vec![anna(9)],
        },
        ParsedDocument {
            source: other,
            staff: vec![anna(8)],
        },
    ];

    let mut stats = RunStats::default();
    let plans = reconcile(docs, &directory(), &mut stats);

    assert_eq!(plans.len(), 2);
    assert_eq!(stats.weeks_skipped_duplicate, 0);
}
