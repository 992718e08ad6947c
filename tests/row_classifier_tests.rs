use dienstplan_import::core::rows;
use dienstplan_import::models::{DayStatus, Weekday};

fn cell(s: &str) -> Option<String> {
    Some(s.to_string())
}

#[test]
fn test_staff_row_is_classified() {
    let row = vec![
        cell("Schmidt\nErzieherin"),
        cell("Anna\nArbeitszeit\nPause"),
        cell("9:15 17:00"),
        cell("frei"),
        cell(""),
        cell("8:30 8:30"),
        cell("Urlaub"),
    ];

    let staff = rows::classify(&row).expect("staff row");
    assert_eq!(staff.last_name, "Schmidt");
    assert_eq!(staff.first_name, "Anna");
    assert_eq!(staff.role, "Erzieherin");

    assert_eq!(staff.day(Weekday::Monday).status, DayStatus::Normal);
    assert_eq!(staff.day(Weekday::Tuesday).status, DayStatus::Frei);
    assert!(staff.day(Weekday::Wednesday).is_empty());
    assert_eq!(staff.day(Weekday::Thursday).status, DayStatus::Frei);
    assert_eq!(staff.day(Weekday::Friday).status, DayStatus::Urlaub);
}

#[test]
fn test_rows_without_marker_are_ignored() {
    // section header
    let row = vec![cell("Gruppe Blau"), cell("Montag"), cell("Dienstag")];
    assert!(rows::classify(&row).is_none());

    // blank spacer
    let row = vec![None, None, None, None, None, None, None];
    assert!(rows::classify(&row).is_none());

    // too narrow
    let row = vec![cell("Schmidt\nErzieherin")];
    assert!(rows::classify(&row).is_none());
}

#[test]
fn test_identity_cell_needs_a_role_line() {
    let row = vec![cell("Gesamtstunden"), cell("Arbeitszeit")];
    assert!(rows::classify(&row).is_none());
}

#[test]
fn test_missing_trailing_day_columns_yield_empty_records() {
    let row = vec![
        cell("Weber\nKoch"),
        cell("Ute\nArbeitszeit"),
        cell("7:00 15:00"),
    ];

    let staff = rows::classify(&row).expect("staff row");
    assert_eq!(staff.day(Weekday::Monday).status, DayStatus::Normal);
    for day in [Weekday::Tuesday, Weekday::Wednesday, Weekday::Thursday, Weekday::Friday] {
        assert!(staff.day(day).is_empty());
    }
}

#[test]
fn test_classify_table_filters_non_staff_rows() {
    let table: Vec<Vec<Option<String>>> = vec![
        vec![cell("Gruppe Blau"), None],
        vec![
            cell("Schmidt\nErzieherin"),
            cell("Anna\nArbeitszeit"),
            cell("9:15 17:00"),
        ],
        vec![None, None],
    ];

    let staff = rows::classify_table(&table);
    assert_eq!(staff.len(), 1);
    assert_eq!(staff[0].display_name(), "Anna Schmidt");
}
