use predicates::str::contains;
use std::fs;

mod common;
use common::{ANNA_TABLE, dpi, setup_dir, write_dump, write_mapping};

#[test]
fn test_dry_run_logs_intended_actions_only() {
    let dir = setup_dir("dry_run_actions");
    let input = dir.join("dumps");
    fs::create_dir_all(&input).unwrap();

    write_dump(&input, "PDienstplan 250825-250829.json", ANNA_TABLE);
    let mapping = write_mapping(&dir, r#"{ "anna_schmidt": 7 }"#);

    dpi()
        .args([
            "--input",
            input.to_str().unwrap(),
            "--mapping",
            mapping.to_str().unwrap(),
            "import",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(contains("[DRY RUN] Would create weekly schedule 2025/W35"))
        .stdout(contains("[DRY RUN] Would create entry: staff=7, day=1"))
        .stdout(contains("Entries created:      4"));

    // the run log is written next to the input directory
    let log = fs::read_to_string(dir.join("import-log.txt")).unwrap();
    assert!(log.contains("Would create weekly schedule 2025/W35"));
    // section headers are console status lines too and must be appended
    assert!(log.contains("Schedule import"));
    assert!(log.contains("Run complete - Summary"));
    assert!(log.contains("=========="));
    // color-stripped
    assert!(!log.contains("\x1b["));
}

#[test]
fn test_unresolved_staff_are_reported_not_dropped_silently() {
    let dir = setup_dir("dry_run_unresolved");
    let input = dir.join("dumps");
    fs::create_dir_all(&input).unwrap();

    let table = r#"[
      ["Schmidt\nErzieherin", "Anna\nArbeitszeit", "9:15 17:00", "", "", "", ""],
      ["Weber\nKoch", "Ute\nArbeitszeit", "7:00 15:00", "", "", "", ""]
    ]"#;
    write_dump(&input, "PDienstplan 250825-250829.json", table);
    let mapping = write_mapping(&dir, r#"{ "anna_schmidt": 7 }"#);

    dpi()
        .args([
            "--input",
            input.to_str().unwrap(),
            "--mapping",
            mapping.to_str().unwrap(),
            "import",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(contains("Staff not found in mapping (1):"))
        .stdout(contains("Ute Weber"))
        // Anna's entry still goes through
        .stdout(contains("Would create entry: staff=7, day=1"));
}

#[test]
fn test_unparsable_document_is_skipped_and_counted() {
    let dir = setup_dir("dry_run_unparsable");
    let input = dir.join("dumps");
    fs::create_dir_all(&input).unwrap();

    write_dump(&input, "PDienstplan 250825-250829.json", ANNA_TABLE);
    write_dump(&input, "notes.json", "[]");
    let mapping = write_mapping(&dir, r#"{ "anna_schmidt": 7 }"#);

    dpi()
        .args([
            "--input",
            input.to_str().unwrap(),
            "--mapping",
            mapping.to_str().unwrap(),
            "import",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(contains("No date range in filename"))
        .stdout(contains("Documents processed:  1"))
        .stdout(contains("Documents failed:     1"));
}

#[test]
fn test_missing_mapping_file_is_fatal() {
    let dir = setup_dir("dry_run_no_mapping");
    let input = dir.join("dumps");
    fs::create_dir_all(&input).unwrap();

    write_dump(&input, "PDienstplan 250825-250829.json", ANNA_TABLE);

    dpi()
        .args([
            "--input",
            input.to_str().unwrap(),
            "--mapping",
            dir.join("missing.json").to_str().unwrap(),
            "import",
            "--dry-run",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid staff mapping"));
}
