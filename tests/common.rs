#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dpi() -> Command {
    cargo_bin_cmd!("dienstplan-import")
}

/// Create a unique, empty scratch directory inside the system temp dir
pub fn setup_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dienstplan_import", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create scratch dir");
    path
}

/// Write one row dump (JSON array of rows) under the given document name
pub fn write_dump(dir: &PathBuf, name: &str, json_rows: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, json_rows).expect("write dump");
    path
}

/// Write a staff mapping file and return its path
pub fn write_mapping(dir: &PathBuf, json: &str) -> PathBuf {
    let path = dir.join("staff-mapping.json");
    fs::write(&path, json).expect("write mapping");
    path
}

/// A small single-staff table: Anna Schmidt, Mon 9:15-17:00, Tue frei,
/// Wed empty, Thu degenerate repeated time, Fri Urlaub.
pub const ANNA_TABLE: &str = r#"[
  ["Gruppe Blau", null, null, null, null, null, null],
  ["Schmidt\nErzieherin", "Anna\nArbeitszeit\nPause",
   "9:15 17:00\n45 min Pause", "frei", "", "8:30 8:30", "Urlaub"]
]"#;

pub const ANNA_MAPPING: &str = r#"{ "anna_schmidt": 7 }"#;
