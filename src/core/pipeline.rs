//! Whole-run orchestration: read documents, reconcile, emit, summarize.
//!
//! Document processing is strictly sequential. An unparsable document is
//! logged, counted as failed and skipped; only a missing mapping file or a
//! broken sink aborts the run.

use super::{reconcile, rows, staff::StaffDirectory, week_key};
use crate::errors::{AppError, AppResult};
use crate::models::{ParsedDocument, RunStats, document};
use crate::sink::ScheduleSink;
use crate::utils::RunLog;
use std::fs;
use std::path::{Path, PathBuf};

/// Run the full pipeline over every row dump in `input_dir`.
pub fn run(
    input_dir: &Path,
    directory: &StaffDirectory,
    sink: &mut dyn ScheduleSink,
    log: &RunLog,
) -> AppResult<RunStats> {
    let mut stats = RunStats::default();

    log.info(format!("Input directory: {}", input_dir.display()));
    log.info(format!("Staff mapping:   {} entries", directory.len()));

    let mut documents = Vec::new();
    for path in dump_files(input_dir)? {
        match parse_document(&path, log) {
            Some(doc) => {
                stats.documents_processed += 1;
                documents.push(doc);
            }
            None => stats.documents_failed += 1,
        }
    }

    if documents.is_empty() {
        log.warning("No parsable documents found");
    }

    let plans = reconcile::reconcile(documents, directory, &mut stats);

    for plan in &plans {
        sink.emit(plan, &mut stats, log)?;
    }
    sink.finish(log)?;

    stats.print_summary(log);
    Ok(stats)
}

/// All `.json` row dumps in the input directory, filename-sorted.
fn dump_files(input_dir: &Path) -> AppResult<Vec<PathBuf>> {
    let entries = fs::read_dir(input_dir).map_err(|e| {
        AppError::Config(format!("cannot read input dir {}: {}", input_dir.display(), e))
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().and_then(|x| x.to_str()) == Some("json"))
        .collect();
    files.sort();
    Ok(files)
}

/// Parse one row dump into a document, or None on structural failure.
fn parse_document(path: &Path, log: &RunLog) -> Option<ParsedDocument> {
    let filename = path.file_name()?.to_string_lossy().to_string();
    log.plain(format!("Parsing: {}", filename));

    let source = match week_key::resolve(&filename) {
        Some(s) => s,
        None => {
            log.warning(format!("  No date range in filename, skipped: {}", filename));
            return None;
        }
    };

    let table = match document::load_table(path) {
        Ok(t) => t,
        Err(e) => {
            log.warning(format!("  Unreadable table, skipped: {}", e));
            return None;
        }
    };

    let staff = rows::classify_table(&table);
    log.plain(format!(
        "  Week {}/{}: {} - {}, {} staff rows",
        source.week.iso_week,
        source.week.iso_year,
        source.start_date,
        source.end_date,
        staff.len()
    ));

    Some(ParsedDocument { source, staff })
}
