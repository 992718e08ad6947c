//! Source documents: the row dumps produced by the external table extractor.
//!
//! One JSON file per source document, named after the original document so
//! the filename keeps its date tokens and the preliminary marker. The file
//! content is an array of rows, each row an array of nullable string cells.

use super::staff_row::StaffRow;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Canonical ISO-8601 week identity used for reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct WeekKey {
    pub iso_year: i32,
    pub iso_week: u32,
}

/// Identity of one input document, derived from its filename.
#[derive(Debug, Clone, Serialize)]
pub struct SourceDocument {
    pub filename: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub week: WeekKey,
    pub preliminary: bool,
}

/// A fully parsed document: identity plus all qualifying staff rows.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedDocument {
    pub source: SourceDocument,
    pub staff: Vec<StaffRow>,
}

/// Raw table rows as dumped by the extractor.
pub type Table = Vec<Vec<Option<String>>>;

/// Load one row dump from disk.
pub fn load_table(path: &Path) -> AppResult<Table> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| AppError::InvalidDocument(format!("{}: {}", path.display(), e)))
}
