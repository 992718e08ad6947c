//! Per-run counters and the end-of-run summary.

use crate::utils::RunLog;
use std::collections::BTreeSet;

#[derive(Debug, Default)]
pub struct RunStats {
    pub documents_processed: u32,
    pub documents_failed: u32,
    pub weeks_emitted: u32,
    pub weeks_failed: u32,
    pub weeks_skipped_duplicate: u32,
    pub entries_created: u32,
    pub entries_skipped: u32,
    pub entries_failed: u32,
    /// Display names that could not be resolved to a staff id.
    pub unresolved_staff: BTreeSet<String>,
}

impl RunStats {
    pub fn record_unresolved(&mut self, display_name: &str) {
        self.unresolved_staff.insert(display_name.to_string());
    }

    pub fn print_summary(&self, log: &RunLog) {
        log.header("Run complete - Summary");
        log.plain(format!("Documents processed:  {}", self.documents_processed));
        log.plain(format!("Documents failed:     {}", self.documents_failed));
        log.plain(format!("Weeks emitted:        {}", self.weeks_emitted));
        log.plain(format!("Weeks failed:         {}", self.weeks_failed));
        log.plain(format!("Duplicate weeks:      {}", self.weeks_skipped_duplicate));
        log.plain(format!("Entries created:      {}", self.entries_created));
        log.plain(format!("Entries skipped:      {}", self.entries_skipped));
        log.plain(format!("Entries failed:       {}", self.entries_failed));

        if !self.unresolved_staff.is_empty() {
            log.warning(format!(
                "Staff not found in mapping ({}):",
                self.unresolved_staff.len()
            ));
            for name in &self.unresolved_staff {
                log.plain(format!("  - {}", name));
            }
        }
    }
}
