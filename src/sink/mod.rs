//! Sink emitters: externalize reconciled weeks, idempotently.
//!
//! Both real strategies must be safe to re-run over the same inputs: the
//! API sink reuses existing weekly schedules and skips duplicate entries,
//! the SQL sink guards every insert with a natural-key existence check.

pub mod api;
pub mod sql;

use crate::errors::AppResult;
use crate::models::{RunStats, WeekPlan};
use crate::utils::RunLog;
use crate::utils::time;

pub trait ScheduleSink {
    /// Emit one reconciled week. Per-entry failures are counted in `stats`
    /// and never abort the run; only unrecoverable sink states (lost
    /// credentials, unwritable output) return Err.
    fn emit(&mut self, plan: &WeekPlan, stats: &mut RunStats, log: &RunLog) -> AppResult<()>;

    /// Called once after the last week.
    fn finish(&mut self, log: &RunLog) -> AppResult<()> {
        let _ = log;
        Ok(())
    }
}

/// No-op sink for dry runs: logs intended actions, mutates nothing.
pub struct DryRunSink;

impl ScheduleSink for DryRunSink {
    fn emit(&mut self, plan: &WeekPlan, stats: &mut RunStats, log: &RunLog) -> AppResult<()> {
        log.info(format!(
            "[DRY RUN] Would create weekly schedule {}/W{} ({} - {})",
            plan.schedule.week.iso_year,
            plan.schedule.week.iso_week,
            plan.schedule.start_date,
            plan.schedule.end_date
        ));
        stats.weeks_emitted += 1;

        for entry in &plan.entries {
            log.plain(format!(
                "  [DRY RUN] Would create entry: staff={}, day={}, date={}, {}-{}, status={}",
                entry.staff_id,
                entry.day_of_week,
                entry.work_date,
                time::opt_hm(entry.start_time).unwrap_or_else(|| "--:--".into()),
                time::opt_hm(entry.end_time).unwrap_or_else(|| "--:--".into()),
                entry.status.as_str()
            ));
            stats.entries_created += 1;
        }
        Ok(())
    }
}
