//! SQL script sink: one script of guarded inserts, safe to re-run.
//!
//! Every statement checks its natural key first (weekly schedules by
//! (year, week_number), entries by (weekly_schedule_id, staff_id,
//! day_of_week)), so applying the script to an already-populated store is
//! a no-op.

use super::ScheduleSink;
use crate::errors::AppResult;
use crate::models::{RunStats, WeekPlan};
use crate::utils::RunLog;
use crate::utils::time;
use chrono::NaiveTime;
use std::fs;
use std::path::PathBuf;

pub struct SqlScriptSink {
    out_path: PathBuf,
    plans: Vec<WeekPlan>,
}

impl SqlScriptSink {
    pub fn new(out_path: PathBuf) -> Self {
        Self {
            out_path,
            plans: Vec::new(),
        }
    }

    fn render(&self) -> String {
        let total_entries: usize = self.plans.iter().map(|p| p.entries.len()).sum();
        let rule = "-- ".to_string() + &"=".repeat(76);

        let mut out = String::new();
        out.push_str(&rule);
        out.push_str("\n-- Weekly schedule import\n");
        out.push_str(&rule);
        out.push('\n');
        out.push_str("-- Guarded inserts: re-running this script is a no-op.\n");
        out.push_str(&format!("-- Total weeks:   {}\n", self.plans.len()));
        out.push_str(&format!("-- Total entries: {}\n", total_entries));
        for plan in &self.plans {
            out.push_str(&format!(
                "-- Source: {} -> week {}/{}\n",
                plan.schedule.source_filename,
                plan.schedule.week.iso_week,
                plan.schedule.week.iso_year
            ));
        }
        out.push_str(&rule);
        out.push_str("\n\n");

        for plan in &self.plans {
            let week = &plan.schedule.week;
            out.push_str(&format!(
                "-- Week {}/{}: {} - {}\n",
                week.iso_week, week.iso_year, plan.schedule.start_date, plan.schedule.end_date
            ));
            out.push_str(
                "INSERT INTO weekly_schedules (year, week_number, start_date, end_date, notes, created_by)\n",
            );
            out.push_str("SELECT * FROM (\n");
            out.push_str(&format!("    SELECT {} as year,\n", week.iso_year));
            out.push_str(&format!("           {} as week_number,\n", week.iso_week));
            out.push_str(&format!(
                "           '{}' as start_date,\n",
                plan.schedule.start_date
            ));
            out.push_str(&format!(
                "           '{}' as end_date,\n",
                plan.schedule.end_date
            ));
            out.push_str(&format!(
                "           {} as notes,\n",
                quote(&plan.schedule.notes())
            ));
            out.push_str("           'import' as created_by\n");
            out.push_str(") AS tmp\n");
            out.push_str(&format!(
                "WHERE NOT EXISTS (SELECT 1 FROM weekly_schedules WHERE year = {} AND week_number = {});\n\n",
                week.iso_year, week.iso_week
            ));

            for entry in &plan.entries {
                out.push_str(
                    "INSERT INTO schedule_entries (weekly_schedule_id, staff_id, day_of_week, work_date, start_time, end_time, status, notes, created_by)\n",
                );
                out.push_str(&format!(
                    "SELECT ws.id, {}, {}, '{}', {}, {}, '{}', {}, 'import'\n",
                    entry.staff_id,
                    entry.day_of_week,
                    entry.work_date,
                    time_value(entry.start_time),
                    time_value(entry.end_time),
                    entry.status.as_str(),
                    opt_quote(entry.notes.as_deref()),
                ));
                out.push_str("FROM weekly_schedules ws\n");
                out.push_str(&format!(
                    "WHERE ws.year = {} AND ws.week_number = {}\n",
                    week.iso_year, week.iso_week
                ));
                out.push_str(&format!(
                    "AND NOT EXISTS (SELECT 1 FROM schedule_entries WHERE weekly_schedule_id = ws.id AND staff_id = {} AND day_of_week = {});\n\n",
                    entry.staff_id, entry.day_of_week
                ));
            }
        }

        out
    }
}

impl ScheduleSink for SqlScriptSink {
    fn emit(&mut self, plan: &WeekPlan, stats: &mut RunStats, _log: &RunLog) -> AppResult<()> {
        stats.weeks_emitted += 1;
        stats.entries_created += plan.entries.len() as u32;
        self.plans.push(plan.clone());
        Ok(())
    }

    fn finish(&mut self, log: &RunLog) -> AppResult<()> {
        fs::write(&self.out_path, self.render())?;
        log.success(format!("SQL script written: {}", self.out_path.display()));
        Ok(())
    }
}

/// Single-quote a string for SQL, doubling embedded quotes.
fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

fn opt_quote(text: Option<&str>) -> String {
    match text {
        Some(t) => quote(t),
        None => "NULL".to_string(),
    }
}

fn time_value(t: Option<NaiveTime>) -> String {
    match t {
        Some(t) => format!("'{}'", time::hms(t)),
        None => "NULL".to_string(),
    }
}
