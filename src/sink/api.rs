//! REST API sink: upsert weekly schedules, create entries, skip duplicates.

use super::ScheduleSink;
use crate::errors::{AppError, AppResult};
use crate::models::{RunStats, ScheduleEntry, WeekPlan, WeeklySchedule};
use crate::utils::RunLog;
use crate::utils::time;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::{Value, json};
use std::thread::sleep;
use std::time::Duration;

pub struct ApiSink {
    client: Client,
    base_url: String,
    token: String,
    /// Minimum spacing between entry-creation calls.
    entry_delay: Duration,
}

impl ApiSink {
    /// Authenticate once and hold the bearer token for the whole run.
    /// A failed login is fatal.
    pub fn login(
        base_url: &str,
        username: &str,
        password: &str,
        entry_delay_ms: u64,
    ) -> AppResult<Self> {
        let client = Client::new();
        let resp = client
            .post(format!("{}/auth/login", base_url))
            .json(&json!({ "username": username, "password": password }))
            .send()?;

        if !resp.status().is_success() {
            return Err(AppError::Auth(format!("login returned HTTP {}", resp.status())));
        }

        let body: Value = resp.json()?;
        let token = body
            .get("token")
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::Auth("login response carried no token".to_string()))?
            .to_string();

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            entry_delay: Duration::from_millis(entry_delay_ms),
        })
    }

    /// Create the weekly schedule or reuse the existing one for that week.
    fn ensure_week(&self, schedule: &WeeklySchedule, log: &RunLog) -> AppResult<Value> {
        let resp = self
            .client
            .get(format!(
                "{}/weekly-schedules/{}/{}",
                self.base_url, schedule.week.iso_year, schedule.week.iso_week
            ))
            .bearer_auth(&self.token)
            .send()?;

        if resp.status() == StatusCode::OK {
            let body: Value = resp.json()?;
            log.info(format!(
                "Weekly schedule {}/W{} already exists: id {}",
                schedule.week.iso_year,
                schedule.week.iso_week,
                body.get("id").cloned().unwrap_or(Value::Null)
            ));
            return body
                .get("id")
                .cloned()
                .ok_or_else(|| AppError::Sink("weekly schedule without id".to_string()));
        }

        let resp = self
            .client
            .post(format!("{}/weekly-schedules", self.base_url))
            .bearer_auth(&self.token)
            .json(&json!({
                "year": schedule.week.iso_year,
                "weekNumber": schedule.week.iso_week,
                "notes": schedule.notes(),
            }))
            .send()?;

        if !resp.status().is_success() {
            return Err(AppError::Sink(format!(
                "creating weekly schedule {}/W{} returned HTTP {}",
                schedule.week.iso_year,
                schedule.week.iso_week,
                resp.status()
            )));
        }

        let body: Value = resp.json()?;
        log.success(format!(
            "Created weekly schedule {}/W{}: id {}",
            schedule.week.iso_year,
            schedule.week.iso_week,
            body.get("id").cloned().unwrap_or(Value::Null)
        ));
        body.get("id")
            .cloned()
            .ok_or_else(|| AppError::Sink("weekly schedule without id".to_string()))
    }

    /// Create one entry. Created → true, duplicate → false (skipped),
    /// anything else is reported by the caller as a failed entry.
    fn create_entry(&self, week_id: &Value, entry: &ScheduleEntry) -> AppResult<bool> {
        let resp = self
            .client
            .post(format!("{}/schedules/entries", self.base_url))
            .bearer_auth(&self.token)
            .json(&json!({
                "weeklyScheduleId": week_id,
                "staffId": entry.staff_id,
                "dayOfWeek": entry.day_of_week,
                "workDate": entry.work_date.format("%Y-%m-%d").to_string(),
                "startTime": time::opt_hm(entry.start_time),
                "endTime": time::opt_hm(entry.end_time),
                "status": entry.status.as_str(),
                "notes": entry.notes,
            }))
            .send()?;

        match resp.status() {
            StatusCode::CREATED => Ok(true),
            StatusCode::CONFLICT => Ok(false),
            other => Err(AppError::Sink(format!("entry returned HTTP {}", other))),
        }
    }
}

impl ScheduleSink for ApiSink {
    fn emit(&mut self, plan: &WeekPlan, stats: &mut RunStats, log: &RunLog) -> AppResult<()> {
        let week_id = match self.ensure_week(&plan.schedule, log) {
            Ok(id) => id,
            Err(e) => {
                // The week (and all its entries) fails; the run continues.
                log.error(format!("{}", e));
                stats.weeks_failed += 1;
                return Ok(());
            }
        };
        stats.weeks_emitted += 1;

        let mut created = 0u32;
        for entry in &plan.entries {
            match self.create_entry(&week_id, entry) {
                Ok(true) => {
                    created += 1;
                    stats.entries_created += 1;
                }
                Ok(false) => stats.entries_skipped += 1,
                Err(e) => {
                    log.error(format!(
                        "Entry staff={} day={}: {}",
                        entry.staff_id, entry.day_of_week, e
                    ));
                    stats.entries_failed += 1;
                }
            }
            sleep(self.entry_delay);
        }

        log.success(format!(
            "Week {}/W{}: {} entries created",
            plan.schedule.week.iso_year, plan.schedule.week.iso_week, created
        ));
        Ok(())
    }
}
