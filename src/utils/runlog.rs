//! Append-only run log: every status line the pipeline prints is also
//! written, timestamped and color-stripped, to a plain text file so a run
//! can be audited afterwards.

use crate::ui::messages;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

pub struct RunLog {
    path: Option<PathBuf>,
}

impl RunLog {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Log without touching any file (dry runs against read-only dirs).
    pub fn disabled() -> Self {
        Self { path: None }
    }

    fn append(&self, msg: &str) {
        if let Some(path) = &self.path {
            let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
            let line = format!("[{}] {}\n", timestamp, strip_ansi(msg));
            // A failed log write must never kill the run
            if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(path) {
                let _ = f.write_all(line.as_bytes());
            }
        }
    }

    pub fn plain<T: fmt::Display>(&self, msg: T) {
        let msg = msg.to_string();
        println!("{}", msg);
        self.append(&msg);
    }

    pub fn info<T: fmt::Display>(&self, msg: T) {
        let msg = msg.to_string();
        messages::info(&msg);
        self.append(&msg);
    }

    pub fn success<T: fmt::Display>(&self, msg: T) {
        let msg = msg.to_string();
        messages::success(&msg);
        self.append(&msg);
    }

    pub fn warning<T: fmt::Display>(&self, msg: T) {
        let msg = msg.to_string();
        messages::warning(&msg);
        self.append(&msg);
    }

    pub fn error<T: fmt::Display>(&self, msg: T) {
        let msg = msg.to_string();
        messages::error(&msg);
        self.append(&msg);
    }

    pub fn header<T: fmt::Display>(&self, msg: T) {
        let msg = msg.to_string();
        messages::header(&msg);
        self.append(messages::HEADER_RULE);
        self.append(&msg);
        self.append(messages::HEADER_RULE);
    }
}

/// Remove ANSI escape sequences before writing to the log file.
fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").to_string()
}
