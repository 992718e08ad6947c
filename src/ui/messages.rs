//! Coloured console status lines.

use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// Rule line framing section headers, mirrored into the run log.
pub const HEADER_RULE: &str =
    "============================================================";

fn status(color: &str, icon: &str, msg: &str) -> String {
    format!("{color}{BOLD}{icon} {RESET}{msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", status(FG_BLUE, ICON_INFO, &msg.to_string()));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", status(FG_GREEN, ICON_OK, &msg.to_string()));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", status(FG_YELLOW, ICON_WARN, &msg.to_string()));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", status(FG_RED, ICON_ERR, &msg.to_string()));
}

/// Section header framed by rule lines
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}{}{}", FG_BLUE, BOLD, HEADER_RULE, RESET);
    println!("{}{}{}{}", FG_BLUE, BOLD, msg, RESET);
    println!("{}{}{}{}", FG_BLUE, BOLD, HEADER_RULE, RESET);
}
