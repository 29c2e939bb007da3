//! Formatting utilities used for CLI and export outputs.

use crate::models::severity::Severity;

/// Label and ANSI color for a job severity, used in report output.
pub fn describe_severity(sev: Severity) -> (&'static str, &'static str) {
    match sev {
        Severity::Info => ("INFO", "\x1b[32m"),
        Severity::Warning => ("WARNING", "\x1b[33m"),
        Severity::Error => ("ERROR", "\x1b[31;1m"),
    }
}

pub fn colorize(s: &str, color: &str) -> String {
    format!("{}{}\x1b[0m", color, s)
}
