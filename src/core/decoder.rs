//! Log-line decoder: turns the on-disk job log into `LogEntry` values.
//!
//! Line format: four comma-separated fields, `HH:MM:SS,description,MARKER,PID`.
//! Lines that cannot be decoded are skipped, never fatal; each skip is
//! returned as a `SkippedLine` diagnostic so the caller decides how to
//! surface it. Only a missing file is an error.

use crate::errors::{AppError, AppResult};
use crate::models::event_kind::EventKind;
use crate::models::log_entry::LogEntry;
use crate::utils::time::parse_time;
use std::fs;
use std::path::Path;

/// A line the decoder could not turn into a `LogEntry`, with the reason why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line_no: usize, // 1-based
    pub reason: String,
    pub line: String,
}

#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub entries: Vec<LogEntry>,
    pub skipped: Vec<SkippedLine>,
}

/// Decode a single log line. `Err` carries the skip reason.
pub fn decode_line(line: &str) -> Result<LogEntry, String> {
    if line.trim().is_empty() {
        return Err("empty line".to_string());
    }

    // Limit to 4 parts so only the first three commas are structural.
    let parts: Vec<&str> = line.splitn(4, ',').collect();
    if parts.len() != 4 {
        return Err(format!("expected 4 fields, found {}", parts.len()));
    }

    let timestamp = parse_time(parts[0].trim())
        .ok_or_else(|| format!("invalid timestamp '{}'", parts[0].trim()))?;

    // Empty descriptions are legal; the entry is still usable for pairing.
    let description = parts[1].trim();

    let kind = EventKind::from_marker(parts[2])
        .ok_or_else(|| format!("unknown marker '{}'", parts[2].trim()))?;

    let pid: i32 = parts[3]
        .trim()
        .parse()
        .map_err(|_| format!("invalid PID '{}'", parts[3].trim()))?;

    Ok(LogEntry::new(timestamp, description, kind, pid))
}

/// Read and decode a whole log file. Undecodable lines become `SkippedLine`
/// diagnostics in the outcome; a missing file is the only failure.
pub fn parse_log_file(path: &str) -> AppResult<ParseOutcome> {
    if path.trim().is_empty() {
        return Err(AppError::Other("log file path must be provided".to_string()));
    }
    if !Path::new(path).exists() {
        return Err(AppError::LogNotFound(path.to_string()));
    }

    let content = fs::read_to_string(path)?;

    let mut outcome = ParseOutcome::default();
    for (idx, line) in content.lines().enumerate() {
        match decode_line(line) {
            Ok(entry) => outcome.entries.push(entry),
            Err(reason) => outcome.skipped.push(SkippedLine {
                line_no: idx + 1,
                reason,
                line: line.to_string(),
            }),
        }
    }

    Ok(outcome)
}
