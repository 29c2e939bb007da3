use super::severity::Severity;
use chrono::{Duration, NaiveTime};
use serde::Serialize;

/// A completed job, built when a START is matched with its END.
/// Immutable once created; `end_time >= start_time` is guaranteed by the
/// matcher.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JobRecord {
    pub pid: i32,
    pub description: String, // taken from the START entry
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub severity: Severity,
}

impl JobRecord {
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    pub fn start_str(&self) -> String {
        self.start_time.format("%H:%M:%S").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_time.format("%H:%M:%S").to_string()
    }
}
