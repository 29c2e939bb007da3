use super::event_kind::EventKind;
use chrono::NaiveTime;
use serde::Serialize;

/// A single decoded record from the job log.
///
/// The source format carries a time-of-day only (no date), so two entries on
/// opposite sides of midnight compare "backwards". The matcher reports such
/// pairs as `EndBeforeStart` anomalies instead of producing negative
/// durations.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: NaiveTime, // ⇔ field 1 ("HH:MM:SS")
    pub description: String,  // ⇔ field 2 (free text, may be empty)
    pub kind: EventKind,      // ⇔ field 3 ('START' | 'END')
    pub pid: i32,             // ⇔ field 4 (integer id)
}

impl LogEntry {
    pub fn new(timestamp: NaiveTime, description: &str, kind: EventKind, pid: i32) -> Self {
        Self {
            timestamp,
            description: description.to_string(),
            kind,
            pid,
        }
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}
