use super::log_entry::LogEntry;
use serde::Serialize;

/// A structured, non-fatal report of a pairing irregularity.
///
/// Anomalies are data, not errors: the matcher emits them alongside the
/// completed jobs and keeps processing the batch. Each variant carries the
/// entries involved so it can be printed without re-deriving matcher state.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum Anomaly {
    /// A second START for a PID that already had a pending START.
    /// Policy: last-write-wins, the old START is dropped.
    DuplicateStart {
        pid: i32,
        old: LogEntry,
        new: LogEntry,
    },
    /// An END with no pending START for its PID.
    UnmatchedEnd { pid: i32, event: LogEntry },
    /// A START/END pair whose END precedes its START; both are discarded.
    EndBeforeStart {
        pid: i32,
        start: LogEntry,
        end: LogEntry,
    },
    /// A START still pending when the batch ended.
    UnmatchedStart { pid: i32, start: LogEntry },
}

impl Anomaly {
    pub fn pid(&self) -> i32 {
        match self {
            Anomaly::DuplicateStart { pid, .. }
            | Anomaly::UnmatchedEnd { pid, .. }
            | Anomaly::EndBeforeStart { pid, .. }
            | Anomaly::UnmatchedStart { pid, .. } => *pid,
        }
    }

    /// One-line human-readable description used by the report output.
    pub fn describe(&self) -> String {
        match self {
            Anomaly::DuplicateStart { pid, old, new } => format!(
                "Duplicate START for PID {} ('{}') at {}; previous START at {} dropped",
                pid,
                new.description,
                new.time_str(),
                old.time_str()
            ),
            Anomaly::UnmatchedEnd { pid, event } => format!(
                "Unmatched END for PID {} ('{}') at {}",
                pid,
                event.description,
                event.time_str()
            ),
            Anomaly::EndBeforeStart { pid, start, end } => format!(
                "END before START for PID {} ('{}'): start={}, end={}; pair discarded",
                pid,
                start.description,
                start.time_str(),
                end.time_str()
            ),
            Anomaly::UnmatchedStart { pid, start } => format!(
                "No matching END for PID {} ('{}') started at {}",
                pid,
                start.description,
                start.time_str()
            ),
        }
    }
}
