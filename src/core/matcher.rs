//! Job matcher: pairs START/END log entries per PID into completed jobs.
//!
//! Two entry points share one state machine:
//!
//! - [`match_jobs`] stable-sorts a copy of the input by timestamp and is the
//!   batch interface used by the report and export paths. Same-timestamp
//!   entries keep their input order, which decides which of several
//!   equal-time STARTs for a PID is current.
//! - [`match_ordered`] trusts the caller's ordering (e.g. an append-only log
//!   already in arrival order). Because timestamps are time-of-day only, a
//!   job spanning midnight shows up here as an END that precedes its START;
//!   that pair is reported as `EndBeforeStart` and discarded, never a silent
//!   negative duration.
//!
//! No data condition aborts a batch: duplicate starts, unmatched ends,
//! end-before-start pairs and orphaned starts are all reported as anomaly
//! values and processing continues.

use crate::models::anomaly::Anomaly;
use crate::models::job::JobRecord;
use crate::models::log_entry::LogEntry;
use crate::models::severity::Severity;
use chrono::Duration;
use std::collections::HashMap;

/// Warning/error duration thresholds used to classify completed jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub warning: Duration,
    pub error: Duration,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warning: Duration::minutes(5),
            error: Duration::minutes(10),
        }
    }
}

impl Thresholds {
    pub fn from_minutes(warning: i64, error: i64) -> Self {
        Self {
            warning: Duration::minutes(warning),
            error: Duration::minutes(error),
        }
    }

    /// Classify a job duration. Boundaries are inclusive on the lower side:
    /// a duration exactly equal to a threshold takes the milder severity.
    pub fn classify(&self, duration: Duration) -> Severity {
        if duration > self.error {
            Severity::Error
        } else if duration > self.warning {
            Severity::Warning
        } else {
            Severity::Info
        }
    }
}

/// Result of one matcher invocation: completed jobs in completion order and
/// anomalies in detection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    pub jobs: Vec<JobRecord>,
    pub anomalies: Vec<Anomaly>,
}

/// Sort by timestamp (stable), then pair. The input slice is not mutated.
pub fn match_jobs(entries: &[LogEntry], thresholds: &Thresholds) -> MatchOutcome {
    let mut sorted = entries.to_vec();
    sorted.sort_by_key(|e| e.timestamp);
    match_ordered(sorted, thresholds)
}

/// Pair entries in the given order. Callers that want chronological pairing
/// should go through [`match_jobs`].
pub fn match_ordered(entries: Vec<LogEntry>, thresholds: &Thresholds) -> MatchOutcome {
    let mut jobs = Vec::with_capacity(entries.len() / 2);
    let mut anomalies = Vec::new();
    // Pending table: at most one unmatched START per PID.
    let mut pending: HashMap<i32, LogEntry> = HashMap::new();

    for entry in entries {
        if entry.kind.is_start() {
            // Last-write-wins: a duplicate START replaces the pending one.
            if let Some(old) = pending.insert(entry.pid, entry.clone()) {
                anomalies.push(Anomaly::DuplicateStart {
                    pid: entry.pid,
                    old,
                    new: entry,
                });
            }
            continue;
        }

        let Some(start) = pending.remove(&entry.pid) else {
            anomalies.push(Anomaly::UnmatchedEnd {
                pid: entry.pid,
                event: entry,
            });
            continue;
        };

        if entry.timestamp < start.timestamp {
            // Apparent negative duration: bad data, or a midnight-spanning
            // job (timestamps have no date). Drop the pair; the START is not
            // re-queued.
            anomalies.push(Anomaly::EndBeforeStart {
                pid: entry.pid,
                start,
                end: entry,
            });
            continue;
        }

        let severity = thresholds.classify(entry.timestamp - start.timestamp);
        jobs.push(JobRecord {
            pid: entry.pid,
            description: start.description,
            start_time: start.timestamp,
            end_time: entry.timestamp,
            severity,
        });
    }

    // Whatever is still pending never saw an END. Emit orphans in PID order
    // so the output is deterministic.
    let mut orphans: Vec<LogEntry> = pending.into_values().collect();
    orphans.sort_by_key(|e| e.pid);
    for start in orphans {
        anomalies.push(Anomaly::UnmatchedStart {
            pid: start.pid,
            start,
        });
    }

    MatchOutcome { jobs, anomalies }
}
