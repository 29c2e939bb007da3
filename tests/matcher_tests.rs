//! Library-level tests of the START/END pairing state machine.

use chrono::NaiveTime;
use jobmon::core::matcher::{MatchOutcome, Thresholds, match_jobs, match_ordered};
use jobmon::models::anomaly::Anomaly;
use jobmon::models::event_kind::EventKind;
use jobmon::models::log_entry::LogEntry;
use jobmon::models::severity::Severity;

fn t(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).expect("valid time")
}

fn start(time: NaiveTime, desc: &str, pid: i32) -> LogEntry {
    LogEntry::new(time, desc, EventKind::Start, pid)
}

fn end(time: NaiveTime, desc: &str, pid: i32) -> LogEntry {
    LogEntry::new(time, desc, EventKind::End, pid)
}

#[test]
fn empty_input_yields_empty_outputs() {
    let outcome = match_jobs(&[], &Thresholds::default());
    assert!(outcome.jobs.is_empty());
    assert!(outcome.anomalies.is_empty());
}

#[test]
fn well_formed_pair_produces_one_job() {
    let entries = vec![
        start(t(11, 0, 0), "scheduled task 032", 37980),
        end(t(11, 3, 20), "scheduled task 032", 37980),
    ];

    let outcome = match_jobs(&entries, &Thresholds::default());

    assert!(outcome.anomalies.is_empty());
    assert_eq!(outcome.jobs.len(), 1);
    let job = &outcome.jobs[0];
    assert_eq!(job.pid, 37980);
    assert_eq!(job.description, "scheduled task 032");
    assert_eq!(job.start_time, t(11, 0, 0));
    assert_eq!(job.end_time, t(11, 3, 20));
    assert_eq!(job.duration().num_seconds(), 200);
    assert_eq!(job.severity, Severity::Info);
}

#[test]
fn description_is_taken_from_the_start_entry() {
    let entries = vec![
        start(t(9, 0, 0), "nightly backup", 7),
        end(t(9, 1, 0), "something else entirely", 7),
    ];

    let outcome = match_jobs(&entries, &Thresholds::default());
    assert_eq!(outcome.jobs[0].description, "nightly backup");
}

#[test]
fn duplicate_start_is_last_write_wins() {
    // START at t=1, duplicate START at t=2, END at t=5: one job with
    // start=2, plus one DuplicateStart anomaly referencing both starts.
    let entries = vec![
        start(t(10, 0, 1), "first", 7),
        start(t(10, 0, 2), "second", 7),
        end(t(10, 0, 5), "second", 7),
    ];

    let outcome = match_jobs(&entries, &Thresholds::default());

    assert_eq!(outcome.jobs.len(), 1);
    assert_eq!(outcome.jobs[0].start_time, t(10, 0, 2));
    assert_eq!(outcome.jobs[0].end_time, t(10, 0, 5));
    assert_eq!(outcome.jobs[0].description, "second");

    assert_eq!(outcome.anomalies.len(), 1);
    match &outcome.anomalies[0] {
        Anomaly::DuplicateStart { pid, old, new } => {
            assert_eq!(*pid, 7);
            assert_eq!(old.timestamp, t(10, 0, 1));
            assert_eq!(new.timestamp, t(10, 0, 2));
        }
        other => panic!("expected DuplicateStart, got {:?}", other),
    }
}

#[test]
fn unmatched_end_is_reported_and_discarded() {
    let entries = vec![end(t(12, 0, 0), "ghost job", 9)];

    let outcome = match_jobs(&entries, &Thresholds::default());

    assert!(outcome.jobs.is_empty());
    assert_eq!(outcome.anomalies.len(), 1);
    match &outcome.anomalies[0] {
        Anomaly::UnmatchedEnd { pid, event } => {
            assert_eq!(*pid, 9);
            assert_eq!(event.timestamp, t(12, 0, 0));
        }
        other => panic!("expected UnmatchedEnd, got {:?}", other),
    }
}

#[test]
fn end_before_start_discards_pair_and_clears_pending() {
    // In caller order: START at t=10, then END at t=5. The pair is reported
    // and discarded; the START is not re-queued, so a later END for the same
    // PID is unmatched.
    let entries = vec![
        start(t(0, 0, 10), "job", 4),
        end(t(0, 0, 5), "job", 4),
        end(t(0, 0, 20), "job", 4),
    ];

    let outcome = match_ordered(entries, &Thresholds::default());

    assert!(outcome.jobs.is_empty());
    assert_eq!(outcome.anomalies.len(), 2);
    match &outcome.anomalies[0] {
        Anomaly::EndBeforeStart { pid, start, end } => {
            assert_eq!(*pid, 4);
            assert_eq!(start.timestamp, t(0, 0, 10));
            assert_eq!(end.timestamp, t(0, 0, 5));
        }
        other => panic!("expected EndBeforeStart, got {:?}", other),
    }
    assert!(matches!(
        outcome.anomalies[1],
        Anomaly::UnmatchedEnd { pid: 4, .. }
    ));
}

#[test]
fn midnight_wraparound_is_end_before_start_not_negative_duration() {
    // Timestamps carry no date, so a job crossing midnight looks backwards
    // in arrival order. It must surface as an anomaly, never as a job with
    // negative duration.
    let entries = vec![
        start(t(23, 59, 0), "midnight job", 11),
        end(t(0, 1, 0), "midnight job", 11),
    ];

    let outcome = match_ordered(entries, &Thresholds::default());

    assert!(outcome.jobs.is_empty());
    assert_eq!(outcome.anomalies.len(), 1);
    assert!(matches!(
        outcome.anomalies[0],
        Anomaly::EndBeforeStart { pid: 11, .. }
    ));
}

#[test]
fn sorted_path_turns_wraparound_into_unmatched_pair() {
    // Through the sorting interface the 00:01 END is processed before the
    // 23:59 START: an unmatched END plus an orphaned START, still zero jobs.
    let entries = vec![
        start(t(23, 59, 0), "midnight job", 11),
        end(t(0, 1, 0), "midnight job", 11),
    ];

    let outcome = match_jobs(&entries, &Thresholds::default());

    assert!(outcome.jobs.is_empty());
    assert_eq!(outcome.anomalies.len(), 2);
    assert!(matches!(
        outcome.anomalies[0],
        Anomaly::UnmatchedEnd { pid: 11, .. }
    ));
    assert!(matches!(
        outcome.anomalies[1],
        Anomaly::UnmatchedStart { pid: 11, .. }
    ));
}

#[test]
fn equal_timestamp_pair_keeps_input_order_and_completes() {
    // With identical timestamps the stable sort keeps input order: END is
    // seen while the START is pending and end >= start, so this is a
    // zero-duration job.
    let entries = vec![
        start(t(8, 0, 0), "instant", 3),
        end(t(8, 0, 0), "instant", 3),
    ];

    let outcome = match_jobs(&entries, &Thresholds::default());
    assert_eq!(outcome.jobs.len(), 1);
    assert_eq!(outcome.jobs[0].duration().num_seconds(), 0);
    assert!(outcome.anomalies.is_empty());
}

#[test]
fn orphaned_start_is_reported() {
    let entries = vec![start(t(14, 30, 0), "never ends", 3)];

    let outcome = match_jobs(&entries, &Thresholds::default());

    assert!(outcome.jobs.is_empty());
    assert_eq!(outcome.anomalies.len(), 1);
    match &outcome.anomalies[0] {
        Anomaly::UnmatchedStart { pid, start } => {
            assert_eq!(*pid, 3);
            assert_eq!(start.timestamp, t(14, 30, 0));
        }
        other => panic!("expected UnmatchedStart, got {:?}", other),
    }
}

#[test]
fn orphans_are_emitted_in_pid_order() {
    let entries = vec![
        start(t(9, 0, 0), "c", 30),
        start(t(9, 0, 1), "a", 10),
        start(t(9, 0, 2), "b", 20),
    ];

    let outcome = match_jobs(&entries, &Thresholds::default());
    let pids: Vec<i32> = outcome.anomalies.iter().map(|a| a.pid()).collect();
    assert_eq!(pids, vec![10, 20, 30]);
}

#[test]
fn severity_thresholds_with_exclusive_upper_boundary() {
    let thresholds = Thresholds::default(); // 5 / 10 minutes
    let cases = vec![
        (t(9, 4, 59), Severity::Info),     // under warning
        (t(9, 5, 0), Severity::Info),      // exactly warning -> Info
        (t(9, 5, 1), Severity::Warning),   // just over warning
        (t(9, 10, 0), Severity::Warning),  // exactly error -> Warning
        (t(9, 10, 1), Severity::Error),    // just over error
    ];

    for (end_time, expected) in cases {
        let entries = vec![start(t(9, 0, 0), "job", 1), end(end_time, "job", 1)];
        let outcome = match_jobs(&entries, &thresholds);
        assert_eq!(
            outcome.jobs[0].severity, expected,
            "end at {} should classify as {:?}",
            end_time, expected
        );
    }
}

#[test]
fn custom_thresholds_are_honored() {
    let thresholds = Thresholds::from_minutes(1, 2);
    let entries = vec![
        start(t(9, 0, 0), "slow", 1),
        end(t(9, 3, 0), "slow", 1), // 3 min > 2 min error threshold
    ];

    let outcome = match_jobs(&entries, &thresholds);
    assert_eq!(outcome.jobs[0].severity, Severity::Error);
}

#[test]
fn input_is_sorted_before_pairing() {
    // END appears before START in the file but carries a later timestamp.
    let entries = vec![
        end(t(10, 2, 0), "reordered", 55),
        start(t(10, 0, 0), "reordered", 55),
    ];

    let outcome = match_jobs(&entries, &Thresholds::default());
    assert_eq!(outcome.jobs.len(), 1);
    assert!(outcome.anomalies.is_empty());
}

#[test]
fn permuting_input_yields_same_jobs() {
    let a = start(t(9, 0, 0), "one", 1);
    let b = end(t(9, 1, 0), "one", 1);
    let c = start(t(9, 2, 0), "two", 2);
    let d = end(t(9, 8, 0), "two", 2);

    let baseline = match_jobs(&[a.clone(), b.clone(), c.clone(), d.clone()], &Thresholds::default());

    let permutations: Vec<Vec<LogEntry>> = vec![
        vec![d.clone(), c.clone(), b.clone(), a.clone()],
        vec![b.clone(), d.clone(), a.clone(), c.clone()],
        vec![c.clone(), a.clone(), d.clone(), b.clone()],
    ];

    for perm in permutations {
        let outcome = match_jobs(&perm, &Thresholds::default());
        assert_eq!(outcome.jobs, baseline.jobs);
    }
}

#[test]
fn matcher_is_pure_and_idempotent() {
    let entries = vec![
        start(t(9, 0, 0), "one", 1),
        start(t(9, 0, 5), "dup", 1),
        end(t(9, 1, 0), "one", 1),
        end(t(9, 2, 0), "ghost", 2),
        start(t(9, 3, 0), "orphan", 3),
    ];
    let snapshot = entries.clone();

    let first = match_jobs(&entries, &Thresholds::default());
    let second = match_jobs(&entries, &Thresholds::default());

    assert_eq!(first, second);
    // Input must not be mutated.
    assert_eq!(entries, snapshot);
}

#[test]
fn jobs_plus_anomalies_never_exceed_starts() {
    let entries = vec![
        start(t(9, 0, 0), "a", 1),
        start(t(9, 0, 1), "a-dup", 1),
        end(t(9, 1, 0), "a", 1),
        start(t(9, 2, 0), "b", 2),
        end(t(9, 4, 0), "c", 3), // unmatched
        start(t(9, 5, 0), "d", 4),
        end(t(9, 6, 0), "d", 4),
    ];
    let starts = entries.iter().filter(|e| e.kind.is_start()).count();

    let outcome = match_jobs(&entries, &Thresholds::default());

    let orphans = outcome
        .anomalies
        .iter()
        .filter(|a| matches!(a, Anomaly::UnmatchedStart { .. }))
        .count();
    let discarded = outcome
        .anomalies
        .iter()
        .filter(|a| matches!(a, Anomaly::EndBeforeStart { .. }))
        .count();

    assert!(outcome.jobs.len() + orphans + discarded <= starts);
    for job in &outcome.jobs {
        assert!(job.end_time >= job.start_time);
    }
}

#[test]
fn jobs_are_returned_in_completion_order() {
    // PID 2 finishes before PID 1 even though it started later.
    let entries = vec![
        start(t(9, 0, 0), "long", 1),
        start(t(9, 1, 0), "short", 2),
        end(t(9, 2, 0), "short", 2),
        end(t(9, 9, 0), "long", 1),
    ];

    let outcome = match_jobs(&entries, &Thresholds::default());
    let pids: Vec<i32> = outcome.jobs.iter().map(|j| j.pid).collect();
    assert_eq!(pids, vec![2, 1]);
}

#[test]
fn outcome_default_is_empty() {
    let outcome = MatchOutcome::default();
    assert!(outcome.jobs.is_empty() && outcome.anomalies.is_empty());
}
