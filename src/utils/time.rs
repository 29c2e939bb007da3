//! Time utilities: parsing HH:MM:SS, duration formatting.

use chrono::{Duration, NaiveTime};

/// Parse a time-of-day field. The log format writes `HH:MM:SS`; `HH:MM` is
/// accepted as well (seconds default to zero).
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

/// Format a job duration as total minutes and seconds, e.g. "07:42".
/// Durations of an hour or more keep accumulating minutes ("73:05").
pub fn format_duration(d: Duration) -> String {
    let secs = d.num_seconds().max(0);
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
