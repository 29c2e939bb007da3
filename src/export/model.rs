use crate::models::job::JobRecord;
use crate::utils::time::format_duration;
use serde::Serialize;

/// Flat row model for exporting completed jobs.
#[derive(Serialize, Clone, Debug)]
pub struct JobExport {
    pub pid: i32,
    pub description: String,
    pub start: String,
    pub end: String,
    pub duration: String,
    pub duration_seconds: i64,
    pub severity: String,
}

impl From<&JobRecord> for JobExport {
    fn from(job: &JobRecord) -> Self {
        Self {
            pid: job.pid,
            description: job.description.clone(),
            start: job.start_str(),
            end: job.end_str(),
            duration: format_duration(job.duration()),
            duration_seconds: job.duration().num_seconds(),
            severity: job.severity.to_string(),
        }
    }
}

/// Header row for CSV.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "pid",
        "description",
        "start",
        "end",
        "duration",
        "duration_seconds",
        "severity",
    ]
}
