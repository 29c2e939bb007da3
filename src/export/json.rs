use super::model::JobExport;
use crate::errors::{AppError, AppResult};
use crate::models::anomaly::Anomaly;
use serde::Serialize;

#[derive(Serialize)]
struct JsonDocument<'a> {
    jobs: &'a [JobExport],
    anomalies: &'a [Anomaly],
}

/// Write completed jobs as pretty JSON. With `anomalies`, the document is an
/// object with `jobs` and `anomalies` keys; otherwise a plain job array.
pub fn write_json(path: &str, jobs: &[JobExport], anomalies: Option<&[Anomaly]>) -> AppResult<()> {
    let json = match anomalies {
        Some(anomalies) => {
            serde_json::to_string_pretty(&JsonDocument { jobs, anomalies })
                .map_err(|e| AppError::Export(e.to_string()))?
        }
        None => {
            serde_json::to_string_pretty(jobs).map_err(|e| AppError::Export(e.to_string()))?
        }
    };
    std::fs::write(path, json)?;
    Ok(())
}
