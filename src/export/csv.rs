use super::model::{JobExport, get_headers};
use crate::errors::{AppError, AppResult};
use csv::Writer;

/// Write completed jobs as CSV to the given file.
pub fn write_csv(path: &str, jobs: &[JobExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record(get_headers())
        .map_err(|e| AppError::Export(e.to_string()))?;

    for job in jobs {
        wtr.write_record(&[
            job.pid.to_string(),
            job.description.clone(),
            job.start.clone(),
            job.end.clone(),
            job.duration.clone(),
            job.duration_seconds.to_string(),
            job.severity.clone(),
        ])
        .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
