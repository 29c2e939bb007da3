use super::model::JobExport;
use super::{ExportFormat, notify_export_success};
use crate::config::Config;
use crate::core::decoder;
use crate::core::matcher::{self, Thresholds};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use std::path::Path;

/// High-level business logic for the `export` command.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        cfg: &Config,
        format: &ExportFormat,
        file: &str,
        force: bool,
        include_anomalies: bool,
    ) -> AppResult<()> {
        let out_path = Path::new(file);
        if out_path.exists() && !force {
            return Err(AppError::Export(format!(
                "File '{}' already exists (use --force to overwrite)",
                file
            )));
        }
        if include_anomalies && matches!(format, ExportFormat::Csv) {
            return Err(AppError::Export(
                "anomalies are only included in JSON exports".to_string(),
            ));
        }

        let log_path = expand_tilde(&cfg.log_file);
        let parsed = decoder::parse_log_file(&log_path.to_string_lossy())?;
        let thresholds = Thresholds::from_minutes(
            cfg.warning_threshold_minutes,
            cfg.error_threshold_minutes,
        );
        let outcome = matcher::match_jobs(&parsed.entries, &thresholds);

        let jobs: Vec<JobExport> = outcome.jobs.iter().map(JobExport::from).collect();

        match format {
            ExportFormat::Csv => super::csv::write_csv(file, &jobs)?,
            ExportFormat::Json => {
                let anomalies = include_anomalies.then_some(outcome.anomalies.as_slice());
                super::json::write_json(file, &jobs, anomalies)?;
            }
        }

        notify_export_success(format.as_str(), out_path);
        Ok(())
    }
}
