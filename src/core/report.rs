//! One-shot report: decode the log, run the matcher, print the results.

use crate::config::Config;
use crate::core::decoder;
use crate::core::matcher::{self, MatchOutcome, Thresholds};
use crate::errors::AppResult;
use crate::models::job::JobRecord;
use crate::models::severity::Severity;
use crate::ui::messages;
use crate::utils::formatting::{colorize, describe_severity};
use crate::utils::path::expand_tilde;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_duration;

/// High-level business logic for the `report` command (also used per
/// iteration by `watch`).
pub struct ReportLogic;

impl ReportLogic {
    pub fn run(cfg: &Config, anomalies_only: bool, details: bool) -> AppResult<MatchOutcome> {
        let log_path = expand_tilde(&cfg.log_file);
        let log_path = log_path.to_string_lossy();

        let parsed = decoder::parse_log_file(&log_path)?;
        let thresholds = Thresholds::from_minutes(
            cfg.warning_threshold_minutes,
            cfg.error_threshold_minutes,
        );
        let outcome = matcher::match_jobs(&parsed.entries, &thresholds);

        if !anomalies_only {
            println!("Job Report ({})", log_path);
            if outcome.jobs.is_empty() {
                println!("No completed jobs found.");
            } else {
                println!("{}", render_jobs_table(&outcome.jobs));
            }
            print_severity_summary(&outcome.jobs);
        }

        for anomaly in &outcome.anomalies {
            messages::warning(anomaly.describe());
        }

        if details {
            for skip in &parsed.skipped {
                messages::info(format!(
                    "Skipped line {}: {} -> '{}'",
                    skip.line_no, skip.reason, skip.line
                ));
            }
        }

        Ok(outcome)
    }
}

pub fn render_jobs_table(jobs: &[JobRecord]) -> String {
    let mut table = Table::new(vec![
        Column::new("PID", 8),
        Column::new("Description", 28),
        Column::new("Start", 9),
        Column::new("End", 9),
        Column::new("Duration", 9),
        Column::new("Severity", 8),
    ]);

    for job in jobs {
        table.add_row(vec![
            job.pid.to_string(),
            job.description.clone(),
            job.start_str(),
            job.end_str(),
            format_duration(job.duration()),
            job.severity.to_string(),
        ]);
    }

    table.render()
}

fn print_severity_summary(jobs: &[JobRecord]) {
    let count = |s: Severity| jobs.iter().filter(|j| j.severity == s).count();
    let (infos, warnings, errors) = (
        count(Severity::Info),
        count(Severity::Warning),
        count(Severity::Error),
    );

    println!(
        "{} jobs matched ({} info, {} warning, {} error)",
        jobs.len(),
        infos,
        warnings,
        errors
    );

    // Highlight threshold breaches; severities are informational and never
    // change the exit code.
    if errors > 0 {
        let (label, color) = describe_severity(Severity::Error);
        println!(
            "{}",
            colorize(
                &format!("{} job(s) exceeded the {} threshold", errors, label),
                color
            )
        );
    }
    if warnings > 0 {
        let (label, color) = describe_severity(Severity::Warning);
        println!(
            "{}",
            colorize(
                &format!("{} job(s) exceeded the {} threshold", warnings, label),
                color
            )
        );
    }
}
