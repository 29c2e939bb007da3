use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::watch::{WatchOptions, run_watch};
use crate::errors::AppResult;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { interval, count } = cmd {
        let minutes = interval.unwrap_or(cfg.interval_minutes);
        let opts = WatchOptions {
            interval: Duration::from_secs(minutes * 60),
            count: *count,
        };

        // Cancellation seam: the loop checks this flag between iterations.
        let stop = AtomicBool::new(false);
        run_watch(cfg, &opts, &stop)?;
    }
    Ok(())
}
