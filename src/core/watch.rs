//! Periodic driver: re-run the report on a timer.
//!
//! One iteration is in flight at a time; the next tick waits until the
//! previous iteration returned, so the same log file is never read by two
//! overlapping iterations. Cancellation is cooperative and checked between
//! iterations, never mid-iteration.

use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::ui::messages;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Pause between iterations.
    pub interval: Duration,
    /// Stop after this many iterations (mainly for tests); `None` runs until
    /// cancelled.
    pub count: Option<u64>,
}

/// Run report iterations until cancelled or `count` is reached. A failed
/// iteration (e.g. the log file disappeared) is reported and the loop
/// continues with the next tick.
pub fn run_watch(cfg: &Config, opts: &WatchOptions, stop: &AtomicBool) -> AppResult<()> {
    let mut iteration: u64 = 0;

    loop {
        if stop.load(Ordering::Relaxed) {
            messages::info("Watch cancelled");
            break;
        }

        iteration += 1;
        messages::info(format!("Iteration {} started", iteration));

        match ReportLogic::run(cfg, false, false) {
            Ok(outcome) => messages::info(format!(
                "Iteration {} completed: {} jobs, {} anomalies",
                iteration,
                outcome.jobs.len(),
                outcome.anomalies.len()
            )),
            Err(e) => messages::error(format!("Iteration {} failed: {}", iteration, e)),
        }

        if let Some(count) = opts.count
            && iteration >= count
        {
            break;
        }

        sleep_interruptible(opts.interval, stop);
    }

    Ok(())
}

// Sleep in one-second slices so a cancel request is honored promptly.
fn sleep_interruptible(total: Duration, stop: &AtomicBool) {
    let mut remaining = total;
    while !remaining.is_zero() && !stop.load(Ordering::Relaxed) {
        let step = remaining.min(Duration::from_secs(1));
        thread::sleep(step);
        remaining -= step;
    }
}
