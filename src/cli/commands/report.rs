use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        anomalies_only,
        details,
    } = cmd
    {
        ReportLogic::run(cfg, *anomalies_only, *details)?;
    }
    Ok(())
}
