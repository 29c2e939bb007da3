use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                println!("{}", fs::read_to_string(&path)?);
            } else {
                messages::warning(format!(
                    "No config file at {:?}; defaults are in effect",
                    path
                ));
            }
        }

        if *check {
            // cfg has already been parsed at this point, so just show the
            // resolved values (including serde defaults for missing fields).
            println!("log_file:                  {}", cfg.log_file);
            println!("warning_threshold_minutes: {}", cfg.warning_threshold_minutes);
            println!("error_threshold_minutes:   {}", cfg.error_threshold_minutes);
            println!("interval_minutes:          {}", cfg.interval_minutes);
            messages::success("Configuration is valid");
        }
    }
    Ok(())
}
