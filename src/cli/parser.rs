use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for jobmon
/// CLI application to reconstruct job lifecycles from START/END log events
#[derive(Parser)]
#[command(
    name = "jobmon",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple job monitoring CLI: pair START/END log events and flag long-running jobs",
    long_about = None
)]
pub struct Cli {
    /// Override the configured log file path (useful for tests or ad-hoc runs)
    #[arg(global = true, long = "log")]
    pub log: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory and default config file
    Init,

    /// Manage the configuration file (view or verify)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration file and show resolved values")]
        check: bool,
    },

    /// Analyze the log file once and print the job report
    Report {
        /// Skip the job table, print only anomalies
        #[arg(long = "anomalies-only", help = "Print only pairing anomalies")]
        anomalies_only: bool,

        /// Also print lines the decoder skipped and why
        #[arg(long = "details", help = "Show skipped-line diagnostics")]
        details: bool,
    },

    /// Re-run the report periodically
    Watch {
        /// Minutes between iterations (default from config)
        #[arg(long = "interval", value_name = "MINUTES")]
        interval: Option<u64>,

        /// Stop after N iterations instead of running until cancelled
        #[arg(long = "count", value_name = "N")]
        count: Option<u64>,
    },

    /// Export completed jobs to a file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Include anomalies in the export (JSON only)
        #[arg(long = "anomalies", short = 'a')]
        anomalies: bool,

        /// Overwrite the output file if it exists
        #[arg(long, short = 'f')]
        force: bool,
    },
}
