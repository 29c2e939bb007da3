use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the job log file to analyze.
    #[serde(default = "default_log_file")]
    pub log_file: String,
    /// Jobs longer than this are reported at WARNING severity.
    #[serde(default = "default_warning_minutes")]
    pub warning_threshold_minutes: i64,
    /// Jobs longer than this are reported at ERROR severity.
    #[serde(default = "default_error_minutes")]
    pub error_threshold_minutes: i64,
    /// Pause between `watch` iterations.
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: u64,
}

fn default_log_file() -> String {
    Config::log_file_default().to_string_lossy().to_string()
}
fn default_warning_minutes() -> i64 {
    5
}
fn default_error_minutes() -> i64 {
    10
}
// Default scan cadence: 10 hours.
fn default_interval_minutes() -> u64 {
    600
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            warning_threshold_minutes: default_warning_minutes(),
            error_threshold_minutes: default_error_minutes(),
            interval_minutes: default_interval_minutes(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("jobmon")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".jobmon")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("jobmon.conf")
    }

    /// Default location of the job log when none is configured
    pub fn log_file_default() -> PathBuf {
        Self::config_dir().join("jobs.log")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
        } else {
            Ok(Self::default())
        }
    }

    /// Initialize the configuration directory and default config file
    pub fn init_all(is_test: bool) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("Config file: {:?}", Self::config_file());
        }

        println!("Log file:    {}", config.log_file);

        Ok(())
    }
}
