#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn jm() -> Command {
    cargo_bin_cmd!("jobmon")
}

/// Write a job log with the given lines into the system temp dir and return
/// its path. Any previous file with the same name is replaced.
pub fn write_log(name: &str, lines: &[&str]) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_jobmon.log", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, lines.join("\n")).expect("write test log");
    p
}

/// Create a temporary output file path and ensure it does not exist yet.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_jobmon_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Path inside the temp dir that is guaranteed not to exist.
pub fn missing_path(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_jobmon_missing.log", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
