#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use focustimeline::core::{WeekGrouping, group_by_week};
use focustimeline::models::SessionRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CANONICAL_HEADER: &str = "task_name,duration_minutes,timestamp";

/// Binary under test, isolated from the user's config directory.
pub fn ftl(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("focustimeline");
    cmd.env("FOCUSTIMELINE_HOME", home);
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn workspace() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Write a CSV with the canonical header and the given data lines.
pub fn write_csv(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    write_raw(dir, name, CANONICAL_HEADER, lines)
}

pub fn write_raw(dir: &Path, name: &str, header: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut body = String::from(header);
    body.push('\n');
    for l in lines {
        body.push_str(l);
        body.push('\n');
    }
    fs::write(&path, body).expect("write csv");
    path
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid timestamp")
}

pub fn session(label: &str, start: &str, minutes: f64) -> SessionRecord {
    SessionRecord::new(label, ts(start), minutes).expect("valid session")
}

pub fn grouping(records: Vec<SessionRecord>) -> WeekGrouping {
    group_by_week(records)
}

/// Files in `dir` sorted by name.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .map(|rd| {
            rd.filter_map(Result::ok)
                .map(|e| e.file_name().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
