#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use worktime::core::clock::FixedClock;
use worktime::models::entry::Entry;
use worktime::models::log::Log;

/// `worktime` with HOME pointed at `home`, so no user configuration leaks in.
pub fn wt(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("worktime");
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

pub fn wt_notify(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("worktime-notify");
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

/// A scratch HOME with a timefile holding `contents`.
pub fn setup_timefile(contents: &str) -> (TempDir, PathBuf) {
    let home = tempfile::tempdir().expect("create temp home");
    let path = home.path().join("temps");
    fs::write(&path, contents).expect("write timefile");
    (home, path)
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("read timefile")
}

/// `YYYY-MM-DD HH:MM`
pub fn at(s: &str) -> FixedClock {
    FixedClock::parse(s).expect("valid fixed clock")
}

pub fn entry(date: &str, start: &str, end: &str) -> Entry {
    Entry::from_fields(date, start, end).expect("valid entry")
}

pub fn log(rows: &[(&str, &str, &str)]) -> Log {
    Log::new(rows.iter().map(|(d, s, e)| entry(d, s, e)).collect())
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}
