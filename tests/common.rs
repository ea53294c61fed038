#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Days, Local, NaiveDate};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rhabit() -> Command {
    cargo_bin_cmd!("rhabit")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rhabit.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rhabit_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a DB through the CLI (test mode: no config file is written)
pub fn init_db(db_path: &str) {
    rhabit()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize a DB and create one habit, returning nothing: the first
/// habit of a fresh database always gets id 1.
pub fn init_db_with_habit(db_path: &str, name: &str) {
    init_db(db_path);
    rhabit()
        .args(["--db", db_path, "add", name])
        .assert()
        .success();
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn days_ago(n: u64) -> NaiveDate {
    today().checked_sub_days(Days::new(n)).expect("date in range")
}

pub fn day_str(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}
