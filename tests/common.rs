#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use drilllog::core::persistence::NullSink;
use drilllog::core::store::{IntervalLogStore, StoreOptions};
use drilllog::models::drill_hole::DrillHole;
use drilllog::models::hole_status::HoleStatus;
use drilllog::models::section::Section;
use drilllog::models::section_key::SectionKey;
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn drilllog() -> Command {
    cargo_bin_cmd!("drilllog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_drilllog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a test database through the CLI
pub fn init_db(db_path: &str) {
    drilllog()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub const SECTION_ARGS: [&str; 6] = [
    "--project",
    "P1",
    "--hole",
    "IDD4074",
    "--section",
    "lithology",
];

/// Run a section-scoped subcommand with the shared project/hole/section args
pub fn section_cmd(db_path: &str, sub: &str, extra: &[&str]) -> Command {
    let mut cmd = drilllog();
    cmd.args(["--db", db_path, sub]).args(SECTION_ARGS).args(extra);
    cmd
}

pub fn key() -> SectionKey {
    SectionKey::new("P1", "IDD4074", Section::Lithology)
}

pub fn null_store() -> IntervalLogStore<NullSink> {
    IntervalLogStore::new(NullSink, StoreOptions::default())
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

/// Register row; `end` as YYYY-MM-DD
pub fn hole(
    id: &str,
    location: &str,
    status: HoleStatus,
    planned: f64,
    drilled: f64,
    end: Option<&str>,
) -> DrillHole {
    DrillHole {
        id: id.to_string(),
        site_id: format!("site_{id}"),
        location: location.to_string(),
        status,
        planned_depth: planned,
        drilled_depth: drilled,
        start_date: None,
        end_date: end.map(date),
        status_note: String::new(),
        has_photo: false,
        has_litho: false,
        has_samples: false,
    }
}
