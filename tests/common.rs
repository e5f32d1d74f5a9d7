#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, params};
use scriptboard::models::Event;
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary, isolated from the user's config file and environment.
pub fn sb() -> Command {
    let mut cmd = cargo_bin_cmd!("scriptboard");
    let mut missing_conf = env::temp_dir();
    missing_conf.push("scriptboard_tests_missing.conf");
    cmd.env("SCRIPTBOARD_CONFIG", missing_conf)
        .env_remove("DB_NAME")
        .env_remove("SCRIPTBOARD_BIND");
    cmd
}

/// Unique test DB path inside the system temp dir; any previous file is removed.
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_scriptboard.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Temporary output file path inside tempdir; any previous file is removed.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid timestamp")
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn ev(ip: &str, script: &str, start: &str, end: Option<&str>) -> Event {
    Event::new(ip, script, ts(start), end.map(ts))
}

/// Create the schema through the library and insert raw rows.
pub fn seed_db(db_path: &str, rows: &[(&str, &str, &str, Option<&str>)]) {
    let conn = Connection::open(db_path).expect("open db");
    scriptboard::db::initialize::init_db(&conn).expect("init db");
    for (ip, script, start, end) in rows {
        conn.execute(
            "INSERT INTO script_event (ip, script_path, start_time, end_time) VALUES (?1, ?2, ?3, ?4)",
            params![ip, script, start, end],
        )
        .expect("insert event");
    }
}

/// Two hosts across two days, inserted out of order on purpose.
pub fn seed_default(db_path: &str) {
    seed_db(
        db_path,
        &[
            ("10.0.0.1", "b.py", "2024-01-01 09:50:00", None),
            ("10.0.0.1", "a.py", "2024-01-01 09:15:00", Some("2024-01-01 09:45:00")),
            ("10.0.0.2", "backup.sh", "2024-01-01 10:00:00", Some("2024-01-01 11:30:00")),
            ("10.0.0.1", "report.py", "2024-01-02 08:00:00", Some("2024-01-02 08:05:00")),
        ],
    );
}
