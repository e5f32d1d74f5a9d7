mod common;
use common::{seed_default, setup_test_db, sb};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    sb().args(["--db", &db_path, "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    // idempotent, and the fresh table is queryable
    sb().args(["--db", &db_path, "init"]).assert().success();
    sb().args(["--db", &db_path, "sources"])
        .assert()
        .success()
        .stdout(contains("No sources recorded yet"));
}

#[test]
fn test_sources_lists_each_ip_once() {
    let db_path = setup_test_db("cli_sources");
    seed_default(&db_path);

    let out = sb().args(["--db", &db_path, "sources"]).assert().success();
    let stdout = String::from_utf8(out.get_output().stdout.clone()).expect("utf8");

    assert_eq!(stdout.matches("10.0.0.1").count(), 1);
    assert_eq!(stdout.matches("10.0.0.2").count(), 1);
}

#[test]
fn test_events_with_filters_and_summary() {
    let db_path = setup_test_db("cli_events");
    seed_default(&db_path);

    sb().args([
        "--db", &db_path, "events", "--ip", "10.0.0.1", "--date", "2024-01-01",
    ])
    .assert()
    .success()
    .stdout(contains("a.py"))
    .stdout(contains("0:30:00"))
    .stdout(contains("Running"))
    .stdout(contains("backup.sh").not())
    .stdout(contains("Total Scripts: 2 | Completed: 1 | Running: 1"));
}

#[test]
fn test_events_rejects_bad_date() {
    let db_path = setup_test_db("cli_bad_date");
    seed_default(&db_path);

    sb().args(["--db", &db_path, "events", "--date", "01/02/2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_calendar_running_only() {
    let db_path = setup_test_db("cli_calendar");
    seed_default(&db_path);

    sb().args([
        "--db", &db_path, "calendar", "--date", "2024-01-01", "--status", "running",
    ])
    .assert()
    .success()
    .stdout(contains("09:00"))
    .stdout(contains("a.py, b.py"))
    .stdout(contains("10:00"))
    .stdout(contains("backup.sh"))
    .stdout(contains("11:00").not());
}

#[test]
fn test_calendar_full_day_by_source() {
    let db_path = setup_test_db("cli_calendar_src");
    seed_default(&db_path);

    let out = sb()
        .args([
            "--db", &db_path, "calendar", "--date", "2024-01-01", "--ip", "10.0.0.2",
        ])
        .assert()
        .success();
    let stdout = String::from_utf8(out.get_output().stdout.clone()).expect("utf8");

    assert!(stdout.contains("23:00"));
    assert!(stdout.contains("backup.sh"));
    assert!(!stdout.contains("a.py"));
    assert_eq!(stdout.matches("None").count(), 23);
}

#[test]
fn test_calendar_rejects_unknown_status() {
    let db_path = setup_test_db("cli_calendar_status");
    seed_default(&db_path);

    sb().args(["--db", &db_path, "calendar", "--status", "busy"])
        .assert()
        .failure()
        .stderr(contains("Invalid slot status"));
}

#[test]
fn test_missing_database_fails() {
    let db_path = setup_test_db("cli_missing_db");

    sb().args(["--db", &db_path, "sources"])
        .assert()
        .failure()
        .stderr(contains("Database error"));
}

#[test]
fn test_config_print_reflects_db_override() {
    sb().args(["--db", "/tmp/elsewhere.sqlite", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("/tmp/elsewhere.sqlite"))
        .stdout(contains("127.0.0.1:8501"));
}

#[test]
fn test_serve_rejects_bad_bind() {
    let db_path = setup_test_db("cli_bad_bind");

    sb().args(["--db", &db_path, "serve", "--bind", "not-an-address"])
        .assert()
        .failure()
        .stderr(contains("Invalid bind address"));
}
