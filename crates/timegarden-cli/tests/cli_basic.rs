//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Each test
//! gets its own HOME so the data directories never collide.

use std::path::Path;
use std::process::Command;

/// Run a CLI command against an isolated home directory.
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "timegarden-cli", "--quiet", "--"])
        .args(args)
        .env("HOME", home)
        .env("TIMEGARDEN_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_project_add_and_list() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["project", "add", "Thesis"]);
    assert_eq!(code, 0, "Project add failed");
    assert!(stdout.contains("Project created:"));

    let (stdout, _, code) = run_cli(home.path(), &["project", "list"]);
    assert_eq!(code, 0, "Project list failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let projects = parsed.as_array().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["name"], "Thesis");
    assert_eq!(projects[0]["status"], "active");
}

#[test]
fn test_project_add_credits_currency() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(home.path(), &["project", "add", "Garden"]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(home.path(), &["currency", "balance"]);
    assert_eq!(code, 0, "Currency balance failed");
    assert_eq!(stdout.trim(), "10");
}

#[test]
fn test_slot_limit_rejects_second_project() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(home.path(), &["project", "add", "First"]);
    assert_eq!(code, 0);
    let (_, stderr, code) = run_cli(home.path(), &["project", "add", "Second"]);
    assert_eq!(code, 1, "Second add should hit the slot limit");
    assert!(stderr.contains("slots"));
}

#[test]
fn test_abandon_by_name() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(home.path(), &["project", "add", "Doomed"]);
    assert_eq!(code, 0);
    let (stdout, _, code) = run_cli(home.path(), &["project", "abandon", "Doomed"]);
    assert_eq!(code, 0, "Abandon failed");
    assert!(stdout.contains("Project abandoned:"));

    // The +10 creation bonus is forfeited again by the penalty.
    let (stdout, _, _) = run_cli(home.path(), &["currency", "balance"]);
    assert_eq!(stdout.trim(), "0");
}

#[test]
fn test_project_set_time() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(home.path(), &["project", "add", "Backlog"]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(
        home.path(),
        &["project", "set-time", "Backlog", "01:30:00"],
    );
    assert_eq!(code, 0, "Set-time failed");
    assert!(stdout.contains("01:30:00"));

    let (stdout, _, _) = run_cli(home.path(), &["project", "list"]);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed[0]["total_seconds_spent"], 5400);
}

#[test]
fn test_project_set_time_rejects_malformed_duration() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(home.path(), &["project", "add", "Backlog"]);
    assert_eq!(code, 0);

    let (_, stderr, code) = run_cli(
        home.path(),
        &["project", "set-time", "Backlog", "ninety minutes"],
    );
    assert_eq!(code, 1);
    assert!(stderr.contains("malformed duration"));

    let (stdout, _, _) = run_cli(home.path(), &["project", "list"]);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed[0]["total_seconds_spent"], 0);
}

#[test]
fn test_timer_preview() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(
        home.path(),
        &["timer", "preview", "--active", "25", "--break", "5", "--cycles", "2"],
    );
    assert_eq!(code, 0, "Timer preview failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["reward"], 50);
    assert_eq!(parsed["stages"].as_array().unwrap().len(), 3);
}

#[test]
fn test_timer_preview_single_cycle_has_no_break() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(
        home.path(),
        &["timer", "preview", "--active", "25", "--break", "5", "--cycles", "1"],
    );
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["stages"].as_array().unwrap().len(), 1);
    assert_eq!(parsed["stages"][0]["kind"], "work");
}

#[test]
fn test_timer_run_rejects_unknown_project() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["timer", "run", "nope"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("no project matching"));
}

#[test]
fn test_config_show_and_set() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["config", "show"]);
    assert_eq!(code, 0, "Config show failed");
    assert!(stdout.contains("active_minutes = 25"));

    let (stdout, _, code) = run_cli(home.path(), &["config", "set", "--cycles", "4"]);
    assert_eq!(code, 0, "Config set failed");
    assert!(stdout.contains("cycles = 4"));

    let (stdout, _, _) = run_cli(home.path(), &["config", "show"]);
    assert!(stdout.contains("cycles = 4"));
}

#[test]
fn test_project_export_import_round_trip() {
    let exporter = tempfile::tempdir().unwrap();
    let importer = tempfile::tempdir().unwrap();
    let file = exporter.path().join("export.json");

    let (_, _, code) = run_cli(exporter.path(), &["project", "add", "Shared"]);
    assert_eq!(code, 0);
    let (_, _, code) = run_cli(
        exporter.path(),
        &["project", "export", "--output", file.to_str().unwrap()],
    );
    assert_eq!(code, 0, "Export failed");

    let (stdout, _, code) = run_cli(
        importer.path(),
        &["project", "import", file.to_str().unwrap()],
    );
    assert_eq!(code, 0, "Import failed");
    assert!(stdout.contains("Imported 1 project(s)"));

    let (stdout, _, _) = run_cli(importer.path(), &["project", "list"]);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 1);
}
