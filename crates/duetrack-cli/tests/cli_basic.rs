//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run with an isolated data
//! directory per test and verify outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command against `data_dir` and return (stdout, stderr, code).
fn run_cli(data_dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "duetrack-cli", "--"])
        .args(args)
        .env("DUETRACK_DATA_DIR", data_dir)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_ok(data_dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(data_dir, args);
    assert_eq!(code, 0, "CLI command failed: {args:?}\nstderr: {stderr}");
    stdout
}

#[test]
fn test_project_create_and_list() {
    let dir = tempfile::tempdir().unwrap();
    run_ok(dir.path(), &["project", "create", "Acme"]);
    let listed = run_ok(dir.path(), &["project", "list"]);
    assert!(listed.contains("Acme"));
}

#[test]
fn test_project_create_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let first = run_ok(dir.path(), &["project", "create", "Acme"]);
    let second = run_ok(dir.path(), &["project", "create", "Acme"]);
    assert_eq!(first, second);

    let listed = run_ok(dir.path(), &["project", "list"]);
    let projects: serde_json::Value = serde_json::from_str(&listed).unwrap();
    assert_eq!(projects.as_array().unwrap().len(), 1);
}

#[test]
fn test_deliverable_add_and_list() {
    let dir = tempfile::tempdir().unwrap();
    run_ok(dir.path(), &["project", "create", "Acme"]);
    run_ok(
        dir.path(),
        &[
            "deliverable",
            "add",
            "--project",
            "1",
            "--description",
            "Quarterly report",
            "--due",
            "3/31/2026",
            "--frequency",
            "Q",
            "--manager",
            "R. Vance",
        ],
    );

    let listed = run_ok(dir.path(), &["deliverable", "list", "1", "--json"]);
    let views: serde_json::Value = serde_json::from_str(&listed).unwrap();
    let views = views.as_array().unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0]["due_date"], "2026-03-31");
    assert_eq!(views[0]["project_name"], "Acme");
}

#[test]
fn test_deliverable_add_unknown_project_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(
        dir.path(),
        &[
            "deliverable",
            "add",
            "--project",
            "99",
            "--description",
            "Orphan",
            "--due",
            "3/31/2026",
            "--manager",
            "R. Vance",
        ],
    );
    assert_ne!(code, 0);
    assert!(stderr.contains("Project not found"));
}

#[test]
fn test_upcoming_and_urgent() {
    let dir = tempfile::tempdir().unwrap();
    run_ok(dir.path(), &["project", "create", "Acme"]);
    // Far in the future: visible in a huge window, never urgent.
    run_ok(
        dir.path(),
        &[
            "deliverable",
            "add",
            "--project",
            "1",
            "--description",
            "Decade plan",
            "--due",
            "1/1/2120",
            "--manager",
            "R. Vance",
        ],
    );
    // Long past: overdue, so present in every window and always urgent.
    run_ok(
        dir.path(),
        &[
            "deliverable",
            "add",
            "--project",
            "1",
            "--description",
            "Lapsed filing",
            "--due",
            "1/1/2020",
            "--manager",
            "R. Vance",
        ],
    );

    let upcoming = run_ok(dir.path(), &["upcoming", "--days", "0", "--json"]);
    let views: serde_json::Value = serde_json::from_str(&upcoming).unwrap();
    let views = views.as_array().unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0]["description"], "Lapsed filing");
    assert_eq!(views[0]["tier"], "overdue");

    let urgent = run_ok(dir.path(), &["urgent", "--days", "60000", "--json"]);
    let views: serde_json::Value = serde_json::from_str(&urgent).unwrap();
    let views = views.as_array().unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0]["description"], "Lapsed filing");
}

#[test]
fn test_import_rerun_no_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let export = dir.path().join("export.json");
    std::fs::write(
        &export,
        r#"[
            {"project": "Acme", "description": "Q1 report", "due_date": "3/31/2026",
             "frequency": "Q", "project_manager": "R. Vance"},
            {"project": "Zenith", "description": "Kickoff deck", "due_date": 46088,
             "project_manager": "S. Marsh"}
        ]"#,
    )
    .unwrap();
    let export = export.to_str().unwrap();

    let out = run_ok(dir.path(), &["import", export]);
    assert!(out.contains("2 deliverable(s)"));
    assert!(out.contains("2 new project(s)"));

    let out = run_ok(dir.path(), &["import", export]);
    assert!(out.contains("0 new project(s)"));

    let listed = run_ok(dir.path(), &["project", "list"]);
    let projects: serde_json::Value = serde_json::from_str(&listed).unwrap();
    assert_eq!(projects.as_array().unwrap().len(), 2);
}

#[test]
fn test_malformed_due_date_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    run_ok(dir.path(), &["project", "create", "Acme"]);
    let (_, stderr, code) = run_cli(
        dir.path(),
        &[
            "deliverable",
            "add",
            "--project",
            "1",
            "--description",
            "Bad date",
            "--due",
            "2026-03-31",
            "--manager",
            "R. Vance",
        ],
    );
    assert_ne!(code, 0);
    assert!(stderr.contains("Malformed due date"));
}
