//! End-to-end tests driving the `ms` binary against on-disk databases.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Path to the compiled ms binary
fn ms_bin() -> String {
    env!("CARGO_BIN_EXE_ms").to_string()
}

/// Run an `ms` command in `dir` and return (stdout, stderr, success).
fn run_ms(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(ms_bin())
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to execute ms with args {:?}: {}", args, e));
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

/// Write a metastore.yml pointing at a DuckDB file inside `dir`.
fn write_project(dir: &Path) -> PathBuf {
    let db_path = dir.join("meta.duckdb");
    fs::write(
        dir.join("metastore.yml"),
        format!(
            "table_name: entity_meta\nautomigrate: true\ndatabase:\n  type: duckdb\n  path: {}\n",
            db_path.display()
        ),
    )
    .unwrap();
    db_path
}

// ── ddl / migrate ──────────────────────────────────────────────────────

#[test]
fn ddl_prints_create_table_for_each_dialect() {
    let dir = tempfile::tempdir().unwrap();

    let (stdout, stderr, ok) = run_ms(dir.path(), &["ddl", "--table", "meta", "--dialect", "mysql"]);
    assert!(ok, "stderr: {stderr}");
    assert!(stdout.starts_with("CREATE TABLE IF NOT EXISTS `meta`"), "{stdout}");
    assert!(stdout.contains("LONGTEXT"), "{stdout}");

    let (stdout, _, ok) = run_ms(dir.path(), &["ddl", "--table", "meta", "--dialect", "pg"]);
    assert!(ok);
    assert!(stdout.contains("TIMESTAMPTZ"), "{stdout}");
}

#[test]
fn ddl_accepts_driver_aliases_and_rejects_unknown_drivers() {
    let dir = tempfile::tempdir().unwrap();

    let (stdout, stderr, ok) = run_ms(dir.path(), &["ddl", "--table", "meta", "--dialect", "MariaDB"]);
    assert!(ok, "stderr: {stderr}");
    assert!(stdout.contains("DATETIME(6)"), "{stdout}");

    let (_, stderr, ok) = run_ms(dir.path(), &["ddl", "--table", "meta", "--dialect", "oracle"]);
    assert!(!ok);
    assert!(stderr.contains("unsupported driver 'oracle'"), "{stderr}");
}

#[test]
fn ddl_without_config_or_table_fails() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, ok) = run_ms(dir.path(), &["ddl"]);
    assert!(!ok);
    assert!(stderr.contains("E001"), "{stderr}");
}

#[test]
fn migrate_reports_creation_once() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("meta.duckdb");
    let db = db.to_str().unwrap();

    let (stdout, stderr, ok) = run_ms(dir.path(), &["migrate", "--table", "meta", "--database", db]);
    assert!(ok, "stderr: {stderr}");
    assert!(stdout.contains("Created table 'meta'"), "{stdout}");

    let (stdout, _, ok) = run_ms(dir.path(), &["migrate", "--table", "meta", "--database", db]);
    assert!(ok);
    assert!(stdout.contains("already exists"), "{stdout}");
}

#[test]
fn migrate_recognizes_existing_dotted_table() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("meta.duckdb");
    let db = db.to_str().unwrap();

    let (stdout, _, ok) = run_ms(dir.path(), &["migrate", "--table", "app.meta", "--database", db]);
    assert!(ok);
    assert!(stdout.contains("Created table 'app.meta'"), "{stdout}");

    let (stdout, _, ok) = run_ms(dir.path(), &["migrate", "--table", "app.meta", "--database", db]);
    assert!(ok);
    assert!(stdout.contains("already exists"), "{stdout}");
}

// ── get / set / find / rm ──────────────────────────────────────────────

#[test]
fn set_get_rm_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path());

    let (stdout, _, ok) = run_ms(dir.path(), &["get", "user", "42", "theme", "--default", "light"]);
    assert!(ok);
    assert_eq!(stdout.trim(), "light");

    let (_, stderr, ok) = run_ms(dir.path(), &["set", "user", "42", "theme", "dark"]);
    assert!(ok, "stderr: {stderr}");

    let (stdout, _, ok) = run_ms(dir.path(), &["get", "user", "42", "theme", "--default", "light"]);
    assert!(ok);
    assert_eq!(stdout.trim(), "dark");

    let (_, _, ok) = run_ms(dir.path(), &["rm", "user", "42", "theme"]);
    assert!(ok);
    let (_, _, ok) = run_ms(dir.path(), &["rm", "user", "42", "theme"]);
    assert!(ok, "removing an absent entry succeeds");

    let (stdout, _, ok) = run_ms(dir.path(), &["get", "user", "42", "theme", "--default", "light"]);
    assert!(ok);
    assert_eq!(stdout.trim(), "light");
}

#[test]
fn json_values_roundtrip_and_invalid_json_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path());

    let (_, stderr, ok) = run_ms(dir.path(), &["set", "user", "1", "prefs", "--json", r#"{"a":"b","c":"d"}"#]);
    assert!(ok, "stderr: {stderr}");

    let (stdout, _, ok) = run_ms(dir.path(), &["get", "user", "1", "prefs", "--json"]);
    assert!(ok);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value, serde_json::json!({"a": "b", "c": "d"}));

    let (_, _, ok) = run_ms(dir.path(), &["set", "user", "1", "prefs", "--json", "not json"]);
    assert!(!ok);

    let (_, _, ok) = run_ms(dir.path(), &["set", "user", "1", "raw", "plain text"]);
    assert!(ok);
    let (_, stderr, ok) = run_ms(dir.path(), &["get", "user", "1", "raw", "--json"]);
    assert!(!ok);
    assert!(stderr.contains("not valid JSON"), "{stderr}");
}

#[test]
fn find_prints_entry_and_fails_when_absent() {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path());

    let (_, _, ok) = run_ms(dir.path(), &["set", "T", "12345", "k", "v"]);
    assert!(ok);

    let (stdout, stderr, ok) = run_ms(dir.path(), &["find", "T", "12345", "k", "--output", "json"]);
    assert!(ok, "stderr: {stderr}");
    let entry: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(entry["object_id"], "12345");
    assert_eq!(entry["value"], "v");

    let (stdout, _, ok) = run_ms(dir.path(), &["find", "T", "12345", "k"]);
    assert!(ok);
    assert!(stdout.contains("object_type: T"), "{stdout}");

    let (_, stderr, ok) = run_ms(dir.path(), &["find", "T", "12345", "missing"]);
    assert!(!ok);
    assert!(stderr.contains("No entry"), "{stderr}");
}
