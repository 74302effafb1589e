use crate::cli::support::{waypath, write_file, MAP};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_log_level_debug_shows_search_summary() {
    let dir = tempdir().unwrap();
    let map = write_file(dir.path(), "map.txt", MAP);

    waypath()
        .args(["--log-level", "debug", "grid", "--map"])
        .arg(&map)
        .assert()
        .success()
        .stderr(predicate::str::contains("search finished"));
}

#[test]
fn test_default_level_is_quiet() {
    let dir = tempdir().unwrap();
    let map = write_file(dir.path(), "map.txt", MAP);

    waypath()
        .args(["grid", "--map"])
        .arg(&map)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = tempdir().unwrap();
    let map = write_file(dir.path(), "map.txt", MAP);

    waypath()
        .args(["--log-level", "debug", "--log-json", "grid", "--map"])
        .arg(&map)
        .assert()
        .success()
        .stderr(predicate::str::contains("\"message\":\"search finished\""));
}
