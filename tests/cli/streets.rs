use crate::cli::support::{stdout_json, waypath, write_network};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_lookup_is_case_insensitive() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path());

    waypath()
        .arg("streets")
        .arg(&network)
        .arg("harbor road")
        .assert()
        .success()
        .stdout(predicate::str::contains("Harbor Road (segment 2: 20.02,44 -> 20.02,44.01)"));
}

#[test]
fn test_lookup_json() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path());

    let output = waypath()
        .args(["--format", "json", "streets"])
        .arg(&network)
        .arg("MAIN STREET")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["index"], 0);
    assert_eq!(json["name"], "Main Street");
    assert_eq!(json["to"]["lon"], 20.01);
}

#[test]
fn test_lookup_missing_street() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path());

    waypath()
        .arg("streets")
        .arg(&network)
        .arg("Nowhere")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("street not found"));
}

#[test]
fn test_list_streets_skips_dropped_edges() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path());

    let output = waypath()
        .args(["--format", "json", "streets"])
        .arg(&network)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(
        json,
        serde_json::json!([
            "Main Street",
            "Harbor Road",
            "West Lane",
            "Long Detour",
            "Island Road"
        ])
    );
}

#[test]
fn test_list_streets_records() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path());

    waypath()
        .args(["--format", "records", "streets"])
        .arg(&network)
        .assert()
        .success()
        .stdout(predicate::str::contains("H waypath=1 records=1 mode=streets count=5"))
        .stdout(predicate::str::contains("S name=\"West Lane\""));
}
