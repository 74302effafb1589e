use crate::cli::support::{stdout_json, waypath, write_file, write_network};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Route by street name
// ============================================================================

#[test]
fn test_route_between_streets() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path());

    waypath()
        .arg("route")
        .arg(&network)
        .args(["--from-street", "main street", "--to-street", "HARBOR ROAD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Main Street -> Harbor Road"))
        .stdout(predicate::str::contains("over 3 segments (dijkstra)"))
        .stdout(predicate::str::contains("Streets: Main Street -> Harbor Road"));
}

#[test]
fn test_route_json_result() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path());

    let output = waypath()
        .args(["--format", "json", "route"])
        .arg(&network)
        .args(["--from-street", "Main Street", "--to-street", "Harbor Road"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["status"], "found");
    assert_eq!(json["found"], true);
    assert_eq!(json["algorithm"], "dijkstra");
    assert_eq!(json["nodes"].as_array().unwrap().len(), 4);
    assert_eq!(json["nodes"][0]["lon"], 20.0);
    assert_eq!(json["nodes"][3]["lat"], 44.01);
    assert_eq!(
        json["labels"],
        serde_json::json!(["Main Street", "Main Street", "Harbor Road"])
    );
    assert_eq!(json["from"]["name"], "Main Street");
    let cost = json["total_cost"].as_f64().unwrap();
    assert!(cost > 2.5 && cost < 3.0, "cost {}", cost);
}

#[test]
fn test_astar_matches_dijkstra() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path());

    let run = |extra: &[&str]| {
        let output = waypath()
            .args(["--format", "json", "route"])
            .arg(&network)
            .args(["--from-street", "West Lane", "--to-street", "Harbor Road"])
            .args(extra)
            .output()
            .unwrap();
        assert!(output.status.success());
        stdout_json(&output)
    };

    let dijkstra = run(&[]);
    let astar = run(&["--astar"]);
    assert_eq!(astar["algorithm"], "astar");
    assert_eq!(dijkstra["total_cost"], astar["total_cost"]);
    assert_eq!(dijkstra["nodes"], astar["nodes"]);
    assert!(
        astar["stats"]["expanded"].as_u64().unwrap()
            <= dijkstra["stats"]["expanded"].as_u64().unwrap()
    );
}

#[test]
fn test_disconnected_street_is_unreachable() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path());

    waypath()
        .arg("route")
        .arg(&network)
        .args(["--from-street", "Main Street", "--to-street", "Island Road"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no path found"));
}

#[test]
fn test_unknown_street_is_data_error() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path());

    waypath()
        .arg("route")
        .arg(&network)
        .args(["--from-street", "Main Street", "--to-street", "Nowhere"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("street not found: Nowhere"));
}

#[test]
fn test_unknown_street_json_envelope() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path());

    waypath()
        .args(["--format", "json", "route"])
        .arg(&network)
        .args(["--from-street", "Nowhere", "--to-street", "Main Street"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"not_found\""));
}

// ============================================================================
// Route by coordinate
// ============================================================================

#[test]
fn test_route_between_coordinates() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path());

    waypath()
        .args(["--format", "records", "route"])
        .arg(&network)
        .args(["--from", "20.0,44.0", "--to", "20.02,44.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H waypath=1 records=1 mode=route algorithm=dijkstra",
        ))
        .stdout(predicate::str::contains("found=true"))
        .stdout(predicate::str::contains("N 2 20.02,44"))
        .stdout(predicate::str::contains("E 1 2 \"Main Street\""));
}

#[test]
fn test_start_outside_network() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path());

    waypath()
        .arg("route")
        .arg(&network)
        .args(["--from", "1,1", "--to", "20.0,44.0"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("start node"));
}

#[test]
fn test_malformed_coordinate_is_usage_error() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path());

    waypath()
        .arg("route")
        .arg(&network)
        .args(["--from", "east", "--to", "20.0,44.0"])
        .assert()
        .code(2);
}

// ============================================================================
// Input files
// ============================================================================

#[test]
fn test_malformed_network_file() {
    let dir = tempdir().unwrap();
    let network = write_file(dir.path(), "broken.json", "{ \"nodes\": [");

    waypath()
        .arg("route")
        .arg(&network)
        .args(["--from-street", "A", "--to-street", "B"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("malformed road network"));
}

#[test]
fn test_missing_network_file() {
    let dir = tempdir().unwrap();

    waypath()
        .arg("route")
        .arg(dir.path().join("missing.json"))
        .args(["--from-street", "A", "--to-street", "B"])
        .assert()
        .code(1);
}

#[test]
fn test_trace_lists_events() {
    let dir = tempdir().unwrap();
    let network = write_network(dir.path());

    let output = waypath()
        .args(["--format", "json", "route"])
        .arg(&network)
        .args(["--from-street", "Main Street", "--to-street", "Harbor Road", "--trace"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let trace = json["trace"].as_array().unwrap();
    assert!(!trace.is_empty());
    assert_eq!(trace[0]["event"], "discovered");
    assert!(trace.iter().any(|e| e["event"] == "expanded"));
}
