use crate::cli::support::{stdout_json, waypath, write_file, MAP, WALLED_MAP};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Map files
// ============================================================================

#[test]
fn test_map_path_is_rendered() {
    let dir = tempdir().unwrap();
    let map = write_file(dir.path(), "map.txt", MAP);

    let output = waypath()
        .args(["grid", "--map"])
        .arg(&map)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("path found: cost 4 over 4 moves (astar"));
    assert_eq!(stdout.matches('*').count(), 3);
    assert!(stdout.starts_with('S'));
}

#[test]
fn test_map_dijkstra_same_cost() {
    let dir = tempdir().unwrap();
    let map = write_file(dir.path(), "map.txt", MAP);

    waypath()
        .args(["grid", "--dijkstra", "--map"])
        .arg(&map)
        .assert()
        .success()
        .stdout(predicate::str::contains("cost 4 over 4 moves (dijkstra"));
}

#[test]
fn test_walled_map_has_no_path() {
    let dir = tempdir().unwrap();
    let map = write_file(dir.path(), "map.txt", WALLED_MAP);

    waypath()
        .args(["grid", "--map"])
        .arg(&map)
        .assert()
        .success()
        .stdout(predicate::str::contains("no path found"))
        .stdout(predicate::str::contains("*").not());
}

#[test]
fn test_walled_map_json() {
    let dir = tempdir().unwrap();
    let map = write_file(dir.path(), "map.txt", WALLED_MAP);

    let output = waypath()
        .args(["--format", "json", "grid", "--map"])
        .arg(&map)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["status"], "unreachable");
    assert_eq!(json["found"], false);
    assert_eq!(json["nodes"], serde_json::json!([]));
    assert_eq!(json["total_cost"], 0.0);
    assert_eq!(json["map"], WALLED_MAP);
    assert!(json.get("labels").is_none());
}

#[test]
fn test_goal_override_outside_grid() {
    let dir = tempdir().unwrap();
    let map = write_file(dir.path(), "map.txt", MAP);

    waypath()
        .args(["grid", "--to", "5,5", "--map"])
        .arg(&map)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("goal node"));
}

#[test]
fn test_start_override_on_obstacle() {
    let dir = tempdir().unwrap();
    let map = write_file(dir.path(), "map.txt", MAP);

    waypath()
        .args(["grid", "--from", "0,2", "--map"])
        .arg(&map)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("start node"));
}

#[test]
fn test_bad_map_character() {
    let dir = tempdir().unwrap();
    let map = write_file(dir.path(), "map.txt", "S.x\n..E\n");

    waypath()
        .args(["grid", "--map"])
        .arg(&map)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("malformed map"));
}

#[test]
fn test_records_output() {
    let dir = tempdir().unwrap();
    let map = write_file(dir.path(), "map.txt", MAP);

    waypath()
        .args(["--format", "records", "grid", "--map"])
        .arg(&map)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H waypath=1 records=1 mode=grid round=1 rows=3 cols=3 start=0,0 goal=2,2",
        ))
        .stdout(predicate::str::contains("M S"))
        .stdout(predicate::str::contains("N 0 0,0"))
        .stdout(predicate::str::contains("N 4 2,2"))
        .stdout(predicate::str::contains("S expanded="));
}

// ============================================================================
// Generated grids
// ============================================================================

#[test]
fn test_seeded_generation_is_reproducible() {
    let run = || {
        waypath()
            .args(["--format", "json", "grid", "--size", "12", "--seed", "42"])
            .output()
            .unwrap()
    };

    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    let json = stdout_json(&first);
    assert_eq!(json["rows"], 12);
    assert_eq!(json["seed"], 42);
}

#[test]
fn test_explicit_endpoints_on_generated_grid() {
    let output = waypath()
        .args([
            "--format",
            "json",
            "grid",
            "--size",
            "6",
            "--seed",
            "1",
            "--obstacle-ratio",
            "0",
            "--from",
            "0,0",
            "--to",
            "5,5",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["found"], true);
    assert_eq!(json["total_cost"], 10.0);
    assert_eq!(json["start"], serde_json::json!({ "row": 0, "col": 0 }));
    assert_eq!(json["obstacles"], serde_json::json!([]));
}

#[test]
fn test_rounds_regenerate_obstacles() {
    let output = waypath()
        .args([
            "--format", "json", "grid", "--size", "10", "--seed", "5", "--rounds", "3",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let rounds = json.as_array().unwrap();
    assert_eq!(rounds.len(), 3);
    for (i, round) in rounds.iter().enumerate() {
        assert_eq!(round["round"], i + 1);
        assert_eq!(round["start"], rounds[0]["start"]);
        assert_eq!(round["goal"], rounds[0]["goal"]);
    }
}

#[test]
fn test_cancelled_rounds_still_print_json() {
    let dir = tempdir().unwrap();
    let config = write_file(dir.path(), "config.toml", "[search]\nmax_expansions = 1\n");

    let output = waypath()
        .arg("--config")
        .arg(&config)
        .args([
            "--format", "json", "grid", "--size", "10", "--seed", "5", "--rounds", "3",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json = stdout_json(&output);
    let rounds = json.as_array().unwrap();
    assert_eq!(rounds.len(), 1);
    assert_eq!(rounds[0]["round"], 1);
    assert_eq!(rounds[0]["status"], "cancelled");
    assert!(String::from_utf8_lossy(&output.stderr).contains("cancelled"));
}

#[test]
fn test_rounds_conflict_with_map() {
    let dir = tempdir().unwrap();
    let map = write_file(dir.path(), "map.txt", MAP);

    waypath()
        .args(["grid", "--rounds", "2", "--map"])
        .arg(&map)
        .assert()
        .code(2);
}

#[test]
fn test_ratio_out_of_range() {
    waypath()
        .args(["grid", "--obstacle-ratio", "1.5"])
        .assert()
        .code(2);
}

#[test]
fn test_oversized_grid_rejected() {
    waypath()
        .args(["grid", "--size", "4294967296"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("outside 1..=1000"));
}
