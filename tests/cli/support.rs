use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for waypath that ignores any user configuration
pub fn waypath() -> Command {
    let mut cmd = cargo_bin_cmd!("waypath");
    cmd.env("WAYPATH_CONFIG_DIR", "/nonexistent/waypath-test-config")
        .env_remove("WAYPATH_CONFIG")
        .env_remove("WAYPATH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// A small road network.
///
/// Main Street (1-2-3) then Harbor Road (3-4) is the short way from node 1
/// to node 4; West Lane and Long Detour (1-5-4) go around. Island Road
/// (6-7) is disconnected from the rest.
pub const NETWORK: &str = r#"{
    "nodes": {
        "1": { "x": 20.00, "y": 44.00 },
        "2": { "x": 20.01, "y": 44.00 },
        "3": { "x": 20.02, "y": 44.00 },
        "4": { "x": 20.02, "y": 44.01 },
        "5": { "x": 20.00, "y": 44.03 },
        "6": { "x": 21.00, "y": 45.00 },
        "7": { "x": 21.01, "y": 45.00 },
        "8": { "x": 22.00 }
    },
    "edges": [
        { "source": "1", "target": "2", "name": "Main Street" },
        { "source": "2", "target": "3", "name": "Main Street" },
        { "source": "3", "target": "4", "name": "Harbor Road" },
        { "source": "1", "target": "5", "name": "West Lane" },
        { "source": "5", "target": "4", "name": "Long Detour" },
        { "source": "6", "target": "7", "name": "Island Road" },
        { "source": "7", "target": "8", "name": "Broken Link" }
    ]
}"#;

/// 3x3 map with a path around the right-hand wall
pub const MAP: &str = "S.#\n..#\n#.E\n";

/// Map whose goal is walled off
pub const WALLED_MAP: &str = "S#.\n.#.\n.#E\n";

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

pub fn write_network(dir: &Path) -> PathBuf {
    write_file(dir, "network.json", NETWORK)
}

pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
