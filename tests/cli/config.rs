use crate::cli::support::{waypath, write_file, MAP};
use predicates::prelude::*;
use tempfile::tempdir;
use waypath_core::config::WaypathConfig;

#[test]
fn test_expansion_budget_cancels_search() {
    let dir = tempdir().unwrap();
    let map = write_file(dir.path(), "map.txt", MAP);
    let config = write_file(
        dir.path(),
        "config.toml",
        "[search]\nmax_expansions = 1\n",
    );

    waypath()
        .arg("--config")
        .arg(&config)
        .args(["grid", "--map"])
        .arg(&map)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("search cancelled"));
}

#[test]
fn test_config_dir_supplies_grid_defaults() {
    let dir = tempdir().unwrap();
    let mut config = WaypathConfig::default();
    config.grid.size = 7;
    config.grid.obstacle_ratio = 0.0;
    config.grid.seed = Some(11);
    write_file(dir.path(), "config.toml", &toml::to_string(&config).unwrap());

    waypath()
        .env("WAYPATH_CONFIG_DIR", dir.path())
        .args(["--format", "records", "grid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rows=7 cols=7"))
        .stdout(predicate::str::contains("seed=11"))
        .stdout(predicate::str::contains("obstacles=0"));
}

#[test]
fn test_invalid_config_value_is_usage_error() {
    let dir = tempdir().unwrap();
    let config = write_file(dir.path(), "config.toml", "[grid]\nsize = 0\n");

    waypath()
        .arg("--config")
        .arg(&config)
        .arg("grid")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("grid.size"));
}

#[test]
fn test_oversized_config_grid_rejected() {
    let dir = tempdir().unwrap();
    let config = write_file(dir.path(), "config.toml", "[grid]\nsize = 4294967296\n");

    waypath()
        .arg("--config")
        .arg(&config)
        .arg("grid")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("grid.size"));
}

#[test]
fn test_zero_expansion_budget_rejected() {
    let dir = tempdir().unwrap();
    let config = write_file(
        dir.path(),
        "config.toml",
        "[search]\nmax_expansions = 0\n",
    );

    waypath()
        .arg("--config")
        .arg(&config)
        .arg("grid")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("search.max_expansions"));
}

#[test]
fn test_unparsable_config() {
    let dir = tempdir().unwrap();
    let config = write_file(dir.path(), "config.toml", "[grid\n");

    waypath()
        .arg("--config")
        .arg(&config)
        .arg("grid")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_missing_explicit_config() {
    let dir = tempdir().unwrap();

    waypath()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .arg("grid")
        .assert()
        .code(1);
}
