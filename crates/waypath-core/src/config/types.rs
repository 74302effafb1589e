//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Mean Earth radius used for great-circle edge weights
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Largest side length accepted for a generated grid
pub const MAX_GRID_SIZE: usize = 1000;

/// Top-level waypath configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaypathConfig {
    /// Search engine settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Grid generation settings
    #[serde(default)]
    pub grid: GridConfig,

    /// Road network settings
    #[serde(default)]
    pub road: RoadConfig,
}

/// Settings applied to every search run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Compare heuristic estimates against true remaining cost after a search
    #[serde(default)]
    pub check_admissibility: bool,

    /// Stop after this many node expansions (reported as cancelled)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_expansions: Option<usize>,
}

/// Settings for generated grids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Side length of a generated square grid
    #[serde(default = "default_grid_size")]
    pub size: usize,

    /// Upper bound on the fraction of cells turned into obstacles
    #[serde(default = "default_obstacle_ratio")]
    pub obstacle_ratio: f64,

    /// Fixed RNG seed (random when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Settings for road networks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadConfig {
    /// Sphere radius for great-circle distances, in kilometres
    #[serde(default = "default_earth_radius")]
    pub earth_radius_km: f64,
}

fn default_grid_size() -> usize {
    20
}

fn default_obstacle_ratio() -> f64 {
    0.25
}

fn default_earth_radius() -> f64 {
    EARTH_RADIUS_KM
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            size: default_grid_size(),
            obstacle_ratio: default_obstacle_ratio(),
            seed: None,
        }
    }
}

impl Default for RoadConfig {
    fn default() -> Self {
        RoadConfig {
            earth_radius_km: default_earth_radius(),
        }
    }
}
