use std::path::PathBuf;

use clap::Args;
use waypath_core::grid::Cell;
use waypath_core::road::Coord;

use super::parse::{parse_cell, parse_coord, parse_ratio, parse_size};

#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    /// Road network file (JSON)
    pub network: PathBuf,

    /// Start street name (case-insensitive)
    #[arg(long, requires = "to_street", conflicts_with_all = ["from", "to"])]
    pub from_street: Option<String>,

    /// Goal street name (case-insensitive)
    #[arg(long, requires = "from_street")]
    pub to_street: Option<String>,

    /// Start point as LON,LAT (must be a network node)
    #[arg(long, value_parser = parse_coord, requires = "to", required_unless_present = "from_street")]
    pub from: Option<Coord>,

    /// Goal point as LON,LAT
    #[arg(long, value_parser = parse_coord, requires = "from", conflicts_with = "to_street")]
    pub to: Option<Coord>,

    /// Guide the search with great-circle distance (A*)
    #[arg(long)]
    pub astar: bool,

    /// Include every discovery and expansion in the output
    #[arg(long)]
    pub trace: bool,
}

#[derive(Args, Debug, Clone)]
pub struct GridArgs {
    /// ASCII map file (S start, E end, # obstacle, . empty)
    #[arg(long, conflicts_with_all = ["size", "seed", "obstacle_ratio", "rounds"])]
    pub map: Option<PathBuf>,

    /// Side length of a generated square grid
    #[arg(long, value_parser = parse_size)]
    pub size: Option<usize>,

    /// Seed for reproducible obstacle generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Upper bound on the share of cells that become obstacles, in [0, 1)
    #[arg(long, value_parser = parse_ratio)]
    pub obstacle_ratio: Option<f64>,

    /// Start cell as ROW,COL (overrides the map or random start)
    #[arg(long, value_parser = parse_cell)]
    pub from: Option<Cell>,

    /// Goal cell as ROW,COL (overrides the map or random goal)
    #[arg(long, value_parser = parse_cell)]
    pub to: Option<Cell>,

    /// Number of searches, regenerating obstacles between them
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub rounds: u32,

    /// Search without the Manhattan heuristic
    #[arg(long)]
    pub dijkstra: bool,

    /// Include every discovery and expansion in the output
    #[arg(long)]
    pub trace: bool,
}

#[derive(Args, Debug, Clone)]
pub struct StreetsArgs {
    /// Road network file (JSON)
    pub network: PathBuf,

    /// Street name to look up; lists all streets when omitted
    pub query: Option<String>,
}
