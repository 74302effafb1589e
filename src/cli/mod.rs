//! CLI argument parsing for waypath
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{GridArgs, RouteArgs, StreetsArgs};
pub use waypath_core::format::OutputFormat;

use parse::parse_format;

/// Waypath - shortest paths over road networks and obstacle grids
#[derive(Parser, Debug)]
#[command(name = "waypath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log search progress and timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true, env = "WAYPATH_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level waypath commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the shortest route between two streets or points of a road network
    Route(RouteArgs),

    /// Find a path across an obstacle grid (from a map file or generated)
    Grid(GridArgs),

    /// Look up a street in a road network
    Streets(StreetsArgs),
}
