//! Waypath Core Library
//!
//! Shortest-path search over weighted graphs with a single engine shared by
//! plain Dijkstra and heuristic-guided A*.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod grid;
pub mod logging;
pub mod road;
