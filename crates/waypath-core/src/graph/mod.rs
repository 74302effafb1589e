//! Shortest-path search core
//!
//! - `traversal`: the [`GraphProvider`] trait graphs implement
//! - `adjacency`: a general adjacency-list graph with edge labels
//! - `heuristic`: zero, Manhattan and great-circle estimates
//! - `frontier`: min-priority frontier with lazy deletion
//! - `search`: the Dijkstra / A* engine
//! - `path`: predecessor-chain reconstruction
//! - `observer`: expansion/discovery hook

pub mod adjacency;
pub mod frontier;
pub mod heuristic;
pub mod observer;
pub mod path;
pub mod search;
pub mod traversal;
pub mod types;

pub use adjacency::AdjacencyGraph;
pub use frontier::Frontier;
pub use heuristic::{GreatCircle, Heuristic, Manhattan, ZeroHeuristic};
pub use observer::{NodeSnapshot, SearchEvent, SearchObserver, TraceEvent, TraceRecorder};
pub use search::{find_path, find_path_with, SearchOptions};
pub use traversal::GraphProvider;
pub use types::{Cost, NodeState, PathResult, SearchStats, SearchStatus};
