use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Accumulated or per-edge traversal cost.
///
/// Costs are non-negative. `Cost::INFINITY` is the sentinel for nodes that
/// have not been reached yet and compares greater than any finite cost.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);
    pub const ONE: Cost = Cost(1.0);
    pub const INFINITY: Cost = Cost(f64::INFINITY);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Total order used by the frontier; never panics on NaN.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl std::ops::Sub for Cost {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Cost(self.0 - other.0)
    }
}

impl std::iter::Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Self {
        iter.fold(Cost::ZERO, |acc, c| acc + c)
    }
}

impl From<u32> for Cost {
    fn from(steps: u32) -> Self {
        Cost(steps as f64)
    }
}

impl From<f64> for Cost {
    fn from(cost: f64) -> Self {
        Cost(cost)
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.fract() == 0.0 && self.0.is_finite() {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{:.3}", self.0)
        }
    }
}

/// Per-node lifecycle within one search run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeState {
    Unseen,
    Frontier,
    Finalized,
}

/// Terminal outcome of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStatus {
    /// Goal reached; `nodes` holds the path
    Found,
    /// Frontier exhausted without reaching the goal
    Unreachable,
    /// Stopped by a cancellation flag or expansion budget
    Cancelled,
}

impl std::fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchStatus::Found => write!(f, "found"),
            SearchStatus::Unreachable => write!(f, "unreachable"),
            SearchStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Counters collected while a search runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes finalized (popped as the frontier minimum), goal included
    pub expanded: usize,
    /// Successful relaxations (first discoveries and improvements)
    pub discovered: usize,
    /// Frontier entries discarded because their node was already finalized
    pub stale: usize,
    /// Path nodes whose heuristic exceeded the true remaining cost
    /// (only counted when the admissibility check is enabled)
    pub heuristic_violations: usize,
}

/// Result of a single search invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult<N> {
    pub status: SearchStatus,
    pub found: bool,
    /// Start to goal inclusive; empty unless `found`
    pub nodes: Vec<N>,
    /// Sum of edge weights along `nodes`; zero unless `found`
    pub total_cost: Cost,
    /// One label per consecutive node pair, empty string when unlabelled.
    /// Only populated for labelled graphs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    pub stats: SearchStats,
}

impl<N> PathResult<N> {
    pub fn found(nodes: Vec<N>, total_cost: Cost, labels: Vec<String>, stats: SearchStats) -> Self {
        PathResult {
            status: SearchStatus::Found,
            found: true,
            nodes,
            total_cost,
            labels,
            stats,
        }
    }

    pub fn not_found(status: SearchStatus, stats: SearchStats) -> Self {
        debug_assert!(status != SearchStatus::Found);
        PathResult {
            status,
            found: false,
            nodes: Vec::new(),
            total_cost: Cost::ZERO,
            labels: Vec::new(),
            stats,
        }
    }

    /// Number of edges along the path
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Distinct non-empty labels in path order, consecutive repeats collapsed
    pub fn distinct_labels(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for label in self.labels.iter().filter(|l| !l.is_empty()) {
            if out.last() != Some(&label.as_str()) {
                out.push(label);
            }
        }
        out
    }
}
