//! Heuristic providers for goal-directed search.
//!
//! A heuristic must be admissible: `estimate(node, goal)` is non-negative
//! and never exceeds the true shortest remaining distance. The engine does
//! not verify this unless the admissibility check is switched on; an
//! inadmissible heuristic may produce a suboptimal path.

use super::types::Cost;
use crate::config::EARTH_RADIUS_KM;
use crate::grid::Cell;
use crate::road::{haversine, Coord};

/// Estimate of the remaining cost from a node to the goal
pub trait Heuristic<N> {
    fn estimate(&self, node: &N, goal: &N) -> Cost;
}

impl<N, F> Heuristic<N> for F
where
    F: Fn(&N, &N) -> Cost,
{
    fn estimate(&self, node: &N, goal: &N) -> Cost {
        self(node, goal)
    }
}

/// Always zero; turns A* into Dijkstra
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<N> Heuristic<N> for ZeroHeuristic {
    fn estimate(&self, _node: &N, _goal: &N) -> Cost {
        Cost::ZERO
    }
}

/// L1 distance between grid cells; exact lower bound for unit orthogonal moves
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl Heuristic<Cell> for Manhattan {
    fn estimate(&self, node: &Cell, goal: &Cell) -> Cost {
        Cost::new(node.manhattan(goal) as f64)
    }
}

/// Great-circle distance; admissible when edge weights are themselves
/// great-circle distances on a sphere of the same radius
#[derive(Debug, Clone, Copy)]
pub struct GreatCircle {
    pub radius_km: f64,
}

impl Default for GreatCircle {
    fn default() -> Self {
        GreatCircle {
            radius_km: EARTH_RADIUS_KM,
        }
    }
}

impl Heuristic<Coord> for GreatCircle {
    fn estimate(&self, node: &Coord, goal: &Coord) -> Cost {
        Cost::new(haversine(*node, *goal, self.radius_km))
    }
}
