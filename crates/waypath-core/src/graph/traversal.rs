use std::fmt::Debug;
use std::hash::Hash;

use super::types::Cost;

/// Trait for providing graph adjacency to the search engine.
///
/// `neighbors` must be a pure function of the graph's topology for the
/// duration of a search. A node the graph does not know about has no
/// neighbors; it is a dead end, not an error.
pub trait GraphProvider {
    type Node: Clone + Eq + Hash + Debug;

    /// Whether `edge_label` can return anything
    const LABELLED: bool = false;

    /// Whether `node` is part of the graph
    fn contains(&self, node: &Self::Node) -> bool;

    /// Append every one-hop `(neighbor, weight)` pair of `node` to `out`.
    /// The caller clears `out` before calling. Weights must be non-negative.
    fn neighbors(&self, node: &Self::Node, out: &mut Vec<(Self::Node, Cost)>);

    /// Whether `node` is an obstacle that must never be entered
    fn is_blocked(&self, _node: &Self::Node) -> bool {
        false
    }

    /// Label of the edge `from -> to`, if any
    fn edge_label(&self, _from: &Self::Node, _to: &Self::Node) -> Option<&str> {
        None
    }
}
