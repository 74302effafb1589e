use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use super::traversal::GraphProvider;
use super::types::Cost;

/// Adjacency-list graph with optional edge labels.
///
/// Edges are immutable once a search starts (searches borrow the graph).
/// Neighbor order is insertion order, which keeps expansion deterministic.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N> {
    adjacency: HashMap<N, Vec<(N, Cost)>>,
    labels: HashMap<(N, N), String>,
    arcs: usize,
}

impl<N> Default for AdjacencyGraph<N> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            labels: HashMap::new(),
            arcs: 0,
        }
    }
}

impl<N: Clone + Eq + Hash> AdjacencyGraph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node with no edges
    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Add a directed edge. The first non-empty label for a pair is kept.
    pub fn add_arc(&mut self, from: N, to: N, cost: Cost, label: Option<&str>) {
        debug_assert!(cost.value() >= 0.0, "negative edge weight");
        if let Some(label) = label.filter(|l| !l.is_empty()) {
            self.labels
                .entry((from.clone(), to.clone()))
                .or_insert_with(|| label.to_string());
        }
        self.add_node(to.clone());
        self.adjacency.entry(from).or_default().push((to, cost));
        self.arcs += 1;
    }

    /// Add an undirected edge (one arc in each direction)
    pub fn add_edge(&mut self, a: N, b: N, cost: Cost, label: Option<&str>) {
        self.add_arc(a.clone(), b.clone(), cost, label);
        self.add_arc(b, a, cost, label);
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed arcs (an undirected edge counts twice)
    pub fn arc_count(&self) -> usize {
        self.arcs
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Cheapest direct edge weight from `from` to `to`
    pub fn edge_cost(&self, from: &N, to: &N) -> Option<Cost> {
        self.adjacency
            .get(from)?
            .iter()
            .filter(|(n, _)| n == to)
            .map(|(_, c)| *c)
            .min_by(|a, b| a.total_cmp(b))
    }
}

impl<N: Clone + Eq + Hash + Debug> GraphProvider for AdjacencyGraph<N> {
    type Node = N;

    const LABELLED: bool = true;

    fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    fn neighbors(&self, node: &N, out: &mut Vec<(N, Cost)>) {
        if let Some(edges) = self.adjacency.get(node) {
            out.extend(edges.iter().cloned());
        }
    }

    fn edge_label(&self, from: &N, to: &N) -> Option<&str> {
        self.labels
            .get(&(from.clone(), to.clone()))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undirected_edges_are_symmetric() {
        let mut g = AdjacencyGraph::new();
        g.add_edge("A", "B", Cost::from(2), Some("Main"));

        let mut out = Vec::new();
        g.neighbors(&"A", &mut out);
        assert_eq!(out, vec![("B", Cost::from(2))]);
        out.clear();
        g.neighbors(&"B", &mut out);
        assert_eq!(out, vec![("A", Cost::from(2))]);

        assert_eq!(g.edge_label(&"A", &"B"), Some("Main"));
        assert_eq!(g.edge_label(&"B", &"A"), Some("Main"));
        assert_eq!(g.arc_count(), 2);
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn test_unknown_node_is_dead_end() {
        let g: AdjacencyGraph<&str> = AdjacencyGraph::new();
        let mut out = Vec::new();
        g.neighbors(&"missing", &mut out);
        assert!(out.is_empty());
        assert!(!g.contains(&"missing"));
    }

    #[test]
    fn test_first_label_wins_and_empty_is_ignored() {
        let mut g = AdjacencyGraph::new();
        g.add_edge(1, 2, Cost::ONE, Some(""));
        g.add_edge(1, 2, Cost::from(3), Some("First"));
        g.add_edge(1, 2, Cost::from(4), Some("Second"));
        assert_eq!(g.edge_label(&1, &2), Some("First"));
        assert_eq!(g.edge_cost(&1, &2), Some(Cost::ONE));
    }

    #[test]
    fn test_directed_arc_target_is_known_node() {
        let mut g = AdjacencyGraph::new();
        g.add_arc('x', 'y', Cost::ONE, None);
        assert!(g.contains(&'y'));
        let mut out = Vec::new();
        g.neighbors(&'y', &mut out);
        assert!(out.is_empty());
    }
}
