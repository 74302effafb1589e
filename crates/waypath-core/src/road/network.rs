//! Road graph construction and street lookup

use super::{haversine, Coord};
use crate::graph::{AdjacencyGraph, Cost};

/// Road graph keyed by coordinate
pub type RoadGraph = AdjacencyGraph<Coord>;

/// One street segment between two points
#[derive(Debug, Clone, PartialEq)]
pub struct RoadEdge {
    pub from: Coord,
    pub to: Coord,
    pub name: Option<String>,
}

impl RoadEdge {
    pub fn new(from: Coord, to: Coord, name: Option<&str>) -> Self {
        RoadEdge {
            from,
            to,
            name: name.map(str::to_string),
        }
    }

    /// Street name, or "" when the segment is unnamed
    pub fn street(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// Build an undirected road graph.
///
/// Every segment is inserted in both directions, weighted by its great-circle
/// length on a sphere of `radius_km`. Parallel segments are all kept; the
/// search naturally prefers the cheaper one. The first non-empty name seen
/// for a pair labels it.
pub fn build_graph<'a>(edges: impl IntoIterator<Item = &'a RoadEdge>, radius_km: f64) -> RoadGraph {
    let mut graph = RoadGraph::new();
    for edge in edges {
        let weight = Cost::new(haversine(edge.from, edge.to, radius_km));
        graph.add_edge(edge.from, edge.to, weight, edge.name.as_deref());
    }
    tracing::debug!(
        nodes = graph.node_count(),
        arcs = graph.arc_count(),
        "built road graph"
    );
    graph
}

/// First segment whose name matches `query` ignoring case.
///
/// Returns the segment index and its name as stored.
pub fn find_street<'a>(edges: &'a [RoadEdge], query: &str) -> Option<(usize, &'a str)> {
    let query = query.trim().to_lowercase();
    edges.iter().enumerate().find_map(|(i, edge)| {
        let name = edge.name.as_deref()?;
        (name.to_lowercase() == query).then_some((i, name))
    })
}
