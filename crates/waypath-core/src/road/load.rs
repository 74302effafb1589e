//! Road-network file loading.
//!
//! ```json
//! {
//!   "nodes": { "1": { "x": 20.457, "y": 44.812 }, "2": { "x": 20.459, "y": 44.813 } },
//!   "edges": [ { "source": "1", "target": "2", "name": "Knez Mihailova" } ]
//! }
//! ```
//! `x` is longitude and `y` latitude. Nodes missing either coordinate are
//! dropped, and edges touching an unknown or dropped node are skipped.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::{Coord, RoadEdge};
use crate::error::{Result, WaypathError};

#[derive(Debug, Deserialize)]
struct RawNetwork {
    #[serde(default)]
    nodes: BTreeMap<String, RawNode>,
    #[serde(default)]
    edges: Vec<RawEdge>,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    x: Option<f64>,
    y: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawEdge {
    source: String,
    target: String,
    #[serde(default)]
    name: Option<String>,
}

/// A loaded road network: node positions and street segments in file order
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    pub nodes: BTreeMap<String, Coord>,
    pub edges: Vec<RoadEdge>,
    /// Edges dropped because an endpoint was unknown
    pub skipped_edges: usize,
}

impl RoadNetwork {
    /// Distinct street names in file order
    pub fn street_names(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.edges
            .iter()
            .filter_map(|e| e.name.as_deref())
            .filter(|name| !name.is_empty() && seen.insert(name.to_lowercase()))
            .collect()
    }
}

/// Parse a road network from JSON text
pub fn parse_network(text: &str) -> Result<RoadNetwork> {
    let raw: RawNetwork =
        serde_json::from_str(text).map_err(|e| WaypathError::malformed("road network", e))?;

    let nodes: BTreeMap<String, Coord> = raw
        .nodes
        .into_iter()
        .filter_map(|(id, node)| match (node.x, node.y) {
            (Some(x), Some(y)) => Some((id, Coord::new(x, y))),
            _ => None,
        })
        .filter(|(_, coord)| coord.is_finite())
        .collect();

    let mut edges = Vec::with_capacity(raw.edges.len());
    let mut skipped_edges = 0;
    for edge in raw.edges {
        match (nodes.get(&edge.source), nodes.get(&edge.target)) {
            (Some(&from), Some(&to)) => edges.push(RoadEdge {
                from,
                to,
                name: edge.name,
            }),
            _ => skipped_edges += 1,
        }
    }

    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        skipped_edges,
        "parsed road network"
    );

    Ok(RoadNetwork {
        nodes,
        edges,
        skipped_edges,
    })
}

/// Read and parse a road-network file
pub fn load_network(path: &Path) -> Result<RoadNetwork> {
    let text = std::fs::read_to_string(path)?;
    parse_network(&text)
}
