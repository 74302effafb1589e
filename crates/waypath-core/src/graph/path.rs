//! Path reconstruction utilities for graph search

use super::traversal::GraphProvider;

/// Walk predecessor links from `goal` back to `start`.
///
/// Returns the nodes in start-to-goal order, or `None` if the chain breaks
/// before reaching `start` (or loops longer than `limit` steps).
pub fn reconstruct_path<N, F>(start: &N, goal: &N, limit: usize, mut predecessor: F) -> Option<Vec<N>>
where
    N: Clone + PartialEq,
    F: FnMut(&N) -> Option<N>,
{
    let mut path = vec![goal.clone()];
    let mut current = goal.clone();

    while &current != start {
        if path.len() > limit {
            return None;
        }
        current = predecessor(&current)?;
        path.push(current.clone());
    }

    path.reverse();
    Some(path)
}

/// Label of each consecutive edge along `nodes`; missing labels become "".
pub fn edge_labels<G: GraphProvider>(graph: &G, nodes: &[G::Node]) -> Vec<String> {
    nodes
        .windows(2)
        .map(|pair| {
            graph
                .edge_label(&pair[0], &pair[1])
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}
