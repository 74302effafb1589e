//! Observation hook for search progress.
//!
//! Observers are invoked synchronously, in algorithm order. They drive
//! external consumers such as step-by-step rendering or instrumentation;
//! the engine never depends on them.

use serde::Serialize;

use super::types::{Cost, NodeState};

/// What happened to a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEvent {
    /// Best known distance improved; node pushed onto the frontier
    Discovered,
    /// Node finalized and its neighbors relaxed
    Expanded,
}

impl std::fmt::Display for SearchEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchEvent::Discovered => write!(f, "discovered"),
            SearchEvent::Expanded => write!(f, "expanded"),
        }
    }
}

/// Search state of a node at the time of an event
#[derive(Debug, Clone, Copy)]
pub struct NodeSnapshot<'a, N> {
    pub g: Cost,
    pub h: Cost,
    pub f: Cost,
    pub predecessor: Option<&'a N>,
    pub state: NodeState,
}

/// Sink for search events
pub trait SearchObserver<N> {
    fn on_event(&mut self, event: SearchEvent, node: &N, snapshot: &NodeSnapshot<'_, N>);
}

impl<N, F> SearchObserver<N> for F
where
    F: FnMut(SearchEvent, &N, &NodeSnapshot<'_, N>),
{
    fn on_event(&mut self, event: SearchEvent, node: &N, snapshot: &NodeSnapshot<'_, N>) {
        self(event, node, snapshot)
    }
}

/// Owned copy of one observed event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceEvent<N> {
    pub event: SearchEvent,
    pub node: N,
    pub g: Cost,
    pub h: Cost,
    pub f: Cost,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predecessor: Option<N>,
}

/// Observer that records every event
#[derive(Debug, Clone)]
pub struct TraceRecorder<N> {
    pub events: Vec<TraceEvent<N>>,
}

impl<N> Default for TraceRecorder<N> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<N: Clone> TraceRecorder<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes in the order they were expanded
    pub fn expansion_order(&self) -> Vec<N> {
        self.events
            .iter()
            .filter(|e| e.event == SearchEvent::Expanded)
            .map(|e| e.node.clone())
            .collect()
    }
}

impl<N: Clone> SearchObserver<N> for TraceRecorder<N> {
    fn on_event(&mut self, event: SearchEvent, node: &N, snapshot: &NodeSnapshot<'_, N>) {
        self.events.push(TraceEvent {
            event,
            node: node.clone(),
            g: snapshot.g,
            h: snapshot.h,
            f: snapshot.f,
            predecessor: snapshot.predecessor.cloned(),
        });
    }
}
