//! Unified shortest-path search.
//!
//! One engine serves both Dijkstra (zero heuristic) and A* (admissible
//! heuristic). Per-node state lives in a map owned by a single call, so a
//! graph can be shared read-only between concurrent searches.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, trace, warn};

use super::frontier::Frontier;
use super::heuristic::Heuristic;
use super::observer::{NodeSnapshot, SearchEvent, SearchObserver};
use super::path::{edge_labels, reconstruct_path};
use super::traversal::GraphProvider;
use super::types::{Cost, NodeState, PathResult, SearchStats, SearchStatus};
use crate::error::{Result, WaypathError};

/// Knobs for a single search run
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Polled once per expansion; when set the search stops as cancelled
    pub cancel: Option<Arc<AtomicBool>>,
    /// Stop as cancelled once this many nodes have been expanded
    pub max_expansions: Option<usize>,
    /// Count path nodes whose heuristic overestimates the remaining cost
    pub check_admissibility: bool,
}

impl SearchOptions {
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn should_stop(&self, expanded: usize) -> bool {
        let cancelled = self
            .cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst));
        let exhausted = self.max_expansions.is_some_and(|max| expanded >= max);
        cancelled || exhausted
    }
}

/// Best known distance, estimate and predecessor of one node
#[derive(Debug, Clone)]
struct NodeRecord<N> {
    g: Cost,
    h: Cost,
    predecessor: Option<N>,
    state: NodeState,
}

impl<N> NodeRecord<N> {
    fn unseen() -> Self {
        NodeRecord {
            g: Cost::INFINITY,
            h: Cost::ZERO,
            predecessor: None,
            state: NodeState::Unseen,
        }
    }

    fn f(&self) -> Cost {
        self.g + self.h
    }

    fn snapshot(&self) -> NodeSnapshot<'_, N> {
        NodeSnapshot {
            g: self.g,
            h: self.h,
            f: self.f(),
            predecessor: self.predecessor.as_ref(),
            state: self.state,
        }
    }
}

/// Inputs shared by every relaxation in one run
struct SearchContext<'a, G: GraphProvider, H: ?Sized> {
    graph: &'a G,
    goal: &'a G::Node,
    heuristic: &'a H,
}

/// State tracked during one search run
struct SearchState<N> {
    records: HashMap<N, NodeRecord<N>>,
    frontier: Frontier<N>,
    stats: SearchStats,
}

type Observer<'o, N> = Option<&'o mut dyn SearchObserver<N>>;

impl<N: Clone + Eq + std::hash::Hash + std::fmt::Debug> SearchState<N> {
    fn new(start: &N, h: Cost) -> Self {
        let mut records = HashMap::new();
        records.insert(
            start.clone(),
            NodeRecord {
                g: Cost::ZERO,
                h,
                predecessor: None,
                state: NodeState::Frontier,
            },
        );
        let mut frontier = Frontier::new();
        frontier.push(h, start.clone());
        Self {
            records,
            frontier,
            stats: SearchStats::default(),
        }
    }

    /// Main loop: expand until the goal is finalized or the frontier empties
    fn run<G, H>(
        &mut self,
        ctx: &SearchContext<'_, G, H>,
        observer: &mut Observer<'_, N>,
        options: &SearchOptions,
    ) -> SearchStatus
    where
        G: GraphProvider<Node = N>,
        H: Heuristic<N> + ?Sized,
    {
        let mut neighbors = Vec::new();

        loop {
            if options.should_stop(self.stats.expanded) {
                return SearchStatus::Cancelled;
            }

            let Some(entry) = self.frontier.pop() else {
                return SearchStatus::Unreachable;
            };
            let current = entry.node;

            let Some(record) = self.records.get_mut(&current) else {
                continue;
            };
            // Skip stale duplicates
            if record.state == NodeState::Finalized {
                self.stats.stale += 1;
                continue;
            }
            record.state = NodeState::Finalized;
            self.stats.expanded += 1;

            if &current == ctx.goal {
                return SearchStatus::Found;
            }

            let current_g = record.g;
            trace!(node = ?current, g = %current_g, "expand");

            neighbors.clear();
            ctx.graph.neighbors(&current, &mut neighbors);
            for (neighbor, weight) in neighbors.drain(..) {
                self.relax(ctx, &current, current_g, neighbor, weight, observer);
            }

            if let (Some(obs), Some(record)) = (observer.as_deref_mut(), self.records.get(&current))
            {
                obs.on_event(SearchEvent::Expanded, &current, &record.snapshot());
            }
        }
    }

    /// Improve `neighbor` through `current` if strictly shorter
    fn relax<G, H>(
        &mut self,
        ctx: &SearchContext<'_, G, H>,
        current: &N,
        current_g: Cost,
        neighbor: N,
        weight: Cost,
        observer: &mut Observer<'_, N>,
    ) where
        G: GraphProvider<Node = N>,
        H: Heuristic<N> + ?Sized,
    {
        debug_assert!(weight.value() >= 0.0, "negative edge weight");

        if ctx.graph.is_blocked(&neighbor) {
            return;
        }

        let candidate = current_g + weight;
        let record = self
            .records
            .entry(neighbor.clone())
            .or_insert_with(NodeRecord::unseen);

        if record.state == NodeState::Finalized || candidate >= record.g {
            return;
        }

        record.g = candidate;
        record.h = ctx.heuristic.estimate(&neighbor, ctx.goal);
        record.predecessor = Some(current.clone());
        record.state = NodeState::Frontier;

        self.frontier.push(record.f(), neighbor.clone());
        self.stats.discovered += 1;

        if let Some(obs) = observer.as_deref_mut() {
            obs.on_event(SearchEvent::Discovered, &neighbor, &record.snapshot());
        }
    }

    /// Build the successful result from the predecessor chain
    fn finish<G>(self, graph: &G, start: &N, goal: &N, options: &SearchOptions) -> Result<PathResult<N>>
    where
        G: GraphProvider<Node = N>,
    {
        let records = &self.records;
        let nodes = reconstruct_path(start, goal, records.len(), |n| {
            records.get(n).and_then(|r| r.predecessor.clone())
        })
        .ok_or_else(|| WaypathError::Other("predecessor chain does not reach start".to_string()))?;

        let total_cost = records.get(goal).map(|r| r.g).unwrap_or(Cost::ZERO);
        let labels = if G::LABELLED {
            edge_labels(graph, &nodes)
        } else {
            Vec::new()
        };

        let mut stats = self.stats;
        if options.check_admissibility {
            stats.heuristic_violations = count_violations(records, &nodes, total_cost);
        }

        Ok(PathResult::found(nodes, total_cost, labels, stats))
    }
}

/// Compare each path node's estimate with its now-known remaining cost
fn count_violations<N: Eq + std::hash::Hash + std::fmt::Debug>(
    records: &HashMap<N, NodeRecord<N>>,
    nodes: &[N],
    total_cost: Cost,
) -> usize {
    let tolerance = 1e-9 * total_cost.value().max(1.0);
    let mut violations = 0;

    for node in nodes {
        let Some(record) = records.get(node) else {
            continue;
        };
        let remaining = total_cost - record.g;
        if record.h.value() > remaining.value() + tolerance {
            warn!(
                node = ?node,
                estimate = %record.h,
                remaining = %remaining,
                "heuristic overestimates remaining cost"
            );
            violations += 1;
        }
    }

    violations
}

/// Find the cheapest path from `start` to `goal`.
///
/// Pass [`super::ZeroHeuristic`] for Dijkstra or an admissible heuristic for
/// A*. An unreachable goal is a normal result (`found == false`); only a start
/// node missing from the graph is an error.
pub fn find_path<G, H>(
    graph: &G,
    start: &G::Node,
    goal: &G::Node,
    heuristic: &H,
    observer: Option<&mut dyn SearchObserver<G::Node>>,
) -> Result<PathResult<G::Node>>
where
    G: GraphProvider,
    H: Heuristic<G::Node> + ?Sized,
{
    find_path_with(graph, start, goal, heuristic, observer, &SearchOptions::default())
}

/// [`find_path`] with cancellation, expansion budget and admissibility check
#[tracing::instrument(skip_all, fields(start = ?start, goal = ?goal))]
pub fn find_path_with<G, H>(
    graph: &G,
    start: &G::Node,
    goal: &G::Node,
    heuristic: &H,
    mut observer: Option<&mut dyn SearchObserver<G::Node>>,
    options: &SearchOptions,
) -> Result<PathResult<G::Node>>
where
    G: GraphProvider,
    H: Heuristic<G::Node> + ?Sized,
{
    if !graph.contains(start) || graph.is_blocked(start) {
        return Err(WaypathError::invalid_start(start));
    }

    let timer = Instant::now();
    let ctx = SearchContext {
        graph,
        goal,
        heuristic,
    };

    let mut state = SearchState::new(start, heuristic.estimate(start, goal));
    let status = state.run(&ctx, &mut observer, options);

    let result = match status {
        SearchStatus::Found => state.finish(graph, start, goal, options)?,
        other => PathResult::not_found(other, state.stats),
    };

    debug!(
        status = %result.status,
        cost = %result.total_cost,
        hops = result.hops(),
        expanded = result.stats.expanded,
        discovered = result.stats.discovered,
        stale = result.stats.stale,
        elapsed = ?timer.elapsed(),
        "search finished"
    );

    Ok(result)
}
