//! `waypath route` command - shortest route through a road network
//!
//! - endpoints by street name (start at the first endpoint of the start
//!   street's segment, end at the second endpoint of the goal street's) or
//!   by exact `LON,LAT` node
//! - Dijkstra by default, great-circle A* with `--astar`
//! - `--trace` records every discovery and expansion

pub mod format;

use std::time::Instant;

use tracing::{debug, warn};

use crate::cli::{OutputFormat, RouteArgs};
use crate::commands::dispatch::CommandContext;
use waypath_core::error::{Result, WaypathError};
use waypath_core::graph::{
    find_path_with, GreatCircle, Heuristic, SearchObserver, SearchStatus, TraceRecorder,
    ZeroHeuristic,
};
use waypath_core::road::{build_graph, find_street, load_network, Coord, RoadNetwork};
use waypath_core::trace_time;

use self::format::{output_human, output_json, output_records, RouteReport};

/// Resolved start and goal with the names they were given by
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    pub start: Coord,
    pub goal: Coord,
    pub from: String,
    pub to: String,
}

/// Turn street names or coordinates into graph nodes
pub fn resolve_endpoints(network: &RoadNetwork, args: &RouteArgs) -> Result<Endpoints> {
    match (&args.from_street, &args.to_street, args.from, args.to) {
        (Some(from), Some(to), _, _) => {
            let (start_index, from_name) = find_street(&network.edges, from)
                .ok_or_else(|| WaypathError::not_found("street", from))?;
            let (goal_index, to_name) = find_street(&network.edges, to)
                .ok_or_else(|| WaypathError::not_found("street", to))?;
            Ok(Endpoints {
                start: network.edges[start_index].from,
                goal: network.edges[goal_index].to,
                from: from_name.to_string(),
                to: to_name.to_string(),
            })
        }
        (_, _, Some(start), Some(goal)) => Ok(Endpoints {
            start,
            goal,
            from: start.to_string(),
            to: goal.to_string(),
        }),
        _ => Err(WaypathError::UsageError(
            "route needs --from-street/--to-street or --from/--to".to_string(),
        )),
    }
}

/// Execute the route command
pub fn execute(ctx: &CommandContext, args: &RouteArgs) -> Result<()> {
    let start = Instant::now();

    let network = load_network(&args.network)?;
    trace_time!(start, "load_network", nodes = network.nodes.len(), edges = network.edges.len());
    if network.skipped_edges > 0 {
        warn!(
            skipped = network.skipped_edges,
            "edges reference nodes without coordinates"
        );
    }

    let radius_km = ctx.config.road.earth_radius_km;
    let graph = build_graph(&network.edges, radius_km);
    trace_time!(start, "build_graph", nodes = graph.node_count());

    let endpoints = resolve_endpoints(&network, args)?;
    debug!(from = %endpoints.from, to = %endpoints.to, start = %endpoints.start, goal = %endpoints.goal, "endpoints");

    let great_circle = GreatCircle { radius_km };
    let heuristic: &dyn Heuristic<Coord> = if args.astar {
        &great_circle
    } else {
        &ZeroHeuristic
    };
    let algorithm = if args.astar { "astar" } else { "dijkstra" };

    let mut recorder = TraceRecorder::new();
    let observer = if args.trace {
        Some(&mut recorder as &mut dyn SearchObserver<Coord>)
    } else {
        None
    };

    let search_start = Instant::now();
    let result = find_path_with(
        &graph,
        &endpoints.start,
        &endpoints.goal,
        heuristic,
        observer,
        &ctx.search_options(),
    )?;
    let elapsed = search_start.elapsed();
    trace_time!(start, "search", expanded = result.stats.expanded);

    let report = RouteReport {
        algorithm,
        endpoints: &endpoints,
        result: &result,
        trace: args.trace.then_some(&recorder),
        elapsed,
    };

    match ctx.cli.format {
        OutputFormat::Json => output_json(&report)?,
        OutputFormat::Human => output_human(ctx.cli, &report),
        OutputFormat::Records => output_records(&report),
    }

    if result.status == SearchStatus::Cancelled {
        return Err(WaypathError::Cancelled);
    }
    Ok(())
}
