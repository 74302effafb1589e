//! Output formatting for the route command

use std::time::Duration;

use crate::cli::Cli;
use crate::commands::trace;
use waypath_core::error::Result;
use waypath_core::format::escape_quotes;
use waypath_core::graph::{PathResult, SearchStatus, TraceRecorder};
use waypath_core::road::Coord;

use super::Endpoints;

/// Everything a route writer needs
pub struct RouteReport<'a> {
    pub algorithm: &'a str,
    pub endpoints: &'a Endpoints,
    pub result: &'a PathResult<Coord>,
    pub trace: Option<&'a TraceRecorder<Coord>>,
    pub elapsed: Duration,
}

/// Output in human-readable format
pub fn output_human(cli: &Cli, report: &RouteReport) {
    let RouteReport {
        endpoints, result, ..
    } = report;

    if let Some(recorder) = report.trace {
        println!("Trace ({} events):", recorder.events.len());
        for line in trace::human_lines(recorder) {
            println!("  {}", line);
        }
        println!();
    }

    match result.status {
        SearchStatus::Found => {}
        SearchStatus::Unreachable => {
            println!("no path found from {} to {}", endpoints.from, endpoints.to);
            return;
        }
        // Reported as an error by the caller
        SearchStatus::Cancelled => return,
    }

    println!(
        "{} -> {}: {} km over {} segments ({})",
        endpoints.from,
        endpoints.to,
        result.total_cost,
        result.hops(),
        report.algorithm
    );

    let streets = result.distinct_labels();
    if !streets.is_empty() && !cli.quiet {
        println!("Streets: {}", streets.join(" -> "));
    }

    if !cli.quiet {
        for (i, node) in result.nodes.iter().enumerate() {
            let street = i
                .checked_sub(1)
                .and_then(|prev| result.labels.get(prev))
                .map(String::as_str)
                .unwrap_or_default();
            println!("  {:>4}  {:.6},{:.6}  {}", i, node.lon, node.lat, street);
        }
    }

    if cli.verbose {
        println!(
            "expanded={} discovered={} stale={} elapsed={:?}",
            result.stats.expanded, result.stats.discovered, result.stats.stale, report.elapsed
        );
    }
}

/// Output in JSON format
pub fn output_json(report: &RouteReport) -> Result<()> {
    let mut output = serde_json::to_value(report.result)?;

    if let Some(obj) = output.as_object_mut() {
        obj.insert("algorithm".to_string(), serde_json::json!(report.algorithm));
        obj.insert(
            "from".to_string(),
            serde_json::json!({
                "name": report.endpoints.from,
                "node": report.endpoints.start,
            }),
        );
        obj.insert(
            "to".to_string(),
            serde_json::json!({
                "name": report.endpoints.to,
                "node": report.endpoints.goal,
            }),
        );
        obj.insert(
            "elapsed_ms".to_string(),
            serde_json::json!(report.elapsed.as_secs_f64() * 1000.0),
        );
        if let Some(recorder) = report.trace {
            obj.insert("trace".to_string(), serde_json::to_value(&recorder.events)?);
        }
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Output in records format
pub fn output_records(report: &RouteReport) {
    let RouteReport {
        endpoints, result, ..
    } = report;

    println!(
        "H waypath=1 records=1 mode=route algorithm={} from=\"{}\" to=\"{}\" status={} found={} cost={} hops={}",
        report.algorithm,
        escape_quotes(&endpoints.from),
        escape_quotes(&endpoints.to),
        result.status,
        result.found,
        result.total_cost,
        result.hops()
    );

    for (i, node) in result.nodes.iter().enumerate() {
        println!("N {} {}", i, node);
    }
    for (i, label) in result.labels.iter().enumerate() {
        println!("E {} {} \"{}\"", i, i + 1, escape_quotes(label));
    }

    println!(
        "S expanded={} discovered={} stale={} violations={}",
        result.stats.expanded,
        result.stats.discovered,
        result.stats.stale,
        result.stats.heuristic_violations
    );

    if let Some(recorder) = report.trace {
        for line in trace::record_lines(recorder) {
            println!("{}", line);
        }
    }
}
