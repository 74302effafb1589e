//! Output formatting for the grid command

use crate::cli::Cli;
use crate::commands::trace;
use waypath_core::error::Result;
use waypath_core::graph::{PathResult, SearchStatus, TraceRecorder};
use waypath_core::grid::{render_map, Cell, Grid};

/// One search round over a grid
pub struct GridReport<'a> {
    pub round: u32,
    pub rounds: u32,
    pub algorithm: &'a str,
    pub grid: &'a Grid,
    pub start: Cell,
    pub goal: Cell,
    pub seed: Option<u64>,
    pub result: &'a PathResult<Cell>,
    pub trace: Option<&'a TraceRecorder<Cell>>,
}

impl GridReport<'_> {
    fn map(&self) -> String {
        render_map(self.grid, self.start, self.goal, &self.result.nodes)
    }
}

/// Output in human-readable format
pub fn output_human(cli: &Cli, report: &GridReport) {
    let result = report.result;

    if report.rounds > 1 {
        println!("Round {}/{}", report.round, report.rounds);
    }

    if let Some(recorder) = report.trace {
        for line in trace::human_lines(recorder) {
            println!("  {}", line);
        }
    }

    if !cli.quiet {
        print!("{}", report.map());
    }

    match result.status {
        SearchStatus::Found => println!(
            "path found: cost {} over {} moves ({}, {} expanded)",
            result.total_cost,
            result.hops(),
            report.algorithm,
            result.stats.expanded
        ),
        SearchStatus::Unreachable => println!("no path found"),
        SearchStatus::Cancelled => {}
    }

    if cli.verbose {
        if let Some(seed) = report.seed {
            println!(
                "seed={} obstacles={} discovered={} stale={}",
                seed,
                report.grid.obstacle_count(),
                result.stats.discovered,
                result.stats.stale
            );
        }
    }
}

/// Build the JSON document for one round
pub fn output_json(report: &GridReport) -> Result<serde_json::Value> {
    let mut output = serde_json::to_value(report.result)?;

    if let Some(obj) = output.as_object_mut() {
        obj.insert("round".to_string(), serde_json::json!(report.round));
        obj.insert("algorithm".to_string(), serde_json::json!(report.algorithm));
        obj.insert("rows".to_string(), serde_json::json!(report.grid.rows()));
        obj.insert("cols".to_string(), serde_json::json!(report.grid.cols()));
        obj.insert("start".to_string(), serde_json::to_value(report.start)?);
        obj.insert("goal".to_string(), serde_json::to_value(report.goal)?);
        obj.insert(
            "obstacles".to_string(),
            serde_json::to_value(report.grid.obstacles())?,
        );
        obj.insert("map".to_string(), serde_json::json!(report.map()));
        if let Some(seed) = report.seed {
            obj.insert("seed".to_string(), serde_json::json!(seed));
        }
        if let Some(recorder) = report.trace {
            obj.insert("trace".to_string(), serde_json::to_value(&recorder.events)?);
        }
    }

    Ok(output)
}

/// Output in records format
pub fn output_records(report: &GridReport) {
    let result = report.result;
    let seed = report
        .seed
        .map(|s| format!(" seed={}", s))
        .unwrap_or_default();

    println!(
        "H waypath=1 records=1 mode=grid round={} rows={} cols={} start={} goal={} algorithm={} status={} found={} cost={} hops={}{}",
        report.round,
        report.grid.rows(),
        report.grid.cols(),
        report.start,
        report.goal,
        report.algorithm,
        result.status,
        result.found,
        result.total_cost,
        result.hops(),
        seed
    );

    for line in report.map().lines() {
        println!("M {}", line);
    }
    for (i, cell) in result.nodes.iter().enumerate() {
        println!("N {} {}", i, cell);
    }

    println!(
        "S expanded={} discovered={} stale={} obstacles={}",
        result.stats.expanded,
        result.stats.discovered,
        result.stats.stale,
        report.grid.obstacle_count()
    );

    if let Some(recorder) = report.trace {
        for line in trace::record_lines(recorder) {
            println!("{}", line);
        }
    }
}
