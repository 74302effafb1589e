//! `waypath grid` command - path across an obstacle grid
//!
//! - `--map FILE` reads an ASCII map; otherwise a square grid is generated
//!   from `--size`, `--obstacle-ratio` and `--seed` (falling back to the
//!   `[grid]` config section)
//! - A* with Manhattan distance by default, Dijkstra with `--dijkstra`
//! - `--rounds N` regenerates obstacles between searches, keeping endpoints

pub mod format;

use std::fs;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::cli::{GridArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use waypath_core::error::{Result, WaypathError};
use waypath_core::graph::{
    find_path_with, Heuristic, Manhattan, SearchObserver, SearchStatus, TraceRecorder,
    ZeroHeuristic,
};
use waypath_core::grid::{generate_grid, parse_map, regenerate_obstacles, Cell, Grid};
use waypath_core::trace_time;

use self::format::{output_human, output_json, output_records, GridReport};

/// Grid, endpoints and the generator state used to build them
pub struct GridSetup {
    pub grid: Grid,
    pub start: Cell,
    pub goal: Cell,
    /// Present for generated grids; drives regeneration between rounds
    pub generator: Option<Generator>,
}

pub struct Generator {
    pub seed: u64,
    pub ratio: f64,
    pub rng: StdRng,
}

/// Load the map or generate a grid, then apply endpoint overrides
pub fn prepare_grid(ctx: &CommandContext, args: &GridArgs) -> Result<GridSetup> {
    let setup = match &args.map {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            let parsed = parse_map(&text)?;
            GridSetup {
                grid: parsed.grid,
                start: args.from.unwrap_or(parsed.start),
                goal: args.to.unwrap_or(parsed.goal),
                generator: None,
            }
        }
        None => {
            let size = args.size.unwrap_or(ctx.config.grid.size);
            let ratio = args.obstacle_ratio.unwrap_or(ctx.config.grid.obstacle_ratio);
            let seed = args
                .seed
                .or(ctx.config.grid.seed)
                .unwrap_or_else(rand::random);
            let mut rng = StdRng::seed_from_u64(seed);

            let generated = generate_grid(&mut rng, size, size, ratio)?;
            let mut grid = generated.grid;
            let start = args.from.unwrap_or(generated.start);
            let goal = args.to.unwrap_or(generated.goal);
            if args.from.is_some() || args.to.is_some() {
                // Keep explicit endpoints clear of obstacles
                regenerate_obstacles(&mut grid, &mut rng, start, goal, ratio)?;
            }

            GridSetup {
                grid,
                start,
                goal,
                generator: Some(Generator { seed, ratio, rng }),
            }
        }
    };

    setup.grid.check_endpoints(&setup.start, &setup.goal)?;
    Ok(setup)
}

/// Execute the grid command
pub fn execute(ctx: &CommandContext, args: &GridArgs) -> Result<()> {
    let start = Instant::now();

    let mut setup = prepare_grid(ctx, args)?;
    trace_time!(
        start,
        "prepare_grid",
        rows = setup.grid.rows(),
        obstacles = setup.grid.obstacle_count()
    );
    debug!(start = %setup.start, goal = %setup.goal, rounds = args.rounds, "grid endpoints");

    let heuristic: &dyn Heuristic<Cell> = if args.dijkstra {
        &ZeroHeuristic
    } else {
        &Manhattan
    };
    let algorithm = if args.dijkstra { "dijkstra" } else { "astar" };
    let options = ctx.search_options();
    let mut json_reports = Vec::new();
    let mut cancelled = false;

    for round in 1..=args.rounds {
        if round > 1 {
            if let Some(generator) = setup.generator.as_mut() {
                regenerate_obstacles(
                    &mut setup.grid,
                    &mut generator.rng,
                    setup.start,
                    setup.goal,
                    generator.ratio,
                )?;
            }
        }

        let mut recorder = TraceRecorder::new();
        let observer = if args.trace {
            Some(&mut recorder as &mut dyn SearchObserver<Cell>)
        } else {
            None
        };

        let result = find_path_with(
            &setup.grid,
            &setup.start,
            &setup.goal,
            heuristic,
            observer,
            &options,
        )?;
        trace_time!(start, "search", round = round, expanded = result.stats.expanded);

        let report = GridReport {
            round,
            rounds: args.rounds,
            algorithm,
            grid: &setup.grid,
            start: setup.start,
            goal: setup.goal,
            seed: setup.generator.as_ref().map(|g| g.seed),
            result: &result,
            trace: args.trace.then_some(&recorder),
        };

        match ctx.cli.format {
            OutputFormat::Json => json_reports.push(output_json(&report)?),
            OutputFormat::Human => output_human(ctx.cli, &report),
            OutputFormat::Records => output_records(&report),
        }

        if result.status == SearchStatus::Cancelled {
            cancelled = true;
            break;
        }
    }

    // Rounds finished before a cancellation are still reported
    if ctx.cli.format == OutputFormat::Json {
        let output = if args.rounds == 1 {
            json_reports.remove(0)
        } else {
            serde_json::Value::Array(json_reports)
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    if cancelled {
        return Err(WaypathError::Cancelled);
    }
    Ok(())
}
