//! Waypath - shortest paths over road networks and obstacle grids
//!
//! Routes between streets of a road network (Dijkstra or great-circle A*)
//! and across obstacle grids (A* with Manhattan distance or Dijkstra).

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use waypath_core::error::{ExitCode as WaypathExitCode, WaypathError};
use waypath_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if wants_json_errors() && !err.use_stderr() => err.exit(),
        Err(err) if wants_json_errors() => {
            let usage = WaypathError::UsageError(err.to_string());
            eprintln!("{}", usage.to_json());
            return exit_with(&usage);
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(WaypathExitCode::Success as u8),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet || matches!(e, WaypathError::Cancelled) {
                eprintln!("error: {}", e);
            }
            exit_with(&e)
        }
    }
}

fn exit_with(err: &WaypathError) -> ExitCode {
    ExitCode::from(err.exit_code() as u8)
}

/// `--format json` on the raw command line, checked before clap has a `Cli`
fn wants_json_errors() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().as_deref() == Some("json") => return true,
            _ => {}
        }
    }
    false
}
