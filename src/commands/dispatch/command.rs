//! Command trait and context for dispatching commands

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use waypath_core::config::WaypathConfig;
use waypath_core::error::Result;
use waypath_core::graph::SearchOptions;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a WaypathConfig,
    pub cancel: Arc<AtomicBool>,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a WaypathConfig, cancel: Arc<AtomicBool>, start: Instant) -> Self {
        Self {
            cli,
            config,
            cancel,
            start,
        }
    }

    /// Engine options from config, wired to the interrupt flag
    pub fn search_options(&self) -> SearchOptions {
        self.config
            .search_options()
            .with_cancel(Arc::clone(&self.cancel))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Route(args) => commands::route::execute(ctx, args),
            Commands::Grid(args) => commands::grid::execute(ctx, args),
            Commands::Streets(args) => commands::streets::execute(ctx, args),
        }
    }
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("waypath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest paths over road networks and obstacle grids.");
        println!();
        println!("Run `waypath --help` for usage information.");
        Ok(())
    }
}
