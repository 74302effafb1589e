//! Command dispatch logic for waypath

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::cli::Cli;
use tracing::debug;
use waypath_core::config::WaypathConfig;
use waypath_core::error::Result;
use waypath_core::trace_time;

mod command;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = WaypathConfig::resolve(cli.config.as_deref())?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, &config, interrupt_flag(), start);

    let result = match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    };

    trace_time!(ctx.start, "command");
    result
}

/// Flag raised by Ctrl-C; searches poll it between expansions
fn interrupt_flag() -> Arc<AtomicBool> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);

    if let Err(e) = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    }) {
        debug!(error = %e, "ctrl-c handler not installed");
    }

    interrupted
}
