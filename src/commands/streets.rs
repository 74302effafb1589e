//! `waypath streets` command - street lookup in a road network

use crate::cli::{OutputFormat, StreetsArgs};
use crate::commands::dispatch::CommandContext;
use waypath_core::error::{Result, WaypathError};
use waypath_core::format::escape_quotes;
use waypath_core::road::{find_street, load_network, RoadNetwork};

/// Execute the streets command
pub fn execute(ctx: &CommandContext, args: &StreetsArgs) -> Result<()> {
    let network = load_network(&args.network)?;

    match &args.query {
        Some(query) => lookup(ctx, &network, query),
        None => list(ctx, &network),
    }
}

fn lookup(ctx: &CommandContext, network: &RoadNetwork, query: &str) -> Result<()> {
    let (index, name) =
        find_street(&network.edges, query).ok_or_else(|| WaypathError::not_found("street", query))?;
    let edge = &network.edges[index];

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "index": index,
                "name": name,
                "from": edge.from,
                "to": edge.to,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{} (segment {}: {} -> {})", name, index, edge.from, edge.to);
        }
        OutputFormat::Records => {
            println!(
                "S index={} name=\"{}\" from={} to={}",
                index,
                escape_quotes(name),
                edge.from,
                edge.to
            );
        }
    }
    Ok(())
}

fn list(ctx: &CommandContext, network: &RoadNetwork) -> Result<()> {
    let names = network.street_names();

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&names)?);
        }
        OutputFormat::Human => {
            if names.is_empty() && !ctx.cli.quiet {
                println!("No named streets");
            }
            for name in &names {
                println!("{}", name);
            }
        }
        OutputFormat::Records => {
            println!(
                "H waypath=1 records=1 mode=streets count={}",
                names.len()
            );
            for name in &names {
                println!("S name=\"{}\"", escape_quotes(name));
            }
        }
    }
    Ok(())
}
