//! Round-trip command: out to a room and back by the shortest routes

use crate::cli::{Cli, OutputFormat};
use maze_core::config::MazeConfig;
use maze_core::error::Result;
use maze_core::graph::{Digraph, RoomId};

use super::helpers::{plural_hops, resolve_endpoints};
use super::path::{leg_json, output_leg_human, search};

/// Execute the round-trip command
pub fn execute(
    cli: &Cli,
    maze: &MazeConfig,
    graph: &Digraph<RoomId>,
    from: Option<RoomId>,
    to: Option<RoomId>,
) -> Result<()> {
    let (from, to) = resolve_endpoints(maze, from, to)?;
    let out = search(graph, from, to)?;
    let back = search(graph, to, from)?;

    let total = out.hops().zip(back.hops()).map(|(a, b)| a + b);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "out": leg_json(from, to, &out),
                "back": leg_json(to, from, &back),
                "total_hops": total,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            output_leg_human("Out", from, to, &out);
            output_leg_human("Back", to, from, &back);
            match total {
                Some(total) => println!("Total: {}", plural_hops(total)),
                None if !cli.quiet => println!("No round trip between {} and {}", from, to),
                None => {}
            }
        }
    }

    Ok(())
}
