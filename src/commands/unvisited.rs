//! Unvisited command: rooms a search never finalized

use crate::cli::{Cli, OutputFormat};
use maze_core::config::MazeConfig;
use maze_core::error::Result;
use maze_core::graph::{Digraph, RoomId};

use super::helpers::{join_rooms, resolve_endpoints};
use super::path::search;

/// Execute the unvisited command
pub fn execute(
    cli: &Cli,
    maze: &MazeConfig,
    graph: &Digraph<RoomId>,
    from: Option<RoomId>,
    to: Option<RoomId>,
) -> Result<()> {
    let (from, to) = resolve_endpoints(maze, from, to)?;
    let outcome = search(graph, from, to)?;
    let unvisited = outcome.unvisited(graph);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "from": from,
                "to": to,
                "found": outcome.found(),
                "visited_count": outcome.visited.len(),
                "unvisited": unvisited,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                let status = if outcome.found() {
                    "reached"
                } else {
                    "not reached"
                };
                println!("Search {} -> {}: goal {}", from, to, status);
            }
            if unvisited.is_empty() {
                println!("Every room was visited");
            } else {
                println!(
                    "Unvisited rooms ({}): {}",
                    unvisited.len(),
                    join_rooms(&unvisited)
                );
            }
        }
    }

    Ok(())
}
