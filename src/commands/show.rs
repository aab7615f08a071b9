//! Show command: graph summary

use crate::cli::{Cli, OutputFormat};
use maze_core::config::MazeConfig;
use maze_core::error::Result;
use maze_core::graph::{Digraph, RoomId};

use super::helpers::join_rooms;

/// Execute the show command
pub fn execute(cli: &Cli, maze: &MazeConfig, graph: &Digraph<RoomId>) -> Result<()> {
    let sinks = graph.sinks();
    let dangling = graph.dangling();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "name": maze.name,
                "start": maze.start,
                "goal": maze.goal,
                "rooms": graph.node_count(),
                "passages": graph.edge_count(),
                "hidden_included": cli.hidden,
                "hidden_passages": maze.hidden_passages,
                "sinks": sinks,
                "dangling": dangling,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if let Some(name) = &maze.name {
                println!("{}", name);
            }
            println!("Rooms: {}", graph.node_count());
            println!("Passages: {}", graph.edge_count());
            if let Some(start) = maze.start {
                println!("Start: {}", start);
            }
            if let Some(goal) = maze.goal {
                println!("Goal: {}", goal);
            }
            if !sinks.is_empty() {
                println!("Dead ends: {}", join_rooms(&sinks));
            }
            if !dangling.is_empty() {
                println!("Rooms without recorded passages: {}", join_rooms(&dangling));
            }
            if !maze.hidden_passages.is_empty() && !cli.quiet {
                let state = if cli.hidden { "included" } else { "not included" };
                println!("Hidden passages ({}):", state);
                for (room, targets) in &maze.hidden_passages {
                    println!("  {} -> {}", room, join_rooms(targets));
                }
            }
        }
    }

    Ok(())
}
