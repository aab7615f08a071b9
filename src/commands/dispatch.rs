//! Command dispatch logic for maze

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use maze_core::error::Result;
use tracing::debug;

use super::helpers::load_maze;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let maze = load_maze(cli)?;
    let graph = maze.graph(cli.hidden);

    debug!(
        elapsed = ?start.elapsed(),
        rooms = graph.node_count(),
        passages = graph.edge_count(),
        hidden = cli.hidden,
        "load_graph"
    );

    match &cli.command {
        Commands::Path { from, to } => commands::path::execute(cli, &maze, &graph, *from, *to),
        Commands::RoundTrip { from, to } => {
            commands::round_trip::execute(cli, &maze, &graph, *from, *to)
        }
        Commands::Unvisited { from, to } => {
            commands::unvisited::execute(cli, &maze, &graph, *from, *to)
        }
        Commands::Parents {
            targets,
            start,
            rounds,
        } => commands::parents::execute(cli, &maze, &graph, targets, *start, *rounds),
        Commands::Show => commands::show::execute(cli, &maze, &graph),
    }
}
