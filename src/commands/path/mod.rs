//! Path command
mod human;
mod json;

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use maze_core::config::MazeConfig;
use maze_core::error::Result;
use maze_core::graph::{shortest_path, Digraph, RoomId, SearchOutcome};

use super::helpers::resolve_endpoints;

pub use human::{output_leg_human, output_path_human};
pub use json::{leg_json, output_path_json};

/// Execute the path command
pub fn execute(
    cli: &Cli,
    maze: &MazeConfig,
    graph: &Digraph<RoomId>,
    from: Option<RoomId>,
    to: Option<RoomId>,
) -> Result<()> {
    let (from, to) = resolve_endpoints(maze, from, to)?;
    let outcome = search(graph, from, to)?;

    match cli.format {
        OutputFormat::Json => output_path_json(from, to, &outcome)?,
        OutputFormat::Human => output_path_human(cli, from, to, &outcome),
    }

    Ok(())
}

/// Run one search and log its timing
pub fn search(
    graph: &Digraph<RoomId>,
    from: RoomId,
    to: RoomId,
) -> Result<SearchOutcome<RoomId>> {
    let start = Instant::now();
    let outcome = shortest_path(graph, &from, &to)?;
    tracing::debug!(
        elapsed = ?start.elapsed(),
        from,
        to,
        found = outcome.found(),
        "search"
    );
    Ok(outcome)
}
