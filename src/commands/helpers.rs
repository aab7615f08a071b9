//! Helper functions shared across commands

use maze_core::bail_usage;
use maze_core::config::MazeConfig;
use maze_core::error::Result;
use maze_core::graph::RoomId;

use crate::cli::Cli;

/// Load the maze named by `--graph`, or the bundled one
pub fn load_maze(cli: &Cli) -> Result<MazeConfig> {
    match &cli.graph {
        Some(path) => MazeConfig::load(path),
        None => MazeConfig::builtin(),
    }
}

/// Fill in missing endpoints from the graph file's `start` and `goal`
pub fn resolve_endpoints(
    maze: &MazeConfig,
    from: Option<RoomId>,
    to: Option<RoomId>,
) -> Result<(RoomId, RoomId)> {
    let Some(from) = from.or(maze.start) else {
        bail_usage!("no start room given and the graph does not define one");
    };
    let Some(to) = to.or(maze.goal) else {
        bail_usage!("no goal room given and the graph does not define one");
    };
    Ok((from, to))
}

/// Render rooms as `1, 2, 3`
pub fn join_rooms<'a>(rooms: impl IntoIterator<Item = &'a RoomId>) -> String {
    rooms
        .into_iter()
        .map(|room| room.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render a path as `1 -> 2 -> 3`
pub fn format_path(path: &[RoomId]) -> String {
    path.iter()
        .map(|room| room.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// `1 hop`, `3 hops`
pub fn plural_hops(hops: usize) -> String {
    if hops == 1 {
        "1 hop".to_string()
    } else {
        format!("{} hops", hops)
    }
}
