use crate::cli::Cli;
use crate::commands::helpers::{format_path, plural_hops};
use maze_core::graph::{RoomId, SearchOutcome};

/// Output a path search in human-readable format
pub fn output_path_human(cli: &Cli, from: RoomId, to: RoomId, outcome: &SearchOutcome<RoomId>) {
    match &outcome.path {
        Some(path) => {
            println!("{}", format_path(path));
            println!("Path length: {}", plural_hops(path.len() - 1));
        }
        None => {
            println!("No path from {} to {}", from, to);
            if !cli.quiet {
                println!("Visited {} rooms", outcome.visited.len());
            }
        }
    }
}

/// One line per leg: `Out:  1 -> 2 (1 hop)`
pub fn output_leg_human(label: &str, from: RoomId, to: RoomId, outcome: &SearchOutcome<RoomId>) {
    match &outcome.path {
        Some(path) => println!(
            "{:<6}{} ({})",
            format!("{}:", label),
            format_path(path),
            plural_hops(path.len() - 1)
        ),
        None => println!("{:<6}no path from {} to {}", format!("{}:", label), from, to),
    }
}
