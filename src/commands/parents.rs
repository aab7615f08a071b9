//! Parents command: grow the set of rooms that lead into the targets
//!
//! Each round unions the direct parents of the current set into it. When a
//! round adds nothing the set is closed; a start room outside a closed set
//! cannot reach any target.

use std::collections::BTreeSet;

use crate::cli::{Cli, OutputFormat};
use maze_core::config::MazeConfig;
use maze_core::error::Result;
use maze_core::graph::{predecessors, Digraph, RoomId};

use super::helpers::join_rooms;

/// One application of the parent step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub parents: BTreeSet<RoomId>,
    pub added: BTreeSet<RoomId>,
}

/// Result of iterating the parent step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Closure {
    pub rooms: BTreeSet<RoomId>,
    pub rounds: Vec<Round>,
    pub fixed_point: bool,
}

/// Iterate the parent step from `targets` until nothing new is added or
/// `max_rounds` is spent
pub fn grow_closure(
    graph: &Digraph<RoomId>,
    targets: &[RoomId],
    max_rounds: Option<usize>,
) -> Closure {
    let mut rooms: BTreeSet<RoomId> = targets.iter().copied().collect();
    let mut rounds = Vec::new();

    loop {
        if max_rounds.is_some_and(|max| rounds.len() >= max) {
            return Closure {
                rooms,
                rounds,
                fixed_point: false,
            };
        }

        let parents = predecessors(graph, &rooms);
        let added: BTreeSet<RoomId> = parents.difference(&rooms).copied().collect();
        rooms.extend(added.iter().copied());
        let done = added.is_empty();
        rounds.push(Round { parents, added });

        if done {
            return Closure {
                rooms,
                rounds,
                fixed_point: true,
            };
        }
    }
}

/// Execute the parents command
pub fn execute(
    cli: &Cli,
    maze: &MazeConfig,
    graph: &Digraph<RoomId>,
    targets: &[RoomId],
    start: Option<RoomId>,
    max_rounds: Option<usize>,
) -> Result<()> {
    let start = start.or(maze.start);
    let closure = grow_closure(graph, targets, max_rounds);
    tracing::debug!(
        rounds = closure.rounds.len(),
        rooms = closure.rooms.len(),
        fixed_point = closure.fixed_point,
        "closure"
    );

    match cli.format {
        OutputFormat::Json => output_json(targets, start, &closure)?,
        OutputFormat::Human => output_human(cli, start, &closure),
    }

    Ok(())
}

fn output_json(targets: &[RoomId], start: Option<RoomId>, closure: &Closure) -> Result<()> {
    let rounds: Vec<serde_json::Value> = closure
        .rounds
        .iter()
        .map(|round| {
            serde_json::json!({
                "parents": round.parents,
                "added": round.added,
            })
        })
        .collect();

    let mut output = serde_json::json!({
        "targets": targets,
        "rounds": rounds,
        "closure": closure.rooms,
        "fixed_point": closure.fixed_point,
    });
    if let (Some(start), Some(obj)) = (start, output.as_object_mut()) {
        obj.insert("start".to_string(), serde_json::json!(start));
        obj.insert(
            "start_in_closure".to_string(),
            serde_json::json!(closure.rooms.contains(&start)),
        );
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_human(cli: &Cli, start: Option<RoomId>, closure: &Closure) {
    if !cli.quiet {
        for (i, round) in closure.rounds.iter().enumerate() {
            println!(
                "Round {}: parents {{{}}} (+{})",
                i + 1,
                join_rooms(&round.parents),
                round.added.len()
            );
        }
    }

    println!(
        "Closure ({}): {}",
        closure.rooms.len(),
        join_rooms(&closure.rooms)
    );

    if closure.fixed_point {
        println!("Fixed point after {} rounds", closure.rounds.len());
    } else {
        println!(
            "Stopped after {} rounds without a fixed point",
            closure.rounds.len()
        );
    }

    if let Some(start) = start {
        match (closure.rooms.contains(&start), closure.fixed_point) {
            (true, _) => println!("Room {} leads into the targets", start),
            (false, true) => println!("Room {} cannot reach the targets", start),
            (false, false) => println!("Room {} not in the closure yet", start),
        }
    }
}
