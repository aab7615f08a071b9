use maze_core::error::Result;
use maze_core::graph::{RoomId, SearchOutcome};

/// JSON object describing one search
pub fn leg_json(from: RoomId, to: RoomId, outcome: &SearchOutcome<RoomId>) -> serde_json::Value {
    serde_json::json!({
        "from": from,
        "to": to,
        "found": outcome.found(),
        "hops": outcome.hops(),
        "path": outcome.path,
        "visited": outcome.visited,
        "backpointers": outcome.backpointers,
    })
}

/// Output a path search in JSON format
pub fn output_path_json(from: RoomId, to: RoomId, outcome: &SearchOutcome<RoomId>) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&leg_json(from, to, outcome))?
    );
    Ok(())
}
