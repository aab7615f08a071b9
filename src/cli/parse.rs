use maze_core::config::parse_room_id;
use maze_core::graph::RoomId;

/// Parse a room number for clap
pub fn parse_room(s: &str) -> std::result::Result<RoomId, String> {
    parse_room_id(s).map_err(|e| e.to_string())
}
