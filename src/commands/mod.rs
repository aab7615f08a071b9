//! CLI commands for maze

pub mod dispatch;
pub mod helpers;
pub mod parents;
pub mod path;
pub mod round_trip;
pub mod show;
pub mod unvisited;
