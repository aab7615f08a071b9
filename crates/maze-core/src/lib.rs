//! Maze Core Library
//!
//! Shortest-path search and reachability analysis over directed room graphs.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
