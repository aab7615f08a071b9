//! CLI argument parsing for maze
//!
//! Uses clap derive. Global flags: --graph, --hidden, --format, --quiet,
//! --verbose, --log-level, --log-json

pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use maze_core::graph::RoomId;
pub use output::OutputFormat;
use parse::parse_room;

/// Maze - shortest paths and reachability in directed room graphs
#[derive(Parser, Debug)]
#[command(name = "maze")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph file (TOML, JSON, or YAML). Defaults to the bundled Manson maze
    #[arg(long, global = true, env = "MAZE_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Include hidden passages from the graph file
    #[arg(long, global = true)]
    pub hidden: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the shortest path between two rooms
    Path {
        /// Start room (default: the graph's start)
        #[arg(value_parser = parse_room)]
        from: Option<RoomId>,

        /// Goal room (default: the graph's goal)
        #[arg(value_parser = parse_room)]
        to: Option<RoomId>,
    },

    /// Find the shortest way to a room and back again
    RoundTrip {
        /// Start room (default: the graph's start)
        #[arg(value_parser = parse_room)]
        from: Option<RoomId>,

        /// Turning-point room (default: the graph's goal)
        #[arg(value_parser = parse_room)]
        to: Option<RoomId>,
    },

    /// List rooms a search never reached
    Unvisited {
        /// Start room (default: the graph's start)
        #[arg(value_parser = parse_room)]
        from: Option<RoomId>,

        /// Goal room (default: the graph's goal)
        #[arg(value_parser = parse_room)]
        to: Option<RoomId>,
    },

    /// Grow the set of rooms leading into the targets until it stops growing
    Parents {
        /// Target rooms
        #[arg(required = true, value_parser = parse_room)]
        targets: Vec<RoomId>,

        /// Room to check for membership (default: the graph's start)
        #[arg(long, value_parser = parse_room)]
        start: Option<RoomId>,

        /// Stop after this many rounds even without a fixed point
        #[arg(long)]
        rounds: Option<usize>,
    },

    /// Summarize the graph
    Show,
}
