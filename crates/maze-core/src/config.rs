//! Maze graph configuration
//!
//! A maze is described by a graph file (TOML, JSON, or YAML) holding its
//! passages, optional hidden passages, and the default start and goal rooms.
//! The Manson maze ships with the crate and is used when no file is given.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{MazeError, Result};
use crate::graph::{Digraph, RoomId};

pub use types::{parse_room_id, GraphFormat, MazeConfig, RawKey, RawMazeFile};

const BUILTIN_MAZE: &str = include_str!("config/manson.toml");

impl MazeConfig {
    /// Load a maze from a graph file, choosing the format by extension
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let format = GraphFormat::from_path(path)?;
        if !path.exists() {
            return Err(MazeError::not_found("graph file", path.display()));
        }

        let content = fs::read_to_string(path)?;
        let config = MazeConfig::try_from(format.parse(&content)?)?;
        config.log_dangling();
        Ok(config)
    }

    /// The bundled room graph of Christopher Manson's "Maze" (1985)
    pub fn builtin() -> Result<Self> {
        let raw = GraphFormat::Toml.parse(BUILTIN_MAZE)?;
        MazeConfig::try_from(raw)
    }

    /// Build the passage graph, optionally with hidden passages overlaid
    pub fn graph(&self, include_hidden: bool) -> Digraph<RoomId> {
        let graph = Digraph::from(self.passages.clone());
        if include_hidden {
            graph.with_extra_passages(self.hidden_passages.clone())
        } else {
            graph
        }
    }

    /// Rooms reachable only as doorway targets. Legal, but often a sign of a
    /// room left out while transcribing.
    fn log_dangling(&self) {
        let dangling = self.graph(true).dangling();
        if !dangling.is_empty() {
            tracing::debug!(rooms = ?dangling, "rooms without recorded passages");
        }
    }
}
