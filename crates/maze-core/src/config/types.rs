//! Graph file type definitions

use crate::bail_invalid;
use crate::error::{MazeError, Result};
use crate::graph::RoomId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Supported graph file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Toml,
    Json,
    Yaml,
}

impl GraphFormat {
    pub const SUPPORTED: &'static str = "toml, json, yaml";

    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Ok(GraphFormat::Toml),
            "json" => Ok(GraphFormat::Json),
            "yaml" | "yml" => Ok(GraphFormat::Yaml),
            other => Err(MazeError::unsupported(
                "graph format",
                if other.is_empty() { "(none)" } else { other },
                Self::SUPPORTED,
            )),
        }
    }

    /// Deserialize a graph file body
    pub fn parse(self, content: &str) -> Result<RawMazeFile> {
        let raw = match self {
            GraphFormat::Toml => toml::from_str(content)?,
            GraphFormat::Json => serde_json::from_str(content)?,
            GraphFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(raw)
    }
}

/// Map key as written in a graph file.
///
/// TOML and JSON keys are always strings; YAML keys may be bare integers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(untagged)]
pub enum RawKey {
    Number(u64),
    Text(String),
}

impl RawKey {
    fn room_id(&self) -> Result<RoomId> {
        match self {
            RawKey::Number(n) => match RoomId::try_from(*n) {
                Ok(id) => check_room_id(id),
                Err(_) => bail_invalid!("room id", n),
            },
            RawKey::Text(text) => parse_room_id(text),
        }
    }
}

/// Graph file as deserialized, before room ids are validated
#[derive(Debug, Clone, Deserialize)]
pub struct RawMazeFile {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub start: Option<RoomId>,

    #[serde(default)]
    pub goal: Option<RoomId>,

    #[serde(default)]
    pub passages: BTreeMap<RawKey, Vec<RoomId>>,

    #[serde(default)]
    pub hidden_passages: BTreeMap<RawKey, Vec<RoomId>>,
}

/// A maze definition: its passages plus the puzzle's default endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MazeConfig {
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Default start room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<RoomId>,

    /// Default goal room
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<RoomId>,

    /// Room -> rooms reachable through one doorway, in drawing order
    pub passages: BTreeMap<RoomId, Vec<RoomId>>,

    /// Extra passages found after the fact, overlaid on request
    pub hidden_passages: BTreeMap<RoomId, Vec<RoomId>>,
}

impl TryFrom<RawMazeFile> for MazeConfig {
    type Error = MazeError;

    fn try_from(raw: RawMazeFile) -> Result<Self> {
        Ok(MazeConfig {
            name: raw.name,
            start: raw.start.map(check_room_id).transpose()?,
            goal: raw.goal.map(check_room_id).transpose()?,
            passages: convert_passages(raw.passages)?,
            hidden_passages: convert_passages(raw.hidden_passages)?,
        })
    }
}

fn convert_passages(
    raw: BTreeMap<RawKey, Vec<RoomId>>,
) -> Result<BTreeMap<RoomId, Vec<RoomId>>> {
    let mut passages: BTreeMap<RoomId, Vec<RoomId>> = BTreeMap::new();
    for (key, neighbors) in raw {
        let room = key.room_id()?;
        for neighbor in &neighbors {
            check_room_id(*neighbor)?;
        }
        // "7" and 7 are the same room in YAML
        passages.entry(room).or_default().extend(neighbors);
    }
    Ok(passages)
}

fn check_room_id(id: RoomId) -> Result<RoomId> {
    if id == 0 {
        bail_invalid!("room id", id);
    }
    Ok(id)
}

/// Parse a room number. Rooms are numbered from 1.
pub fn parse_room_id(text: &str) -> Result<RoomId> {
    match text.trim().parse::<RoomId>() {
        Ok(id) => check_room_id(id),
        Err(_) => bail_invalid!("room id", text),
    }
}
