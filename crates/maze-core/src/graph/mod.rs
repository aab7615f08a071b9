//! Graph search and reachability analysis
//!
//! Provides the algorithms run against a maze's passage graph:
//! - Uniform-cost shortest path with back-pointer reconstruction
//! - One-step predecessor sets for reachability diagnostics
//! - Graph provider trait for pluggable adjacency sources

pub mod algos;
pub mod digraph;
pub mod path;
pub mod traversal;
pub mod types;

pub use algos::{predecessors, shortest_path};
pub use digraph::Digraph;
pub use path::reconstruct_path;
pub use traversal::GraphProvider;
pub use types::{Distance, NodeId, QueueEntry, RoomId, SearchOutcome};
