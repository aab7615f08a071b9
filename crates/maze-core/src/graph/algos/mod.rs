//! Graph algorithm implementations
//!
//! - `uniform_cost`: minimum-hop path search over a priority queue
//! - `predecessors`: nodes with a passage into a target set

pub mod predecessors;
pub mod uniform_cost;

pub use predecessors::predecessors;
pub use uniform_cost::shortest_path;
