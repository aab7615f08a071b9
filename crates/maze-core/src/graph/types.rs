use crate::graph::GraphProvider;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::hash::Hash;

/// Room number in a maze graph
pub type RoomId = u32;

/// Anything usable as a node identifier.
///
/// Ordering matters: it is the tie-break between queue entries at the same
/// distance, so node types must order the same way on every platform.
pub trait NodeId: Ord + Hash + Clone + fmt::Debug + fmt::Display {}

impl<T> NodeId for T where T: Ord + Hash + Clone + fmt::Debug + fmt::Display {}

/// Hop count from the start node. Every passage costs exactly one hop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Distance(u32);

impl Distance {
    pub const ZERO: Distance = Distance(0);

    pub fn new(hops: u32) -> Self {
        Distance(hops)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Distance after taking one more passage
    pub fn next(self) -> Self {
        Distance(self.0 + 1)
    }
}

impl From<u32> for Distance {
    fn from(hops: u32) -> Self {
        Distance(hops)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Priority queue entry: a node together with the distance it was queued at.
///
/// Entries compare by distance first and node second, so among nodes at the
/// same distance the lowest node is popped first. Wrap in
/// [`std::cmp::Reverse`] to use with `BinaryHeap` as a min-queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntry<N> {
    pub distance: Distance,
    pub node: N,
}

impl<N: NodeId> QueueEntry<N> {
    pub fn new(distance: Distance, node: N) -> Self {
        Self { distance, node }
    }
}

impl<N: NodeId> PartialOrd for QueueEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: NodeId> Ord for QueueEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Result of a shortest path search.
///
/// `visited` and `backpointers` are diagnostics and are filled in whether or
/// not a path was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome<N: Ord> {
    /// Nodes from start to end inclusive, or `None` if the end is unreachable
    pub path: Option<Vec<N>>,
    /// Every node popped from the queue and finalized
    pub visited: BTreeSet<N>,
    /// Node -> node it was first discovered from
    pub backpointers: BTreeMap<N, N>,
}

impl<N: NodeId> SearchOutcome<N> {
    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of passages on the path (zero when start == end)
    pub fn hops(&self) -> Option<usize> {
        self.path.as_ref().map(|path| path.len().saturating_sub(1))
    }

    /// Nodes of `graph` that the search never finalized
    pub fn unvisited<G: GraphProvider<N>>(&self, graph: &G) -> BTreeSet<N> {
        graph
            .nodes()
            .into_iter()
            .filter(|node| !self.visited.contains(node))
            .collect()
    }
}
