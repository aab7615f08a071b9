//! Directed graph of passages between rooms

use crate::graph::types::NodeId;
use crate::graph::GraphProvider;
use std::collections::{BTreeMap, BTreeSet};

/// Adjacency map from node to its ordered outgoing neighbors.
///
/// Built once, then only read: searches borrow it and nothing mutates it.
/// Overlays such as hidden passages produce a new graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraph<N: Ord> {
    passages: BTreeMap<N, Vec<N>>,
}

impl<N: NodeId> Digraph<N> {
    pub fn new() -> Self {
        Self {
            passages: BTreeMap::new(),
        }
    }

    /// Build a graph from `(source, neighbors)` pairs. Repeated sources have
    /// their neighbor lists concatenated.
    pub fn from_passages<I, V>(passages: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        V: IntoIterator<Item = N>,
    {
        let mut graph = Self::new();
        for (source, neighbors) in passages {
            graph.insert(source, neighbors);
        }
        graph
    }

    /// Append passages from `source`. Registers `source` as a key even when
    /// `neighbors` is empty.
    pub fn insert<V: IntoIterator<Item = N>>(&mut self, source: N, neighbors: V) {
        self.passages.entry(source).or_default().extend(neighbors);
    }

    /// Copy of this graph with `extra` passages appended after the existing
    /// ones. `self` is left untouched.
    pub fn with_extra_passages<I, V>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        V: IntoIterator<Item = N>,
    {
        let mut graph = self.clone();
        for (source, neighbors) in extra {
            graph.insert(source, neighbors);
        }
        graph
    }

    /// Whether `node` has a recorded neighbor list
    pub fn contains(&self, node: &N) -> bool {
        self.passages.contains_key(node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes().len()
    }

    pub fn edge_count(&self) -> usize {
        self.passages.values().map(Vec::len).sum()
    }

    /// Nodes with no outgoing passages, whether recorded with an empty list
    /// or never recorded at all
    pub fn sinks(&self) -> BTreeSet<N> {
        self.nodes()
            .into_iter()
            .filter(|node| self.outbound(node).is_empty())
            .collect()
    }

    /// Neighbor values that never appear as keys
    pub fn dangling(&self) -> BTreeSet<N> {
        self.passages
            .values()
            .flatten()
            .filter(|node| !self.passages.contains_key(*node))
            .cloned()
            .collect()
    }
}

impl<N: NodeId> GraphProvider<N> for Digraph<N> {
    fn outbound(&self, node: &N) -> &[N] {
        self.passages.outbound(node)
    }

    fn sources(&self) -> Box<dyn Iterator<Item = (&N, &[N])> + '_> {
        self.passages.sources()
    }
}

impl<N: NodeId> Default for Digraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> From<BTreeMap<N, Vec<N>>> for Digraph<N> {
    fn from(passages: BTreeMap<N, Vec<N>>) -> Self {
        Self { passages }
    }
}

impl<N: NodeId, V: IntoIterator<Item = N>> FromIterator<(N, V)> for Digraph<N> {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self::from_passages(iter)
    }
}
