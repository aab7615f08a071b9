use crate::graph::types::NodeId;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Trait for providing read-only graph adjacency
///
/// Nodes that are not keys of the graph have no outgoing passages; looking
/// them up is never an error.
pub trait GraphProvider<N: NodeId> {
    /// Outgoing neighbors of `node`, in passage order
    fn outbound(&self, node: &N) -> &[N];

    /// Every node with a recorded neighbor list, paired with that list
    fn sources(&self) -> Box<dyn Iterator<Item = (&N, &[N])> + '_>;

    /// Every node mentioned by the graph, as a key or as a neighbor
    fn nodes(&self) -> BTreeSet<N> {
        let mut nodes = BTreeSet::new();
        for (source, neighbors) in self.sources() {
            nodes.insert(source.clone());
            nodes.extend(neighbors.iter().cloned());
        }
        nodes
    }
}

impl<N: NodeId> GraphProvider<N> for BTreeMap<N, Vec<N>> {
    fn outbound(&self, node: &N) -> &[N] {
        self.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    fn sources(&self) -> Box<dyn Iterator<Item = (&N, &[N])> + '_> {
        Box::new(self.iter().map(|(node, neighbors)| (node, neighbors.as_slice())))
    }
}

impl<N: NodeId> GraphProvider<N> for HashMap<N, Vec<N>> {
    fn outbound(&self, node: &N) -> &[N] {
        self.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    fn sources(&self) -> Box<dyn Iterator<Item = (&N, &[N])> + '_> {
        Box::new(self.iter().map(|(node, neighbors)| (node, neighbors.as_slice())))
    }
}
