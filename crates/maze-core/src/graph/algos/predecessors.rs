use crate::graph::types::NodeId;
use crate::graph::GraphProvider;
use std::collections::BTreeSet;

/// Nodes with at least one passage leading into `targets`.
///
/// One parent step only. Callers grow an ancestor set by unioning the result
/// back into `targets` and calling again; once the set stops growing without
/// containing the start node, the targets are unreachable from it.
#[tracing::instrument(skip(graph, targets), fields(targets = targets.len()))]
pub fn predecessors<N, G>(graph: &G, targets: &BTreeSet<N>) -> BTreeSet<N>
where
    N: NodeId,
    G: GraphProvider<N>,
{
    let parents: BTreeSet<N> = graph
        .sources()
        .filter(|(_, neighbors)| neighbors.iter().any(|n| targets.contains(n)))
        .map(|(source, _)| source.clone())
        .collect();

    tracing::debug!(parents = parents.len(), "predecessors");
    parents
}
