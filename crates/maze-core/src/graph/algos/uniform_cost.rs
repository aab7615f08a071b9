use crate::error::{MazeError, Result};
use crate::graph::path::reconstruct_path;
use crate::graph::types::{Distance, NodeId, QueueEntry, SearchOutcome};
use crate::graph::GraphProvider;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};
use std::time::Instant;

/// State tracked during a uniform-cost search
struct SearchState<N: NodeId> {
    queue: BinaryHeap<Reverse<QueueEntry<N>>>,
    visited: BTreeSet<N>,
    backpointers: BTreeMap<N, N>,
}

impl<N: NodeId> SearchState<N> {
    fn new(start: &N) -> Self {
        let mut queue = BinaryHeap::new();
        queue.push(Reverse(QueueEntry::new(Distance::ZERO, start.clone())));
        Self {
            queue,
            visited: BTreeSet::new(),
            backpointers: BTreeMap::new(),
        }
    }

    /// Queue every unvisited neighbor of `node` one hop further out.
    ///
    /// A neighbor keeps the back-pointer from its first discovery. Pops come
    /// out in non-decreasing distance, so the first discovery is already on a
    /// shortest route and later ones must not replace it.
    fn expand<G: GraphProvider<N>>(&mut self, graph: &G, node: &N, distance: Distance) {
        let next = distance.next();
        for neighbor in graph.outbound(node) {
            if self.visited.contains(neighbor) {
                continue;
            }
            self.queue
                .push(Reverse(QueueEntry::new(next, neighbor.clone())));
            self.backpointers
                .entry(neighbor.clone())
                .or_insert_with(|| node.clone());
        }
    }

    fn into_outcome(self, path: Option<Vec<N>>) -> SearchOutcome<N> {
        SearchOutcome {
            path,
            visited: self.visited,
            backpointers: self.backpointers,
        }
    }
}

/// Find a minimum-hop path from `start` to `end`.
///
/// Every passage costs one hop. Queue entries at equal distance are popped in
/// ascending node order, which fixes the visited set and the returned path
/// for a given graph.
///
/// A node can be queued once per discovering passage; entries for nodes that
/// are already finalized are dropped when popped. The search stops as soon as
/// `end` is popped. If the queue runs dry first, the outcome has no path and
/// still carries the visited set and back-pointers collected so far.
///
/// `start` does not have to be a key of `graph`; it is then a node without
/// passages.
///
/// # Errors
///
/// Returns [`MazeError::InconsistentBackpointers`] if `end` was finalized but
/// its back-pointers do not lead back to `start`.
#[tracing::instrument(skip(graph, start, end), fields(start = %start, end = %end))]
pub fn shortest_path<N, G>(graph: &G, start: &N, end: &N) -> Result<SearchOutcome<N>>
where
    N: NodeId,
    G: GraphProvider<N>,
{
    let timer = Instant::now();
    let mut state = SearchState::new(start);

    while let Some(Reverse(QueueEntry { distance, node })) = state.queue.pop() {
        if !state.visited.insert(node.clone()) {
            tracing::trace!(node = %node, distance = %distance, "discard_duplicate");
            continue;
        }
        tracing::trace!(node = %node, distance = %distance, "visit");

        if node == *end {
            let path = reconstruct_path(&state.backpointers, start, end)
                .ok_or_else(|| MazeError::inconsistent_backpointers(start, end))?;
            tracing::debug!(
                hops = %distance,
                visited = state.visited.len(),
                "path_found"
            );
            crate::trace_time!(timer, "shortest_path");
            return Ok(state.into_outcome(Some(path)));
        }

        state.expand(graph, &node, distance);
    }

    tracing::debug!(visited = state.visited.len(), "unreachable");
    crate::trace_time!(timer, "shortest_path");
    Ok(state.into_outcome(None))
}
