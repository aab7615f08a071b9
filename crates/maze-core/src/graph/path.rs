//! Path reconstruction from search back-pointers

use crate::graph::types::NodeId;
use std::collections::BTreeMap;

/// Walk back-pointers from `end` to `start` and return the path in
/// start-to-end order.
///
/// Returns `None` when the walk reaches a node that is neither `start` nor
/// has a back-pointer. When `start == end` the path is `[start]`.
///
/// The walk is bounded by the number of back-pointers, so a cyclic map also
/// yields `None` instead of looping.
pub fn reconstruct_path<N: NodeId>(
    backpointers: &BTreeMap<N, N>,
    start: &N,
    end: &N,
) -> Option<Vec<N>> {
    let mut current = end;
    let mut path = vec![current.clone()];

    while current != start {
        if path.len() > backpointers.len() {
            return None;
        }
        current = backpointers.get(current)?;
        path.push(current.clone());
    }

    path.reverse();
    Some(path)
}
