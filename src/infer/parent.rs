//! Parent resolution over inferred edges.

use crate::model::{ContainmentEdge, NodeId};

/// Parent of `node`: the source of the first edge targeting it.
///
/// Edges are scanned in emission order. Later edges into the same node are
/// ignored, so at most one parent is ever reported even when the inferred
/// graph is not a tree. Returns `None` for roots and orphans.
pub fn resolve_parent(node: NodeId, edges: &[ContainmentEdge]) -> Option<NodeId> {
    edges
        .iter()
        .find(|edge| edge.target == node)
        .map(|edge| edge.source)
}

/// Number of incoming edges per node index, for `node_count` nodes.
///
/// Entries above one mark nodes whose extra parents were collapsed by
/// [`resolve_parent`]. Edges pointing past `node_count` are ignored.
pub fn incoming_edge_counts(node_count: usize, edges: &[ContainmentEdge]) -> Vec<usize> {
    let mut counts = vec![0; node_count];
    for edge in edges {
        if let Some(count) = counts.get_mut(edge.target.index()) {
            *count += 1;
        }
    }
    counts
}
