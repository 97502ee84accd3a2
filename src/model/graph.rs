//! Graph-level types for the positional extraction path.

use super::{Category, ContainmentEdge, NodeId, PointRecord};
use crate::infer::resolve_parent;
use serde::{Deserialize, Serialize};

/// Nodes and inferred edges of one positional document.
///
/// Both lists keep extraction order; parent resolution depends on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyGraph {
    /// Extracted labels in encounter order
    pub nodes: Vec<PointRecord>,

    /// One edge per resolved segment, in segment order
    pub edges: Vec<ContainmentEdge>,
}

impl TaxonomyGraph {
    /// Create a new graph from nodes and edges.
    pub fn new(nodes: Vec<PointRecord>, edges: Vec<ContainmentEdge>) -> Self {
        Self { nodes, edges }
    }

    /// Get a node by identifier.
    pub fn node(&self, id: NodeId) -> Option<&PointRecord> {
        self.nodes.get(id.index()).filter(|n| n.id == id)
    }

    /// Find the first node whose label equals `label`.
    pub fn find_by_label(&self, label: &str) -> Option<&PointRecord> {
        self.nodes.iter().find(|n| n.label == label)
    }

    /// Parent of a node, first incoming edge wins.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        resolve_parent(id, &self.edges)
    }

    /// Flat table rows, one per node.
    pub fn rows(&self) -> Vec<OutputRow> {
        self.nodes
            .iter()
            .map(|node| OutputRow {
                id: node.id,
                label: node.label.clone(),
                category: node.category,
                parent: self.parent_of(node.id),
            })
            .collect()
    }

    /// Check if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// One row of the flat parent table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRow {
    /// Node identifier
    #[serde(rename = "ID")]
    pub id: NodeId,

    /// Node label
    #[serde(rename = "Name")]
    pub label: String,

    /// Node category
    #[serde(rename = "Type")]
    pub category: Category,

    /// Parent identifier, absent for roots and orphans
    #[serde(rename = "Parent ID")]
    pub parent: Option<NodeId>,
}

impl OutputRow {
    /// Fixed header of the table.
    pub const HEADER: [&'static str; 4] = ["ID", "Name", "Type", "Parent ID"];
}
