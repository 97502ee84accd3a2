//! Extraction statistics.

use serde::{Deserialize, Serialize};

use crate::infer::incoming_edge_counts;
use crate::model::{AreaCatalog, Category, TaxonomyGraph};

/// Statistics collected from an extracted taxonomy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Number of nodes
    pub node_count: usize,

    /// Number of edges
    pub edge_count: usize,

    /// Nodes classified as business areas
    pub business_areas: usize,

    /// Nodes classified as business domains
    pub business_domains: usize,

    /// Nodes classified as service domains
    pub service_domains: usize,

    /// Nodes no classification rule matched
    pub unclassified: usize,

    /// Nodes without a parent
    pub root_count: usize,

    /// Edges whose source and target coincide
    pub self_loop_count: usize,

    /// Nodes with more than one incoming edge (only the first is kept)
    pub multi_parent_count: usize,

    /// Number of top-level area bundles (nested path)
    pub area_count: usize,
}

impl ExtractionStats {
    /// Collect statistics from a positional graph.
    pub fn from_graph(graph: &TaxonomyGraph) -> Self {
        let mut stats = Self {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            ..Default::default()
        };

        for node in &graph.nodes {
            stats.add_category(node.category);
        }

        let incoming = incoming_edge_counts(graph.node_count(), &graph.edges);
        stats.root_count = incoming.iter().filter(|&&n| n == 0).count();
        stats.multi_parent_count = incoming.iter().filter(|&&n| n > 1).count();
        stats.self_loop_count = graph.edges.iter().filter(|e| e.is_self_loop()).count();

        stats
    }

    /// Collect statistics from a nested catalog.
    pub fn from_catalog(catalog: &AreaCatalog) -> Self {
        let mut stats = Self {
            area_count: catalog.len(),
            ..Default::default()
        };

        for bundle in catalog.iter() {
            stats.node_count += bundle.nodes.len();
            stats.edge_count += bundle.edges.len();
            stats.root_count += 1;
            for node in &bundle.nodes {
                stats.add_category(node.category);
            }
        }

        stats
    }

    fn add_category(&mut self, category: Category) {
        match category {
            Category::BusinessArea => self.business_areas += 1,
            Category::BusinessDomain => self.business_domains += 1,
            Category::ServiceDomain => self.service_domains += 1,
            Category::Unknown => self.unclassified += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AreaBundle, AreaNode, ContainmentEdge, NodeId, PointRecord, Position};

    #[test]
    fn test_graph_stats() {
        let nodes = vec![
            PointRecord::new(NodeId(0), "Business Area: A", Category::BusinessArea, Position::default()),
            PointRecord::new(NodeId(1), "Business Area: B", Category::BusinessArea, Position::default()),
            PointRecord::new(NodeId(2), "Service Domain: X", Category::ServiceDomain, Position::default()),
            PointRecord::new(NodeId(3), "note", Category::Unknown, Position::default()),
        ];
        let edges = vec![
            ContainmentEdge::contains(NodeId(0), NodeId(2)),
            ContainmentEdge::contains(NodeId(1), NodeId(2)),
            ContainmentEdge::contains(NodeId(3), NodeId(3)),
        ];
        let stats = ExtractionStats::from_graph(&TaxonomyGraph::new(nodes, edges));

        assert_eq!(stats.node_count, 4);
        assert_eq!(stats.edge_count, 3);
        assert_eq!(stats.business_areas, 2);
        assert_eq!(stats.service_domains, 1);
        assert_eq!(stats.unclassified, 1);
        assert_eq!(stats.root_count, 2);
        assert_eq!(stats.self_loop_count, 1);
        assert_eq!(stats.multi_parent_count, 1);
    }

    #[test]
    fn test_catalog_stats() {
        let mut catalog = AreaCatalog::new();
        let mut bundle = AreaBundle::new(AreaNode::new("A1", "a", Category::BusinessArea));
        bundle.add_child("A1", AreaNode::new("D1", "d", Category::BusinessDomain));
        catalog.insert(bundle);
        catalog.insert(AreaBundle::new(AreaNode::new("A2", "b", Category::BusinessArea)));

        let stats = ExtractionStats::from_catalog(&catalog);
        assert_eq!(stats.area_count, 2);
        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.edge_count, 1);
        assert_eq!(stats.business_domains, 1);
        assert_eq!(stats.root_count, 2);
    }
}
