//! JSON rendering for taxonomy graphs and area bundles.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{AreaBundle, ContainmentEdge, TaxonomyGraph};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize any value in the given format.
pub(crate) fn serialize<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Convert a graph to a `{"nodes": [...], "edges": [...]}` document.
pub fn to_json(graph: &TaxonomyGraph, format: JsonFormat) -> Result<String> {
    serialize(graph, format)
}

/// Node-list document of one area: a bare JSON array.
pub fn area_nodes_json(bundle: &AreaBundle, format: JsonFormat) -> Result<String> {
    serialize(&bundle.nodes, format)
}

/// Edge-list document of one area, wrapped as `{"edges": [...]}`.
pub fn area_edges_json(bundle: &AreaBundle, format: JsonFormat) -> Result<String> {
    #[derive(Serialize)]
    struct EdgeList<'a> {
        edges: &'a [ContainmentEdge<String>],
    }

    serialize(&EdgeList { edges: &bundle.edges }, format)
}
