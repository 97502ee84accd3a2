//! Rendering module for converting taxonomies to output documents.

mod files;
mod json;
mod options;
mod result;
mod table;

pub use files::{write_area_documents, write_structure};
pub use json::{area_edges_json, area_nodes_json, to_json, JsonFormat};
pub use options::{RenderOptions, DEFAULT_GRAPH_FILE, DEFAULT_TABLE_FILE};
pub use result::ExtractionStats;
pub use table::to_csv;
