//! Taxonomy model types.
//!
//! This module defines the representation shared by both extraction paths:
//! labeled points and line segments recovered from a positional document,
//! containment edges between nodes, the flat parent table, and the per-area
//! bundles produced from explicitly nested markup.

mod area;
mod edge;
mod graph;
mod node;

pub use area::{is_safe_file_stem, AreaBundle, AreaCatalog, AreaFileNames, AreaNode};
pub use edge::{ContainmentEdge, Relation, Segment};
pub use graph::{OutputRow, TaxonomyGraph};
pub use node::{Category, NodeId, PointRecord, Position};
