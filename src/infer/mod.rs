//! Structure inference for positional documents.
//!
//! The positional source carries no parent/child encoding. Structure is
//! recovered in ordered, first-match-wins steps:
//!
//! 1. [`nearest_point`] maps a coordinate to the closest labeled point.
//! 2. [`infer_edges`] applies it to both endpoints of every line.
//! 3. [`resolve_parent`] collapses incoming edges to the first one found.
//!
//! [`Classifier`] tags each label independently of the geometry.

mod classify;
mod parent;
mod relations;
mod resolver;

pub use classify::{ClassificationRule, Classifier};
pub use parent::{incoming_edge_counts, resolve_parent};
pub use relations::infer_edges;
pub use resolver::nearest_point;
