//! Segment and edge types.

use super::{NodeId, Position};
use serde::{Deserialize, Serialize};

/// A line primitive from the positional document.
///
/// Lines carry no direction in the source; the first endpoint is treated as
/// the source side when an edge is inferred.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// First endpoint (`x1`, `y1`)
    pub start: Position,
    /// Second endpoint (`x2`, `y2`)
    pub end: Position,
}

impl Segment {
    /// Create a new segment.
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Whether both endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// Relation carried by an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// Parent contains child
    #[default]
    Contains,
}

/// A directed containment edge, parent to child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainmentEdge<I = NodeId> {
    /// Containing node
    pub source: I,

    /// Contained node
    pub target: I,

    /// Relation tag, always `contains`
    #[serde(rename = "type")]
    pub relation: Relation,
}

impl<I> ContainmentEdge<I> {
    /// Create a new `contains` edge.
    pub fn contains(source: I, target: I) -> Self {
        Self {
            source,
            target,
            relation: Relation::Contains,
        }
    }
}

impl<I: PartialEq> ContainmentEdge<I> {
    /// Whether the edge points back at its own source.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
