//! Node-level types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an extracted point record.
///
/// Identifiers are dense and zero-based within a single run. They render as
/// `node_<n>` in every output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct NodeId(pub usize);

impl NodeId {
    const PREFIX: &'static str = "node_";

    /// Zero-based extraction index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for NodeId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value
            .strip_prefix(Self::PREFIX)
            .and_then(|n| n.parse().ok())
            .map(NodeId)
            .ok_or_else(|| format!("invalid node identifier: {}", value))
    }
}

/// A 2D coordinate in source-document units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Position {
    /// Create a new position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another position.
    pub fn distance_to(self, other: Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Taxonomy tier of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Outermost tier
    BusinessArea,
    /// Middle tier, nested under a business area
    BusinessDomain,
    /// Innermost tier, nested under a business domain
    ServiceDomain,
    /// No classification rule matched
    #[default]
    Unknown,
}

impl Category {
    /// The serialized tag (`business_area`, `unknown`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Category::BusinessArea => "business_area",
            Category::BusinessDomain => "business_domain",
            Category::ServiceDomain => "service_domain",
            Category::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled point extracted from a positional document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    /// Sequential identifier in extraction order
    pub id: NodeId,

    /// Trimmed text content, never empty
    #[serde(rename = "name")]
    pub label: String,

    /// Category derived from the label
    #[serde(rename = "type")]
    pub category: Category,

    /// Declared text anchor
    #[serde(flatten)]
    pub position: Position,
}

impl PointRecord {
    /// Create a new point record.
    pub fn new(id: NodeId, label: impl Into<String>, category: Category, position: Position) -> Self {
        Self {
            id,
            label: label.into(),
            category,
            position,
        }
    }
}
