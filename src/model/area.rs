//! Per-area types for the nested markup path.

use super::{Category, ContainmentEdge};
use serde::{Deserialize, Serialize};

/// A node taken directly from nested markup attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaNode {
    /// Source `id` attribute
    pub id: String,

    /// Source `name` attribute
    pub name: String,

    /// Category from nesting depth
    #[serde(rename = "type")]
    pub category: Category,

    /// Synthesized human-readable description
    pub description: String,
}

impl AreaNode {
    /// Create a node with the description template of its category.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        let name = name.into();
        let description = describe(category, &name);
        Self {
            id: id.into(),
            name,
            category,
            description,
        }
    }
}

/// Fixed description template per category.
fn describe(category: Category, name: &str) -> String {
    let name = name.to_lowercase();
    match category {
        Category::BusinessArea => format!("Business area covering {}", name),
        Category::BusinessDomain => format!("Managing {} processes", name),
        Category::ServiceDomain => format!("Service for {}", name),
        Category::Unknown => name,
    }
}

/// File names of one area's output documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaFileNames {
    /// Node-list document
    pub nodes: String,
    /// Edge-list document
    pub edges: String,
}

/// Nodes and edges scoped to a single top-level area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaBundle {
    /// Identifier of the area this bundle belongs to
    pub area_id: String,

    /// Area node first, then domains and their sub-domains depth-first
    pub nodes: Vec<AreaNode>,

    /// Parent to child pairs from document nesting
    pub edges: Vec<ContainmentEdge<String>>,
}

impl AreaBundle {
    /// Start a bundle holding only the area node.
    pub fn new(area: AreaNode) -> Self {
        Self {
            area_id: area.id.clone(),
            nodes: vec![area],
            edges: Vec::new(),
        }
    }

    /// Add `child` under the node identified by `parent`.
    pub fn add_child(&mut self, parent: &str, child: AreaNode) {
        self.edges
            .push(ContainmentEdge::contains(parent.to_string(), child.id.clone()));
        self.nodes.push(child);
    }

    /// Output file names, derived from the area identifier.
    ///
    /// `None` when the identifier cannot be used as a plain file name; see
    /// [`is_safe_file_stem`].
    pub fn file_names(&self) -> Option<AreaFileNames> {
        is_safe_file_stem(&self.area_id).then(|| AreaFileNames {
            nodes: format!("{}.json", self.area_id),
            edges: format!("{}-edges.json", self.area_id),
        })
    }

    /// Number of nodes with the given category.
    pub fn count(&self, category: Category) -> usize {
        self.nodes.iter().filter(|n| n.category == category).count()
    }
}

/// Whether `id` names a single file inside the output directory.
///
/// Rejects empty identifiers, `.` and `..`, and anything holding a path
/// separator, a drive colon or a NUL byte.
pub fn is_safe_file_stem(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && !id.contains(['/', '\\', ':', '\0'])
}

/// All area bundles of one nested document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaCatalog {
    /// Bundles, one per distinct area identifier
    pub bundles: Vec<AreaBundle>,
}

impl AreaCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a bundle.
    ///
    /// A bundle whose area identifier is already present replaces the earlier
    /// one in its original position.
    pub fn insert(&mut self, bundle: AreaBundle) {
        match self.bundles.iter_mut().find(|b| b.area_id == bundle.area_id) {
            Some(existing) => *existing = bundle,
            None => self.bundles.push(bundle),
        }
    }

    /// Get a bundle by area identifier.
    pub fn get(&self, area_id: &str) -> Option<&AreaBundle> {
        self.bundles.iter().find(|b| b.area_id == area_id)
    }

    /// Iterate over bundles in document order.
    pub fn iter(&self) -> impl Iterator<Item = &AreaBundle> {
        self.bundles.iter()
    }

    /// Number of areas.
    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    /// Check if the catalog holds no areas.
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptions() {
        let area = AreaNode::new("A1", "Sales And Service", Category::BusinessArea);
        assert_eq!(area.description, "Business area covering sales and service");

        let domain = AreaNode::new("D1", "Customer Management", Category::BusinessDomain);
        assert_eq!(domain.description, "Managing customer management processes");

        let service = AreaNode::new("S1", "Party Lifecycle", Category::ServiceDomain);
        assert_eq!(service.description, "Service for party lifecycle");
    }

    #[test]
    fn test_bundle_children() {
        let mut bundle = AreaBundle::new(AreaNode::new("A1", "Area", Category::BusinessArea));
        bundle.add_child("A1", AreaNode::new("D1", "Domain", Category::BusinessDomain));

        assert_eq!(bundle.nodes.len(), 2);
        assert_eq!(bundle.edges, vec![ContainmentEdge::contains("A1".to_string(), "D1".to_string())]);
        assert_eq!(bundle.count(Category::BusinessDomain), 1);
    }

    #[test]
    fn test_file_names() {
        let bundle = AreaBundle::new(AreaNode::new(
            "business-area-reference-data",
            "Reference Data",
            Category::BusinessArea,
        ));
        let names = bundle.file_names().unwrap();
        assert_eq!(names.nodes, "business-area-reference-data.json");
        assert_eq!(names.edges, "business-area-reference-data-edges.json");
    }

    #[test]
    fn test_unsafe_area_ids() {
        for id in ["", ".", "..", "../../x", "a/b", "a\\b", "C:x", "nul\0"] {
            assert!(!is_safe_file_stem(id), "{:?}", id);
            let bundle = AreaBundle::new(AreaNode::new(id, "Area", Category::BusinessArea));
            assert!(bundle.file_names().is_none());
        }
        assert!(is_safe_file_stem("A1"));
        assert!(is_safe_file_stem("..hidden"));
    }

    #[test]
    fn test_catalog_replaces_in_place() {
        let mut catalog = AreaCatalog::new();
        catalog.insert(AreaBundle::new(AreaNode::new("A1", "First", Category::BusinessArea)));
        catalog.insert(AreaBundle::new(AreaNode::new("A2", "Second", Category::BusinessArea)));
        catalog.insert(AreaBundle::new(AreaNode::new("A1", "Again", Category::BusinessArea)));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.bundles[0].area_id, "A1");
        assert_eq!(catalog.bundles[0].nodes[0].name, "Again");
        assert!(catalog.get("A3").is_none());
    }

    #[test]
    fn test_area_node_json_shape() {
        let node = AreaNode::new("S1", "Payments", Category::ServiceDomain);
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "S1",
                "name": "Payments",
                "type": "service_domain",
                "description": "Service for payments"
            })
        );
    }
}
