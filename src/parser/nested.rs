//! Nested markup conversion.
//!
//! Hierarchy is explicit here: areas contain domains, domains contain
//! sub-domains. Each area becomes an isolated [`AreaBundle`]; no edge ever
//! crosses from one area into another.

use std::io::Read;
use std::path::Path;

use roxmltree::{Document as XmlDocument, Node};

use crate::detect::{decode_source, read_source};
use crate::error::Result;
use crate::model::{is_safe_file_stem, AreaBundle, AreaCatalog, AreaNode, Category};

use super::options::{ErrorMode, NestedSchema, ParseOptions};

/// Converter for explicitly nested taxonomy documents.
pub struct NestedConverter {
    text: String,
    options: ParseOptions,
}

impl NestedConverter {
    /// Open a nested document file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a nested document file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let text = read_source(path)?;
        Ok(Self { text, options })
    }

    /// Parse a nested document from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a nested document from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let text = decode_source(data)?;
        Ok(Self { text, options })
    }

    /// Parse a nested document from text.
    pub fn from_text(text: impl Into<String>, options: ParseOptions) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }

    /// Parse a nested document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a nested document from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Convert the document into per-area bundles.
    pub fn convert(&self) -> Result<AreaCatalog> {
        let doc = match XmlDocument::parse(&self.text) {
            Ok(doc) => doc,
            Err(e) if self.options.error_mode == ErrorMode::Lenient => {
                log::warn!("skipping unparseable nested document: {}", e);
                return Ok(AreaCatalog::new());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(convert_document(&doc, &self.options.schema))
    }
}

/// Walk a parsed document depth-first and group it per area.
///
/// Elements without an `id` attribute are skipped together with their
/// subtree, as are areas whose `id` cannot be used as a file name. A
/// missing `name` becomes the empty string.
pub fn convert_document(doc: &XmlDocument<'_>, schema: &NestedSchema) -> AreaCatalog {
    let mut catalog = AreaCatalog::new();

    for area in elements_named(doc.root_element(), &schema.area) {
        let Some(area_node) = node_from_element(area, Category::BusinessArea) else {
            continue;
        };
        if !is_safe_file_stem(&area_node.id) {
            log::warn!("skipping <{}> with unsafe id {:?}", schema.area, area_node.id);
            continue;
        }
        let area_id = area_node.id.clone();
        let mut bundle = AreaBundle::new(area_node);

        for domain in elements_named(area, &schema.domain).filter(|d| *d != area) {
            let Some(domain_node) = node_from_element(domain, Category::BusinessDomain) else {
                continue;
            };
            let domain_id = domain_node.id.clone();
            bundle.add_child(&area_id, domain_node);

            for service in elements_named(domain, &schema.sub_domain).filter(|s| *s != domain) {
                if let Some(service_node) = node_from_element(service, Category::ServiceDomain) {
                    bundle.add_child(&domain_id, service_node);
                }
            }
        }

        log::debug!(
            "area {}: {} nodes, {} edges",
            bundle.area_id,
            bundle.nodes.len(),
            bundle.edges.len()
        );
        catalog.insert(bundle);
    }

    catalog
}

/// Descendants of `root` (inclusive) with the given tag name.
fn elements_named<'a, 'input: 'a>(
    root: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    root.descendants()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

fn node_from_element(element: Node<'_, '_>, category: Category) -> Option<AreaNode> {
    let Some(id) = element.attribute("id") else {
        log::warn!(
            "skipping <{}> without id attribute",
            element.tag_name().name()
        );
        return None;
    };
    let name = element.attribute("name").unwrap_or_default();
    Some(AreaNode::new(id, name, category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::ContainmentEdge;

    fn convert(xml: &str) -> AreaCatalog {
        NestedConverter::from_text(xml, ParseOptions::default())
            .convert()
            .unwrap()
    }

    fn edge(source: &str, target: &str) -> ContainmentEdge<String> {
        ContainmentEdge::contains(source.to_string(), target.to_string())
    }

    #[test]
    fn test_single_chain() {
        let catalog = convert(
            r#"<BIAN>
                <BusinessArea id="A1" name="Area One">
                    <BusinessDomain id="D1" name="Domain One">
                        <ServiceDomain id="S1" name="Service One"/>
                    </BusinessDomain>
                </BusinessArea>
                <BusinessArea id="A2" name="Area Two"/>
            </BIAN>"#,
        );

        let a1 = catalog.get("A1").unwrap();
        assert_eq!(a1.nodes.len(), 3);
        assert_eq!(a1.edges, vec![edge("A1", "D1"), edge("D1", "S1")]);
        assert_eq!(a1.nodes[2].description, "Service for service one");

        let a2 = catalog.get("A2").unwrap();
        assert_eq!(a2.nodes.len(), 1);
        assert!(a2.edges.is_empty());
    }

    #[test]
    fn test_depth_first_order() {
        let catalog = convert(
            r#"<BIAN><BusinessArea id="A" name="a">
                <BusinessDomain id="D1" name="d1"><ServiceDomain id="S1" name="s1"/></BusinessDomain>
                <BusinessDomain id="D2" name="d2"><ServiceDomain id="S2" name="s2"/></BusinessDomain>
            </BusinessArea></BIAN>"#,
        );

        let ids: Vec<_> = catalog.bundles[0].nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "D1", "S1", "D2", "S2"]);
    }

    #[test]
    fn test_intermediate_wrappers() {
        let catalog = convert(
            r#"<BIAN><Areas><BusinessArea id="A" name="a"><Domains>
                <BusinessDomain id="D" name="d"><Services><ServiceDomain id="S" name="s"/></Services></BusinessDomain>
            </Domains></BusinessArea></Areas></BIAN>"#,
        );
        assert_eq!(catalog.bundles[0].edges, vec![edge("A", "D"), edge("D", "S")]);
    }

    #[test]
    fn test_service_outside_domain_ignored() {
        let catalog = convert(
            r#"<BIAN><BusinessArea id="A" name="a"><ServiceDomain id="S" name="s"/></BusinessArea></BIAN>"#,
        );
        assert_eq!(catalog.bundles[0].nodes.len(), 1);
    }

    #[test]
    fn test_missing_attributes() {
        let catalog = convert(
            r#"<BIAN><BusinessArea id="A">
                <BusinessDomain name="anonymous"><ServiceDomain id="S" name="s"/></BusinessDomain>
                <BusinessDomain id="D" name="d"/>
            </BusinessArea></BIAN>"#,
        );

        let bundle = &catalog.bundles[0];
        assert_eq!(bundle.nodes[0].name, "");
        assert_eq!(bundle.nodes[0].description, "Business area covering ");
        let ids: Vec<_> = bundle.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "D"]);
    }

    #[test]
    fn test_area_ids_with_path_parts_skipped() {
        let catalog = convert(
            r#"<BIAN>
                <BusinessArea id="../../x" name="up"><BusinessDomain id="D0" name="d"/></BusinessArea>
                <BusinessArea id="a/b" name="nested"/>
                <BusinessArea id=".." name="parent"/>
                <BusinessArea id="A1" name="kept"><BusinessDomain id="d/1" name="domain"/></BusinessArea>
            </BIAN>"#,
        );

        assert_eq!(catalog.len(), 1);
        // Only area ids become file names
        assert_eq!(catalog.bundles[0].edges, vec![edge("A1", "d/1")]);
    }

    #[test]
    fn test_no_areas() {
        assert!(convert("<BIAN><Something/></BIAN>").is_empty());
    }

    #[test]
    fn test_custom_schema() {
        let options = ParseOptions::new().with_schema(NestedSchema::new("Area", "Domain", "Service"));
        let catalog = NestedConverter::from_text(
            r#"<root><Area id="x" name="X"><Domain id="y" name="Y"/></Area></root>"#,
            options,
        )
        .convert()
        .unwrap();
        assert_eq!(catalog.bundles[0].edges, vec![edge("x", "y")]);
    }

    #[test]
    fn test_malformed_strict_and_lenient() {
        let broken = "<BIAN><BusinessArea id=\"A\">";

        let strict = NestedConverter::from_text(broken, ParseOptions::default()).convert();
        assert!(matches!(strict, Err(Error::Xml(_))));

        let lenient = NestedConverter::from_text(broken, ParseOptions::new().lenient())
            .convert()
            .unwrap();
        assert!(lenient.is_empty());
    }
}
