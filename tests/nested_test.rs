//! Integration tests for the nested markup pipeline.

use std::fs;

use taxomap::render::{self, JsonFormat, RenderOptions};
use taxomap::{convert_nested_bytes, convert_nested_file, Category, ContainmentEdge, Taxomap};

const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<BIAN version="12.0">
    <BusinessArea id="A1" name="Sales And Service">
        <BusinessDomain id="D1" name="Channel Specific">
            <ServiceDomain id="S1" name="Branch Location Management"/>
        </BusinessDomain>
    </BusinessArea>
    <BusinessArea id="A2" name="Reference Data">
        <BusinessDomain id="D2" name="Party"/>
    </BusinessArea>
</BIAN>"#;

fn edge(source: &str, target: &str) -> ContainmentEdge<String> {
    ContainmentEdge::contains(source.to_string(), target.to_string())
}

#[test]
fn test_area_scoping() {
    let catalog = convert_nested_bytes(SAMPLE.as_bytes()).unwrap();

    let a1 = catalog.get("A1").unwrap();
    assert_eq!(a1.nodes.len(), 3);
    assert_eq!(a1.edges, vec![edge("A1", "D1"), edge("D1", "S1")]);

    let a2 = catalog.get("A2").unwrap();
    assert!(a2.nodes.iter().all(|n| !["A1", "D1", "S1"].contains(&n.id.as_str())));
    assert!(a2
        .edges
        .iter()
        .all(|e| !["A1", "D1", "S1"].contains(&e.target.as_str())));
}

#[test]
fn test_categories_by_depth() {
    let catalog = convert_nested_bytes(SAMPLE.as_bytes()).unwrap();
    let a1 = catalog.get("A1").unwrap();

    let categories: Vec<_> = a1.nodes.iter().map(|n| n.category).collect();
    assert_eq!(
        categories,
        vec![Category::BusinessArea, Category::BusinessDomain, Category::ServiceDomain]
    );
    assert_eq!(a1.nodes[0].description, "Business area covering sales and service");
    assert_eq!(a1.nodes[1].description, "Managing channel specific processes");
    assert_eq!(a1.nodes[2].description, "Service for branch location management");
}

#[test]
fn test_per_area_files() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = convert_nested_bytes(SAMPLE.as_bytes()).unwrap();

    render::write_area_documents(&catalog, dir.path(), &RenderOptions::default()).unwrap();

    let nodes: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("A1.json")).unwrap()).unwrap();
    assert_eq!(nodes.as_array().map(Vec::len), Some(3));
    assert_eq!(nodes[0]["type"], "business_area");

    let edges: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("A1-edges.json")).unwrap()).unwrap();
    assert_eq!(
        edges,
        serde_json::json!({
            "edges": [
                { "source": "A1", "target": "D1", "type": "contains" },
                { "source": "D1", "target": "S1", "type": "contains" }
            ]
        })
    );

    let other: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("A2-edges.json")).unwrap()).unwrap();
    assert_eq!(other["edges"].as_array().map(Vec::len), Some(1));
    assert_eq!(other["edges"][0]["target"], "D2");
}

#[test]
fn test_pretty_output_uses_two_space_indent() {
    let catalog = convert_nested_bytes(SAMPLE.as_bytes()).unwrap();
    let json = render::area_nodes_json(catalog.get("A2").unwrap(), JsonFormat::Pretty).unwrap();
    assert!(json.starts_with("[\n  {\n    \"id\": \"A2\""));
}

#[test]
fn test_convert_file_and_builder() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bian.xml");
    fs::write(&path, SAMPLE).unwrap();

    let catalog = convert_nested_file(&path).unwrap();
    assert_eq!(catalog.len(), 2);

    let out = dir.path().join("business_areas");
    let written = Taxomap::new().parse_file(&path).unwrap().write_to(&out).unwrap();
    assert_eq!(written.len(), 4);
    assert!(out.join("A2.json").exists());
}

#[test]
fn test_partial_structure_is_best_effort() {
    let catalog = convert_nested_bytes(
        br#"<BIAN>
            <BusinessArea name="no id"><BusinessDomain id="D0" name="lost"/></BusinessArea>
            <BusinessArea id="A9" name="Kept"/>
        </BIAN>"#,
    )
    .unwrap();

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.bundles[0].area_id, "A9");
}

#[test]
fn test_convert_from_reader() {
    let catalog = taxomap::NestedConverter::from_reader(SAMPLE.as_bytes())
        .unwrap()
        .convert()
        .unwrap();
    assert_eq!(catalog.get("A1").map(|b| b.count(Category::ServiceDomain)), Some(1));
    assert_eq!(
        taxomap::detect_source_kind(SAMPLE).unwrap(),
        taxomap::SourceKind::Nested
    );
}

#[test]
fn test_area_ids_never_leave_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("areas");
    let xml = br#"<BIAN>
        <BusinessArea id="A1" name="First"/>
        <BusinessArea id="../escape" name="Up"/>
        <BusinessArea id="a/b" name="Nested"/>
        <BusinessArea id="A2" name="Last"/>
    </BIAN>"#;

    let written = Taxomap::new().parse_bytes(xml).unwrap().write_to(&out).unwrap();

    assert_eq!(written.len(), 4);
    assert!(out.join("A1.json").exists());
    assert!(out.join("A2-edges.json").exists());
    assert!(!dir.path().join("escape.json").exists());
    assert!(!out.join("a").exists());
}
