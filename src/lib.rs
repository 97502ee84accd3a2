//! # taxomap
//!
//! Rebuild a three-level taxonomy (business area → business domain →
//! service domain) from one of two sources:
//!
//! - a **positional landscape**: an SVG (bare, gzip-compressed, or inlined
//!   in an HTML page) where labels float freely and containment is only
//!   suggested by connector lines, and
//! - a **nested document**: XML whose element nesting already spells out
//!   the hierarchy.
//!
//! Both produce nodes with parent pointers, rendered as a CSV table, a
//! `{"nodes", "edges"}` JSON graph, or per-area JSON documents.
//!
//! ## Quick Start
//!
//! ```no_run
//! use taxomap::{parse_landscape_file, render};
//!
//! fn main() -> taxomap::Result<()> {
//!     let graph = parse_landscape_file("landscape.svg")?;
//!
//!     println!("{}", render::to_csv(&graph)?);
//!     Ok(())
//! }
//! ```
//!
//! ## How structure is inferred
//!
//! Every line endpoint snaps to the nearest label (first label wins ties).
//! The first endpoint becomes the parent, the second the child. A node's
//! parent is the source of the first edge that targets it. All three rules
//! are ordered linear scans, so results are deterministic for a given
//! document, though not necessarily correct when the geometry is ambiguous.

pub mod detect;
pub mod error;
pub mod infer;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_source_kind, detect_source_kind_from_bytes, detect_source_kind_from_path, SourceKind};
pub use error::{Error, Result};
pub use infer::{Classifier, ClassificationRule};
pub use model::{
    AreaBundle, AreaCatalog, AreaNode, Category, ContainmentEdge, NodeId, OutputRow, PointRecord,
    Position, Relation, Segment, TaxonomyGraph,
};
pub use parser::{ErrorMode, LandscapeParser, NestedConverter, NestedSchema, ParseOptions};
pub use render::{ExtractionStats, JsonFormat, RenderOptions};

use std::path::Path;

/// Parse a landscape file into nodes and inferred edges.
///
/// # Example
///
/// ```no_run
/// use taxomap::parse_landscape_file;
///
/// let graph = parse_landscape_file("landscape.html").unwrap();
/// println!("Nodes: {}", graph.node_count());
/// ```
pub fn parse_landscape_file<P: AsRef<Path>>(path: P) -> Result<TaxonomyGraph> {
    LandscapeParser::open(path)?.parse()
}

/// Parse a landscape file with custom options.
pub fn parse_landscape_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<TaxonomyGraph> {
    LandscapeParser::open_with_options(path, options)?.parse()
}

/// Parse a landscape from bytes.
///
/// # Example
///
/// ```
/// use taxomap::{parse_landscape_bytes, NodeId};
///
/// let svg = br#"<svg>
///     <text x="0" y="0">Business Area: Retail</text>
///     <text x="10" y="0">Business Domain: Lending</text>
///     <line x1="0" y1="0" x2="10" y2="0"/>
/// </svg>"#;
/// let graph = parse_landscape_bytes(svg).unwrap();
/// assert_eq!(graph.parent_of(NodeId(1)), Some(NodeId(0)));
/// ```
pub fn parse_landscape_bytes(data: &[u8]) -> Result<TaxonomyGraph> {
    LandscapeParser::from_bytes(data)?.parse()
}

/// Parse a landscape from bytes with custom options.
pub fn parse_landscape_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<TaxonomyGraph> {
    LandscapeParser::from_bytes_with_options(data, options)?.parse()
}

/// Convert a nested document file into per-area bundles.
///
/// # Example
///
/// ```no_run
/// use taxomap::convert_nested_file;
///
/// let catalog = convert_nested_file("bian.xml").unwrap();
/// for bundle in catalog.iter() {
///     println!("{}: {} nodes", bundle.area_id, bundle.nodes.len());
/// }
/// ```
pub fn convert_nested_file<P: AsRef<Path>>(path: P) -> Result<AreaCatalog> {
    NestedConverter::open(path)?.convert()
}

/// Convert a nested document file with custom options.
pub fn convert_nested_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<AreaCatalog> {
    NestedConverter::open_with_options(path, options)?.convert()
}

/// Convert a nested document from bytes.
pub fn convert_nested_bytes(data: &[u8]) -> Result<AreaCatalog> {
    NestedConverter::from_bytes(data)?.convert()
}

/// Convert a nested document from bytes with custom options.
pub fn convert_nested_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<AreaCatalog> {
    NestedConverter::from_bytes_with_options(data, options)?.convert()
}

/// Convert a landscape file to a CSV parent table.
pub fn to_csv<P: AsRef<Path>>(path: P) -> Result<String> {
    let graph = parse_landscape_file(path)?;
    render::to_csv(&graph)
}

/// Convert a landscape file to a JSON graph document.
///
/// # Example
///
/// ```no_run
/// use taxomap::{to_json, JsonFormat};
///
/// let json = to_json("landscape.svg", JsonFormat::Pretty).unwrap();
/// std::fs::write("bian_structure.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let graph = parse_landscape_file(path)?;
    render::to_json(&graph, format)
}

/// Builder for parsing either source kind and rendering the result.
///
/// # Example
///
/// ```no_run
/// use taxomap::Taxomap;
///
/// let written = Taxomap::new()
///     .lenient()
///     .compact()
///     .parse_file("landscape.html")?
///     .write_to("out")?;
/// # Ok::<(), taxomap::Error>(())
/// ```
pub struct Taxomap {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Taxomap {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Enable lenient parsing mode.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Normalize labels before classification.
    pub fn normalize_labels(mut self) -> Self {
        self.parse_options = self.parse_options.with_normalized_labels(true);
        self
    }

    /// Set the label classifier.
    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.parse_options = self.parse_options.with_classifier(classifier);
        self
    }

    /// Set nested element names.
    pub fn with_schema(mut self, schema: NestedSchema) -> Self {
        self.parse_options = self.parse_options.with_schema(schema);
        self
    }

    /// Write compact JSON.
    pub fn compact(mut self) -> Self {
        self.render_options = self.render_options.compact();
        self
    }

    /// Set render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Parse a file of either kind.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<TaxomapResult> {
        let text = detect::read_source(path)?;
        self.parse_text(text)
    }

    /// Parse bytes of either kind.
    pub fn parse_bytes(self, data: &[u8]) -> Result<TaxomapResult> {
        let text = detect::decode_source(data)?;
        self.parse_text(text)
    }

    fn parse_text(self, text: String) -> Result<TaxomapResult> {
        let taxonomy = match detect_source_kind(&text)? {
            SourceKind::Positional => {
                Taxonomy::Landscape(LandscapeParser::from_text(text, self.parse_options).parse()?)
            }
            SourceKind::Nested => {
                Taxonomy::Nested(NestedConverter::from_text(text, self.parse_options).convert()?)
            }
        };

        Ok(TaxomapResult {
            taxonomy,
            render_options: self.render_options,
        })
    }
}

impl Default for Taxomap {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracted taxonomy of either source kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Taxonomy {
    /// Nodes and inferred edges from a positional landscape
    Landscape(TaxonomyGraph),
    /// Per-area bundles from a nested document
    Nested(AreaCatalog),
}

impl Taxonomy {
    /// Kind of the source this taxonomy came from.
    pub fn kind(&self) -> SourceKind {
        match self {
            Taxonomy::Landscape(_) => SourceKind::Positional,
            Taxonomy::Nested(_) => SourceKind::Nested,
        }
    }

    /// Collect statistics.
    pub fn stats(&self) -> ExtractionStats {
        match self {
            Taxonomy::Landscape(graph) => ExtractionStats::from_graph(graph),
            Taxonomy::Nested(catalog) => ExtractionStats::from_catalog(catalog),
        }
    }
}

/// Result of parsing a source document.
pub struct TaxomapResult {
    /// The extracted taxonomy
    pub taxonomy: Taxonomy,
    /// Render options to use
    render_options: RenderOptions,
}

impl TaxomapResult {
    /// Write the output documents for this taxonomy into `dir`.
    ///
    /// Landscapes produce the CSV table and graph document; nested sources
    /// produce two documents per area.
    pub fn write_to<P: AsRef<Path>>(&self, dir: P) -> Result<Vec<std::path::PathBuf>> {
        match &self.taxonomy {
            Taxonomy::Landscape(graph) => render::write_structure(graph, dir, &self.render_options),
            Taxonomy::Nested(catalog) => {
                render::write_area_documents(catalog, dir, &self.render_options)
            }
        }
    }

    /// Collect statistics.
    pub fn stats(&self) -> ExtractionStats {
        self.taxonomy.stats()
    }

    /// Get the positional graph, if this was a landscape.
    pub fn graph(&self) -> Option<&TaxonomyGraph> {
        match &self.taxonomy {
            Taxonomy::Landscape(graph) => Some(graph),
            Taxonomy::Nested(_) => None,
        }
    }

    /// Get the area catalog, if this was a nested document.
    pub fn catalog(&self) -> Option<&AreaCatalog> {
        match &self.taxonomy {
            Taxonomy::Nested(catalog) => Some(catalog),
            Taxonomy::Landscape(_) => None,
        }
    }
}
