//! Positional landscape parsing.
//!
//! Labels (`<text>`) and connectors (`<line>`) are read from the first `<svg>`
//! element of a document as an unordered soup of points and segments. Edges
//! are then inferred from geometry alone; see [`crate::infer`].
//!
//! Landscapes are usually inlined in HTML pages, so documents go through an
//! HTML parser. Undeclared prefixes (`xlink:href`), named character
//! references (`&nbsp;`) and unclosed tags are recovered, never fatal.

use std::io::Read;
use std::path::Path;

use scraper::{ElementRef, Html};

use crate::detect::{decode_source, read_source};
use crate::error::{Error, Result};
use crate::infer::infer_edges;
use crate::model::{NodeId, PointRecord, Segment, TaxonomyGraph};

use super::attrs::{find_element, is_element, normalize_label, position, text_content};
use super::options::ParseOptions;

/// Labeled points and segments extracted from one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Primitives {
    /// One record per non-empty label, identifiers `0..n` in document order
    pub points: Vec<PointRecord>,
    /// One segment per line element, in document order
    pub segments: Vec<Segment>,
}

/// Extracts geometric primitives from a parsed document.
///
/// Pure transformation: no inference, no distance computation.
pub struct PrimitiveExtractor<'a> {
    options: &'a ParseOptions,
}

impl<'a> PrimitiveExtractor<'a> {
    /// Create an extractor.
    pub fn new(options: &'a ParseOptions) -> Self {
        Self { options }
    }

    /// Extract primitives under the first `svg` element of `html`.
    pub fn extract(&self, html: &Html) -> Result<Primitives> {
        let svg = find_element(html.root_element(), "svg").ok_or(Error::MissingSvg)?;
        Ok(self.extract_from(svg))
    }

    /// Extract primitives under an `svg` element.
    pub fn extract_from(&self, svg: ElementRef<'_>) -> Primitives {
        let mut primitives = Primitives::default();

        for node in svg.descendants().filter_map(ElementRef::wrap) {
            if is_element(node, "text") {
                if let Some(label) = self.label(node) {
                    let id = NodeId(primitives.points.len());
                    let category = self.options.classifier.classify(&label);
                    primitives
                        .points
                        .push(PointRecord::new(id, label, category, position(node, "x", "y")));
                }
            } else if is_element(node, "line") {
                primitives.segments.push(Segment::new(
                    position(node, "x1", "y1"),
                    position(node, "x2", "y2"),
                ));
            }
        }

        log::debug!(
            "extracted {} labels and {} segments",
            primitives.points.len(),
            primitives.segments.len()
        );

        primitives
    }

    /// Trimmed label text, `None` when empty.
    fn label(&self, node: ElementRef<'_>) -> Option<String> {
        let raw = text_content(node);
        let label = if self.options.normalize_labels {
            normalize_label(&raw)
        } else {
            raw.trim().to_string()
        };

        (!label.is_empty()).then_some(label)
    }
}

/// Parser for positional landscape documents.
pub struct LandscapeParser {
    text: String,
    options: ParseOptions,
}

impl LandscapeParser {
    /// Open a landscape file (`.svg`, `.svgz` or an HTML page).
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a landscape file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let text = read_source(path)?;
        Ok(Self { text, options })
    }

    /// Parse a landscape from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a landscape from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let text = decode_source(data)?;
        Ok(Self { text, options })
    }

    /// Parse a landscape from text.
    pub fn from_text(text: impl Into<String>, options: ParseOptions) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }

    /// Parse a landscape from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a landscape from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Extract primitives without inferring structure.
    ///
    /// Fails only when the document has no `svg` element.
    pub fn primitives(&self) -> Result<Primitives> {
        let html = Html::parse_document(&self.text);
        if !html.errors.is_empty() {
            log::debug!("recovered from {} markup errors", html.errors.len());
        }

        PrimitiveExtractor::new(&self.options).extract(&html)
    }

    /// Parse the landscape into nodes and inferred edges.
    pub fn parse(&self) -> Result<TaxonomyGraph> {
        let Primitives { points, segments } = self.primitives()?;
        let edges = infer_edges(&segments, &points);
        Ok(TaxonomyGraph::new(points, edges))
    }
}
