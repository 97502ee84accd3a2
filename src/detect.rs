//! Source format detection and decoding.
//!
//! Landscapes are usually published as HTML pages with an inline `<svg>`,
//! sometimes as bare `.svg` or gzip-compressed `.svgz` files. Nested
//! taxonomies are plain XML. This module turns raw bytes into text and
//! tells the two apart.

use crate::error::{Error, Result};
use flate2::read::GzDecoder;
use regex::Regex;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

/// Gzip magic bytes.
const GZIP_MAGIC: &[u8] = &[0x1f, 0x8b];

/// UTF-8 byte order mark.
const UTF8_BOM: &str = "\u{feff}";

/// Opening or closing `svg` tag, case-insensitive. The name must end at
/// whitespace, `/` or `>`, so `<svgz>` and `<svg-icon>` never match.
const SVG_TAG_PATTERN: &str = r"(?i)<(/?)svg(?:\s[^>]*?)?(/?)>";

fn svg_tag_regex() -> Result<&'static Regex> {
    static SVG_TAG: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();
    SVG_TAG
        .get_or_init(|| Regex::new(SVG_TAG_PATTERN))
        .as_ref()
        .map_err(|e| Error::Other(e.to_string()))
}

/// Kind of source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Free-floating labels and lines; structure must be inferred
    Positional,
    /// Explicitly nested elements; structure is given
    Nested,
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Positional => write!(f, "positional (SVG)"),
            SourceKind::Nested => write!(f, "nested (XML)"),
        }
    }
}

/// Check for gzip magic bytes.
pub fn is_gzip(data: &[u8]) -> bool {
    data.starts_with(GZIP_MAGIC)
}

/// Decode raw source bytes to text.
///
/// Gzip input is inflated first. A leading byte order mark is dropped.
pub fn decode_source(data: &[u8]) -> Result<String> {
    let text = if is_gzip(data) {
        let mut decoder = GzDecoder::new(data);
        let mut inflated = String::new();
        decoder
            .read_to_string(&mut inflated)
            .map_err(|e| Error::Decompress(e.to_string()))?;
        inflated
    } else {
        String::from_utf8(data.to_vec())?
    };

    Ok(match text.strip_prefix(UTF8_BOM) {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

/// Read and decode a source file.
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String> {
    let data = fs::read(path)?;
    decode_source(&data)
}

/// Locate the first complete `<svg>...</svg>` element in `text`.
///
/// Nested `svg` elements are balanced, so the span covers the outermost
/// element. Returns `None` when no balanced element exists.
pub fn svg_fragment(text: &str) -> Result<Option<&str>> {
    let tags = svg_tag_regex()?;

    let mut start = None;
    let mut depth = 0usize;

    for caps in tags.captures_iter(text) {
        let Some(tag) = caps.get(0) else { continue };
        let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
        let self_closing = caps.get(2).is_some_and(|m| !m.as_str().is_empty());

        if closing {
            if depth == 0 {
                continue;
            }
            depth -= 1;
            if depth == 0 {
                if let Some(begin) = start {
                    return Ok(Some(&text[begin..tag.end()]));
                }
            }
        } else if self_closing {
            if depth == 0 {
                return Ok(Some(tag.as_str()));
            }
        } else {
            if depth == 0 {
                start = Some(tag.start());
            }
            depth += 1;
        }
    }

    Ok(None)
}

/// Detect the kind of a decoded source document.
///
/// Anything carrying an `svg` element is positional; other markup is
/// treated as nested.
pub fn detect_source_kind(text: &str) -> Result<SourceKind> {
    if svg_fragment(text)?.is_some() {
        return Ok(SourceKind::Positional);
    }

    if text.trim_start().starts_with('<') {
        return Ok(SourceKind::Nested);
    }

    Err(Error::UnknownFormat)
}

/// Detect the kind of raw source bytes.
pub fn detect_source_kind_from_bytes(data: &[u8]) -> Result<SourceKind> {
    let text = decode_source(data)?;
    detect_source_kind(&text)
}

/// Detect the kind of a source file.
pub fn detect_source_kind_from_path<P: AsRef<Path>>(path: P) -> Result<SourceKind> {
    let text = read_source(path)?;
    detect_source_kind(&text)
}
