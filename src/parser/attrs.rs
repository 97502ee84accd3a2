//! Attribute and text access at the markup boundary.
//!
//! Missing or unparseable coordinates silently become `0.0`. Nothing past
//! this module sees a raw attribute.

use scraper::ElementRef;
use unicode_normalization::UnicodeNormalization;

use crate::model::Position;

/// Value used for absent or unparseable coordinates.
pub const DEFAULT_COORDINATE: f64 = 0.0;

/// Parse a coordinate attribute value.
///
/// Surrounding whitespace is ignored. Values with units (`12px`) or lists
/// (`1 2`) do not parse.
pub fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}

/// Read a coordinate attribute, defaulting to [`DEFAULT_COORDINATE`].
pub fn coordinate(element: ElementRef<'_>, name: &str) -> f64 {
    element
        .value()
        .attr(name)
        .and_then(parse_coordinate)
        .unwrap_or(DEFAULT_COORDINATE)
}

/// Read a pair of coordinate attributes as a position.
pub fn position(element: ElementRef<'_>, x: &str, y: &str) -> Position {
    Position::new(coordinate(element, x), coordinate(element, y))
}

/// Whether `element` has the given local name, ignoring case.
pub fn is_element(element: ElementRef<'_>, name: &str) -> bool {
    element.value().name().eq_ignore_ascii_case(name)
}

/// First element named `name` in document order, `root` included.
pub fn find_element<'a>(root: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    root.descendants()
        .filter_map(ElementRef::wrap)
        .find(|e| is_element(*e, name))
}

/// All descendant text of `element`, concatenated in document order.
///
/// Character references (`&nbsp;`, `&amp;`) arrive already decoded.
pub fn text_content(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// NFC-normalize a label and collapse internal whitespace runs.
///
/// No-break spaces count as whitespace.
pub fn normalize_label(label: &str) -> String {
    let composed: String = label.nfc().collect();
    composed.split_whitespace().collect::<Vec<_>>().join(" ")
}
