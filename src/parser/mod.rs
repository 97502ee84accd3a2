//! Source document parsing.

pub mod attrs;
mod nested;
mod options;
mod svg;

pub use nested::{convert_document, NestedConverter};
pub use options::{ErrorMode, NestedSchema, ParseOptions};
pub use svg::{LandscapeParser, PrimitiveExtractor, Primitives};
