//! Parsing options and configuration.

use crate::infer::Classifier;

/// Options for parsing source documents.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Error handling mode for unparseable nested markup
    pub error_mode: ErrorMode,

    /// Ordered label classification rules (positional path)
    pub classifier: Classifier,

    /// Apply NFC normalization and whitespace collapsing to labels
    pub normalize_labels: bool,

    /// Element names of the nested document
    pub schema: NestedSchema,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (unparseable nested markup yields empty output).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set the label classifier.
    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Enable or disable label normalization.
    pub fn with_normalized_labels(mut self, normalize: bool) -> Self {
        self.normalize_labels = normalize;
        self
    }

    /// Set nested element names.
    pub fn with_schema(mut self, schema: NestedSchema) -> Self {
        self.schema = schema;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            classifier: Classifier::default(),
            normalize_labels: false,
            schema: NestedSchema::default(),
        }
    }
}

/// Error handling mode for nested documents.
///
/// Landscapes go through an HTML parser that recovers from any markup
/// error, so only the nested XML path can fail on malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail when the markup cannot be parsed
    #[default]
    Strict,
    /// Log and continue with an empty result
    Lenient,
}

/// Element names of the three nesting levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedSchema {
    /// Top-level area element
    pub area: String,
    /// Domain element, nested in an area
    pub domain: String,
    /// Sub-domain element, nested in a domain
    pub sub_domain: String,
}

impl NestedSchema {
    /// Create a schema with custom element names.
    pub fn new(
        area: impl Into<String>,
        domain: impl Into<String>,
        sub_domain: impl Into<String>,
    ) -> Self {
        Self {
            area: area.into(),
            domain: domain.into(),
            sub_domain: sub_domain.into(),
        }
    }
}

impl Default for NestedSchema {
    fn default() -> Self {
        Self::new("BusinessArea", "BusinessDomain", "ServiceDomain")
    }
}
