//! Rendering options and configuration.

use super::JsonFormat;

/// Default file name of the flat parent table.
pub const DEFAULT_TABLE_FILE: &str = "bian_structure.csv";

/// Default file name of the full graph document.
pub const DEFAULT_GRAPH_FILE: &str = "bian_structure.json";

/// Options for rendering and writing output documents.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// JSON layout for every JSON document
    pub json_format: JsonFormat,

    /// File name of the CSV table
    pub table_file: String,

    /// File name of the graph document
    pub graph_file: String,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the JSON format.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }

    /// Write compact JSON.
    pub fn compact(mut self) -> Self {
        self.json_format = JsonFormat::Compact;
        self
    }

    /// Set the CSV table file name.
    pub fn with_table_file(mut self, name: impl Into<String>) -> Self {
        self.table_file = name.into();
        self
    }

    /// Set the graph document file name.
    pub fn with_graph_file(mut self, name: impl Into<String>) -> Self {
        self.graph_file = name.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            json_format: JsonFormat::Pretty,
            table_file: DEFAULT_TABLE_FILE.to_string(),
            graph_file: DEFAULT_GRAPH_FILE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.json_format, JsonFormat::Pretty);
        assert_eq!(options.table_file, "bian_structure.csv");
        assert_eq!(options.graph_file, "bian_structure.json");
    }

    #[test]
    fn test_builder() {
        let options = RenderOptions::new()
            .compact()
            .with_table_file("table.csv")
            .with_graph_file("graph.json");
        assert_eq!(options.json_format, JsonFormat::Compact);
        assert_eq!(options.table_file, "table.csv");
        assert_eq!(options.graph_file, "graph.json");
    }
}
