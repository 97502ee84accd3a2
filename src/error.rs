//! Error types for taxomap library.

use std::io;
use thiserror::Error;

/// Result type alias for taxomap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting a taxonomy.
///
/// Missing attributes, empty labels and ambiguous geometry are never errors;
/// they degrade silently. These variants cover input that cannot be read at
/// all and output that cannot be produced.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is neither an SVG landscape nor a nested markup document.
    #[error("Unknown source format: not SVG or XML markup")]
    UnknownFormat,

    /// The input was expected to carry an `<svg>` element but has none.
    #[error("No <svg> element found in source document")]
    MissingSvg,

    /// The markup could not be parsed.
    #[error("XML parsing error: {0}")]
    Xml(String),

    /// Gzip-compressed input could not be inflated.
    #[error("Decompression error: {0}")]
    Decompress(String),

    /// The source bytes are not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Error writing the CSV table.
    #[error("CSV error: {0}")]
    Csv(String),

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<roxmltree::Error> for Error {
    fn from(err: roxmltree::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            if let csv::ErrorKind::Io(e) = err.into_kind() {
                return Error::Io(e);
            }
            return Error::Csv("I/O failure".to_string());
        }
        Error::Csv(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}
