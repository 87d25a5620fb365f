//! Error types for the mdsite library.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for mdsite operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting Markdown or generating pages.
#[derive(Error, Debug)]
pub enum Error {
    /// An inline delimiter appears an odd number of times in a span.
    #[error("Malformed markup: unbalanced `{delimiter}` in {text:?}")]
    MalformedMarkup {
        /// The delimiter that could not be paired
        delimiter: String,
        /// The text span containing it
        text: String,
    },

    /// An HTML node or block violates a structural invariant.
    #[error("Structural error: {0}")]
    Structural(String),

    /// The document has no top-level `# ` heading.
    #[error("Document has no h1 heading")]
    MissingTitle,

    /// A page template is missing a required placeholder.
    #[error("Template error: {0}")]
    Template(String),

    /// Cleaning the output directory would delete one of the build inputs.
    #[error("Refusing to clean {}: it contains input {}", output.display(), input.display())]
    OutputContainsInput {
        /// The output directory
        output: PathBuf,
        /// The input it would remove
        input: PathBuf,
    },

    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error serializing the node tree to JSON.
    #[error("JSON serialization error: {0}")]
    Json(String),
}

impl Error {
    /// Create a malformed markup error for the given delimiter and text.
    pub fn malformed(delimiter: &str, text: &str) -> Self {
        Error::MalformedMarkup {
            delimiter: delimiter.to_string(),
            text: text.to_string(),
        }
    }

    /// Check if this error was caused by the document's content rather than
    /// an internal defect or the environment.
    pub fn is_content_error(&self) -> bool {
        matches!(self, Error::MalformedMarkup { .. } | Error::MissingTitle)
    }
}
