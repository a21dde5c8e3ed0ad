//! Error types for the document pipeline.
//!
//! The lexer and parser are total and never raise; structured errors exist
//! for the front-matter layer, which does reject malformed headers.

use thiserror::Error;

/// Errors raised while processing a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// A front-matter line is not a `key: value` pair.
    #[error("front matter line {line} is not a key/value pair: {text}")]
    InvalidField { line: usize, text: String },

    /// The input has body content before any front-matter header, or no
    /// header at all.
    #[error("input does not start with a front matter header")]
    MissingFrontMatter,

    /// A front-matter header was opened but its closing rule never appears.
    #[error("front matter header is never closed")]
    UnterminatedFrontMatter,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DocumentError>;

impl DocumentError {
    /// Creates an invalid-field error for a 1-based source line.
    pub fn invalid_field(line: usize, text: impl Into<String>) -> Self {
        DocumentError::InvalidField {
            line,
            text: text.into(),
        }
    }
}
