//! Error types for snippet extraction.
//!
//! Every variant is request-scoped: a failed extraction never invalidates an
//! index the extractor has already cached.

use std::path::PathBuf;

use excerpt_parser::ParserError;
use thiserror::Error;

/// Errors returned by a [`SnippetExtractor`](crate::SnippetExtractor).
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The member pattern could not be tokenized.
    #[error("Invalid extraction rule: {file} {pattern}: {reason}")]
    InvalidPattern {
        file: String,
        pattern: String,
        reason: String,
    },

    /// The pattern is valid but addresses no declaration in the file.
    #[error("Cannot find member: {file} {pattern}")]
    MemberNotFound { file: String, pattern: String },

    /// No source root contains the file.
    #[error("Cannot find file: {file} {pattern}")]
    FileNotFound { file: String, pattern: String },

    /// A snippet was requested from zero declaration spans.
    #[error("No declaration text to build a snippet from")]
    EmptySpanSet,

    #[error("Cannot parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: ParserError,
    },

    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An extractor was created without any source root.
    #[error("At least one source root is required")]
    NoSourceRoots,
}
