//! Language front-ends that turn source text into a [`DeclarationTree`].

pub mod csharp;

pub use csharp::CSharpParser;

use crate::error::ParserError;
use crate::types::DeclarationTree;

/// A front-end for one source language.
pub trait DeclarationParser {
    /// Canonical language name, used in logs and errors.
    fn language(&self) -> &'static str;

    /// Parse `source` into its declaration hierarchy.
    ///
    /// # Errors
    /// Returns `ParserError::ParseFailed` when the source is not valid for the
    /// language.
    fn parse(&self, source: &str) -> Result<DeclarationTree, ParserError>;
}
