//! Snippet extractors: the caller-facing `extract(file, pattern)` surface.

mod csharp;
mod plain;

pub use csharp::CSharpExtractor;
pub use plain::PlainExtractor;

use excerpt_parser::language_from_name;

use crate::error::ExtractError;
use crate::snippet::Snippet;
use crate::source::SourceRoots;

/// Language name used for the C# extractor.
pub const CSHARP: &str = "csharp";

/// Extracts snippets from files found under a set of source roots.
///
/// Implementations may cache per-file state, hence `&mut self`.
pub trait SnippetExtractor {
    /// Extract the text `pattern` addresses in `file_path`.
    ///
    /// # Errors
    /// Returns an [`ExtractError`] scoped to this request; later requests on
    /// the same extractor are unaffected.
    fn extract(&mut self, file_path: &str, pattern: &str) -> Result<Snippet, ExtractError>;
}

/// Canonical spelling of a snippet language name.
///
/// Every C# alias maps to [`CSHARP`]; other names are trimmed and lowercased.
#[must_use]
pub fn canonical_language(language: &str) -> String {
    if language_from_name(language).is_ok() {
        CSHARP.to_string()
    } else {
        language.trim().to_ascii_lowercase()
    }
}

/// Create the extractor for `language`.
///
/// C# gets the member-pattern extractor; any other language gets the
/// whole-file extractor.
#[must_use]
pub fn create_extractor(language: &str, roots: SourceRoots) -> Box<dyn SnippetExtractor> {
    if canonical_language(language) == CSHARP {
        Box::new(CSharpExtractor::new(roots))
    } else {
        tracing::debug!(language, "no member extractor for language, using whole-file extraction");
        Box::new(PlainExtractor::new(roots))
    }
}
