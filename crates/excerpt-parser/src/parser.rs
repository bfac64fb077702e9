//! ast-grep wrapper and language detection from file extensions.

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

use crate::error::ParserError;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Detect a supported language from a file path extension.
///
/// Returns `None` for extensions without a declaration front-end.
#[must_use]
pub fn detect_language(file_path: &str) -> Option<SupportLang> {
    let ext = file_path.rsplit('.').next()?;
    match ext {
        "cs" | "csx" => Some(SupportLang::CSharp),
        _ => None,
    }
}

/// Resolve a language name as written in documentation sources
/// (`csharp`, `cs`, `c#`).
///
/// # Errors
/// Returns `ParserError::UnsupportedLanguage` for any other name.
pub fn language_from_name(name: &str) -> Result<SupportLang, ParserError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "csharp" | "cs" | "c#" => Ok(SupportLang::CSharp),
        _ => Err(ParserError::UnsupportedLanguage(name.to_string())),
    }
}

/// Parse source code into an ast-grep tree for the given language.
#[must_use]
pub fn parse_source(source: &str, lang: SupportLang) -> AstTree {
    use ast_grep_language::LanguageExt;
    lang.ast_grep(source)
}
