//! Parser error types for excerpt-parser.

/// Errors that can occur while turning source text into a declaration tree.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Parse failed for {language}: {message}")]
    ParseFailed { language: String, message: String },

    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),
}
