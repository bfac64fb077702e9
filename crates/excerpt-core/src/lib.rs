//! # excerpt-core
//!
//! Member-pattern snippet extraction.
//!
//! A caller names a file and a member pattern such as
//! `NS.Widget.Render(string)` or `=Widget.Count.get`. The engine parses the
//! file into declarations, indexes them in a [`MatchingTrie`], resolves the
//! pattern against it and cleans the matched text into a [`Snippet`]:
//!
//! - [`pattern`]: tokenizer for the member-pattern mini-language
//! - [`trie`]: trie of qualified-name chunks with a suffix index
//! - [`matcher`]: suffix matching, overload and arity selection
//! - [`snippet`]: indentation cleanup and mode-specific truncation
//! - [`extractor`]: per-language extractors over a set of source roots
//! - [`batch`]: many requests, failures collected

pub mod batch;
pub mod error;
pub mod extractor;
pub mod matcher;
pub mod pattern;
pub mod snippet;
pub mod source;
pub mod trie;

pub use batch::{
    BatchExtractor, BatchReport, ExtractedSnippet, ExtractionFailure, ExtractionRequest,
};
pub use error::ExtractError;
pub use extractor::{CSharpExtractor, PlainExtractor, SnippetExtractor, create_extractor};
pub use pattern::{Chunk, ExtractionMode, MemberPattern};
pub use snippet::Snippet;
pub use source::SourceRoots;
pub use trie::MatchingTrie;
