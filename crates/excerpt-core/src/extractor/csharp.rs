use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::PathBuf;

use excerpt_parser::{CSharpParser, DeclarationParser, DeclarationTree};

use crate::error::ExtractError;
use crate::matcher;
use crate::pattern::MemberPattern;
use crate::snippet::{Snippet, build_snippet};
use crate::source::{SourceRoots, read_source};
use crate::trie::MatchingTrie;

use super::SnippetExtractor;

/// Parsed declarations of one file plus the trie built over them.
#[derive(Debug)]
struct FileIndex {
    tree: DeclarationTree,
    trie: MatchingTrie,
}

/// Member-pattern extractor for C# sources.
///
/// Each file is read, parsed and indexed once, on its first non-blank
/// pattern; the index is kept for the lifetime of the extractor.
#[derive(Debug)]
pub struct CSharpExtractor<P = CSharpParser> {
    roots: SourceRoots,
    parser: P,
    cache: HashMap<PathBuf, FileIndex>,
}

impl CSharpExtractor {
    #[must_use]
    pub fn new(roots: SourceRoots) -> Self {
        Self::with_parser(roots, CSharpParser)
    }
}

impl<P: DeclarationParser> CSharpExtractor<P> {
    /// Use a custom front-end, for instance one that wraps [`CSharpParser`].
    #[must_use]
    pub fn with_parser(roots: SourceRoots, parser: P) -> Self {
        Self {
            roots,
            parser,
            cache: HashMap::new(),
        }
    }

    #[must_use]
    pub const fn roots(&self) -> &SourceRoots {
        &self.roots
    }

    /// Number of files indexed so far.
    #[must_use]
    pub fn cached_files(&self) -> usize {
        self.cache.len()
    }

    fn index(&mut self, path: PathBuf, file: &str) -> Result<&FileIndex, ExtractError> {
        match self.cache.entry(path) {
            Entry::Occupied(entry) => {
                tracing::debug!(path = %entry.key().display(), "index cache hit");
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let source = read_source(entry.key())?;
                let tree = self
                    .parser
                    .parse(&source)
                    .map_err(|source| ExtractError::Parse {
                        file: file.to_string(),
                        source,
                    })?;
                let trie = MatchingTrie::build(&tree);
                tracing::debug!(
                    path = %entry.key().display(),
                    language = self.parser.language(),
                    declarations = tree.len(),
                    "indexed source file"
                );
                Ok(entry.insert(FileIndex { tree, trie }))
            }
        }
    }
}

impl<P: DeclarationParser> SnippetExtractor for CSharpExtractor<P> {
    fn extract(&mut self, file_path: &str, pattern: &str) -> Result<Snippet, ExtractError> {
        let member = MemberPattern::parse(pattern).map_err(|err| ExtractError::InvalidPattern {
            file: file_path.to_string(),
            pattern: pattern.to_string(),
            reason: err.to_string(),
        })?;

        if member.is_whole_file() {
            let (_, content) = self.roots.read(file_path, pattern)?;
            return Ok(Snippet::new(content));
        }

        let path = self.roots.resolve(file_path, pattern)?;
        let index = self.index(path, file_path)?;
        let ids = matcher::resolve(&index.trie, &index.tree, member.chunks()).ok_or_else(|| {
            ExtractError::MemberNotFound {
                file: file_path.to_string(),
                pattern: pattern.to_string(),
            }
        })?;
        build_snippet(ids.iter().map(|&id| index.tree.text(id)), member.mode())
    }
}
