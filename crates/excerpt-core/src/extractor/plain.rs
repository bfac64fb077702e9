use crate::error::ExtractError;
use crate::snippet::Snippet;
use crate::source::SourceRoots;

use super::SnippetExtractor;

/// Returns whole files verbatim; the pattern is ignored.
#[derive(Debug, Clone)]
pub struct PlainExtractor {
    roots: SourceRoots,
}

impl PlainExtractor {
    #[must_use]
    pub const fn new(roots: SourceRoots) -> Self {
        Self { roots }
    }

    #[must_use]
    pub const fn roots(&self) -> &SourceRoots {
        &self.roots
    }
}

impl SnippetExtractor for PlainExtractor {
    fn extract(&mut self, file_path: &str, pattern: &str) -> Result<Snippet, ExtractError> {
        let (path, content) = self.roots.read(file_path, pattern)?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "extracted whole file");
        Ok(Snippet::new(content))
    }
}
