//! Resolution of snippet file paths against an ordered list of source roots.

use std::path::{Path, PathBuf};

use crate::error::ExtractError;

/// Ordered source directories; the first root containing a file wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRoots {
    roots: Vec<PathBuf>,
}

impl SourceRoots {
    /// # Errors
    /// Returns `ExtractError::NoSourceRoots` when `roots` is empty.
    pub fn new<I, P>(roots: I) -> Result<Self, ExtractError>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let roots: Vec<PathBuf> = roots.into_iter().map(Into::into).collect();
        if roots.is_empty() {
            return Err(ExtractError::NoSourceRoots);
        }
        for root in roots.iter().filter(|root| !root.is_dir()) {
            tracing::warn!(root = %root.display(), "source root is not a directory");
        }
        Ok(Self { roots })
    }

    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Locate `file` under the first root that contains it.
    ///
    /// `pattern` is only carried into the error.
    ///
    /// # Errors
    /// Returns `ExtractError::FileNotFound` for a blank path or when no root
    /// contains the file.
    pub fn resolve(&self, file: &str, pattern: &str) -> Result<PathBuf, ExtractError> {
        let not_found = || ExtractError::FileNotFound {
            file: file.to_string(),
            pattern: pattern.to_string(),
        };

        let relative = file.trim();
        if relative.is_empty() {
            return Err(not_found());
        }

        self.roots
            .iter()
            .map(|root| root.join(relative))
            .find(|candidate| candidate.is_file())
            .ok_or_else(not_found)
    }

    /// Resolve `file` and read it.
    ///
    /// # Errors
    /// Returns `FileNotFound` as [`resolve`](Self::resolve) does, or
    /// `ExtractError::Io` when the file cannot be read.
    pub fn read(&self, file: &str, pattern: &str) -> Result<(PathBuf, String), ExtractError> {
        let path = self.resolve(file, pattern)?;
        let content = read_source(&path)?;
        Ok((path, content))
    }
}

pub(crate) fn read_source(path: &Path) -> Result<String, ExtractError> {
    std::fs::read_to_string(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })
}
