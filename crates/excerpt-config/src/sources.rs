//! Where snippet files are looked up and how they are read.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Language used when neither the request nor the command line names one.
fn default_language() -> String {
    "csharp".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourcesConfig {
    /// Directories searched in order for snippet files.
    #[serde(default)]
    pub roots: Vec<PathBuf>,

    /// Default snippet language (`csharp`, or anything else for whole files).
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            language: default_language(),
        }
    }
}

impl SourcesConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.roots.is_empty()
    }

    /// Check the section before handing it to the extractors.
    ///
    /// # Errors
    /// `NoSourceRoots` without any root, `InvalidValue` for a blank root or
    /// language.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NoSourceRoots);
        }
        if self.roots.iter().any(|root| root.as_os_str().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "sources.roots",
                reason: "root paths must not be empty",
            });
        }
        if self.language.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "sources.language",
                reason: "language must not be blank",
            });
        }
        Ok(())
    }
}
