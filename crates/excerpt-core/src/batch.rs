//! Many extraction requests against one set of source roots.
//!
//! Extractors are created lazily, one per language, and reused across
//! requests so every file is indexed at most once. Failures are collected
//! instead of aborting the run.

use std::collections::HashMap;

use excerpt_parser::detect_language;
use serde::{Deserialize, Serialize};

use crate::extractor::{CSHARP, SnippetExtractor, canonical_language, create_extractor};
use crate::source::SourceRoots;

/// One snippet to extract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRequest {
    pub file: String,
    #[serde(default)]
    pub pattern: String,
    /// Overrides the language detected from the file extension and the
    /// batch's default language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl ExtractionRequest {
    #[must_use]
    pub fn new(file: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            pattern: pattern.into(),
            language: None,
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedSnippet {
    pub file: String,
    pub pattern: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionFailure {
    pub file: String,
    pub pattern: String,
    pub message: String,
}

/// Outcome of a batch run, in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub snippets: Vec<ExtractedSnippet>,
    pub failures: Vec<ExtractionFailure>,
}

impl BatchReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs extraction requests, keeping one extractor per language.
pub struct BatchExtractor {
    roots: SourceRoots,
    default_language: String,
    extractors: HashMap<String, Box<dyn SnippetExtractor>>,
}

impl BatchExtractor {
    #[must_use]
    pub fn new(roots: SourceRoots) -> Self {
        Self::with_default_language(roots, CSHARP)
    }

    #[must_use]
    pub fn with_default_language(roots: SourceRoots, language: &str) -> Self {
        Self {
            roots,
            default_language: canonical_language(language),
            extractors: HashMap::new(),
        }
    }

    /// Run every request, collecting snippets and failures.
    pub fn run<'a, I>(&mut self, requests: I) -> BatchReport
    where
        I: IntoIterator<Item = &'a ExtractionRequest>,
    {
        let mut report = BatchReport::default();
        for request in requests {
            let language = request
                .language
                .as_deref()
                .map_or_else(|| self.language_for(&request.file), canonical_language);
            let roots = &self.roots;
            let extractor = self
                .extractors
                .entry(language)
                .or_insert_with_key(|language| create_extractor(language, roots.clone()));

            match extractor.extract(&request.file, &request.pattern) {
                Ok(snippet) => report.snippets.push(ExtractedSnippet {
                    file: request.file.clone(),
                    pattern: request.pattern.clone(),
                    content: snippet.into_content(),
                }),
                Err(err) => {
                    tracing::warn!(file = %request.file, pattern = %request.pattern, error = %err, "extraction failed");
                    report.failures.push(ExtractionFailure {
                        file: request.file.clone(),
                        pattern: request.pattern.clone(),
                        message: err.to_string(),
                    });
                }
            }
        }
        tracing::debug!(
            snippets = report.snippets.len(),
            failures = report.failures.len(),
            "batch finished"
        );
        report
    }

    /// C# for files with a C# extension, the default language otherwise.
    fn language_for(&self, file: &str) -> String {
        if detect_language(file).is_some() {
            CSHARP.to_string()
        } else {
            self.default_language.clone()
        }
    }
}
