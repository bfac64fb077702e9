use std::path::Path;

use anyhow::Context;
use excerpt_config::SourcesConfig;
use excerpt_core::{BatchExtractor, BatchReport, ExtractionRequest};

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::BatchArgs;
use crate::output::output;

/// Handle `excerpt batch`. Returns whether every request succeeded.
pub fn handle(args: &BatchArgs, sources: &SourcesConfig, flags: &GlobalFlags) -> anyhow::Result<bool> {
    let requests = read_manifest(&args.manifest)?;
    let report = run(&requests, sources)?;
    output(&report, flags.format)?;
    Ok(report.is_success())
}

fn read_manifest(path: &Path) -> anyhow::Result<Vec<ExtractionRequest>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest {}", path.display()))?;
    let requests: Vec<ExtractionRequest> = serde_json::from_str(&text)
        .with_context(|| format!("invalid manifest {}", path.display()))?;
    tracing::debug!(requests = requests.len(), manifest = %path.display(), "manifest loaded");
    Ok(requests)
}

fn run(requests: &[ExtractionRequest], sources: &SourcesConfig) -> anyhow::Result<BatchReport> {
    let roots = bootstrap::source_roots(sources)?;
    let mut batch = BatchExtractor::with_default_language(roots, &sources.language);
    Ok(batch.run(requests))
}
