use excerpt_config::{ExcerptConfig, SourcesConfig};
use excerpt_core::SourceRoots;

use crate::cli::GlobalFlags;

/// Install the global subscriber. Logs go to stderr so snippets on stdout
/// stay clean; `EXCERPT_LOG` overrides the level picked by the flags.
pub fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("EXCERPT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Load the `sources` section and apply command-line overrides.
pub fn load_sources(flags: &GlobalFlags) -> anyhow::Result<SourcesConfig> {
    let config = ExcerptConfig::load()?;
    let sources = apply_overrides(config.sources, flags);
    sources.validate()?;
    tracing::debug!(roots = ?sources.roots, language = %sources.language, "sources configured");
    Ok(sources)
}

/// `--root` replaces the configured roots; `--language` replaces the default
/// language.
pub fn apply_overrides(mut sources: SourcesConfig, flags: &GlobalFlags) -> SourcesConfig {
    if !flags.roots.is_empty() {
        sources.roots.clone_from(&flags.roots);
    }
    if let Some(language) = &flags.language {
        sources.language.clone_from(language);
    }
    sources
}

pub fn source_roots(sources: &SourcesConfig) -> anyhow::Result<SourceRoots> {
    SourceRoots::new(sources.roots.iter().cloned()).map_err(anyhow::Error::from)
}
