use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Extract one snippet from a source file.
    Extract(ExtractArgs),
    /// Run every request of a JSON manifest.
    Batch(BatchArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ExtractArgs {
    /// File path, relative to the source roots.
    pub file: String,

    /// Member pattern such as `Widget.Render(int)` or `-Widget`; the whole
    /// file when omitted.
    #[arg(default_value = "", allow_hyphen_values = true)]
    pub pattern: String,
}

#[derive(Clone, Debug, Args)]
pub struct BatchArgs {
    /// JSON array of `{"file", "pattern", "language"}` requests.
    pub manifest: PathBuf,
}
