use excerpt_config::SourcesConfig;

use crate::cli::{Commands, GlobalFlags};

pub mod batch;
pub mod extract;

/// Dispatch a parsed command. `Ok(false)` means the command ran but some of
/// its work failed.
pub fn dispatch(
    command: &Commands,
    sources: &SourcesConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<bool> {
    match command {
        Commands::Extract(args) => extract::handle(args, sources, flags).map(|()| true),
        Commands::Batch(args) => batch::handle(args, sources, flags),
    }
}
