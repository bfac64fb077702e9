use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `excerpt` binary.
#[derive(Debug, Parser)]
#[command(
    name = "excerpt",
    version,
    about = "Extract documentation snippets from source files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw (snippet text for extract, compact JSON for batch)
    #[arg(short, long, global = true, default_value = "raw")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Source root, searched in the order given; replaces configured roots
    #[arg(short, long = "root", global = true)]
    pub roots: Vec<PathBuf>,

    /// Snippet language (default from config, `csharp` otherwise)
    #[arg(short, long, global = true)]
    pub language: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            roots: self.roots.clone(),
            language: self.language.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn extract_pattern_defaults_to_whole_file() {
        let cli = Cli::try_parse_from(["excerpt", "extract", "Sample.cs"]).expect("cli should parse");
        let Commands::Extract(args) = cli.command else {
            panic!("expected extract");
        };
        assert_eq!(args.file, "Sample.cs");
        assert_eq!(args.pattern, "");
        assert_eq!(cli.format, OutputFormat::Raw);
    }

    #[test]
    fn extraction_mode_prefixes_are_not_flags() {
        for pattern in ["-Widget", "=Widget.Render"] {
            let cli = Cli::try_parse_from(["excerpt", "extract", "Sample.cs", pattern])
                .expect("cli should parse");
            let Commands::Extract(args) = cli.command else {
                panic!("expected extract");
            };
            assert_eq!(args.pattern, pattern);
        }
    }

    #[test]
    fn global_flags_parse_before_and_after_subcommand() {
        let cli = Cli::try_parse_from([
            "excerpt",
            "-r",
            "docs",
            "--root",
            "src",
            "--format",
            "json",
            "batch",
            "manifest.json",
            "-l",
            "xml",
            "--verbose",
        ])
        .expect("cli should parse");

        let flags = cli.global_flags();
        assert_eq!(flags.format, OutputFormat::Json);
        assert_eq!(flags.roots, vec![PathBuf::from("docs"), PathBuf::from("src")]);
        assert_eq!(flags.language.as_deref(), Some("xml"));
        assert!(flags.verbose);
        assert!(
            matches!(cli.command, Commands::Batch(ref args) if args.manifest == PathBuf::from("manifest.json"))
        );
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["excerpt", "--format", "table", "extract", "A.cs"]);
        assert!(parsed.is_err());
    }
}
