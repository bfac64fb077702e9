use excerpt_config::SourcesConfig;
use excerpt_core::{ExtractedSnippet, create_extractor};

use crate::bootstrap;
use crate::cli::root_commands::ExtractArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `excerpt extract`.
pub fn handle(args: &ExtractArgs, sources: &SourcesConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snippet = extract(args, sources)?;
    match flags.format {
        OutputFormat::Raw => println!("{}", snippet.content),
        OutputFormat::Json => output(&snippet, flags.format)?,
    }
    Ok(())
}

fn extract(args: &ExtractArgs, sources: &SourcesConfig) -> anyhow::Result<ExtractedSnippet> {
    let roots = bootstrap::source_roots(sources)?;
    let mut extractor = create_extractor(&sources.language, roots);
    let snippet = extractor.extract(&args.file, &args.pattern)?;
    Ok(ExtractedSnippet {
        file: args.file.clone(),
        pattern: args.pattern.clone(),
        content: snippet.into_content(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn sources(dir: &TempDir, language: &str) -> SourcesConfig {
        SourcesConfig {
            roots: vec![dir.path().to_path_buf()],
            language: language.to_string(),
        }
    }

    fn args(file: &str, pattern: &str) -> ExtractArgs {
        ExtractArgs {
            file: file.to_string(),
            pattern: pattern.to_string(),
        }
    }

    #[test]
    fn extracts_a_member() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("A.cs"),
            "class A\n{\n    int Count { get; set; }\n}\n",
        )
        .unwrap();

        let snippet = extract(&args("A.cs", "A.Count"), &sources(&dir, "csharp")).unwrap();
        assert_eq!(snippet.content, "int Count { get; set; }");
        assert_eq!(snippet.pattern, "A.Count");
    }

    #[test]
    fn other_languages_return_the_whole_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("app.config"), "<configuration />").unwrap();

        let snippet = extract(&args("app.config", "ignored"), &sources(&dir, "xml")).unwrap();
        assert_eq!(snippet.content, "<configuration />");
    }

    #[test]
    fn extraction_errors_keep_their_message() {
        let dir = TempDir::new().unwrap();
        let err = extract(&args("Missing.cs", "A"), &sources(&dir, "csharp")).unwrap_err();
        assert_eq!(err.to_string(), "Cannot find file: Missing.cs A");
    }
}
