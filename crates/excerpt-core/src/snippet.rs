//! Snippet value type and the text cleanup applied to matched declarations.

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;
use crate::pattern::ExtractionMode;

const ELLIPSIS: &str = "    // ...";

/// Final text handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    content: String,
}

impl Snippet {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Snippet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.content)
    }
}

/// Clean up each declaration text for `mode` and join them with one blank
/// line.
///
/// # Errors
/// Returns `ExtractError::EmptySpanSet` when `texts` is empty.
pub fn build_snippet<'a, I>(texts: I, mode: ExtractionMode) -> Result<Snippet, ExtractError>
where
    I: IntoIterator<Item = &'a str>,
{
    let parts: Vec<String> = texts
        .into_iter()
        .map(|text| cleanup(text.lines().map(str::to_string).collect(), mode).join("\n"))
        .collect();
    if parts.is_empty() {
        return Err(ExtractError::EmptySpanSet);
    }
    Ok(Snippet::new(parts.join("\n\n")))
}

fn cleanup(mut lines: Vec<String>, mode: ExtractionMode) -> Vec<String> {
    let (start, end) = match mode {
        ExtractionMode::ContentOnly => (content_start(&mut lines), content_end(&mut lines)),
        ExtractionMode::Full | ExtractionMode::BlockStructureOnly => {
            (first_non_blank(&lines), last_non_blank(&lines))
        }
    };
    if start >= end {
        return Vec::new();
    }

    let kept = &lines[start..end];
    let padding = kept
        .iter()
        .filter(|line| !is_blank(line))
        .map(|line| indentation(line))
        .min()
        .unwrap_or(usize::MAX);

    let mut out = Vec::with_capacity(kept.len());
    for line in kept {
        let line = strip_chars(line, padding);
        let brace = (mode == ExtractionMode::BlockStructureOnly)
            .then(|| line.find('{'))
            .flatten();
        if let Some(brace) = brace {
            out.push(line[..=brace].to_string());
            out.push(ELLIPSIS.to_string());
            out.push("}".to_string());
            break;
        }
        out.push(line.to_string());
    }
    out
}

/// First line to keep in content-only mode. The line holding the first `{`
/// keeps only what follows the brace and is skipped when nothing but
/// whitespace remains.
fn content_start(lines: &mut [String]) -> usize {
    let Some(index) = lines.iter().position(|line| line.contains('{')) else {
        return first_non_blank(lines);
    };
    if let Some(brace) = lines[index].find('{') {
        lines[index] = lines[index][brace + 1..].to_string();
    }
    if is_blank(&lines[index]) && lines.len() > index + 1 {
        index + 1
    } else {
        index
    }
}

/// Exclusive end in content-only mode. The line holding the last `}` is cut
/// before its first `}` and dropped when nothing but whitespace remains.
fn content_end(lines: &mut [String]) -> usize {
    let Some(index) = lines.iter().rposition(|line| line.contains('}')) else {
        return last_non_blank(lines);
    };
    if let Some(brace) = lines[index].find('}') {
        lines[index] = lines[index][..brace].trim_end().to_string();
    }
    if is_blank(&lines[index]) {
        index
    } else {
        index + 1
    }
}

fn first_non_blank(lines: &[String]) -> usize {
    lines
        .iter()
        .position(|line| !is_blank(line))
        .unwrap_or(lines.len())
}

fn last_non_blank(lines: &[String]) -> usize {
    lines.iter().rposition(|line| !is_blank(line)).map_or(0, |i| i + 1)
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn indentation(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Drop the first `count` characters; lines no longer than that become empty.
fn strip_chars(line: &str, count: usize) -> &str {
    line.char_indices().nth(count).map_or("", |(i, _)| &line[i..])
}
