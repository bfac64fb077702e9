//! Member-pattern tokenizer.
//!
//! A pattern is an optional mode sigil followed by dot-separated chunks:
//!
//! ```text
//! -NS.Widget{T}.Render(string, List{int})
//! =Widget.[int, string].get
//! Widget.<Constructor>(string)
//! ```
//!
//! Groups (`(...)`, `[...]`, `{...}`, `<...>`) are atomic, so dots inside
//! parameter types never split a chunk.

use std::str::FromStr;

use excerpt_parser::AccessorKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How matched declaration text is cut down before it is returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    /// The whole declaration.
    #[default]
    Full,
    /// Only the text between the outermost braces (`-` sigil).
    ContentOnly,
    /// The signature down to the opening brace, body elided (`=` sigil).
    BlockStructureOnly,
}

impl ExtractionMode {
    const fn from_sigil(sigil: char) -> Option<Self> {
        match sigil {
            '-' => Some(Self::ContentOnly),
            '=' => Some(Self::BlockStructureOnly),
            _ => None,
        }
    }
}

/// One typed step of a member pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Chunk {
    /// Plain name; matches any generic arity.
    Identifier(String),
    /// `Name{P1, P2}`; matches by name and placeholder count.
    Generic { name: String, arity: usize },
    /// `(T1, T2)`; exact ordered parameter types.
    Parameters(Vec<String>),
    /// `[T1, T2]`; exact ordered indexer parameter types.
    Indexer(Vec<String>),
    Constructor,
    Destructor,
    Accessor(AccessorKind),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("mode sigil is not followed by a member")]
    MissingMember,

    #[error("empty segment")]
    EmptySegment,

    #[error("unbalanced '{0}'")]
    Unbalanced(char),

    #[error("unexpected '{found}' in '{segment}'")]
    Unexpected { segment: String, found: char },

    #[error("unknown marker '{0}'")]
    UnknownMarker(String),

    #[error("empty type in '{0}'")]
    EmptyType(String),
}

/// A parsed member pattern: ordered chunks plus the extraction mode.
///
/// Zero chunks means the whole file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberPattern {
    chunks: Vec<Chunk>,
    mode: ExtractionMode,
}

impl MemberPattern {
    /// Tokenize a pattern.
    ///
    /// # Errors
    /// Returns a [`PatternError`] for unbalanced groups, empty segments or
    /// characters that cannot start a chunk.
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Self::default());
        }

        let (mode, body) = text
            .chars()
            .next()
            .and_then(ExtractionMode::from_sigil)
            .map_or((ExtractionMode::Full, text), |mode| {
                (mode, text[1..].trim_start())
            });
        if body.is_empty() {
            return Err(PatternError::MissingMember);
        }

        let mut chunks = Vec::new();
        for segment in split_segments(body)? {
            parse_segment(segment, &mut chunks)?;
        }
        Ok(Self { chunks, mode })
    }

    #[must_use]
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    #[must_use]
    pub const fn mode(&self) -> ExtractionMode {
        self.mode
    }

    #[must_use]
    pub fn is_whole_file(&self) -> bool {
        self.chunks.is_empty()
    }
}

impl FromStr for MemberPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Remove whitespace and read cref-style `{}` as `<>`.
#[must_use]
pub fn normalize_type(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '{' => '<',
            '}' => '>',
            other => other,
        })
        .collect()
}

const fn closing(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        _ => '>',
    }
}

fn split_segments(body: &str) -> Result<Vec<&str>, PatternError> {
    let mut segments = Vec::new();
    let mut open = Vec::new();
    let mut start = 0;

    for (i, c) in body.char_indices() {
        match c {
            '(' | '[' | '{' | '<' => open.push(c),
            ')' | ']' | '}' | '>' => {
                if open.pop().map(closing) != Some(c) {
                    return Err(PatternError::Unbalanced(c));
                }
            }
            '.' if open.is_empty() => {
                segments.push(non_empty(&body[start..i])?);
                start = i + 1;
            }
            _ => {}
        }
    }

    if let Some(unclosed) = open.pop() {
        return Err(PatternError::Unbalanced(unclosed));
    }
    segments.push(non_empty(&body[start..])?);
    Ok(segments)
}

fn non_empty(raw: &str) -> Result<&str, PatternError> {
    let segment = raw.trim();
    if segment.is_empty() {
        Err(PatternError::EmptySegment)
    } else {
        Ok(segment)
    }
}

fn parse_segment(segment: &str, chunks: &mut Vec<Chunk>) -> Result<(), PatternError> {
    if let Some(kind) = AccessorKind::from_keyword(segment) {
        chunks.push(Chunk::Accessor(kind));
        return Ok(());
    }

    match segment.chars().next() {
        Some('<') => {
            let (inner, rest) = take_group(segment);
            let marker = match inner.trim() {
                "Constructor" => Chunk::Constructor,
                "Destructor" => Chunk::Destructor,
                _ => return Err(PatternError::UnknownMarker(format!("<{inner}>"))),
            };
            chunks.push(marker);
            push_parameters(rest, segment, chunks)
        }
        Some('(') => push_parameters(segment, segment, chunks),
        Some('[') => {
            let (inner, rest) = take_group(segment);
            expect_end(rest, segment)?;
            chunks.push(Chunk::Indexer(type_list(inner, segment)?));
            Ok(())
        }
        _ => {
            let len = identifier_len(segment);
            if len == 0 {
                return Err(unexpected(segment, segment));
            }
            let (name, rest) = segment.split_at(len);
            // `@name` is the verbatim spelling of `name`.
            let name = name.strip_prefix('@').unwrap_or(name);
            if rest.starts_with(['{', '<']) {
                let (inner, rest) = take_group(rest);
                chunks.push(Chunk::Generic {
                    name: name.to_string(),
                    arity: type_list(inner, segment)?.len(),
                });
                push_parameters(rest, segment, chunks)
            } else {
                chunks.push(Chunk::Identifier(name.to_string()));
                push_parameters(rest, segment, chunks)
            }
        }
    }
}

/// Push an optional trailing `(...)` group, which must end the segment.
fn push_parameters(rest: &str, segment: &str, chunks: &mut Vec<Chunk>) -> Result<(), PatternError> {
    if rest.is_empty() {
        return Ok(());
    }
    if !rest.starts_with('(') {
        return Err(unexpected(segment, rest));
    }
    let (inner, tail) = take_group(rest);
    expect_end(tail, segment)?;
    chunks.push(Chunk::Parameters(type_list(inner, segment)?));
    Ok(())
}

fn expect_end(rest: &str, segment: &str) -> Result<(), PatternError> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(unexpected(segment, rest))
    }
}

fn unexpected(segment: &str, at: &str) -> PatternError {
    PatternError::Unexpected {
        segment: segment.to_string(),
        found: at.chars().next().unwrap_or(' '),
    }
}

/// Split a leading balanced group into its inner text and what follows it.
fn take_group(text: &str) -> (&str, &str) {
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '(' | '[' | '{' | '<' => depth += 1,
            ')' | ']' | '}' | '>' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return (&text[1..i], &text[i + 1..]);
                }
            }
            _ => {}
        }
    }
    (text.get(1..).unwrap_or_default(), "")
}

fn identifier_len(segment: &str) -> usize {
    let body = segment.strip_prefix('@').unwrap_or(segment);
    let len = body
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(body.len());
    if len == 0 {
        0
    } else {
        len + (segment.len() - body.len())
    }
}

fn type_list(inner: &str, segment: &str) -> Result<Vec<String>, PatternError> {
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in inner.char_indices() {
        match c {
            '(' | '[' | '{' | '<' => depth += 1,
            ')' | ']' | '}' | '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                items.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(&inner[start..]);

    items
        .into_iter()
        .map(|item| {
            let ty = normalize_type(item);
            if ty.is_empty() {
                Err(PatternError::EmptyType(segment.to_string()))
            } else {
                Ok(ty)
            }
        })
        .collect()
}
