//! Content-only (`-`) and block-structure-only (`=`) extraction over
//! `fixtures/Options.cs`.

use std::path::PathBuf;

use excerpt_core::{CSharpExtractor, SnippetExtractor, SourceRoots};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn expected(name: &str) -> String {
    let text = std::fs::read_to_string(fixtures().join("expected").join(name))
        .unwrap_or_else(|e| panic!("missing expected file {name}: {e}"));
    text.strip_suffix('\n').unwrap_or(&text).to_string()
}

fn extract(pattern: &str) -> String {
    let roots = SourceRoots::new([fixtures()]).expect("fixture root");
    CSharpExtractor::new(roots)
        .extract("Options.cs", pattern)
        .unwrap()
        .into_content()
}

#[rstest]
#[case("=Options", "BlockOnlyClass.txt")]
#[case("=Demo.Options.Method", "BlockOnlyMethod.txt")]
#[case("=Options.Method", "BlockOnlyMethod.txt")]
#[case("=EmptyMethod", "BlockOnlyEmptyMethod.txt")]
#[case("=Options.Property", "BlockOnlyProperty.txt")]
#[case("=Options.Event", "BlockOnlyEvent.txt")]
#[case("=Options.Event.add", "BlockOnlyEventadd.txt")]
#[case("=Event.add", "BlockOnlyEventadd.txt")]
#[case("=add", "BlockOnlyEventadd.txt")]
fn block_structure_only(#[case] pattern: &str, #[case] expected_file: &str) {
    assert_eq!(extract(pattern), expected(expected_file));
}

#[rstest]
#[case("-Options", "ContentOnlyClass.txt")]
#[case("-Options.Method", "ContentOnlyMethod.txt")]
#[case("-Options.Property", "ContentOnlyProperty.txt")]
#[case("-Options.Event", "ContentOnlyEvent.txt")]
#[case("-Options.Event.add", "ContentOnlyEventadd.txt")]
#[case("-Event.add", "ContentOnlyEventadd.txt")]
#[case("-add", "ContentOnlyEventadd.txt")]
#[case("-get", "ContentOnlyGetter.txt")]
fn content_only(#[case] pattern: &str, #[case] expected_file: &str) {
    assert_eq!(extract(pattern), expected(expected_file));
}

#[rstest]
#[case("-remove")]
#[case("-EmptyMethod")]
#[case("-Options.Event.remove")]
fn content_only_of_empty_body_is_empty(#[case] pattern: &str) {
    assert_eq!(extract(pattern), expected("Empty.txt"));
}

#[test]
fn full_mode_keeps_the_whole_declaration() {
    assert_eq!(
        extract("Options.EmptyMethod"),
        "public void EmptyMethod()\n{\n}"
    );
}
