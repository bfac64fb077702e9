//! Parameter modifiers, `params` arrays, verbatim identifiers and very long
//! expressions in extracted files.

use std::path::PathBuf;

use excerpt_core::{CSharpExtractor, ExtractError, SnippetExtractor, SourceRoots};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn extract(pattern: &str) -> Result<String, ExtractError> {
    let mut extractor = CSharpExtractor::new(SourceRoots::new([fixtures()]).expect("fixture root"));
    extractor
        .extract("Parameters.cs", pattern)
        .map(excerpt_core::Snippet::into_content)
}

const WRITE_PARAMS: &str = "public void Write(string format, params object[] args)\n{\n    Flush(string.Format(format, args));\n}";
const WRITE_ONE: &str = "public void Write(string format)\n{\n    Flush(format);\n}";

#[rstest]
#[case("Write(string, object[])", WRITE_PARAMS)]
#[case("Io.Writer.Write(string,object[])", WRITE_PARAMS)]
#[case("Write(string)", WRITE_ONE)]
#[case(
    "TryRead(int, string, long)",
    "public bool TryRead(ref int position, out string value, in long limit)\n{\n    value = null;\n    return position < limit;\n}"
)]
#[case("@lock(int)", "public void @lock(int @class) { }")]
#[case("lock", "public void @lock(int @class) { }")]
fn parameter_lists_select_the_declared_overload(#[case] pattern: &str, #[case] expected: &str) {
    assert_eq!(extract(pattern).unwrap(), expected);
}

#[test]
fn bare_name_aggregates_both_overloads() {
    assert_eq!(
        extract("Write").unwrap(),
        format!("{WRITE_PARAMS}\n\n{WRITE_ONE}")
    );
}

#[rstest]
#[case("Write(object[])")]
#[case("Write(string, object)")]
#[case("TryRead(int, string)")]
fn parameter_count_must_match(#[case] pattern: &str) {
    let err = extract(pattern).unwrap_err();
    assert!(matches!(err, ExtractError::MemberNotFound { .. }), "{err}");
}

#[test]
fn long_expression_does_not_abort_extraction() {
    let dir = TempDir::new().unwrap();
    let sum = vec!["1"; 20_000].join(" + ");
    std::fs::write(
        dir.path().join("Gen.cs"),
        format!("class Gen\n{{\n    int Sum() {{ return {sum}; }}\n    int Other() {{ return 2; }}\n}}\n"),
    )
    .unwrap();

    let mut extractor = CSharpExtractor::new(SourceRoots::new([dir.path()]).unwrap());
    let snippet = extractor.extract("Gen.cs", "Other").unwrap();
    assert_eq!(snippet.content(), "int Other() { return 2; }");
}
