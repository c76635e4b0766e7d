#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use super::*;
use pretty_assertions::assert_eq;
use remold_parse::parse;

fn strip(source: &str) -> String {
    RemoveTrailingWhitespaceVisitor::new()
        .visit_root(parse(source).unwrap())
        .unwrap()
        .print()
}

#[test]
fn line_ends_lose_their_spaces() {
    assert_eq!(
        strip("class A {  \n    int x;\t \n}"),
        "class A {\n    int x;\n}"
    );
}

#[test]
fn comment_suffixes_are_stripped_too() {
    assert_eq!(
        strip("class A {\n    // note   \n    int x; /* c */  \n}"),
        "class A {\n    // note\n    int x; /* c */\n}"
    );
}

#[test]
fn end_of_file_keeps_only_line_breaks() {
    assert_eq!(strip("class A {}\n  \n   "), "class A {}\n\n");
}

#[test]
fn carriage_returns_survive() {
    assert_eq!(strip("class A { \r\n}"), "class A {\r\n}");
}

#[test]
fn indentation_is_not_trailing() {
    assert_eq!(strip_line_ends("  \n    "), "\n    ");
    assert_eq!(strip_line_ends(" "), " ");
}
