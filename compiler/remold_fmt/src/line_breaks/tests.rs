#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use super::*;
use pretty_assertions::assert_eq;
use remold_parse::parse;

fn normalize(source: &str, use_crlf_new_lines: bool) -> String {
    NormalizeLineBreaksVisitor::new(GeneralFormatStyle { use_crlf_new_lines })
        .visit_root(parse(source).unwrap())
        .unwrap()
        .print()
}

#[test]
fn unix_line_breaks_become_windows() {
    assert_eq!(
        normalize("class A {\n    /* a\n       b */\n    int x;\n}\n", true),
        "class A {\r\n    /* a\r\n       b */\r\n    int x;\r\n}\r\n"
    );
}

#[test]
fn windows_line_breaks_become_unix() {
    assert_eq!(
        normalize("class A {\r\n    // c\r\n    int x;\r\n}", false),
        "class A {\n    // c\n    int x;\n}"
    );
}

#[test]
fn mixed_line_breaks_settle_on_one() {
    assert_eq!(normalize_line_breaks("\n\r\n\n", "\r\n"), "\r\n\r\n\r\n");
    assert_eq!(normalize_line_breaks("a\r\nb", "\n"), "a\nb");
}
