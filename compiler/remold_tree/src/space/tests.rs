use pretty_assertions::assert_eq;

use super::*;

#[test]
fn format_plain_whitespace() {
    let space = Space::format("\n    ");
    assert_eq!(space.whitespace, "\n    ");
    assert!(space.comments.is_empty());
    assert_eq!(space.indent(), "    ");
    assert!(space.has_newline());
}

#[test]
fn format_empty_is_empty() {
    assert_eq!(Space::format(""), Space::EMPTY);
    assert!(Space::EMPTY.is_empty());
    assert!(!Space::single_space().is_empty());
}

#[test]
fn format_line_comment_keeps_suffix() {
    let space = Space::format(" // note\n    ");
    assert_eq!(space.whitespace, " ");
    assert_eq!(
        space.comments,
        vec![Comment::new(CommentStyle::Line, " note", "\n    ")]
    );
    assert_eq!(space.last_whitespace(), "\n    ");
}

#[test]
fn format_line_comment_before_crlf() {
    let space = Space::format("// a\r\n");
    assert_eq!(space.comments[0].text, " a");
    assert_eq!(space.comments[0].suffix, "\r\n");
}

#[test]
fn format_block_and_javadoc() {
    let space = Space::format("\n/* one */ /** two\n * more\n */\n");
    assert_eq!(space.whitespace, "\n");
    assert_eq!(space.comments.len(), 2);
    assert_eq!(space.comments[0].style, CommentStyle::Block);
    assert_eq!(space.comments[0].text, " one ");
    assert_eq!(space.comments[0].suffix, " ");
    assert_eq!(space.comments[1].style, CommentStyle::Javadoc);
    assert_eq!(space.comments[1].text, " two\n * more\n ");
    assert!(space.comments[1].is_multiline());
}

#[test]
fn empty_block_comment_is_not_javadoc() {
    let space = Space::format("/**/");
    assert_eq!(space.comments[0].style, CommentStyle::Block);
    assert_eq!(space.comments[0].text, "");
}

#[test]
fn display_round_trips() {
    for raw in [
        "",
        "   ",
        "\n\t\t",
        " // c\n",
        "\n  /* a */\n  // b\n  ",
        "/** doc */ ",
        "\r\n// x\r\n\t",
    ] {
        assert_eq!(Space::format(raw).to_string(), raw);
    }
}

#[test]
fn indent_without_newline_is_everything() {
    assert_eq!(Space::format("   ").indent(), "   ");
    assert!(!Space::format("   ").has_newline());
}

#[test]
fn comments_decide_last_whitespace() {
    let space = Space::format("\n    // trailing");
    assert_eq!(space.last_whitespace(), "");
    assert!(!space.has_newline());
}
