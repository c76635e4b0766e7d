#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use super::*;
use pretty_assertions::assert_eq;
use remold_parse::parse;

fn normalize(source: &str, use_tab_character: bool) -> String {
    let style = TabsAndIndentsStyle::default().with_use_tab_character(use_tab_character);
    NormalizeTabsOrSpacesVisitor::new(style)
        .visit_root(parse(source).unwrap())
        .unwrap()
        .print()
}

#[test]
fn tabs_expand_to_spaces() {
    assert_eq!(
        normalize("class A {\n\tint x;\n\t  int y;\n}", false),
        "class A {\n    int x;\n      int y;\n}"
    );
}

#[test]
fn spaces_fold_into_tabs() {
    assert_eq!(
        normalize("class A {\n    int x;\n      int y;\n}", true),
        "class A {\n\tint x;\n\t  int y;\n}"
    );
}

#[test]
fn comment_bodies_follow_the_same_rule() {
    assert_eq!(
        normalize("class A {\n\t/*\n\t * doc\n\t */\n\tint x;\n}", false),
        "class A {\n    /*\n     * doc\n     */\n    int x;\n}"
    );
}

#[test]
fn spaces_inside_a_line_are_kept() {
    assert_eq!(
        normalize("class A {\n\tint x =\t1;\n}", false),
        "class A {\n    int x =\t1;\n}"
    );
}
