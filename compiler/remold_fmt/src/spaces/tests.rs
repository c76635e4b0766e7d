#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use super::*;
use crate::style::{Other, Within};
use pretty_assertions::assert_eq;
use remold_parse::{parse, parse_expression, parse_statement};

fn space(tree: J) -> String {
    SpacesVisitor::new(SpacesStyle::default())
        .visit_root(tree)
        .unwrap()
        .print()
}

#[test]
fn control_flow_gets_the_usual_spaces() {
    let tree = parse("class A{void m(){if(x){foo(a,b);}}}").unwrap();
    assert_eq!(space(tree), "class A {void m() {if (x) {foo(a, b);}}}");
}

#[test]
fn binary_operators_and_initializers_are_spaced() {
    let tree = parse("class A{int x=a+b*c;}").unwrap();
    assert_eq!(space(tree), "class A {int x = a + b * c;}");
}

#[test]
fn unwanted_single_spaces_are_removed() {
    let tree = parse_statement("foo( a , b );").unwrap();
    assert_eq!(space(tree), "foo(a, b)");
}

#[test]
fn wider_spacing_is_left_alone() {
    let tree = parse_statement("foo(  a,b);").unwrap();
    assert_eq!(space(tree), "foo(  a, b)");
}

#[test]
fn for_header_separators() {
    let tree = parse_statement("for(int i=0;i < n;i++){}").unwrap();
    assert_eq!(space(tree), "for (int i = 0; i < n; i++) {}");
}

#[test]
fn empty_for_sections_follow_their_pads() {
    assert_eq!(
        space(parse_statement("for(;;){}").unwrap()),
        "for (; ; ) {}"
    );

    let padded = SpacesVisitor::new(SpacesStyle::default())
        .with_empty_for_initializer_pad(Some(EmptyForInitializerPadStyle { space: true }))
        .with_empty_for_iterator_pad(Some(EmptyForIteratorPadStyle { space: false }))
        .visit_root(parse_statement("for(;;){}").unwrap())
        .unwrap();
    assert_eq!(padded.print(), "for ( ; ;) {}");
}

#[test]
fn ternary_and_lambda() {
    assert_eq!(space(parse_expression("c?a:b").unwrap()), "c ? a : b");
    assert_eq!(
        space(parse_expression("(a,b)->a+b").unwrap()),
        "(a, b) -> a + b"
    );
}

#[test]
fn type_cast_is_followed_by_a_space() {
    assert_eq!(space(parse_expression("(int)x").unwrap()), "(int) x");
}

#[test]
fn within_parentheses_when_asked() {
    let style = SpacesStyle::default()
        .with_within(Within {
            method_call_parentheses: true,
            if_parentheses: true,
            ..Within::default()
        })
        .with_other(Other {
            after_comma: false,
            ..Other::default()
        });
    let formatted = SpacesVisitor::new(style)
        .visit_root(parse_statement("if (x) foo(a, b);").unwrap())
        .unwrap();
    assert_eq!(formatted.print(), "if ( x ) foo( a,b );");
}

#[test]
fn empty_bodies_follow_code_braces() {
    let style = SpacesStyle::default().with_within(Within {
        code_braces: true,
        ..Within::default()
    });
    let formatted = SpacesVisitor::new(style)
        .visit_root(parse("class A {}").unwrap())
        .unwrap();
    assert_eq!(formatted.print(), "class A { }");
}

#[test]
fn else_and_catch_keywords() {
    assert_eq!(
        space(parse_statement("if(x){}else{}").unwrap()),
        "if (x) {} else {}"
    );
    assert_eq!(
        space(parse_statement("try{}catch(E e){}finally{}").unwrap()),
        "try {} catch (E e) {} finally {}"
    );
}
