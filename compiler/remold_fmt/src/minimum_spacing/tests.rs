#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use super::*;
use pretty_assertions::assert_eq;
use remold_parse::parse;
use remold_tree::SpaceLocation;

/// Empties every space, as a tree built without formatting would have.
struct Squash;

impl JavaVisitor for Squash {
    fn visit_space(
        &mut self,
        _space: Space,
        _loc: SpaceLocation,
        _cursor: &Cursor,
    ) -> VisitResult<Space> {
        Ok(Space::EMPTY)
    }
}

fn respace(source: &str) -> String {
    let squashed = Squash.visit_root(parse(source).unwrap()).unwrap();
    MinimumViableSpacingVisitor::new()
        .visit_root(squashed)
        .unwrap()
        .print()
}

#[test]
fn field_modifiers_and_names_are_separated() {
    assert_eq!(
        respace("class A { public static final int x = 1; }"),
        "class A{public static final int x=1;}"
    );
}

#[test]
fn method_headers_are_separated() {
    assert_eq!(
        respace("class A { public <T> T m() throws E, F { return x; } }"),
        "class A{public <T> T m() throws E,F{return x;}}"
    );
}

#[test]
fn supertypes_are_separated() {
    assert_eq!(
        respace("class A extends B implements C, D {}"),
        "class A extends B implements C,D{}"
    );
}

#[test]
fn package_and_imports_are_separated() {
    assert_eq!(
        respace("package a.b; import static a.B.c; import d.E; class A {}"),
        "package a.b;import static a.B.c;import d.E;class A{}"
    );
}

#[test]
fn keywords_before_expressions() {
    assert_eq!(
        respace("class A { void m() { Object o = new Foo(); throw new E(); } }"),
        "class A{void m(){Object o=new Foo();throw new E();}}"
    );
}

#[test]
fn parenthesized_return_needs_no_space() {
    assert_eq!(
        respace("class A { int m() { return (x); } }"),
        "class A{int m(){return(x);}}"
    );
}

#[test]
fn existing_spacing_is_kept() {
    let source = "class A {\n    public  static int x;\n}";
    let tree = parse(source).unwrap();
    let formatted = MinimumViableSpacingVisitor::new().visit_root(tree).unwrap();
    assert_eq!(formatted.print(), source);
}
