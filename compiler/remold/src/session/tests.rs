#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use super::*;
use crate::Error;
use pretty_assertions::assert_eq;
use remold_fmt::TabsAndIndentsStyle;
use remold_tree::Identifier;
use remold_types::TypeRegistry;
use remold_visit::{walk_identifier, VisitError, VisitResult};

struct Rename {
    from: &'static str,
    to: &'static str,
}

impl JavaVisitor for Rename {
    fn visit_identifier(&mut self, mut tree: Identifier, cursor: &Cursor) -> VisitResult<J> {
        if tree.simple_name == self.from {
            tree.simple_name = self.to.to_string();
        }
        walk_identifier(self, tree, cursor)
    }
}

struct Reject;

impl JavaVisitor for Reject {
    fn visit_identifier(&mut self, tree: Identifier, _cursor: &Cursor) -> VisitResult<J> {
        Err(VisitError::Custom(format!("`{}` is not allowed", tree.simple_name)))
    }
}

#[test]
fn apply_rewrites_and_keeps_formatting() {
    let session = Session::new();
    let tree = session.parse("class A {\n  void m() { foo( 1 ); }\n}").unwrap();
    let renamed = session
        .apply(tree, &mut Rename { from: "foo", to: "bar" })
        .unwrap();
    assert_eq!(renamed.print(), "class A {\n  void m() { bar( 1 ); }\n}");
}

#[test]
fn visitor_errors_surface_unchanged() {
    let session = Session::new();
    let tree = session.parse("class A {}").unwrap();
    let Err(Error::Visit(error)) = session.apply(tree, &mut Reject) else {
        panic!("expected a visit error");
    };
    assert_eq!(error, VisitError::Custom("`A` is not allowed".to_string()));
}

#[test]
fn syntax_errors_are_parse_errors() {
    let session = Session::new();
    assert!(matches!(session.parse("class {"), Err(Error::Parse(_))));
    assert!(matches!(
        session.format_source("class A { void m( }"),
        Err(Error::Parse(_))
    ));
}

#[test]
fn format_source_uses_session_styles() {
    let session = Session::new()
        .with_styles(Styles::default().with_tabs_and_indents(
            TabsAndIndentsStyle::default().with_use_tab_character(true),
        ));
    assert_eq!(
        session.format_source("class A {\nint x;\n}").unwrap(),
        "class A {\n\tint x;\n}"
    );
}

#[test]
fn parallel_formatting_keeps_input_order() {
    let session = Session::new();
    let sources: Vec<String> = (0..16)
        .map(|i| format!("class A{i}{{\nint x{i};\n}}"))
        .chain(std::iter::once("class {".to_string()))
        .collect();

    let results = session.format_sources(&sources);
    assert_eq!(results.len(), 17);
    for (i, result) in results[..16].iter().enumerate() {
        assert_eq!(
            result.as_ref().unwrap(),
            &format!("class A{i} {{\n    int x{i};\n}}")
        );
    }
    assert!(matches!(results[16], Err(Error::Parse(_))));
}

#[test]
fn clones_share_the_registry() {
    let registry = SharedTypeRegistry::new(TypeRegistry::new());
    let session = Session::new().with_registry(registry.clone());
    let other = session.clone();
    assert!(other.registry().same_registry(&registry));

    let before = registry.generation();
    registry.build_class("com.example.Widget");
    let populated = registry.len();

    other.clear_caches();
    assert_eq!(session.registry().generation(), before + 1);
    assert!(session.registry().len() < populated);
}
