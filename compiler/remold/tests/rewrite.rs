//! Parse, rewrite, reformat, print.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::sync::Arc;

use pretty_assertions::assert_eq;
use remold::matcher::MethodMatcher;
use remold::tree::{Block, MethodInvocation, RightPadded, J};
use remold::types::{MethodSpec, Signature, TypeId, TypeRegistry};
use remold::visit::{walk_block, walk_method_invocation, Cursor, JavaVisitor, VisitResult};
use remold::Session;

/// Appends `log();` to every method body, with no whitespace of its own.
struct AppendLog;

impl JavaVisitor for AppendLog {
    fn visit_block(&mut self, mut tree: Block, cursor: &Cursor) -> VisitResult<J> {
        let parent = cursor.parent_tree_cursor().and_then(Cursor::tree);
        if matches!(parent, Some(J::MethodDeclaration(_))) {
            let log = remold::parse::parse_statement("log();").unwrap();
            tree.statements.push(RightPadded::build(log));
        }
        walk_block(self, tree, cursor)
    }
}

/// Stands in for type attribution: every `add` call resolves to `method`.
struct Attribute {
    method: TypeId,
}

impl JavaVisitor for Attribute {
    fn visit_method_invocation(&mut self, mut tree: MethodInvocation, cursor: &Cursor) -> VisitResult<J> {
        if tree.simple_name() == "add" {
            tree.method_type = Some(self.method);
        }
        walk_method_invocation(self, tree, cursor)
    }
}

struct RenameMatching<'a> {
    matcher: MethodMatcher,
    registry: &'a TypeRegistry,
    to: &'static str,
}

impl JavaVisitor for RenameMatching<'_> {
    fn visit_method_invocation(&mut self, mut tree: MethodInvocation, cursor: &Cursor) -> VisitResult<J> {
        if self.matcher.matches_invocation(self.registry, &tree) {
            if let J::Identifier(name) = &mut tree.name {
                Arc::make_mut(name).simple_name = self.to.to_string();
            }
        }
        walk_method_invocation(self, tree, cursor)
    }
}

#[test]
fn inserted_statements_are_formatted_into_place() {
    let session = Session::new();
    let tree = session
        .parse("class A {\n    void m() {\n        foo();\n    }\n}")
        .unwrap();

    let rewritten = session.apply(tree, &mut AppendLog).unwrap();
    assert_eq!(
        rewritten.print(),
        "class A {\n    void m() {\n        foo();log();\n    }\n}"
    );

    let formatted = session.auto_format(rewritten, None).unwrap();
    assert_eq!(
        formatted.print(),
        "class A {\n    void m() {\n        foo();\n        log();\n    }\n}"
    );
}

#[test]
fn matched_invocations_are_renamed() {
    let session = Session::new();
    let registry = session.registry();
    let list = registry.build_class("java.util.List");
    let add = registry.build_method(MethodSpec {
        resolved_signature: Some(Signature::new(Some(TypeId::BOOLEAN), vec![TypeId::OBJECT])),
        ..MethodSpec::new(list, "add")
    });

    let tree = session
        .parse("class A {\nvoid m() {\nlist.add(x);\nset.remove(y);\n}\n}")
        .unwrap();
    let tree = session.apply(tree, &mut Attribute { method: add }).unwrap();
    let mut rename = RenameMatching {
        matcher: MethodMatcher::new("java.util.List add(..)").unwrap(),
        registry,
        to: "append",
    };
    let tree = session.apply(tree, &mut rename).unwrap();

    assert_eq!(
        session.auto_format(tree, None).unwrap().print(),
        "class A {\n    void m() {\n        list.append(x);\n        set.remove(y);\n    }\n}"
    );
}

#[test]
fn bad_patterns_convert_into_session_errors() {
    let error: remold::Error = MethodMatcher::new("java.util.List").unwrap_err().into();
    assert!(matches!(
        error,
        remold::Error::Matcher(remold::matcher::MatcherError::MissingMethodName)
    ));
}
