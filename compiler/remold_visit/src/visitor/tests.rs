#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use super::*;
use crate::{CursorValue, VisitError};
use pretty_assertions::assert_eq;
use remold_parse::{parse, parse_expression};

struct Identity;

impl JavaVisitor for Identity {}

/// Renames `from` to `to` wherever it appears as an identifier.
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

/// Upper-cases every identifier, stopping after `stop`.
struct Shout {
    stop: Option<TreeId>,
}

impl JavaVisitor for Shout {
    fn stop_after(&self) -> Option<TreeId> {
        self.stop
    }

    fn visit_identifier(&mut self, mut tree: Identifier, cursor: &Cursor) -> VisitResult<J> {
        tree.simple_name = tree.simple_name.to_uppercase();
        walk_identifier(self, tree, cursor)
    }
}

fn find_identifier(tree: &J, name: &str) -> Option<TreeId> {
    if let J::Identifier(ident) = tree {
        if ident.simple_name == name {
            return Some(ident.id);
        }
    }
    let mut found = None;
    tree.for_each_child(&mut |child| {
        if found.is_none() {
            found = find_identifier(child, name);
        }
    });
    found
}

#[test]
fn identity_rebuilds_an_equal_tree() {
    let source = "package a;\nimport b.C;\nclass D<T> extends E implements F {\n    int x = 1, y;\n    void m(int a) throws G {\n        for (int i = 0; i < a; i++) { x += i; }\n        try { f(); } catch (A | B e) { } finally { }\n        switch (x) { case 1: break; default: y = x > 0 ? 1 : -1; }\n        Runnable r = () -> g(new int[] { 1, 2 });\n    }\n}\n";
    let tree = parse(source).unwrap();
    let visited = Identity.visit_root(tree.clone()).unwrap();
    assert_eq!(visited, tree);
    assert_eq!(visited.print(), source);
}

#[test]
fn rename_changes_only_matching_identifiers() {
    let tree = parse("class A { int a = b(a); }").unwrap();
    let renamed = Rename { from: "a", to: "z" }.visit_root(tree).unwrap();
    assert_eq!(renamed.print(), "class A { int z = b(z); }");
}

#[test]
fn spaces_are_visited_in_source_order_with_locations() {
    struct Locations(Vec<SpaceLocation>);

    impl JavaVisitor for Locations {
        fn visit_space(
            &mut self,
            space: Space,
            loc: SpaceLocation,
            _cursor: &Cursor,
        ) -> VisitResult<Space> {
            self.0.push(loc);
            Ok(space)
        }
    }

    let mut locations = Locations(Vec::new());
    locations
        .visit_root(parse_expression("a + b").unwrap())
        .unwrap();
    assert_eq!(
        locations.0,
        vec![
            SpaceLocation::BinaryPrefix,
            SpaceLocation::IdentifierPrefix,
            SpaceLocation::BinaryOperator,
            SpaceLocation::IdentifierPrefix,
        ]
    );
}

#[test]
fn postfix_operator_space_follows_its_operand() {
    struct Locations(Vec<SpaceLocation>);

    impl JavaVisitor for Locations {
        fn visit_space(
            &mut self,
            space: Space,
            loc: SpaceLocation,
            _cursor: &Cursor,
        ) -> VisitResult<Space> {
            self.0.push(loc);
            Ok(space)
        }
    }

    let mut locations = Locations(Vec::new());
    locations.visit_root(parse_expression("i++").unwrap()).unwrap();
    assert_eq!(
        locations.0,
        vec![
            SpaceLocation::UnaryPrefix,
            SpaceLocation::IdentifierPrefix,
            SpaceLocation::UnaryOperator,
        ]
    );
}

#[test]
fn pre_and_post_visit_wrap_each_node() {
    struct Order(Vec<String>);

    impl JavaVisitor for Order {
        fn pre_visit(&mut self, tree: J, _cursor: &Cursor) -> VisitResult<J> {
            self.0.push(format!("pre {}", tree.variant_name()));
            Ok(tree)
        }

        fn post_visit(&mut self, tree: J, _cursor: &Cursor) -> VisitResult<J> {
            self.0.push(format!("post {}", tree.variant_name()));
            Ok(tree)
        }
    }

    let mut order = Order(Vec::new());
    order.visit_root(parse_expression("x = 1").unwrap()).unwrap();
    assert_eq!(
        order.0,
        vec![
            "pre Assignment",
            "pre Identifier",
            "post Identifier",
            "pre Literal",
            "post Literal",
            "post Assignment",
        ]
    );
}

#[test]
fn cursor_frames_record_padding_and_containers() {
    struct Frames(Vec<String>);

    impl JavaVisitor for Frames {
        fn visit_identifier(&mut self, tree: Identifier, cursor: &Cursor) -> VisitResult<J> {
            if tree.simple_name == "x" {
                self.0 = cursor
                    .path()
                    .map(|frame| match frame.value() {
                        CursorValue::Root => "root".to_string(),
                        CursorValue::Tree(tree) => tree.variant_name().to_string(),
                        CursorValue::RightPadded { location, .. } => format!("{location:?}"),
                        CursorValue::LeftPadded { location } => format!("{location:?}"),
                        CursorValue::Container { location, .. } => format!("{location:?}"),
                    })
                    .collect();
            }
            walk_identifier(self, tree, cursor)
        }
    }

    let mut frames = Frames(Vec::new());
    frames.visit_root(parse_expression("f(x)").unwrap()).unwrap();
    assert_eq!(
        frames.0,
        vec![
            "Identifier",
            "MethodInvocationArgument",
            "MethodInvocationArguments",
            "MethodInvocation",
            "root",
        ]
    );
}

#[test]
fn stop_after_leaves_the_rest_untouched() {
    let tree = parse("class A { void m() { a(); b(); } }").unwrap();
    let stop = find_identifier(&tree, "a");
    let shouted = Shout { stop }.visit_root(tree).unwrap();
    assert_eq!(shouted.print(), "class A { void M() { A(); b(); } }");
}

#[test]
fn stop_after_without_compilation_unit_stops_at_the_root() {
    let tree = parse_expression("f(a, b)").unwrap();
    let stop = find_identifier(&tree, "a");
    let shouted = Shout { stop }.visit_root(tree).unwrap();
    assert_eq!(shouted.print(), "F(A, b)");
}

#[test]
fn errors_propagate_and_end_the_traversal() {
    struct Fail {
        seen: Vec<String>,
    }

    impl JavaVisitor for Fail {
        fn visit_identifier(&mut self, tree: Identifier, cursor: &Cursor) -> VisitResult<J> {
            self.seen.push(tree.simple_name.clone());
            if tree.simple_name == "boom" {
                return Err(VisitError::Custom("boom".to_string()));
            }
            walk_identifier(self, tree, cursor)
        }
    }

    let mut fail = Fail { seen: Vec::new() };
    let result = fail.visit_root(parse_expression("f(a, boom, c)").unwrap());
    assert_eq!(result, Err(VisitError::Custom("boom".to_string())));
    assert_eq!(fail.seen, vec!["f", "a", "boom"]);
}

#[test]
fn passes_chain_on_forked_cursors() {
    struct Mark;

    impl JavaVisitor for Mark {
        fn visit_identifier(&mut self, tree: Identifier, cursor: &Cursor) -> VisitResult<J> {
            cursor.root_cursor().put_message("seen", true);
            walk_identifier(self, tree, cursor)
        }
    }

    struct Check(bool);

    impl JavaVisitor for Check {
        fn visit_identifier(&mut self, tree: Identifier, cursor: &Cursor) -> VisitResult<J> {
            self.0 |= cursor.nearest_message::<bool>("seen").is_some();
            walk_identifier(self, tree, cursor)
        }
    }

    let root = Cursor::root();
    let mut first = Rename { from: "a", to: "b" };
    let mut mark = Mark;
    let mut check = Check(false);
    let mut second = Rename { from: "b", to: "c" };
    let result = run_passes(
        parse_expression("a").unwrap(),
        &mut [&mut first, &mut mark, &mut check, &mut second],
        &root,
    )
    .unwrap();

    assert_eq!(result.print(), "c");
    assert!(!check.0);
    assert_eq!(root.get_message::<bool>("seen"), None);
}
