#![allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]

use super::*;
use remold_tree::{Block, Identifier, Space};

fn block() -> J {
    Block::build(Space::EMPTY, Vec::new(), Space::EMPTY).into()
}

fn ident(name: &str) -> J {
    Identifier::build(Space::EMPTY, name).into()
}

#[test]
fn messages_are_scoped_to_their_frame() {
    let root = Cursor::root();
    let outer = root.push_tree(&block());
    outer.put_message("indent", 4usize);
    let inner = outer.push_tree(&ident("a"));

    assert_eq!(inner.get_message::<usize>("indent"), None);
    assert_eq!(inner.nearest_message::<usize>("indent"), Some(4));

    inner.put_message("indent", 8usize);
    assert_eq!(inner.nearest_message::<usize>("indent"), Some(8));
    assert_eq!(outer.get_message::<usize>("indent"), Some(4));
}

#[test]
fn message_of_another_type_reads_as_none() {
    let cursor = Cursor::root();
    cursor.put_message("flag", true);
    assert_eq!(cursor.get_message::<usize>("flag"), None);
    assert_eq!(cursor.poll_message::<usize>("flag"), None);
    assert_eq!(cursor.get_message::<bool>("flag"), Some(true));
}

#[test]
fn poll_removes_the_nearest_message_once() {
    let root = Cursor::root();
    root.put_message("after", true);
    let child = root.push_tree(&ident("x"));

    assert_eq!(child.poll_nearest_message::<bool>("after"), Some(true));
    assert_eq!(child.poll_nearest_message::<bool>("after"), None);
    assert_eq!(root.get_message::<bool>("after"), None);
}

#[test]
fn fork_keeps_values_and_drops_messages() {
    let root = Cursor::root();
    let outer = root.push_tree(&block());
    outer.put_message("indent", 4usize);
    let inner = outer.push_tree(&ident("a"));

    let forked = inner.fork();
    assert_eq!(forked.value(), inner.value());
    assert_eq!(forked.depth(), inner.depth());
    assert_eq!(forked.nearest_message::<usize>("indent"), None);

    forked.parent().unwrap().put_message("indent", 2usize);
    assert_eq!(outer.get_message::<usize>("indent"), Some(4));
}

#[test]
fn first_enclosing_searches_from_this_frame() {
    let root = Cursor::root();
    let outer = root.push_tree(&block());
    let padded = outer.push(CursorValue::RightPadded {
        location: RightPaddedLocation::BlockStatement,
        element: ident("a"),
    });
    let inner = padded.push_tree(&ident("a"));

    let found = inner.first_enclosing(|tree| matches!(tree, J::Block(_)));
    assert!(found.is_some());
    assert!(inner
        .first_enclosing(|tree| matches!(tree, J::Identifier(_)))
        .is_some());
    assert!(inner.parent_tree_cursor().unwrap().same_frame(&outer));
    assert_eq!(
        inner.first_enclosing_or_err("if", |tree| matches!(tree, J::If(_))),
        Err(VisitError::MissingAncestor { expected: "if" })
    );
}

#[test]
fn put_on_first_enclosing_reports_whether_a_frame_matched() {
    let root = Cursor::root();
    let outer = root.push_tree(&block());
    let inner = outer.push_tree(&ident("a"));

    assert!(inner.put_message_on_first_enclosing(|tree| matches!(tree, J::Block(_)), "stop", true));
    assert_eq!(outer.get_message::<bool>("stop"), Some(true));
    assert!(!inner.put_message_on_first_enclosing(
        |tree| matches!(tree, J::CompilationUnit(_)),
        "stop",
        true
    ));
}

#[test]
fn root_has_no_parent() {
    let root = Cursor::root();
    assert!(root.parent().is_none());
    assert!(root.parent_or_err().is_err());
    assert!(root.push_tree(&block()).root_cursor().same_frame(&root));
    assert_eq!(format!("{root:?}"), "[\"root\"]");
}
