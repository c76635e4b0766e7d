//! Line wrapping of statements and annotations.

use remold_tree::{Block, ClassDeclaration, MethodDeclaration, Space, TreeId, J};
use remold_visit::{
    walk_block, walk_class_declaration, walk_method_declaration, Cursor, JavaVisitor,
    VisitResult,
};

/// Start the token after `space` on a new line. The indentation is left to
/// the indentation pass.
fn wrap(space: &mut Space) {
    if space.has_newline() {
        return;
    }
    match space.comments.last_mut() {
        Some(last) => last.suffix.insert(0, '\n'),
        None => space.whitespace.insert(0, '\n'),
    }
}

fn wrap_prefix(tree: &mut J) {
    if !tree.prefix().has_newline() {
        let mut prefix = tree.prefix().clone();
        wrap(&mut prefix);
        *tree = tree.clone().with_prefix(prefix);
    }
}

/// Puts statements sharing a line with the previous statement on their own
/// line, and each declaration annotation on its own line.
#[derive(Clone, Debug, Default)]
pub struct WrappingAndBracesVisitor {
    stop_after: Option<TreeId>,
}

impl WrappingAndBracesVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_stop_after(mut self, stop_after: Option<TreeId>) -> Self {
        self.stop_after = stop_after;
        self
    }
}

impl JavaVisitor for WrappingAndBracesVisitor {
    fn stop_after(&self) -> Option<TreeId> {
        self.stop_after
    }

    fn visit_block(&mut self, mut tree: Block, cursor: &Cursor) -> VisitResult<J> {
        for statement in tree.statements.iter_mut().skip(1) {
            wrap_prefix(&mut statement.element);
        }
        walk_block(self, tree, cursor)
    }

    fn visit_class_declaration(
        &mut self,
        mut tree: ClassDeclaration,
        cursor: &Cursor,
    ) -> VisitResult<J> {
        if !tree.leading_annotations.is_empty() {
            for annotation in tree.leading_annotations.iter_mut().skip(1) {
                wrap_prefix(annotation);
            }
            match tree.modifiers.first_mut() {
                Some(modifier) => wrap_prefix(modifier),
                None => wrap(&mut tree.kind.prefix),
            }
        }
        walk_class_declaration(self, tree, cursor)
    }

    fn visit_method_declaration(
        &mut self,
        mut tree: MethodDeclaration,
        cursor: &Cursor,
    ) -> VisitResult<J> {
        if !tree.leading_annotations.is_empty() {
            for annotation in tree.leading_annotations.iter_mut().skip(1) {
                wrap_prefix(annotation);
            }
            if let Some(modifier) = tree.modifiers.first_mut() {
                wrap_prefix(modifier);
            } else if let Some(type_parameters) = &mut tree.type_parameters {
                wrap(&mut type_parameters.before);
            } else if let Some(return_type) = &mut tree.return_type {
                wrap_prefix(return_type);
            } else {
                wrap_prefix(&mut tree.name);
            }
        }
        walk_method_declaration(self, tree, cursor)
    }
}
