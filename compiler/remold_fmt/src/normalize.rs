//! Declaration prefix normalization.
//!
//! An edit that removes a declaration's annotations or modifiers can leave
//! the declaration's leading whitespace and comments on whatever inner
//! element now comes first. The later passes only look at a declaration's
//! own prefix, so this pass moves that formatting back to it. The printed
//! text does not change.

use std::mem;

use remold_tree::{
    ClassDeclaration, MethodDeclaration, Space, TreeId, VariableDeclarations, J,
};
use remold_visit::{
    walk_class_declaration, walk_method_declaration, walk_variable_declarations, Cursor,
    JavaVisitor, VisitResult,
};

/// Append `moved` to `prefix`, as the two printed one after the other.
fn concatenate(prefix: &mut Space, moved: Space) {
    match prefix.comments.last_mut() {
        Some(last) => last.suffix.push_str(&moved.whitespace),
        None => prefix.whitespace.push_str(&moved.whitespace),
    }
    prefix.comments.extend(moved.comments);
}

fn take_prefix(tree: &mut J) -> Space {
    let prefix = tree.prefix().clone();
    if !prefix.is_empty() {
        *tree = tree.clone().with_prefix(Space::EMPTY);
    }
    prefix
}

#[derive(Clone, Debug, Default)]
pub struct NormalizeFormatVisitor {
    stop_after: Option<TreeId>,
}

impl NormalizeFormatVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_stop_after(mut self, stop_after: Option<TreeId>) -> Self {
        self.stop_after = stop_after;
        self
    }
}

impl JavaVisitor for NormalizeFormatVisitor {
    fn stop_after(&self) -> Option<TreeId> {
        self.stop_after
    }

    fn visit_class_declaration(
        &mut self,
        mut tree: ClassDeclaration,
        cursor: &Cursor,
    ) -> VisitResult<J> {
        if tree.leading_annotations.is_empty() {
            let moved = match tree.modifiers.first_mut() {
                Some(modifier) => take_prefix(modifier),
                None => mem::take(&mut tree.kind.prefix),
            };
            concatenate(&mut tree.prefix, moved);
        }
        walk_class_declaration(self, tree, cursor)
    }

    fn visit_method_declaration(
        &mut self,
        mut tree: MethodDeclaration,
        cursor: &Cursor,
    ) -> VisitResult<J> {
        if tree.leading_annotations.is_empty() {
            let moved = if let Some(modifier) = tree.modifiers.first_mut() {
                take_prefix(modifier)
            } else if let Some(type_parameters) = &mut tree.type_parameters {
                mem::take(&mut type_parameters.before)
            } else if let Some(return_type) = &mut tree.return_type {
                take_prefix(return_type)
            } else {
                take_prefix(&mut tree.name)
            };
            concatenate(&mut tree.prefix, moved);
        }
        walk_method_declaration(self, tree, cursor)
    }

    fn visit_variable_declarations(
        &mut self,
        mut tree: VariableDeclarations,
        cursor: &Cursor,
    ) -> VisitResult<J> {
        if tree.leading_annotations.is_empty() {
            let moved = if let Some(modifier) = tree.modifiers.first_mut() {
                take_prefix(modifier)
            } else if let Some(type_expr) = &mut tree.type_expr {
                take_prefix(type_expr)
            } else {
                Space::EMPTY
            };
            concatenate(&mut tree.prefix, moved);
        }
        walk_variable_declarations(self, tree, cursor)
    }
}
