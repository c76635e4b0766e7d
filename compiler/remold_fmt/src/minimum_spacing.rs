//! Minimum viable spacing.
//!
//! Synthesized trees often carry empty prefixes where the source would need
//! at least one space, and printing them would fuse `public` and `static`
//! into one word. This pass inserts a single space between adjacent words and
//! nowhere else.

use remold_tree::{
    Case, ClassDeclaration, Container, Import, MethodDeclaration, NewClass, Package, Return,
    Space, Throw, TreeId, TypeParameter, VariableDeclarations, J,
};
use remold_visit::{
    walk_case, walk_class_declaration, walk_import, walk_method_declaration, walk_new_class,
    walk_package, walk_return, walk_throw, walk_type_parameter, walk_variable_declarations,
    Cursor, JavaVisitor, VisitResult,
};

fn ensure_space(space: &mut Space) {
    if space.is_empty() {
        space.whitespace = " ".to_string();
    }
}

fn ensure_prefix(tree: &mut J) {
    if tree.prefix().is_empty() {
        *tree = tree.clone().with_prefix(Space::single_space());
    }
}

/// Space between modifiers, and after the first one when annotations come
/// before it.
fn space_modifiers(annotations: &[J], modifiers: &mut [J]) {
    for (i, modifier) in modifiers.iter_mut().enumerate() {
        if i > 0 || !annotations.is_empty() {
            ensure_prefix(modifier);
        }
    }
}

/// A keyword followed by a list: ` keyword a`.
fn space_keyword_list(container: &mut Container<J>) {
    ensure_space(&mut container.before);
    if let Some(first) = container.elements.first_mut() {
        ensure_prefix(&mut first.element);
    }
}

#[derive(Clone, Debug, Default)]
pub struct MinimumViableSpacingVisitor {
    stop_after: Option<TreeId>,
}

impl MinimumViableSpacingVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_stop_after(mut self, stop_after: Option<TreeId>) -> Self {
        self.stop_after = stop_after;
        self
    }
}

impl JavaVisitor for MinimumViableSpacingVisitor {
    fn stop_after(&self) -> Option<TreeId> {
        self.stop_after
    }

    fn visit_package(&mut self, mut tree: Package, cursor: &Cursor) -> VisitResult<J> {
        ensure_prefix(&mut tree.expression);
        walk_package(self, tree, cursor)
    }

    fn visit_import(&mut self, mut tree: Import, cursor: &Cursor) -> VisitResult<J> {
        if tree.is_static.element {
            ensure_space(&mut tree.is_static.before);
        }
        ensure_prefix(&mut tree.qualid);
        walk_import(self, tree, cursor)
    }

    fn visit_class_declaration(
        &mut self,
        mut tree: ClassDeclaration,
        cursor: &Cursor,
    ) -> VisitResult<J> {
        space_modifiers(&tree.leading_annotations, &mut tree.modifiers);
        if !tree.leading_annotations.is_empty() || !tree.modifiers.is_empty() {
            ensure_space(&mut tree.kind.prefix);
        }
        ensure_prefix(&mut tree.name);
        if let Some(extends) = &mut tree.extends {
            ensure_space(&mut extends.before);
            ensure_prefix(&mut extends.element);
        }
        if let Some(implements) = &mut tree.implements {
            space_keyword_list(implements);
        }
        walk_class_declaration(self, tree, cursor)
    }

    fn visit_method_declaration(
        &mut self,
        mut tree: MethodDeclaration,
        cursor: &Cursor,
    ) -> VisitResult<J> {
        space_modifiers(&tree.leading_annotations, &mut tree.modifiers);
        let mut preceded = !tree.leading_annotations.is_empty() || !tree.modifiers.is_empty();
        if let Some(type_parameters) = &mut tree.type_parameters {
            if preceded {
                ensure_space(&mut type_parameters.before);
            }
            preceded = true;
        }
        if let Some(return_type) = &mut tree.return_type {
            if preceded {
                ensure_prefix(return_type);
            }
            preceded = true;
        }
        if preceded {
            ensure_prefix(&mut tree.name);
        }
        if let Some(throws) = &mut tree.throws {
            space_keyword_list(throws);
        }
        walk_method_declaration(self, tree, cursor)
    }

    fn visit_variable_declarations(
        &mut self,
        mut tree: VariableDeclarations,
        cursor: &Cursor,
    ) -> VisitResult<J> {
        space_modifiers(&tree.leading_annotations, &mut tree.modifiers);
        let preceded = !tree.leading_annotations.is_empty() || !tree.modifiers.is_empty();
        if let Some(type_expr) = &mut tree.type_expr {
            if preceded {
                ensure_prefix(type_expr);
            }
            if tree.varargs.is_none() {
                if let Some(first) = tree.variables.first_mut() {
                    ensure_prefix(&mut first.element);
                }
            }
        }
        walk_variable_declarations(self, tree, cursor)
    }

    fn visit_type_parameter(&mut self, mut tree: TypeParameter, cursor: &Cursor) -> VisitResult<J> {
        if let Some(bounds) = &mut tree.bounds {
            space_keyword_list(bounds);
        }
        walk_type_parameter(self, tree, cursor)
    }

    fn visit_return(&mut self, mut tree: Return, cursor: &Cursor) -> VisitResult<J> {
        if let Some(expression) = &mut tree.expression {
            if !matches!(expression, J::Parentheses(_)) {
                ensure_prefix(expression);
            }
        }
        walk_return(self, tree, cursor)
    }

    fn visit_throw(&mut self, mut tree: Throw, cursor: &Cursor) -> VisitResult<J> {
        ensure_prefix(&mut tree.exception);
        walk_throw(self, tree, cursor)
    }

    fn visit_new_class(&mut self, mut tree: NewClass, cursor: &Cursor) -> VisitResult<J> {
        ensure_prefix(&mut tree.clazz);
        walk_new_class(self, tree, cursor)
    }

    fn visit_case(&mut self, mut tree: Case, cursor: &Cursor) -> VisitResult<J> {
        if let Some(expression) = &mut tree.expression {
            ensure_prefix(expression);
        }
        walk_case(self, tree, cursor)
    }
}

#[cfg(test)]
mod tests;
