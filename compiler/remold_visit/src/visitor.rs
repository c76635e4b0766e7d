//! The rewriting visitor trait.
//!
//! # Design
//!
//! [`JavaVisitor::visit`] is the single entry point for a node: it pushes a
//! cursor frame, runs [`pre_visit`](JavaVisitor::pre_visit), dispatches on the
//! variant to the matching `visit_*` method, then runs
//! [`post_visit`](JavaVisitor::post_visit). Each `visit_*` default calls the
//! `walk_*` function of the same name in [`crate::walk`].
//!
//! Every method takes the node by value and returns its replacement, so the
//! identity visitor rebuilds an equal tree and a rewrite only needs to
//! override the methods for the nodes it changes.
//!
//! # Example
//!
//! ```text
//! struct Rename { from: String, to: String }
//!
//! impl JavaVisitor for Rename {
//!     fn visit_identifier(&mut self, mut ident: Identifier, cursor: &Cursor) -> VisitResult<J> {
//!         if ident.simple_name == self.from {
//!             ident.simple_name = self.to.clone();
//!         }
//!         walk_identifier(self, ident, cursor)
//!     }
//! }
//! ```

use std::sync::Arc;

use remold_tree::{
    Annotation, ArrayAccess, ArrayDimension, ArrayType, Assignment, AssignmentOperation, Binary,
    Block, Break, Case, Catch, ClassDeclaration, CompilationUnit, Container, ContainerLocation,
    Continue, ControlParentheses, DoWhileLoop, Else, Empty, EnumValue, EnumValueSet, FieldAccess,
    ForControl, ForEachControl, ForEachLoop, ForLoop, Identifier, If, Import, Label, Lambda,
    LeftPadded, LeftPaddedLocation, Literal, MethodDeclaration, MethodInvocation, Modifier,
    MultiCatch, NamedVariable, NewArray, NewClass, Package, ParameterizedType, Parentheses,
    PrimitiveType, Return, RightPadded, RightPaddedLocation, Space, SpaceLocation, Switch,
    Ternary, Throw, TreeId, Try, TypeCast, TypeParameter, Unary, VariableDeclarations, WhileLoop,
    Wildcard, J,
};

use crate::walk::*;
use crate::{Cursor, VisitResult};

/// Message key marking that a visitor's stop-after node has been visited.
const STOP: &str = "stop";

/// A tree rewrite.
///
/// Override `visit_*` methods to change specific nodes; call the matching
/// `walk_*` function to keep visiting their children.
pub trait JavaVisitor {
    /// Node after which this visitor leaves the rest of the tree untouched.
    fn stop_after(&self) -> Option<TreeId> {
        None
    }

    /// Visit a node with `cursor` as its parent frame.
    fn visit(&mut self, tree: J, cursor: &Cursor) -> VisitResult<J> {
        walk_tree(self, tree, cursor)
    }

    /// Visit a whole tree from a fresh root cursor.
    fn visit_root(&mut self, tree: J) -> VisitResult<J> {
        self.visit(tree, &Cursor::root())
    }

    /// Runs before the node's `visit_*` method, on the node's own frame.
    fn pre_visit(&mut self, tree: J, _cursor: &Cursor) -> VisitResult<J> {
        Ok(tree)
    }

    /// Runs after the node's `visit_*` method, on the node's own frame.
    fn post_visit(&mut self, tree: J, _cursor: &Cursor) -> VisitResult<J> {
        Ok(tree)
    }

    fn visit_space(
        &mut self,
        space: Space,
        _loc: SpaceLocation,
        _cursor: &Cursor,
    ) -> VisitResult<Space> {
        Ok(space)
    }

    fn visit_right_padded(
        &mut self,
        right: RightPadded<J>,
        loc: RightPaddedLocation,
        cursor: &Cursor,
    ) -> VisitResult<RightPadded<J>> {
        walk_right_padded(self, right, loc, cursor)
    }

    fn visit_left_padded(
        &mut self,
        left: LeftPadded<J>,
        loc: LeftPaddedLocation,
        cursor: &Cursor,
    ) -> VisitResult<LeftPadded<J>> {
        walk_left_padded(self, left, loc, cursor)
    }

    fn visit_container(
        &mut self,
        container: Container<J>,
        loc: ContainerLocation,
        cursor: &Cursor,
    ) -> VisitResult<Container<J>> {
        walk_container(self, container, loc, cursor)
    }

    fn visit_annotation(&mut self, tree: Annotation, cursor: &Cursor) -> VisitResult<J> {
        walk_annotation(self, tree, cursor)
    }

    fn visit_array_access(&mut self, tree: ArrayAccess, cursor: &Cursor) -> VisitResult<J> {
        walk_array_access(self, tree, cursor)
    }

    fn visit_array_dimension(&mut self, tree: ArrayDimension, cursor: &Cursor) -> VisitResult<J> {
        walk_array_dimension(self, tree, cursor)
    }

    fn visit_array_type(&mut self, tree: ArrayType, cursor: &Cursor) -> VisitResult<J> {
        walk_array_type(self, tree, cursor)
    }

    fn visit_assignment(&mut self, tree: Assignment, cursor: &Cursor) -> VisitResult<J> {
        walk_assignment(self, tree, cursor)
    }

    fn visit_assignment_operation(
        &mut self,
        tree: AssignmentOperation,
        cursor: &Cursor,
    ) -> VisitResult<J> {
        walk_assignment_operation(self, tree, cursor)
    }

    fn visit_binary(&mut self, tree: Binary, cursor: &Cursor) -> VisitResult<J> {
        walk_binary(self, tree, cursor)
    }

    fn visit_block(&mut self, tree: Block, cursor: &Cursor) -> VisitResult<J> {
        walk_block(self, tree, cursor)
    }

    fn visit_break(&mut self, tree: Break, cursor: &Cursor) -> VisitResult<J> {
        walk_break(self, tree, cursor)
    }

    fn visit_case(&mut self, tree: Case, cursor: &Cursor) -> VisitResult<J> {
        walk_case(self, tree, cursor)
    }

    fn visit_catch(&mut self, tree: Catch, cursor: &Cursor) -> VisitResult<J> {
        walk_catch(self, tree, cursor)
    }

    fn visit_class_declaration(&mut self, tree: ClassDeclaration, cursor: &Cursor) -> VisitResult<J> {
        walk_class_declaration(self, tree, cursor)
    }

    fn visit_compilation_unit(&mut self, tree: CompilationUnit, cursor: &Cursor) -> VisitResult<J> {
        walk_compilation_unit(self, tree, cursor)
    }

    fn visit_continue(&mut self, tree: Continue, cursor: &Cursor) -> VisitResult<J> {
        walk_continue(self, tree, cursor)
    }

    fn visit_control_parentheses(
        &mut self,
        tree: ControlParentheses,
        cursor: &Cursor,
    ) -> VisitResult<J> {
        walk_control_parentheses(self, tree, cursor)
    }

    fn visit_do_while_loop(&mut self, tree: DoWhileLoop, cursor: &Cursor) -> VisitResult<J> {
        walk_do_while_loop(self, tree, cursor)
    }

    fn visit_else(&mut self, tree: Else, cursor: &Cursor) -> VisitResult<J> {
        walk_else(self, tree, cursor)
    }

    fn visit_empty(&mut self, tree: Empty, cursor: &Cursor) -> VisitResult<J> {
        walk_empty(self, tree, cursor)
    }

    fn visit_enum_value(&mut self, tree: EnumValue, cursor: &Cursor) -> VisitResult<J> {
        walk_enum_value(self, tree, cursor)
    }

    fn visit_enum_value_set(&mut self, tree: EnumValueSet, cursor: &Cursor) -> VisitResult<J> {
        walk_enum_value_set(self, tree, cursor)
    }

    fn visit_field_access(&mut self, tree: FieldAccess, cursor: &Cursor) -> VisitResult<J> {
        walk_field_access(self, tree, cursor)
    }

    fn visit_for_control(&mut self, tree: ForControl, cursor: &Cursor) -> VisitResult<J> {
        walk_for_control(self, tree, cursor)
    }

    fn visit_for_each_control(&mut self, tree: ForEachControl, cursor: &Cursor) -> VisitResult<J> {
        walk_for_each_control(self, tree, cursor)
    }

    fn visit_for_each_loop(&mut self, tree: ForEachLoop, cursor: &Cursor) -> VisitResult<J> {
        walk_for_each_loop(self, tree, cursor)
    }

    fn visit_for_loop(&mut self, tree: ForLoop, cursor: &Cursor) -> VisitResult<J> {
        walk_for_loop(self, tree, cursor)
    }

    fn visit_identifier(&mut self, tree: Identifier, cursor: &Cursor) -> VisitResult<J> {
        walk_identifier(self, tree, cursor)
    }

    fn visit_if(&mut self, tree: If, cursor: &Cursor) -> VisitResult<J> {
        walk_if(self, tree, cursor)
    }

    fn visit_import(&mut self, tree: Import, cursor: &Cursor) -> VisitResult<J> {
        walk_import(self, tree, cursor)
    }

    fn visit_label(&mut self, tree: Label, cursor: &Cursor) -> VisitResult<J> {
        walk_label(self, tree, cursor)
    }

    fn visit_lambda(&mut self, tree: Lambda, cursor: &Cursor) -> VisitResult<J> {
        walk_lambda(self, tree, cursor)
    }

    fn visit_literal(&mut self, tree: Literal, cursor: &Cursor) -> VisitResult<J> {
        walk_literal(self, tree, cursor)
    }

    fn visit_method_declaration(&mut self, tree: MethodDeclaration, cursor: &Cursor) -> VisitResult<J> {
        walk_method_declaration(self, tree, cursor)
    }

    fn visit_method_invocation(&mut self, tree: MethodInvocation, cursor: &Cursor) -> VisitResult<J> {
        walk_method_invocation(self, tree, cursor)
    }

    fn visit_modifier(&mut self, tree: Modifier, cursor: &Cursor) -> VisitResult<J> {
        walk_modifier(self, tree, cursor)
    }

    fn visit_multi_catch(&mut self, tree: MultiCatch, cursor: &Cursor) -> VisitResult<J> {
        walk_multi_catch(self, tree, cursor)
    }

    fn visit_named_variable(&mut self, tree: NamedVariable, cursor: &Cursor) -> VisitResult<J> {
        walk_named_variable(self, tree, cursor)
    }

    fn visit_new_array(&mut self, tree: NewArray, cursor: &Cursor) -> VisitResult<J> {
        walk_new_array(self, tree, cursor)
    }

    fn visit_new_class(&mut self, tree: NewClass, cursor: &Cursor) -> VisitResult<J> {
        walk_new_class(self, tree, cursor)
    }

    fn visit_package(&mut self, tree: Package, cursor: &Cursor) -> VisitResult<J> {
        walk_package(self, tree, cursor)
    }

    fn visit_parameterized_type(
        &mut self,
        tree: ParameterizedType,
        cursor: &Cursor,
    ) -> VisitResult<J> {
        walk_parameterized_type(self, tree, cursor)
    }

    fn visit_parentheses(&mut self, tree: Parentheses, cursor: &Cursor) -> VisitResult<J> {
        walk_parentheses(self, tree, cursor)
    }

    fn visit_primitive(&mut self, tree: PrimitiveType, cursor: &Cursor) -> VisitResult<J> {
        walk_primitive(self, tree, cursor)
    }

    fn visit_return(&mut self, tree: Return, cursor: &Cursor) -> VisitResult<J> {
        walk_return(self, tree, cursor)
    }

    fn visit_switch(&mut self, tree: Switch, cursor: &Cursor) -> VisitResult<J> {
        walk_switch(self, tree, cursor)
    }

    fn visit_ternary(&mut self, tree: Ternary, cursor: &Cursor) -> VisitResult<J> {
        walk_ternary(self, tree, cursor)
    }

    fn visit_throw(&mut self, tree: Throw, cursor: &Cursor) -> VisitResult<J> {
        walk_throw(self, tree, cursor)
    }

    fn visit_try(&mut self, tree: Try, cursor: &Cursor) -> VisitResult<J> {
        walk_try(self, tree, cursor)
    }

    fn visit_type_cast(&mut self, tree: TypeCast, cursor: &Cursor) -> VisitResult<J> {
        walk_type_cast(self, tree, cursor)
    }

    fn visit_type_parameter(&mut self, tree: TypeParameter, cursor: &Cursor) -> VisitResult<J> {
        walk_type_parameter(self, tree, cursor)
    }

    fn visit_unary(&mut self, tree: Unary, cursor: &Cursor) -> VisitResult<J> {
        walk_unary(self, tree, cursor)
    }

    fn visit_variable_declarations(
        &mut self,
        tree: VariableDeclarations,
        cursor: &Cursor,
    ) -> VisitResult<J> {
        walk_variable_declarations(self, tree, cursor)
    }

    fn visit_while_loop(&mut self, tree: WhileLoop, cursor: &Cursor) -> VisitResult<J> {
        walk_while_loop(self, tree, cursor)
    }

    fn visit_wildcard(&mut self, tree: Wildcard, cursor: &Cursor) -> VisitResult<J> {
        walk_wildcard(self, tree, cursor)
    }
}

/// Push a frame for `tree`, then pre-visit, dispatch and post-visit it.
///
/// Once the "stop" message is set anywhere above `cursor`, nodes come back
/// unchanged without being visited.
pub fn walk_tree<V: JavaVisitor + ?Sized>(v: &mut V, tree: J, cursor: &Cursor) -> VisitResult<J> {
    if cursor.nearest_message::<bool>(STOP).is_some() {
        return Ok(tree);
    }

    let frame = cursor.push_tree(&tree);
    let tree = v.pre_visit(tree, &frame)?;
    let tree = dispatch(v, tree, &frame)?;
    let tree = v.post_visit(tree, &frame)?;

    if v.stop_after().is_some_and(|id| id == tree.id()) {
        tracing::trace!(node = tree.variant_name(), "stop-after node visited");
        let root = frame.root_cursor();
        if !frame.put_message_on_first_enclosing(
            |tree| matches!(tree, J::CompilationUnit(_)),
            STOP,
            true,
        ) {
            root.put_message(STOP, true);
        }
    }
    Ok(tree)
}

fn dispatch<V: JavaVisitor + ?Sized>(v: &mut V, tree: J, cursor: &Cursor) -> VisitResult<J> {
    match tree {
        J::Annotation(n) => v.visit_annotation(Arc::unwrap_or_clone(n), cursor),
        J::ArrayAccess(n) => v.visit_array_access(Arc::unwrap_or_clone(n), cursor),
        J::ArrayDimension(n) => v.visit_array_dimension(Arc::unwrap_or_clone(n), cursor),
        J::ArrayType(n) => v.visit_array_type(Arc::unwrap_or_clone(n), cursor),
        J::Assignment(n) => v.visit_assignment(Arc::unwrap_or_clone(n), cursor),
        J::AssignmentOperation(n) => {
            v.visit_assignment_operation(Arc::unwrap_or_clone(n), cursor)
        }
        J::Binary(n) => v.visit_binary(Arc::unwrap_or_clone(n), cursor),
        J::Block(n) => v.visit_block(Arc::unwrap_or_clone(n), cursor),
        J::Break(n) => v.visit_break(Arc::unwrap_or_clone(n), cursor),
        J::Case(n) => v.visit_case(Arc::unwrap_or_clone(n), cursor),
        J::Catch(n) => v.visit_catch(Arc::unwrap_or_clone(n), cursor),
        J::ClassDeclaration(n) => v.visit_class_declaration(Arc::unwrap_or_clone(n), cursor),
        J::CompilationUnit(n) => v.visit_compilation_unit(Arc::unwrap_or_clone(n), cursor),
        J::Continue(n) => v.visit_continue(Arc::unwrap_or_clone(n), cursor),
        J::ControlParentheses(n) => v.visit_control_parentheses(Arc::unwrap_or_clone(n), cursor),
        J::DoWhileLoop(n) => v.visit_do_while_loop(Arc::unwrap_or_clone(n), cursor),
        J::Else(n) => v.visit_else(Arc::unwrap_or_clone(n), cursor),
        J::Empty(n) => v.visit_empty(Arc::unwrap_or_clone(n), cursor),
        J::EnumValue(n) => v.visit_enum_value(Arc::unwrap_or_clone(n), cursor),
        J::EnumValueSet(n) => v.visit_enum_value_set(Arc::unwrap_or_clone(n), cursor),
        J::FieldAccess(n) => v.visit_field_access(Arc::unwrap_or_clone(n), cursor),
        J::ForControl(n) => v.visit_for_control(Arc::unwrap_or_clone(n), cursor),
        J::ForEachControl(n) => v.visit_for_each_control(Arc::unwrap_or_clone(n), cursor),
        J::ForEachLoop(n) => v.visit_for_each_loop(Arc::unwrap_or_clone(n), cursor),
        J::ForLoop(n) => v.visit_for_loop(Arc::unwrap_or_clone(n), cursor),
        J::Identifier(n) => v.visit_identifier(Arc::unwrap_or_clone(n), cursor),
        J::If(n) => v.visit_if(Arc::unwrap_or_clone(n), cursor),
        J::Import(n) => v.visit_import(Arc::unwrap_or_clone(n), cursor),
        J::Label(n) => v.visit_label(Arc::unwrap_or_clone(n), cursor),
        J::Lambda(n) => v.visit_lambda(Arc::unwrap_or_clone(n), cursor),
        J::Literal(n) => v.visit_literal(Arc::unwrap_or_clone(n), cursor),
        J::MethodDeclaration(n) => v.visit_method_declaration(Arc::unwrap_or_clone(n), cursor),
        J::MethodInvocation(n) => v.visit_method_invocation(Arc::unwrap_or_clone(n), cursor),
        J::Modifier(n) => v.visit_modifier(Arc::unwrap_or_clone(n), cursor),
        J::MultiCatch(n) => v.visit_multi_catch(Arc::unwrap_or_clone(n), cursor),
        J::NamedVariable(n) => v.visit_named_variable(Arc::unwrap_or_clone(n), cursor),
        J::NewArray(n) => v.visit_new_array(Arc::unwrap_or_clone(n), cursor),
        J::NewClass(n) => v.visit_new_class(Arc::unwrap_or_clone(n), cursor),
        J::Package(n) => v.visit_package(Arc::unwrap_or_clone(n), cursor),
        J::ParameterizedType(n) => v.visit_parameterized_type(Arc::unwrap_or_clone(n), cursor),
        J::Parentheses(n) => v.visit_parentheses(Arc::unwrap_or_clone(n), cursor),
        J::Primitive(n) => v.visit_primitive(Arc::unwrap_or_clone(n), cursor),
        J::Return(n) => v.visit_return(Arc::unwrap_or_clone(n), cursor),
        J::Switch(n) => v.visit_switch(Arc::unwrap_or_clone(n), cursor),
        J::Ternary(n) => v.visit_ternary(Arc::unwrap_or_clone(n), cursor),
        J::Throw(n) => v.visit_throw(Arc::unwrap_or_clone(n), cursor),
        J::Try(n) => v.visit_try(Arc::unwrap_or_clone(n), cursor),
        J::TypeCast(n) => v.visit_type_cast(Arc::unwrap_or_clone(n), cursor),
        J::TypeParameter(n) => v.visit_type_parameter(Arc::unwrap_or_clone(n), cursor),
        J::Unary(n) => v.visit_unary(Arc::unwrap_or_clone(n), cursor),
        J::VariableDeclarations(n) => {
            v.visit_variable_declarations(Arc::unwrap_or_clone(n), cursor)
        }
        J::WhileLoop(n) => v.visit_while_loop(Arc::unwrap_or_clone(n), cursor),
        J::Wildcard(n) => v.visit_wildcard(Arc::unwrap_or_clone(n), cursor),
    }
}

/// Run `passes` one after another, each on a fork of `cursor`, feeding each
/// pass the previous pass's output.
pub fn run_passes(
    tree: J,
    passes: &mut [&mut dyn JavaVisitor],
    cursor: &Cursor,
) -> VisitResult<J> {
    passes
        .iter_mut()
        .try_fold(tree, |tree, pass| pass.visit(tree, &cursor.fork()))
}

#[cfg(test)]
mod tests;
