//! Spaces inside a line.
//!
//! Adds or removes the single space around parentheses, braces, operators
//! and separators as [`SpacesStyle`] asks. Only spaces that are empty or a
//! single `' '` are ever changed: anything wider was put there on purpose
//! and line breaks belong to the other passes.

use std::sync::Arc;

use remold_tree::{
    Annotation, ArrayAccess, Assignment, AssignmentOperation, Binary, Catch,
    ClassDeclaration, Container, DoWhileLoop, Else, EnumValue, ForEachLoop, ForLoop, If, Lambda,
    MethodDeclaration, MethodInvocation, NamedVariable, NewArray, NewClass, OperatorCategory,
    ParameterizedType, Parentheses, RightPadded, Space, Switch, Ternary, TreeId, Try, TypeCast,
    TypeParameter, Unary, WhileLoop, J,
};
use remold_types::ClassKind;
use remold_visit::{
    walk_annotation, walk_array_access, walk_assignment, walk_assignment_operation, walk_binary,
    walk_catch, walk_class_declaration, walk_do_while_loop, walk_else,
    walk_enum_value, walk_for_each_loop, walk_for_loop, walk_if, walk_lambda,
    walk_method_declaration, walk_method_invocation, walk_named_variable, walk_new_array,
    walk_new_class, walk_parameterized_type, walk_parentheses, walk_switch, walk_ternary, walk_try,
    walk_type_cast, walk_type_parameter, walk_unary, walk_while_loop, Cursor, JavaVisitor,
    VisitResult,
};

use crate::style::{EmptyForInitializerPadStyle, EmptyForIteratorPadStyle, SpacesStyle};

/// One space when `wants` and there is none; none when `wants` is off and
/// there is exactly one.
fn pad(space: &mut Space, wants: bool) {
    if wants && space.whitespace.is_empty() {
        space.whitespace = " ".to_string();
    } else if !wants && space.whitespace == " " {
        space.whitespace.clear();
    }
}

/// [`pad`] for the space after an element, which keeps a single space
/// that separates it from a comment.
fn pad_after(space: &mut Space, wants: bool) {
    if wants || space.comments.is_empty() {
        pad(space, wants);
    }
}

fn pad_prefix(tree: &mut J, wants: bool) {
    let mut prefix = tree.prefix().clone();
    pad(&mut prefix, wants);
    if prefix != *tree.prefix() {
        *tree = tree.clone().with_prefix(prefix);
    }
}

/// Spacing inside a delimited list: `within` after the opening and before
/// the closing delimiter, `after_comma` before every later element and
/// `before_comma`, when given, after every element but the last.
fn pad_list(
    elements: &mut [RightPadded<J>],
    within: bool,
    after_comma: bool,
    before_comma: Option<bool>,
) {
    let last = elements.len().saturating_sub(1);
    for (i, padded) in elements.iter_mut().enumerate() {
        pad_prefix(&mut padded.element, if i == 0 { within } else { after_comma });
        if i == last {
            pad_after(&mut padded.after, within);
        } else if let Some(before_comma) = before_comma {
            pad_after(&mut padded.after, before_comma);
        }
    }
}

/// Separators only: the delimiters of the list are left alone.
fn pad_separators(elements: &mut [RightPadded<J>], after_comma: bool, before_comma: bool) {
    let last = elements.len().saturating_sub(1);
    for (i, padded) in elements.iter_mut().enumerate() {
        if i != 0 {
            pad_prefix(&mut padded.element, after_comma);
        }
        if i != last {
            pad_after(&mut padded.after, before_comma);
        }
    }
}

fn starts_empty(container: &Container<J>) -> bool {
    container
        .elements
        .first()
        .is_some_and(|first| first.element.is_empty_node())
}

/// `before` ahead of the `(` of a control statement, `within` just inside it.
fn pad_control_parentheses(tree: &mut J, before: bool, within: bool) {
    pad_prefix(tree, before);
    if let J::ControlParentheses(parentheses) = tree {
        let parentheses = Arc::make_mut(parentheses);
        pad_prefix(&mut parentheses.tree.element, within);
        pad_after(&mut parentheses.tree.after, within);
    }
}

/// The spacing pass.
#[derive(Clone, Debug, Default)]
pub struct SpacesVisitor {
    style: SpacesStyle,
    empty_for_initializer_pad: Option<EmptyForInitializerPadStyle>,
    empty_for_iterator_pad: Option<EmptyForIteratorPadStyle>,
    stop_after: Option<TreeId>,
}

impl SpacesVisitor {
    pub fn new(style: SpacesStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Override the `within` rule for an empty `for` initializer, as in
    /// `for (; i < n; i++)`.
    #[must_use]
    pub fn with_empty_for_initializer_pad(
        mut self,
        pad: Option<EmptyForInitializerPadStyle>,
    ) -> Self {
        self.empty_for_initializer_pad = pad;
        self
    }

    /// Override the spacing of an empty `for` update, as in `for (;;)`.
    #[must_use]
    pub fn with_empty_for_iterator_pad(mut self, pad: Option<EmptyForIteratorPadStyle>) -> Self {
        self.empty_for_iterator_pad = pad;
        self
    }

    #[must_use]
    pub fn with_stop_after(mut self, stop_after: Option<TreeId>) -> Self {
        self.stop_after = stop_after;
        self
    }
}

impl JavaVisitor for SpacesVisitor {
    fn stop_after(&self) -> Option<TreeId> {
        self.stop_after
    }

    fn visit_class_declaration(
        &mut self,
        mut tree: ClassDeclaration,
        cursor: &Cursor,
    ) -> VisitResult<J> {
        let style = &self.style;
        pad_prefix(&mut tree.body, style.before_left_brace.class_left_brace);
        if let J::Block(body) = &mut tree.body {
            if body.statements.is_empty() {
                let within = if tree.kind.kind == ClassKind::Enum {
                    style.other.inside_one_line_enum_braces
                } else {
                    style.within.code_braces
                };
                let body = Arc::make_mut(body);
                if within && body.end.whitespace.is_empty() {
                    body.end.whitespace = " ".to_string();
                } else if !within && body.end.whitespace == " " {
                    body.end.whitespace.clear();
                }
            }
        }
        if let Some(type_parameters) = &mut tree.type_parameters {
            pad(
                &mut type_parameters.before,
                style.type_parameters.before_opening_angle_bracket,
            );
            pad_list(
                &mut type_parameters.elements,
                style.within.angle_brackets,
                style.other.after_comma,
                None,
            );
        }
        walk_class_declaration(self, tree, cursor)
    }

    fn visit_method_declaration(
        &mut self,
        mut tree: MethodDeclaration,
        cursor: &Cursor,
    ) -> VisitResult<J> {
        let style = &self.style;
        pad(
            &mut tree.parameters.before,
            style.before_parentheses.method_declaration,
        );
        if let Some(body) = &mut tree.body {
            pad_prefix(body, style.before_left_brace.method_left_brace);
        }
        if starts_empty(&tree.parameters) {
            for parameter in &mut tree.parameters.elements {
                pad_prefix(
                    &mut parameter.element,
                    style.within.empty_method_declaration_parentheses,
                );
            }
        } else {
            pad_list(
                &mut tree.parameters.elements,
                style.within.method_declaration_parentheses,
                style.other.after_comma,
                Some(style.other.before_comma),
            );
        }
        if let Some(type_parameters) = &mut tree.type_parameters {
            pad_list(
                &mut type_parameters.elements,
                style.within.angle_brackets,
                style.other.after_comma,
                None,
            );
        }
        walk_method_declaration(self, tree, cursor)
    }

    fn visit_method_invocation(
        &mut self,
        mut tree: MethodInvocation,
        cursor: &Cursor,
    ) -> VisitResult<J> {
        let style = &self.style;
        pad(&mut tree.arguments.before, style.before_parentheses.method_call);
        if starts_empty(&tree.arguments) {
            for argument in &mut tree.arguments.elements {
                pad_prefix(
                    &mut argument.element,
                    style.within.empty_method_call_parentheses,
                );
            }
        } else {
            pad_list(
                &mut tree.arguments.elements,
                style.within.method_call_parentheses,
                style.other.after_comma,
                Some(style.other.before_comma),
            );
        }
        if let Some(type_parameters) = &mut tree.type_parameters {
            pad(
                &mut type_parameters.before,
                style.type_arguments.before_opening_angle_bracket,
            );
            pad_prefix(
                &mut tree.name,
                style.type_arguments.after_closing_angle_bracket,
            );
            for argument in type_parameters.elements.iter_mut().skip(1) {
                pad_prefix(&mut argument.element, style.type_arguments.after_comma);
            }
        }
        walk_method_invocation(self, tree, cursor)
    }

    fn visit_if(&mut self, mut tree: If, cursor: &Cursor) -> VisitResult<J> {
        let style = &self.style;
        pad_control_parentheses(
            &mut tree.condition,
            style.before_parentheses.if_parentheses,
            style.within.if_parentheses,
        );
        pad_prefix(
            &mut tree.then_part.element,
            style.before_left_brace.if_left_brace,
        );
        walk_if(self, tree, cursor)
    }

    fn visit_else(&mut self, mut tree: Else, cursor: &Cursor) -> VisitResult<J> {
        pad_prefix(
            &mut tree.body.element,
            self.style.before_left_brace.else_left_brace,
        );
        pad(&mut tree.prefix, self.style.before_keywords.else_keyword);
        walk_else(self, tree, cursor)
    }

    fn visit_for_loop(&mut self, mut tree: ForLoop, cursor: &Cursor) -> VisitResult<J> {
        let style = &self.style;
        pad_prefix(&mut tree.control, style.before_parentheses.for_parentheses);
        if let J::ForControl(control) = &mut tree.control {
            let control = Arc::make_mut(control);
            let within = style.within.for_parentheses;
            let after_semicolon = style.other.after_for_semicolon;
            let before_semicolon = style.other.before_for_semicolon;

            if let Some(init) = control.init.first_mut() {
                let space = match self.empty_for_initializer_pad {
                    Some(pad) if init.element.is_empty_node() => pad.space,
                    _ => within,
                };
                pad_prefix(&mut init.element, space);
                pad_after(&mut init.after, before_semicolon);
            }
            pad_after(&mut control.condition.after, before_semicolon);
            pad_prefix(&mut control.condition.element, after_semicolon);

            let empty_update = control.update.len() == 1 && control.update[0].element.is_empty_node();
            match self.empty_for_iterator_pad {
                Some(pad) if empty_update => {
                    for update in &mut control.update {
                        pad_prefix(&mut update.element, pad.space);
                    }
                }
                _ => {
                    let last = control.update.len().saturating_sub(1);
                    for (i, update) in control.update.iter_mut().enumerate() {
                        let before = if i == 0 {
                            after_semicolon
                        } else {
                            style.other.after_comma
                        };
                        pad_prefix(&mut update.element, before);
                        let after = if i == last {
                            within
                        } else {
                            style.other.before_comma
                        };
                        pad_after(&mut update.after, after);
                    }
                }
            }
        }
        pad_prefix(
            &mut tree.body.element,
            style.before_left_brace.for_left_brace,
        );
        walk_for_loop(self, tree, cursor)
    }

    fn visit_for_each_loop(&mut self, mut tree: ForEachLoop, cursor: &Cursor) -> VisitResult<J> {
        let style = &self.style;
        pad_prefix(&mut tree.control, style.before_parentheses.for_parentheses);
        pad_prefix(
            &mut tree.body.element,
            style.before_left_brace.for_left_brace,
        );
        if let J::ForEachControl(control) = &mut tree.control {
            let control = Arc::make_mut(control);
            pad_prefix(
                &mut control.variable.element,
                style.within.for_parentheses,
            );
            pad_after(&mut control.iterable.after, style.within.for_parentheses);
            pad_after(
                &mut control.variable.after,
                style.other.before_colon_in_for_each,
            );
        }
        walk_for_each_loop(self, tree, cursor)
    }

    fn visit_while_loop(&mut self, mut tree: WhileLoop, cursor: &Cursor) -> VisitResult<J> {
        let style = &self.style;
        pad_control_parentheses(
            &mut tree.condition,
            style.before_parentheses.while_parentheses,
            style.within.while_parentheses,
        );
        pad_prefix(
            &mut tree.body.element,
            style.before_left_brace.while_left_brace,
        );
        walk_while_loop(self, tree, cursor)
    }

    fn visit_do_while_loop(&mut self, mut tree: DoWhileLoop, cursor: &Cursor) -> VisitResult<J> {
        let style = &self.style;
        pad(
            &mut tree.while_condition.before,
            style.before_keywords.while_keyword,
        );
        pad_control_parentheses(
            &mut tree.while_condition.element,
            style.before_parentheses.while_parentheses,
            style.within.while_parentheses,
        );
        pad_prefix(&mut tree.body.element, style.before_left_brace.do_left_brace);
        walk_do_while_loop(self, tree, cursor)
    }

    fn visit_switch(&mut self, mut tree: Switch, cursor: &Cursor) -> VisitResult<J> {
        let style = &self.style;
        pad_control_parentheses(
            &mut tree.selector,
            style.before_parentheses.switch_parentheses,
            style.within.switch_parentheses,
        );
        pad_prefix(&mut tree.cases, style.before_left_brace.switch_left_brace);
        walk_switch(self, tree, cursor)
    }

    fn visit_try(&mut self, mut tree: Try, cursor: &Cursor) -> VisitResult<J> {
        let style = &self.style;
        pad_prefix(&mut tree.body, style.before_left_brace.try_left_brace);
        if let Some(finally) = &mut tree.finally {
            pad(&mut finally.before, style.before_keywords.finally_keyword);
            pad_prefix(
                &mut finally.element,
                style.before_left_brace.finally_left_brace,
            );
        }
        walk_try(self, tree, cursor)
    }

    fn visit_catch(&mut self, mut tree: Catch, cursor: &Cursor) -> VisitResult<J> {
        let style = &self.style;
        pad(&mut tree.prefix, style.before_keywords.catch_keyword);
        pad_control_parentheses(
            &mut tree.parameter,
            style.before_parentheses.catch_parentheses,
            style.within.catch_parentheses,
        );
        pad_prefix(&mut tree.body, style.before_left_brace.catch_left_brace);
        walk_catch(self, tree, cursor)
    }

    fn visit_annotation(&mut self, mut tree: Annotation, cursor: &Cursor) -> VisitResult<J> {
        let style = &self.style;
        if let Some(arguments) = &mut tree.arguments {
            pad(
                &mut arguments.before,
                style.before_parentheses.annotation_parameters,
            );
            let within = style.within.annotation_parentheses;
            let last = arguments.elements.len().saturating_sub(1);
            for (i, argument) in arguments.elements.iter_mut().enumerate() {
                // An array initializer's brace spacing wins unless the
                // parentheses themselves ask for a space.
                if i == 0
                    && (within || !style.before_left_brace.annotation_array_initializer_left_brace)
                {
                    pad_prefix(&mut argument.element, within);
                }
                if i == last {
                    pad_after(&mut argument.after, within);
                }
            }
        }
        walk_annotation(self, tree, cursor)
    }

    fn visit_assignment(&mut self, mut tree: Assignment, cursor: &Cursor) -> VisitResult<J> {
        let around = self.style.around_operators.assignment;
        pad(&mut tree.assignment.before, around);
        pad_prefix(&mut tree.assignment.element, around);
        walk_assignment(self, tree, cursor)
    }

    fn visit_assignment_operation(
        &mut self,
        mut tree: AssignmentOperation,
        cursor: &Cursor,
    ) -> VisitResult<J> {
        let around = self.style.around_operators.assignment;
        pad(&mut tree.operator.before, around);
        pad_prefix(&mut tree.assignment, around);
        walk_assignment_operation(self, tree, cursor)
    }

    fn visit_named_variable(&mut self, mut tree: NamedVariable, cursor: &Cursor) -> VisitResult<J> {
        if let Some(initializer) = &mut tree.initializer {
            let around = self.style.around_operators.assignment;
            pad(&mut initializer.before, around);
            pad_prefix(&mut initializer.element, around);
        }
        walk_named_variable(self, tree, cursor)
    }

    fn visit_binary(&mut self, mut tree: Binary, cursor: &Cursor) -> VisitResult<J> {
        let operators = &self.style.around_operators;
        let around = match tree.operator.element.category() {
            OperatorCategory::Logical => operators.logical,
            OperatorCategory::Equality => operators.equality,
            OperatorCategory::Relational => operators.relational,
            OperatorCategory::Bitwise => operators.bitwise,
            OperatorCategory::Additive => operators.additive,
            OperatorCategory::Multiplicative => operators.multiplicative,
            OperatorCategory::Shift => operators.shift,
        };
        pad(&mut tree.operator.before, around);
        pad_prefix(&mut tree.right, around);
        walk_binary(self, tree, cursor)
    }

    fn visit_unary(&mut self, mut tree: Unary, cursor: &Cursor) -> VisitResult<J> {
        let around = self.style.around_operators.unary;
        pad(&mut tree.operator.before, around);
        if !tree.operator.element.is_postfix() {
            pad_prefix(&mut tree.expression, around);
        }
        walk_unary(self, tree, cursor)
    }

    fn visit_lambda(&mut self, mut tree: Lambda, cursor: &Cursor) -> VisitResult<J> {
        let style = &self.style;
        pad(&mut tree.arrow, style.around_operators.lambda_arrow);
        pad_prefix(&mut tree.body, style.around_operators.lambda_arrow);
        let parameters = &mut tree.parameters.parameters;
        if !parameters
            .first()
            .is_some_and(|first| first.element.is_empty_node())
        {
            pad_separators(parameters, style.other.after_comma, style.other.before_comma);
        }
        walk_lambda(self, tree, cursor)
    }

    fn visit_new_array(&mut self, mut tree: NewArray, cursor: &Cursor) -> VisitResult<J> {
        let style = &self.style;
        let in_annotation = cursor
            .parent()
            .and_then(|parent| parent.first_enclosing(|_| true))
            .is_some_and(|tree| matches!(tree, J::Annotation(_)));
        if in_annotation {
            if !style.within.annotation_parentheses {
                pad(
                    &mut tree.prefix,
                    style.before_left_brace.annotation_array_initializer_left_brace,
                );
            }
        } else if let Some(initializer) = &mut tree.initializer {
            pad(
                &mut initializer.before,
                style.before_left_brace.array_initializer_left_brace,
            );
        }

        if let Some(initializer) = &mut tree.initializer {
            if style.other.after_comma {
                for element in initializer.elements.iter_mut().skip(1) {
                    pad_prefix(&mut element.element, true);
                }
            }
            if starts_empty(initializer) {
                for element in &mut initializer.elements {
                    pad_prefix(
                        &mut element.element,
                        style.within.empty_array_initializer_braces,
                    );
                }
            } else {
                pad_list(
                    &mut initializer.elements,
                    style.within.array_initializer_braces,
                    style.other.after_comma,
                    Some(style.other.before_comma),
                );
            }
        }
        walk_new_array(self, tree, cursor)
    }

    fn visit_array_access(&mut self, mut tree: ArrayAccess, cursor: &Cursor) -> VisitResult<J> {
        let within = self.style.within.brackets;
        if let J::ArrayDimension(dimension) = &mut tree.dimension {
            let dimension = Arc::make_mut(dimension);
            pad_prefix(&mut dimension.index.element, within);
            pad(&mut dimension.index.after, within);
        }
        walk_array_access(self, tree, cursor)
    }

    fn visit_parentheses(&mut self, mut tree: Parentheses, cursor: &Cursor) -> VisitResult<J> {
        let within = self.style.within.grouping_parentheses;
        pad_prefix(&mut tree.tree.element, within);
        pad(&mut tree.tree.after, within);
        walk_parentheses(self, tree, cursor)
    }

    fn visit_type_cast(&mut self, mut tree: TypeCast, cursor: &Cursor) -> VisitResult<J> {
        let style = &self.style;
        if let J::ControlParentheses(clazz) = &mut tree.clazz {
            let clazz = Arc::make_mut(clazz);
            pad_prefix(&mut clazz.tree.element, style.within.type_cast_parentheses);
            pad_after(&mut clazz.tree.after, style.within.type_cast_parentheses);
        }
        pad_prefix(&mut tree.expression, style.other.after_type_cast);
        walk_type_cast(self, tree, cursor)
    }

    fn visit_parameterized_type(
        &mut self,
        mut tree: ParameterizedType,
        cursor: &Cursor,
    ) -> VisitResult<J> {
        let style = &self.style;
        if let Some(type_parameters) = &mut tree.type_parameters {
            pad(
                &mut type_parameters.before,
                style.type_arguments.before_opening_angle_bracket,
            );
            if !starts_empty(type_parameters) {
                pad_list(
                    &mut type_parameters.elements,
                    style.within.angle_brackets,
                    style.type_arguments.after_comma,
                    None,
                );
            }
        }
        walk_parameterized_type(self, tree, cursor)
    }

    fn visit_ternary(&mut self, mut tree: Ternary, cursor: &Cursor) -> VisitResult<J> {
        let ternary = &self.style.ternary_operator;
        pad(&mut tree.true_part.before, ternary.before_question_mark);
        pad_prefix(&mut tree.true_part.element, ternary.after_question_mark);
        pad(&mut tree.false_part.before, ternary.before_colon);
        pad_prefix(&mut tree.false_part.element, ternary.after_colon);
        walk_ternary(self, tree, cursor)
    }

    fn visit_new_class(&mut self, mut tree: NewClass, cursor: &Cursor) -> VisitResult<J> {
        let style = &self.style;
        pad(&mut tree.arguments.before, style.before_parentheses.method_call);
        pad_separators(
            &mut tree.arguments.elements,
            style.other.after_comma,
            style.other.before_comma,
        );
        walk_new_class(self, tree, cursor)
    }

    fn visit_enum_value(&mut self, mut tree: EnumValue, cursor: &Cursor) -> VisitResult<J> {
        if let Some(arguments) = &mut tree.arguments {
            pad_separators(
                &mut arguments.elements,
                self.style.other.after_comma,
                self.style.other.before_comma,
            );
        }
        walk_enum_value(self, tree, cursor)
    }

    fn visit_type_parameter(&mut self, mut tree: TypeParameter, cursor: &Cursor) -> VisitResult<J> {
        if let Some(bounds) = &mut tree.bounds {
            let around = self.style.type_parameters.around_type_bounds;
            pad_separators(&mut bounds.elements, around, around);
        }
        walk_type_parameter(self, tree, cursor)
    }
}

#[cfg(test)]
mod tests;
