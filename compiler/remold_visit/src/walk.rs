//! Default traversal for every node kind.
//!
//! Each `walk_*` function visits the node's spaces and children in source
//! order, tagging every space with its [`SpaceLocation`] and routing padded
//! elements and containers through the visitor's `visit_right_padded`,
//! `visit_left_padded` and `visit_container`.

use remold_tree::{
    Annotation, ArrayAccess, ArrayDimension, ArrayType, Assignment, AssignmentOperation, Binary,
    Block, Break, Case, Catch, ClassDeclaration, CompilationUnit, Container, ContainerLocation,
    Continue, ControlParentheses, DoWhileLoop, Else, Empty, EnumValue, EnumValueSet, FieldAccess,
    ForControl, ForEachControl, ForEachLoop, ForLoop, Identifier, If, Import, Label, Lambda,
    LeftPadded, LeftPaddedLocation, Literal, MethodDeclaration, MethodInvocation, Modifier,
    MultiCatch, NamedVariable, NewArray, NewClass, Package, ParameterizedType, Parentheses,
    PrimitiveType, Return, RightPadded, RightPaddedLocation, SpaceLocation, Switch, Ternary,
    Throw, Try, TypeCast, TypeParameter, Unary, VariableDeclarations, WhileLoop, Wildcard, J,
};

use crate::{Cursor, CursorValue, JavaVisitor, VisitResult};

// === Shared helpers ===

fn visit_all<V: JavaVisitor + ?Sized>(
    v: &mut V,
    trees: Vec<J>,
    cursor: &Cursor,
) -> VisitResult<Vec<J>> {
    trees.into_iter().map(|tree| v.visit(tree, cursor)).collect()
}

fn visit_opt<V: JavaVisitor + ?Sized>(
    v: &mut V,
    tree: Option<J>,
    cursor: &Cursor,
) -> VisitResult<Option<J>> {
    tree.map(|tree| v.visit(tree, cursor)).transpose()
}

fn visit_padded_all<V: JavaVisitor + ?Sized>(
    v: &mut V,
    elements: Vec<RightPadded<J>>,
    loc: RightPaddedLocation,
    cursor: &Cursor,
) -> VisitResult<Vec<RightPadded<J>>> {
    elements
        .into_iter()
        .map(|padded| v.visit_right_padded(padded, loc, cursor))
        .collect()
}

fn visit_container_opt<V: JavaVisitor + ?Sized>(
    v: &mut V,
    container: Option<Container<J>>,
    loc: ContainerLocation,
    cursor: &Cursor,
) -> VisitResult<Option<Container<J>>> {
    container
        .map(|container| v.visit_container(container, loc, cursor))
        .transpose()
}

// === Padding ===

/// Visit the element, then the space after it, on a right-padded frame.
pub fn walk_right_padded<V: JavaVisitor + ?Sized>(
    v: &mut V,
    right: RightPadded<J>,
    loc: RightPaddedLocation,
    cursor: &Cursor,
) -> VisitResult<RightPadded<J>> {
    let frame = cursor.push(CursorValue::RightPadded {
        location: loc,
        element: right.element.clone(),
    });
    let element = v.visit(right.element, &frame)?;
    let after = v.visit_space(right.after, loc.after_location(), &frame)?;
    Ok(RightPadded::new(element, after))
}

/// Visit the space before, then the element, on a left-padded frame.
pub fn walk_left_padded<V: JavaVisitor + ?Sized>(
    v: &mut V,
    left: LeftPadded<J>,
    loc: LeftPaddedLocation,
    cursor: &Cursor,
) -> VisitResult<LeftPadded<J>> {
    let frame = cursor.push(CursorValue::LeftPadded { location: loc });
    let before = v.visit_space(left.before, loc.before_location(), &frame)?;
    let element = v.visit(left.element, &frame)?;
    Ok(LeftPadded::new(before, element))
}

/// Left-padded operator or keyword: only the space before it is visited.
pub fn walk_left_padded_keyword<V: JavaVisitor + ?Sized, T>(
    v: &mut V,
    left: LeftPadded<T>,
    loc: LeftPaddedLocation,
    cursor: &Cursor,
) -> VisitResult<LeftPadded<T>> {
    let frame = cursor.push(CursorValue::LeftPadded { location: loc });
    let before = v.visit_space(left.before, loc.before_location(), &frame)?;
    Ok(LeftPadded::new(before, left.element))
}

/// Visit the space before the container, then each padded element.
pub fn walk_container<V: JavaVisitor + ?Sized>(
    v: &mut V,
    container: Container<J>,
    loc: ContainerLocation,
    cursor: &Cursor,
) -> VisitResult<Container<J>> {
    let frame = cursor.push(CursorValue::Container {
        location: loc,
        container: container.clone(),
    });
    let before = v.visit_space(container.before, loc.before_location(), &frame)?;
    let elements = visit_padded_all(v, container.elements, loc.element_location(), &frame)?;
    Ok(Container::new(before, elements))
}

// === Declarations ===

pub fn walk_compilation_unit<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: CompilationUnit,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::CompilationUnitPrefix, cursor)?;
    tree.package = tree
        .package
        .map(|package| v.visit_right_padded(package, RightPaddedLocation::Package, cursor))
        .transpose()?;
    tree.imports = visit_padded_all(v, tree.imports, RightPaddedLocation::Import, cursor)?;
    tree.classes = visit_all(v, tree.classes, cursor)?;
    tree.eof = v.visit_space(tree.eof, SpaceLocation::CompilationUnitEof, cursor)?;
    Ok(tree.into())
}

pub fn walk_package<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: Package,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::PackagePrefix, cursor)?;
    tree.annotations = visit_all(v, tree.annotations, cursor)?;
    tree.expression = v.visit(tree.expression, cursor)?;
    Ok(tree.into())
}

pub fn walk_import<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: Import,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::ImportPrefix, cursor)?;
    tree.is_static =
        walk_left_padded_keyword(v, tree.is_static, LeftPaddedLocation::StaticImport, cursor)?;
    tree.qualid = v.visit(tree.qualid, cursor)?;
    Ok(tree.into())
}

pub fn walk_class_declaration<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: ClassDeclaration,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::ClassDeclarationPrefix, cursor)?;
    tree.leading_annotations = visit_all(v, tree.leading_annotations, cursor)?;
    tree.modifiers = visit_all(v, tree.modifiers, cursor)?;
    tree.kind.prefix = v.visit_space(tree.kind.prefix, SpaceLocation::ClassKind, cursor)?;
    tree.name = v.visit(tree.name, cursor)?;
    tree.type_parameters = visit_container_opt(
        v,
        tree.type_parameters,
        ContainerLocation::TypeParameters,
        cursor,
    )?;
    tree.extends = tree
        .extends
        .map(|extends| v.visit_left_padded(extends, LeftPaddedLocation::Extends, cursor))
        .transpose()?;
    tree.implements =
        visit_container_opt(v, tree.implements, ContainerLocation::Implements, cursor)?;
    tree.body = v.visit(tree.body, cursor)?;
    Ok(tree.into())
}

pub fn walk_modifier<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: Modifier,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::ModifierPrefix, cursor)?;
    Ok(tree.into())
}

pub fn walk_annotation<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: Annotation,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::AnnotationPrefix, cursor)?;
    tree.annotation_type = v.visit(tree.annotation_type, cursor)?;
    tree.arguments =
        visit_container_opt(v, tree.arguments, ContainerLocation::AnnotationArguments, cursor)?;
    Ok(tree.into())
}

pub fn walk_method_declaration<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: MethodDeclaration,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::MethodDeclarationPrefix, cursor)?;
    tree.leading_annotations = visit_all(v, tree.leading_annotations, cursor)?;
    tree.modifiers = visit_all(v, tree.modifiers, cursor)?;
    tree.type_parameters = visit_container_opt(
        v,
        tree.type_parameters,
        ContainerLocation::TypeParameters,
        cursor,
    )?;
    tree.return_type = visit_opt(v, tree.return_type, cursor)?;
    tree.name = v.visit(tree.name, cursor)?;
    tree.parameters = v.visit_container(
        tree.parameters,
        ContainerLocation::MethodDeclarationParameters,
        cursor,
    )?;
    tree.throws = visit_container_opt(v, tree.throws, ContainerLocation::Throws, cursor)?;
    tree.body = visit_opt(v, tree.body, cursor)?;
    Ok(tree.into())
}

pub fn walk_variable_declarations<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: VariableDeclarations,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::VariableDeclarationsPrefix, cursor)?;
    tree.leading_annotations = visit_all(v, tree.leading_annotations, cursor)?;
    tree.modifiers = visit_all(v, tree.modifiers, cursor)?;
    tree.type_expr = visit_opt(v, tree.type_expr, cursor)?;
    tree.varargs = tree
        .varargs
        .map(|varargs| v.visit_space(varargs, SpaceLocation::Varargs, cursor))
        .transpose()?;
    tree.variables =
        visit_padded_all(v, tree.variables, RightPaddedLocation::NamedVariable, cursor)?;
    Ok(tree.into())
}

pub fn walk_named_variable<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: NamedVariable,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::VariablePrefix, cursor)?;
    tree.name = v.visit(tree.name, cursor)?;
    tree.initializer = tree
        .initializer
        .map(|init| v.visit_left_padded(init, LeftPaddedLocation::VariableInitializer, cursor))
        .transpose()?;
    Ok(tree.into())
}

pub fn walk_enum_value_set<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: EnumValueSet,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::EnumValueSetPrefix, cursor)?;
    tree.enums = visit_padded_all(v, tree.enums, RightPaddedLocation::EnumValue, cursor)?;
    Ok(tree.into())
}

pub fn walk_enum_value<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: EnumValue,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::EnumValuePrefix, cursor)?;
    tree.name = v.visit(tree.name, cursor)?;
    tree.arguments =
        visit_container_opt(v, tree.arguments, ContainerLocation::NewClassArguments, cursor)?;
    Ok(tree.into())
}

// === Statements ===

pub fn walk_block<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: Block,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::BlockPrefix, cursor)?;
    tree.is_static = tree
        .is_static
        .map(|after| v.visit_space(after, SpaceLocation::StaticInitSuffix, cursor))
        .transpose()?;
    tree.statements =
        visit_padded_all(v, tree.statements, RightPaddedLocation::BlockStatement, cursor)?;
    tree.end = v.visit_space(tree.end, SpaceLocation::BlockEnd, cursor)?;
    Ok(tree.into())
}

pub fn walk_control_parentheses<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: ControlParentheses,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::ControlParenthesesPrefix, cursor)?;
    tree.tree = v.visit_right_padded(tree.tree, RightPaddedLocation::Parentheses, cursor)?;
    Ok(tree.into())
}

pub fn walk_if<V: JavaVisitor + ?Sized>(v: &mut V, mut tree: If, cursor: &Cursor) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::IfPrefix, cursor)?;
    tree.condition = v.visit(tree.condition, cursor)?;
    tree.then_part = v.visit_right_padded(tree.then_part, RightPaddedLocation::IfThen, cursor)?;
    tree.else_part = visit_opt(v, tree.else_part, cursor)?;
    Ok(tree.into())
}

pub fn walk_else<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: Else,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::ElsePrefix, cursor)?;
    tree.body = v.visit_right_padded(tree.body, RightPaddedLocation::IfElse, cursor)?;
    Ok(tree.into())
}

pub fn walk_while_loop<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: WhileLoop,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::WhilePrefix, cursor)?;
    tree.condition = v.visit(tree.condition, cursor)?;
    tree.body = v.visit_right_padded(tree.body, RightPaddedLocation::WhileBody, cursor)?;
    Ok(tree.into())
}

pub fn walk_do_while_loop<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: DoWhileLoop,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::DoWhilePrefix, cursor)?;
    tree.body = v.visit_right_padded(tree.body, RightPaddedLocation::WhileBody, cursor)?;
    tree.while_condition = v.visit_left_padded(
        tree.while_condition,
        LeftPaddedLocation::WhileCondition,
        cursor,
    )?;
    Ok(tree.into())
}

pub fn walk_for_loop<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: ForLoop,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::ForPrefix, cursor)?;
    tree.control = v.visit(tree.control, cursor)?;
    tree.body = v.visit_right_padded(tree.body, RightPaddedLocation::ForBody, cursor)?;
    Ok(tree.into())
}

pub fn walk_for_control<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: ForControl,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::ForControlPrefix, cursor)?;
    tree.init = visit_padded_all(v, tree.init, RightPaddedLocation::ForInit, cursor)?;
    tree.condition =
        v.visit_right_padded(tree.condition, RightPaddedLocation::ForCondition, cursor)?;
    tree.update = visit_padded_all(v, tree.update, RightPaddedLocation::ForUpdate, cursor)?;
    Ok(tree.into())
}

pub fn walk_for_each_loop<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: ForEachLoop,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::ForEachLoopPrefix, cursor)?;
    tree.control = v.visit(tree.control, cursor)?;
    tree.body = v.visit_right_padded(tree.body, RightPaddedLocation::ForBody, cursor)?;
    Ok(tree.into())
}

pub fn walk_for_each_control<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: ForEachControl,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::ForEachControlPrefix, cursor)?;
    tree.variable =
        v.visit_right_padded(tree.variable, RightPaddedLocation::ForEachVariable, cursor)?;
    tree.iterable =
        v.visit_right_padded(tree.iterable, RightPaddedLocation::ForEachIterable, cursor)?;
    Ok(tree.into())
}

pub fn walk_try<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: Try,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::TryPrefix, cursor)?;
    tree.body = v.visit(tree.body, cursor)?;
    tree.catches = visit_all(v, tree.catches, cursor)?;
    tree.finally = tree
        .finally
        .map(|finally| v.visit_left_padded(finally, LeftPaddedLocation::TryFinally, cursor))
        .transpose()?;
    Ok(tree.into())
}

pub fn walk_catch<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: Catch,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::CatchPrefix, cursor)?;
    tree.parameter = v.visit(tree.parameter, cursor)?;
    tree.body = v.visit(tree.body, cursor)?;
    Ok(tree.into())
}

pub fn walk_multi_catch<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: MultiCatch,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::MultiCatchPrefix, cursor)?;
    tree.alternatives =
        visit_padded_all(v, tree.alternatives, RightPaddedLocation::CatchAlternative, cursor)?;
    Ok(tree.into())
}

pub fn walk_switch<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: Switch,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::SwitchPrefix, cursor)?;
    tree.selector = v.visit(tree.selector, cursor)?;
    tree.cases = v.visit(tree.cases, cursor)?;
    Ok(tree.into())
}

pub fn walk_case<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: Case,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::CasePrefix, cursor)?;
    tree.expression = visit_opt(v, tree.expression, cursor)?;
    tree.statements = v.visit_container(tree.statements, ContainerLocation::Case, cursor)?;
    Ok(tree.into())
}

pub fn walk_label<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: Label,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::LabelPrefix, cursor)?;
    tree.label = v.visit_right_padded(tree.label, RightPaddedLocation::Label, cursor)?;
    tree.statement = v.visit(tree.statement, cursor)?;
    Ok(tree.into())
}

pub fn walk_return<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: Return,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::ReturnPrefix, cursor)?;
    tree.expression = visit_opt(v, tree.expression, cursor)?;
    Ok(tree.into())
}

pub fn walk_throw<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: Throw,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::ThrowPrefix, cursor)?;
    tree.exception = v.visit(tree.exception, cursor)?;
    Ok(tree.into())
}

pub fn walk_break<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: Break,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::BreakPrefix, cursor)?;
    tree.label = visit_opt(v, tree.label, cursor)?;
    Ok(tree.into())
}

pub fn walk_continue<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: Continue,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::ContinuePrefix, cursor)?;
    tree.label = visit_opt(v, tree.label, cursor)?;
    Ok(tree.into())
}

pub fn walk_empty<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: Empty,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::EmptyPrefix, cursor)?;
    Ok(tree.into())
}

// === Expressions ===

pub fn walk_identifier<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: Identifier,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::IdentifierPrefix, cursor)?;
    Ok(tree.into())
}

pub fn walk_literal<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: Literal,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::LiteralPrefix, cursor)?;
    Ok(tree.into())
}

pub fn walk_field_access<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: FieldAccess,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::FieldAccessPrefix, cursor)?;
    tree.target = v.visit(tree.target, cursor)?;
    tree.name = v.visit_left_padded(tree.name, LeftPaddedLocation::FieldAccessName, cursor)?;
    Ok(tree.into())
}

pub fn walk_method_invocation<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: MethodInvocation,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::MethodInvocationPrefix, cursor)?;
    tree.select = tree
        .select
        .map(|select| v.visit_right_padded(select, RightPaddedLocation::MethodSelect, cursor))
        .transpose()?;
    tree.type_parameters = visit_container_opt(
        v,
        tree.type_parameters,
        ContainerLocation::TypeParameters,
        cursor,
    )?;
    tree.name = v.visit(tree.name, cursor)?;
    tree.arguments = v.visit_container(
        tree.arguments,
        ContainerLocation::MethodInvocationArguments,
        cursor,
    )?;
    Ok(tree.into())
}

pub fn walk_new_class<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: NewClass,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::NewClassPrefix, cursor)?;
    tree.clazz = v.visit(tree.clazz, cursor)?;
    tree.arguments =
        v.visit_container(tree.arguments, ContainerLocation::NewClassArguments, cursor)?;
    tree.body = visit_opt(v, tree.body, cursor)?;
    Ok(tree.into())
}

pub fn walk_new_array<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: NewArray,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::NewArrayPrefix, cursor)?;
    tree.type_expr = visit_opt(v, tree.type_expr, cursor)?;
    tree.dimensions = visit_all(v, tree.dimensions, cursor)?;
    tree.initializer =
        visit_container_opt(v, tree.initializer, ContainerLocation::NewArrayInitializer, cursor)?;
    Ok(tree.into())
}

pub fn walk_array_dimension<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: ArrayDimension,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::DimensionPrefix, cursor)?;
    tree.index = v.visit_right_padded(tree.index, RightPaddedLocation::ArrayIndex, cursor)?;
    Ok(tree.into())
}

pub fn walk_array_access<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: ArrayAccess,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::ArrayAccessPrefix, cursor)?;
    tree.indexed = v.visit(tree.indexed, cursor)?;
    tree.dimension = v.visit(tree.dimension, cursor)?;
    Ok(tree.into())
}

pub fn walk_binary<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: Binary,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::BinaryPrefix, cursor)?;
    tree.left = v.visit(tree.left, cursor)?;
    tree.operator =
        walk_left_padded_keyword(v, tree.operator, LeftPaddedLocation::BinaryOperator, cursor)?;
    tree.right = v.visit(tree.right, cursor)?;
    Ok(tree.into())
}

pub fn walk_unary<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: Unary,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::UnaryPrefix, cursor)?;
    // Source order: `i++` has its operator after the operand.
    if tree.operator.element.is_postfix() {
        tree.expression = v.visit(tree.expression, cursor)?;
        tree.operator =
            walk_left_padded_keyword(v, tree.operator, LeftPaddedLocation::UnaryOperator, cursor)?;
    } else {
        tree.operator =
            walk_left_padded_keyword(v, tree.operator, LeftPaddedLocation::UnaryOperator, cursor)?;
        tree.expression = v.visit(tree.expression, cursor)?;
    }
    Ok(tree.into())
}

pub fn walk_assignment<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: Assignment,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::AssignmentPrefix, cursor)?;
    tree.variable = v.visit(tree.variable, cursor)?;
    tree.assignment =
        v.visit_left_padded(tree.assignment, LeftPaddedLocation::Assignment, cursor)?;
    Ok(tree.into())
}

pub fn walk_assignment_operation<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: AssignmentOperation,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::AssignmentOperationPrefix, cursor)?;
    tree.variable = v.visit(tree.variable, cursor)?;
    tree.operator = walk_left_padded_keyword(
        v,
        tree.operator,
        LeftPaddedLocation::AssignmentOperationOperator,
        cursor,
    )?;
    tree.assignment = v.visit(tree.assignment, cursor)?;
    Ok(tree.into())
}

pub fn walk_parentheses<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: Parentheses,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::ParenthesesPrefix, cursor)?;
    tree.tree = v.visit_right_padded(tree.tree, RightPaddedLocation::Parentheses, cursor)?;
    Ok(tree.into())
}

pub fn walk_type_cast<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: TypeCast,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::TypeCastPrefix, cursor)?;
    tree.clazz = v.visit(tree.clazz, cursor)?;
    tree.expression = v.visit(tree.expression, cursor)?;
    Ok(tree.into())
}

pub fn walk_ternary<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: Ternary,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::TernaryPrefix, cursor)?;
    tree.condition = v.visit(tree.condition, cursor)?;
    tree.true_part = v.visit_left_padded(tree.true_part, LeftPaddedLocation::TernaryTrue, cursor)?;
    tree.false_part =
        v.visit_left_padded(tree.false_part, LeftPaddedLocation::TernaryFalse, cursor)?;
    Ok(tree.into())
}

pub fn walk_lambda<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: Lambda,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::LambdaPrefix, cursor)?;
    tree.parameters.prefix = v.visit_space(
        tree.parameters.prefix,
        SpaceLocation::LambdaParametersPrefix,
        cursor,
    )?;
    tree.parameters.parameters = visit_padded_all(
        v,
        tree.parameters.parameters,
        RightPaddedLocation::LambdaParameter,
        cursor,
    )?;
    tree.arrow = v.visit_space(tree.arrow, SpaceLocation::LambdaArrowPrefix, cursor)?;
    tree.body = v.visit(tree.body, cursor)?;
    Ok(tree.into())
}

// === Types ===

pub fn walk_primitive<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: PrimitiveType,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::PrimitivePrefix, cursor)?;
    Ok(tree.into())
}

pub fn walk_array_type<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: ArrayType,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::ArrayTypePrefix, cursor)?;
    tree.element_type = v.visit(tree.element_type, cursor)?;
    tree.dimension.before =
        v.visit_space(tree.dimension.before, SpaceLocation::DimensionPrefix, cursor)?;
    tree.dimension.element =
        v.visit_space(tree.dimension.element, SpaceLocation::DimensionSuffix, cursor)?;
    Ok(tree.into())
}

pub fn walk_parameterized_type<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: ParameterizedType,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::ParameterizedTypePrefix, cursor)?;
    tree.clazz = v.visit(tree.clazz, cursor)?;
    tree.type_parameters = visit_container_opt(
        v,
        tree.type_parameters,
        ContainerLocation::TypeParameters,
        cursor,
    )?;
    Ok(tree.into())
}

pub fn walk_type_parameter<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: TypeParameter,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::TypeParameterPrefix, cursor)?;
    tree.annotations = visit_all(v, tree.annotations, cursor)?;
    tree.name = v.visit(tree.name, cursor)?;
    tree.bounds = visit_container_opt(v, tree.bounds, ContainerLocation::TypeBounds, cursor)?;
    Ok(tree.into())
}

pub fn walk_wildcard<V: JavaVisitor + ?Sized>(
    v: &mut V,
    mut tree: Wildcard,
    cursor: &Cursor,
) -> VisitResult<J> {
    tree.prefix = v.visit_space(tree.prefix, SpaceLocation::WildcardPrefix, cursor)?;
    tree.bound = tree
        .bound
        .map(|bound| walk_left_padded_keyword(v, bound, LeftPaddedLocation::WildcardBound, cursor))
        .transpose()?;
    tree.bounded_type = visit_opt(v, tree.bounded_type, cursor)?;
    Ok(tree.into())
}
