//! The lossless Java tree.
//!
//! [`J`] is a closed enum over every node kind. Each variant holds its node
//! behind an `Arc`, so cloning a subtree is cheap and an edit copies only the
//! nodes on the path to the change (`Arc::make_mut`).
//!
//! # Design
//!
//! Every node struct carries an `id` ([`TreeId`]) and a `prefix` ([`Space`]).
//! The shared accessors on `J` are generated by `define_tree!` from the
//! variant list, so adding a node kind is a one-line change here plus the
//! struct itself.
//!
//! Child slots are `J` rather than narrower types. The parser and the builders
//! are the only producers and keep the shape valid; visitors match on the
//! variant they expect.

mod declarations;
mod expressions;
mod statements;
mod types;

use std::sync::Arc;

pub use declarations::{
    Annotation, ClassDeclaration, ClassDeclarationKind, CompilationUnit, EnumValue, EnumValueSet,
    Import, MethodDeclaration, Modifier, NamedVariable, Package, VariableDeclarations,
};
pub use expressions::{
    qualified_name, ArrayAccess, ArrayDimension, Assignment, AssignmentOperation, Binary,
    FieldAccess, Identifier, Lambda, LambdaParameters, Literal, MethodInvocation, NewArray,
    NewClass, Parentheses, Ternary, TypeCast, Unary,
};
pub use statements::{
    Block, Break, Case, Catch, Continue, ControlParentheses, DoWhileLoop, Else, Empty,
    ForControl, ForEachControl, ForEachLoop, ForLoop, If, Label, MultiCatch, Return, Switch,
    Throw, Try, WhileLoop,
};
pub use types::{ArrayType, ParameterizedType, PrimitiveType, TypeParameter, Wildcard};

use crate::{Space, TreeId};

/// Generate the `J` enum and the accessors every node shares.
macro_rules! define_tree {
    ($($variant:ident($node:ident)),* $(,)?) => {
        /// A Java tree node.
        #[derive(Clone, Debug, PartialEq)]
        pub enum J {
            $($variant(Arc<$node>),)*
        }

        impl J {
            #[inline]
            pub fn id(&self) -> TreeId {
                match self {
                    $(J::$variant(node) => node.id,)*
                }
            }

            /// Whitespace and comments before the node's first token.
            #[inline]
            pub fn prefix(&self) -> &Space {
                match self {
                    $(J::$variant(node) => &node.prefix,)*
                }
            }

            /// Copy with a new prefix; identity is preserved.
            #[must_use]
            pub fn with_prefix(mut self, prefix: Space) -> J {
                match &mut self {
                    $(J::$variant(node) => Arc::make_mut(node).prefix = prefix,)*
                }
                self
            }

            pub const fn variant_name(&self) -> &'static str {
                match self {
                    $(J::$variant(_) => stringify!($variant),)*
                }
            }
        }

        $(
            impl From<$node> for J {
                fn from(node: $node) -> J {
                    J::$variant(Arc::new(node))
                }
            }
        )*
    };
}

define_tree! {
    Annotation(Annotation),
    ArrayAccess(ArrayAccess),
    ArrayDimension(ArrayDimension),
    ArrayType(ArrayType),
    Assignment(Assignment),
    AssignmentOperation(AssignmentOperation),
    Binary(Binary),
    Block(Block),
    Break(Break),
    Case(Case),
    Catch(Catch),
    ClassDeclaration(ClassDeclaration),
    CompilationUnit(CompilationUnit),
    Continue(Continue),
    ControlParentheses(ControlParentheses),
    DoWhileLoop(DoWhileLoop),
    Else(Else),
    Empty(Empty),
    EnumValue(EnumValue),
    EnumValueSet(EnumValueSet),
    FieldAccess(FieldAccess),
    ForControl(ForControl),
    ForEachControl(ForEachControl),
    ForEachLoop(ForEachLoop),
    ForLoop(ForLoop),
    Identifier(Identifier),
    If(If),
    Import(Import),
    Label(Label),
    Lambda(Lambda),
    Literal(Literal),
    MethodDeclaration(MethodDeclaration),
    MethodInvocation(MethodInvocation),
    Modifier(Modifier),
    MultiCatch(MultiCatch),
    NamedVariable(NamedVariable),
    NewArray(NewArray),
    NewClass(NewClass),
    Package(Package),
    ParameterizedType(ParameterizedType),
    Parentheses(Parentheses),
    Primitive(PrimitiveType),
    Return(Return),
    Switch(Switch),
    Ternary(Ternary),
    Throw(Throw),
    Try(Try),
    TypeCast(TypeCast),
    TypeParameter(TypeParameter),
    Unary(Unary),
    VariableDeclarations(VariableDeclarations),
    WhileLoop(WhileLoop),
    Wildcard(Wildcard),
}

impl J {
    /// `true` when both refer to the same node, however edited.
    #[inline]
    pub fn is_scope(&self, other: &J) -> bool {
        self.id() == other.id()
    }

    /// An empty placeholder node, used for `()` and omitted `for` sections.
    pub fn empty() -> J {
        Empty::build(Space::EMPTY).into()
    }

    pub fn is_empty_node(&self) -> bool {
        matches!(self, J::Empty(_))
    }

    /// Depth-first search for a node by id.
    pub fn find(&self, id: TreeId) -> Option<&J> {
        if self.id() == id {
            return Some(self);
        }
        let mut found = None;
        self.for_each_child(&mut |child| {
            if found.is_none() {
                found = child.find(id);
            }
        });
        found
    }

    /// Visit every direct child node in source order.
    pub fn for_each_child<'a>(&'a self, f: &mut dyn FnMut(&'a J)) {
        fn padded<'a, T: 'a>(
            items: impl IntoIterator<Item = &'a crate::RightPadded<T>>,
        ) -> impl Iterator<Item = &'a T> {
            items.into_iter().map(|padded| &padded.element)
        }

        match self {
            J::Annotation(n) => {
                f(&n.annotation_type);
                if let Some(args) = &n.arguments {
                    args.elements().for_each(&mut *f);
                }
            }
            J::ArrayAccess(n) => {
                f(&n.indexed);
                f(&n.dimension);
            }
            J::ArrayDimension(n) => f(&n.index.element),
            J::ArrayType(n) => f(&n.element_type),
            J::Assignment(n) => {
                f(&n.variable);
                f(&n.assignment.element);
            }
            J::AssignmentOperation(n) => {
                f(&n.variable);
                f(&n.assignment);
            }
            J::Binary(n) => {
                f(&n.left);
                f(&n.right);
            }
            J::Block(n) => padded(&n.statements).for_each(&mut *f),
            J::Break(n) => n.label.iter().for_each(&mut *f),
            J::Case(n) => {
                n.expression.iter().for_each(&mut *f);
                n.statements.elements().for_each(&mut *f);
            }
            J::Catch(n) => {
                f(&n.parameter);
                f(&n.body);
            }
            J::ClassDeclaration(n) => {
                n.leading_annotations.iter().for_each(&mut *f);
                n.modifiers.iter().for_each(&mut *f);
                f(&n.name);
                if let Some(params) = &n.type_parameters {
                    params.elements().for_each(&mut *f);
                }
                if let Some(extends) = &n.extends {
                    f(&extends.element);
                }
                if let Some(implements) = &n.implements {
                    implements.elements().for_each(&mut *f);
                }
                f(&n.body);
            }
            J::CompilationUnit(n) => {
                if let Some(package) = &n.package {
                    f(&package.element);
                }
                padded(&n.imports).for_each(&mut *f);
                n.classes.iter().for_each(&mut *f);
            }
            J::Continue(n) => n.label.iter().for_each(&mut *f),
            J::ControlParentheses(n) => f(&n.tree.element),
            J::DoWhileLoop(n) => {
                f(&n.body.element);
                f(&n.while_condition.element);
            }
            J::Else(n) => f(&n.body.element),
            J::Empty(_) | J::Identifier(_) | J::Literal(_) | J::Modifier(_) | J::Primitive(_) => {}
            J::EnumValue(n) => {
                f(&n.name);
                if let Some(args) = &n.arguments {
                    args.elements().for_each(&mut *f);
                }
            }
            J::EnumValueSet(n) => padded(&n.enums).for_each(&mut *f),
            J::FieldAccess(n) => {
                f(&n.target);
                f(&n.name.element);
            }
            J::ForControl(n) => {
                padded(&n.init).for_each(&mut *f);
                f(&n.condition.element);
                padded(&n.update).for_each(&mut *f);
            }
            J::ForEachControl(n) => {
                f(&n.variable.element);
                f(&n.iterable.element);
            }
            J::ForEachLoop(n) => {
                f(&n.control);
                f(&n.body.element);
            }
            J::ForLoop(n) => {
                f(&n.control);
                f(&n.body.element);
            }
            J::If(n) => {
                f(&n.condition);
                f(&n.then_part.element);
                n.else_part.iter().for_each(&mut *f);
            }
            J::Import(n) => f(&n.qualid),
            J::Label(n) => {
                f(&n.label.element);
                f(&n.statement);
            }
            J::Lambda(n) => {
                padded(&n.parameters.parameters).for_each(&mut *f);
                f(&n.body);
            }
            J::MethodDeclaration(n) => {
                n.leading_annotations.iter().for_each(&mut *f);
                n.modifiers.iter().for_each(&mut *f);
                if let Some(params) = &n.type_parameters {
                    params.elements().for_each(&mut *f);
                }
                n.return_type.iter().for_each(&mut *f);
                f(&n.name);
                n.parameters.elements().for_each(&mut *f);
                if let Some(throws) = &n.throws {
                    throws.elements().for_each(&mut *f);
                }
                n.body.iter().for_each(&mut *f);
            }
            J::MethodInvocation(n) => {
                if let Some(select) = &n.select {
                    f(&select.element);
                }
                if let Some(params) = &n.type_parameters {
                    params.elements().for_each(&mut *f);
                }
                f(&n.name);
                n.arguments.elements().for_each(&mut *f);
            }
            J::MultiCatch(n) => padded(&n.alternatives).for_each(&mut *f),
            J::NamedVariable(n) => {
                f(&n.name);
                if let Some(init) = &n.initializer {
                    f(&init.element);
                }
            }
            J::NewArray(n) => {
                n.type_expr.iter().for_each(&mut *f);
                n.dimensions.iter().for_each(&mut *f);
                if let Some(init) = &n.initializer {
                    init.elements().for_each(&mut *f);
                }
            }
            J::NewClass(n) => {
                f(&n.clazz);
                n.arguments.elements().for_each(&mut *f);
                n.body.iter().for_each(&mut *f);
            }
            J::Package(n) => {
                n.annotations.iter().for_each(&mut *f);
                f(&n.expression);
            }
            J::ParameterizedType(n) => {
                f(&n.clazz);
                if let Some(params) = &n.type_parameters {
                    params.elements().for_each(&mut *f);
                }
            }
            J::Parentheses(n) => f(&n.tree.element),
            J::Return(n) => n.expression.iter().for_each(&mut *f),
            J::Switch(n) => {
                f(&n.selector);
                f(&n.cases);
            }
            J::Ternary(n) => {
                f(&n.condition);
                f(&n.true_part.element);
                f(&n.false_part.element);
            }
            J::Throw(n) => f(&n.exception),
            J::Try(n) => {
                f(&n.body);
                n.catches.iter().for_each(&mut *f);
                if let Some(finally) = &n.finally {
                    f(&finally.element);
                }
            }
            J::TypeCast(n) => {
                f(&n.clazz);
                f(&n.expression);
            }
            J::TypeParameter(n) => {
                n.annotations.iter().for_each(&mut *f);
                f(&n.name);
                if let Some(bounds) = &n.bounds {
                    bounds.elements().for_each(&mut *f);
                }
            }
            J::Unary(n) => f(&n.expression),
            J::VariableDeclarations(n) => {
                n.leading_annotations.iter().for_each(&mut *f);
                n.modifiers.iter().for_each(&mut *f);
                n.type_expr.iter().for_each(&mut *f);
                padded(&n.variables).for_each(&mut *f);
            }
            J::WhileLoop(n) => {
                f(&n.condition);
                f(&n.body.element);
            }
            J::Wildcard(n) => n.bounded_type.iter().for_each(&mut *f),
        }
    }
}
