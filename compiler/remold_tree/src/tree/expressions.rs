//! Expressions.

use remold_types::{Primitive, TypeId};

use crate::{
    AssignmentOperator, BinaryOperator, Container, LeftPadded, RightPadded, Space, TreeId,
    UnaryOperator, J,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Identifier {
    pub id: TreeId,
    pub prefix: Space,
    pub simple_name: String,
    pub ty: Option<TypeId>,
}

impl Identifier {
    pub fn build(prefix: Space, simple_name: impl Into<String>) -> Self {
        Self {
            id: TreeId::next(),
            prefix,
            simple_name: simple_name.into(),
            ty: None,
        }
    }

    #[must_use]
    pub fn with_type(mut self, ty: Option<TypeId>) -> Self {
        self.ty = ty;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Literal {
    pub id: TreeId,
    pub prefix: Space,
    /// Source text, quotes and suffixes included.
    pub value_source: String,
    pub kind: Primitive,
}

impl Literal {
    pub fn build(prefix: Space, value_source: impl Into<String>, kind: Primitive) -> Self {
        Self {
            id: TreeId::next(),
            prefix,
            value_source: value_source.into(),
            kind,
        }
    }
}

/// `target.name`; also the qualified names of packages and imports.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldAccess {
    pub id: TreeId,
    pub prefix: Space,
    pub target: J,
    /// Space before the `.`, then the name.
    pub name: LeftPadded<J>,
    pub ty: Option<TypeId>,
}

impl FieldAccess {
    /// Dotted name, e.g. `java.util.List`, if every segment is a name.
    pub fn qualified_name(&self) -> Option<String> {
        let mut target = qualified_name(&self.target)?;
        let J::Identifier(name) = &self.name.element else {
            return None;
        };
        target.push('.');
        target.push_str(&name.simple_name);
        Some(target)
    }
}

/// Dotted name of an identifier or field access chain.
pub fn qualified_name(tree: &J) -> Option<String> {
    match tree {
        J::Identifier(ident) => Some(ident.simple_name.clone()),
        J::FieldAccess(access) => access.qualified_name(),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MethodInvocation {
    pub id: TreeId,
    pub prefix: Space,
    /// Receiver with the space before the `.`.
    pub select: Option<RightPadded<J>>,
    pub type_parameters: Option<Container<J>>,
    pub name: J,
    pub arguments: Container<J>,
    pub method_type: Option<TypeId>,
}

impl MethodInvocation {
    pub fn simple_name(&self) -> &str {
        match &self.name {
            J::Identifier(ident) => &ident.simple_name,
            _ => "",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewClass {
    pub id: TreeId,
    pub prefix: Space,
    pub clazz: J,
    pub arguments: Container<J>,
    /// Anonymous class body.
    pub body: Option<J>,
    pub constructor_type: Option<TypeId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewArray {
    pub id: TreeId,
    pub prefix: Space,
    pub type_expr: Option<J>,
    pub dimensions: Vec<J>,
    /// `{a, b}`.
    pub initializer: Option<Container<J>>,
}

/// `[index]` of an array creation or access.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayDimension {
    pub id: TreeId,
    pub prefix: Space,
    pub index: RightPadded<J>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArrayAccess {
    pub id: TreeId,
    pub prefix: Space,
    pub indexed: J,
    pub dimension: J,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Binary {
    pub id: TreeId,
    pub prefix: Space,
    pub left: J,
    pub operator: LeftPadded<BinaryOperator>,
    pub right: J,
    pub ty: Option<TypeId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Unary {
    pub id: TreeId,
    pub prefix: Space,
    pub operator: LeftPadded<UnaryOperator>,
    pub expression: J,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    pub id: TreeId,
    pub prefix: Space,
    pub variable: J,
    pub assignment: LeftPadded<J>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AssignmentOperation {
    pub id: TreeId,
    pub prefix: Space,
    pub variable: J,
    pub operator: LeftPadded<AssignmentOperator>,
    pub assignment: J,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Parentheses {
    pub id: TreeId,
    pub prefix: Space,
    pub tree: RightPadded<J>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypeCast {
    pub id: TreeId,
    pub prefix: Space,
    /// [`ControlParentheses`](crate::ControlParentheses) around the type.
    pub clazz: J,
    pub expression: J,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ternary {
    pub id: TreeId,
    pub prefix: Space,
    pub condition: J,
    pub true_part: LeftPadded<J>,
    pub false_part: LeftPadded<J>,
}

/// Lambda parameters: `x`, `(x, y)`, `(int x)`, `()`.
#[derive(Clone, Debug, PartialEq)]
pub struct LambdaParameters {
    pub prefix: Space,
    pub parenthesized: bool,
    pub parameters: Vec<RightPadded<J>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Lambda {
    pub id: TreeId,
    pub prefix: Space,
    pub parameters: LambdaParameters,
    /// Space before `->`.
    pub arrow: Space,
    pub body: J,
}
