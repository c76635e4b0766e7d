//! Compilation units, declarations and their parts.

use remold_types::{ClassKind, TypeId};

use crate::{Container, LeftPadded, ModifierKind, RightPadded, Space, TreeId, J};

#[derive(Clone, Debug, PartialEq)]
pub struct CompilationUnit {
    pub id: TreeId,
    pub prefix: Space,
    /// `package a.b` with the space before its `;`.
    pub package: Option<RightPadded<J>>,
    /// Each import with the space before its `;`.
    pub imports: Vec<RightPadded<J>>,
    pub classes: Vec<J>,
    /// Trailing whitespace and comments after the last declaration.
    pub eof: Space,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Package {
    pub id: TreeId,
    pub prefix: Space,
    pub annotations: Vec<J>,
    pub expression: J,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Import {
    pub id: TreeId,
    pub prefix: Space,
    /// `static` keyword, with the space before it.
    pub is_static: LeftPadded<bool>,
    pub qualid: J,
}

/// The `class`/`interface`/`enum`/`@interface` keyword.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassDeclarationKind {
    pub prefix: Space,
    pub kind: ClassKind,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClassDeclaration {
    pub id: TreeId,
    pub prefix: Space,
    pub leading_annotations: Vec<J>,
    pub modifiers: Vec<J>,
    pub kind: ClassDeclarationKind,
    pub name: J,
    pub type_parameters: Option<Container<J>>,
    pub extends: Option<LeftPadded<J>>,
    pub implements: Option<Container<J>>,
    pub body: J,
    pub ty: Option<TypeId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Modifier {
    pub id: TreeId,
    pub prefix: Space,
    pub keyword: ModifierKind,
}

impl Modifier {
    pub fn build(prefix: Space, keyword: ModifierKind) -> Self {
        Self {
            id: TreeId::next(),
            prefix,
            keyword,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub id: TreeId,
    pub prefix: Space,
    pub annotation_type: J,
    pub arguments: Option<Container<J>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MethodDeclaration {
    pub id: TreeId,
    pub prefix: Space,
    pub leading_annotations: Vec<J>,
    pub modifiers: Vec<J>,
    pub type_parameters: Option<Container<J>>,
    /// `None` for constructors.
    pub return_type: Option<J>,
    pub name: J,
    pub parameters: Container<J>,
    pub throws: Option<Container<J>>,
    /// `None` for abstract and interface methods.
    pub body: Option<J>,
    pub method_type: Option<TypeId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableDeclarations {
    pub id: TreeId,
    pub prefix: Space,
    pub leading_annotations: Vec<J>,
    pub modifiers: Vec<J>,
    /// `None` for untyped lambda parameters.
    pub type_expr: Option<J>,
    /// Space before `...` of a varargs parameter.
    pub varargs: Option<Space>,
    pub variables: Vec<RightPadded<J>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedVariable {
    pub id: TreeId,
    pub prefix: Space,
    pub name: J,
    pub initializer: Option<LeftPadded<J>>,
    pub variable_type: Option<TypeId>,
}

/// The constants at the top of an enum body.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueSet {
    pub id: TreeId,
    pub prefix: Space,
    pub enums: Vec<RightPadded<J>>,
    pub terminated_with_semicolon: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub id: TreeId,
    pub prefix: Space,
    pub name: J,
    pub arguments: Option<Container<J>>,
}
