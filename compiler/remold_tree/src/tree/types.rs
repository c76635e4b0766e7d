//! Type expressions.

use remold_types::{Primitive, TypeId};

use crate::{Container, LeftPadded, Space, TreeId, WildcardBound, J};

#[derive(Clone, Debug, PartialEq)]
pub struct PrimitiveType {
    pub id: TreeId,
    pub prefix: Space,
    pub primitive: Primitive,
}

impl PrimitiveType {
    pub fn build(prefix: Space, primitive: Primitive) -> Self {
        Self {
            id: TreeId::next(),
            prefix,
            primitive,
        }
    }
}

/// `element[]`; multi-dimensional arrays nest.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayType {
    pub id: TreeId,
    pub prefix: Space,
    pub element_type: J,
    /// Space before `[`, then the space before `]`.
    pub dimension: LeftPadded<Space>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParameterizedType {
    pub id: TreeId,
    pub prefix: Space,
    pub clazz: J,
    /// `<...>`; an empty diamond holds a single [`Empty`](crate::Empty).
    pub type_parameters: Option<Container<J>>,
    pub ty: Option<TypeId>,
}

/// `T extends A & B` in a type parameter list.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeParameter {
    pub id: TreeId,
    pub prefix: Space,
    pub annotations: Vec<J>,
    pub name: J,
    /// Bounds after `extends`; `before` is the space before the keyword.
    pub bounds: Option<Container<J>>,
}

/// `?`, `? extends T`, `? super T`.
#[derive(Clone, Debug, PartialEq)]
pub struct Wildcard {
    pub id: TreeId,
    pub prefix: Space,
    pub bound: Option<LeftPadded<WildcardBound>>,
    pub bounded_type: Option<J>,
}
