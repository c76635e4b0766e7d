//! Primitive types and their source keywords.

use std::fmt;

/// A primitive (keyword-named) type.
///
/// The discriminant doubles as the arena index of the pre-allocated
/// descriptor, see [`TypeId::of_primitive`](crate::TypeId::of_primitive).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Primitive {
    Boolean,
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Void,
    String,
    None,
    Wildcard,
    Null,
}

impl Primitive {
    /// All primitives in arena order.
    pub const ALL: [Primitive; 13] = [
        Primitive::Boolean,
        Primitive::Byte,
        Primitive::Char,
        Primitive::Double,
        Primitive::Float,
        Primitive::Int,
        Primitive::Long,
        Primitive::Short,
        Primitive::Void,
        Primitive::String,
        Primitive::None,
        Primitive::Wildcard,
        Primitive::Null,
    ];

    /// Look up a primitive by its source keyword.
    ///
    /// `"String"` is treated as a primitive, `"*"` is the wildcard and the
    /// empty string is [`Primitive::None`].
    pub fn from_keyword(keyword: &str) -> Option<Primitive> {
        let primitive = match keyword {
            "boolean" => Primitive::Boolean,
            "byte" => Primitive::Byte,
            "char" => Primitive::Char,
            "double" => Primitive::Double,
            "float" => Primitive::Float,
            "int" => Primitive::Int,
            "long" => Primitive::Long,
            "short" => Primitive::Short,
            "void" => Primitive::Void,
            "String" => Primitive::String,
            "*" => Primitive::Wildcard,
            "null" => Primitive::Null,
            "" => Primitive::None,
            _ => return None,
        };
        Some(primitive)
    }

    /// The source keyword for this primitive.
    pub const fn keyword(self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Char => "char",
            Primitive::Double => "double",
            Primitive::Float => "float",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Short => "short",
            Primitive::Void => "void",
            Primitive::String => "String",
            Primitive::Wildcard => "*",
            Primitive::Null => "null",
            Primitive::None => "",
        }
    }

    /// Numeric primitives (the operands of arithmetic).
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Primitive::Byte
                | Primitive::Char
                | Primitive::Double
                | Primitive::Float
                | Primitive::Int
                | Primitive::Long
                | Primitive::Short
        )
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests;
