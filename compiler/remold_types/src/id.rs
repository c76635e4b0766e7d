//! Type descriptor handle.
//!
//! Every descriptor the registry hands out lives in one append-only arena and
//! is referred to by a 32-bit `TypeId`. Identity of handles is identity of
//! descriptors: two equal `TypeId`s always denote the same canonical instance.
//!
//! # Layout
//!
//! - Primitives are pre-allocated at fixed indices `0..13`, in the order of
//!   [`Primitive::ALL`](crate::Primitive::ALL).
//! - `java.lang.Object` is pre-allocated at index 13 and seeded into the class
//!   table, so relaxed builds of that name always resolve to [`TypeId::OBJECT`].
//! - Everything else is allocated from [`TypeId::FIRST_DYNAMIC`] upwards.
//!
//! An arena slot only ever references slots allocated before it, so the
//! descriptor graph is a DAG and structural walks terminate.

use std::fmt;

use crate::Primitive;

/// A 32-bit handle into the type arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    // === Primitive Types (indices 0-12) ===

    /// `boolean`.
    pub const BOOLEAN: Self = Self(0);
    /// `byte`.
    pub const BYTE: Self = Self(1);
    /// `char`.
    pub const CHAR: Self = Self(2);
    /// `double`.
    pub const DOUBLE: Self = Self(3);
    /// `float`.
    pub const FLOAT: Self = Self(4);
    /// `int`.
    pub const INT: Self = Self(5);
    /// `long`.
    pub const LONG: Self = Self(6);
    /// `short`.
    pub const SHORT: Self = Self(7);
    /// `void`.
    pub const VOID: Self = Self(8);
    /// `String`, modelled as a primitive for literal typing.
    pub const STRING: Self = Self(9);
    /// The empty type of an unresolved expression.
    pub const NONE: Self = Self(10);
    /// The `*` wildcard.
    pub const WILDCARD: Self = Self(11);
    /// The type of the `null` literal.
    pub const NULL: Self = Self(12);

    // === Pre-seeded Classes ===

    /// `java.lang.Object`, the root of every supertype chain.
    pub const OBJECT: Self = Self(13);

    /// First index for dynamically allocated descriptors.
    pub const FIRST_DYNAMIC: u32 = 14;

    /// Number of pre-allocated primitives.
    pub const PRIMITIVE_COUNT: u32 = 13;

    /// Create a handle from a raw arena index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw arena index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Arena index as `usize`.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check if this handle names a pre-allocated primitive.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        self.0 < Self::PRIMITIVE_COUNT
    }

    /// Check if this handle was allocated after registry creation.
    #[inline]
    pub const fn is_dynamic(self) -> bool {
        self.0 >= Self::FIRST_DYNAMIC
    }

    /// The fixed handle for a primitive.
    #[inline]
    pub const fn of_primitive(primitive: Primitive) -> Self {
        Self(primitive as u32)
    }

    /// The primitive this handle names, if it is one.
    pub fn primitive(self) -> Option<Primitive> {
        Primitive::ALL.get(self.index()).copied()
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.primitive() {
            Some(p) => write!(f, "TypeId::{p:?}"),
            None if *self == Self::OBJECT => write!(f, "TypeId::OBJECT"),
            None => write!(f, "TypeId({})", self.0),
        }
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<Primitive> for TypeId {
    fn from(primitive: Primitive) -> Self {
        Self::of_primitive(primitive)
    }
}

// Handles are stored densely in member and parameter lists.
const _: () = assert!(std::mem::size_of::<TypeId>() == 4);

#[cfg(test)]
mod tests;
