//! Interned type model for remold.
//!
//! A [`TypeRegistry`] hands out one canonical [`TypeId`] per structurally
//! distinct type descriptor: classes, parameterized types, type variables,
//! variables, methods, arrays and multi-catch unions, on top of a fixed set of
//! pre-allocated primitives. Millions of tree nodes can then refer to a small
//! number of descriptors by a 4-byte handle.
//!
//! # Modules
//!
//! - [`registry`]: arena, flyweight tables, build operations, cache clearing
//! - [`equality`]: structural (deep) equality
//! - [`fully_qualified`]: the capability shared by nameable types
//! - [`data`]: descriptor payloads and build specs

pub mod data;
mod display;
pub mod equality;
mod error;
mod flags;
pub mod fully_qualified;
mod id;
mod primitive;
pub mod registry;
mod shared;

pub use data::{
    ClassKind, ClassSpec, ClassType, CyclicType, GenericTypeVariable, MethodSpec, MethodType,
    ParameterizedType, ShallowClass, Signature, TypeData, VariableType,
};
pub use error::TypeError;
pub use flags::Flags;
pub use fully_qualified::{class_name, package_name, FullyQualified};
pub use id::TypeId;
pub use primitive::Primitive;
pub use registry::{owning_class_name, RegistryStats, TypeRegistry, OBJECT_NAME};
pub use shared::SharedTypeRegistry;
