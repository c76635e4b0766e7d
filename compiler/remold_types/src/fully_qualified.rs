//! The fully-qualified capability.
//!
//! Classes, shallow classes, cyclic placeholders, parameterized types and type
//! variables can all be asked the same questions (name, flags, members,
//! supertype...). [`FullyQualified`] is that question set. Parameterized types
//! forward every question to their raw type and type variables to their bound;
//! the forwarding is spelled out in each impl.
//!
//! Callers usually go through the handle-based helpers on [`TypeRegistry`],
//! which resolve the handle and dispatch.

use crate::data::{CyclicType, GenericTypeVariable, ParameterizedType, ShallowClass};
use crate::{ClassKind, ClassType, Flags, TypeData, TypeId, TypeRegistry};

/// Questions any nameable type can answer.
///
/// Methods take the registry so wrapping variants can resolve what they wrap.
pub trait FullyQualified {
    fn fully_qualified_name(&self, registry: &TypeRegistry) -> String;

    fn kind(&self, registry: &TypeRegistry) -> ClassKind;

    fn flags(&self, registry: &TypeRegistry) -> Flags;

    /// `true` when every flag in `test` is set.
    fn has_flags(&self, registry: &TypeRegistry, test: Flags) -> bool {
        self.flags(registry).has_all(test)
    }

    fn annotations(&self, registry: &TypeRegistry) -> Vec<TypeId>;

    fn interfaces(&self, registry: &TypeRegistry) -> Vec<TypeId>;

    fn members(&self, registry: &TypeRegistry) -> Vec<TypeId>;

    fn methods(&self, registry: &TypeRegistry) -> Vec<TypeId>;

    fn owning_class(&self, registry: &TypeRegistry) -> Option<TypeId>;

    fn supertype(&self, registry: &TypeRegistry) -> Option<TypeId>;

    /// Non-private members of every ancestor, immediate supertype first.
    fn visible_supertype_members(&self, registry: &TypeRegistry) -> Vec<TypeId>;
}

impl FullyQualified for ClassType {
    fn fully_qualified_name(&self, _: &TypeRegistry) -> String {
        self.fully_qualified_name.clone()
    }

    fn kind(&self, _: &TypeRegistry) -> ClassKind {
        self.kind
    }

    fn flags(&self, _: &TypeRegistry) -> Flags {
        self.flags
    }

    fn annotations(&self, _: &TypeRegistry) -> Vec<TypeId> {
        self.annotations.clone()
    }

    fn interfaces(&self, _: &TypeRegistry) -> Vec<TypeId> {
        self.interfaces.clone()
    }

    fn members(&self, _: &TypeRegistry) -> Vec<TypeId> {
        self.members.clone()
    }

    fn methods(&self, _: &TypeRegistry) -> Vec<TypeId> {
        self.methods.clone()
    }

    fn owning_class(&self, _: &TypeRegistry) -> Option<TypeId> {
        self.owning_class
    }

    fn supertype(&self, _: &TypeRegistry) -> Option<TypeId> {
        self.supertype
    }

    fn visible_supertype_members(&self, registry: &TypeRegistry) -> Vec<TypeId> {
        let Some(supertype) = self.supertype else {
            return Vec::new();
        };
        let mut visible: Vec<TypeId> = registry
            .members(supertype)
            .into_iter()
            .filter(|&member| !registry.has_flags(member, Flags::PRIVATE))
            .collect();
        visible.extend(registry.visible_supertype_members(supertype));
        visible
    }
}

/// Shared answers of the name-only variants: a public class under `Object`
/// with nothing inside.
macro_rules! name_only_fully_qualified {
    ($ty:ty) => {
        impl FullyQualified for $ty {
            fn fully_qualified_name(&self, _: &TypeRegistry) -> String {
                self.fully_qualified_name.clone()
            }

            fn kind(&self, _: &TypeRegistry) -> ClassKind {
                ClassKind::Class
            }

            fn flags(&self, _: &TypeRegistry) -> Flags {
                Flags::PUBLIC
            }

            fn has_flags(&self, _: &TypeRegistry, test: Flags) -> bool {
                test == Flags::PUBLIC
            }

            fn annotations(&self, _: &TypeRegistry) -> Vec<TypeId> {
                Vec::new()
            }

            fn interfaces(&self, _: &TypeRegistry) -> Vec<TypeId> {
                Vec::new()
            }

            fn members(&self, _: &TypeRegistry) -> Vec<TypeId> {
                Vec::new()
            }

            fn methods(&self, _: &TypeRegistry) -> Vec<TypeId> {
                Vec::new()
            }

            fn owning_class(&self, _: &TypeRegistry) -> Option<TypeId> {
                None
            }

            fn supertype(&self, _: &TypeRegistry) -> Option<TypeId> {
                Some(TypeId::OBJECT)
            }

            fn visible_supertype_members(&self, _: &TypeRegistry) -> Vec<TypeId> {
                Vec::new()
            }
        }
    };
}

name_only_fully_qualified!(ShallowClass);
name_only_fully_qualified!(CyclicType);

impl FullyQualified for ParameterizedType {
    fn fully_qualified_name(&self, registry: &TypeRegistry) -> String {
        registry
            .fully_qualified_name(self.raw)
            .unwrap_or_default()
    }

    fn kind(&self, registry: &TypeRegistry) -> ClassKind {
        registry
            .with_fully_qualified(self.raw, |raw| raw.kind(registry))
            .unwrap_or_default()
    }

    fn flags(&self, registry: &TypeRegistry) -> Flags {
        registry.flags(self.raw)
    }

    fn has_flags(&self, registry: &TypeRegistry, test: Flags) -> bool {
        registry.has_flags(self.raw, test)
    }

    fn annotations(&self, registry: &TypeRegistry) -> Vec<TypeId> {
        registry.annotations(self.raw)
    }

    fn interfaces(&self, registry: &TypeRegistry) -> Vec<TypeId> {
        registry.interfaces(self.raw)
    }

    fn members(&self, registry: &TypeRegistry) -> Vec<TypeId> {
        registry.members(self.raw)
    }

    fn methods(&self, registry: &TypeRegistry) -> Vec<TypeId> {
        registry.methods(self.raw)
    }

    fn owning_class(&self, registry: &TypeRegistry) -> Option<TypeId> {
        registry.owning_class(self.raw)
    }

    fn supertype(&self, registry: &TypeRegistry) -> Option<TypeId> {
        registry.supertype(self.raw)
    }

    fn visible_supertype_members(&self, registry: &TypeRegistry) -> Vec<TypeId> {
        registry.visible_supertype_members(self.raw)
    }
}

impl FullyQualified for GenericTypeVariable {
    fn fully_qualified_name(&self, _: &TypeRegistry) -> String {
        self.name.clone()
    }

    fn kind(&self, _: &TypeRegistry) -> ClassKind {
        ClassKind::Class
    }

    fn flags(&self, registry: &TypeRegistry) -> Flags {
        self.bound
            .map_or_else(Flags::empty, |bound| registry.flags(bound))
    }

    fn has_flags(&self, registry: &TypeRegistry, test: Flags) -> bool {
        self.bound
            .is_some_and(|bound| registry.has_flags(bound, test))
    }

    fn annotations(&self, registry: &TypeRegistry) -> Vec<TypeId> {
        self.bound
            .map(|bound| registry.annotations(bound))
            .unwrap_or_default()
    }

    fn interfaces(&self, registry: &TypeRegistry) -> Vec<TypeId> {
        self.bound
            .map(|bound| registry.interfaces(bound))
            .unwrap_or_default()
    }

    fn members(&self, registry: &TypeRegistry) -> Vec<TypeId> {
        self.bound
            .map(|bound| registry.members(bound))
            .unwrap_or_default()
    }

    fn methods(&self, registry: &TypeRegistry) -> Vec<TypeId> {
        self.bound
            .map(|bound| registry.methods(bound))
            .unwrap_or_default()
    }

    fn owning_class(&self, registry: &TypeRegistry) -> Option<TypeId> {
        registry.owning_class(self.bound?)
    }

    fn supertype(&self, registry: &TypeRegistry) -> Option<TypeId> {
        registry.supertype(self.bound?)
    }

    fn visible_supertype_members(&self, registry: &TypeRegistry) -> Vec<TypeId> {
        self.bound
            .map(|bound| registry.visible_supertype_members(bound))
            .unwrap_or_default()
    }
}

impl TypeData {
    /// View this descriptor through the fully-qualified capability.
    pub fn as_fully_qualified(&self) -> Option<&dyn FullyQualified> {
        match self {
            TypeData::Class(class) => Some(class),
            TypeData::ShallowClass(shallow) => Some(shallow),
            TypeData::Cyclic(cyclic) => Some(cyclic),
            TypeData::Parameterized(parameterized) => Some(parameterized),
            TypeData::GenericTypeVariable(variable) => Some(variable),
            _ => None,
        }
    }
}

impl TypeRegistry {
    /// Run `f` against the fully-qualified view of `id`.
    pub fn with_fully_qualified<R>(
        &self,
        id: TypeId,
        f: impl FnOnce(&dyn FullyQualified) -> R,
    ) -> Option<R> {
        let data = self.get(id)?;
        let fully_qualified = data.as_fully_qualified()?;
        Some(f(fully_qualified))
    }

    /// `true` when `id` names a fully-qualified descriptor.
    pub fn is_fully_qualified(&self, id: TypeId) -> bool {
        self.get(id).is_some_and(|data| data.is_fully_qualified())
    }

    pub fn fully_qualified_name(&self, id: TypeId) -> Option<String> {
        self.with_fully_qualified(id, |fq| fq.fully_qualified_name(self))
    }

    pub fn kind(&self, id: TypeId) -> Option<ClassKind> {
        self.with_fully_qualified(id, |fq| fq.kind(self))
    }

    /// Flags of a fully-qualified type, variable or method.
    pub fn flags(&self, id: TypeId) -> Flags {
        let Some(data) = self.get(id) else {
            return Flags::empty();
        };
        match &*data {
            TypeData::Variable(variable) => variable.flags,
            TypeData::Method(method) => method.flags,
            other => other
                .as_fully_qualified()
                .map_or_else(Flags::empty, |fq| fq.flags(self)),
        }
    }

    /// `true` when every flag in `test` is set on `id`.
    pub fn has_flags(&self, id: TypeId, test: Flags) -> bool {
        let Some(data) = self.get(id) else {
            return false;
        };
        match &*data {
            TypeData::Variable(variable) => variable.flags.has_all(test),
            TypeData::Method(method) => method.flags.has_all(test),
            other => other
                .as_fully_qualified()
                .is_some_and(|fq| fq.has_flags(self, test)),
        }
    }

    pub fn annotations(&self, id: TypeId) -> Vec<TypeId> {
        self.with_fully_qualified(id, |fq| fq.annotations(self))
            .unwrap_or_default()
    }

    pub fn interfaces(&self, id: TypeId) -> Vec<TypeId> {
        self.with_fully_qualified(id, |fq| fq.interfaces(self))
            .unwrap_or_default()
    }

    pub fn members(&self, id: TypeId) -> Vec<TypeId> {
        self.with_fully_qualified(id, |fq| fq.members(self))
            .unwrap_or_default()
    }

    pub fn methods(&self, id: TypeId) -> Vec<TypeId> {
        self.with_fully_qualified(id, |fq| fq.methods(self))
            .unwrap_or_default()
    }

    pub fn owning_class(&self, id: TypeId) -> Option<TypeId> {
        self.with_fully_qualified(id, |fq| fq.owning_class(self))
            .flatten()
    }

    pub fn supertype(&self, id: TypeId) -> Option<TypeId> {
        self.with_fully_qualified(id, |fq| fq.supertype(self))
            .flatten()
    }

    /// Non-private members of every ancestor of `id`, immediate supertype
    /// first. Private members are excluded at every level.
    pub fn visible_supertype_members(&self, id: TypeId) -> Vec<TypeId> {
        self.with_fully_qualified(id, |fq| fq.visible_supertype_members(self))
            .unwrap_or_default()
    }

    /// Simple (possibly nested) class name: the name with leading lowercase
    /// package segments dropped.
    pub fn class_name(&self, id: TypeId) -> Option<String> {
        self.fully_qualified_name(id).map(|name| class_name(&name))
    }

    /// Package part of the name: segments up to the first uppercase one.
    pub fn package_name(&self, id: TypeId) -> Option<String> {
        self.fully_qualified_name(id).map(|name| package_name(&name))
    }

    /// `true` when a value of `from` can be assigned to a `target`.
    ///
    /// Walks the supertype and interface chains of `from`. Type arguments are
    /// not considered, and only the `Cyclic` placeholder guards against cycles
    /// in the class graph.
    pub fn is_assignable_from(&self, target: TypeId, from: Option<TypeId>) -> bool {
        let Some(from) = from else {
            return false;
        };
        if target == TypeId::OBJECT {
            return true;
        }
        let (Some(target_name), Some(from_name)) =
            (self.fully_qualified_name(target), self.fully_qualified_name(from))
        else {
            return false;
        };
        target_name == from_name
            || self.is_assignable_from(target, self.supertype(from))
            || self
                .interfaces(from)
                .into_iter()
                .any(|interface| self.is_assignable_from(target, Some(interface)))
    }
}

/// Drop leading segments while they start with a lowercase letter.
pub fn class_name(fully_qualified_name: &str) -> String {
    fully_qualified_name
        .split('.')
        .skip_while(|part| part.chars().next().is_some_and(char::is_lowercase))
        .collect::<Vec<_>>()
        .join(".")
}

/// Take leading segments while none starts with an uppercase letter.
pub fn package_name(fully_qualified_name: &str) -> String {
    fully_qualified_name
        .split('.')
        .take_while(|part| !part.chars().next().is_some_and(char::is_uppercase))
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests;
