//! Structural equality between descriptors.
//!
//! Handle identity short-circuits every comparison. Otherwise each variant
//! compares the fields that make up its identity:
//!
//! | variant | compared |
//! |---|---|
//! | Class | kind, flags, name, members, interfaces, supertype, annotations |
//! | ShallowClass, Cyclic | name only |
//! | Parameterized | raw type, type arguments |
//! | GenericTypeVariable | name, bound |
//! | Variable | name, flags, owner, type, annotations |
//! | Method | parameter names, flags, declaring type, both signatures, thrown, annotations |
//! | Array | element (an unresolved element never equals anything) |
//! | MultiCatch | alternatives, in order |
//!
//! Class equality leaves out methods, owning class and type parameters, so
//! two classes differing only there share one interned variant.

use crate::{ClassType, MethodType, Signature, TypeData, TypeId, TypeRegistry, VariableType};

impl TypeRegistry {
    /// Structural equality of two handles.
    pub fn deep_equals(&self, a: TypeId, b: TypeId) -> bool {
        if a == b {
            return true;
        }
        match (self.get(a), self.get(b)) {
            (Some(a), Some(b)) => self.data_deep_equals(&a, &b),
            _ => false,
        }
    }

    /// Structural equality where both sides may be absent.
    pub fn deep_equals_opt(&self, a: Option<TypeId>, b: Option<TypeId>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => self.deep_equals(a, b),
            _ => false,
        }
    }

    /// Pairwise structural equality of two lists.
    pub fn all_deep_equal(&self, a: &[TypeId], b: &[TypeId]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(&a, &b)| self.deep_equals(a, b))
    }

    /// Structural equality of two descriptor payloads.
    pub fn data_deep_equals(&self, a: &TypeData, b: &TypeData) -> bool {
        match (a, b) {
            (TypeData::Primitive(a), TypeData::Primitive(b)) => a == b,
            (TypeData::Array(a), TypeData::Array(b)) => {
                a.is_some() && self.deep_equals_opt(*a, *b)
            }
            (TypeData::Class(a), TypeData::Class(b)) => self.class_deep_equals(a, b),
            (TypeData::ShallowClass(a), TypeData::ShallowClass(b)) => {
                a.fully_qualified_name == b.fully_qualified_name
            }
            (TypeData::Cyclic(a), TypeData::Cyclic(b)) => {
                a.fully_qualified_name == b.fully_qualified_name
            }
            (TypeData::Parameterized(a), TypeData::Parameterized(b)) => {
                self.deep_equals(a.raw, b.raw)
                    && self.all_deep_equal(&a.type_parameters, &b.type_parameters)
            }
            (TypeData::GenericTypeVariable(a), TypeData::GenericTypeVariable(b)) => {
                a.name == b.name && self.deep_equals_opt(a.bound, b.bound)
            }
            (TypeData::Variable(a), TypeData::Variable(b)) => self.variable_deep_equals(a, b),
            (TypeData::Method(a), TypeData::Method(b)) => self.method_deep_equals(a, b),
            (TypeData::MultiCatch(a), TypeData::MultiCatch(b)) => self.all_deep_equal(a, b),
            _ => false,
        }
    }

    pub(crate) fn class_deep_equals(&self, a: &ClassType, b: &ClassType) -> bool {
        a.kind == b.kind
            && a.flags == b.flags
            && a.fully_qualified_name == b.fully_qualified_name
            && self.all_deep_equal(&a.members, &b.members)
            && self.all_deep_equal(&a.interfaces, &b.interfaces)
            && self.deep_equals_opt(a.supertype, b.supertype)
            && self.all_deep_equal(&a.annotations, &b.annotations)
    }

    pub(crate) fn variable_deep_equals(&self, a: &VariableType, b: &VariableType) -> bool {
        a.name == b.name
            && a.flags == b.flags
            && self.deep_equals(a.owner, b.owner)
            && self.deep_equals_opt(a.ty, b.ty)
            && self.all_deep_equal(&a.annotations, &b.annotations)
    }

    pub(crate) fn method_deep_equals(&self, a: &MethodType, b: &MethodType) -> bool {
        a.param_names == b.param_names
            && a.flags == b.flags
            && self.deep_equals(a.declaring_type, b.declaring_type)
            && self.signature_deep_equals(a.generic_signature.as_ref(), b.generic_signature.as_ref())
            && self
                .signature_deep_equals(a.resolved_signature.as_ref(), b.resolved_signature.as_ref())
            && self.all_deep_equal(&a.thrown_exceptions, &b.thrown_exceptions)
            && self.all_deep_equal(&a.annotations, &b.annotations)
    }

    fn signature_deep_equals(&self, a: Option<&Signature>, b: Option<&Signature>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                self.deep_equals_opt(a.return_type, b.return_type)
                    && self.all_deep_equal(&a.param_types, &b.param_types)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests;
