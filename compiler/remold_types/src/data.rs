//! Type descriptor payloads.
//!
//! These are the values stored in the registry arena. Cross-references are
//! always [`TypeId`] handles; a descriptor never owns another descriptor.

use crate::{Flags, Primitive, TypeId};

/// The kind of a class-like declaration.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassKind {
    #[default]
    Class,
    Enum,
    Interface,
    Annotation,
}

impl ClassKind {
    /// Declaration keyword.
    pub const fn keyword(self) -> &'static str {
        match self {
            ClassKind::Class => "class",
            ClassKind::Enum => "enum",
            ClassKind::Interface => "interface",
            ClassKind::Annotation => "@interface",
        }
    }
}

/// A type descriptor.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeData {
    Primitive(Primitive),
    /// Array of an element type; `None` when the element was unresolved.
    Array(Option<TypeId>),
    Class(ClassType),
    ShallowClass(ShallowClass),
    Cyclic(CyclicType),
    Parameterized(ParameterizedType),
    GenericTypeVariable(GenericTypeVariable),
    Variable(VariableType),
    Method(MethodType),
    /// Alternatives of a multi-catch clause, in source order.
    MultiCatch(Vec<TypeId>),
}

impl TypeData {
    /// Short variant name for logging.
    pub const fn variant_name(&self) -> &'static str {
        match self {
            TypeData::Primitive(_) => "Primitive",
            TypeData::Array(_) => "Array",
            TypeData::Class(_) => "Class",
            TypeData::ShallowClass(_) => "ShallowClass",
            TypeData::Cyclic(_) => "Cyclic",
            TypeData::Parameterized(_) => "Parameterized",
            TypeData::GenericTypeVariable(_) => "GenericTypeVariable",
            TypeData::Variable(_) => "Variable",
            TypeData::Method(_) => "Method",
            TypeData::MultiCatch(_) => "MultiCatch",
        }
    }

    /// `true` for the variants that carry the fully-qualified capability.
    pub const fn is_fully_qualified(&self) -> bool {
        matches!(
            self,
            TypeData::Class(_)
                | TypeData::ShallowClass(_)
                | TypeData::Cyclic(_)
                | TypeData::Parameterized(_)
                | TypeData::GenericTypeVariable(_)
        )
    }

    pub fn as_class(&self) -> Option<&ClassType> {
        match self {
            TypeData::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&VariableType> {
        match self {
            TypeData::Variable(variable) => Some(variable),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&MethodType> {
        match self {
            TypeData::Method(method) => Some(method),
            _ => None,
        }
    }
}

/// A fully resolved class.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassType {
    pub fully_qualified_name: String,
    pub flags: Flags,
    pub kind: ClassKind,
    /// Field variables, sorted by name.
    pub members: Vec<TypeId>,
    pub interfaces: Vec<TypeId>,
    pub methods: Vec<TypeId>,
    pub supertype: Option<TypeId>,
    pub owning_class: Option<TypeId>,
    pub annotations: Vec<TypeId>,
}

/// Name-only stand-in for a class whose detail is not needed, such as the
/// type arguments of a resolved class.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShallowClass {
    pub fully_qualified_name: String,
}

/// Placeholder breaking a self-referential type graph (`T extends Comparable<T>`).
///
/// Compared by name only, never structurally.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CyclicType {
    pub fully_qualified_name: String,
}

/// A generic type applied to type arguments.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterizedType {
    /// The raw (fully-qualified) generic type.
    pub raw: TypeId,
    pub type_parameters: Vec<TypeId>,
}

/// A named type variable with an optional bound.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenericTypeVariable {
    pub name: String,
    pub bound: Option<TypeId>,
}

/// A field or local variable.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableType {
    pub name: String,
    pub owner: TypeId,
    pub ty: Option<TypeId>,
    pub annotations: Vec<TypeId>,
    pub flags: Flags,
}

/// Return and parameter types of a method.
///
/// Signatures are not interned on their own; they are compared structurally
/// as part of their method.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signature {
    pub return_type: Option<TypeId>,
    pub param_types: Vec<TypeId>,
}

impl Signature {
    pub fn new(return_type: Option<TypeId>, param_types: Vec<TypeId>) -> Self {
        Self {
            return_type,
            param_types,
        }
    }
}

/// A method or constructor.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodType {
    pub flags: Flags,
    pub declaring_type: TypeId,
    pub name: String,
    pub generic_signature: Option<Signature>,
    pub resolved_signature: Option<Signature>,
    pub param_names: Vec<String>,
    pub thrown_exceptions: Vec<TypeId>,
    pub annotations: Vec<TypeId>,
}

impl MethodType {
    /// Name the resolver gives constructors.
    pub const CONSTRUCTOR_NAME: &'static str = "<constructor>";

    pub fn is_constructor(&self) -> bool {
        self.name == Self::CONSTRUCTOR_NAME
    }
}

/// Arguments to a full class build.
///
/// `relaxed` selects pick-first matching against already registered variants
/// instead of structural matching.
#[derive(Clone, Debug, Default)]
pub struct ClassSpec {
    pub fully_qualified_name: String,
    pub flags: Flags,
    pub kind: ClassKind,
    pub members: Vec<TypeId>,
    pub interfaces: Vec<TypeId>,
    pub methods: Vec<TypeId>,
    pub supertype: Option<TypeId>,
    pub owning_class: Option<TypeId>,
    pub annotations: Vec<TypeId>,
    pub relaxed: bool,
}

impl ClassSpec {
    /// A public class with no detail, matched exactly.
    pub fn new(fully_qualified_name: impl Into<String>) -> Self {
        Self {
            fully_qualified_name: fully_qualified_name.into(),
            flags: Flags::PUBLIC,
            ..Default::default()
        }
    }

    /// Spec reproducing an existing class.
    pub fn from_class(class: &ClassType) -> Self {
        Self {
            fully_qualified_name: class.fully_qualified_name.clone(),
            flags: class.flags,
            kind: class.kind,
            members: class.members.clone(),
            interfaces: class.interfaces.clone(),
            methods: class.methods.clone(),
            supertype: class.supertype,
            owning_class: class.owning_class,
            annotations: class.annotations.clone(),
            relaxed: false,
        }
    }

    #[must_use]
    pub fn with_fully_qualified_name(mut self, fully_qualified_name: impl Into<String>) -> Self {
        self.fully_qualified_name = fully_qualified_name.into();
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ClassKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_members(mut self, members: Vec<TypeId>) -> Self {
        self.members = members;
        self
    }

    #[must_use]
    pub fn with_interfaces(mut self, interfaces: Vec<TypeId>) -> Self {
        self.interfaces = interfaces;
        self
    }

    #[must_use]
    pub fn with_methods(mut self, methods: Vec<TypeId>) -> Self {
        self.methods = methods;
        self
    }

    #[must_use]
    pub fn with_supertype(mut self, supertype: Option<TypeId>) -> Self {
        self.supertype = supertype;
        self
    }

    #[must_use]
    pub fn with_owning_class(mut self, owning_class: Option<TypeId>) -> Self {
        self.owning_class = owning_class;
        self
    }

    #[must_use]
    pub fn with_annotations(mut self, annotations: Vec<TypeId>) -> Self {
        self.annotations = annotations;
        self
    }

    #[must_use]
    pub fn relaxed(mut self, relaxed: bool) -> Self {
        self.relaxed = relaxed;
        self
    }
}

/// Arguments to a method build.
#[derive(Clone, Debug)]
pub struct MethodSpec {
    pub flags: Flags,
    pub declaring_type: TypeId,
    pub name: String,
    pub generic_signature: Option<Signature>,
    pub resolved_signature: Option<Signature>,
    pub param_names: Vec<String>,
    pub thrown_exceptions: Vec<TypeId>,
    pub annotations: Vec<TypeId>,
}

impl MethodSpec {
    pub fn new(declaring_type: TypeId, name: impl Into<String>) -> Self {
        Self {
            flags: Flags::PUBLIC,
            declaring_type,
            name: name.into(),
            generic_signature: None,
            resolved_signature: None,
            param_names: Vec::new(),
            thrown_exceptions: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn from_method(method: &MethodType) -> Self {
        Self {
            flags: method.flags,
            declaring_type: method.declaring_type,
            name: method.name.clone(),
            generic_signature: method.generic_signature.clone(),
            resolved_signature: method.resolved_signature.clone(),
            param_names: method.param_names.clone(),
            thrown_exceptions: method.thrown_exceptions.clone(),
            annotations: method.annotations.clone(),
        }
    }

    #[must_use]
    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_declaring_type(mut self, declaring_type: TypeId) -> Self {
        self.declaring_type = declaring_type;
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set both signatures to the same value.
    #[must_use]
    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.generic_signature = Some(signature.clone());
        self.resolved_signature = Some(signature);
        self
    }

    #[must_use]
    pub fn with_generic_signature(mut self, signature: Option<Signature>) -> Self {
        self.generic_signature = signature;
        self
    }

    #[must_use]
    pub fn with_resolved_signature(mut self, signature: Option<Signature>) -> Self {
        self.resolved_signature = signature;
        self
    }

    #[must_use]
    pub fn with_param_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.param_names = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_thrown_exceptions(mut self, thrown: Vec<TypeId>) -> Self {
        self.thrown_exceptions = thrown;
        self
    }

    #[must_use]
    pub fn with_annotations(mut self, annotations: Vec<TypeId>) -> Self {
        self.annotations = annotations;
        self
    }
}
