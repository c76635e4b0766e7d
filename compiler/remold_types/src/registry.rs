//! The type registry: one canonical descriptor per structural identity.
//!
//! # Storage
//!
//! Descriptors live in an append-only arena of `Arc<TypeData>` slots and are
//! addressed by [`TypeId`]. On top of the arena sit four flyweight tables, each
//! with its own lock, matching how descriptors are looked up:
//!
//! - **classes**: fully-qualified name → the few structurally distinct variants
//!   registered under it.
//! - **parameterized**: a trie keyed by raw type identity, then by the identity
//!   of each type argument; the leaf memoizes the instance.
//! - **variables**: name → declared type → variants.
//! - **methods**: declaring type → name → variants.
//!
//! Simple descriptors (arrays, shallow classes, cyclic placeholders, type
//! variables, multi-catch unions) are hash-consed in a fifth table.
//!
//! # Locking
//!
//! A lookup-or-insert holds its table's lock (a `DashMap` shard or a `Mutex`)
//! for the whole scan, then takes the arena lock to allocate. The order is
//! always table before arena, and no table lock is taken while another is held.
//!
//! # Lifetime
//!
//! [`TypeRegistry::clear`] drops every table and truncates the arena back to
//! the pre-allocated primitives and `java.lang.Object`, bumping the generation
//! counter. Handles issued before a clear must not be used afterwards; lookups
//! of handles past the end of the arena return `None`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::{Mutex, RwLock};
use rustc_hash::{FxBuildHasher, FxHashMap};
use smallvec::SmallVec;

use crate::data::{CyclicType, GenericTypeVariable, ParameterizedType, ShallowClass};
use crate::{
    ClassKind, ClassSpec, ClassType, Flags, MethodSpec, MethodType, Primitive, Signature,
    TypeData, TypeError, TypeId, VariableType,
};

mod trie;

use trie::TypeTrie;

/// Variants registered under one key. Rarely more than one or two.
type Variants = SmallVec<[TypeId; 2]>;

/// Name of the `java.lang.String` field that only exists to customize
/// serialization; it is never stored as a member.
const STRING_SERIALIZATION_FIELD: &str = "serialPersistentFields";

/// Fully-qualified name of the root class.
pub const OBJECT_NAME: &str = "java.lang.Object";

/// Table sizes, for tests and debug logging.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistryStats {
    /// Descriptors in the arena, pre-allocated ones included.
    pub descriptors: usize,
    /// Distinct class names.
    pub class_names: usize,
    /// Class variants across all names.
    pub class_variants: usize,
    /// Nodes in the parameterized trie.
    pub trie_nodes: usize,
    pub variables: usize,
    pub methods: usize,
    pub generation: u64,
}

/// Interning registry for type descriptors.
///
/// # Thread Safety
/// Every operation takes `&self`; wrap in [`SharedTypeRegistry`](crate::SharedTypeRegistry)
/// to share across resolver threads.
pub struct TypeRegistry {
    arena: RwLock<Vec<Arc<TypeData>>>,
    classes: DashMap<String, Variants, FxBuildHasher>,
    parameterized: Mutex<TypeTrie>,
    variables: DashMap<String, FxHashMap<Option<TypeId>, Variants>, FxBuildHasher>,
    methods: DashMap<TypeId, FxHashMap<String, Variants>, FxBuildHasher>,
    hash_consed: Mutex<FxHashMap<TypeData, TypeId>>,
    generation: AtomicU64,
}

impl TypeRegistry {
    /// Create a registry holding only the pre-allocated descriptors.
    pub fn new() -> Self {
        let registry = Self {
            arena: RwLock::new(seeded_arena()),
            classes: DashMap::with_hasher(FxBuildHasher),
            parameterized: Mutex::new(TypeTrie::default()),
            variables: DashMap::with_hasher(FxBuildHasher),
            methods: DashMap::with_hasher(FxBuildHasher),
            hash_consed: Mutex::new(FxHashMap::default()),
            generation: AtomicU64::new(0),
        };
        registry.seed_tables();
        registry
    }

    fn seed_tables(&self) {
        let mut object = Variants::new();
        object.push(TypeId::OBJECT);
        self.classes.insert(OBJECT_NAME.to_owned(), object);
    }

    // -- Arena --

    /// Try to allocate a descriptor, failing when handles run out.
    pub fn try_alloc(&self, data: TypeData) -> Result<TypeId, TypeError> {
        let mut arena = self.arena.write();
        let raw = u32::try_from(arena.len()).map_err(|_| TypeError::ArenaOverflow {
            generation: self.generation(),
        })?;
        arena.push(Arc::new(data));
        Ok(TypeId::from_raw(raw))
    }

    /// Allocate a descriptor without any interning.
    ///
    /// # Panics
    /// Panics if the arena exceeds `u32::MAX` descriptors.
    fn alloc(&self, data: TypeData) -> TypeId {
        self.try_alloc(data).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up the descriptor for a handle.
    pub fn get(&self, id: TypeId) -> Option<Arc<TypeData>> {
        self.arena.read().get(id.index()).cloned()
    }

    /// Number of descriptors in the arena.
    pub fn len(&self) -> usize {
        self.arena.read().len()
    }

    /// `true` when only pre-allocated descriptors exist.
    pub fn is_empty(&self) -> bool {
        self.len() <= TypeId::FIRST_DYNAMIC as usize
    }

    /// Current cache generation; incremented by every [`clear`](Self::clear).
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    pub fn class(&self, id: TypeId) -> Option<ClassType> {
        self.get(id)?.as_class().cloned()
    }

    pub fn variable(&self, id: TypeId) -> Option<VariableType> {
        self.get(id)?.as_variable().cloned()
    }

    pub fn method(&self, id: TypeId) -> Option<MethodType> {
        self.get(id)?.as_method().cloned()
    }

    // -- Building --

    /// Build a type from a source name: a primitive keyword, or else a class.
    ///
    /// Never fails; unknown names become relaxed class descriptors.
    pub fn build_type(&self, name: &str) -> TypeId {
        match Primitive::from_keyword(name) {
            Some(primitive) => TypeId::of_primitive(primitive),
            None => self.build_class(name),
        }
    }

    /// First registered variant for a name, without creating one.
    pub fn find_class(&self, fully_qualified_name: &str) -> Option<TypeId> {
        self.classes
            .get(fully_qualified_name)
            .and_then(|variants| variants.first().copied())
    }

    /// Relaxed build from a name alone.
    ///
    /// Returns an arbitrary registered variant when one exists, since a bare
    /// name gives nothing to choose between them with. Otherwise registers a
    /// public class with no detail and no supertype, whose owning class is
    /// derived from the name (see [`owning_class_name`]).
    pub fn build_class(&self, fully_qualified_name: &str) -> TypeId {
        let owning_class =
            owning_class_name(fully_qualified_name).map(|owner| self.build_class(owner));
        self.build_class_from(
            ClassSpec::new(fully_qualified_name)
                .with_owning_class(owning_class)
                .relaxed(true),
        )
    }

    /// Relaxed build from a name and kind. No owning class is derived.
    pub fn build_class_of_kind(&self, fully_qualified_name: &str, kind: ClassKind) -> TypeId {
        self.build_class_from(
            ClassSpec::new(fully_qualified_name)
                .with_kind(kind)
                .relaxed(true),
        )
    }

    /// Full class build.
    ///
    /// With `spec.relaxed` the first registered variant wins. Otherwise a
    /// structurally identical variant is returned when one exists. A candidate
    /// without supertype information yields to an existing variant that has
    /// one (richer variant wins), even if their members differ.
    pub fn build_class_from(&self, spec: ClassSpec) -> TypeId {
        if spec.relaxed {
            if let Some(existing) = self.find_class(&spec.fully_qualified_name) {
                return existing;
            }
        }

        let mut variants = self
            .classes
            .entry(spec.fully_qualified_name.clone())
            .or_default();

        if spec.relaxed {
            if let Some(&first) = variants.first() {
                return first;
            }
            let candidate = self.class_candidate(spec);
            let id = self.alloc(TypeData::Class(candidate));
            variants.push(id);
            tracing::trace!(%id, "registered relaxed class");
            return id;
        }

        let candidate = self.class_candidate(spec);
        if let Some(&existing) = variants
            .iter()
            .find(|&&variant| self.class_matches_candidate(variant, &candidate))
        {
            return existing;
        }

        if candidate.supertype.is_none() {
            if let Some(&first) = variants.first() {
                let first_has_supertype = self
                    .get(first)
                    .and_then(|data| data.as_class().and_then(|class| class.supertype))
                    .is_some();
                if first_has_supertype {
                    tracing::debug!(
                        fqn = %candidate.fully_qualified_name,
                        %first,
                        "sparse class build yields to richer variant"
                    );
                    return first;
                }
            }
        }

        tracing::trace!(
            fqn = %candidate.fully_qualified_name,
            variants = variants.len() + 1,
            "registering class variant"
        );
        let id = self.alloc(TypeData::Class(candidate));
        variants.push(id);
        id
    }

    /// Sort members by name, dropping the `String` serialization field.
    fn class_candidate(&self, spec: ClassSpec) -> ClassType {
        let mut members = spec.members;
        if !members.is_empty() {
            if spec.fully_qualified_name == "java.lang.String" {
                members.retain(|&member| {
                    self.variable_name(member).as_deref() != Some(STRING_SERIALIZATION_FIELD)
                });
            }
            members.sort_by_cached_key(|&member| self.variable_name(member).unwrap_or_default());
        }
        ClassType {
            fully_qualified_name: spec.fully_qualified_name,
            flags: spec.flags,
            kind: spec.kind,
            members,
            interfaces: spec.interfaces,
            methods: spec.methods,
            supertype: spec.supertype,
            owning_class: spec.owning_class,
            annotations: spec.annotations,
        }
    }

    fn class_matches_candidate(&self, variant: TypeId, candidate: &ClassType) -> bool {
        self.get(variant)
            .and_then(|data| data.as_class().map(|class| self.class_deep_equals(class, candidate)))
            .unwrap_or(false)
    }

    fn variable_name(&self, id: TypeId) -> Option<String> {
        self.get(id)?.as_variable().map(|v| v.name.clone())
    }

    /// Canonical instance of `raw<type_parameters...>`.
    ///
    /// Arguments are compared by identity, so they must already be canonical
    /// handles. Order matters: `<A, B>` and `<B, A>` are distinct instances.
    pub fn build_parameterized(&self, raw: TypeId, type_parameters: &[TypeId]) -> TypeId {
        let mut trie = self.parameterized.lock();
        trie.find_or_insert(raw, type_parameters, || {
            self.alloc(TypeData::Parameterized(ParameterizedType {
                raw,
                type_parameters: type_parameters.to_vec(),
            }))
        })
    }

    /// Interned variable, bucketed by name and then by declared type.
    pub fn build_variable(
        &self,
        name: &str,
        owner: TypeId,
        ty: Option<TypeId>,
        annotations: Vec<TypeId>,
        flags: Flags,
    ) -> TypeId {
        let candidate = VariableType {
            name: name.to_owned(),
            owner,
            ty,
            annotations,
            flags,
        };

        let mut by_type = self.variables.entry(candidate.name.clone()).or_default();
        let variants = by_type.entry(ty).or_default();
        if let Some(&existing) = variants.iter().find(|&&variant| {
            self.get(variant)
                .and_then(|data| {
                    data.as_variable()
                        .map(|v| self.variable_deep_equals(v, &candidate))
                })
                .unwrap_or(false)
        }) {
            return existing;
        }

        let id = self.alloc(TypeData::Variable(candidate));
        variants.push(id);
        id
    }

    /// Interned method, bucketed by declaring type and then by name.
    pub fn build_method(&self, spec: MethodSpec) -> TypeId {
        let candidate = MethodType {
            flags: spec.flags,
            declaring_type: spec.declaring_type,
            name: spec.name,
            generic_signature: spec.generic_signature,
            resolved_signature: spec.resolved_signature,
            param_names: spec.param_names,
            thrown_exceptions: spec.thrown_exceptions,
            annotations: spec.annotations,
        };

        let mut by_name = self.methods.entry(candidate.declaring_type).or_default();
        let variants = by_name.entry(candidate.name.clone()).or_default();
        if let Some(&existing) = variants.iter().find(|&&variant| {
            self.get(variant)
                .and_then(|data| data.as_method().map(|m| self.method_deep_equals(m, &candidate)))
                .unwrap_or(false)
        }) {
            return existing;
        }

        let id = self.alloc(TypeData::Method(candidate));
        variants.push(id);
        id
    }

    /// Name-only class stand-in.
    pub fn shallow_class(&self, fully_qualified_name: &str) -> TypeId {
        self.hash_cons(TypeData::ShallowClass(ShallowClass {
            fully_qualified_name: fully_qualified_name.to_owned(),
        }))
    }

    /// Placeholder for a self-referential type.
    pub fn cyclic(&self, fully_qualified_name: &str) -> TypeId {
        self.hash_cons(TypeData::Cyclic(CyclicType {
            fully_qualified_name: fully_qualified_name.to_owned(),
        }))
    }

    pub fn generic_type_variable(&self, name: &str, bound: Option<TypeId>) -> TypeId {
        self.hash_cons(TypeData::GenericTypeVariable(GenericTypeVariable {
            name: name.to_owned(),
            bound,
        }))
    }

    pub fn array(&self, element: Option<TypeId>) -> TypeId {
        self.hash_cons(TypeData::Array(element))
    }

    pub fn multi_catch(&self, throwable_types: Vec<TypeId>) -> TypeId {
        self.hash_cons(TypeData::MultiCatch(throwable_types))
    }

    fn hash_cons(&self, data: TypeData) -> TypeId {
        let mut table = self.hash_consed.lock();
        if let Some(&id) = table.get(&data) {
            return id;
        }
        let id = self.alloc(data.clone());
        table.insert(data, id);
        id
    }

    // -- Copies --
    //
    // Each `with_*` re-interns through the exact build path and returns the
    // input handle unchanged when the field already has the requested value.

    pub fn with_class_flags(&self, id: TypeId, flags: Flags) -> Option<TypeId> {
        self.rebuild_class(id, |class| class.flags == flags, |spec| spec.with_flags(flags))
    }

    pub fn with_class_members(&self, id: TypeId, members: Vec<TypeId>) -> Option<TypeId> {
        self.rebuild_class(
            id,
            |class| class.members == members,
            |spec| spec.with_members(members.clone()),
        )
    }

    pub fn with_class_methods(&self, id: TypeId, methods: Vec<TypeId>) -> Option<TypeId> {
        self.rebuild_class(
            id,
            |class| class.methods == methods,
            |spec| spec.with_methods(methods.clone()),
        )
    }

    pub fn with_class_interfaces(&self, id: TypeId, interfaces: Vec<TypeId>) -> Option<TypeId> {
        self.rebuild_class(
            id,
            |class| class.interfaces == interfaces,
            |spec| spec.with_interfaces(interfaces.clone()),
        )
    }

    pub fn with_class_supertype(&self, id: TypeId, supertype: Option<TypeId>) -> Option<TypeId> {
        self.rebuild_class(
            id,
            |class| class.supertype == supertype,
            |spec| spec.with_supertype(supertype),
        )
    }

    fn rebuild_class(
        &self,
        id: TypeId,
        unchanged: impl FnOnce(&ClassType) -> bool,
        change: impl FnOnce(ClassSpec) -> ClassSpec,
    ) -> Option<TypeId> {
        let data = self.get(id)?;
        let class = data.as_class()?;
        if unchanged(class) {
            return Some(id);
        }
        Some(self.build_class_from(change(ClassSpec::from_class(class))))
    }

    /// Rename any fully-qualified descriptor.
    pub fn with_fully_qualified_name(&self, id: TypeId, name: &str) -> Option<TypeId> {
        let data = self.get(id)?;
        let renamed = match &*data {
            TypeData::Class(class) => {
                if class.fully_qualified_name == name {
                    return Some(id);
                }
                self.build_class_from(ClassSpec::from_class(class).with_fully_qualified_name(name))
            }
            TypeData::ShallowClass(_) => self.shallow_class(name),
            TypeData::Cyclic(_) => self.cyclic(name),
            TypeData::GenericTypeVariable(variable) => {
                self.generic_type_variable(name, variable.bound)
            }
            TypeData::Parameterized(parameterized) => {
                let raw = self.with_fully_qualified_name(parameterized.raw, name)?;
                if raw == parameterized.raw {
                    return Some(id);
                }
                self.build_parameterized(raw, &parameterized.type_parameters)
            }
            _ => return None,
        };
        Some(renamed)
    }

    pub fn with_variable_type(&self, id: TypeId, ty: Option<TypeId>) -> Option<TypeId> {
        let variable = self.variable(id)?;
        if variable.ty == ty {
            return Some(id);
        }
        Some(self.build_variable(
            &variable.name,
            variable.owner,
            ty,
            variable.annotations,
            variable.flags,
        ))
    }

    pub fn with_variable_owner(&self, id: TypeId, owner: TypeId) -> Option<TypeId> {
        let variable = self.variable(id)?;
        if variable.owner == owner {
            return Some(id);
        }
        Some(self.build_variable(
            &variable.name,
            owner,
            variable.ty,
            variable.annotations,
            variable.flags,
        ))
    }

    pub fn with_method_name(&self, id: TypeId, name: &str) -> Option<TypeId> {
        let method = self.method(id)?;
        if method.name == name {
            return Some(id);
        }
        Some(self.build_method(MethodSpec::from_method(&method).with_name(name)))
    }

    pub fn with_method_flags(&self, id: TypeId, flags: Flags) -> Option<TypeId> {
        let method = self.method(id)?;
        if method.flags == flags {
            return Some(id);
        }
        Some(self.build_method(MethodSpec::from_method(&method).with_flags(flags)))
    }

    pub fn with_declaring_type(&self, id: TypeId, declaring_type: TypeId) -> Option<TypeId> {
        let method = self.method(id)?;
        if method.declaring_type == declaring_type {
            return Some(id);
        }
        Some(self.build_method(MethodSpec::from_method(&method).with_declaring_type(declaring_type)))
    }

    pub fn with_resolved_signature(
        &self,
        id: TypeId,
        signature: Option<Signature>,
    ) -> Option<TypeId> {
        let method = self.method(id)?;
        if method.resolved_signature == signature {
            return Some(id);
        }
        Some(self.build_method(MethodSpec::from_method(&method).with_resolved_signature(signature)))
    }

    // -- Lifecycle --

    /// Drop every table and every dynamically allocated descriptor.
    ///
    /// Meant to run between independent parsing sessions; calling it while
    /// another thread is interning is the caller's problem.
    pub fn clear(&self) {
        self.classes.clear();
        self.parameterized.lock().clear();
        self.variables.clear();
        self.methods.clear();
        self.hash_consed.lock().clear();
        {
            let mut arena = self.arena.write();
            arena.truncate(TypeId::FIRST_DYNAMIC as usize);
        }
        self.seed_tables();
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::debug!(generation, "type caches cleared");
    }

    /// Current table sizes.
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            descriptors: self.len(),
            class_names: self.classes.len(),
            class_variants: self.classes.iter().map(|entry| entry.value().len()).sum(),
            trie_nodes: self.parameterized.lock().node_count(),
            variables: self
                .variables
                .iter()
                .map(|entry| entry.value().values().map(Variants::len).sum::<usize>())
                .sum(),
            methods: self
                .methods
                .iter()
                .map(|entry| entry.value().values().map(Variants::len).sum::<usize>())
                .sum(),
            generation: self.generation(),
        }
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("descriptors", &self.len())
            .field("generation", &self.generation())
            .finish_non_exhaustive()
    }
}

/// The owning class encoded in a fully-qualified name, if any.
///
/// The first segment starting with an uppercase letter is taken as the
/// outermost class; anything after a later delimiter is a nested class. Both
/// `.` and the binary-name `$` count as delimiters, so `java.util.Map$Entry`
/// and `java.util.Map.Entry` both yield `java.util.Map`. All-lowercase class
/// names defeat the heuristic.
pub fn owning_class_name(fully_qualified_name: &str) -> Option<&str> {
    let mut first_class_name = 0;
    let mut last_delimiter = 0;
    let mut prev = ' ';
    for (i, c) in fully_qualified_name.char_indices() {
        let is_delimiter = c == '.' || c == '$';
        if first_class_name == 0 && (prev == '.' || prev == '$') && c.is_uppercase() {
            first_class_name = i;
        } else if is_delimiter {
            last_delimiter = i;
        }
        prev = c;
    }
    (last_delimiter > first_class_name).then(|| &fully_qualified_name[..last_delimiter])
}

fn seeded_arena() -> Vec<Arc<TypeData>> {
    let mut arena = Vec::with_capacity(1024);
    arena.extend(
        Primitive::ALL
            .iter()
            .map(|&primitive| Arc::new(TypeData::Primitive(primitive))),
    );
    arena.push(Arc::new(TypeData::Class(ClassType {
        fully_qualified_name: OBJECT_NAME.to_owned(),
        flags: Flags::PUBLIC,
        kind: ClassKind::Class,
        members: Vec::new(),
        interfaces: Vec::new(),
        methods: Vec::new(),
        supertype: None,
        owning_class: None,
        annotations: Vec::new(),
    })));
    debug_assert_eq!(arena.len(), TypeId::FIRST_DYNAMIC as usize);
    arena
}
