use super::*;
use crate::{ClassKind, ClassSpec, CyclicType, Flags, MethodSpec, ParameterizedType, ShallowClass};

fn class_data(name: &str) -> ClassType {
    ClassType {
        fully_qualified_name: name.to_owned(),
        flags: Flags::PUBLIC,
        kind: ClassKind::Class,
        members: Vec::new(),
        interfaces: Vec::new(),
        methods: Vec::new(),
        supertype: Some(TypeId::OBJECT),
        owning_class: None,
        annotations: Vec::new(),
    }
}

#[test]
fn identity_short_circuits() {
    let registry = TypeRegistry::new();
    assert!(registry.deep_equals(TypeId::INT, TypeId::INT));
    assert!(!registry.deep_equals(TypeId::INT, TypeId::LONG));
    let stale = TypeId::from_raw(9_999);
    assert!(registry.deep_equals(stale, stale));
    assert!(!registry.deep_equals(stale, TypeId::INT));
}

#[test]
fn optional_sides() {
    let registry = TypeRegistry::new();
    assert!(registry.deep_equals_opt(None, None));
    assert!(!registry.deep_equals_opt(Some(TypeId::INT), None));
    assert!(!registry.deep_equals_opt(None, Some(TypeId::INT)));
    assert!(registry.deep_equals_opt(Some(TypeId::INT), Some(TypeId::INT)));
}

#[test]
fn lists_compare_pairwise_in_order() {
    let registry = TypeRegistry::new();
    assert!(registry.all_deep_equal(&[], &[]));
    assert!(registry.all_deep_equal(&[TypeId::INT, TypeId::LONG], &[TypeId::INT, TypeId::LONG]));
    assert!(!registry.all_deep_equal(&[TypeId::INT, TypeId::LONG], &[TypeId::LONG, TypeId::INT]));
    assert!(!registry.all_deep_equal(&[TypeId::INT], &[TypeId::INT, TypeId::INT]));
}

#[test]
fn class_equality_ignores_methods_and_owner() {
    let registry = TypeRegistry::new();
    let owner = registry.build_class("com.example.Outer");
    let method = registry.build_method(MethodSpec::new(owner, "run"));

    let plain = class_data("com.example.Outer.Inner");
    let mut decorated = plain.clone();
    decorated.methods = vec![method];
    decorated.owning_class = Some(owner);
    assert!(registry.class_deep_equals(&plain, &decorated));

    let mut final_class = plain.clone();
    final_class.flags = Flags::PUBLIC | Flags::FINAL;
    assert!(!registry.class_deep_equals(&plain, &final_class));

    let mut interface = plain.clone();
    interface.kind = ClassKind::Interface;
    assert!(!registry.class_deep_equals(&plain, &interface));

    let mut rootless = plain.clone();
    rootless.supertype = None;
    assert!(!registry.class_deep_equals(&plain, &rootless));
}

#[test]
fn classes_differing_in_methods_share_a_variant() {
    let registry = TypeRegistry::new();
    let owner = registry.build_class("com.example.Api");
    let method = registry.build_method(MethodSpec::new(owner, "call"));
    let spec = ClassSpec::new("com.example.Api").with_supertype(Some(TypeId::OBJECT));
    let without = registry.build_class_from(spec.clone());
    let with = registry.build_class_from(spec.with_methods(vec![method]));
    assert_eq!(without, with);
}

#[test]
fn shallow_and_cyclic_compare_by_name_only() {
    let registry = TypeRegistry::new();
    let shallow = TypeData::ShallowClass(ShallowClass {
        fully_qualified_name: "java.util.List".to_owned(),
    });
    let same = shallow.clone();
    let other = TypeData::ShallowClass(ShallowClass {
        fully_qualified_name: "java.util.Set".to_owned(),
    });
    let cyclic = TypeData::Cyclic(CyclicType {
        fully_qualified_name: "java.util.List".to_owned(),
    });
    assert!(registry.data_deep_equals(&shallow, &same));
    assert!(!registry.data_deep_equals(&shallow, &other));
    // same name, different variant
    assert!(!registry.data_deep_equals(&shallow, &cyclic));
}

#[test]
fn unresolved_array_never_equal() {
    let registry = TypeRegistry::new();
    let unresolved = TypeData::Array(None);
    assert!(!registry.data_deep_equals(&unresolved, &TypeData::Array(None)));
    assert!(registry.data_deep_equals(
        &TypeData::Array(Some(TypeId::INT)),
        &TypeData::Array(Some(TypeId::INT))
    ));
}

#[test]
fn parameterized_compares_structurally_through_arguments() {
    let registry = TypeRegistry::new();
    let list = registry.build_class("java.util.List");
    let first = registry.build_variable("x", list, Some(TypeId::INT), Vec::new(), Flags::empty());
    let a = TypeData::Parameterized(ParameterizedType {
        raw: list,
        type_parameters: vec![first],
    });
    let b = TypeData::Parameterized(ParameterizedType {
        raw: list,
        type_parameters: vec![first],
    });
    let c = TypeData::Parameterized(ParameterizedType {
        raw: list,
        type_parameters: vec![TypeId::STRING],
    });
    assert!(registry.data_deep_equals(&a, &b));
    assert!(!registry.data_deep_equals(&a, &c));
}

#[test]
fn generic_variables_compare_name_and_bound() {
    let registry = TypeRegistry::new();
    let comparable = registry.build_class("java.lang.Comparable");
    let t = registry.generic_type_variable("T", Some(comparable));
    let u = registry.generic_type_variable("U", Some(comparable));
    let unbounded = registry.generic_type_variable("T", None);
    assert!(!registry.deep_equals(t, u));
    assert!(!registry.deep_equals(t, unbounded));
}

#[test]
fn variables_compare_every_identity_field() {
    let registry = TypeRegistry::new();
    let owner = registry.build_class("com.example.Holder");
    let base = VariableType {
        name: "x".to_owned(),
        owner,
        ty: Some(TypeId::INT),
        annotations: Vec::new(),
        flags: Flags::PRIVATE,
    };
    assert!(registry.variable_deep_equals(&base, &base.clone()));

    let mut renamed = base.clone();
    renamed.name = "y".to_owned();
    assert!(!registry.variable_deep_equals(&base, &renamed));

    let mut untyped = base.clone();
    untyped.ty = None;
    assert!(!registry.variable_deep_equals(&base, &untyped));

    let mut moved = base.clone();
    moved.owner = TypeId::OBJECT;
    assert!(!registry.variable_deep_equals(&base, &moved));
}

#[test]
fn methods_compare_signatures_and_parameter_names() {
    let registry = TypeRegistry::new();
    let owner = registry.build_class("com.example.Calc");
    let spec = MethodSpec::new(owner, "add")
        .with_signature(Signature::new(Some(TypeId::INT), vec![TypeId::INT, TypeId::INT]))
        .with_param_names(["a", "b"]);
    let base = registry.method(registry.build_method(spec.clone())).unwrap();

    let same = registry.method(registry.build_method(spec.clone())).unwrap();
    assert!(registry.method_deep_equals(&base, &same));

    let widened = registry
        .method(registry.build_method(spec.clone().with_resolved_signature(Some(Signature::new(
            Some(TypeId::LONG),
            vec![TypeId::LONG, TypeId::LONG],
        )))))
        .unwrap();
    assert!(!registry.method_deep_equals(&base, &widened));

    let unsigned = registry
        .method(registry.build_method(spec.with_generic_signature(None)))
        .unwrap();
    assert!(!registry.method_deep_equals(&base, &unsigned));
}

#[test]
fn multi_catch_is_ordered() {
    let registry = TypeRegistry::new();
    let io = registry.build_class("java.io.IOException");
    let state = registry.build_class("java.lang.IllegalStateException");
    assert!(registry.data_deep_equals(
        &TypeData::MultiCatch(vec![io, state]),
        &TypeData::MultiCatch(vec![io, state])
    ));
    assert!(!registry.data_deep_equals(
        &TypeData::MultiCatch(vec![io, state]),
        &TypeData::MultiCatch(vec![state, io])
    ));
}
