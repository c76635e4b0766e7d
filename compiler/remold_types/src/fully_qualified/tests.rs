use pretty_assertions::assert_eq;

use super::*;
use crate::ClassSpec;

fn names(registry: &TypeRegistry, ids: &[TypeId]) -> Vec<String> {
    ids.iter()
        .filter_map(|&id| registry.variable(id).map(|v| v.name))
        .collect()
}

/// `Base { public a; private hidden }`, `Middle extends Base { protected m }`,
/// `Leaf extends Middle`.
fn hierarchy(registry: &TypeRegistry) -> (TypeId, TypeId, TypeId) {
    let base_owner = registry.build_class("com.example.Base");
    let a = registry.build_variable("a", base_owner, Some(TypeId::INT), Vec::new(), Flags::PUBLIC);
    let hidden = registry.build_variable(
        "hidden",
        base_owner,
        Some(TypeId::INT),
        Vec::new(),
        Flags::PRIVATE,
    );
    let base = registry.build_class_from(
        ClassSpec::new("com.example.Base")
            .with_members(vec![a, hidden])
            .with_supertype(Some(TypeId::OBJECT)),
    );

    let middle_owner = registry.build_class("com.example.Middle");
    let m = registry.build_variable(
        "m",
        middle_owner,
        Some(TypeId::INT),
        Vec::new(),
        Flags::PROTECTED,
    );
    let middle = registry.build_class_from(
        ClassSpec::new("com.example.Middle")
            .with_members(vec![m])
            .with_supertype(Some(base)),
    );

    let leaf = registry.build_class_from(
        ClassSpec::new("com.example.Leaf").with_supertype(Some(middle)),
    );
    (base, middle, leaf)
}

#[test]
fn visible_members_nearest_first_without_private() {
    let registry = TypeRegistry::new();
    let (base, middle, leaf) = hierarchy(&registry);
    assert_eq!(
        names(&registry, &registry.visible_supertype_members(leaf)),
        vec!["m", "a"]
    );
    assert_eq!(
        names(&registry, &registry.visible_supertype_members(middle)),
        vec!["a"]
    );
    assert!(registry.visible_supertype_members(base).is_empty());
}

#[test]
fn parameterized_forwards_to_raw() {
    let registry = TypeRegistry::new();
    let (_, middle, _) = hierarchy(&registry);
    let applied = registry.build_parameterized(middle, &[TypeId::STRING]);
    assert_eq!(
        registry.fully_qualified_name(applied).as_deref(),
        Some("com.example.Middle")
    );
    assert_eq!(registry.members(applied), registry.members(middle));
    assert_eq!(registry.supertype(applied), registry.supertype(middle));
    assert_eq!(
        registry.visible_supertype_members(applied),
        registry.visible_supertype_members(middle)
    );
    assert!(registry.has_flags(applied, Flags::PUBLIC));
}

#[test]
fn type_variable_forwards_to_bound() {
    let registry = TypeRegistry::new();
    let (base, _, _) = hierarchy(&registry);
    let bounded = registry.generic_type_variable("T", Some(base));
    assert_eq!(registry.fully_qualified_name(bounded).as_deref(), Some("T"));
    assert_eq!(registry.members(bounded), registry.members(base));
    assert_eq!(registry.supertype(bounded), Some(TypeId::OBJECT));

    let unbounded = registry.generic_type_variable("U", None);
    assert!(registry.members(unbounded).is_empty());
    assert_eq!(registry.supertype(unbounded), None);
    assert_eq!(registry.flags(unbounded), Flags::empty());
}

#[test]
fn shallow_class_answers_only_exact_public() {
    let registry = TypeRegistry::new();
    let shallow = registry.shallow_class("java.util.List");
    assert!(registry.has_flags(shallow, Flags::PUBLIC));
    assert!(!registry.has_flags(shallow, Flags::PUBLIC | Flags::STATIC));
    assert!(!registry.has_flags(shallow, Flags::empty()));
    assert_eq!(registry.supertype(shallow), Some(TypeId::OBJECT));
    assert!(registry.members(shallow).is_empty());
    assert!(registry.visible_supertype_members(shallow).is_empty());
}

#[test]
fn cyclic_behaves_like_shallow() {
    let registry = TypeRegistry::new();
    let cyclic = registry.cyclic("com.example.Node");
    assert_eq!(registry.kind(cyclic), Some(ClassKind::Class));
    assert!(registry.has_flags(cyclic, Flags::PUBLIC));
    assert_eq!(registry.supertype(cyclic), Some(TypeId::OBJECT));
}

#[test]
fn non_nameable_types_have_no_view() {
    let registry = TypeRegistry::new();
    assert!(!registry.is_fully_qualified(TypeId::INT));
    assert_eq!(registry.fully_qualified_name(TypeId::INT), None);
    assert!(registry.is_fully_qualified(TypeId::OBJECT));
    let array = registry.array(Some(TypeId::OBJECT));
    assert!(!registry.is_fully_qualified(array));
    assert!(registry.members(array).is_empty());
}

#[test]
fn flags_cover_variables_and_methods() {
    let registry = TypeRegistry::new();
    let owner = registry.build_class("com.example.Svc");
    let field = registry.build_variable(
        "x",
        owner,
        None,
        Vec::new(),
        Flags::PRIVATE | Flags::STATIC,
    );
    assert_eq!(registry.flags(field), Flags::PRIVATE | Flags::STATIC);
    assert!(registry.has_flags(field, Flags::STATIC));
    assert!(!registry.has_flags(field, Flags::FINAL));
}

#[test]
fn name_splitting() {
    assert_eq!(class_name("java.util.Map.Entry"), "Map.Entry");
    assert_eq!(class_name("java.util.List"), "List");
    assert_eq!(class_name("Foo"), "Foo");
    assert_eq!(package_name("java.util.Map.Entry"), "java.util");
    assert_eq!(package_name("Foo"), "");

    let registry = TypeRegistry::new();
    let entry = registry.shallow_class("java.util.Map.Entry");
    assert_eq!(registry.class_name(entry).as_deref(), Some("Map.Entry"));
    assert_eq!(registry.package_name(entry).as_deref(), Some("java.util"));
}

#[test]
fn assignability_walks_supertypes_and_interfaces() {
    let registry = TypeRegistry::new();
    let collection = registry.build_class_from(
        ClassSpec::new("java.util.Collection").with_kind(ClassKind::Interface),
    );
    let list = registry.build_class_from(
        ClassSpec::new("java.util.List")
            .with_kind(ClassKind::Interface)
            .with_interfaces(vec![collection]),
    );
    let abstract_list = registry.build_class_from(
        ClassSpec::new("java.util.AbstractList")
            .with_supertype(Some(TypeId::OBJECT))
            .with_interfaces(vec![list]),
    );
    let array_list = registry.build_class_from(
        ClassSpec::new("java.util.ArrayList").with_supertype(Some(abstract_list)),
    );

    assert!(registry.is_assignable_from(collection, Some(array_list)));
    assert!(registry.is_assignable_from(abstract_list, Some(array_list)));
    assert!(registry.is_assignable_from(TypeId::OBJECT, Some(collection)));
    assert!(!registry.is_assignable_from(array_list, Some(collection)));
    assert!(!registry.is_assignable_from(collection, None));

    // names match across variants
    let shallow = registry.shallow_class("java.util.Collection");
    assert!(registry.is_assignable_from(shallow, Some(array_list)));
}
