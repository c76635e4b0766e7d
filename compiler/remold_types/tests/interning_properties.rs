//! Property tests for interning.
//!
//! Equal inputs give identical handles; deep-equal descriptors of the same
//! kind collapse to one handle; clearing restarts allocation.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use proptest::prelude::*;
use remold_types::{ClassSpec, Flags, TypeId, TypeRegistry};

fn class_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,6}(\\.[a-z]{1,6}){0,2}\\.[A-Z][A-Za-z0-9]{0,8}")
        .expect("valid regex")
}

fn field_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-zA-Z0-9]{0,8}").expect("valid regex")
}

fn primitive_strategy() -> impl Strategy<Value = TypeId> {
    prop_oneof![
        Just(TypeId::INT),
        Just(TypeId::LONG),
        Just(TypeId::BOOLEAN),
        Just(TypeId::STRING),
        Just(TypeId::DOUBLE),
    ]
}

fn flags_strategy() -> impl Strategy<Value = Flags> {
    (0u64..(1 << 8)).prop_map(Flags::from_bitmap)
}

proptest! {
    #[test]
    fn relaxed_class_builds_are_stable(name in class_name_strategy()) {
        let registry = TypeRegistry::new();
        let first = registry.build_class(&name);
        let second = registry.build_class(&name);
        prop_assert_eq!(first, second);
        prop_assert_eq!(registry.fully_qualified_name(first), Some(name));
    }

    #[test]
    fn variables_intern_on_structure(
        name in field_name_strategy(),
        ty in primitive_strategy(),
        flags in flags_strategy(),
    ) {
        let registry = TypeRegistry::new();
        let owner = registry.build_class("com.example.Owner");
        let a = registry.build_variable(&name, owner, Some(ty), Vec::new(), flags);
        let b = registry.build_variable(&name, owner, Some(ty), Vec::new(), flags);
        prop_assert_eq!(a, b);
        prop_assert!(registry.deep_equals(a, b));
    }

    #[test]
    fn exact_class_builds_are_order_insensitive_in_members(
        names in prop::collection::btree_set(field_name_strategy(), 1..6),
    ) {
        let registry = TypeRegistry::new();
        let owner = registry.build_class("com.example.Bag");
        let members: Vec<TypeId> = names
            .iter()
            .map(|n| registry.build_variable(n, owner, Some(TypeId::INT), Vec::new(), Flags::PUBLIC))
            .collect();
        let mut reversed = members.clone();
        reversed.reverse();

        let spec = ClassSpec::new("com.example.Bag").with_supertype(Some(TypeId::OBJECT));
        let forward = registry.build_class_from(spec.clone().with_members(members));
        let backward = registry.build_class_from(spec.with_members(reversed));
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn parameterized_identity_follows_arguments(
        args in prop::collection::vec(primitive_strategy(), 0..4),
    ) {
        let registry = TypeRegistry::new();
        let raw = registry.build_class("java.util.Function");
        let a = registry.build_parameterized(raw, &args);
        let b = registry.build_parameterized(raw, &args);
        prop_assert_eq!(a, b);

        let mut extended = args.clone();
        extended.push(TypeId::OBJECT);
        prop_assert_ne!(a, registry.build_parameterized(raw, &extended));
    }

    #[test]
    fn clear_restarts_allocation(names in prop::collection::vec(class_name_strategy(), 1..8)) {
        let registry = TypeRegistry::new();
        for name in &names {
            registry.build_class(name);
        }
        registry.clear();
        prop_assert!(registry.is_empty());
        let rebuilt = registry.build_class("com.example.Fresh");
        prop_assert_eq!(rebuilt.raw(), TypeId::FIRST_DYNAMIC);
    }
}
