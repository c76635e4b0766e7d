//! Interning from many threads at once.
//!
//! Every thread builds the same descriptors; all of them must come back with
//! the same handles, and each table must hold exactly one entry per identity.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use remold_types::{ClassSpec, Flags, MethodSpec, SharedTypeRegistry, Signature, TypeId};

const THREADS: usize = 8;

#[derive(Debug, PartialEq, Eq)]
struct Built {
    relaxed: TypeId,
    nested: TypeId,
    exact: TypeId,
    field: TypeId,
    method: TypeId,
    parameterized: TypeId,
    array: TypeId,
}

fn build_all(registry: &SharedTypeRegistry) -> Built {
    let relaxed = registry.build_class("java.util.List");
    let nested = registry.build_class("java.util.Map$Entry");
    let field = registry.build_variable("size", relaxed, Some(TypeId::INT), Vec::new(), Flags::PRIVATE);
    let exact = registry.build_class_from(
        ClassSpec::new("java.util.ArrayList")
            .with_members(vec![field])
            .with_interfaces(vec![relaxed])
            .with_supertype(Some(TypeId::OBJECT)),
    );
    let method = registry.build_method(
        MethodSpec::new(relaxed, "add")
            .with_signature(Signature::new(Some(TypeId::BOOLEAN), vec![TypeId::OBJECT]))
            .with_param_names(["e"]),
    );
    let parameterized = registry.build_parameterized(relaxed, &[TypeId::STRING]);
    let array = registry.array(Some(parameterized));
    Built {
        relaxed,
        nested,
        exact,
        field,
        method,
        parameterized,
        array,
    }
}

#[test]
fn concurrent_builds_agree() {
    let registry = SharedTypeRegistry::default();

    let results: Vec<Built> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let registry = registry.clone();
                scope.spawn(move || build_all(&registry))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let first = &results[0];
    for other in &results[1..] {
        assert_eq!(first, other);
    }

    let stats = registry.stats();
    // Object, List, Map, Map$Entry, ArrayList
    assert_eq!(stats.class_names, 5);
    assert_eq!(stats.class_variants, 5);
    assert_eq!(stats.variables, 1);
    assert_eq!(stats.methods, 1);
    assert_eq!(stats.trie_nodes, 2);
}

#[test]
fn concurrent_distinct_names_do_not_collide() {
    let registry = SharedTypeRegistry::default();

    let per_thread: Vec<Vec<TypeId>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let registry = registry.clone();
                scope.spawn(move || {
                    (0..64)
                        .map(|i| registry.build_class(&format!("com.example.T{t}x{i}")))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let mut all: Vec<TypeId> = per_thread.into_iter().flatten().collect();
    all.sort();
    all.dedup();
    assert_eq!(all.len(), THREADS * 64);
    assert_eq!(registry.stats().class_names, THREADS * 64 + 1);
}

#[test]
fn shared_handles_see_one_registry() {
    let registry = SharedTypeRegistry::default();
    let clone = registry.clone();
    assert!(registry.same_registry(&clone));
    assert!(!registry.same_registry(&SharedTypeRegistry::default()));

    let id = clone.build_class("com.example.Seen");
    assert_eq!(registry.find_class("com.example.Seen"), Some(id));
}
