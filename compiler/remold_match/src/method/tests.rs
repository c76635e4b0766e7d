#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use super::*;
use pretty_assertions::assert_eq;
use remold_parse::{parse, parse_expression};
use remold_types::{ClassKind, ClassSpec, MethodSpec, MethodType, Signature};

fn method(registry: &TypeRegistry, declaring_type: TypeId, name: &str, params: Vec<TypeId>) -> TypeId {
    registry.build_method(MethodSpec {
        resolved_signature: Some(Signature::new(Some(TypeId::BOOLEAN), params)),
        ..MethodSpec::new(declaring_type, name)
    })
}

fn invocation(source: &str, method_type: TypeId) -> J {
    let J::MethodInvocation(invocation) = parse_expression(source).unwrap() else {
        panic!("`{source}` is not a method invocation");
    };
    let mut invocation = (*invocation).clone();
    invocation.method_type = Some(method_type);
    invocation.into()
}

fn find_method_declaration(tree: &J) -> Option<MethodDeclaration> {
    if let J::MethodDeclaration(declaration) = tree {
        return Some((**declaration).clone());
    }
    let mut found = None;
    tree.for_each_child(&mut |child| {
        if found.is_none() {
            found = find_method_declaration(child);
        }
    });
    found
}

#[test]
fn list_add_matches_every_overload_of_add() {
    let registry = TypeRegistry::new();
    let list = registry.build_class_of_kind("java.util.List", ClassKind::Interface);
    let add = method(&registry, list, "add", vec![TypeId::OBJECT]);
    let add_at = method(&registry, list, "add", vec![TypeId::INT, TypeId::OBJECT]);
    let remove = method(&registry, list, "remove", vec![TypeId::OBJECT]);

    let matcher = MethodMatcher::new("java.util.List add(..)").unwrap();
    assert!(matcher.matches(&registry, &invocation("list.add(x)", add)));
    assert!(matcher.matches(&registry, &invocation("list.add(0, x)", add_at)));
    assert!(!matcher.matches(&registry, &invocation("list.remove(x)", remove)));
}

#[test]
fn exact_arguments_must_match_in_order() {
    let registry = TypeRegistry::new();
    let list = registry.build_class("java.util.List");
    let add_at = method(&registry, list, "add", vec![TypeId::INT, TypeId::OBJECT]);

    assert!(MethodMatcher::new("java.util.List add(int, Object)")
        .unwrap()
        .matches_method_type(&registry, add_at));
    assert!(!MethodMatcher::new("java.util.List add(Object, int)")
        .unwrap()
        .matches_method_type(&registry, add_at));
    assert!(!MethodMatcher::new("java.util.List add(int)")
        .unwrap()
        .matches_method_type(&registry, add_at));
}

#[test]
fn double_dot_absorbs_any_number_of_arguments() {
    let registry = TypeRegistry::new();
    let class = registry.build_class("my.org.MyClass");
    let none = method(&registry, class, "run", vec![]);
    let one = method(&registry, class, "run", vec![TypeId::BOOLEAN]);
    let three = method(&registry, class, "run", vec![TypeId::BOOLEAN, TypeId::INT, TypeId::LONG]);
    let other = method(&registry, class, "run", vec![TypeId::INT]);

    let leading = MethodMatcher::new("my.org.MyClass *(boolean, ..)").unwrap();
    assert!(leading.matches_method_type(&registry, one));
    assert!(leading.matches_method_type(&registry, three));
    assert!(!leading.matches_method_type(&registry, other));
    assert!(!leading.matches_method_type(&registry, none));

    let trailing = MethodMatcher::new("my.org.MyClass run(.., long)").unwrap();
    assert!(trailing.matches_method_type(&registry, three));
    assert!(!trailing.matches_method_type(&registry, one));

    let any = MethodMatcher::new("my.org.MyClass run(..)").unwrap();
    assert!(any.matches_method_type(&registry, none));
    assert!(any.matches_method_type(&registry, three));

    let empty = MethodMatcher::new("my.org.MyClass run()").unwrap();
    assert!(empty.matches_method_type(&registry, none));
    assert!(!empty.matches_method_type(&registry, one));
}

#[test]
fn varargs_and_arrays() {
    let registry = TypeRegistry::new();
    let class = registry.build_class("a.Fmt");
    let objects = registry.array(Some(TypeId::OBJECT));
    let format = method(&registry, class, "format", vec![TypeId::STRING, objects]);

    assert!(MethodMatcher::new("a.Fmt format(String, Object...)")
        .unwrap()
        .matches_method_type(&registry, format));
    assert!(MethodMatcher::new("a.Fmt format(String, Object[])")
        .unwrap()
        .matches_method_type(&registry, format));
    assert!(!MethodMatcher::new("a.Fmt format(String, Object)")
        .unwrap()
        .matches_method_type(&registry, format));
}

#[test]
fn name_wildcards_stay_within_the_name() {
    let registry = TypeRegistry::new();
    let collections = registry.build_class("java.util.Collections");
    let list = method(&registry, collections, "unmodifiableList", vec![TypeId::OBJECT]);
    let min = method(&registry, collections, "min", vec![TypeId::OBJECT]);

    let matcher = MethodMatcher::new("java.util.Collections unmodifiable*(..)").unwrap();
    assert!(matcher.matches_method_type(&registry, list));
    assert!(!matcher.matches_method_type(&registry, min));
    assert!(MethodMatcher::new("* *(..)")
        .unwrap()
        .matches_method_type(&registry, min));
}

#[test]
fn declaring_type_matches_through_supertypes() {
    let registry = TypeRegistry::new();
    let base = registry.build_class("a.AbstractList");
    let list = registry.build_class_from(ClassSpec::new("a.ArrayList").with_supertype(Some(base)));
    let size = method(&registry, list, "size", vec![]);

    assert!(MethodMatcher::new("a.AbstractList size()")
        .unwrap()
        .matches_method_type(&registry, size));
    assert!(MethodMatcher::new("java.lang.Object size()")
        .unwrap()
        .matches_method_type(&registry, size));
    assert!(!MethodMatcher::new("a.LinkedList size()")
        .unwrap()
        .matches_method_type(&registry, size));
}

#[test]
fn interfaces_need_overrides() {
    let registry = TypeRegistry::new();
    let api = registry.build_class_of_kind("a.Api", ClassKind::Interface);
    let implementation =
        registry.build_class_from(ClassSpec::new("a.Impl").with_interfaces(vec![api]));
    let run = method(&registry, implementation, "run", vec![]);

    let matcher = MethodMatcher::new("a.Api run()").unwrap();
    assert!(!matcher.matches_method_type(&registry, run));
    assert!(matcher.with_overrides(true).matches_method_type(&registry, run));
}

#[test]
fn constructors_match_by_constructor_name() {
    let registry = TypeRegistry::new();
    let foo = registry.build_class("a.Foo");
    let constructor = method(&registry, foo, MethodType::CONSTRUCTOR_NAME, vec![TypeId::INT]);

    let J::NewClass(new_class) = parse_expression("new Foo(1)").unwrap() else {
        panic!("not a constructor call");
    };
    let mut new_class = (*new_class).clone();
    assert!(!MethodMatcher::new("a.Foo <constructor>(int)")
        .unwrap()
        .matches_new_class(&registry, &new_class));

    new_class.constructor_type = Some(constructor);
    let tree: J = new_class.into();
    assert!(MethodMatcher::new("a.Foo <constructor>(int)")
        .unwrap()
        .matches(&registry, &tree));
    assert!(!MethodMatcher::new("a.Foo <constructor>()")
        .unwrap()
        .matches(&registry, &tree));
}

#[test]
fn missing_type_information_never_matches() {
    let registry = TypeRegistry::new();
    let list = registry.build_class("java.util.List");
    let unresolved = registry.build_method(MethodSpec::new(list, "add"));
    let matcher = MethodMatcher::new("java.util.List add(..)").unwrap();

    assert!(!matcher.matches(&registry, &parse_expression("list.add(x)").unwrap()));
    assert!(!matcher.matches(&registry, &invocation("list.add(x)", unresolved)));
    assert!(!matcher.matches(&registry, &parse_expression("x").unwrap()));
}

#[test]
fn declarations_round_trip_through_their_pattern() {
    let registry = TypeRegistry::new();
    let class = registry.build_class("p.A");
    let m = method(&registry, class, "m", vec![TypeId::INT, TypeId::STRING]);

    let tree = parse("class A { void m(int a, String b) {} }").unwrap();
    let J::CompilationUnit(unit) = &tree else {
        panic!("not a compilation unit");
    };
    let J::ClassDeclaration(enclosing) = &unit.classes[0] else {
        panic!("not a class");
    };
    let mut enclosing = (**enclosing).clone();
    let mut declaration = find_method_declaration(&tree).unwrap();

    assert_eq!(MethodMatcher::method_pattern(&registry, &declaration), None);

    declaration.method_type = Some(m);
    let pattern = MethodMatcher::method_pattern(&registry, &declaration).unwrap();
    assert_eq!(pattern, "p.A m(int,java.lang.String)");

    let matcher = MethodMatcher::new(&pattern).unwrap();
    assert!(!matcher.matches_declaration(&registry, &declaration, &enclosing));
    enclosing.ty = Some(class);
    assert!(matcher.matches_declaration(&registry, &declaration, &enclosing));
    assert!(!MethodMatcher::new("p.A n(..)")
        .unwrap()
        .matches_declaration(&registry, &declaration, &enclosing));
}

#[test]
fn qualified_class_reference() {
    let J::FieldAccess(access) = parse_expression("java.util.Collections.emptyList").unwrap() else {
        panic!("not a field access");
    };
    let matcher = MethodMatcher::new("java.util.Collections emptyList()").unwrap();
    assert!(matcher.is_fully_qualified_class_reference(&access));
    let other = MethodMatcher::new("java.util.Collections emptySet()").unwrap();
    assert!(!other.is_fully_qualified_class_reference(&access));
}

#[test]
fn hash_separates_type_and_name() {
    let matcher = MethodMatcher::new("java.util.List#add(..)").unwrap();
    assert_eq!(matcher.signature(), "java.util.List#add(..)");
}

#[test]
fn malformed_patterns_fail_at_construction() {
    assert!(matches!(MethodMatcher::new(""), Err(MatcherError::UnexpectedEnd)));
    assert!(matches!(
        MethodMatcher::new("java.util.List"),
        Err(MatcherError::MissingMethodName)
    ));
    assert!(matches!(
        MethodMatcher::new("java.util.List(..)"),
        Err(MatcherError::MissingMethodName)
    ));
    assert!(matches!(
        MethodMatcher::new("java.util.List add("),
        Err(MatcherError::UnexpectedEnd)
    ));
    match MethodMatcher::new("java.util.List add(int;)") {
        Err(MatcherError::UnexpectedChar {
            position, found, ..
        }) => {
            assert_eq!(position, 22);
            assert_eq!(found, ';');
        }
        other => panic!("expected an unexpected-char error, got {other:?}"),
    }
    assert!(matches!(
        MethodMatcher::new("java.util.List add() extra"),
        Err(MatcherError::UnexpectedChar { found: 'e', .. })
    ));
}
