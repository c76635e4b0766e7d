#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use super::*;
use remold_parse::parse;
use remold_tree::Identifier;
use remold_types::TypeId;

fn find_annotation(tree: &J) -> Option<Annotation> {
    if let J::Annotation(annotation) = tree {
        return Some((**annotation).clone());
    }
    let mut found = None;
    tree.for_each_child(&mut |child| {
        if found.is_none() {
            found = find_annotation(child);
        }
    });
    found
}

/// The first annotation of `source`, typed as `ty`.
fn typed_annotation(source: &str, ty: Option<TypeId>) -> J {
    let mut annotation = find_annotation(&parse(source).unwrap()).expect("no annotation");
    annotation.annotation_type = match &annotation.annotation_type {
        J::Identifier(ident) => Identifier::clone(ident).with_type(ty).into(),
        J::FieldAccess(access) => {
            let mut access = (**access).clone();
            access.ty = ty;
            access.into()
        }
        other => other.clone(),
    };
    annotation.into()
}

#[test]
fn matches_by_attached_type() {
    let registry = TypeRegistry::new();
    let deprecated = registry.build_class("java.lang.Deprecated");
    let tree = typed_annotation("@Deprecated class A {}", Some(deprecated));

    assert!(AnnotationMatcher::new("@java.lang.Deprecated")
        .unwrap()
        .matches(&registry, &tree));
    assert!(AnnotationMatcher::new("@Deprecated")
        .unwrap()
        .matches(&registry, &tree));
    assert!(AnnotationMatcher::new("@java..*")
        .unwrap()
        .matches(&registry, &tree));
    assert!(!AnnotationMatcher::new("@java.lang.Override")
        .unwrap()
        .matches(&registry, &tree));
}

#[test]
fn qualified_annotation_names_carry_their_type() {
    let registry = TypeRegistry::new();
    let test = registry.build_class("org.junit.Test");
    let tree = typed_annotation("@org.junit.Test class A {}", Some(test));

    assert!(AnnotationMatcher::new("@org.junit.*")
        .unwrap()
        .matches(&registry, &tree));
}

#[test]
fn untyped_annotations_never_match() {
    let registry = TypeRegistry::new();
    let tree = typed_annotation("@Deprecated class A {}", None);
    assert!(!AnnotationMatcher::new("@Deprecated")
        .unwrap()
        .matches(&registry, &tree));
    assert!(!AnnotationMatcher::new("@*")
        .unwrap()
        .matches(&registry, &parse("class A {}").unwrap()));
}

#[test]
fn unnamed_argument_binds_to_value() {
    let registry = TypeRegistry::new();
    let suppress = registry.build_class("java.lang.SuppressWarnings");
    let tree = typed_annotation("@SuppressWarnings(\"all\") class A {}", Some(suppress));

    assert!(AnnotationMatcher::new("@SuppressWarnings(\"all\")")
        .unwrap()
        .matches(&registry, &tree));
    assert!(AnnotationMatcher::new("@SuppressWarnings(value = \"all\")")
        .unwrap()
        .matches(&registry, &tree));
    assert!(!AnnotationMatcher::new("@SuppressWarnings(\"unchecked\")")
        .unwrap()
        .matches(&registry, &tree));
}

#[test]
fn named_arguments_match_in_any_order() {
    let registry = TypeRegistry::new();
    let retry = registry.build_class("a.Retry");
    let tree = typed_annotation(
        "@Retry(times = 3, delay = 10, jitter = true) class A {}",
        Some(retry),
    );

    assert!(AnnotationMatcher::new("@a.Retry(delay=10, times = 3)")
        .unwrap()
        .matches(&registry, &tree));
    assert!(AnnotationMatcher::new("@a.Retry()")
        .unwrap()
        .matches(&registry, &tree));
    assert!(!AnnotationMatcher::new("@a.Retry(times = 4)")
        .unwrap()
        .matches(&registry, &tree));
    assert!(!AnnotationMatcher::new("@a.Retry(backoff = 3)")
        .unwrap()
        .matches(&registry, &tree));
}

#[test]
fn quoted_values_keep_separators() {
    let matcher = AnnotationMatcher::new(r#"@a.Name("x, y = \"z\")")"#).unwrap();
    assert_eq!(
        matcher.arguments,
        vec![ArgumentPattern {
            name: VALUE.to_string(),
            value: r#""x, y = \"z\")""#.to_string(),
        }]
    );
    assert_eq!(matcher.signature(), r#"@a.Name("x, y = \"z\")")"#);
}

#[test]
fn malformed_patterns_fail_at_construction() {
    assert!(matches!(
        AnnotationMatcher::new("Deprecated"),
        Err(MatcherError::UnexpectedChar { found: 'D', position: 0, .. })
    ));
    assert!(matches!(
        AnnotationMatcher::new("@"),
        Err(MatcherError::UnexpectedEnd)
    ));
    assert!(matches!(
        AnnotationMatcher::new("@a.B(x = \"open"),
        Err(MatcherError::UnexpectedEnd)
    ));
    assert!(matches!(
        AnnotationMatcher::new("@a.B(x) y"),
        Err(MatcherError::UnexpectedChar { found: 'y', .. })
    ));
    assert!(matches!(
        AnnotationMatcher::new("@a.B(,)"),
        Err(MatcherError::UnexpectedChar { found: ',', .. })
    ));
}
