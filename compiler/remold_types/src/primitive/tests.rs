use super::*;

#[test]
fn keywords_round_trip() {
    for primitive in Primitive::ALL {
        assert_eq!(Primitive::from_keyword(primitive.keyword()), Some(primitive));
    }
}

#[test]
fn special_keywords() {
    assert_eq!(Primitive::from_keyword("*"), Some(Primitive::Wildcard));
    assert_eq!(Primitive::from_keyword(""), Some(Primitive::None));
    assert_eq!(Primitive::from_keyword("String"), Some(Primitive::String));
    assert_eq!(Primitive::from_keyword("java.lang.String"), None);
    assert_eq!(Primitive::from_keyword("Integer"), None);
}

#[test]
fn numeric_classification() {
    assert!(Primitive::Int.is_numeric());
    assert!(Primitive::Char.is_numeric());
    assert!(!Primitive::Boolean.is_numeric());
    assert!(!Primitive::String.is_numeric());
}
