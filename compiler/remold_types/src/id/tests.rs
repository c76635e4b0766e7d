use super::*;

#[test]
fn primitive_indices_follow_declaration_order() {
    for (i, primitive) in Primitive::ALL.iter().enumerate() {
        assert_eq!(TypeId::of_primitive(*primitive).index(), i);
        assert_eq!(TypeId::from_raw(i as u32).primitive(), Some(*primitive));
    }
    assert_eq!(TypeId::INT, TypeId::from(Primitive::Int));
    assert_eq!(TypeId::NULL.raw(), 12);
}

#[test]
fn object_is_not_primitive() {
    assert!(!TypeId::OBJECT.is_primitive());
    assert!(!TypeId::OBJECT.is_dynamic());
    assert_eq!(TypeId::OBJECT.primitive(), None);
    assert!(TypeId::from_raw(TypeId::FIRST_DYNAMIC).is_dynamic());
}

#[test]
fn debug_names_fixed_slots() {
    assert_eq!(format!("{:?}", TypeId::LONG), "TypeId::Long");
    assert_eq!(format!("{:?}", TypeId::OBJECT), "TypeId::OBJECT");
    assert_eq!(format!("{:?}", TypeId::from_raw(99)), "TypeId(99)");
    assert_eq!(TypeId::from_raw(99).to_string(), "#99");
}
