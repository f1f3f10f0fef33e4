use std::any::{Any, TypeId};

use mvvm_union::{Error, Kind, Union, VariantRegistry};

#[derive(Clone, Debug, PartialEq)]
struct Unregistered(u8);

#[test]
fn builtins_convert_erased_values() -> Result<(), Error> {
    let registry = VariantRegistry::with_builtins();

    assert_eq!(registry.to_union(&7i32)?, Union::I32(7));
    assert_eq!(registry.to_union(&String::from("x"))?, Union::from("x"));

    let erased: &dyn Any = &2.5f64;
    assert_eq!(registry.to_union_dyn(erased)?, Union::F64(2.5));

    assert_eq!(registry.kind_of(TypeId::of::<u16>()), Some(Kind::U16));
    assert_eq!(registry.kind_of(TypeId::of::<String>()), Some(Kind::Object));

    Ok(())
}

#[test]
fn unregistered_types_are_rejected() {
    let registry = VariantRegistry::with_builtins();

    let err = registry.to_union(&Unregistered(1)).unwrap_err();
    assert!(matches!(err, Error::UnsupportedType(ref name) if name.ends_with("Unregistered")));

    let erased: &dyn Any = &Unregistered(1);
    assert!(matches!(
        registry.to_union_dyn(erased),
        Err(Error::UnsupportedType(..))
    ));
}

#[test]
fn register_reports_duplicates() {
    let mut registry = VariantRegistry::new();

    assert!(!registry.contains::<bool>());
    assert!(registry.register::<bool>());
    assert!(!registry.register::<bool>());
    assert!(registry.contains::<bool>());
    assert_eq!(registry.type_names().count(), 1);
}

#[test]
fn type_names_keep_registration_order() {
    let mut registry = VariantRegistry::new();
    registry.register::<u64>();
    registry.register::<bool>();
    registry.register::<String>();

    let names: Vec<_> = registry.type_names().collect();
    assert_eq!(names, ["u64", "bool", "alloc::string::String"]);
}

#[test]
fn erased_errors_name_the_type_id() {
    let registry = VariantRegistry::new();

    let erased: &dyn Any = &Unregistered(1);
    let err = registry.to_union_dyn(erased).unwrap_err();
    assert_eq!(
        err,
        Error::UnsupportedType(format!("<erased {:?}>", TypeId::of::<Unregistered>()))
    );
}
