use std::fmt;

use mvvm_binding::{
    Adapter, AdapterLabel, AdapterRegistry, Chain, Error, ErrorKind, FnAdapter,
    ObjectToStringAdapter, TypeDesc, Union,
};
use mvvm_binding::union::{union_object, Kind, ObjectRef};

#[derive(Clone, Debug, PartialEq)]
struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

union_object!(Color);

#[derive(Default)]
struct IntToFloat;

impl Adapter for IntToFloat {
    fn source(&self) -> TypeDesc {
        TypeDesc::of::<i32>()
    }

    fn destination(&self) -> TypeDesc {
        TypeDesc::of::<f32>()
    }

    fn convert(&self, union: &Union) -> Union {
        match union.try_get::<i32>() {
            Some(v) => Union::from(v as f32),
            None => union.clone(),
        }
    }
}

#[test]
fn object_to_string_converts_objects() {
    let adapter = ObjectToStringAdapter;
    let converted = adapter.convert(&Union::from(Color { r: 255, g: 0, b: 16 }));

    assert_eq!(converted.kind(), Kind::Object);
    assert_eq!(converted.try_get::<String>().as_deref(), Some("#ff0010"));
    assert_eq!(adapter.source(), TypeDesc::object());
    assert_eq!(adapter.destination(), TypeDesc::string());
}

#[test]
fn object_to_string_passes_primitives() {
    let adapter = ObjectToStringAdapter;

    for union in [
        Union::Undefined,
        Union::from(1i32),
        Union::from(false),
        Union::from(2.0f64),
    ] {
        assert_eq!(adapter.convert(&union), union);
    }
}

#[test]
fn fn_adapter_declares_its_types() {
    let adapter = FnAdapter::new(|v: bool| String::from(if v { "on" } else { "off" }));

    assert!(adapter.source().is::<bool>());
    assert!(adapter.destination().is::<String>());
    assert_eq!(adapter.convert(&Union::from(true)), Union::from("on"));
    assert_eq!(adapter.convert(&Union::from(1u8)), Union::from(1u8));
}

#[test]
fn chain_applies_in_order() {
    let chain = Chain::new()
        .then(IntToFloat)
        .then(FnAdapter::new(|v: f32| v / 2.0))
        .then(FnAdapter::new(|v: f32| v.to_string()));

    assert_eq!(chain.len(), 3);
    assert!(chain.source().is::<i32>());
    assert!(chain.destination().is::<String>());
    assert_eq!(chain.convert(&Union::from(3i32)), Union::from("1.5"));

    // The first step does not apply, the rest pass the value through.
    assert_eq!(chain.convert(&Union::from('x')), Union::from('x'));
}

#[test]
fn empty_chain_is_identity() {
    let chain = Chain::new();

    assert!(chain.is_empty());
    assert_eq!(chain.source(), TypeDesc::union());
    assert_eq!(chain.convert(&Union::from(9i64)), Union::from(9i64));
}

#[test]
fn registry_defaults() {
    let registry = AdapterRegistry::with_defaults();
    assert_eq!(registry.len(), 1);

    let entry = registry
        .find(TypeDesc::object(), TypeDesc::string())
        .unwrap();
    assert_eq!(entry.label, ObjectToStringAdapter::LABEL);
    assert_eq!(entry.label.directory, "Default");

    let adapter = registry.create(TypeDesc::object(), TypeDesc::string()).unwrap();
    let value = Union::Object(ObjectRef::new(Color { r: 0, g: 0, b: 0 }));
    assert_eq!(adapter.convert(&value), Union::from("#000000"));

    assert!(registry.find_by_name("object", "string").is_some());
    assert!(registry.find_by_name("string", "object").is_none());
}

#[test]
fn registry_lookup_miss_means_passthrough() {
    let registry = AdapterRegistry::with_defaults();
    assert!(registry
        .create(TypeDesc::of::<i32>(), TypeDesc::of::<f32>())
        .is_none());
}

#[test]
fn registry_rejects_duplicates() -> Result<(), Error> {
    let mut registry = AdapterRegistry::new();
    let label = AdapterLabel::new("Int ⇒ Float", "Numbers");

    registry.register_default::<IntToFloat>(label)?;
    let err = registry.register_default::<IntToFloat>(label).unwrap_err();

    assert!(matches!(err, Error::DuplicateAdapter { .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(registry.len(), 1);

    let labels: Vec<_> = registry.iter().map(|e| e.label.label).collect();
    assert_eq!(labels, ["Int ⇒ Float"]);

    Ok(())
}
