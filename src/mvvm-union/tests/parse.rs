use mvvm_union::{parse, Error, Kind, Union};

#[test]
fn parse_primitives() -> Result<(), Error> {
    assert_eq!(parse("int", "-12")?, Union::I32(-12));
    assert_eq!(parse("u8", "255")?, Union::U8(255));
    assert_eq!(parse("double", "0.5")?, Union::F64(0.5));
    assert_eq!(parse("float", "0.5")?, Union::F32(0.5));
    assert_eq!(parse("bool", "true")?, Union::Bool(true));
    assert_eq!(parse("char", "z")?, Union::Char('z'));
    assert_eq!(parse("string", "two words")?, Union::from("two words"));

    Ok(())
}

#[test]
fn parse_rejects_unknown_types() {
    assert_eq!(
        parse("decimal", "1"),
        Err(Error::UnsupportedType("decimal".into()))
    );
}

#[test]
fn parse_rejects_bad_literals() {
    assert_eq!(
        parse("u8", "256"),
        Err(Error::BadLiteral {
            kind: Kind::U8,
            literal: "256".into()
        })
    );
    assert!(matches!(parse("char", "ab"), Err(Error::BadLiteral { .. })));
    assert!(matches!(parse("bool", "yes"), Err(Error::BadLiteral { .. })));
}

#[test]
fn type_name_lookup() {
    assert_eq!(parse::kind_of("long"), Some(Kind::I64));
    assert_eq!(parse::kind_of("i64"), Some(Kind::I64));
    assert_eq!(parse::kind_of("object"), Some(Kind::Object));
    assert_eq!(parse::kind_of("void"), None);
    assert!(parse::type_names().any(|name| name == "ushort"));
}
