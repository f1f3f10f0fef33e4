//! Parsing of textual literals into [`Union`] values.
//!
//! Kinds are looked up by type name. Both the Rust spellings
//! (`i32`, `f64`, ...) and the common C-family spellings (`int`,
//! `double`, ...) are understood.

use phf::phf_map;

use crate::{Error, Kind, Union};

type ParseCallback = fn(&str) -> Option<Union>;

static PARSER_LUT: phf::Map<&'static str, (Kind, ParseCallback)> = phf_map! {
    "bool" => (Kind::Bool, |s| s.parse().ok().map(Union::Bool)),
    "boolean" => (Kind::Bool, |s| s.parse().ok().map(Union::Bool)),
    "char" => (Kind::Char, parse_char),

    "i8" => (Kind::I8, |s| s.parse().ok().map(Union::I8)),
    "sbyte" => (Kind::I8, |s| s.parse().ok().map(Union::I8)),
    "u8" => (Kind::U8, |s| s.parse().ok().map(Union::U8)),
    "byte" => (Kind::U8, |s| s.parse().ok().map(Union::U8)),
    "i16" => (Kind::I16, |s| s.parse().ok().map(Union::I16)),
    "short" => (Kind::I16, |s| s.parse().ok().map(Union::I16)),
    "u16" => (Kind::U16, |s| s.parse().ok().map(Union::U16)),
    "ushort" => (Kind::U16, |s| s.parse().ok().map(Union::U16)),
    "i32" => (Kind::I32, |s| s.parse().ok().map(Union::I32)),
    "int" => (Kind::I32, |s| s.parse().ok().map(Union::I32)),
    "u32" => (Kind::U32, |s| s.parse().ok().map(Union::U32)),
    "uint" => (Kind::U32, |s| s.parse().ok().map(Union::U32)),
    "i64" => (Kind::I64, |s| s.parse().ok().map(Union::I64)),
    "long" => (Kind::I64, |s| s.parse().ok().map(Union::I64)),
    "u64" => (Kind::U64, |s| s.parse().ok().map(Union::U64)),
    "ulong" => (Kind::U64, |s| s.parse().ok().map(Union::U64)),

    "f32" => (Kind::F32, |s| s.parse().ok().map(Union::F32)),
    "float" => (Kind::F32, |s| s.parse().ok().map(Union::F32)),
    "f64" => (Kind::F64, |s| s.parse().ok().map(Union::F64)),
    "double" => (Kind::F64, |s| s.parse().ok().map(Union::F64)),

    "string" => (Kind::Object, |s| Some(Union::from(s))),
    "object" => (Kind::Object, |s| Some(Union::from(s))),
};

fn parse_char(s: &str) -> Option<Union> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(Union::Char(c)),
        _ => None,
    }
}

/// Gets the kind a type name parses into.
#[inline]
pub fn kind_of(ty: &str) -> Option<Kind> {
    PARSER_LUT.get(ty).map(|(kind, _)| *kind)
}

/// Gets all type names understood by [`parse`].
pub fn type_names() -> impl Iterator<Item = &'static str> {
    PARSER_LUT.keys().copied()
}

/// Parses `literal` as a value of the named type.
///
/// `string` and `object` literals are taken verbatim and stored as
/// [`String`] objects.
pub fn parse(ty: &str, literal: &str) -> Result<Union, Error> {
    let (kind, f) = PARSER_LUT
        .get(ty)
        .ok_or_else(|| Error::UnsupportedType(ty.to_owned()))?;

    f(literal).ok_or_else(|| Error::BadLiteral {
        kind: *kind,
        literal: literal.to_owned(),
    })
}
