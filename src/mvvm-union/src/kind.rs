use std::fmt;

/// The discriminator of a [`Union`](crate::Union).
///
/// Every primitive kind is distinct. A value stored under one kind is
/// never reinterpreted as another, even when the widths would allow it.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Kind {
    /// The union was never assigned a value.
    Undefined = 0,
    /// A shared handle to an arbitrary object.
    Object,

    Bool,
    Char,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,

    /// An integer backing a user-defined enum type.
    Enum,
}

impl Kind {
    /// All kinds, in discriminator order.
    pub const ALL: [Kind; 15] = [
        Kind::Undefined,
        Kind::Object,
        Kind::Bool,
        Kind::Char,
        Kind::I8,
        Kind::U8,
        Kind::I16,
        Kind::U16,
        Kind::I32,
        Kind::U32,
        Kind::I64,
        Kind::U64,
        Kind::F32,
        Kind::F64,
        Kind::Enum,
    ];

    /// Gets the stable lowercase name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Object => "object",
            Kind::Bool => "bool",
            Kind::Char => "char",
            Kind::I8 => "i8",
            Kind::U8 => "u8",
            Kind::I16 => "i16",
            Kind::U16 => "u16",
            Kind::I32 => "i32",
            Kind::U32 => "u32",
            Kind::I64 => "i64",
            Kind::U64 => "u64",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::Enum => "enum",
        }
    }

    /// Whether values of this kind are stored inline.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        !matches!(self, Kind::Undefined | Kind::Object)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
