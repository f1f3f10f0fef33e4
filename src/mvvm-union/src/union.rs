use std::{
    any::{self, Any, TypeId},
    fmt,
};

use crate::{Kind, Object, ObjectRef, UnionValue};

/// The integer backing of a user-defined enum value.
///
/// Carries the identity of the enum type so that values of distinct
/// enum types never extract as each other.
#[derive(Clone, Copy, Debug)]
pub struct EnumValue {
    type_id: TypeId,
    type_name: &'static str,
    value: i64,
}

impl EnumValue {
    /// Creates the backing for a variant of enum type `T`.
    #[inline]
    pub fn of<T: Any>(value: i64) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: any::type_name::<T>(),
            value,
        }
    }

    /// Gets the raw integer value.
    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Gets the name of the enum type.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether this value belongs to enum type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Gets the raw integer value if it belongs to enum type `T`.
    #[inline]
    pub fn value_for<T: Any>(&self) -> Option<i64> {
        self.is::<T>().then_some(self.value)
    }
}

impl PartialEq for EnumValue {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id && self.value == other.value
    }
}

/// A tagged value holding one primitive inline or a shared object.
///
/// Primitives never allocate. The [`Union::Object`] case holds an
/// [`ObjectRef`] whose clones share the referenced value.
///
/// Two unions are equal when their kinds are equal and their payload
/// bits match, or, for objects, when the referenced values compare
/// equal under their own type's equality. Floats are therefore
/// compared bitwise.
#[derive(Clone, Debug, Default)]
pub enum Union {
    /// No value was ever assigned.
    #[default]
    Undefined,
    /// A shared handle to an arbitrary value.
    Object(ObjectRef),

    Bool(bool),
    Char(char),
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),

    /// A variant of a user-defined enum type.
    Enum(EnumValue),
}

impl Union {
    /// Moves `value` behind a shared handle and stores it as an object.
    #[inline]
    pub fn from_object<T: Object>(value: T) -> Self {
        Self::Object(ObjectRef::new(value))
    }

    /// Gets the discriminator for the stored value.
    pub fn kind(&self) -> Kind {
        match self {
            Self::Undefined => Kind::Undefined,
            Self::Object(..) => Kind::Object,
            Self::Bool(..) => Kind::Bool,
            Self::Char(..) => Kind::Char,
            Self::I8(..) => Kind::I8,
            Self::U8(..) => Kind::U8,
            Self::I16(..) => Kind::I16,
            Self::U16(..) => Kind::U16,
            Self::I32(..) => Kind::I32,
            Self::U32(..) => Kind::U32,
            Self::I64(..) => Kind::I64,
            Self::U64(..) => Kind::U64,
            Self::F32(..) => Kind::F32,
            Self::F64(..) => Kind::F64,
            Self::Enum(..) => Kind::Enum,
        }
    }

    /// Whether the union was never assigned a value.
    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Extracts the stored value as `T`.
    ///
    /// This only succeeds when `T` matches the stored kind exactly.
    /// For objects, the referenced value must be of type `T`.
    #[inline]
    pub fn try_get<T: UnionValue>(&self) -> Option<T> {
        T::try_from_union(self)
    }

    /// Borrows an object value as `T` without cloning it.
    #[inline]
    pub fn get_ref<T: Any>(&self) -> Option<&T> {
        self.as_object().and_then(ObjectRef::downcast_ref)
    }

    /// Gets the object handle, if this union holds one.
    #[inline]
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Gets the enum backing, if this union holds one.
    #[inline]
    pub fn enum_value(&self) -> Option<&EnumValue> {
        match self {
            Self::Enum(v) => Some(v),
            _ => None,
        }
    }

    /// Gets the payload bit pattern of an inline primitive.
    ///
    /// The bits are only meaningful under [`Union::kind`]. Enum values
    /// yield their backing integer.
    pub fn raw_bits(&self) -> Option<u64> {
        let bits = match *self {
            Self::Undefined | Self::Object(..) => return None,

            Self::Bool(v) => v as u64,
            Self::Char(v) => v as u64,
            Self::I8(v) => v as u8 as u64,
            Self::U8(v) => v as u64,
            Self::I16(v) => v as u16 as u64,
            Self::U16(v) => v as u64,
            Self::I32(v) => v as u32 as u64,
            Self::U32(v) => v as u64,
            Self::I64(v) => v as u64,
            Self::U64(v) => v,
            Self::F32(v) => v.to_bits() as u64,
            Self::F64(v) => v.to_bits(),
            Self::Enum(v) => v.value as u64,
        };

        Some(bits)
    }
}

impl PartialEq for Union {
    fn eq(&self, other: &Self) -> bool {
        if self.kind() != other.kind() {
            return false;
        }

        match (self, other) {
            (Self::Undefined, Self::Undefined) => true,
            (Self::Object(a), Self::Object(b)) => a.value_eq(b),
            (Self::Enum(a), Self::Enum(b)) => a == b,
            (a, b) => a.raw_bits() == b.raw_bits(),
        }
    }
}

impl fmt::Display for Union {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Object(v) => fmt::Display::fmt(v, f),
            Self::Bool(v) => fmt::Display::fmt(v, f),
            Self::Char(v) => fmt::Display::fmt(v, f),
            Self::I8(v) => fmt::Display::fmt(v, f),
            Self::U8(v) => fmt::Display::fmt(v, f),
            Self::I16(v) => fmt::Display::fmt(v, f),
            Self::U16(v) => fmt::Display::fmt(v, f),
            Self::I32(v) => fmt::Display::fmt(v, f),
            Self::U32(v) => fmt::Display::fmt(v, f),
            Self::I64(v) => fmt::Display::fmt(v, f),
            Self::U64(v) => fmt::Display::fmt(v, f),
            Self::F32(v) => fmt::Display::fmt(v, f),
            Self::F64(v) => fmt::Display::fmt(v, f),
            Self::Enum(v) => fmt::Display::fmt(&v.value, f),
        }
    }
}

impl From<ObjectRef> for Union {
    #[inline]
    fn from(value: ObjectRef) -> Self {
        Self::Object(value)
    }
}

impl From<&str> for Union {
    #[inline]
    fn from(value: &str) -> Self {
        Self::from_object(value.to_owned())
    }
}

impl<T: Into<Union>> From<Option<T>> for Union {
    /// Maps [`None`] to [`Union::Undefined`].
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}
