use crate::{Kind, ObjectRef, Union};

/// Conversion of a payload type into and out of a [`Union`].
///
/// Every type that takes part in the union system implements this
/// contract. Each implementation names the [`Kind`] it is stored as.
///
/// Primitives, [`String`] and [`ObjectRef`] are supported out of the
/// box. User types can opt in through [`union_enum!`] for fieldless
/// enums and [`union_object!`] for types carried as objects.
///
/// [`union_enum!`]: crate::union_enum
/// [`union_object!`]: crate::union_object
pub trait UnionValue: Sized + 'static {
    /// The kind values of this type are stored as.
    const KIND: Kind;

    /// Converts the value into a [`Union`].
    fn into_union(self) -> Union;

    /// Extracts a value of this type from `union`.
    ///
    /// Returns [`None`] when the union holds any other kind or type.
    fn try_from_union(union: &Union) -> Option<Self>;
}

macro_rules! primitive_impl {
    ($($ty:ty => $variant:ident),* $(,)*) => {
        $(
            impl UnionValue for $ty {
                const KIND: Kind = Kind::$variant;

                #[inline]
                fn into_union(self) -> Union {
                    Union::$variant(self)
                }

                #[inline]
                fn try_from_union(union: &Union) -> Option<Self> {
                    match *union {
                        Union::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for Union {
                #[inline]
                fn from(value: $ty) -> Self {
                    Union::$variant(value)
                }
            }
        )*
    };
}

primitive_impl! {
    bool => Bool,
    char => Char,
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

impl UnionValue for ObjectRef {
    const KIND: Kind = Kind::Object;

    #[inline]
    fn into_union(self) -> Union {
        Union::Object(self)
    }

    #[inline]
    fn try_from_union(union: &Union) -> Option<Self> {
        union.as_object().cloned()
    }
}

/// Implements [`UnionValue`] for types carried through the object case.
///
/// The types must be [`Clone`] and satisfy the [`Object`] bounds.
/// Extraction succeeds only for values of the exact same type.
///
/// ```
/// use mvvm_union::{union_object, Kind, Union};
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Sprite(&'static str);
///
/// impl std::fmt::Display for Sprite {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str(self.0)
///     }
/// }
///
/// union_object!(Sprite);
///
/// let union = Union::from(Sprite("icon"));
/// assert_eq!(union.kind(), Kind::Object);
/// assert_eq!(union.try_get::<Sprite>(), Some(Sprite("icon")));
/// ```
///
/// [`Object`]: crate::Object
#[macro_export]
macro_rules! union_object {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::UnionValue for $ty {
                const KIND: $crate::Kind = $crate::Kind::Object;

                #[inline]
                fn into_union(self) -> $crate::Union {
                    $crate::Union::from_object(self)
                }

                #[inline]
                fn try_from_union(union: &$crate::Union) -> ::core::option::Option<Self> {
                    union.get_ref::<$ty>().cloned()
                }
            }

            impl ::core::convert::From<$ty> for $crate::Union {
                #[inline]
                fn from(value: $ty) -> Self {
                    $crate::UnionValue::into_union(value)
                }
            }
        )+
    };
}

union_object!(String);

/// Implements [`UnionValue`] for a fieldless enum.
///
/// Variants are stored under [`Kind::Enum`] as their `as i64` cast
/// together with the identity of the enum type. Every variant must be
/// listed so that extraction can reject unknown integers.
///
/// ```
/// use mvvm_union::{union_enum, Kind, Union};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum FillMethod {
///     Horizontal,
///     Vertical,
///     Radial = 4,
/// }
///
/// union_enum!(FillMethod { Horizontal, Vertical, Radial });
///
/// let union = Union::from(FillMethod::Radial);
/// assert_eq!(union.kind(), Kind::Enum);
/// assert_eq!(union.try_get::<FillMethod>(), Some(FillMethod::Radial));
/// assert_eq!(union.try_get::<i64>(), None);
/// ```
#[macro_export]
macro_rules! union_enum {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::UnionValue for $ty {
            const KIND: $crate::Kind = $crate::Kind::Enum;

            #[inline]
            fn into_union(self) -> $crate::Union {
                $crate::Union::Enum($crate::EnumValue::of::<$ty>(self as i64))
            }

            fn try_from_union(union: &$crate::Union) -> ::core::option::Option<Self> {
                let value = union.enum_value()?.value_for::<$ty>()?;
                $(
                    if value == $ty::$variant as i64 {
                        return ::core::option::Option::Some($ty::$variant);
                    }
                )+

                ::core::option::Option::None
            }
        }

        impl ::core::convert::From<$ty> for $crate::Union {
            #[inline]
            fn from(value: $ty) -> Self {
                $crate::UnionValue::into_union(value)
            }
        }
    };
}
