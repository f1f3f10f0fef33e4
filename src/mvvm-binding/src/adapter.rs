//! Conversion of [`Union`] values between declared types.
//!
//! Adapters are total. Inputs that do not match the declared source
//! type are returned unchanged, so partially matching chains degrade
//! to identity instead of failing.

use std::{
    any::{self, Any, TypeId},
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use mvvm_union::{ObjectRef, Union, UnionValue};

mod chain;
pub use chain::*;

mod object_to_string;
pub use object_to_string::*;

/// Identifies a type an [`Adapter`] converts from or to.
///
/// Descriptors compare by type identity only. The name is used for
/// display and lookups by name.
#[derive(Clone, Copy, Debug)]
pub struct TypeDesc {
    id: TypeId,
    name: &'static str,
}

impl TypeDesc {
    /// Describes `T` under its full type name.
    #[inline]
    pub fn of<T: Any>() -> Self {
        Self::with_name::<T>(any::type_name::<T>())
    }

    /// Describes `T` under a custom name.
    #[inline]
    pub fn with_name<T: Any>(name: &'static str) -> Self {
        Self {
            id: TypeId::of::<T>(),
            name,
        }
    }

    /// Describes arbitrary objects, named `object`.
    #[inline]
    pub fn object() -> Self {
        Self::with_name::<ObjectRef>("object")
    }

    /// Describes [`String`], named `string`.
    #[inline]
    pub fn string() -> Self {
        Self::with_name::<String>("string")
    }

    /// Describes any [`Union`], named `union`.
    #[inline]
    pub fn union() -> Self {
        Self::with_name::<Union>("union")
    }

    /// Gets the identity of the described type.
    #[inline]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Gets the name of the described type.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this describes `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeDesc {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDesc {}

impl Hash for TypeDesc {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A pure conversion from one [`Union`] to another.
///
/// Implementations declare the types they convert between and must
/// return the input unchanged when it does not hold the source type.
pub trait Adapter {
    /// The type this adapter converts from.
    fn source(&self) -> TypeDesc;

    /// The type this adapter converts to.
    fn destination(&self) -> TypeDesc;

    /// Converts `union`, or returns it unchanged on mismatch.
    fn convert(&self, union: &Union) -> Union;
}

impl fmt::Debug for dyn Adapter + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Adapter({} => {})", self.source(), self.destination())
    }
}

impl<A: Adapter + ?Sized> Adapter for Box<A> {
    fn source(&self) -> TypeDesc {
        (**self).source()
    }

    fn destination(&self) -> TypeDesc {
        (**self).destination()
    }

    fn convert(&self, union: &Union) -> Union {
        (**self).convert(union)
    }
}

/// An [`Adapter`] backed by a typed function from `S` to `D`.
///
/// The function only runs when the input extracts as `S`.
pub struct FnAdapter<S, D, F> {
    f: F,
    _marker: PhantomData<fn(S) -> D>,
}

impl<S, D, F> FnAdapter<S, D, F>
where
    S: UnionValue,
    D: UnionValue,
    F: Fn(S) -> D,
{
    /// Creates an adapter that applies `f` to matching inputs.
    pub fn new(f: F) -> Self {
        Self {
            f,
            _marker: PhantomData,
        }
    }
}

impl<S, D, F> Adapter for FnAdapter<S, D, F>
where
    S: UnionValue,
    D: UnionValue,
    F: Fn(S) -> D,
{
    fn source(&self) -> TypeDesc {
        TypeDesc::of::<S>()
    }

    fn destination(&self) -> TypeDesc {
        TypeDesc::of::<D>()
    }

    fn convert(&self, union: &Union) -> Union {
        match union.try_get::<S>() {
            Some(value) => (self.f)(value).into_union(),
            None => union.clone(),
        }
    }
}
