use std::{
    any::{self, Any},
    fmt,
    rc::Rc,
};

/// A value that can be carried through the [`Kind::Object`] case of
/// a [`Union`].
///
/// This is implemented for every `'static` type which can be compared,
/// displayed and debugged. [`fmt::Display`] serves as the textual
/// representation of the value.
///
/// [`Kind::Object`]: crate::Kind::Object
/// [`Union`]: crate::Union
pub trait Object: Any + fmt::Debug + fmt::Display {
    /// Gets the value as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Gets the name of the concrete type behind this object.
    fn type_name(&self) -> &'static str;

    /// Compares against another object through the equality of the
    /// concrete type.
    ///
    /// Objects of different concrete types are never equal.
    fn dyn_eq(&self, other: &dyn Object) -> bool;
}

impl<T: Any + fmt::Debug + fmt::Display + PartialEq> Object for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn type_name(&self) -> &'static str {
        any::type_name::<T>()
    }

    fn dyn_eq(&self, other: &dyn Object) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

/// A reference-counted handle with shared ownership of an [`Object`].
///
/// Cloning the handle never clones the referenced value. Every handle
/// keeps the value alive, so it lives until the last handle is dropped.
#[derive(Clone)]
pub struct ObjectRef(Rc<dyn Object>);

impl ObjectRef {
    /// Moves `value` behind a new shared handle.
    pub fn new<T: Object>(value: T) -> Self {
        Self(Rc::new(value))
    }

    /// Wraps an already shared object.
    pub fn from_rc(value: Rc<dyn Object>) -> Self {
        Self(value)
    }

    /// Gets the referenced object.
    #[inline]
    pub fn as_object(&self) -> &dyn Object {
        &*self.0
    }

    /// Gets the name of the referenced value's concrete type.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.as_object().type_name()
    }

    /// Whether the referenced value is of type `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.as_object().as_any().is::<T>()
    }

    /// Borrows the referenced value as `T`, if it is one.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_object().as_any().downcast_ref::<T>()
    }

    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Compares the referenced values by their own equality.
    pub fn value_eq(&self, other: &Self) -> bool {
        self.as_object().dyn_eq(other.as_object())
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_object(), f)
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_object(), f)
    }
}
