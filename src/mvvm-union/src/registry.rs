use std::any::{self, Any, TypeId};

use indexmap::IndexMap;

use crate::{Error, Kind, ObjectRef, Union, UnionValue};

type ConvertCallback = fn(&dyn Any) -> Option<Union>;

#[derive(Clone, Copy, Debug)]
struct Variant {
    name: &'static str,
    kind: Kind,
    convert: ConvertCallback,
}

fn convert<T: UnionValue + Clone>(value: &dyn Any) -> Option<Union> {
    value.downcast_ref::<T>().cloned().map(T::into_union)
}

/// A runtime table of the types that have a [`Union`] variant.
///
/// Statically typed code converts through [`UnionValue`] directly.
/// The registry serves code that only holds a type-erased value and
/// must find out whether it can be published at all.
#[derive(Clone, Debug, Default)]
pub struct VariantRegistry {
    variants: IndexMap<TypeId, Variant>,
}

impl VariantRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with all built-in variants.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        registry.register::<bool>();
        registry.register::<char>();
        registry.register::<i8>();
        registry.register::<u8>();
        registry.register::<i16>();
        registry.register::<u16>();
        registry.register::<i32>();
        registry.register::<u32>();
        registry.register::<i64>();
        registry.register::<u64>();
        registry.register::<f32>();
        registry.register::<f64>();
        registry.register::<String>();
        registry.register::<ObjectRef>();

        registry
    }

    /// Registers the variant of `T`.
    ///
    /// Returns `false` if `T` was already registered.
    pub fn register<T: UnionValue + Clone>(&mut self) -> bool {
        let name = any::type_name::<T>();
        log::debug!("Registering union variant for '{name}' ({})", T::KIND);

        self.variants
            .insert(
                TypeId::of::<T>(),
                Variant {
                    name,
                    kind: T::KIND,
                    convert: convert::<T>,
                },
            )
            .is_none()
    }

    /// Whether a variant is registered for `T`.
    #[inline]
    pub fn contains<T: Any>(&self) -> bool {
        self.variants.contains_key(&TypeId::of::<T>())
    }

    /// Gets the kind a registered type is stored as.
    #[inline]
    pub fn kind_of(&self, id: TypeId) -> Option<Kind> {
        self.variants.get(&id).map(|v| v.kind)
    }

    /// Gets the names of all registered types in registration order.
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.variants.values().map(|v| v.name)
    }

    /// Converts `value` into a [`Union`] through its registered variant.
    pub fn to_union<T: Any>(&self, value: &T) -> Result<Union, Error> {
        self.lookup(value)
            .ok_or_else(|| Error::UnsupportedType(any::type_name::<T>().to_owned()))
    }

    /// Converts a type-erased `value` through its registered variant.
    ///
    /// An erased value carries no type name, so errors name its
    /// [`TypeId`] instead. Prefer [`VariantRegistry::to_union`] where
    /// the static type is known.
    pub fn to_union_dyn(&self, value: &dyn Any) -> Result<Union, Error> {
        self.lookup(value)
            .ok_or_else(|| Error::UnsupportedType(format!("<erased {:?}>", value.type_id())))
    }

    fn lookup(&self, value: &dyn Any) -> Option<Union> {
        self.variants
            .get(&value.type_id())
            .and_then(|v| (v.convert)(value))
    }
}
