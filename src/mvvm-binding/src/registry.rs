use indexmap::IndexMap;

use crate::{Adapter, Error, ObjectToStringAdapter, TypeDesc};

/// Human-readable metadata for a registered adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdapterLabel {
    /// The display name of the adapter.
    pub label: &'static str,
    /// The group the adapter is listed under.
    pub directory: &'static str,
}

impl AdapterLabel {
    /// Creates a label in the given directory.
    pub const fn new(label: &'static str, directory: &'static str) -> Self {
        Self { label, directory }
    }
}

/// Constructs a fresh adapter instance.
pub type AdapterConstructor = fn() -> Box<dyn Adapter>;

fn construct_default<A: Adapter + Default + 'static>() -> Box<dyn Adapter> {
    Box::new(A::default())
}

/// A registered adapter for one `(source, destination)` pair.
#[derive(Clone, Copy, Debug)]
pub struct AdapterEntry {
    /// The type the adapter converts from.
    pub source: TypeDesc,
    /// The type the adapter converts to.
    pub destination: TypeDesc,
    /// The adapter's metadata.
    pub label: AdapterLabel,
    constructor: AdapterConstructor,
}

impl AdapterEntry {
    /// Constructs a new instance of the adapter.
    #[inline]
    pub fn create(&self) -> Box<dyn Adapter> {
        (self.constructor)()
    }
}

/// A static table of adapters keyed by the type pair they convert.
///
/// The table is meant to be built once at startup. Registering two
/// adapters for the same pair is rejected. Entries are kept in
/// registration order.
#[derive(Clone, Debug, Default)]
pub struct AdapterRegistry {
    entries: IndexMap<(TypeDesc, TypeDesc), AdapterEntry>,
}

impl AdapterRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in adapters.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry
            .entries
            .insert(
                (TypeDesc::object(), TypeDesc::string()),
                AdapterEntry {
                    source: TypeDesc::object(),
                    destination: TypeDesc::string(),
                    label: ObjectToStringAdapter::LABEL,
                    constructor: construct_default::<ObjectToStringAdapter>,
                },
            );

        registry
    }

    /// Registers an adapter constructor for a type pair.
    pub fn register(
        &mut self,
        source: TypeDesc,
        destination: TypeDesc,
        label: AdapterLabel,
        constructor: AdapterConstructor,
    ) -> Result<(), Error> {
        let key = (source, destination);
        if self.entries.contains_key(&key) {
            return Err(Error::DuplicateAdapter {
                from: source.name(),
                to: destination.name(),
            });
        }

        log::debug!(
            "Registering adapter '{}' ({source} => {destination})",
            label.label
        );
        self.entries.insert(
            key,
            AdapterEntry {
                source,
                destination,
                label,
                constructor,
            },
        );

        Ok(())
    }

    /// Registers a default-constructible adapter type.
    ///
    /// The type pair is taken from a probe instance.
    pub fn register_default<A: Adapter + Default + 'static>(
        &mut self,
        label: AdapterLabel,
    ) -> Result<(), Error> {
        let probe = A::default();
        self.register(
            probe.source(),
            probe.destination(),
            label,
            construct_default::<A>,
        )
    }

    /// Finds the entry for a type pair.
    #[inline]
    pub fn find(&self, source: TypeDesc, destination: TypeDesc) -> Option<&AdapterEntry> {
        self.entries.get(&(source, destination))
    }

    /// Finds an entry by the names of its types.
    pub fn find_by_name(&self, source: &str, destination: &str) -> Option<&AdapterEntry> {
        self.entries
            .values()
            .find(|e| e.source.name() == source && e.destination.name() == destination)
    }

    /// Creates a new adapter for a type pair.
    ///
    /// [`None`] means no adapter is registered and values should pass
    /// through unconverted.
    #[inline]
    pub fn create(&self, source: TypeDesc, destination: TypeDesc) -> Option<Box<dyn Adapter>> {
        self.find(source, destination).map(AdapterEntry::create)
    }

    /// Iterates over all entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &AdapterEntry> {
        self.entries.values()
    }

    /// Gets the number of registered adapters.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no adapters are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
