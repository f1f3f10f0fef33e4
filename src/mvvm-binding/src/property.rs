use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

/// The [DJB2] hash of a property name.
///
/// [DJB2]: https://theartincode.stanis.me/008-djb2/
#[inline(always)]
fn djb2(input: &[u8]) -> u32 {
    input
        .iter()
        .copied()
        .fold(5381, |acc, b| acc.wrapping_mul(33).wrapping_add(b as u32))
}

/// An interned name of an observable property.
///
/// The hash of the name is computed once on creation, so comparisons
/// on the notification path reject mismatches without touching the
/// string. Equal names are always equal by exact string value.
#[derive(Clone)]
pub struct PropertyName {
    hash: u32,
    name: Arc<str>,
}

impl PropertyName {
    /// Interns a property name.
    pub fn new(name: &str) -> Self {
        Self {
            hash: djb2(name.as_bytes()),
            name: Arc::from(name),
        }
    }

    /// Gets the name as a string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Gets the precomputed hash of the name.
    #[inline]
    pub fn hash_value(&self) -> u32 {
        self.hash
    }
}

impl PartialEq for PropertyName {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.name == other.name
    }
}

impl Eq for PropertyName {}

impl Hash for PropertyName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash);
    }
}

impl From<&str> for PropertyName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PropertyName {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<&PropertyName> for PropertyName {
    fn from(value: &PropertyName) -> Self {
        value.clone()
    }
}

impl fmt::Debug for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.name, f)
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
