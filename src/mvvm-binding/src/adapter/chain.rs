use mvvm_union::Union;

use super::{Adapter, TypeDesc};

/// Applies a sequence of adapters in order.
///
/// An empty chain is the identity. Since every adapter passes
/// mismatching values through, steps that do not apply are skipped.
#[derive(Debug, Default)]
pub struct Chain {
    adapters: Vec<Box<dyn Adapter>>,
}

impl Chain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `adapter` as the last step.
    pub fn then<A: Adapter + 'static>(mut self, adapter: A) -> Self {
        self.push(Box::new(adapter));
        self
    }

    /// Appends an already boxed `adapter` as the last step.
    pub fn push(&mut self, adapter: Box<dyn Adapter>) {
        if let Some(last) = self.adapters.last() {
            if last.destination() != adapter.source() {
                log::debug!(
                    "Chaining '{}' output into adapter expecting '{}'",
                    last.destination(),
                    adapter.source()
                );
            }
        }

        self.adapters.push(adapter);
    }

    /// Gets the number of steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// Whether the chain has no steps.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

impl Adapter for Chain {
    fn source(&self) -> TypeDesc {
        self.adapters
            .first()
            .map_or_else(TypeDesc::union, |a| a.source())
    }

    fn destination(&self) -> TypeDesc {
        self.adapters
            .last()
            .map_or_else(TypeDesc::union, |a| a.destination())
    }

    fn convert(&self, union: &Union) -> Union {
        self.adapters
            .iter()
            .fold(union.clone(), |value, adapter| adapter.convert(&value))
    }
}
