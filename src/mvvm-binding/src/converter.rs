use mvvm_union::Union;

use crate::{Adapter, Error};

/// Holds zero or one [`Adapter`] applied to values en route to a binding.
///
/// Without an adapter, the converter is in passthrough mode and returns
/// every value unchanged.
#[derive(Debug, Default)]
pub struct Converter {
    adapter: Option<Box<dyn Adapter>>,
}

impl Converter {
    /// Creates a converter in passthrough mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a converter applying `adapter`.
    pub fn with_adapter<A: Adapter + 'static>(adapter: A) -> Self {
        Self {
            adapter: Some(Box::new(adapter)),
        }
    }

    /// Gets the current adapter, if any.
    #[inline]
    pub fn adapter(&self) -> Option<&dyn Adapter> {
        self.adapter.as_deref()
    }

    /// Whether no adapter is set.
    #[inline]
    pub fn is_passthrough(&self) -> bool {
        self.adapter.is_none()
    }

    /// Replaces the adapter, discarding the previous one.
    ///
    /// Passing [`None`] fails with [`Error::NullAdapter`] and leaves the
    /// converter untouched. Use [`Converter::set_passthrough`] to remove
    /// an adapter on purpose.
    pub fn set_adapter(&mut self, adapter: Option<Box<dyn Adapter>>) -> Result<(), Error> {
        let adapter = adapter.ok_or(Error::NullAdapter)?;
        log::debug!("Converter now uses {adapter:?}");

        self.adapter = Some(adapter);
        Ok(())
    }

    /// Switches to passthrough mode and returns the removed adapter.
    pub fn set_passthrough(&mut self) -> Option<Box<dyn Adapter>> {
        self.adapter.take()
    }

    /// Converts `union` through the adapter, or returns it unchanged.
    #[inline]
    pub fn convert(&self, union: &Union) -> Union {
        match &self.adapter {
            Some(adapter) => adapter.convert(union),
            None => union.clone(),
        }
    }
}
