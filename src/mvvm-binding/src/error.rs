use thiserror::Error;

/// Errors that may occur when configuring adapters and binders.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Attempted to clear a converter's adapter through its setter.
    #[error("adapter must not be empty; switch the converter to passthrough instead")]
    NullAdapter,

    /// The binder does not expose a binding field of this name.
    #[error("unknown binding field '{0}'")]
    UnknownBindingField(String),

    /// An adapter for the same type pair is already registered.
    #[error("an adapter from '{from}' to '{to}' is already registered")]
    DuplicateAdapter { from: &'static str, to: &'static str },

    /// Attempted to listen without an observable context.
    #[error("binder has no observable context")]
    MissingContext,

    /// Attempted to listen before a property name was configured.
    #[error("binding field '{0}' is not mapped to a property")]
    MissingPropertyName(String),

    /// A value could not be represented as a union.
    #[error(transparent)]
    Union(#[from] mvvm_union::Error),
}

/// The broad category of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a value the operation does not accept.
    InvalidArgument,
    /// The operation is not possible in the current configuration.
    InvalidState,
}

impl Error {
    /// Gets the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NullAdapter
            | Self::UnknownBindingField(..)
            | Self::DuplicateAdapter { .. }
            | Self::Union(..) => ErrorKind::InvalidArgument,

            Self::MissingContext | Self::MissingPropertyName(..) => ErrorKind::InvalidState,
        }
    }
}
