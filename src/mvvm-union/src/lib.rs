//! Compact tagged values for publishing view-model properties.
//!
//! A [`Union`] stores one of a fixed set of primitive kinds inline or a
//! shared handle to an arbitrary object, together with its [`Kind`]
//! discriminator. Consumers extract values with [`Union::try_get`]
//! without knowing the exact source type up front.
//!
//! Types take part in the system through the [`UnionValue`] contract,
//! which is implemented for all primitives and can be implemented for
//! user types with the [`union_enum!`] and [`union_object!`] macros.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use thiserror::Error;

mod kind;
pub use kind::*;

mod object;
pub use object::*;

pub mod parse;
pub use parse::parse;

mod registry;
pub use registry::*;

#[cfg(feature = "serde")]
mod serde_impl;

mod union;
pub use union::*;

mod value;
pub use value::*;

/// Errors that may occur when constructing [`Union`] values.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// No variant is registered for the given type.
    #[error("type '{0}' has no registered union variant")]
    UnsupportedType(String),

    /// A textual literal could not be parsed as the requested kind.
    #[error("'{literal}' is not a valid {kind} literal")]
    BadLiteral { kind: Kind, literal: String },
}
