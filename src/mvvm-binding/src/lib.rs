//! Routes view-model property changes into bound view operations.
//!
//! An [`ObservableContext`] publishes named properties as [`Union`]
//! values. A [`Binder`] subscribes to one of them, runs every delivered
//! value through its [`Converter`] and hands the result to its
//! [`BindingField`].
//!
//! Everything here is single-threaded and synchronous. A property
//! mutation dispatches to every listening binder before it returns.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use mvvm_union::{self as union, Kind, ObjectRef, Union, UnionValue};

pub mod adapter;
pub use adapter::{Adapter, Chain, FnAdapter, ObjectToStringAdapter, TypeDesc};

mod binder;
pub use binder::*;

mod context;
pub use context::*;

mod converter;
pub use converter::*;

mod error;
pub use error::*;

mod observable;
pub use observable::*;

mod property;
pub use property::*;

mod registry;
pub use registry::*;
