use mvvm_union::Union;

use super::{Adapter, TypeDesc};
use crate::AdapterLabel;

/// Converts any object into its textual representation.
///
/// Primitive inputs pass through unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjectToStringAdapter;

impl ObjectToStringAdapter {
    /// The label the adapter is registered under.
    pub const LABEL: AdapterLabel = AdapterLabel::new("Object ⇒ String", "Default");
}

impl Adapter for ObjectToStringAdapter {
    fn source(&self) -> TypeDesc {
        TypeDesc::object()
    }

    fn destination(&self) -> TypeDesc {
        TypeDesc::string()
    }

    fn convert(&self, union: &Union) -> Union {
        match union {
            Union::Object(obj) => Union::from(obj.to_string()),
            _ => union.clone(),
        }
    }
}
