//! Adapters available to scripts on top of the library defaults.

use mvvm_binding::{Adapter, AdapterLabel, AdapterRegistry, Error, TypeDesc, Union};

/// Formats `int` values as decimal strings.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntToString;

impl IntToString {
    pub const LABEL: AdapterLabel = AdapterLabel::new("Int ⇒ String", "Console");
}

impl Adapter for IntToString {
    fn source(&self) -> TypeDesc {
        TypeDesc::with_name::<i32>("int")
    }

    fn destination(&self) -> TypeDesc {
        TypeDesc::string()
    }

    fn convert(&self, union: &Union) -> Union {
        match union.try_get::<i32>() {
            Some(v) => Union::from(v.to_string()),
            None => union.clone(),
        }
    }
}

/// Rounds `float` values to the nearest `int`, saturating at the bounds.
#[derive(Clone, Copy, Debug, Default)]
pub struct FloatToInt;

impl FloatToInt {
    pub const LABEL: AdapterLabel = AdapterLabel::new("Float ⇒ Int", "Console");
}

impl Adapter for FloatToInt {
    fn source(&self) -> TypeDesc {
        TypeDesc::with_name::<f32>("float")
    }

    fn destination(&self) -> TypeDesc {
        TypeDesc::with_name::<i32>("int")
    }

    fn convert(&self, union: &Union) -> Union {
        match union.try_get::<f32>() {
            Some(v) => Union::I32(v.round() as i32),
            None => union.clone(),
        }
    }
}

/// Builds the adapter registry scripts select from.
pub fn registry() -> Result<AdapterRegistry, Error> {
    let mut registry = AdapterRegistry::with_defaults();
    registry.register_default::<IntToString>(IntToString::LABEL)?;
    registry.register_default::<FloatToInt>(FloatToInt::LABEL)?;

    Ok(registry)
}
