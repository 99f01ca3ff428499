use crate::{stmt::Type, stmt::Value, Result};
use std::fmt;

/// Converts values between their host representation and the one stored in
/// the database.
///
/// Converters are compared by name and provider type.
#[derive(Clone)]
pub struct ValueConverter {
    pub name: String,

    /// Type of the stored representation.
    pub provider_ty: Type,

    pub to_provider: fn(&Value) -> Result<Value>,
    pub from_provider: fn(&Value) -> Result<Value>,
}

impl ValueConverter {
    pub fn new(
        name: impl Into<String>,
        provider_ty: Type,
        to_provider: fn(&Value) -> Result<Value>,
        from_provider: fn(&Value) -> Result<Value>,
    ) -> ValueConverter {
        ValueConverter {
            name: name.into(),
            provider_ty,
            to_provider,
            from_provider,
        }
    }

    /// Converts a host value for storage. `NULL` is passed through.
    pub fn to_provider(&self, value: &Value) -> Result<Value> {
        if value.is_null() {
            return Ok(Value::Null);
        }
        (self.to_provider)(value)
    }

    pub fn from_provider(&self, value: &Value) -> Result<Value> {
        if value.is_null() {
            return Ok(Value::Null);
        }
        (self.from_provider)(value)
    }
}

impl PartialEq for ValueConverter {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.provider_ty == other.provider_ty
    }
}

impl fmt::Debug for ValueConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueConverter")
            .field("name", &self.name)
            .field("provider_ty", &self.provider_ty)
            .finish()
    }
}
