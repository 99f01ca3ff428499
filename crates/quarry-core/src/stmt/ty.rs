use super::Value;

/// The semantic type of a value, as seen by the host language.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    I16,
    I32,
    I64,
    F32,
    F64,
    String,
    Bytes,
    Uuid,

    /// An optional value of the inner type. Only parameters and host
    /// constants carry this; columns track nullability separately.
    Nullable(Box<Type>),

    /// A sequence of values, used by list parameters and literal lists in
    /// membership tests.
    List(Box<Type>),

    /// An object built by the shaper from named members.
    Record,

    /// The type is not known. Raw SQL fragments carry this.
    Unknown,
}

impl Type {
    pub fn nullable(ty: Type) -> Type {
        match ty {
            Type::Nullable(_) => ty,
            ty => Type::Nullable(Box::new(ty)),
        }
    }

    pub fn list(item: Type) -> Type {
        Type::List(Box::new(item))
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, Type::Nullable(_))
    }

    /// Returns the type with any `Nullable` wrapper removed.
    pub fn non_nullable(&self) -> &Type {
        match self {
            Type::Nullable(inner) => inner.non_nullable(),
            ty => ty,
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self.non_nullable(), Type::Bool)
    }

    pub fn is_string(&self) -> bool {
        matches!(self.non_nullable(), Type::String)
    }

    pub fn is_integer(&self) -> bool {
        matches!(self.non_nullable(), Type::I16 | Type::I32 | Type::I64)
    }

    pub fn is_float(&self) -> bool {
        matches!(self.non_nullable(), Type::F32 | Type::F64)
    }

    pub fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_float()
    }

    pub fn is_list(&self) -> bool {
        matches!(self.non_nullable(), Type::List(_))
    }

    /// The item type of a list type.
    pub fn list_item(&self) -> Option<&Type> {
        match self.non_nullable() {
            Type::List(item) => Some(item),
            _ => None,
        }
    }

    /// The value a host `default(T)` produces for this type.
    ///
    /// Nullable types, lists and records default to null.
    pub fn default_value(&self) -> Value {
        match self {
            Type::Bool => Value::Bool(false),
            Type::I16 => Value::I16(0),
            Type::I32 => Value::I32(0),
            Type::I64 => Value::I64(0),
            Type::F32 => Value::F32(0.0),
            Type::F64 => Value::F64(0.0),
            Type::String => Value::String(String::new()),
            Type::Bytes => Value::Bytes(vec![]),
            Type::Uuid => Value::Uuid(uuid::Uuid::nil()),
            Type::Nullable(_) | Type::List(_) | Type::Record | Type::Unknown => Value::Null,
        }
    }
}

impl core::fmt::Display for Type {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Type::Bool => f.write_str("bool"),
            Type::I16 => f.write_str("i16"),
            Type::I32 => f.write_str("i32"),
            Type::I64 => f.write_str("i64"),
            Type::F32 => f.write_str("f32"),
            Type::F64 => f.write_str("f64"),
            Type::String => f.write_str("string"),
            Type::Bytes => f.write_str("bytes"),
            Type::Uuid => f.write_str("uuid"),
            Type::Nullable(inner) => write!(f, "{inner}?"),
            Type::List(item) => write!(f, "list<{item}>"),
            Type::Record => f.write_str("record"),
            Type::Unknown => f.write_str("unknown"),
        }
    }
}
