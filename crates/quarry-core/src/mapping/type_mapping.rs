use super::Comparer;
use crate::{capability::Flavor, schema::ValueConverter, stmt::Type};

/// Everything the compiler needs to know about one semantic type in one
/// database: its store type, how literals are spelled and how values compare.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeMapping {
    /// Host-side type of values carried by mapped nodes.
    pub ty: Type,

    /// Database type name, e.g. `nvarchar(max)`. Used by `CAST`.
    pub store_type: String,

    pub kind: MappingKind,

    pub flavor: Flavor,

    pub comparer: Comparer,

    /// Literals are converted before rendering when set.
    pub converter: Option<ValueConverter>,
}

/// Which literal syntax a mapping renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingKind {
    Bool,
    Integer,
    Float,
    String { unicode: bool },
    Bytes,
    Uuid,
}

impl TypeMapping {
    pub fn new(ty: Type, store_type: impl Into<String>, kind: MappingKind, flavor: Flavor) -> TypeMapping {
        TypeMapping {
            ty,
            store_type: store_type.into(),
            kind,
            flavor,
            comparer: Comparer::Default,
            converter: None,
        }
    }

    pub fn with_comparer(mut self, comparer: Comparer) -> TypeMapping {
        self.comparer = comparer;
        self
    }

    /// A copy of this mapping for a host type stored through `converter`.
    pub fn with_converter(&self, ty: Type, converter: ValueConverter) -> TypeMapping {
        TypeMapping {
            ty,
            converter: Some(converter),
            ..self.clone()
        }
    }

    pub fn is_bool(&self) -> bool {
        self.kind == MappingKind::Bool && self.converter.is_none()
    }
}
