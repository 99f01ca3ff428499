use super::ValueConverter;
use crate::stmt::Type;

/// One mapped property of an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub column: String,

    /// Host-side type, without any `Nullable` wrapper.
    pub ty: Type,

    pub nullable: bool,

    /// Transforms host values into the stored representation.
    pub converter: Option<ValueConverter>,
}

impl Property {
    /// A non-nullable property stored in a column of the same name.
    pub fn new(name: impl Into<String>, ty: Type) -> Property {
        let name = name.into();
        Property {
            column: name.clone(),
            name,
            ty,
            nullable: false,
            converter: None,
        }
    }

    pub fn nullable(mut self) -> Property {
        self.nullable = true;
        self
    }

    pub fn column(mut self, column: impl Into<String>) -> Property {
        self.column = column.into();
        self
    }

    pub fn converter(mut self, converter: ValueConverter) -> Property {
        self.converter = Some(converter);
        self
    }

    /// The host type as seen by expressions, `Nullable` when the column is.
    pub fn host_ty(&self) -> Type {
        if self.nullable {
            Type::nullable(self.ty.clone())
        } else {
            self.ty.clone()
        }
    }
}
