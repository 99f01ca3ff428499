use super::{Expr, Type};
use crate::mapping::TypeMapping;
use std::sync::Arc;

/// A column read from a table or derived select.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprColumn {
    /// Alias of the table or derived select this column belongs to.
    pub table: String,

    /// Column name, or the projection alias when reading a derived select.
    pub name: String,

    pub ty: Type,

    /// Whether the column may hold `NULL`.
    pub nullable: bool,

    pub mapping: Option<Arc<TypeMapping>>,
}

impl Expr {
    pub fn column(
        table: impl Into<String>,
        name: impl Into<String>,
        ty: Type,
        nullable: bool,
    ) -> Expr {
        ExprColumn {
            table: table.into(),
            name: name.into(),
            ty,
            nullable,
            mapping: None,
        }
        .into()
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Expr::Column(value)
    }
}
