use super::{Expr, Type};
use crate::mapping::TypeMapping;
use std::sync::Arc;

/// A named placeholder whose value is supplied at execution time.
///
/// List-typed parameters are only valid as the value list of an `IN`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprParameter {
    pub name: String,

    /// The declared host type. A `Nullable` type marks the parameter as
    /// possibly `NULL`.
    pub ty: Type,

    pub mapping: Option<Arc<TypeMapping>>,
}

impl Expr {
    pub fn parameter(name: impl Into<String>, ty: Type) -> Expr {
        ExprParameter {
            name: name.into(),
            ty,
            mapping: None,
        }
        .into()
    }
}

impl From<ExprParameter> for Expr {
    fn from(value: ExprParameter) -> Self {
        Expr::Parameter(value)
    }
}
