use super::{Expr, Type, Value};
use crate::mapping::TypeMapping;
use std::sync::Arc;

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprConstant {
    pub value: Value,
    pub ty: Type,
    pub mapping: Option<Arc<TypeMapping>>,
}

impl Expr {
    /// A constant typed by its own value. `NULL` gets [`Type::Unknown`].
    pub fn constant(value: impl Into<Value>) -> Expr {
        let value = value.into();
        let ty = value.ty().unwrap_or(Type::Unknown);
        Expr::typed_constant(value, ty)
    }

    pub fn typed_constant(value: impl Into<Value>, ty: Type) -> Expr {
        ExprConstant {
            value: value.into(),
            ty,
            mapping: None,
        }
        .into()
    }

    /// A typed `NULL` constant.
    pub fn null(ty: Type) -> Expr {
        Expr::typed_constant(Value::Null, ty)
    }
}

impl From<ExprConstant> for Expr {
    fn from(value: ExprConstant) -> Self {
        Expr::Constant(value)
    }
}
