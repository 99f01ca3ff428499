use super::{Expr, Type, UnaryOp};
use crate::mapping::TypeMapping;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprUnary {
    pub op: UnaryOp,
    pub operand: Box<Expr>,
    pub ty: Type,
    pub mapping: Option<Arc<TypeMapping>>,
}

impl Expr {
    fn unary(op: UnaryOp, operand: Expr, ty: Type) -> Expr {
        ExprUnary {
            op,
            operand: Box::new(operand),
            ty,
            mapping: None,
        }
        .into()
    }

    pub fn not(operand: impl Into<Expr>) -> Expr {
        Expr::unary(UnaryOp::Not, operand.into(), Type::Bool)
    }

    pub fn negate(operand: impl Into<Expr>) -> Expr {
        let operand = operand.into();
        let ty = operand.ty().clone();
        Expr::unary(UnaryOp::Negate, operand, ty)
    }

    /// Converts `operand` to `ty`.
    pub fn convert(operand: impl Into<Expr>, ty: Type) -> Expr {
        Expr::unary(UnaryOp::Convert, operand.into(), ty)
    }

    pub fn is_null(operand: impl Into<Expr>) -> Expr {
        Expr::unary(UnaryOp::IsNull, operand.into(), Type::Bool)
    }

    pub fn is_not_null(operand: impl Into<Expr>) -> Expr {
        Expr::unary(UnaryOp::IsNotNull, operand.into(), Type::Bool)
    }

    /// Returns the operand when this is a logical `NOT`.
    pub fn as_not(&self) -> Option<&Expr> {
        match self {
            Expr::Unary(ExprUnary {
                op: UnaryOp::Not,
                operand,
                ..
            }) => Some(operand),
            _ => None,
        }
    }
}

impl From<ExprUnary> for Expr {
    fn from(value: ExprUnary) -> Self {
        Expr::Unary(value)
    }
}
