use super::{BinaryOp, Expr, Type};
use crate::mapping::TypeMapping;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinary {
    pub op: BinaryOp,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
    pub ty: Type,
    pub mapping: Option<Arc<TypeMapping>>,
}

impl Expr {
    /// Builds a binary expression typed by its operator.
    ///
    /// Comparisons and logical operators are `bool`. Everything else takes
    /// the type of the left operand, falling back to the right one when the
    /// left is an untyped `NULL`.
    pub fn binary(op: BinaryOp, lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        let lhs = lhs.into();
        let rhs = rhs.into();
        let ty = if op.is_comparison() || op.is_logical() {
            Type::Bool
        } else {
            match lhs.ty() {
                Type::Unknown => rhs.ty().non_nullable().clone(),
                ty => ty.non_nullable().clone(),
            }
        };
        Expr::typed_binary(op, lhs, rhs, ty)
    }

    pub fn typed_binary(op: BinaryOp, lhs: Expr, rhs: Expr, ty: Type) -> Expr {
        ExprBinary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            ty,
            mapping: None,
        }
        .into()
    }

    pub fn eq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Eq, lhs, rhs)
    }

    pub fn ne(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Ne, lhs, rhs)
    }

    pub fn lt(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Lt, lhs, rhs)
    }

    pub fn le(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Le, lhs, rhs)
    }

    pub fn gt(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Gt, lhs, rhs)
    }

    pub fn ge(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Ge, lhs, rhs)
    }

    pub fn and(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::And, lhs, rhs)
    }

    pub fn or(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Or, lhs, rhs)
    }

    pub fn coalesce(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Coalesce, lhs, rhs)
    }

    /// Returns the operands when this is a binary expression with `op`.
    pub fn as_binary(&self, op: BinaryOp) -> Option<(&Expr, &Expr)> {
        match self {
            Expr::Binary(e) if e.op == op => Some((&e.lhs, &e.rhs)),
            _ => None,
        }
    }
}

impl From<ExprBinary> for Expr {
    fn from(value: ExprBinary) -> Self {
        Expr::Binary(value)
    }
}
