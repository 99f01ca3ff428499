use super::Expr;
use crate::mapping::TypeMapping;
use std::sync::Arc;

/// `expr LIKE pattern [ESCAPE escape]`
#[derive(Debug, Clone, PartialEq)]
pub struct ExprLike {
    pub expr: Box<Expr>,
    pub pattern: Box<Expr>,
    pub escape: Option<Box<Expr>>,
    pub mapping: Option<Arc<TypeMapping>>,
}

impl Expr {
    pub fn like(expr: impl Into<Expr>, pattern: impl Into<Expr>, escape: Option<Expr>) -> Expr {
        Expr::Like(ExprLike {
            expr: Box::new(expr.into()),
            pattern: Box::new(pattern.into()),
            escape: escape.map(Box::new),
            mapping: None,
        })
    }
}

impl From<ExprLike> for Expr {
    fn from(value: ExprLike) -> Self {
        Expr::Like(value)
    }
}
