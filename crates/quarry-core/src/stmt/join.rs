use super::{Expr, TableExpr};

#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    /// The table being joined
    pub table: Box<TableExpr>,

    /// The join kind and its `ON` predicate
    pub op: JoinOp,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JoinOp {
    Cross,
    Inner(Expr),
    Left(Expr),
}

impl JoinOp {
    pub fn predicate(&self) -> Option<&Expr> {
        match self {
            JoinOp::Cross => None,
            JoinOp::Inner(expr) | JoinOp::Left(expr) => Some(expr),
        }
    }
}
