use super::{BinaryOp, Expr, InValues, UnaryOp};

impl Expr {
    /// Returns `true` if the expression may evaluate to `NULL`.
    ///
    /// This is a structural estimate. It never reports a nullable
    /// expression as non-nullable, but may be conservative for functions.
    pub fn is_nullable(&self) -> bool {
        match self {
            Expr::Column(e) => e.nullable,
            Expr::Constant(e) => e.value.is_null(),
            Expr::Parameter(e) => e.ty.is_nullable(),
            Expr::Unary(e) => match e.op {
                UnaryOp::IsNull | UnaryOp::IsNotNull => false,
                UnaryOp::Not | UnaryOp::Negate | UnaryOp::Convert => e.operand.is_nullable(),
            },
            Expr::Binary(e) => match e.op {
                BinaryOp::Coalesce => e.lhs.is_nullable() && e.rhs.is_nullable(),
                _ => e.lhs.is_nullable() || e.rhs.is_nullable(),
            },
            Expr::Case(e) => e.else_result.is_none() || e.results().any(Expr::is_nullable),
            Expr::Func(e) => e.nullable,
            Expr::Exists(_) => false,
            Expr::In(e) => {
                e.expr.is_nullable()
                    || match &e.values {
                        InValues::List(items) => items.iter().any(Expr::is_nullable),
                        InValues::Parameter(_) => true,
                        InValues::Subquery(subquery) => subquery
                            .projection
                            .first()
                            .is_none_or(|projection| projection.expr.is_nullable()),
                    }
            }
            Expr::Like(e) => {
                e.expr.is_nullable()
                    || e.pattern.is_nullable()
                    || e.escape.as_ref().is_some_and(|escape| escape.is_nullable())
            }
            Expr::Fragment(_) => false,
        }
    }
}
