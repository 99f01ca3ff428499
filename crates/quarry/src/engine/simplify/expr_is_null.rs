use super::Simplify;
use quarry_core::stmt::{Expr, ExprUnary, UnaryOp};

impl Simplify<'_> {
    pub(super) fn simplify_expr_is_null(&self, expr: &ExprUnary) -> Option<Expr> {
        let is_null = expr.op == UnaryOp::IsNull;

        // Null constant folding,
        //
        //  - `null is null` → `true`
        //  - `<non-null const> is null` → `false`
        if let Some(value) = expr.operand.as_constant() {
            return Some(self.factory.bool(value.is_null() == is_null));
        }

        // Is null on a non nullable operand evaluates to `false`.
        if !expr.operand.is_nullable() {
            return Some(self.factory.bool(!is_null));
        }

        None
    }
}
