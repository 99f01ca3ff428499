use super::{expr_and::absorbs, Simplify};
use quarry_core::stmt::{BinaryOp, Expr, ExprBinary};

impl Simplify<'_> {
    pub(super) fn simplify_expr_or(&mut self, expr: &mut ExprBinary) -> Option<Expr> {
        // `or(true, x)` → `true`, even when `x` is null
        if expr.lhs.is_true() || expr.rhs.is_true() {
            return Some(self.factory.bool(true));
        }

        // `or(false, x)` → `x`
        if expr.lhs.is_false() {
            return Some(expr.rhs.take());
        }

        if expr.rhs.is_false() {
            return Some(expr.lhs.take());
        }

        // Idempotent law, `a or a` → `a`
        if expr.lhs == expr.rhs {
            return Some(expr.lhs.take());
        }

        // Absorption law, `x or (x and y)` → `x`
        if absorbs(&expr.lhs, &expr.rhs, BinaryOp::And) {
            return Some(expr.lhs.take());
        }

        if absorbs(&expr.rhs, &expr.lhs, BinaryOp::And) {
            return Some(expr.rhs.take());
        }

        None
    }
}
