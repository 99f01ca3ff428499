use super::Simplify;
use quarry_core::stmt::{BinaryOp, Expr, ExprBinary};

impl Simplify<'_> {
    pub(super) fn simplify_expr_and(&mut self, expr: &mut ExprBinary) -> Option<Expr> {
        // `and(false, x)` → `false`, even when `x` is null
        if expr.lhs.is_false() || expr.rhs.is_false() {
            return Some(self.factory.bool(false));
        }

        // `and(true, x)` → `x`
        if expr.lhs.is_true() {
            return Some(expr.rhs.take());
        }

        if expr.rhs.is_true() {
            return Some(expr.lhs.take());
        }

        // Idempotent law, `a and a` → `a`
        if expr.lhs == expr.rhs {
            return Some(expr.lhs.take());
        }

        // Absorption law, `x and (x or y)` → `x`
        if absorbs(&expr.lhs, &expr.rhs, BinaryOp::Or) {
            return Some(expr.lhs.take());
        }

        if absorbs(&expr.rhs, &expr.lhs, BinaryOp::Or) {
            return Some(expr.rhs.take());
        }

        None
    }
}

/// Returns `true` when `other` is `x <op> y` or `y <op> x`, with `x` equal to
/// `operand`.
pub(super) fn absorbs(operand: &Expr, other: &Expr, op: BinaryOp) -> bool {
    match other.as_binary(op) {
        Some((lhs, rhs)) => lhs == operand || rhs == operand,
        None => false,
    }
}
