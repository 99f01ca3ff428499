mod expr_and;
mod expr_is_null;
mod expr_not;
mod expr_or;

use super::{Engine, ExprFactory};
use quarry_core::stmt::{self, BinaryOp, Expr, Select, UnaryOp, VisitMut};

/// Algebraic rewrites over boolean structure.
///
/// Every rule holds under three-valued logic, so the pass can run on any
/// expression, value or predicate alike. Rules fire bottom-up and the
/// rewritten node is visited again until nothing changes.
pub(crate) struct Simplify<'a> {
    factory: &'a ExprFactory,
}

impl Engine {
    pub(crate) fn simplify(&self, select: &mut Select) {
        Simplify::new(&self.factory).visit_select_mut(select);
    }
}

impl<'a> Simplify<'a> {
    pub(crate) fn new(factory: &'a ExprFactory) -> Simplify<'a> {
        Simplify { factory }
    }
}

impl VisitMut for Simplify<'_> {
    fn visit_expr_mut(&mut self, i: &mut Expr) {
        // First, simplify the children
        stmt::visit_mut::visit_expr_mut(self, i);

        let maybe_expr = match i {
            Expr::Binary(e) if e.op == BinaryOp::And => self.simplify_expr_and(e),
            Expr::Binary(e) if e.op == BinaryOp::Or => self.simplify_expr_or(e),
            Expr::Unary(e) if e.op == UnaryOp::Not => self.simplify_expr_not(e),
            Expr::Unary(e) if e.op.is_null_test() => self.simplify_expr_is_null(e),
            _ => None,
        };

        if let Some(expr) = maybe_expr {
            *i = expr;

            // The replacement may enable further rules
            self.visit_expr_mut(i);
        }
    }

    fn visit_select_mut(&mut self, i: &mut Select) {
        stmt::visit_mut::visit_select_mut(self, i);

        if i.predicate.as_ref().is_some_and(Expr::is_true) {
            i.predicate = None;
        }
    }
}

#[cfg(test)]
mod tests;
