use super::Simplify;
use quarry_core::stmt::{BinaryOp, Expr, ExprUnary, Type, UnaryOp, Value};

impl Simplify<'_> {
    pub(super) fn simplify_expr_not(&mut self, expr_not: &mut ExprUnary) -> Option<Expr> {
        // Constant folding,
        //
        //   - `not(true)` → `false`
        //   - `not(false)` → `true`
        //   - `not(null)` → `null`
        match expr_not.operand.as_constant() {
            Some(Value::Bool(b)) => return Some(self.factory.bool(!b)),
            Some(Value::Null) => {
                return Some(Expr::null(Type::Bool).with_type_mapping(Some(self.factory.bool_mapping())))
            }
            _ => {}
        }

        match expr_not.operand.as_mut() {
            // Double negation elimination, `not(not(x))` → `x`
            Expr::Unary(inner) if inner.op == UnaryOp::Not => Some(inner.operand.take()),

            // `not(x is null)` → `x is not null`, and back
            Expr::Unary(inner) if inner.op.is_null_test() => {
                inner.op = match inner.op {
                    UnaryOp::IsNull => UnaryOp::IsNotNull,
                    _ => UnaryOp::IsNull,
                };
                Some(expr_not.operand.take())
            }

            // De Morgan's law,
            //
            //   - `not(a and b)` → `not(a) or not(b)`
            //   - `not(a or b)` → `not(a) and not(b)`
            Expr::Binary(binary) if binary.op.is_logical() => {
                let lhs = self.factory.not(binary.lhs.take());
                let rhs = self.factory.not(binary.rhs.take());
                Some(match binary.op {
                    BinaryOp::And => self.factory.or(lhs, rhs),
                    _ => self.factory.and(lhs, rhs),
                })
            }

            // Negation of comparisons, `not(x = y)` → `x <> y`, etc.
            //
            // A NULL operand keeps both sides NULL.
            Expr::Binary(binary) => match binary.op.negate() {
                Some(negated_op) => {
                    binary.op = negated_op;
                    Some(expr_not.operand.take())
                }
                None => None,
            },

            Expr::In(expr_in) => {
                expr_in.negated = !expr_in.negated;
                Some(expr_not.operand.take())
            }

            Expr::Exists(exists) => {
                exists.negated = !exists.negated;
                Some(expr_not.operand.take())
            }

            _ => None,
        }
    }
}
