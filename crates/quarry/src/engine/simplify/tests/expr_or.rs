use super::{flag, test_factory};
use crate::engine::simplify::Simplify;
use quarry_core::stmt::{Expr, ExprBinary, Type};

fn or_expr(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> ExprBinary {
    match Expr::or(lhs, rhs) {
        Expr::Binary(e) => e,
        _ => unreachable!(),
    }
}

#[test]
fn false_operand_is_dropped() {
    let factory = test_factory();
    let mut simplify = Simplify::new(&factory);
    let a = flag(&factory, "a");

    // `or(false, a)` → `a`
    let mut expr = or_expr(false, a.clone());
    assert_eq!(simplify.simplify_expr_or(&mut expr), Some(a));
}

#[test]
fn true_operand_wins_over_null() {
    let factory = test_factory();
    let mut simplify = Simplify::new(&factory);

    // `or(null, true)` → `true`
    let mut expr = or_expr(Expr::null(Type::Bool), true);
    let result = simplify.simplify_expr_or(&mut expr);

    assert!(matches!(result, Some(ref e) if e.is_true()));
}

#[test]
fn absorption() {
    let factory = test_factory();
    let mut simplify = Simplify::new(&factory);
    let a = flag(&factory, "a");
    let b = flag(&factory, "b");

    // `or(and(a, b), a)` → `a`
    let mut expr = or_expr(Expr::and(a.clone(), b), a.clone());
    assert_eq!(simplify.simplify_expr_or(&mut expr), Some(a));
}

#[test]
fn unrelated_operands_are_kept() {
    let factory = test_factory();
    let mut simplify = Simplify::new(&factory);

    // `or(a, b)`, not simplified
    let mut expr = or_expr(flag(&factory, "a"), flag(&factory, "b"));
    assert!(simplify.simplify_expr_or(&mut expr).is_none());
}
