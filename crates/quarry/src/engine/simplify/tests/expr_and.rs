use super::{flag, test_factory};
use crate::engine::simplify::Simplify;
use quarry_core::stmt::{Expr, ExprBinary, Type};

fn and_expr(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> ExprBinary {
    match Expr::and(lhs, rhs) {
        Expr::Binary(e) => e,
        _ => unreachable!(),
    }
}

#[test]
fn true_operand_is_dropped() {
    let factory = test_factory();
    let mut simplify = Simplify::new(&factory);
    let a = flag(&factory, "a");

    // `and(true, a)` → `a`
    let mut expr = and_expr(true, a.clone());
    assert_eq!(simplify.simplify_expr_and(&mut expr), Some(a.clone()));

    // `and(a, true)` → `a`
    let mut expr = and_expr(a.clone(), true);
    assert_eq!(simplify.simplify_expr_and(&mut expr), Some(a));
}

#[test]
fn false_operand_wins_over_null() {
    let factory = test_factory();
    let mut simplify = Simplify::new(&factory);

    // `and(null, false)` → `false`
    let mut expr = and_expr(Expr::null(Type::Bool), false);
    let result = simplify.simplify_expr_and(&mut expr);

    assert!(matches!(result, Some(ref e) if e.is_false()));
}

#[test]
fn null_operand_is_kept() {
    let factory = test_factory();
    let mut simplify = Simplify::new(&factory);

    // `and(null, a)`, not simplified: `null and true` is null
    let mut expr = and_expr(Expr::null(Type::Bool), flag(&factory, "a"));
    assert!(simplify.simplify_expr_and(&mut expr).is_none());
}

#[test]
fn idempotent() {
    let factory = test_factory();
    let mut simplify = Simplify::new(&factory);
    let a = flag(&factory, "a");

    // `and(a, a)` → `a`
    let mut expr = and_expr(a.clone(), a.clone());
    assert_eq!(simplify.simplify_expr_and(&mut expr), Some(a));
}

#[test]
fn absorption() {
    let factory = test_factory();
    let mut simplify = Simplify::new(&factory);
    let a = flag(&factory, "a");
    let b = flag(&factory, "b");

    // `and(a, or(b, a))` → `a`
    let mut expr = and_expr(a.clone(), Expr::or(b, a.clone()));
    assert_eq!(simplify.simplify_expr_and(&mut expr), Some(a));
}
