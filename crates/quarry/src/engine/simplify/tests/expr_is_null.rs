use super::{column, test_factory};
use crate::engine::simplify::Simplify;
use quarry_core::stmt::{Expr, ExprUnary, Type, Value};

fn unary(expr: Expr) -> ExprUnary {
    match expr {
        Expr::Unary(e) => e,
        _ => unreachable!(),
    }
}

#[test]
fn null_is_null_becomes_true() {
    let factory = test_factory();
    let simplify = Simplify::new(&factory);

    // `null is null` → `true`
    let expr = unary(Expr::is_null(Expr::null(Type::I32)));
    let result = simplify.simplify_expr_is_null(&expr);

    assert!(matches!(result, Some(ref e) if e.is_true()));
}

#[test]
fn non_null_const_is_not_null_becomes_true() {
    let factory = test_factory();
    let simplify = Simplify::new(&factory);

    // `5 is not null` → `true`
    let expr = unary(Expr::is_not_null(Value::I32(5)));
    let result = simplify.simplify_expr_is_null(&expr);

    assert!(matches!(result, Some(ref e) if e.is_true()));
}

#[test]
fn is_null_non_nullable_column() {
    let factory = test_factory();
    let simplify = Simplify::new(&factory);

    // `a is null` → `false` (non-nullable column)
    let expr = unary(Expr::is_null(column(&factory, "a", Type::I32, false)));
    let result = simplify.simplify_expr_is_null(&expr);

    assert!(matches!(result, Some(ref e) if e.is_false()));
}

#[test]
fn is_null_nullable_column_not_simplified() {
    let factory = test_factory();
    let simplify = Simplify::new(&factory);

    let expr = unary(Expr::is_null(column(&factory, "a", Type::I32, true)));
    assert!(simplify.simplify_expr_is_null(&expr).is_none());
}
