use super::{Comma, Formatter, Ident, Params, ToSql};

use quarry_core::{
    mapping::MappingKind,
    stmt::{self, BinaryOp, Expr, UnaryOp},
    Error, Flavor,
};

/// An expression in a position that expects a search condition: `WHERE`,
/// `ON`, `CASE WHEN`, and the operands of `AND`, `OR` and `NOT`.
///
/// Flavors without boolean values compare non-predicate expressions against
/// true here.
pub(super) struct Condition<'a>(pub(super) &'a Expr);

/// An operand of a binary operator; nested binaries are parenthesized.
pub(super) struct Operand<'a>(pub(super) &'a Expr);

/// An operand of `AND`/`OR`/`NOT`: a parenthesized condition.
struct ConditionOperand<'a>(&'a Expr);

impl ToSql for &Expr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if !f.native_bool() && self.is_predicate() {
            fmt!(f, "CASE WHEN " Condition(self) " THEN CAST(1 AS bit) ELSE CAST(0 AS bit) END");
        } else {
            node(self, f);
        }
    }
}

impl ToSql for Condition<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if f.native_bool() || self.0.is_predicate() {
            node(self.0, f);
        } else if self.0.is_true() {
            fmt!(f, "1 = 1");
        } else if self.0.is_false() {
            fmt!(f, "1 = 0");
        } else {
            fmt!(f, Operand(self.0) " = CAST(1 AS bit)");
        }
    }
}

impl ToSql for Operand<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if needs_parens(self.0) {
            fmt!(f, "(" self.0 ")");
        } else {
            fmt!(f, self.0);
        }
    }
}

impl ToSql for ConditionOperand<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if needs_parens(self.0) {
            fmt!(f, "(" Condition(self.0) ")");
        } else {
            fmt!(f, Condition(self.0));
        }
    }
}

impl ToSql for BinaryOp {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push_str(&self.to_string());
    }
}

fn needs_parens(expr: &Expr) -> bool {
    match expr {
        Expr::Binary(e) => e.op != BinaryOp::Coalesce,
        Expr::Like(_) => true,
        _ => false,
    }
}

/// Renders the node itself, ignoring the value/condition distinction at
/// this level.
fn node<P: Params>(expr: &Expr, f: &mut Formatter<'_, P>) {
    match expr {
        Expr::Binary(e) => binary(e, f),
        Expr::Case(e) => case(e, f),
        Expr::Column(e) => {
            fmt!(f, Ident(&e.table) "." Ident(&e.name));
        }
        Expr::Constant(e) => match &e.mapping {
            Some(mapping) => match mapping.literal(&e.value) {
                Ok(literal) => fmt!(f, &literal),
                Err(err) => f.fail(err),
            },
            None => f.fail(Error::internal_consistency(format!(
                "constant {:?} has no type mapping",
                e.value
            ))),
        },
        Expr::Exists(e) => {
            let not = if e.negated { "NOT " } else { "" };
            fmt!(f, not "EXISTS (" super::select::Subquery(&e.subquery) ")");
        }
        Expr::Fragment(e) => fmt!(f, &e.sql),
        Expr::Func(e) => func(e, f),
        Expr::In(e) => super::in_list::render(e, f),
        Expr::Like(e) => {
            fmt!(f, Operand(&e.expr) " LIKE " Operand(&e.pattern));
            if let Some(escape) = e.escape.as_deref() {
                fmt!(f, " ESCAPE " escape);
            }
        }
        Expr::Parameter(e) => {
            if e.ty.non_nullable().is_list() {
                f.fail(Error::internal_consistency(format!(
                    "list parameter `{}` used outside of IN",
                    e.name
                )));
                return;
            }

            let placeholder = f.params.push(e);
            fmt!(f, placeholder);
        }
        Expr::Unary(e) => unary(e, f),
    }
}

fn binary<P: Params>(e: &stmt::ExprBinary, f: &mut Formatter<'_, P>) {
    match e.op {
        BinaryOp::Coalesce => {
            let (lhs, rhs): (&Expr, &Expr) = (&e.lhs, &e.rhs);
            fmt!(f, "COALESCE(" lhs ", " rhs ")");
        }
        BinaryOp::And | BinaryOp::Or => {
            fmt!(f, ConditionOperand(&e.lhs) " " e.op " " ConditionOperand(&e.rhs));
        }
        BinaryOp::Add if is_string(e) => {
            let op = match f.serializer.flavor {
                Flavor::SqlServer => "+",
                Flavor::Sqlite | Flavor::Postgresql => "||",
            };
            fmt!(f, Operand(&e.lhs) " " op " " Operand(&e.rhs));
        }
        op => {
            fmt!(f, Operand(&e.lhs) " " op " " Operand(&e.rhs));
        }
    }
}

fn is_string(e: &stmt::ExprBinary) -> bool {
    match &e.mapping {
        Some(mapping) => matches!(mapping.kind, MappingKind::String { .. }),
        None => e.ty.non_nullable().is_string(),
    }
}

fn unary<P: Params>(e: &stmt::ExprUnary, f: &mut Formatter<'_, P>) {
    match e.op {
        UnaryOp::Not => match &*e.operand {
            Expr::Binary(_) | Expr::Like(_) | Expr::In(_) | Expr::Unary(_) => {
                fmt!(f, "NOT (" Condition(&e.operand) ")");
            }
            operand => fmt!(f, "NOT " Condition(operand)),
        },
        UnaryOp::Negate => fmt!(f, "-" Operand(&e.operand)),
        UnaryOp::Convert => match &e.mapping {
            Some(mapping) => {
                let operand: &Expr = &e.operand;
                fmt!(f, "CAST(" operand " AS " mapping.store_type.as_str() ")");
            }
            None => f.fail(Error::internal_consistency(format!(
                "conversion to {} has no type mapping",
                e.ty
            ))),
        },
        UnaryOp::IsNull => fmt!(f, Operand(&e.operand) " IS NULL"),
        UnaryOp::IsNotNull => fmt!(f, Operand(&e.operand) " IS NOT NULL"),
    }
}

fn case<P: Params>(e: &stmt::ExprCase, f: &mut Formatter<'_, P>) {
    fmt!(f, "CASE");

    if let Some(operand) = e.operand.as_deref() {
        fmt!(f, " " operand);
    }

    for stmt::CaseWhen { test, result } in &e.whens {
        if e.operand.is_some() {
            fmt!(f, " WHEN " test);
        } else {
            fmt!(f, " WHEN " Condition(test));
        }
        fmt!(f, " THEN " result);
    }

    if let Some(else_result) = e.else_result.as_deref() {
        fmt!(f, " ELSE " else_result);
    }

    fmt!(f, " END");
}

fn func<P: Params>(e: &stmt::ExprFunc, f: &mut Formatter<'_, P>) {
    if let Some(instance) = &e.instance {
        fmt!(f, Operand(instance) ".");
    } else if let Some(schema) = &e.schema {
        fmt!(f, Ident(schema) ".");
    }

    fmt!(f, &e.name);

    if !e.niladic {
        fmt!(f, "(" Comma(&e.args) ")");
    }
}
