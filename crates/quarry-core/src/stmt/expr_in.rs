use super::{Expr, ExprParameter, Select};
use crate::mapping::TypeMapping;
use std::sync::Arc;

/// `expr [NOT] IN (..)`
#[derive(Debug, Clone, PartialEq)]
pub struct ExprIn {
    /// The operand expression.
    pub expr: Box<Expr>,
    pub values: InValues,
    pub negated: bool,
    pub mapping: Option<Arc<TypeMapping>>,
}

/// What an `IN` tests membership against.
#[derive(Debug, Clone, PartialEq)]
pub enum InValues {
    /// An inline list of values, usually constants.
    List(Vec<Expr>),

    /// A list-valued parameter, expanded when SQL is generated.
    Parameter(ExprParameter),

    /// A single-column subquery.
    Subquery(Box<Select>),
}

impl Expr {
    pub fn in_list(expr: impl Into<Expr>, values: Vec<Expr>) -> Expr {
        Expr::In(ExprIn {
            expr: Box::new(expr.into()),
            values: InValues::List(values),
            negated: false,
            mapping: None,
        })
    }

    pub fn in_parameter(expr: impl Into<Expr>, parameter: ExprParameter) -> Expr {
        Expr::In(ExprIn {
            expr: Box::new(expr.into()),
            values: InValues::Parameter(parameter),
            negated: false,
            mapping: None,
        })
    }

    pub fn in_subquery(expr: impl Into<Expr>, subquery: Select) -> Expr {
        Expr::In(ExprIn {
            expr: Box::new(expr.into()),
            values: InValues::Subquery(Box::new(subquery.into_subquery())),
            negated: false,
            mapping: None,
        })
    }
}

impl From<ExprIn> for Expr {
    fn from(value: ExprIn) -> Self {
        Expr::In(value)
    }
}
