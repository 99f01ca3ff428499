use super::{Expr, Select};
use crate::mapping::TypeMapping;
use std::sync::Arc;

/// `[NOT] EXISTS (subquery)`
#[derive(Debug, Clone, PartialEq)]
pub struct ExprExists {
    pub subquery: Box<Select>,
    pub negated: bool,
    pub mapping: Option<Arc<TypeMapping>>,
}

impl Expr {
    pub fn exists(subquery: Select) -> Expr {
        Expr::Exists(ExprExists {
            subquery: Box::new(subquery.into_subquery()),
            negated: false,
            mapping: None,
        })
    }

    pub fn not_exists(subquery: Select) -> Expr {
        Expr::Exists(ExprExists {
            subquery: Box::new(subquery.into_subquery()),
            negated: true,
            mapping: None,
        })
    }
}

impl From<ExprExists> for Expr {
    fn from(value: ExprExists) -> Self {
        Expr::Exists(value)
    }
}
