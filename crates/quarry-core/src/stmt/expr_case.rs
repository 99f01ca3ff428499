use super::{Expr, Type};
use crate::mapping::TypeMapping;
use std::sync::Arc;

/// `CASE [operand] WHEN test THEN result .. [ELSE else_result] END`
///
/// With an operand, each `test` is a value compared against it. Without
/// one, each `test` is a predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCase {
    pub operand: Option<Box<Expr>>,
    pub whens: Vec<CaseWhen>,
    pub else_result: Option<Box<Expr>>,
    pub ty: Type,
    pub mapping: Option<Arc<TypeMapping>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseWhen {
    pub test: Expr,
    pub result: Expr,
}

impl Expr {
    /// A searched `CASE` with a single `WHEN` branch.
    pub fn case_when(test: impl Into<Expr>, result: impl Into<Expr>, else_result: impl Into<Expr>) -> Expr {
        let result = result.into();
        let ty = result.ty().clone();
        ExprCase {
            operand: None,
            whens: vec![CaseWhen {
                test: test.into(),
                result,
            }],
            else_result: Some(Box::new(else_result.into())),
            ty,
            mapping: None,
        }
        .into()
    }
}

impl ExprCase {
    /// Iterates over every result branch, including the else branch.
    pub fn results(&self) -> impl Iterator<Item = &Expr> {
        self.whens
            .iter()
            .map(|when| &when.result)
            .chain(self.else_result.as_deref())
    }
}

impl From<ExprCase> for Expr {
    fn from(value: ExprCase) -> Self {
        Expr::Case(value)
    }
}
