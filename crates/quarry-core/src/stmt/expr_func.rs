use super::{Expr, Type};
use crate::mapping::TypeMapping;
use std::sync::Arc;

/// A SQL function call.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprFunc {
    pub name: String,

    /// Schema the function lives in, rendered as `schema.name(..)`.
    pub schema: Option<String>,

    /// Receiver for instance-style calls, rendered as `instance.name(..)`.
    pub instance: Option<Box<Expr>>,

    pub args: Vec<Expr>,

    /// Niladic functions render without parentheses, e.g. `CURRENT_TIMESTAMP`.
    pub niladic: bool,

    /// Whether the function may return `NULL`.
    pub nullable: bool,

    pub ty: Type,
    pub mapping: Option<Arc<TypeMapping>>,
}

impl Expr {
    pub fn func(name: impl Into<String>, args: Vec<Expr>, ty: Type) -> Expr {
        ExprFunc {
            name: name.into(),
            schema: None,
            instance: None,
            args,
            niladic: false,
            nullable: true,
            ty,
            mapping: None,
        }
        .into()
    }

    pub fn niladic(name: impl Into<String>, ty: Type) -> Expr {
        ExprFunc {
            name: name.into(),
            schema: None,
            instance: None,
            args: vec![],
            niladic: true,
            nullable: true,
            ty,
            mapping: None,
        }
        .into()
    }

    /// `COUNT(*)`, or another counting function over `*`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use quarry_core::stmt::{Expr, Type};
    /// let count = Expr::count_star("COUNT", Type::I32);
    /// assert_eq!(count.ty(), &Type::I32);
    /// ```
    pub fn count_star(name: &str, ty: Type) -> Expr {
        ExprFunc {
            name: name.to_string(),
            schema: None,
            instance: None,
            args: vec![Expr::fragment("*")],
            niladic: false,
            nullable: false,
            ty,
            mapping: None,
        }
        .into()
    }
}

impl ExprFunc {
    pub fn non_nullable(mut self) -> ExprFunc {
        self.nullable = false;
        self
    }
}

impl From<ExprFunc> for Expr {
    fn from(value: ExprFunc) -> Self {
        Expr::Func(value)
    }
}
