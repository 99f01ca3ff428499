use super::Expr;

/// Opaque SQL text, such as the `*` in `COUNT(*)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprFragment {
    pub sql: String,
}

impl Expr {
    pub fn fragment(sql: impl Into<String>) -> Expr {
        Expr::Fragment(ExprFragment { sql: sql.into() })
    }
}

impl From<ExprFragment> for Expr {
    fn from(value: ExprFragment) -> Self {
        Expr::Fragment(value)
    }
}
