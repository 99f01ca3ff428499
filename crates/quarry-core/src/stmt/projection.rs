use super::Expr;

/// One output column of a select.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionExpr {
    pub expr: Expr,

    /// Output name. Always set, and unique within the select, when the
    /// select is a named derived table.
    pub alias: Option<String>,
}

impl ProjectionExpr {
    /// The name an outer select reads this column by.
    pub fn name(&self) -> Option<&str> {
        self.alias
            .as_deref()
            .or_else(|| self.expr.as_column().map(|column| column.name.as_str()))
    }
}
