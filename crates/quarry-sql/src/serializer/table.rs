use super::{select::Subquery, Condition, Formatter, Ident, Params, ToSql};

use quarry_core::stmt::{Join, JoinOp, Table, TableExpr};

/// The `FROM` list: the first table, then joins inline and any further
/// tables comma separated.
pub(super) struct FromList<'a>(pub(super) &'a [TableExpr]);

impl ToSql for FromList<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        for (i, table) in self.0.iter().enumerate() {
            match table {
                TableExpr::Join(join) => fmt!(f, " " join),
                table if i == 0 => fmt!(f, table),
                table => fmt!(f, ", " table),
            }
        }
    }
}

impl ToSql for &TableExpr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            TableExpr::Table(table) => fmt!(f, table),
            TableExpr::Join(join) => fmt!(f, join),
            TableExpr::Select(select) => {
                let alias = select.alias.as_deref().unwrap_or_default();
                fmt!(f, "(" Subquery(select) ") AS " Ident(alias));
            }
        }
    }
}

impl ToSql for &Table {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if let Some(schema) = &self.schema {
            fmt!(f, Ident(schema) ".");
        }

        fmt!(f, Ident(&self.name) " AS " Ident(&self.alias));
    }
}

impl ToSql for &Join {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let table: &TableExpr = &self.table;

        match &self.op {
            JoinOp::Cross => fmt!(f, "CROSS JOIN " table),
            JoinOp::Inner(on) => fmt!(f, "INNER JOIN " table " ON " Condition(on)),
            JoinOp::Left(on) => fmt!(f, "LEFT JOIN " table " ON " Condition(on)),
        }
    }
}
