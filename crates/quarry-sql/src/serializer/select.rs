use super::{table::FromList, Comma, Condition, Formatter, Ident, Params, ToSql};

use quarry_core::{
    stmt::{Expr, FrozenSelect, OrderByExpr, ProjectionExpr, Select},
    Flavor,
};

/// The top-level statement, rendered without parentheses.
pub(super) struct Statement<'a>(pub(super) &'a FrozenSelect);

/// A nested select. The caller supplies the surrounding parentheses.
pub(super) struct Subquery<'a>(pub(super) &'a Select);

impl ToSql for Statement<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let select: &Select = self.0;
        fmt!(f, select);
    }
}

impl ToSql for Subquery<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, self.0);
    }
}

impl ToSql for &Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let flavor = f.serializer.flavor;

        fmt!(f, "SELECT ");

        if self.distinct {
            fmt!(f, "DISTINCT ");
        }

        if flavor == Flavor::SqlServer && self.offset.is_none() {
            if let Some(limit) = &self.limit {
                fmt!(f, "TOP(" limit ") ");
            }
        }

        if self.projection.is_empty() {
            fmt!(f, "1");
        } else {
            fmt!(f, Comma(&self.projection));
        }

        if !self.tables.is_empty() {
            fmt!(f, " FROM " FromList(&self.tables));
        }

        if let Some(predicate) = &self.predicate {
            fmt!(f, " WHERE " Condition(predicate));
        }

        let orderings: &[OrderByExpr] =
            if self.is_bounded() || self.orderings.iter().any(is_meaningful) {
                &self.orderings
            } else {
                &[]
            };

        if !orderings.is_empty() {
            fmt!(f, " ORDER BY " Comma(orderings));
        }

        match flavor {
            Flavor::SqlServer => {
                if let Some(offset) = &self.offset {
                    if orderings.is_empty() {
                        fmt!(f, " ORDER BY (SELECT 1)");
                    }

                    fmt!(f, " OFFSET " offset " ROWS");

                    if let Some(limit) = &self.limit {
                        fmt!(f, " FETCH NEXT " limit " ROWS ONLY");
                    }
                }
            }
            Flavor::Sqlite => match (&self.limit, &self.offset) {
                (Some(limit), Some(offset)) => fmt!(f, " LIMIT " limit " OFFSET " offset),
                (Some(limit), None) => fmt!(f, " LIMIT " limit),
                (None, Some(offset)) => fmt!(f, " LIMIT -1 OFFSET " offset),
                (None, None) => {}
            },
            Flavor::Postgresql => {
                if let Some(limit) = &self.limit {
                    fmt!(f, " LIMIT " limit);
                }

                if let Some(offset) = &self.offset {
                    fmt!(f, " OFFSET " offset);
                }
            }
        }
    }
}

/// Constant and parameter keys do not order anything.
fn is_meaningful(ordering: &OrderByExpr) -> bool {
    !matches!(ordering.expr, Expr::Constant(_) | Expr::Parameter(_))
}

impl ToSql for &ProjectionExpr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, (&self.expr));

        let column_name = self.expr.as_column().map(|column| column.name.as_str());

        match self.alias.as_deref() {
            Some(alias) if Some(alias) != column_name => fmt!(f, " AS " Ident(alias)),
            _ => {}
        }
    }
}

impl ToSql for &OrderByExpr {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, (&self.expr));

        if !self.ascending {
            fmt!(f, " DESC");
        }
    }
}
