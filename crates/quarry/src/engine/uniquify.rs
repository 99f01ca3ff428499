use super::Engine;
use indexmap::IndexSet;
use quarry_core::stmt::{self, ExprColumn, JoinOp, Select, TableExpr, VisitMut};
use std::mem;

/// Renames table and derived-table aliases so that no two are equal,
/// ignoring case, anywhere in the tree.
///
/// Inner selects claim their aliases before the selects that contain them,
/// so an outer duplicate is the one renamed: `t(t(c))` becomes `t0(t(c))`.
#[derive(Debug, Default)]
struct Uniquify {
    /// Lowercased aliases claimed so far.
    aliases: IndexSet<String>,
}

impl Engine {
    pub(crate) fn uniquify_aliases(&self, select: &mut Select) {
        Uniquify::default().select(select);
    }
}

impl Uniquify {
    fn select(&mut self, select: &mut Select) {
        let mut renames = vec![];
        for table in &mut select.tables {
            self.table_expr(table, &mut renames);
        }

        if !renames.is_empty() {
            visit_own_exprs(select, &mut Rename { renames });
        }

        visit_own_exprs(select, &mut Nested { uniquify: self });
    }

    fn table_expr(&mut self, table: &mut TableExpr, renames: &mut Vec<(String, String)>) {
        match table {
            TableExpr::Table(table) => self.claim(&mut table.alias, renames),
            TableExpr::Select(select) => {
                self.select(select);

                if let Some(alias) = select.alias.as_mut().filter(|alias| !alias.is_empty()) {
                    self.claim(alias, renames);
                }
            }
            TableExpr::Join(join) => self.table_expr(&mut join.table, renames),
        }
    }

    fn claim(&mut self, alias: &mut String, renames: &mut Vec<(String, String)>) {
        if self.aliases.insert(alias.to_lowercase()) {
            return;
        }

        let unique = (0..)
            .map(|i| format!("{alias}{i}"))
            .find(|candidate| !self.aliases.contains(&candidate.to_lowercase()))
            .unwrap_or_default();

        self.aliases.insert(unique.to_lowercase());
        renames.push((mem::replace(alias, unique.clone()), unique));
    }
}

/// Visits the expressions a select evaluates itself: projection, pending
/// mapping, join conditions, predicate, orderings and paging. Derived
/// tables are not entered.
fn visit_own_exprs(select: &mut Select, v: &mut impl VisitMut) {
    for projection in &mut select.projection {
        v.visit_expr_mut(&mut projection.expr);
    }

    for expr in select.mapping.pending_exprs_mut() {
        v.visit_expr_mut(expr);
    }

    for table in &mut select.tables {
        visit_join_conditions(table, v);
    }

    if let Some(predicate) = &mut select.predicate {
        v.visit_expr_mut(predicate);
    }

    for ordering in &mut select.orderings {
        v.visit_expr_mut(&mut ordering.expr);
    }

    if let Some(limit) = &mut select.limit {
        v.visit_expr_mut(limit);
    }

    if let Some(offset) = &mut select.offset {
        v.visit_expr_mut(offset);
    }
}

fn visit_join_conditions(table: &mut TableExpr, v: &mut impl VisitMut) {
    if let TableExpr::Join(join) = table {
        if let JoinOp::Inner(on) | JoinOp::Left(on) = &mut join.op {
            v.visit_expr_mut(on);
        }

        visit_join_conditions(&mut join.table, v);
    }
}

/// Points column references at renamed aliases.
struct Rename {
    renames: Vec<(String, String)>,
}

impl VisitMut for Rename {
    fn visit_expr_column_mut(&mut self, i: &mut ExprColumn) {
        if let Some((_, new)) = self.renames.iter().find(|(old, _)| *old == i.table) {
            i.table = new.clone();
        }
    }

    fn visit_select_mut(&mut self, i: &mut Select) {
        // A nested select's own tables shadow the outer aliases
        let renames: Vec<_> = self
            .renames
            .iter()
            .filter(|(old, _)| !i.tables.iter().any(|table| table.alias() == Some(old.as_str())))
            .cloned()
            .collect();

        if !renames.is_empty() {
            stmt::visit_mut::visit_select_mut(&mut Rename { renames }, i);
        }
    }
}

/// Uniquifies the selects nested in `EXISTS` and `IN` expressions.
struct Nested<'a> {
    uniquify: &'a mut Uniquify,
}

impl VisitMut for Nested<'_> {
    fn visit_select_mut(&mut self, i: &mut Select) {
        self.uniquify.select(i);
    }
}
