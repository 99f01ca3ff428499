mod projection_mapping;
mod pushdown;
mod remap;

pub use projection_mapping::ProjectionMapping;
pub use remap::Remap;

use super::{Expr, OrderByExpr, ProjectionExpr, Table, TableExpr};
use crate::shape::ProjectionMember;

/// The central composite of the tree: one `SELECT` statement.
///
/// `alias` distinguishes three roles:
///
/// * `None`: the outermost, top-level statement.
/// * `Some("")`: a scalar or anonymous subquery, e.g. inside `EXISTS`.
/// * `Some(name)`: a named derived table in some `FROM` clause.
///
/// A select is built up in place by the operator translator through the
/// `apply_*` mutators. Mutators that would change the meaning of state
/// already applied push the current select down into a derived table first.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub alias: Option<String>,
    pub distinct: bool,
    pub projection: Vec<ProjectionExpr>,
    pub tables: Vec<TableExpr>,
    pub predicate: Option<Expr>,
    pub orderings: Vec<OrderByExpr>,
    pub limit: Option<Expr>,
    pub offset: Option<Expr>,

    /// Maps shaper leaves to the expressions (or, once applied, projection
    /// indices) that produce them.
    pub mapping: ProjectionMapping,
}

/// Alias given to a select when it is pushed down into a derived table.
const SUBQUERY_ALIAS: &str = "t";

impl Select {
    /// A top-level select reading from `table`, with nothing projected yet.
    pub fn from_table(table: Table) -> Select {
        Select {
            tables: vec![TableExpr::Table(table)],
            ..Select::empty()
        }
    }

    /// A top-level select with no tables that produces one scalar value,
    /// mapped to the root member.
    pub fn scalar(expr: Expr) -> Select {
        let mut select = Select::empty();
        select.mapping.insert(ProjectionMember::root(), expr);
        select
    }

    fn empty() -> Select {
        Select {
            alias: None,
            distinct: false,
            projection: vec![],
            tables: vec![],
            predicate: None,
            orderings: vec![],
            limit: None,
            offset: None,
            mapping: ProjectionMapping::default(),
        }
    }

    /// Returns `true` when a limit or offset has been applied.
    pub fn is_bounded(&self) -> bool {
        self.limit.is_some() || self.offset.is_some()
    }

    pub fn is_top_level(&self) -> bool {
        self.alias.is_none()
    }

    /// The pending expression mapped to `member`, if any.
    pub fn mapped(&self, member: &ProjectionMember) -> Option<&Expr> {
        self.mapping.expr(member)
    }

    /// Replaces all pending projection state with `mapping`.
    pub fn replace_projection_mapping(
        &mut self,
        mapping: impl IntoIterator<Item = (ProjectionMember, Expr)>,
    ) {
        self.projection.clear();
        self.mapping = ProjectionMapping::pending(mapping);
    }

    /// Drops all projection state. An empty projection renders as `SELECT 1`.
    pub fn clear_projection(&mut self) {
        self.projection.clear();
        self.mapping = ProjectionMapping::default();
    }

    /// Materializes the pending mapping into the projection list.
    ///
    /// Equal expressions share a single projection. Calling this on an
    /// already-applied select does nothing.
    pub fn apply_projection(&mut self) {
        let ProjectionMapping::Pending(pending) = std::mem::take(&mut self.mapping) else {
            return;
        };

        let mut applied = indexmap::IndexMap::with_capacity(pending.len());
        for (member, expr) in pending {
            let index = self.add_to_projection(expr, member.last());
            applied.insert(member, index);
        }

        self.mapping = ProjectionMapping::Applied(applied);
    }

    /// Adds `expr` to the projection list, returning its index.
    ///
    /// An equal expression already projected is reused. Inside a derived
    /// table every projection gets an alias unique among its siblings,
    /// compared case-insensitively.
    pub fn add_to_projection(&mut self, expr: Expr, alias: Option<&str>) -> usize {
        if let Some(index) = self.projection.iter().position(|p| p.expr == expr) {
            return index;
        }

        let base = alias
            .map(str::to_string)
            .or_else(|| expr.as_column().map(|column| column.name.clone()));

        let alias = if self.alias.is_some() {
            Some(self.unique_projection_alias(base.as_deref().unwrap_or("c")))
        } else {
            base
        };

        self.projection.push(ProjectionExpr { expr, alias });
        self.projection.len() - 1
    }

    fn unique_projection_alias(&self, base: &str) -> String {
        let taken = |candidate: &str| {
            self.projection.iter().any(|p| {
                p.alias
                    .as_deref()
                    .is_some_and(|alias| alias.eq_ignore_ascii_case(candidate))
            })
        };

        if !taken(base) {
            return base.to_string();
        }

        (0..)
            .map(|counter| format!("{base}{counter}"))
            .find(|candidate| !taken(candidate))
            .unwrap_or_else(|| base.to_string())
    }

    /// ANDs `predicate` into the select's predicate.
    ///
    /// A constant `true` is skipped. A bounded select is pushed down first,
    /// so the filter applies to the limited rows rather than before the
    /// limit.
    pub fn apply_predicate(&mut self, predicate: Expr) {
        if predicate.is_true() {
            return;
        }

        let predicate = if self.is_bounded() {
            self.pushdown_into_subquery().apply(predicate)
        } else {
            predicate
        };

        self.predicate = Some(match self.predicate.take() {
            Some(existing) => {
                let mapping = predicate.type_mapping().cloned();
                Expr::and(existing, predicate).with_type_mapping(mapping)
            }
            None => predicate,
        });
    }

    /// Replaces the orderings with `ordering`.
    ///
    /// A distinct or bounded select is pushed down first.
    pub fn apply_ordering(&mut self, mut ordering: OrderByExpr) {
        if self.distinct || self.is_bounded() {
            ordering.expr = self.pushdown_into_subquery().apply(ordering.expr);
        }

        self.orderings.clear();
        self.orderings.push(ordering);
    }

    /// Appends a secondary ordering unless the same key is already ordered on.
    ///
    /// A bounded or distinct select is pushed down first so the existing
    /// orderings and the new one apply to the same rows.
    pub fn append_ordering(&mut self, mut ordering: OrderByExpr) {
        if self.distinct || self.is_bounded() {
            ordering.expr = self.pushdown_into_subquery().apply(ordering.expr);
        }

        if !self.orderings.iter().any(|o| o.expr == ordering.expr) {
            self.orderings.push(ordering);
        }
    }

    pub fn clear_ordering(&mut self) {
        self.orderings.clear();
    }

    /// Flips every ordering direction, pushing down a bounded select first.
    pub fn reverse_orderings(&mut self) {
        if self.is_bounded() {
            self.pushdown_into_subquery();
        }

        for ordering in &mut self.orderings {
            ordering.reverse();
        }
    }

    pub fn apply_limit(&mut self, limit: Expr) {
        if self.limit.is_some() {
            self.pushdown_into_subquery();
        }

        self.limit = Some(limit);
    }

    pub fn apply_offset(&mut self, offset: Expr) {
        if self.is_bounded() {
            self.pushdown_into_subquery();
        }

        self.offset = Some(offset);
    }

    /// Marks the select `DISTINCT`.
    ///
    /// Orderings are dropped since deduplication does not preserve them.
    pub fn apply_distinct(&mut self) {
        if self.is_bounded() {
            self.pushdown_into_subquery();
        }

        self.distinct = true;
        self.orderings.clear();
    }

    /// Pushes down a distinct or bounded select so an aggregate runs over
    /// the already-restricted rows.
    pub fn prepare_for_aggregate(&mut self) {
        if self.distinct || self.is_bounded() {
            self.pushdown_into_subquery();
        }
    }

    /// Turns this select into a scalar subquery for use inside `EXISTS` or
    /// `IN`, materializing its projection.
    pub fn into_subquery(mut self) -> Select {
        self.apply_projection();
        self.alias = Some(String::new());
        self
    }
}

#[cfg(test)]
mod tests;
