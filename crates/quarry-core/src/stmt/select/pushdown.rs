use super::{ProjectionMapping, Remap, Select, SUBQUERY_ALIAS};
use crate::stmt::{Expr, ExprColumn, OrderByExpr, TableExpr};
use indexmap::IndexMap;

impl Select {
    /// Wraps the current select as a derived table inside a new outer
    /// select, in place.
    ///
    /// The inner select takes the tables, predicate, orderings, distinct
    /// flag, limit and offset. Orderings move to the outer select and stay
    /// on the inner one only when it is bounded.
    /// Every projected or mapped expression becomes an inner projection and
    /// is re-exposed as an outer column. The returned [`Remap`] rewrites
    /// other expressions written against the old select.
    pub fn pushdown_into_subquery(&mut self) -> Remap {
        let mut subquery = Select {
            alias: Some(SUBQUERY_ALIAS.to_string()),
            distinct: std::mem::take(&mut self.distinct),
            projection: vec![],
            tables: std::mem::take(&mut self.tables),
            predicate: self.predicate.take(),
            orderings: std::mem::take(&mut self.orderings),
            limit: self.limit.take(),
            offset: self.offset.take(),
            mapping: ProjectionMapping::default(),
        };

        let mut remap = Remap::default();

        match std::mem::take(&mut self.mapping) {
            ProjectionMapping::Applied(applied) => {
                let projection = std::mem::take(&mut self.projection);
                let mut outer_indices = Vec::with_capacity(projection.len());

                for projection in projection {
                    let index =
                        subquery.add_to_projection(projection.expr.clone(), projection.alias.as_deref());
                    let outer = subquery.outer_column(index);
                    remap.insert(projection.expr, outer.clone());
                    outer_indices.push(self.add_to_projection(outer, projection.alias.as_deref()));
                }

                self.mapping = ProjectionMapping::Applied(
                    applied
                        .into_iter()
                        .map(|(member, index)| (member, outer_indices[index]))
                        .collect(),
                );
            }
            ProjectionMapping::Pending(pending) => {
                let mut outer_mapping = IndexMap::with_capacity(pending.len());

                for (member, expr) in pending {
                    let index = subquery.add_to_projection(expr.clone(), member.last());
                    let outer = subquery.outer_column(index);
                    remap.insert(expr, outer.clone());
                    outer_mapping.insert(member, outer);
                }

                self.mapping = ProjectionMapping::Pending(outer_mapping);
            }
        }

        for ordering in subquery.orderings.clone() {
            let expr = match remap.lookup(&ordering.expr).cloned() {
                Some(outer) => outer,
                None => {
                    let index = subquery.add_to_projection(ordering.expr.clone(), None);
                    let outer = subquery.outer_column(index);
                    remap.insert(ordering.expr, outer.clone());
                    outer
                }
            };

            self.orderings.push(OrderByExpr {
                expr,
                ascending: ordering.ascending,
            });
        }

        if !subquery.is_bounded() {
            subquery.clear_ordering();
        }

        self.tables = vec![TableExpr::Select(Box::new(subquery))];
        remap
    }

    /// A column of the enclosing select reading projection `index` of this
    /// derived table.
    fn outer_column(&self, index: usize) -> Expr {
        let projection = &self.projection[index];
        let table = self.alias.clone().unwrap_or_default();
        let name = projection.name().unwrap_or_default().to_string();

        ExprColumn {
            table,
            name,
            ty: projection.expr.ty().clone(),
            nullable: projection.expr.is_nullable(),
            mapping: projection.expr.type_mapping().cloned(),
        }
        .into()
    }
}
