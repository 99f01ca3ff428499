use super::QueryTranslator;
use quarry_core::{
    query::{self, Lambda},
    stmt::{Expr, Select},
    Error, Result,
};
use std::mem;

impl QueryTranslator<'_> {
    /// `EXISTS` over the rows matching `predicate`.
    pub(super) fn any(&mut self, predicate: Option<&Lambda>) -> Result<()> {
        if let Some(predicate) = predicate {
            self.filter(predicate)?;
        }

        self.exists(false)
    }

    /// `NOT EXISTS` over the rows failing `predicate`.
    pub(super) fn all(&mut self, predicate: &Lambda) -> Result<()> {
        let predicate = self.scalar(predicate).predicate(&predicate.body)?;
        let negated = self.engine.factory.apply(Expr::not(predicate))?;
        self.select.apply_predicate(negated);

        self.exists(true)
    }

    /// Tests `item` for membership in the single projected column.
    pub(super) fn contains(&mut self, item: &query::Expr) -> Result<()> {
        if self.shaper.as_value().is_none() {
            return Err(Error::translation_unsupported(
                "`Contains` requires a single-column projection",
            ));
        }

        let item = self.unscoped().operand(item)?;

        let mut subquery = self.take_select();
        if !subquery.is_bounded() {
            subquery.clear_ordering();
        }

        let contains = self.engine.factory.apply(Expr::in_subquery(item, subquery))?;
        self.replace_with_scalar(contains);
        Ok(())
    }

    fn exists(&mut self, negated: bool) -> Result<()> {
        let mut subquery = self.take_select();
        subquery.clear_projection();
        if !subquery.is_bounded() {
            subquery.clear_ordering();
        }

        let exists = if negated {
            Expr::not_exists(subquery)
        } else {
            Expr::exists(subquery)
        };

        let exists = self.engine.factory.apply(exists)?;
        self.replace_with_scalar(exists);
        Ok(())
    }

    fn take_select(&mut self) -> Select {
        mem::replace(&mut self.select, Select::scalar(Expr::from(false)))
    }
}
