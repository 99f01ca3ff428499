use super::QueryTranslator;
use quarry_core::{query::Lambda, stmt::OrderByExpr, Error, Result};

impl QueryTranslator<'_> {
    /// Replaces any existing ordering with `key`.
    pub(super) fn order_by(&mut self, key: &Lambda, ascending: bool) -> Result<()> {
        let ordering = self.ordering(key, ascending)?;
        self.select.apply_ordering(ordering);
        Ok(())
    }

    /// Adds `key` as a secondary ordering.
    pub(super) fn then_by(&mut self, key: &Lambda, ascending: bool) -> Result<()> {
        if self.select.orderings.is_empty() {
            return Err(Error::translation_unsupported(
                "`ThenBy` without a preceding ordering",
            ));
        }

        let ordering = self.ordering(key, ascending)?;
        self.select.append_ordering(ordering);
        Ok(())
    }

    fn ordering(&self, key: &Lambda, ascending: bool) -> Result<OrderByExpr> {
        let expr = self.scalar(key).value(&key.body)?;

        Ok(if ascending {
            OrderByExpr::asc(expr)
        } else {
            OrderByExpr::desc(expr)
        })
    }
}
