use super::QueryTranslator;
use quarry_core::{query, stmt::Expr, Error, Result};

impl QueryTranslator<'_> {
    pub(super) fn skip(&mut self, count: &query::Expr) -> Result<()> {
        let count = self.count_expr("Skip", count)?;
        self.select.apply_offset(count);
        Ok(())
    }

    pub(super) fn take(&mut self, count: &query::Expr) -> Result<()> {
        let count = self.count_expr("Take", count)?;
        self.select.apply_limit(count);
        Ok(())
    }

    /// A row count: an integer constant or parameter.
    fn count_expr(&self, operator: &str, count: &query::Expr) -> Result<Expr> {
        let count = self.unscoped().value(count)?;

        if !count.ty().non_nullable().is_integer() || !(count.is_constant() || count.is_parameter()) {
            return Err(Error::translation_unsupported(format!(
                "`{operator}` count must be an integer constant or parameter"
            )));
        }

        Ok(count)
    }
}
