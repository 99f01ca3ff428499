use super::QueryTranslator;
use quarry_core::{query::Lambda, Result};

impl QueryTranslator<'_> {
    pub(super) fn filter(&mut self, predicate: &Lambda) -> Result<()> {
        let predicate = self.scalar(predicate).predicate(&predicate.body)?;
        self.select.apply_predicate(predicate);
        Ok(())
    }
}
