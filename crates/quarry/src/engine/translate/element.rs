use super::QueryTranslator;
use quarry_core::{query::Lambda, shape::Cardinality, stmt::Type, Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Element {
    First,
    Single,
    Last,
}

impl QueryTranslator<'_> {
    /// Limits the rows to one. `Last` reads the first row of the reversed
    /// ordering.
    pub(super) fn element(&mut self, element: Element, or_default: bool, predicate: Option<&Lambda>) -> Result<()> {
        if let Some(predicate) = predicate {
            self.filter(predicate)?;
        }

        if element == Element::Last {
            if self.select.orderings.is_empty() {
                return Err(Error::translation_unsupported(
                    "`Last` requires an ordering",
                ));
            }
            self.select.reverse_orderings();
        }

        // `Single` fetches one row as well, so a second match goes unnoticed
        let factory = &self.engine.factory;
        let one = factory.constant(1, Type::I32, factory.mappings().find(&Type::I32));
        self.select.apply_limit(one);

        self.cardinality = match element {
            Element::First | Element::Last => Cardinality::First { or_default },
            Element::Single => Cardinality::Single { or_default },
        };
        Ok(())
    }
}
