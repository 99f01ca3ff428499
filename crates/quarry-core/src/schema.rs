mod converter;
pub use converter::ValueConverter;

mod entity;
pub use entity::Entity;

mod property;
pub use property::Property;

use crate::{Error, Result};

/// Pre-resolved metadata for every entity a query may read.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Schema {
    pub entities: Vec<Entity>,
}

impl Schema {
    pub fn new(entities: impl IntoIterator<Item = Entity>) -> Schema {
        Schema {
            entities: entities.into_iter().collect(),
        }
    }

    /// Looks up an entity by name.
    pub fn entity(&self, name: &str) -> Result<&Entity> {
        self.entities
            .iter()
            .find(|entity| entity.name == name)
            .ok_or_else(|| Error::translation_unsupported(format!("unknown entity `{name}`")))
    }
}
