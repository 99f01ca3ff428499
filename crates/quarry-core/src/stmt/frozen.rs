use super::Select;
use std::{ops::Deref, sync::Arc};

/// A fully built select that can no longer be mutated.
///
/// SQL generation only accepts this type. Cloning shares the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FrozenSelect(Arc<Select>);

impl Select {
    pub fn freeze(self) -> FrozenSelect {
        FrozenSelect(Arc::new(self))
    }
}

impl Deref for FrozenSelect {
    type Target = Select;

    fn deref(&self) -> &Select {
        &self.0
    }
}
