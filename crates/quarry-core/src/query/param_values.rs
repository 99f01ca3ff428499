use crate::stmt::Value;
use indexmap::IndexMap;

/// Runtime parameter values known at compile time.
///
/// Only list parameters used in membership tests are read, to expand them
/// into literal `IN` lists.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParameterValues {
    values: IndexMap<String, Value>,
}

impl ParameterValues {
    pub fn new() -> ParameterValues {
        ParameterValues::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> ParameterValues {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ParameterValues {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        ParameterValues {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
