/// A named table, aliased in its `FROM` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: String,
    pub schema: Option<String>,
    pub alias: String,
}

impl Table {
    pub fn new(name: impl Into<String>, alias: impl Into<String>) -> Table {
        Table {
            name: name.into(),
            schema: None,
            alias: alias.into(),
        }
    }
}
