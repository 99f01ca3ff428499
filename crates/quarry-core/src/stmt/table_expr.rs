use super::{Join, Select, Table};

/// An entry in a select's table list.
#[derive(Debug, Clone, PartialEq)]
pub enum TableExpr {
    Table(Table),
    Join(Join),

    /// A derived table. Its alias is always non-empty.
    Select(Box<Select>),
}

impl TableExpr {
    /// The alias this table is visible under, if any.
    pub fn alias(&self) -> Option<&str> {
        match self {
            TableExpr::Table(table) => Some(&table.alias),
            TableExpr::Join(join) => join.table.alias(),
            TableExpr::Select(select) => select.alias.as_deref(),
        }
    }
}

impl From<Table> for TableExpr {
    fn from(value: Table) -> Self {
        TableExpr::Table(value)
    }
}

impl From<Join> for TableExpr {
    fn from(value: Join) -> Self {
        TableExpr::Join(value)
    }
}
