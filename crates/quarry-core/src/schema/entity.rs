use super::Property;

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Host-side name, used as a query source.
    pub name: String,

    pub table: String,

    /// Database schema the table lives in.
    pub schema: Option<String>,

    pub properties: Vec<Property>,
}

impl Entity {
    pub fn new(
        name: impl Into<String>,
        table: impl Into<String>,
        properties: impl IntoIterator<Item = Property>,
    ) -> Entity {
        Entity {
            name: name.into(),
            table: table.into(),
            schema: None,
            properties: properties.into_iter().collect(),
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Entity {
        self.schema = Some(schema.into());
        self
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.name == name)
    }

    /// The alias used for the entity's table in a root query: the lowercased
    /// first character of the table name.
    pub fn table_alias(&self) -> String {
        self.table
            .chars()
            .next()
            .map(|c| c.to_lowercase().collect())
            .unwrap_or_else(|| "t".to_string())
    }
}
