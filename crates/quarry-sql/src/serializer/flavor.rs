use super::Serializer;
use quarry_core::{query::ParameterValues, Flavor};

impl<'a> Serializer<'a> {
    pub fn new(flavor: Flavor) -> Serializer<'a> {
        Serializer {
            flavor,
            parameter_values: None,
        }
    }

    pub fn sql_server() -> Serializer<'a> {
        Serializer::new(Flavor::SqlServer)
    }

    pub fn sqlite() -> Serializer<'a> {
        Serializer::new(Flavor::Sqlite)
    }

    pub fn postgresql() -> Serializer<'a> {
        Serializer::new(Flavor::Postgresql)
    }

    /// Values used to expand list parameters into literal `IN` lists.
    pub fn with_parameter_values(mut self, values: &'a ParameterValues) -> Serializer<'a> {
        self.parameter_values = Some(values);
        self
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }
}
