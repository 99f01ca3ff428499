use super::Compiler;
use crate::{
    engine::{Engine, ExprFactory},
    translator::{self, MethodTranslator},
};
use quarry_core::{bail, Flavor, Result, Schema, TypeMappingSource};
use std::mem;

/// Configures a [`Compiler`]. Everything is resolved once, in
/// [`build`](Builder::build).
#[derive(Default)]
pub struct Builder {
    flavor: Option<Flavor>,

    /// Overrides the flavor's default registry.
    type_mappings: Option<TypeMappingSource>,

    /// Plugin translators, in registration order.
    translators: Vec<Box<dyn MethodTranslator>>,

    use_relational_nulls: bool,
}

impl Builder {
    pub fn flavor(&mut self, flavor: Flavor) -> &mut Self {
        self.flavor = Some(flavor);
        self
    }

    pub fn type_mappings(&mut self, type_mappings: TypeMappingSource) -> &mut Self {
        self.type_mappings = Some(type_mappings);
        self
    }

    /// Registers a translator consulted before the built-ins.
    pub fn translator(&mut self, translator: impl MethodTranslator + 'static) -> &mut Self {
        self.translators.push(Box::new(translator));
        self
    }

    /// Emit comparisons with SQL's own null semantics, skipping the rewrite
    /// to host semantics.
    pub fn use_relational_nulls(&mut self, enabled: bool) -> &mut Self {
        self.use_relational_nulls = enabled;
        self
    }

    pub fn build(&mut self, schema: Schema) -> Result<Compiler> {
        let mappings = match (self.type_mappings.take(), self.flavor) {
            (Some(mappings), Some(flavor)) if mappings.flavor() != flavor => {
                bail!(
                    "type mappings are for {:?} but the compiler targets {flavor:?}",
                    mappings.flavor()
                );
            }
            (Some(mappings), _) => mappings,
            (None, flavor) => TypeMappingSource::new(flavor.unwrap_or_default()),
        };

        for entity in &schema.entities {
            for property in &entity.properties {
                if mappings.find_for_property(property).is_none() {
                    bail!(
                        "property `{}.{}` of type {} has no type mapping",
                        entity.name,
                        property.name,
                        property.ty
                    );
                }
            }
        }

        let mut translators = mem::take(&mut self.translators);
        translators.extend(translator::builtins());

        Ok(Compiler {
            engine: Engine {
                schema,
                factory: ExprFactory::new(mappings),
                translators,
                use_relational_nulls: self.use_relational_nulls,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarry_core::{
        schema::{Entity, Property, ValueConverter},
        stmt::Type,
    };

    fn schema() -> Schema {
        Schema::new([Entity::new(
            "Customer",
            "Customers",
            [Property::new("Id", Type::I32)],
        )])
    }

    #[test]
    fn defaults_to_sql_server() {
        let compiler = Compiler::builder().build(schema()).unwrap();
        assert_eq!(compiler.flavor(), Flavor::SqlServer);
    }

    #[test]
    fn mismatched_type_mappings_are_rejected() {
        let err = Compiler::builder()
            .flavor(Flavor::Postgresql)
            .type_mappings(TypeMappingSource::new(Flavor::Sqlite))
            .build(schema())
            .err()
            .unwrap();
        assert!(err.to_string().contains("Postgresql"), "{err}");
    }

    #[test]
    fn type_mappings_pick_the_flavor() {
        let compiler = Compiler::builder()
            .type_mappings(TypeMappingSource::new(Flavor::Sqlite))
            .build(schema())
            .unwrap();
        assert_eq!(compiler.flavor(), Flavor::Sqlite);
    }

    #[test]
    fn unmappable_property_is_rejected() {
        let schema = Schema::new([Entity::new(
            "Customer",
            "Customers",
            [Property::new("Tags", Type::list(Type::String))],
        )]);

        let err = Compiler::builder().build(schema).err().unwrap();
        assert!(err.to_string().contains("Customer.Tags"), "{err}");
    }

    #[test]
    fn converted_property_maps_through_provider() {
        let converter = ValueConverter::new(
            "bool-as-string",
            Type::String,
            |value| Ok(value.clone()),
            |value| Ok(value.clone()),
        );
        let schema = Schema::new([Entity::new(
            "Customer",
            "Customers",
            [Property::new("IsActive", Type::Bool).converter(converter)],
        )]);

        Compiler::builder().build(schema).unwrap();
    }
}
