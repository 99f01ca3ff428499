use super::{Comparer, MappingKind, TypeMapping};
use crate::{
    capability::{Flavor, StorageTypes},
    schema::{Property, ValueConverter},
    stmt::{Type, Value},
};
use indexmap::IndexMap;
use std::sync::Arc;

/// The registry of type mappings for one database flavor.
///
/// Defaults come from the flavor's storage types and may be overridden per
/// type.
#[derive(Debug, Clone)]
pub struct TypeMappingSource {
    flavor: Flavor,
    mappings: IndexMap<Type, Arc<TypeMapping>>,

    /// Mapping for strings short enough for the bounded string type.
    bounded_string: Option<(usize, Arc<TypeMapping>)>,
}

impl TypeMappingSource {
    pub fn new(flavor: Flavor) -> TypeMappingSource {
        let capability = flavor.capability();
        let storage = &capability.storage_types;
        let string_comparer = if capability.case_insensitive_strings {
            Comparer::CaseInsensitive
        } else {
            Comparer::Default
        };
        let unicode = flavor == Flavor::SqlServer;

        let mapping = |ty: Type, store_type: &str, kind: MappingKind| {
            Arc::new(TypeMapping::new(ty, store_type, kind, flavor))
        };

        let mut mappings = IndexMap::new();
        for (ty, store_type, kind) in Self::defaults(storage) {
            mappings.insert(ty.clone(), mapping(ty, store_type, kind));
        }

        mappings.insert(
            Type::String,
            Arc::new(
                TypeMapping::new(
                    Type::String,
                    storage.default_string_type,
                    MappingKind::String { unicode },
                    flavor,
                )
                .with_comparer(string_comparer),
            ),
        );

        let bounded_string = storage.bounded_string.map(|(store_type, max_len)| {
            let mapping = TypeMapping::new(
                Type::String,
                store_type,
                MappingKind::String { unicode },
                flavor,
            )
            .with_comparer(string_comparer);
            (max_len, Arc::new(mapping))
        });

        TypeMappingSource {
            flavor,
            mappings,
            bounded_string,
        }
    }

    fn defaults(storage: &StorageTypes) -> [(Type, &'static str, MappingKind); 8] {
        [
            (Type::Bool, storage.bool, MappingKind::Bool),
            (Type::I16, storage.i16, MappingKind::Integer),
            (Type::I32, storage.i32, MappingKind::Integer),
            (Type::I64, storage.i64, MappingKind::Integer),
            (Type::F32, storage.f32, MappingKind::Float),
            (Type::F64, storage.f64, MappingKind::Float),
            (Type::Bytes, storage.bytes, MappingKind::Bytes),
            (
                Type::Uuid,
                storage.uuid,
                if storage.uuid == storage.default_string_type {
                    MappingKind::String { unicode: false }
                } else {
                    MappingKind::Uuid
                },
            ),
        ]
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Replaces the mapping used for `ty`.
    pub fn with_mapping(mut self, ty: Type, mapping: TypeMapping) -> TypeMappingSource {
        if ty == Type::String {
            self.bounded_string = None;
        }
        self.mappings.insert(ty, Arc::new(mapping));
        self
    }

    /// The default mapping for a semantic type. `Nullable` wrappers are
    /// ignored. Lists, records and unknown types have no mapping.
    pub fn find(&self, ty: &Type) -> Option<Arc<TypeMapping>> {
        self.mappings.get(ty.non_nullable()).cloned()
    }

    /// The mapping for a specific value, which may be narrower than the
    /// type's default.
    pub fn find_for_value(&self, value: &Value) -> Option<Arc<TypeMapping>> {
        match (value, &self.bounded_string) {
            (Value::String(s), Some((max_len, mapping))) if s.chars().count() <= *max_len => {
                Some(mapping.clone())
            }
            (value, _) => self.find(&value.ty()?),
        }
    }

    /// The mapping for a column backing `property`.
    pub fn find_for_property(&self, property: &Property) -> Option<Arc<TypeMapping>> {
        match &property.converter {
            Some(converter) => self.find_converted(&property.ty, converter.clone()),
            None => self.find(&property.ty),
        }
    }

    /// A mapping for host type `ty` stored through `converter`.
    pub fn find_converted(&self, ty: &Type, converter: ValueConverter) -> Option<Arc<TypeMapping>> {
        let provider = self.find(&converter.provider_ty)?;
        Some(Arc::new(provider.with_converter(ty.non_nullable().clone(), converter)))
    }

    /// The mapping every predicate result carries.
    pub fn bool_mapping(&self) -> Arc<TypeMapping> {
        match self.mappings.get(&Type::Bool) {
            Some(mapping) => mapping.clone(),
            None => Arc::new(TypeMapping::new(
                Type::Bool,
                self.flavor.capability().storage_types.bool,
                MappingKind::Bool,
                self.flavor,
            )),
        }
    }
}

impl Default for TypeMappingSource {
    fn default() -> Self {
        TypeMappingSource::new(Flavor::default())
    }
}
