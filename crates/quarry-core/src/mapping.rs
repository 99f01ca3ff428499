//! Type mappings: how a semantic type is stored, rendered as a literal and
//! compared by one database.

mod apply;

mod comparer;
pub use comparer::Comparer;

mod literal;

mod source;
pub use source::TypeMappingSource;

mod type_mapping;
pub use type_mapping::{MappingKind, TypeMapping};
