//! The intermediate representation shared by the query compiler: the SQL
//! statement tree, semantic types and values, type mappings, the host-side
//! query model and the result shape.

mod error;
pub use error::{Error, IntoError};

pub mod capability;
pub use capability::{Capability, Flavor};

pub mod mapping;
pub use mapping::{TypeMapping, TypeMappingSource};

pub mod query;

pub mod schema;
pub use schema::Schema;

pub mod shape;

pub mod stmt;

/// A Result type alias that uses Quarry's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
