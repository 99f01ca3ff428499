//! Compiles host-language query expressions into parameterized SQL and a
//! shape descriptor for reading the results back.

mod compiler;
pub use compiler::{Builder, CompiledQuery, Compiler};

mod engine;
pub use engine::ExprFactory;

pub mod translator;
pub use translator::{Member, MethodTranslator, TranslationContext};

pub use quarry_core::{
    capability, mapping, query, schema, shape, stmt, Error, Flavor, Result, Schema,
};
pub use quarry_sql::ParameterInfo;
