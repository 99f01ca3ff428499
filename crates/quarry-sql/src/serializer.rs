#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod expr;
use expr::{Condition, Operand};

mod flavor;

mod ident;
use ident::Ident;

mod in_list;

mod params;
pub use params::{ParameterInfo, ParameterList, Params, Placeholder};

mod select;
mod table;

use quarry_core::{
    query::ParameterValues,
    stmt::FrozenSelect,
    Error, Flavor, Result,
};

/// Serialize a select to a SQL string
#[derive(Debug, Clone, Copy)]
pub struct Serializer<'a> {
    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,

    /// Runtime values for list parameters expanded into `IN` lists
    parameter_values: Option<&'a ParameterValues>,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,

    /// First error hit while serializing. Rendering carries on so fragments
    /// stay simple, but the output is discarded.
    error: Option<Error>,
}

impl Serializer<'_> {
    /// Renders `stmt` as a single statement without a trailing semicolon.
    pub fn serialize(&self, stmt: &FrozenSelect, params: &mut impl Params) -> Result<String> {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
            error: None,
        };

        select::Statement(stmt).to_sql(&mut fmt);

        match fmt.error {
            Some(err) => Err(err),
            None => Ok(ret),
        }
    }
}

impl<T> Formatter<'_, T> {
    fn fail(&mut self, err: Error) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    fn native_bool(&self) -> bool {
        self.serializer.flavor.capability().native_bool
    }
}
