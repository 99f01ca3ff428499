mod builder;
pub use builder::Builder;

use crate::engine::Engine;
use quarry_core::{
    query::{ParameterValues, QueryExpr},
    shape::{ShapeDescriptor, ShapedQuery},
    Flavor, Result,
};
use quarry_sql::{ParameterInfo, ParameterList, Serializer};
use tracing::debug;

/// Compiles host queries into SQL for one schema and one flavor.
///
/// A compiler holds no per-query state; one instance may serve any number
/// of threads.
pub struct Compiler {
    engine: Engine,
}

/// The artifact handed to the execution layer.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledQuery {
    pub sql: String,

    /// Parameters in placeholder order, each bound once.
    pub parameters: Vec<ParameterInfo>,

    /// Reads the result rows back into host values.
    pub shape: ShapeDescriptor,

    /// `false` when a list parameter was expanded from its runtime value, so
    /// the text is only valid for those values.
    pub cacheable: bool,
}

impl Compiler {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn flavor(&self) -> Flavor {
        self.engine.factory.flavor()
    }

    pub fn compile(&self, query: &QueryExpr) -> Result<CompiledQuery> {
        self.compile_with(query, &ParameterValues::new())
    }

    /// Compiles `query`, expanding list parameters found in `values` into
    /// inline `IN` lists.
    pub fn compile_with(&self, query: &QueryExpr, values: &ParameterValues) -> Result<CompiledQuery> {
        let ShapedQuery {
            select,
            shaper,
            cardinality,
        } = self.lower(query)?;

        let select = select.freeze();
        self.engine.verify(&select)?;

        let mut params = ParameterList::new();
        let sql = Serializer::new(self.flavor())
            .with_parameter_values(values)
            .serialize(&select, &mut params)?;

        let shape = ShapeDescriptor::new(shaper, &select, cardinality)?;

        debug!(%sql, parameters = params.parameters.len(), "compiled query");

        Ok(CompiledQuery {
            sql,
            parameters: params.parameters,
            shape,
            cacheable: params.expanded.is_empty(),
        })
    }

    /// Translates `query` and runs every rewrite over the result, stopping
    /// short of SQL generation.
    pub fn lower(&self, query: &QueryExpr) -> Result<ShapedQuery> {
        let mut shaped = self
            .engine
            .translate(query)
            .map_err(|err| err.context(format!("query over `{}`", query.source)))?;
        debug!(source = %query.source, select = ?shaped.select, "translated query");

        self.engine.expand_null_semantics(&mut shaped.select)?;
        debug!(select = ?shaped.select, "expanded null semantics");

        self.engine.simplify(&mut shaped.select);
        debug!(select = ?shaped.select, "simplified");

        self.engine.uniquify_aliases(&mut shaped.select);
        debug!(select = ?shaped.select, "uniquified aliases");

        Ok(shaped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiler_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Compiler>();
        assert_send_sync::<CompiledQuery>();
    }
}
