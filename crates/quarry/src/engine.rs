mod factory;
pub use factory::ExprFactory;

mod null_semantics;
mod simplify;
mod translate;
mod uniquify;
mod verify;

use crate::translator::MethodTranslator;
use quarry_core::Schema;

/// Everything a compilation reads, resolved once by the builder.
pub(crate) struct Engine {
    pub(crate) schema: Schema,

    pub(crate) factory: ExprFactory,

    /// Plugins first, then the built-ins.
    pub(crate) translators: Vec<Box<dyn MethodTranslator>>,

    /// Emit `=`/`<>` with SQL's three-valued semantics instead of the host's.
    pub(crate) use_relational_nulls: bool,
}
