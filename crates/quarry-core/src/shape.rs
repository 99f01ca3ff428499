//! The shape of a query result: how row values are assembled back into the
//! objects the host query produces.

mod descriptor;
pub use descriptor::ShapeDescriptor;

mod projection_member;
pub use projection_member::ProjectionMember;

mod shaper;
pub use shaper::{OnNull, Shaper, ShaperValue};

use crate::stmt::Select;

/// A select paired with the shaper that reads its rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapedQuery {
    pub select: Select,
    pub shaper: Shaper,
    pub cardinality: Cardinality,
}

/// How many results the host expects from the rows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Every row is one result.
    #[default]
    Sequence,

    /// The first row. Without `or_default`, no rows is an error.
    First { or_default: bool },

    /// The only row. Without `or_default`, no rows is an error.
    Single { or_default: bool },

    /// One row holding one aggregate or boolean value.
    Scalar,
}
