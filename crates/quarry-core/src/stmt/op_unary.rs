#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Logical `NOT`.
    Not,

    /// Arithmetic negation.
    Negate,

    /// Conversion to the node's type, rendered as `CAST`.
    Convert,

    IsNull,
    IsNotNull,
}

impl UnaryOp {
    /// Returns `true` for operators whose result is a predicate.
    pub fn is_predicate(self) -> bool {
        matches!(self, UnaryOp::Not | UnaryOp::IsNull | UnaryOp::IsNotNull)
    }

    pub fn is_null_test(self) -> bool {
        matches!(self, UnaryOp::IsNull | UnaryOp::IsNotNull)
    }
}

impl core::fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            UnaryOp::Not => "NOT".fmt(f),
            UnaryOp::Negate => "-".fmt(f),
            UnaryOp::Convert => "CAST".fmt(f),
            UnaryOp::IsNull => "IS NULL".fmt(f),
            UnaryOp::IsNotNull => "IS NOT NULL".fmt(f),
        }
    }
}
