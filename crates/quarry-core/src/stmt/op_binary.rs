#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    BitAnd,
    BitOr,
    And,
    Or,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,

    /// `COALESCE(lhs, rhs)`
    Coalesce,
}

impl BinaryOp {
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOp::Eq | BinaryOp::Ne | BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge
        )
    }

    /// Comparisons other than `=` and `<>`.
    pub fn is_relational(self) -> bool {
        matches!(self, BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge)
    }

    pub fn is_equality(self) -> bool {
        matches!(self, BinaryOp::Eq | BinaryOp::Ne)
    }

    pub fn is_logical(self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or)
    }

    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            BinaryOp::Add
                | BinaryOp::Subtract
                | BinaryOp::Multiply
                | BinaryOp::Divide
                | BinaryOp::Modulo
        )
    }

    pub fn is_bitwise(self) -> bool {
        matches!(self, BinaryOp::BitAnd | BinaryOp::BitOr)
    }

    /// The comparison that holds exactly when this one does not, under
    /// two-valued logic.
    pub fn negate(self) -> Option<BinaryOp> {
        match self {
            BinaryOp::Eq => Some(BinaryOp::Ne),
            BinaryOp::Ne => Some(BinaryOp::Eq),
            BinaryOp::Ge => Some(BinaryOp::Lt),
            BinaryOp::Gt => Some(BinaryOp::Le),
            BinaryOp::Le => Some(BinaryOp::Gt),
            BinaryOp::Lt => Some(BinaryOp::Ge),
            _ => None,
        }
    }
}

impl core::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BinaryOp::Add => "+".fmt(f),
            BinaryOp::Subtract => "-".fmt(f),
            BinaryOp::Multiply => "*".fmt(f),
            BinaryOp::Divide => "/".fmt(f),
            BinaryOp::Modulo => "%".fmt(f),
            BinaryOp::BitAnd => "&".fmt(f),
            BinaryOp::BitOr => "|".fmt(f),
            BinaryOp::And => "AND".fmt(f),
            BinaryOp::Or => "OR".fmt(f),
            BinaryOp::Eq => "=".fmt(f),
            BinaryOp::Ne => "<>".fmt(f),
            BinaryOp::Lt => "<".fmt(f),
            BinaryOp::Le => "<=".fmt(f),
            BinaryOp::Gt => ">".fmt(f),
            BinaryOp::Ge => ">=".fmt(f),
            BinaryOp::Coalesce => "COALESCE".fmt(f),
        }
    }
}
