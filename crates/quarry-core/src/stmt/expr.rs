use super::{
    ExprBinary, ExprCase, ExprColumn, ExprConstant, ExprExists, ExprFragment, ExprFunc, ExprIn,
    ExprLike, ExprParameter, ExprUnary, Type, Value,
};
use crate::mapping::TypeMapping;
use std::{fmt, sync::Arc};

/// A scalar SQL expression.
///
/// Every variant carries a semantic type and, once the type-mapping
/// propagator has visited it, a [`TypeMapping`]. `Fragment` is the only
/// variant that is never mapped.
#[derive(Clone, PartialEq)]
pub enum Expr {
    /// Arithmetic, comparison, logical, bitwise or coalesce operator.
    Binary(ExprBinary),

    /// `CASE [operand] WHEN .. THEN .. [ELSE ..] END`
    Case(ExprCase),

    /// A column of a table or derived select in scope.
    Column(ExprColumn),

    /// A literal value rendered inline.
    Constant(ExprConstant),

    /// `[NOT] EXISTS (subquery)`
    Exists(ExprExists),

    /// Raw SQL text, rendered verbatim.
    Fragment(ExprFragment),

    /// A function call, possibly niladic or on a receiver instance.
    Func(ExprFunc),

    /// `expr [NOT] IN (values | subquery)`
    In(ExprIn),

    /// `expr LIKE pattern [ESCAPE escape]`
    Like(ExprLike),

    /// A named placeholder bound at execution time.
    Parameter(ExprParameter),

    /// Logical not, arithmetic negation, conversion or a null test.
    Unary(ExprUnary),
}

static BOOL: Type = Type::Bool;
static UNKNOWN: Type = Type::Unknown;

impl Expr {
    /// The semantic type of the value this expression produces.
    pub fn ty(&self) -> &Type {
        match self {
            Expr::Binary(e) => &e.ty,
            Expr::Case(e) => &e.ty,
            Expr::Column(e) => &e.ty,
            Expr::Constant(e) => &e.ty,
            Expr::Exists(_) | Expr::In(_) | Expr::Like(_) => &BOOL,
            Expr::Fragment(_) => &UNKNOWN,
            Expr::Func(e) => &e.ty,
            Expr::Parameter(e) => &e.ty,
            Expr::Unary(e) => &e.ty,
        }
    }

    /// The type mapping assigned to this expression, if any.
    pub fn type_mapping(&self) -> Option<&Arc<TypeMapping>> {
        match self {
            Expr::Binary(e) => e.mapping.as_ref(),
            Expr::Case(e) => e.mapping.as_ref(),
            Expr::Column(e) => e.mapping.as_ref(),
            Expr::Constant(e) => e.mapping.as_ref(),
            Expr::Exists(e) => e.mapping.as_ref(),
            Expr::Fragment(_) => None,
            Expr::Func(e) => e.mapping.as_ref(),
            Expr::In(e) => e.mapping.as_ref(),
            Expr::Like(e) => e.mapping.as_ref(),
            Expr::Parameter(e) => e.mapping.as_ref(),
            Expr::Unary(e) => e.mapping.as_ref(),
        }
    }

    pub(crate) fn type_mapping_mut(&mut self) -> Option<&mut Option<Arc<TypeMapping>>> {
        Some(match self {
            Expr::Binary(e) => &mut e.mapping,
            Expr::Case(e) => &mut e.mapping,
            Expr::Column(e) => &mut e.mapping,
            Expr::Constant(e) => &mut e.mapping,
            Expr::Exists(e) => &mut e.mapping,
            Expr::Fragment(_) => return None,
            Expr::Func(e) => &mut e.mapping,
            Expr::In(e) => &mut e.mapping,
            Expr::Like(e) => &mut e.mapping,
            Expr::Parameter(e) => &mut e.mapping,
            Expr::Unary(e) => &mut e.mapping,
        })
    }

    /// Sets the type mapping directly, without propagating to children.
    ///
    /// Rewrite passes use this when a new node replaces one whose mapping is
    /// already known.
    pub fn with_type_mapping(mut self, mapping: Option<Arc<TypeMapping>>) -> Expr {
        if let Some(slot) = self.type_mapping_mut() {
            *slot = mapping;
        }
        self
    }

    /// Returns `true` if the expression is the constant `true`.
    pub fn is_true(&self) -> bool {
        matches!(self, Expr::Constant(e) if e.value.is_true())
    }

    /// Returns `true` if the expression is the constant `false`.
    pub fn is_false(&self) -> bool {
        matches!(self, Expr::Constant(e) if e.value.is_false())
    }

    /// Returns `true` if the expression is the constant `NULL`.
    pub fn is_null_constant(&self) -> bool {
        matches!(self, Expr::Constant(e) if e.value.is_null())
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Expr::Constant(_))
    }

    pub fn is_parameter(&self) -> bool {
        matches!(self, Expr::Parameter(_))
    }

    /// The literal value, when this expression is a constant.
    pub fn as_constant(&self) -> Option<&Value> {
        match self {
            Expr::Constant(e) => Some(&e.value),
            _ => None,
        }
    }

    pub fn as_column(&self) -> Option<&ExprColumn> {
        match self {
            Expr::Column(e) => Some(e),
            _ => None,
        }
    }

    /// Returns `true` for expressions that produce a boolean through a
    /// predicate rather than a stored value: comparisons, `AND`/`OR`,
    /// `NOT`, null tests, `EXISTS`, `IN` and `LIKE`.
    pub fn is_predicate(&self) -> bool {
        match self {
            Expr::Binary(e) => e.op.is_comparison() || e.op.is_logical(),
            Expr::Unary(e) => e.op.is_predicate(),
            Expr::Exists(_) | Expr::In(_) | Expr::Like(_) => true,
            _ => false,
        }
    }

    /// Takes the expression out, leaving an untyped `NULL` constant behind.
    pub fn take(&mut self) -> Expr {
        std::mem::replace(self, Expr::null(Type::Unknown))
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Expr {
        Expr::constant(value)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Expr {
        Expr::constant(value)
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Binary(e) => e.fmt(f),
            Expr::Case(e) => e.fmt(f),
            Expr::Column(e) => e.fmt(f),
            Expr::Constant(e) => e.fmt(f),
            Expr::Exists(e) => e.fmt(f),
            Expr::Fragment(e) => e.fmt(f),
            Expr::Func(e) => e.fmt(f),
            Expr::In(e) => e.fmt(f),
            Expr::Like(e) => e.fmt(f),
            Expr::Parameter(e) => e.fmt(f),
            Expr::Unary(e) => e.fmt(f),
        }
    }
}
