use super::Method;
use crate::stmt::{Type, Value};

/// A host-language expression fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// The row variable bound by the enclosing lambda.
    Var(String),

    /// Property or field access, e.g. `c.Name` or `s.Length`.
    Member { receiver: Box<Expr>, name: String },

    /// A method call. Static calls have no receiver.
    Call {
        receiver: Option<Box<Expr>>,
        method: Method,
        args: Vec<Expr>,
    },

    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },

    Unary { op: UnaryOp, operand: Box<Expr> },

    /// `test ? then : otherwise`
    Conditional {
        test: Box<Expr>,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },

    /// A value captured into the query. `ty` is the value's static type,
    /// which matters for `NULL`.
    Constant { value: Value, ty: Type },

    /// A parameter supplied when the query executes.
    Param { name: String, ty: Type },

    /// Anonymous or member-init construction; only valid in a projection.
    New {
        name: Option<String>,
        members: Vec<(String, Expr)>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,

    /// Non-short-circuit `&`: bitwise on integers, logical on bools.
    And,

    /// Non-short-circuit `|`.
    Or,

    AndAlso,
    OrElse,
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,

    /// `??`
    Coalesce,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UnaryOp {
    Not,
    Negate,
    Convert(Type),
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Expr {
        Expr::Var(name.into())
    }

    /// A constant typed by its value. `Value::Null` gets an unknown type;
    /// use [`Expr::null`] when the type matters.
    pub fn constant(value: impl Into<Value>) -> Expr {
        let value = value.into();
        let ty = value.ty().unwrap_or(Type::Unknown);
        Expr::Constant { value, ty }
    }

    pub fn null(ty: Type) -> Expr {
        Expr::Constant {
            value: Value::Null,
            ty: Type::nullable(ty),
        }
    }

    pub fn param(name: impl Into<String>, ty: Type) -> Expr {
        Expr::Param {
            name: name.into(),
            ty,
        }
    }

    pub fn member(self, name: impl Into<String>) -> Expr {
        Expr::Member {
            receiver: Box::new(self),
            name: name.into(),
        }
    }

    /// An instance method call on `self`.
    pub fn call(self, method: Method, args: Vec<Expr>) -> Expr {
        Expr::Call {
            receiver: Some(Box::new(self)),
            method,
            args,
        }
    }

    pub fn call_static(method: Method, args: Vec<Expr>) -> Expr {
        Expr::Call {
            receiver: None,
            method,
            args,
        }
    }

    pub fn binary(op: BinaryOp, lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::Binary {
            op,
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
        }
    }

    pub fn eq(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Equal, self, rhs)
    }

    pub fn ne(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::NotEqual, self, rhs)
    }

    pub fn lt(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::LessThan, self, rhs)
    }

    pub fn le(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::LessThanOrEqual, self, rhs)
    }

    pub fn gt(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::GreaterThan, self, rhs)
    }

    pub fn ge(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::GreaterThanOrEqual, self, rhs)
    }

    pub fn and_also(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::AndAlso, self, rhs)
    }

    pub fn or_else(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::OrElse, self, rhs)
    }

    pub fn add(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Add, self, rhs)
    }

    pub fn coalesce(self, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(BinaryOp::Coalesce, self, rhs)
    }

    pub fn not(self) -> Expr {
        Expr::Unary {
            op: UnaryOp::Not,
            operand: Box::new(self),
        }
    }

    pub fn negate(self) -> Expr {
        Expr::Unary {
            op: UnaryOp::Negate,
            operand: Box::new(self),
        }
    }

    pub fn convert(self, ty: Type) -> Expr {
        Expr::Unary {
            op: UnaryOp::Convert(ty),
            operand: Box::new(self),
        }
    }

    pub fn conditional(test: impl Into<Expr>, then: impl Into<Expr>, otherwise: impl Into<Expr>) -> Expr {
        Expr::Conditional {
            test: Box::new(test.into()),
            then: Box::new(then.into()),
            otherwise: Box::new(otherwise.into()),
        }
    }

    /// Construction of an anonymous object from named members.
    pub fn new_object<S: Into<String>>(members: impl IntoIterator<Item = (S, Expr)>) -> Expr {
        Expr::New {
            name: None,
            members: members
                .into_iter()
                .map(|(name, expr)| (name.into(), expr))
                .collect(),
        }
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

impl From<i32> for Expr {
    fn from(value: i32) -> Expr {
        Expr::constant(value)
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Expr {
        Expr::constant(value)
    }
}
