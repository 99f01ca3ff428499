//! The host-side query: an entity source followed by the operators applied
//! to it, each parameterized by small expression fragments.

mod expr;
pub use expr::{BinaryOp, Expr, UnaryOp};

mod lambda;
pub use lambda::Lambda;

mod method;
pub use method::Method;

mod operator;
pub use operator::Operator;

mod param_values;
pub use param_values::ParameterValues;

/// A composed query over one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryExpr {
    /// Name of the entity the query reads.
    pub source: String,

    pub operators: Vec<Operator>,
}

impl QueryExpr {
    pub fn new(source: impl Into<String>) -> QueryExpr {
        QueryExpr {
            source: source.into(),
            operators: vec![],
        }
    }

    pub fn then(mut self, operator: Operator) -> QueryExpr {
        self.operators.push(operator);
        self
    }

    pub fn filter(self, predicate: Lambda) -> QueryExpr {
        self.then(Operator::Filter(predicate))
    }

    pub fn project(self, selector: Lambda) -> QueryExpr {
        self.then(Operator::Project(selector))
    }

    pub fn order_by(self, key: Lambda) -> QueryExpr {
        self.then(Operator::OrderBy(key))
    }

    pub fn order_by_descending(self, key: Lambda) -> QueryExpr {
        self.then(Operator::OrderByDescending(key))
    }

    pub fn then_by(self, key: Lambda) -> QueryExpr {
        self.then(Operator::ThenBy(key))
    }

    pub fn then_by_descending(self, key: Lambda) -> QueryExpr {
        self.then(Operator::ThenByDescending(key))
    }

    pub fn skip(self, count: impl Into<Expr>) -> QueryExpr {
        self.then(Operator::Skip(count.into()))
    }

    pub fn take(self, count: impl Into<Expr>) -> QueryExpr {
        self.then(Operator::Take(count.into()))
    }

    pub fn distinct(self) -> QueryExpr {
        self.then(Operator::Distinct)
    }
}
