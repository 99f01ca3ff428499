use super::Expr;

/// A one-parameter function fragment, such as a predicate or key selector.
#[derive(Debug, Clone, PartialEq)]
pub struct Lambda {
    pub param: String,
    pub body: Expr,
}

impl Lambda {
    pub fn new(param: impl Into<String>, body: impl Into<Expr>) -> Lambda {
        Lambda {
            param: param.into(),
            body: body.into(),
        }
    }
}
