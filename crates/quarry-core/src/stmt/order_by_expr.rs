use super::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    pub expr: Expr,
    pub ascending: bool,
}

impl OrderByExpr {
    pub fn asc(expr: Expr) -> OrderByExpr {
        OrderByExpr {
            expr,
            ascending: true,
        }
    }

    pub fn desc(expr: Expr) -> OrderByExpr {
        OrderByExpr {
            expr,
            ascending: false,
        }
    }

    pub fn reverse(&mut self) {
        self.ascending = !self.ascending;
    }
}
