use super::Engine;
use quarry_core::{
    stmt::{self, Expr, ExprIn, FrozenSelect, InValues, Select, Visit},
    Error, Result,
};

/// Checks the invariants SQL generation relies on. A failure here is a bug
/// in an earlier pass, never a property of the query.
struct Verify {
    error: Option<Error>,
}

impl Engine {
    pub(crate) fn verify(&self, select: &FrozenSelect) -> Result<()> {
        let mut verify = Verify { error: None };
        verify.visit_select(select);

        match verify.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Verify {
    fn fail(&mut self, err: Error) {
        self.error.get_or_insert(err);
    }
}

impl stmt::Visit for Verify {
    fn visit_expr(&mut self, i: &Expr) {
        stmt::visit::visit_expr(self, i);

        // Every node but raw SQL is mapped
        if !matches!(i, Expr::Fragment(_)) && i.type_mapping().is_none() {
            self.fail(Error::internal_consistency(format!(
                "expression has no type mapping after propagation; expr={i:?}"
            )));
        }
    }

    fn visit_expr_in(&mut self, i: &ExprIn) {
        stmt::visit::visit_expr_in(self, i);

        if let InValues::Parameter(parameter) = &i.values {
            if parameter.mapping.is_none() {
                self.fail(Error::internal_consistency(format!(
                    "IN over parameter `{}` has no type mapping",
                    parameter.name
                )));
            }
        }
    }

    fn visit_select(&mut self, i: &Select) {
        stmt::visit::visit_select(self, i);

        if i.mapping.pending_exprs().next().is_some() {
            self.fail(Error::internal_consistency(
                "select still has a pending projection mapping",
            ));
        }
    }
}
