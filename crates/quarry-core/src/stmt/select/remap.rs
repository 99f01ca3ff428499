use crate::stmt::{visit_mut, Expr, VisitMut};

/// Rewrites expressions written against a pushed-down select so they read
/// from the new outer select instead.
///
/// Each entry maps an expression projected by the inner select to the
/// outer column that exposes it. Matching is structural and prefers the
/// largest matching subtree.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Remap {
    entries: Vec<(Expr, Expr)>,
}

impl Remap {
    pub(super) fn insert(&mut self, inner: Expr, outer: Expr) {
        if self.lookup(&inner).is_none() {
            self.entries.push((inner, outer));
        }
    }

    pub fn lookup(&self, inner: &Expr) -> Option<&Expr> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == inner)
            .map(|(_, outer)| outer)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies the remap to `expr`.
    pub fn apply(&self, mut expr: Expr) -> Expr {
        self.apply_mut(&mut expr);
        expr
    }

    pub fn apply_mut(&self, expr: &mut Expr) {
        RemapVisitor { remap: self }.visit_expr_mut(expr);
    }
}

struct RemapVisitor<'a> {
    remap: &'a Remap,
}

impl VisitMut for RemapVisitor<'_> {
    fn visit_expr_mut(&mut self, i: &mut Expr) {
        if let Some(outer) = self.remap.lookup(i) {
            *i = outer.clone();
            return;
        }

        visit_mut::visit_expr_mut(self, i);
    }
}
