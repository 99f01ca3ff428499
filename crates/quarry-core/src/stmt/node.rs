use super::{Expr, Select, Visit, VisitMut};
use std::fmt;

pub trait Node: fmt::Debug {
    fn visit<V: Visit>(&self, visit: V);

    fn visit_mut<V: VisitMut>(&mut self, visit: V);
}

impl Node for Expr {
    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_expr(self);
    }

    fn visit_mut<V: VisitMut>(&mut self, mut visit: V) {
        visit.visit_expr_mut(self);
    }
}

impl Node for Select {
    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_select(self);
    }

    fn visit_mut<V: VisitMut>(&mut self, mut visit: V) {
        visit.visit_select_mut(self);
    }
}
