#![allow(unused_variables)]

use super::*;

pub trait VisitMut {
    fn visit_mut<N: Node>(&mut self, i: &mut N)
    where
        Self: Sized,
    {
        i.visit_mut(self);
    }

    fn visit_expr_mut(&mut self, i: &mut Expr) {
        visit_expr_mut(self, i);
    }

    fn visit_expr_binary_mut(&mut self, i: &mut ExprBinary) {
        visit_expr_binary_mut(self, i);
    }

    fn visit_expr_case_mut(&mut self, i: &mut ExprCase) {
        visit_expr_case_mut(self, i);
    }

    fn visit_expr_column_mut(&mut self, i: &mut ExprColumn) {
        visit_expr_column_mut(self, i);
    }

    fn visit_expr_constant_mut(&mut self, i: &mut ExprConstant) {
        visit_expr_constant_mut(self, i);
    }

    fn visit_expr_exists_mut(&mut self, i: &mut ExprExists) {
        visit_expr_exists_mut(self, i);
    }

    fn visit_expr_fragment_mut(&mut self, i: &mut ExprFragment) {
        visit_expr_fragment_mut(self, i);
    }

    fn visit_expr_func_mut(&mut self, i: &mut ExprFunc) {
        visit_expr_func_mut(self, i);
    }

    fn visit_expr_in_mut(&mut self, i: &mut ExprIn) {
        visit_expr_in_mut(self, i);
    }

    fn visit_expr_like_mut(&mut self, i: &mut ExprLike) {
        visit_expr_like_mut(self, i);
    }

    fn visit_expr_parameter_mut(&mut self, i: &mut ExprParameter) {
        visit_expr_parameter_mut(self, i);
    }

    fn visit_expr_unary_mut(&mut self, i: &mut ExprUnary) {
        visit_expr_unary_mut(self, i);
    }

    fn visit_join_mut(&mut self, i: &mut Join) {
        visit_join_mut(self, i);
    }

    fn visit_order_by_expr_mut(&mut self, i: &mut OrderByExpr) {
        visit_order_by_expr_mut(self, i);
    }

    fn visit_projection_expr_mut(&mut self, i: &mut ProjectionExpr) {
        visit_projection_expr_mut(self, i);
    }

    fn visit_select_mut(&mut self, i: &mut Select) {
        visit_select_mut(self, i);
    }

    fn visit_table_mut(&mut self, i: &mut Table) {
        visit_table_mut(self, i);
    }

    fn visit_table_expr_mut(&mut self, i: &mut TableExpr) {
        visit_table_expr_mut(self, i);
    }
}

impl<V: VisitMut> VisitMut for &mut V {
    fn visit_expr_mut(&mut self, i: &mut Expr) {
        VisitMut::visit_expr_mut(&mut **self, i);
    }

    fn visit_expr_binary_mut(&mut self, i: &mut ExprBinary) {
        VisitMut::visit_expr_binary_mut(&mut **self, i);
    }

    fn visit_expr_case_mut(&mut self, i: &mut ExprCase) {
        VisitMut::visit_expr_case_mut(&mut **self, i);
    }

    fn visit_expr_column_mut(&mut self, i: &mut ExprColumn) {
        VisitMut::visit_expr_column_mut(&mut **self, i);
    }

    fn visit_expr_constant_mut(&mut self, i: &mut ExprConstant) {
        VisitMut::visit_expr_constant_mut(&mut **self, i);
    }

    fn visit_expr_exists_mut(&mut self, i: &mut ExprExists) {
        VisitMut::visit_expr_exists_mut(&mut **self, i);
    }

    fn visit_expr_fragment_mut(&mut self, i: &mut ExprFragment) {
        VisitMut::visit_expr_fragment_mut(&mut **self, i);
    }

    fn visit_expr_func_mut(&mut self, i: &mut ExprFunc) {
        VisitMut::visit_expr_func_mut(&mut **self, i);
    }

    fn visit_expr_in_mut(&mut self, i: &mut ExprIn) {
        VisitMut::visit_expr_in_mut(&mut **self, i);
    }

    fn visit_expr_like_mut(&mut self, i: &mut ExprLike) {
        VisitMut::visit_expr_like_mut(&mut **self, i);
    }

    fn visit_expr_parameter_mut(&mut self, i: &mut ExprParameter) {
        VisitMut::visit_expr_parameter_mut(&mut **self, i);
    }

    fn visit_expr_unary_mut(&mut self, i: &mut ExprUnary) {
        VisitMut::visit_expr_unary_mut(&mut **self, i);
    }

    fn visit_join_mut(&mut self, i: &mut Join) {
        VisitMut::visit_join_mut(&mut **self, i);
    }

    fn visit_order_by_expr_mut(&mut self, i: &mut OrderByExpr) {
        VisitMut::visit_order_by_expr_mut(&mut **self, i);
    }

    fn visit_projection_expr_mut(&mut self, i: &mut ProjectionExpr) {
        VisitMut::visit_projection_expr_mut(&mut **self, i);
    }

    fn visit_select_mut(&mut self, i: &mut Select) {
        VisitMut::visit_select_mut(&mut **self, i);
    }

    fn visit_table_mut(&mut self, i: &mut Table) {
        VisitMut::visit_table_mut(&mut **self, i);
    }

    fn visit_table_expr_mut(&mut self, i: &mut TableExpr) {
        VisitMut::visit_table_expr_mut(&mut **self, i);
    }
}

pub fn visit_expr_mut<V>(v: &mut V, node: &mut Expr)
where
    V: VisitMut + ?Sized,
{
    match node {
        Expr::Binary(expr) => v.visit_expr_binary_mut(expr),
        Expr::Case(expr) => v.visit_expr_case_mut(expr),
        Expr::Column(expr) => v.visit_expr_column_mut(expr),
        Expr::Constant(expr) => v.visit_expr_constant_mut(expr),
        Expr::Exists(expr) => v.visit_expr_exists_mut(expr),
        Expr::Fragment(expr) => v.visit_expr_fragment_mut(expr),
        Expr::Func(expr) => v.visit_expr_func_mut(expr),
        Expr::In(expr) => v.visit_expr_in_mut(expr),
        Expr::Like(expr) => v.visit_expr_like_mut(expr),
        Expr::Parameter(expr) => v.visit_expr_parameter_mut(expr),
        Expr::Unary(expr) => v.visit_expr_unary_mut(expr),
    }
}

pub fn visit_expr_binary_mut<V>(v: &mut V, node: &mut ExprBinary)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.lhs);
    v.visit_expr_mut(&mut node.rhs);
}

pub fn visit_expr_case_mut<V>(v: &mut V, node: &mut ExprCase)
where
    V: VisitMut + ?Sized,
{
    if let Some(operand) = &mut node.operand {
        v.visit_expr_mut(operand);
    }

    for when in &mut node.whens {
        v.visit_expr_mut(&mut when.test);
        v.visit_expr_mut(&mut when.result);
    }

    if let Some(else_result) = &mut node.else_result {
        v.visit_expr_mut(else_result);
    }
}

pub fn visit_expr_column_mut<V>(v: &mut V, node: &mut ExprColumn)
where
    V: VisitMut + ?Sized,
{
}

pub fn visit_expr_constant_mut<V>(v: &mut V, node: &mut ExprConstant)
where
    V: VisitMut + ?Sized,
{
}

pub fn visit_expr_exists_mut<V>(v: &mut V, node: &mut ExprExists)
where
    V: VisitMut + ?Sized,
{
    v.visit_select_mut(&mut node.subquery);
}

pub fn visit_expr_fragment_mut<V>(v: &mut V, node: &mut ExprFragment)
where
    V: VisitMut + ?Sized,
{
}

pub fn visit_expr_func_mut<V>(v: &mut V, node: &mut ExprFunc)
where
    V: VisitMut + ?Sized,
{
    if let Some(instance) = &mut node.instance {
        v.visit_expr_mut(instance);
    }

    for arg in &mut node.args {
        v.visit_expr_mut(arg);
    }
}

pub fn visit_expr_in_mut<V>(v: &mut V, node: &mut ExprIn)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.expr);

    match &mut node.values {
        InValues::List(items) => {
            for item in items {
                v.visit_expr_mut(item);
            }
        }
        InValues::Parameter(parameter) => v.visit_expr_parameter_mut(parameter),
        InValues::Subquery(subquery) => v.visit_select_mut(subquery),
    }
}

pub fn visit_expr_like_mut<V>(v: &mut V, node: &mut ExprLike)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.expr);
    v.visit_expr_mut(&mut node.pattern);

    if let Some(escape) = &mut node.escape {
        v.visit_expr_mut(escape);
    }
}

pub fn visit_expr_parameter_mut<V>(v: &mut V, node: &mut ExprParameter)
where
    V: VisitMut + ?Sized,
{
}

pub fn visit_expr_unary_mut<V>(v: &mut V, node: &mut ExprUnary)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.operand);
}

pub fn visit_join_mut<V>(v: &mut V, node: &mut Join)
where
    V: VisitMut + ?Sized,
{
    v.visit_table_expr_mut(&mut node.table);

    match &mut node.op {
        JoinOp::Cross => {}
        JoinOp::Inner(expr) | JoinOp::Left(expr) => v.visit_expr_mut(expr),
    }
}

pub fn visit_order_by_expr_mut<V>(v: &mut V, node: &mut OrderByExpr)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.expr);
}

pub fn visit_projection_expr_mut<V>(v: &mut V, node: &mut ProjectionExpr)
where
    V: VisitMut + ?Sized,
{
    v.visit_expr_mut(&mut node.expr);
}

pub fn visit_select_mut<V>(v: &mut V, node: &mut Select)
where
    V: VisitMut + ?Sized,
{
    for projection in &mut node.projection {
        v.visit_projection_expr_mut(projection);
    }

    for expr in node.mapping.pending_exprs_mut() {
        v.visit_expr_mut(expr);
    }

    for table in &mut node.tables {
        v.visit_table_expr_mut(table);
    }

    if let Some(predicate) = &mut node.predicate {
        v.visit_expr_mut(predicate);
    }

    for ordering in &mut node.orderings {
        v.visit_order_by_expr_mut(ordering);
    }

    if let Some(limit) = &mut node.limit {
        v.visit_expr_mut(limit);
    }

    if let Some(offset) = &mut node.offset {
        v.visit_expr_mut(offset);
    }
}

pub fn visit_table_mut<V>(v: &mut V, node: &mut Table)
where
    V: VisitMut + ?Sized,
{
}

pub fn visit_table_expr_mut<V>(v: &mut V, node: &mut TableExpr)
where
    V: VisitMut + ?Sized,
{
    match node {
        TableExpr::Table(table) => v.visit_table_mut(table),
        TableExpr::Join(join) => v.visit_join_mut(join),
        TableExpr::Select(select) => v.visit_select_mut(select),
    }
}

/// Calls `f` on every expression in `node`, children before parents.
pub fn for_each_expr_mut<F>(node: &mut impl Node, f: F)
where
    F: FnMut(&mut Expr),
{
    struct ForEach<F> {
        f: F,
    }

    impl<F> VisitMut for ForEach<F>
    where
        F: FnMut(&mut Expr),
    {
        fn visit_expr_mut(&mut self, node: &mut Expr) {
            visit_expr_mut(self, node);
            (self.f)(node);
        }
    }

    node.visit_mut(ForEach { f });
}
