#![allow(unused_variables)]

use super::*;

pub trait Visit {
    fn visit<N: Node>(&mut self, i: &N)
    where
        Self: Sized,
    {
        i.visit(self);
    }

    fn visit_expr(&mut self, i: &Expr) {
        visit_expr(self, i);
    }

    fn visit_expr_binary(&mut self, i: &ExprBinary) {
        visit_expr_binary(self, i);
    }

    fn visit_expr_case(&mut self, i: &ExprCase) {
        visit_expr_case(self, i);
    }

    fn visit_expr_column(&mut self, i: &ExprColumn) {
        visit_expr_column(self, i);
    }

    fn visit_expr_constant(&mut self, i: &ExprConstant) {
        visit_expr_constant(self, i);
    }

    fn visit_expr_exists(&mut self, i: &ExprExists) {
        visit_expr_exists(self, i);
    }

    fn visit_expr_fragment(&mut self, i: &ExprFragment) {
        visit_expr_fragment(self, i);
    }

    fn visit_expr_func(&mut self, i: &ExprFunc) {
        visit_expr_func(self, i);
    }

    fn visit_expr_in(&mut self, i: &ExprIn) {
        visit_expr_in(self, i);
    }

    fn visit_expr_like(&mut self, i: &ExprLike) {
        visit_expr_like(self, i);
    }

    fn visit_expr_parameter(&mut self, i: &ExprParameter) {
        visit_expr_parameter(self, i);
    }

    fn visit_expr_unary(&mut self, i: &ExprUnary) {
        visit_expr_unary(self, i);
    }

    fn visit_join(&mut self, i: &Join) {
        visit_join(self, i);
    }

    fn visit_order_by_expr(&mut self, i: &OrderByExpr) {
        visit_order_by_expr(self, i);
    }

    fn visit_projection_expr(&mut self, i: &ProjectionExpr) {
        visit_projection_expr(self, i);
    }

    fn visit_select(&mut self, i: &Select) {
        visit_select(self, i);
    }

    fn visit_table(&mut self, i: &Table) {
        visit_table(self, i);
    }

    fn visit_table_expr(&mut self, i: &TableExpr) {
        visit_table_expr(self, i);
    }
}

impl<V: Visit> Visit for &mut V {
    fn visit_expr(&mut self, i: &Expr) {
        Visit::visit_expr(&mut **self, i);
    }

    fn visit_expr_binary(&mut self, i: &ExprBinary) {
        Visit::visit_expr_binary(&mut **self, i);
    }

    fn visit_expr_case(&mut self, i: &ExprCase) {
        Visit::visit_expr_case(&mut **self, i);
    }

    fn visit_expr_column(&mut self, i: &ExprColumn) {
        Visit::visit_expr_column(&mut **self, i);
    }

    fn visit_expr_constant(&mut self, i: &ExprConstant) {
        Visit::visit_expr_constant(&mut **self, i);
    }

    fn visit_expr_exists(&mut self, i: &ExprExists) {
        Visit::visit_expr_exists(&mut **self, i);
    }

    fn visit_expr_fragment(&mut self, i: &ExprFragment) {
        Visit::visit_expr_fragment(&mut **self, i);
    }

    fn visit_expr_func(&mut self, i: &ExprFunc) {
        Visit::visit_expr_func(&mut **self, i);
    }

    fn visit_expr_in(&mut self, i: &ExprIn) {
        Visit::visit_expr_in(&mut **self, i);
    }

    fn visit_expr_like(&mut self, i: &ExprLike) {
        Visit::visit_expr_like(&mut **self, i);
    }

    fn visit_expr_parameter(&mut self, i: &ExprParameter) {
        Visit::visit_expr_parameter(&mut **self, i);
    }

    fn visit_expr_unary(&mut self, i: &ExprUnary) {
        Visit::visit_expr_unary(&mut **self, i);
    }

    fn visit_join(&mut self, i: &Join) {
        Visit::visit_join(&mut **self, i);
    }

    fn visit_order_by_expr(&mut self, i: &OrderByExpr) {
        Visit::visit_order_by_expr(&mut **self, i);
    }

    fn visit_projection_expr(&mut self, i: &ProjectionExpr) {
        Visit::visit_projection_expr(&mut **self, i);
    }

    fn visit_select(&mut self, i: &Select) {
        Visit::visit_select(&mut **self, i);
    }

    fn visit_table(&mut self, i: &Table) {
        Visit::visit_table(&mut **self, i);
    }

    fn visit_table_expr(&mut self, i: &TableExpr) {
        Visit::visit_table_expr(&mut **self, i);
    }
}

pub fn visit_expr<V>(v: &mut V, node: &Expr)
where
    V: Visit + ?Sized,
{
    match node {
        Expr::Binary(expr) => v.visit_expr_binary(expr),
        Expr::Case(expr) => v.visit_expr_case(expr),
        Expr::Column(expr) => v.visit_expr_column(expr),
        Expr::Constant(expr) => v.visit_expr_constant(expr),
        Expr::Exists(expr) => v.visit_expr_exists(expr),
        Expr::Fragment(expr) => v.visit_expr_fragment(expr),
        Expr::Func(expr) => v.visit_expr_func(expr),
        Expr::In(expr) => v.visit_expr_in(expr),
        Expr::Like(expr) => v.visit_expr_like(expr),
        Expr::Parameter(expr) => v.visit_expr_parameter(expr),
        Expr::Unary(expr) => v.visit_expr_unary(expr),
    }
}

pub fn visit_expr_binary<V>(v: &mut V, node: &ExprBinary)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.lhs);
    v.visit_expr(&node.rhs);
}

pub fn visit_expr_case<V>(v: &mut V, node: &ExprCase)
where
    V: Visit + ?Sized,
{
    if let Some(operand) = &node.operand {
        v.visit_expr(operand);
    }

    for when in &node.whens {
        v.visit_expr(&when.test);
        v.visit_expr(&when.result);
    }

    if let Some(else_result) = &node.else_result {
        v.visit_expr(else_result);
    }
}

pub fn visit_expr_column<V>(v: &mut V, node: &ExprColumn)
where
    V: Visit + ?Sized,
{
}

pub fn visit_expr_constant<V>(v: &mut V, node: &ExprConstant)
where
    V: Visit + ?Sized,
{
}

pub fn visit_expr_exists<V>(v: &mut V, node: &ExprExists)
where
    V: Visit + ?Sized,
{
    v.visit_select(&node.subquery);
}

pub fn visit_expr_fragment<V>(v: &mut V, node: &ExprFragment)
where
    V: Visit + ?Sized,
{
}

pub fn visit_expr_func<V>(v: &mut V, node: &ExprFunc)
where
    V: Visit + ?Sized,
{
    if let Some(instance) = &node.instance {
        v.visit_expr(instance);
    }

    for arg in &node.args {
        v.visit_expr(arg);
    }
}

pub fn visit_expr_in<V>(v: &mut V, node: &ExprIn)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);

    match &node.values {
        InValues::List(items) => {
            for item in items {
                v.visit_expr(item);
            }
        }
        InValues::Parameter(parameter) => v.visit_expr_parameter(parameter),
        InValues::Subquery(subquery) => v.visit_select(subquery),
    }
}

pub fn visit_expr_like<V>(v: &mut V, node: &ExprLike)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
    v.visit_expr(&node.pattern);

    if let Some(escape) = &node.escape {
        v.visit_expr(escape);
    }
}

pub fn visit_expr_parameter<V>(v: &mut V, node: &ExprParameter)
where
    V: Visit + ?Sized,
{
}

pub fn visit_expr_unary<V>(v: &mut V, node: &ExprUnary)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.operand);
}

pub fn visit_join<V>(v: &mut V, node: &Join)
where
    V: Visit + ?Sized,
{
    v.visit_table_expr(&node.table);

    match &node.op {
        JoinOp::Cross => {}
        JoinOp::Inner(expr) | JoinOp::Left(expr) => v.visit_expr(expr),
    }
}

pub fn visit_order_by_expr<V>(v: &mut V, node: &OrderByExpr)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_projection_expr<V>(v: &mut V, node: &ProjectionExpr)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_select<V>(v: &mut V, node: &Select)
where
    V: Visit + ?Sized,
{
    for projection in &node.projection {
        v.visit_projection_expr(projection);
    }

    for expr in node.mapping.pending_exprs() {
        v.visit_expr(expr);
    }

    for table in &node.tables {
        v.visit_table_expr(table);
    }

    if let Some(predicate) = &node.predicate {
        v.visit_expr(predicate);
    }

    for ordering in &node.orderings {
        v.visit_order_by_expr(ordering);
    }

    if let Some(limit) = &node.limit {
        v.visit_expr(limit);
    }

    if let Some(offset) = &node.offset {
        v.visit_expr(offset);
    }
}

pub fn visit_table<V>(v: &mut V, node: &Table)
where
    V: Visit + ?Sized,
{
}

pub fn visit_table_expr<V>(v: &mut V, node: &TableExpr)
where
    V: Visit + ?Sized,
{
    match node {
        TableExpr::Table(table) => v.visit_table(table),
        TableExpr::Join(join) => v.visit_join(join),
        TableExpr::Select(select) => v.visit_select(select),
    }
}

/// Calls `f` on every expression in `node`, children before parents.
pub fn for_each_expr<F>(node: &impl Node, f: F)
where
    F: FnMut(&Expr),
{
    struct ForEach<F> {
        f: F,
    }

    impl<F> Visit for ForEach<F>
    where
        F: FnMut(&Expr),
    {
        fn visit_expr(&mut self, node: &Expr) {
            visit_expr(self, node);
            (self.f)(node);
        }
    }

    node.visit(ForEach { f });
}
