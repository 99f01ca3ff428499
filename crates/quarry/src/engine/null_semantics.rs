use super::{Engine, ExprFactory};
use quarry_core::{
    stmt::{
        BinaryOp, CaseWhen, Expr, ExprBinary, ExprCase, ExprFunc, ExprIn, ExprLike, ExprUnary,
        InValues, JoinOp, Select, TableExpr, Type, UnaryOp, Value,
    },
    Result,
};

/// Rewrites host equality over nullable operands into SQL two-valued logic.
///
/// Every expression is visited with a flag saying whether it sits in a
/// predicate position, where `NULL` and `false` both drop the row. Only
/// there may `a = b` keep its cheaper optimized form.
struct NullSemantics<'a> {
    factory: &'a ExprFactory,
    use_relational_nulls: bool,
}

impl Engine {
    pub(crate) fn expand_null_semantics(&self, select: &mut Select) -> Result<()> {
        NullSemantics {
            factory: &self.factory,
            use_relational_nulls: self.use_relational_nulls,
        }
        .select(select)
    }
}

impl NullSemantics<'_> {
    fn select(&self, select: &mut Select) -> Result<()> {
        for projection in &mut select.projection {
            projection.expr = self.value(projection.expr.take())?;
        }

        for expr in select.mapping.pending_exprs_mut() {
            *expr = self.value(expr.take())?;
        }

        for table in &mut select.tables {
            self.table_expr(table)?;
        }

        if let Some(predicate) = select.predicate.take() {
            let predicate = self.predicate(predicate)?;
            if !predicate.is_true() {
                select.predicate = Some(predicate);
            }
        }

        for ordering in &mut select.orderings {
            ordering.expr = self.value(ordering.expr.take())?;
        }

        if let Some(limit) = &mut select.limit {
            *limit = self.value(limit.take())?;
        }

        if let Some(offset) = &mut select.offset {
            *offset = self.value(offset.take())?;
        }

        Ok(())
    }

    fn table_expr(&self, table: &mut TableExpr) -> Result<()> {
        match table {
            TableExpr::Table(_) => Ok(()),
            TableExpr::Select(select) => self.select(select),
            TableExpr::Join(join) => {
                self.table_expr(&mut join.table)?;
                match &mut join.op {
                    JoinOp::Cross => {}
                    JoinOp::Inner(on) | JoinOp::Left(on) => *on = self.predicate(on.take())?,
                }
                Ok(())
            }
        }
    }

    fn value(&self, expr: Expr) -> Result<Expr> {
        Ok(self.visit(expr, false)?.0)
    }

    fn predicate(&self, expr: Expr) -> Result<Expr> {
        Ok(self.visit(expr, true)?.0)
    }

    /// Returns the rewritten expression and whether it may be `NULL`.
    fn visit(&self, expr: Expr, optimize: bool) -> Result<(Expr, bool)> {
        match expr {
            Expr::Column(e) => {
                let nullable = e.nullable;
                Ok((e.into(), nullable))
            }
            Expr::Constant(e) => {
                let nullable = e.value.is_null();
                Ok((e.into(), nullable))
            }
            Expr::Parameter(e) => {
                let nullable = e.ty.is_nullable();
                Ok((e.into(), nullable))
            }
            Expr::Fragment(e) => Ok((e.into(), false)),
            Expr::Binary(e) => self.visit_binary(e, optimize),
            Expr::Unary(e) => self.visit_unary(e),
            Expr::Case(e) => self.visit_case(e),
            Expr::Func(e) => self.visit_func(e),
            Expr::Exists(mut e) => {
                self.select(&mut e.subquery)?;
                Ok((e.into(), false))
            }
            Expr::In(e) => self.visit_in(e, optimize),
            Expr::Like(e) => self.visit_like(e),
        }
    }

    fn visit_binary(&self, e: ExprBinary, optimize: bool) -> Result<(Expr, bool)> {
        let ExprBinary {
            op,
            lhs,
            rhs,
            ty,
            mapping,
        } = e;

        // AND/OR pass the predicate context down, nothing else does
        let operand_optimize = optimize && op.is_logical();
        let (lhs, lhs_nullable) = self.visit(*lhs, operand_optimize)?;
        let (rhs, rhs_nullable) = self.visit(*rhs, operand_optimize)?;

        if op == BinaryOp::Add && ty.is_string() {
            let lhs = if lhs_nullable { self.coalesce_empty(lhs)? } else { lhs };
            let rhs = if rhs_nullable { self.coalesce_empty(rhs)? } else { rhs };
            let expr = Expr::typed_binary(op, lhs, rhs, ty).with_type_mapping(mapping);
            return Ok((expr, false));
        }

        let e = ExprBinary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            ty,
            mapping,
        };

        if op.is_equality() {
            if let Some(optimized) = self.optimize_comparison(&e, lhs_nullable, rhs_nullable) {
                return Ok((optimized, false));
            }

            if (lhs_nullable || rhs_nullable) && !self.use_relational_nulls {
                return Ok(self.rewrite_null_semantics(e, lhs_nullable, rhs_nullable, optimize));
            }

            return Ok((e.into(), lhs_nullable || rhs_nullable));
        }

        let nullable = lhs_nullable || rhs_nullable;

        if op.is_logical() {
            return Ok((self.simplify_logical(e.into()), nullable));
        }

        if op.is_relational() && nullable && !optimize && !self.use_relational_nulls {
            // `a < b` is NULL when either side is, which the host reads as false
            let lhs_is_not_null = self.is_not_null_of(&e.lhs, lhs_nullable);
            let rhs_is_not_null = self.is_not_null_of(&e.rhs, rhs_nullable);
            let lifted = self.and(self.and(e.into(), lhs_is_not_null), rhs_is_not_null);
            return Ok((lifted, false));
        }

        Ok((e.into(), nullable))
    }

    fn visit_unary(&self, e: ExprUnary) -> Result<(Expr, bool)> {
        let ExprUnary {
            op,
            operand,
            ty,
            mapping,
        } = e;

        // `NOT (x IN ..)` is rendered as `NOT IN`, which already reads nulls
        // the way the host does
        if op == UnaryOp::Not {
            if let Expr::In(mut e) = *operand {
                e.negated = !e.negated;
                return self.visit_in(e, false);
            }
        }

        let (operand, operand_nullable) = self.visit(*operand, false)?;

        if op.is_null_test() {
            return Ok((self.null_test(op, operand, operand_nullable), false));
        }

        let expr: Expr = ExprUnary {
            op,
            operand: Box::new(operand),
            ty,
            mapping,
        }
        .into();

        if op == UnaryOp::Not && !operand_nullable {
            return Ok((self.optimize_non_nullable_not(expr), false));
        }

        Ok((expr, operand_nullable))
    }

    fn visit_case(&self, e: ExprCase) -> Result<(Expr, bool)> {
        let ExprCase {
            operand,
            whens,
            else_result,
            ty,
            mapping,
        } = e;

        let searched = operand.is_none();
        let operand = match operand {
            Some(operand) => Some(Box::new(self.value(*operand)?)),
            None => None,
        };

        let mut nullable = false;
        let mut kept = Vec::with_capacity(whens.len());
        let mut else_result = else_result;
        let mut reached_true = false;

        for when in whens {
            let (test, _) = self.visit(when.test, searched)?;

            // A test that never holds drops its branch
            if searched && (test.is_false() || test.is_null_constant()) {
                continue;
            }

            let (result, result_nullable) = self.visit(when.result, false)?;

            // Branches after a test that always holds are unreachable
            if searched && test.is_true() {
                if kept.is_empty() {
                    return Ok((result, result_nullable));
                }

                nullable |= result_nullable;
                else_result = Some(Box::new(result));
                reached_true = true;
                break;
            }

            nullable |= result_nullable;
            kept.push(CaseWhen { test, result });
        }

        if !reached_true {
            else_result = match else_result {
                Some(else_result) => {
                    let (else_result, else_nullable) = self.visit(*else_result, false)?;
                    nullable |= else_nullable;
                    Some(Box::new(else_result))
                }
                None => {
                    nullable = true;
                    None
                }
            };
        }

        if kept.is_empty() {
            return Ok(match else_result {
                Some(else_result) => (*else_result, nullable),
                None => (Expr::null(ty).with_type_mapping(mapping), true),
            });
        }

        let expr = ExprCase {
            operand,
            whens: kept,
            else_result,
            ty,
            mapping,
        };
        Ok((expr.into(), nullable))
    }

    fn visit_func(&self, mut e: ExprFunc) -> Result<(Expr, bool)> {
        if let Some(instance) = e.instance.take() {
            e.instance = Some(Box::new(self.value(*instance)?));
        }

        for arg in &mut e.args {
            *arg = self.value(arg.take())?;
        }

        let nullable = e.nullable;
        Ok((e.into(), nullable))
    }

    /// `IN` is `NULL` for a null operand with no null entry, and for a subquery
    /// that yields a null without a match. The host reads both as false.
    ///
    /// Null literals in a list, and negated lists or parameters, are made
    /// two-valued when rendered. What is left is guarded here, except in a
    /// predicate position where `NULL` drops the row like `false`.
    fn visit_in(&self, mut e: ExprIn, optimize: bool) -> Result<(Expr, bool)> {
        let (operand, operand_nullable) = self.visit(e.expr.take(), false)?;
        *e.expr = operand;

        let values_nullable = match &mut e.values {
            InValues::List(items) => {
                let mut nullable = false;
                for item in items.iter_mut() {
                    let (rewritten, item_nullable) = self.visit(item.take(), false)?;
                    nullable |= item_nullable && !rewritten.is_null_constant();
                    *item = rewritten;
                }
                nullable
            }
            InValues::Parameter(_) => false,
            InValues::Subquery(subquery) => {
                self.select(subquery)?;
                subquery
                    .projection
                    .first()
                    .is_none_or(|projection| projection.expr.is_nullable())
            }
        };

        if self.use_relational_nulls {
            return Ok((e.into(), operand_nullable || values_nullable));
        }

        let has_null = matches!(
            &e.values,
            InValues::List(items) if items.iter().any(Expr::is_null_constant)
        );

        match &e.values {
            InValues::Subquery(_) if !operand_nullable && !values_nullable => Ok((e.into(), false)),
            InValues::Subquery(_) if optimize && !e.negated => Ok((e.into(), true)),
            InValues::Subquery(_) => Ok((self.in_as_bool(e), false)),
            // A nullable entry other than a literal cannot be split out
            InValues::List(_) if values_nullable => Ok((e.into(), true)),
            InValues::List(_) => {
                if !operand_nullable || e.negated || has_null {
                    return Ok((e.into(), false));
                }

                if optimize {
                    return Ok((e.into(), true));
                }

                // x IN (..) AND x IS NOT NULL
                let operand_is_not_null = self.is_not_null_of(&e.expr, operand_nullable);
                Ok((self.and(e.into(), operand_is_not_null), false))
            }
            InValues::Parameter(_) if !operand_nullable || e.negated => Ok((e.into(), false)),
            InValues::Parameter(_) if optimize => Ok((e.into(), true)),
            // The entries, and so whether a null is among them, are only
            // known when the SQL is generated
            InValues::Parameter(_) => Ok((self.in_as_bool(e), false)),
        }
    }

    /// `CASE WHEN x IN (..) THEN true ELSE false END`, inverted for `NOT IN`.
    fn in_as_bool(&self, mut e: ExprIn) -> Expr {
        let negated = e.negated;
        e.negated = false;

        Expr::case_when(e, self.factory.bool(!negated), self.factory.bool(negated))
            .with_type_mapping(Some(self.factory.bool_mapping()))
    }

    fn visit_like(&self, mut e: ExprLike) -> Result<(Expr, bool)> {
        let (expr, expr_nullable) = self.visit(e.expr.take(), false)?;
        let (pattern, pattern_nullable) = self.visit(e.pattern.take(), false)?;
        *e.expr = expr;
        *e.pattern = pattern;

        let mut nullable = expr_nullable || pattern_nullable;
        if let Some(escape) = &mut e.escape {
            let (rewritten, escape_nullable) = self.visit(escape.take(), false)?;
            **escape = rewritten;
            nullable |= escape_nullable;
        }

        Ok((e.into(), nullable))
    }

    /// `x` as a string that is never `NULL`: `''` for a null literal, else
    /// `COALESCE(x, '')`.
    fn coalesce_empty(&self, expr: Expr) -> Result<Expr> {
        let mapping = expr.type_mapping().cloned();
        let empty = self.factory.constant("", Type::String, mapping.clone());

        if expr.is_null_constant() {
            return Ok(empty);
        }

        self.factory.apply_with(Expr::coalesce(expr, empty), mapping.as_ref())
    }

    /// Comparisons that need no null expansion, or `None` to expand.
    fn optimize_comparison(&self, e: &ExprBinary, lhs_nullable: bool, rhs_nullable: bool) -> Option<Expr> {
        let (lhs, rhs) = (&*e.lhs, &*e.rhs);
        let eq = e.op == BinaryOp::Eq;
        let null_test = if eq { UnaryOp::IsNull } else { UnaryOp::IsNotNull };

        // `x = NULL` → `x IS NULL`, `x <> NULL` → `x IS NOT NULL`
        if rhs.is_null_constant() {
            return Some(self.null_test(null_test, lhs.clone(), lhs_nullable));
        }

        if lhs.is_null_constant() {
            return Some(self.null_test(null_test, rhs.clone(), rhs_nullable));
        }

        // `a = true` → `a`, `a = false` → `NOT a`
        if !lhs_nullable && !has_converter(lhs) {
            if let Some(value) = rhs.as_constant().and_then(Value::as_bool) {
                return Some(self.compare_with_bool(eq, value, lhs.clone()));
            }
        }

        if !rhs_nullable && !has_converter(rhs) {
            if let Some(value) = lhs.as_constant().and_then(Value::as_bool) {
                return Some(self.compare_with_bool(eq, value, rhs.clone()));
            }
        }

        // `a = a` → `true`
        if !lhs_nullable && lhs == rhs {
            return Some(self.factory.bool(eq));
        }

        // `NOT a = NOT b` → `a = b`, `NOT a = b` → `a <> b`
        if !lhs_nullable && !rhs_nullable && (is_logical_not(lhs) || is_logical_not(rhs)) {
            let (lhs, lhs_negated) = strip_not(lhs.clone());
            let (rhs, rhs_negated) = strip_not(rhs.clone());
            let op = if eq ^ (lhs_negated == rhs_negated) {
                BinaryOp::Ne
            } else {
                BinaryOp::Eq
            };
            return Some(self.factory.compare(op, lhs, rhs));
        }

        None
    }

    fn compare_with_bool(&self, eq: bool, value: bool, operand: Expr) -> Expr {
        if eq ^ value {
            self.optimize_non_nullable_not(self.factory.not(operand))
        } else {
            operand
        }
    }

    /// The two-valued expansion of `=`/`<>` when at least one side is
    /// nullable.
    fn rewrite_null_semantics(
        &self,
        e: ExprBinary,
        lhs_nullable: bool,
        rhs_nullable: bool,
        optimize: bool,
    ) -> (Expr, bool) {
        let eq = e.op == BinaryOp::Eq;
        let (lhs, lhs_negated) = strip_not(*e.lhs);
        let (rhs, rhs_negated) = strip_not(*e.rhs);

        let lhs_is_null = self.null_test(UnaryOp::IsNull, lhs.clone(), lhs_nullable);
        let lhs_is_not_null = self.optimize_non_nullable_not(self.factory.not(lhs_is_null.clone()));
        let rhs_is_null = self.null_test(UnaryOp::IsNull, rhs.clone(), rhs_nullable);
        let rhs_is_not_null = self.optimize_non_nullable_not(self.factory.not(rhs_is_null.clone()));

        if optimize && eq && !lhs_negated && !rhs_negated {
            // a = b OR (a IS NULL AND b IS NULL)
            if lhs_nullable && rhs_nullable {
                let both_null = self.and(lhs_is_null, rhs_is_null);
                let equal = self.factory.compare(BinaryOp::Eq, lhs, rhs);
                return (self.or(equal, both_null), true);
            }

            // `a = b` is NULL only where the host says false; WHERE drops both
            return (self.factory.compare(BinaryOp::Eq, lhs, rhs), true);
        }

        let same_negation = lhs_negated == rhs_negated;
        let compare = |op: BinaryOp| self.factory.compare(op, lhs.clone(), rhs.clone());

        let expanded = if eq {
            let op = if same_negation { BinaryOp::Eq } else { BinaryOp::Ne };

            match (lhs_nullable, rhs_nullable) {
                // ((a = b) AND (a IS NOT NULL AND b IS NOT NULL)) OR (a IS NULL AND b IS NULL)
                (true, true) => {
                    let both_not_null = self.and(lhs_is_not_null, rhs_is_not_null);
                    let both_null = self.and(lhs_is_null, rhs_is_null);
                    self.or(self.and(compare(op), both_not_null), both_null)
                }
                // (a = b) AND a IS NOT NULL
                (true, false) => self.and(compare(op), lhs_is_not_null),
                // (a = b) AND b IS NOT NULL
                _ => self.and(compare(op), rhs_is_not_null),
            }
        } else {
            let op = if same_negation { BinaryOp::Ne } else { BinaryOp::Eq };

            match (lhs_nullable, rhs_nullable) {
                // ((a <> b) OR (a IS NULL OR b IS NULL)) AND (a IS NOT NULL OR b IS NOT NULL)
                (true, true) => {
                    let either_null = self.or(lhs_is_null, rhs_is_null);
                    let either_not_null = self.or(lhs_is_not_null, rhs_is_not_null);
                    self.and(self.or(compare(op), either_null), either_not_null)
                }
                // (a <> b) OR a IS NULL
                (true, false) => self.or(compare(op), lhs_is_null),
                // (a <> b) OR b IS NULL
                _ => self.or(compare(op), rhs_is_null),
            }
        };

        (expanded, false)
    }

    /// `operand IS [NOT] NULL`, folded where the operand's nullness is known
    /// or follows from its parts.
    fn null_test(&self, op: UnaryOp, operand: Expr, operand_nullable: bool) -> Expr {
        let is_not_null = op == UnaryOp::IsNotNull;

        if !operand_nullable {
            return self.factory.bool(is_not_null);
        }

        match operand {
            Expr::Constant(e) => self.factory.bool(e.value.is_null() ^ is_not_null),
            Expr::Column(e) if !e.nullable => self.factory.bool(is_not_null),
            Expr::Func(e) if !e.nullable => self.factory.bool(is_not_null),
            Expr::Unary(e) if matches!(e.op, UnaryOp::Not | UnaryOp::Negate | UnaryOp::Convert) => {
                self.null_test(op, *e.operand, operand_nullable)
            }
            Expr::Binary(e) if !e.op.is_logical() => {
                let lhs_nullable = e.lhs.is_nullable();
                let rhs_nullable = e.rhs.is_nullable();
                let lhs = self.null_test(op, *e.lhs, lhs_nullable);
                let rhs = self.null_test(op, *e.rhs, rhs_nullable);

                // `a + b` is NULL when either side is; `COALESCE(a, b)` only
                // when both are
                if (op == UnaryOp::IsNull) ^ (e.op == BinaryOp::Coalesce) {
                    self.or(lhs, rhs)
                } else {
                    self.and(lhs, rhs)
                }
            }
            operand if is_not_null => self.factory.is_not_null(operand),
            operand => self.factory.is_null(operand),
        }
    }

    fn is_not_null_of(&self, operand: &Expr, nullable: bool) -> Expr {
        self.null_test(UnaryOp::IsNotNull, operand.clone(), nullable)
    }

    /// Pushes a `NOT` over a non-nullable operand into it.
    fn optimize_non_nullable_not(&self, expr: Expr) -> Expr {
        let not = match expr {
            Expr::Unary(e) if e.op == UnaryOp::Not => e,
            expr => return expr,
        };

        match *not.operand {
            Expr::Constant(e) if e.value.as_bool().is_some() => {
                self.factory.bool(!e.value.is_true())
            }
            Expr::In(mut e) => {
                e.negated = !e.negated;
                e.into()
            }
            Expr::Unary(e) if e.op == UnaryOp::Not => *e.operand,
            Expr::Unary(mut e) if e.op.is_null_test() => {
                e.op = match e.op {
                    UnaryOp::IsNull => UnaryOp::IsNotNull,
                    _ => UnaryOp::IsNull,
                };
                e.into()
            }
            Expr::Binary(e) if e.op.is_logical() => {
                // De Morgan
                let op = match e.op {
                    BinaryOp::And => BinaryOp::Or,
                    _ => BinaryOp::And,
                };
                let lhs = self.optimize_non_nullable_not(self.factory.not(*e.lhs));
                let rhs = self.optimize_non_nullable_not(self.factory.not(*e.rhs));
                self.simplify_logical(self.factory.logical(op, lhs, rhs))
            }
            Expr::Binary(mut e) if e.op.is_comparison() => match e.op.negate() {
                Some(negated) => {
                    e.op = negated;
                    e.into()
                }
                None => self.factory.not(e.into()),
            },
            operand => ExprUnary {
                operand: Box::new(operand),
                ..not
            }
            .into(),
        }
    }

    fn and(&self, lhs: Expr, rhs: Expr) -> Expr {
        self.simplify_logical(self.factory.and(lhs, rhs))
    }

    fn or(&self, lhs: Expr, rhs: Expr) -> Expr {
        self.simplify_logical(self.factory.or(lhs, rhs))
    }

    /// Folds boolean constants out of `AND`/`OR`, and `x IS NULL` paired
    /// with `x IS NOT NULL`.
    fn simplify_logical(&self, expr: Expr) -> Expr {
        let e = match expr {
            Expr::Binary(e) if e.op.is_logical() => e,
            expr => return expr,
        };
        let or = e.op == BinaryOp::Or;

        let null_test_pair = match (&*e.lhs, &*e.rhs) {
            (Expr::Unary(lhs), Expr::Unary(rhs))
                if lhs.op.is_null_test() && rhs.op.is_null_test() && lhs.operand == rhs.operand =>
            {
                Some(lhs.op == rhs.op)
            }
            _ => None,
        };

        match null_test_pair {
            Some(true) => return *e.lhs,
            // `x IS NULL OR x IS NOT NULL` → true, `AND` → false
            Some(false) => return self.factory.bool(or),
            None => {}
        }

        if let Some(value) = e.lhs.as_constant().and_then(Value::as_bool) {
            return if value == or { *e.lhs } else { *e.rhs };
        }

        if let Some(value) = e.rhs.as_constant().and_then(Value::as_bool) {
            return if value == or { *e.rhs } else { *e.lhs };
        }

        e.into()
    }
}

fn has_converter(expr: &Expr) -> bool {
    expr.type_mapping()
        .is_some_and(|mapping| mapping.converter.is_some())
}

fn is_logical_not(expr: &Expr) -> bool {
    matches!(expr, Expr::Unary(e) if e.op == UnaryOp::Not && e.ty.is_bool())
}

fn strip_not(expr: Expr) -> (Expr, bool) {
    match expr {
        Expr::Unary(e) if e.op == UnaryOp::Not && e.ty.is_bool() => (*e.operand, true),
        expr => (expr, false),
    }
}
