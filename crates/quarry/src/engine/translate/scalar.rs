use crate::{
    engine::Engine,
    translator::{Member, TranslationContext},
};
use quarry_core::{
    query::{self, Method},
    shape::Shaper,
    stmt::{BinaryOp, Expr, ExprCase, Select, Type, Value},
    Error, Result,
};

/// A translated host expression: SQL for scalars, or the structure of an
/// object that only a projection can hold.
#[derive(Debug, Clone)]
pub(super) enum Translated {
    Sql(Expr),
    Object {
        name: Option<String>,
        members: Vec<(String, Translated)>,
    },
}

/// What the lambda parameter refers to while translating its body.
pub(super) struct Scope<'a> {
    pub(super) param: &'a str,
    pub(super) select: &'a Select,
    pub(super) shaper: &'a Shaper,
}

/// Translates host expression fragments into SQL expressions.
///
/// Built trees are left unmapped; the entry points map them once complete.
/// Results handed back by member translators are already mapped.
pub(super) struct ScalarTranslator<'a> {
    engine: &'a Engine,
    scope: Option<Scope<'a>>,
}

impl<'a> ScalarTranslator<'a> {
    pub(super) fn new(engine: &'a Engine, scope: Option<Scope<'a>>) -> ScalarTranslator<'a> {
        ScalarTranslator { engine, scope }
    }

    /// Translates a boolean expression used as a filter.
    pub(super) fn predicate(&self, expr: &query::Expr) -> Result<Expr> {
        let sql = self.operand(expr)?;
        if !sql.ty().non_nullable().is_bool() {
            return Err(Error::translation_unsupported(format!(
                "predicate of type {} is not boolean",
                sql.ty()
            )));
        }

        self.engine.factory.apply(sql)
    }

    /// Translates a scalar expression in value position.
    pub(super) fn value(&self, expr: &query::Expr) -> Result<Expr> {
        let sql = self.operand(expr)?;
        self.engine.factory.apply(sql)
    }

    pub(super) fn translate(&self, expr: &query::Expr) -> Result<Translated> {
        match expr {
            query::Expr::Var(name) => self.var(name),
            query::Expr::Member { receiver, name } => match self.translate(receiver)? {
                Translated::Object { members, .. } => members
                    .into_iter()
                    .find(|(member, _)| member == name)
                    .map(|(_, translated)| translated)
                    .ok_or_else(|| {
                        Error::translation_unsupported(format!("member `{name}` is not mapped"))
                    }),
                Translated::Sql(receiver) => self
                    .member(Some(&receiver), Member::Property(name), &[])
                    .map(Translated::Sql),
            },
            query::Expr::Call {
                receiver,
                method,
                args,
            } => self.call(receiver.as_deref(), method, args).map(Translated::Sql),
            query::Expr::Binary { op, lhs, rhs } => self.binary(*op, lhs, rhs).map(Translated::Sql),
            query::Expr::Unary { op, operand } => self.unary(op, operand).map(Translated::Sql),
            query::Expr::Conditional {
                test,
                then,
                otherwise,
            } => self.conditional(test, then, otherwise).map(Translated::Sql),
            query::Expr::Constant { value, ty } => self.constant(value, ty).map(Translated::Sql),
            query::Expr::Param { name, ty } => Ok(Translated::Sql(Expr::parameter(name, ty.clone()))),
            query::Expr::New { name, members } => Ok(Translated::Object {
                name: name.clone(),
                members: members
                    .iter()
                    .map(|(member, expr)| Ok((member.clone(), self.translate(expr)?)))
                    .collect::<Result<_>>()?,
            }),
        }
    }

    /// Translates an expression that must be a single SQL scalar, leaving it
    /// unmapped so it can take the mapping of what it meets.
    pub(super) fn operand(&self, expr: &query::Expr) -> Result<Expr> {
        let sql = self.raw(expr)?;

        if sql.ty().is_list() {
            return Err(Error::translation_unsupported(
                "collection used as a scalar value",
            ));
        }

        Ok(sql)
    }

    /// Like [`operand`](Self::operand), but lets list constants and list
    /// parameters through for member translators to consume.
    fn raw(&self, expr: &query::Expr) -> Result<Expr> {
        match self.translate(expr)? {
            Translated::Sql(sql) => Ok(sql),
            Translated::Object { .. } => Err(Error::translation_unsupported(
                "object construction outside a projection",
            )),
        }
    }

    fn var(&self, name: &str) -> Result<Translated> {
        match &self.scope {
            Some(scope) if scope.param == name => bind(scope, scope.shaper),
            _ => Err(Error::translation_unsupported(format!(
                "variable `{name}` is not in scope"
            ))),
        }
    }

    fn call(&self, receiver: Option<&query::Expr>, method: &Method, args: &[query::Expr]) -> Result<Expr> {
        let receiver = receiver.map(|receiver| self.raw(receiver)).transpose()?;
        let args = args
            .iter()
            .map(|arg| self.raw(arg))
            .collect::<Result<Vec<_>>>()?;

        self.member(receiver.as_ref(), Member::Method(method), &args)
    }

    /// Hands a member access or method call to the translator chain.
    fn member(&self, receiver: Option<&Expr>, member: Member<'_>, args: &[Expr]) -> Result<Expr> {
        let cx = TranslationContext::new(&self.engine.factory);

        for translator in &self.engine.translators {
            if let Some(expr) = translator.try_translate(&cx, receiver, member, args)? {
                return Ok(expr);
            }
        }

        Err(match member {
            Member::Property(name) => {
                Error::translation_unsupported(format!("member `{name}` has no SQL translation"))
            }
            Member::Method(method) => {
                Error::translation_unsupported(format!("method `{method}` has no SQL translation"))
            }
        })
    }

    fn binary(&self, op: query::BinaryOp, lhs: &query::Expr, rhs: &query::Expr) -> Result<Expr> {
        use query::BinaryOp as Host;

        let lhs = self.operand(lhs)?;
        let rhs = self.operand(rhs)?;
        let logical = lhs.ty().non_nullable().is_bool();

        let op = match op {
            Host::Add => BinaryOp::Add,
            Host::Subtract => BinaryOp::Subtract,
            Host::Multiply => BinaryOp::Multiply,
            Host::Divide => BinaryOp::Divide,
            Host::Modulo => BinaryOp::Modulo,
            Host::And if logical => BinaryOp::And,
            Host::And => BinaryOp::BitAnd,
            Host::Or if logical => BinaryOp::Or,
            Host::Or => BinaryOp::BitOr,
            Host::AndAlso => BinaryOp::And,
            Host::OrElse => BinaryOp::Or,
            Host::Equal => BinaryOp::Eq,
            Host::NotEqual => BinaryOp::Ne,
            Host::LessThan => BinaryOp::Lt,
            Host::LessThanOrEqual => BinaryOp::Le,
            Host::GreaterThan => BinaryOp::Gt,
            Host::GreaterThanOrEqual => BinaryOp::Ge,
            Host::Coalesce => BinaryOp::Coalesce,
        };

        if op.is_logical() && !(logical && rhs.ty().non_nullable().is_bool()) {
            return Err(Error::translation_unsupported(format!(
                "operator `{op}` over non-boolean operands"
            )));
        }

        Ok(Expr::binary(op, lhs, rhs))
    }

    fn unary(&self, op: &query::UnaryOp, operand: &query::Expr) -> Result<Expr> {
        let operand = self.operand(operand)?;

        match op {
            query::UnaryOp::Not if operand.ty().non_nullable().is_bool() => Ok(Expr::not(operand)),
            query::UnaryOp::Not => Err(Error::translation_unsupported(format!(
                "logical not over {}",
                operand.ty()
            ))),
            query::UnaryOp::Negate => Ok(Expr::negate(operand)),
            query::UnaryOp::Convert(ty) => self.convert(operand, ty),
        }
    }

    fn convert(&self, operand: Expr, ty: &Type) -> Result<Expr> {
        let target = ty.non_nullable();

        if operand.is_null_constant() {
            return Ok(Expr::null(Type::nullable(target.clone())));
        }

        // Nullability changes are not conversions in SQL
        if operand.ty().non_nullable() == target {
            return Ok(operand);
        }

        if self.engine.factory.mappings().find(target).is_none() {
            return Err(Error::translation_unsupported(format!(
                "conversion to {target} has no SQL type"
            )));
        }

        Ok(Expr::convert(operand, target.clone()))
    }

    fn conditional(
        &self,
        test: &query::Expr,
        then: &query::Expr,
        otherwise: &query::Expr,
    ) -> Result<Expr> {
        let test = self.operand(test)?;
        if !test.ty().non_nullable().is_bool() {
            return Err(Error::translation_unsupported(
                "conditional test is not boolean",
            ));
        }

        let then = self.operand(then)?;
        let otherwise = self.operand(otherwise)?;
        let fallback = otherwise.ty().clone();

        let mut case = Expr::case_when(test, then, otherwise);
        if let Expr::Case(ExprCase { ty, .. }) = &mut case {
            if *ty == Type::Unknown {
                *ty = fallback;
            }
        }

        Ok(case)
    }

    fn constant(&self, value: &Value, ty: &Type) -> Result<Expr> {
        if value.is_null() {
            return Ok(Expr::null(ty.clone()));
        }

        // Left for `Contains` to expand
        if matches!(value, Value::List(_)) {
            return Ok(Expr::typed_constant(value.clone(), ty.clone()));
        }

        let ty = ty.non_nullable();
        if self.engine.factory.mappings().find(ty).is_none() {
            return Err(Error::translation_unsupported(format!(
                "constant of type {ty} has no SQL representation"
            )));
        }

        Ok(Expr::typed_constant(value.clone(), ty.clone()))
    }
}

/// The expressions the current select maps for each leaf of `shaper`.
fn bind(scope: &Scope<'_>, shaper: &Shaper) -> Result<Translated> {
    match shaper {
        Shaper::Value(leaf) => scope
            .select
            .mapped(&leaf.member)
            .cloned()
            .map(Translated::Sql)
            .ok_or_else(|| {
                Error::internal_consistency(format!(
                    "shaper leaf {} has no mapped expression",
                    leaf.member
                ))
            }),
        Shaper::Object { name, members } => Ok(Translated::Object {
            name: name.clone(),
            members: members
                .iter()
                .map(|(member, shaper)| Ok((member.clone(), bind(scope, shaper)?)))
                .collect::<Result<_>>()?,
        }),
    }
}
