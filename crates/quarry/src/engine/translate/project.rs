use super::{QueryTranslator, Translated};
use quarry_core::{
    query::Lambda,
    shape::{OnNull, ProjectionMember, Shaper, ShaperValue},
    stmt::{Expr, Type, UnaryOp},
    Error, Result,
};
use tracing::trace;

impl QueryTranslator<'_> {
    /// Rebinds the shaper to the selector's result, replacing all prior
    /// projection state.
    pub(super) fn project(&mut self, selector: &Lambda) -> Result<()> {
        if self.select.distinct {
            self.select.pushdown_into_subquery();
            trace!("pushed distinct select down before projection");
        }

        let translated = self.scalar(selector).translate(&selector.body)?;

        let mut mapping = vec![];
        let shaper = self.rebind(translated, ProjectionMember::root(), &mut mapping)?;
        trace!(leaves = mapping.len(), "rebound projection");

        self.select.replace_projection_mapping(mapping);
        self.shaper = shaper;
        Ok(())
    }

    /// Records each translated leaf at a fresh path below `member`.
    fn rebind(
        &self,
        translated: Translated,
        member: ProjectionMember,
        mapping: &mut Vec<(ProjectionMember, Expr)>,
    ) -> Result<Shaper> {
        match translated {
            Translated::Sql(expr) => {
                if expr.ty().is_list() {
                    return Err(Error::translation_unsupported(
                        "collection-valued projection",
                    ));
                }

                let expr = self.engine.factory.apply(expr)?;

                let ty = match expr.ty().non_nullable() {
                    ty if self.host_nullable(&expr) => Type::nullable(ty.clone()),
                    ty => ty.clone(),
                };
                let converter = expr
                    .type_mapping()
                    .and_then(|mapping| mapping.converter.clone());

                mapping.push((member.clone(), expr));

                Ok(Shaper::Value(ShaperValue {
                    member,
                    ty,
                    on_null: OnNull::Propagate,
                    converter,
                }))
            }
            Translated::Object { name, members } => {
                let members = members
                    .into_iter()
                    .map(|(name, translated)| {
                        let shaper = self.rebind(translated, member.append(&name), mapping)?;
                        Ok((name, shaper))
                    })
                    .collect::<Result<Vec<_>>>()?;

                Ok(Shaper::Object { name, members })
            }
        }
    }

    /// Whether the host may read `NULL` from `expr`. Comparisons and `IN`
    /// are two-valued on the host, and the null-semantics pass makes them
    /// so in SQL unless relational nulls were asked for.
    fn host_nullable(&self, expr: &Expr) -> bool {
        if self.engine.use_relational_nulls {
            return expr.is_nullable();
        }

        match expr {
            Expr::Binary(e) if e.op.is_comparison() => false,
            Expr::Binary(e) if e.op.is_logical() => self.host_nullable(&e.lhs) || self.host_nullable(&e.rhs),
            Expr::In(_) => false,
            Expr::Unary(e) if e.op == UnaryOp::Not => self.host_nullable(&e.operand),
            expr => expr.is_nullable(),
        }
    }
}
