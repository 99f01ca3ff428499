use super::{Member, MethodTranslator, TranslationContext};
use quarry_core::{stmt::Expr, Result};

/// `x.Value`, `x.HasValue` and `x.GetValueOrDefault()` on nullable values.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullableTranslator;

impl MethodTranslator for NullableTranslator {
    fn try_translate(
        &self,
        cx: &TranslationContext<'_>,
        receiver: Option<&Expr>,
        member: Member<'_>,
        args: &[Expr],
    ) -> Result<Option<Expr>> {
        let Some(receiver) = receiver else {
            return Ok(None);
        };

        // SQL has no distinct "unwrapped" value, `x.Value` is just `x`
        if member.is_property("Value") {
            return Ok(Some(cx.factory().apply(receiver.clone())?));
        }

        if member.is_property("HasValue") {
            let expr = Expr::is_not_null(receiver.clone());
            return Ok(Some(cx.factory().apply(expr)?));
        }

        if !member.is_method("Nullable", "GetValueOrDefault") {
            return Ok(None);
        }

        let default = match args {
            [] => {
                let ty = receiver.ty().non_nullable().clone();
                Expr::typed_constant(ty.default_value(), ty)
            }
            [default] => default.clone(),
            _ => return Ok(None),
        };

        let expr = Expr::coalesce(receiver.clone(), default);
        Ok(Some(cx.factory().apply(expr)?))
    }
}
