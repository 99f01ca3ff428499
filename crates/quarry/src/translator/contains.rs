use super::{Member, MethodTranslator, TranslationContext};
use quarry_core::{
    stmt::{Expr, Value},
    Result,
};

/// Membership in an in-memory collection becomes `IN`.
///
/// Recognizes the static `Enumerable.Contains(source, item)` and the
/// instance `list.Contains(item)`, where the collection is a list constant
/// or a list-valued parameter.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContainsTranslator;

impl MethodTranslator for ContainsTranslator {
    fn try_translate(
        &self,
        cx: &TranslationContext<'_>,
        receiver: Option<&Expr>,
        member: Member<'_>,
        args: &[Expr],
    ) -> Result<Option<Expr>> {
        let (source, item) = match (receiver, args) {
            (None, [source, item]) if member.is_method("Enumerable", "Contains") => (source, item),
            (Some(source), [item]) if member.is_method("List", "Contains") => (source, item),
            _ => return Ok(None),
        };

        let expr = match source {
            Expr::Constant(list) => {
                let Value::List(values) = &list.value else {
                    return Ok(None);
                };

                let item_ty = list
                    .ty
                    .list_item()
                    .unwrap_or_else(|| item.ty())
                    .non_nullable()
                    .clone();
                let values = values
                    .iter()
                    .map(|value| Expr::typed_constant(value.clone(), item_ty.clone()))
                    .collect();

                Expr::in_list(item.clone(), values)
            }
            Expr::Parameter(parameter) if parameter.ty.is_list() => {
                Expr::in_parameter(item.clone(), parameter.clone())
            }
            _ => return Ok(None),
        };

        Ok(Some(cx.factory().apply(expr)?))
    }
}
