use super::{Member, MethodTranslator, TranslationContext};
use quarry_core::{
    stmt::{Expr, Type},
    Flavor, Result,
};

/// `Math.Abs`, `Math.Floor`, `Math.Ceiling` and `Math.Round` over numbers.
#[derive(Debug, Default, Clone, Copy)]
pub struct MathTranslator;

impl MethodTranslator for MathTranslator {
    fn try_translate(
        &self,
        cx: &TranslationContext<'_>,
        receiver: Option<&Expr>,
        member: Member<'_>,
        args: &[Expr],
    ) -> Result<Option<Expr>> {
        let (None, Member::Method(method)) = (receiver, member) else {
            return Ok(None);
        };

        if method.declaring != "Math" {
            return Ok(None);
        }

        let Some(operand) = args.first() else {
            return Ok(None);
        };

        let ty = operand.ty().non_nullable().clone();
        if !ty.is_numeric() {
            return Ok(None);
        }

        let (name, args) = match (method.name.as_str(), args) {
            ("Abs", [_]) => ("ABS", args.to_vec()),
            ("Floor", [_]) => ("FLOOR", args.to_vec()),
            ("Ceiling", [_]) => ("CEILING", args.to_vec()),
            // SQL Server's ROUND requires the length argument
            ("Round", [x]) if cx.flavor() == Flavor::SqlServer => {
                ("ROUND", vec![x.clone(), Expr::typed_constant(0, Type::I32)])
            }
            ("Round", [_]) | ("Round", [_, _]) => ("ROUND", args.to_vec()),
            _ => return Ok(None),
        };

        Ok(Some(cx.factory().func(name, args, ty)?))
    }
}
