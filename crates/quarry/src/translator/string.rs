use super::{Member, MethodTranslator, TranslationContext};
use quarry_core::{
    stmt::{BinaryOp, Expr, Type},
    Result,
};

const ESCAPE: char = '\\';

/// String members: emptiness, concatenation, case and trimming, pattern
/// tests and length.
#[derive(Debug, Default, Clone, Copy)]
pub struct StringTranslator;

impl MethodTranslator for StringTranslator {
    fn try_translate(
        &self,
        cx: &TranslationContext<'_>,
        receiver: Option<&Expr>,
        member: Member<'_>,
        args: &[Expr],
    ) -> Result<Option<Expr>> {
        let factory = cx.factory();

        let receiver = match receiver {
            None => {
                return if member.is_method("String", "IsNullOrEmpty") {
                    let [s] = args else {
                        return Ok(None);
                    };

                    let empty = Expr::typed_constant("", Type::String);
                    let expr = Expr::or(Expr::is_null(s.clone()), Expr::eq(s.clone(), empty));
                    Ok(Some(factory.apply(expr)?))
                } else if member.is_method("String", "Concat") && args.len() >= 2 {
                    let expr = args[1..].iter().fold(args[0].clone(), |acc, arg| {
                        Expr::typed_binary(BinaryOp::Add, acc, arg.clone(), Type::String)
                    });
                    Ok(Some(factory.apply(expr)?))
                } else {
                    Ok(None)
                };
            }
            Some(receiver) if receiver.ty().non_nullable().is_string() => receiver,
            Some(_) => return Ok(None),
        };

        if member.is_property("Length") {
            let length = factory.func(cx.capability().string_length, vec![receiver.clone()], Type::I32)?;
            return Ok(Some(length));
        }

        let Member::Method(method) = member else {
            return Ok(None);
        };

        if method.declaring != "String" {
            return Ok(None);
        }

        let func = match (method.name.as_str(), args) {
            ("ToUpper", []) => "UPPER",
            ("ToLower", []) => "LOWER",
            ("Trim", []) => "TRIM",
            ("StartsWith" | "EndsWith" | "Contains", [arg]) => {
                // Only a known pattern can be escaped
                let Some(value) = arg.as_constant().and_then(|value| value.as_str()) else {
                    return Ok(None);
                };

                let (escaped, needs_escape) = escape_like(value);
                let pattern = match method.name.as_str() {
                    "StartsWith" => format!("{escaped}%"),
                    "EndsWith" => format!("%{escaped}"),
                    _ => format!("%{escaped}%"),
                };

                let escape = needs_escape.then(|| Expr::typed_constant(ESCAPE.to_string(), Type::String));
                let like = Expr::like(
                    receiver.clone(),
                    Expr::typed_constant(pattern, Type::String),
                    escape,
                );
                return Ok(Some(factory.apply(like)?));
            }
            _ => return Ok(None),
        };

        Ok(Some(factory.func(func, vec![receiver.clone()], Type::String)?))
    }
}

/// Escapes `LIKE` wildcards in `value`, returning whether anything was
/// escaped.
fn escape_like(value: &str) -> (String, bool) {
    let mut escaped = String::with_capacity(value.len());
    let mut needs_escape = false;

    for c in value.chars() {
        if matches!(c, '%' | '_' | '[' | ESCAPE) {
            escaped.push(ESCAPE);
            needs_escape = true;
        }
        escaped.push(c);
    }

    (escaped, needs_escape)
}
