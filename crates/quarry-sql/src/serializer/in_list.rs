use super::{select::Subquery, Comma, Formatter, Operand, Params, ToSql};

use quarry_core::{
    stmt::{Expr, ExprIn, InValues, Value},
    Error,
};

/// One entry of a rendered value list.
enum Item<'a> {
    Expr(&'a Expr),
    Literal(String),
}

impl ToSql for &Item<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Item::Expr(expr) => fmt!(f, *expr),
            Item::Literal(literal) => fmt!(f, literal),
        }
    }
}

/// Renders `IN`, splitting `NULL` entries into a separate null test.
///
/// `x IN (1, NULL)` never matches a null `x`, and `x NOT IN (1, NULL)` never
/// matches anything, so the nulls are tested with `IS [NOT] NULL` instead.
pub(super) fn render<P: Params>(e: &ExprIn, f: &mut Formatter<'_, P>) {
    let operand = Operand(&e.expr);
    let not = if e.negated { "NOT " } else { "" };

    let (items, has_null) = match &e.values {
        InValues::Subquery(subquery) => {
            fmt!(f, operand " " not "IN (" Subquery(subquery) ")");
            return;
        }
        InValues::List(values) => {
            let has_null = values.iter().any(Expr::is_null_constant);
            let items: Vec<_> = values
                .iter()
                .filter(|value| !value.is_null_constant())
                .map(Item::Expr)
                .collect();
            (items, has_null)
        }
        InValues::Parameter(param) => match expand(e, &param.name, f) {
            Some(expanded) => expanded,
            None => return,
        },
    };

    match (items.is_empty(), has_null, e.negated) {
        (true, false, false) => fmt!(f, "1 = 0"),
        (true, false, true) => fmt!(f, "1 = 1"),
        (true, true, false) => fmt!(f, Operand(&e.expr) " IS NULL"),
        (true, true, true) => fmt!(f, Operand(&e.expr) " IS NOT NULL"),
        (false, true, false) => {
            fmt!(f, "(" operand " IN (" Comma(&items) ") OR " Operand(&e.expr) " IS NULL)");
        }
        (false, true, true) => {
            fmt!(f, "(" operand " NOT IN (" Comma(&items) ") AND " Operand(&e.expr) " IS NOT NULL)");
        }
        (false, false, true) if e.expr.is_nullable() => {
            fmt!(f, "(" operand " NOT IN (" Comma(&items) ") OR " Operand(&e.expr) " IS NULL)");
        }
        (false, false, _) => fmt!(f, operand " " not "IN (" Comma(&items) ")"),
    }
}

/// Inlines the runtime value of a list parameter as literals typed by the
/// operand's mapping.
fn expand<'a, P: Params>(
    e: &'a ExprIn,
    name: &str,
    f: &mut Formatter<'_, P>,
) -> Option<(Vec<Item<'a>>, bool)> {
    let Some(value) = f.serializer.parameter_values.and_then(|values| values.get(name)) else {
        f.fail(Error::missing_parameter(name));
        return None;
    };

    let Value::List(values) = value else {
        f.fail(Error::internal_consistency(format!(
            "parameter `{name}` is used in IN but holds {value:?}"
        )));
        return None;
    };

    let Some(mapping) = e.expr.type_mapping() else {
        f.fail(Error::internal_consistency(
            "IN operand has no type mapping to render list values",
        ));
        return None;
    };

    let mut items = Vec::with_capacity(values.len());
    let mut has_null = false;

    for value in values {
        if value.is_null() {
            has_null = true;
            continue;
        }

        match mapping.literal(value) {
            Ok(literal) => items.push(Item::Literal(literal)),
            Err(err) => {
                f.fail(err);
                return None;
            }
        }
    }

    f.params.expanded(name);
    Some((items, has_null))
}
