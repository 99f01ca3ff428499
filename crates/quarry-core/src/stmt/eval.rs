use super::{
    BinaryOp, Expr, ExprBinary, ExprColumn, ExprIn, ExprLike, ExprParameter, InValues, Type,
    UnaryOp, Value,
};
use crate::{bail, err, Result};
use std::cmp::Ordering;

/// Supplies column and parameter values when evaluating an expression.
pub trait Input {
    fn column(&mut self, column: &ExprColumn) -> Option<Value> {
        let _ = column;
        None
    }

    fn parameter(&mut self, parameter: &ExprParameter) -> Option<Value> {
        let _ = parameter;
        None
    }
}

/// Input for expressions without columns or parameters.
#[derive(Debug, Default)]
pub struct ConstInput {}

impl ConstInput {
    pub fn new() -> ConstInput {
        ConstInput {}
    }
}

impl Input for ConstInput {}

impl<I: Input + ?Sized> Input for &mut I {
    fn column(&mut self, column: &ExprColumn) -> Option<Value> {
        (**self).column(column)
    }

    fn parameter(&mut self, parameter: &ExprParameter) -> Option<Value> {
        (**self).parameter(parameter)
    }
}

impl Expr {
    /// Evaluates the expression with SQL's three-valued semantics.
    ///
    /// `NULL` stands for unknown: comparisons against it are `NULL`, and
    /// `AND`/`OR` follow Kleene logic. Subqueries, functions and raw
    /// fragments cannot be evaluated.
    pub fn eval(&self, mut input: impl Input) -> Result<Value> {
        self.eval_ref(&mut input)
    }

    pub fn eval_const(&self) -> Result<Value> {
        self.eval(ConstInput::new())
    }

    fn eval_ref(&self, input: &mut impl Input) -> Result<Value> {
        match self {
            Expr::Binary(e) => eval_binary(e, input),
            Expr::Case(e) => {
                let operand = match &e.operand {
                    Some(operand) => Some(operand.eval_ref(input)?),
                    None => None,
                };

                for when in &e.whens {
                    let test = when.test.eval_ref(input)?;
                    let matched = match &operand {
                        Some(operand) => operand.sql_eq(&test) == Some(true),
                        None => test.is_true(),
                    };

                    if matched {
                        return when.result.eval_ref(input);
                    }
                }

                match &e.else_result {
                    Some(else_result) => else_result.eval_ref(input),
                    None => Ok(Value::Null),
                }
            }
            Expr::Column(e) => input
                .column(e)
                .ok_or_else(|| err!("no value for column `{}.{}`", e.table, e.name)),
            Expr::Constant(e) => Ok(e.value.clone()),
            Expr::Exists(_) => bail!("cannot evaluate EXISTS outside the database"),
            Expr::Fragment(e) => bail!("cannot evaluate SQL fragment `{}`", e.sql),
            Expr::Func(e) => bail!("cannot evaluate function `{}`", e.name),
            Expr::In(e) => eval_in(e, input),
            Expr::Like(e) => eval_like(e, input),
            Expr::Parameter(e) => input
                .parameter(e)
                .ok_or_else(|| err!("no value for parameter `{}`", e.name)),
            Expr::Unary(e) => {
                let operand = e.operand.eval_ref(input)?;

                match e.op {
                    UnaryOp::IsNull => Ok(operand.is_null().into()),
                    UnaryOp::IsNotNull => Ok((!operand.is_null()).into()),
                    _ if operand.is_null() => Ok(Value::Null),
                    UnaryOp::Not => match operand {
                        Value::Bool(b) => Ok((!b).into()),
                        operand => bail!("NOT requires a boolean operand; operand={operand:?}"),
                    },
                    UnaryOp::Negate => match operand {
                        Value::I16(v) => Ok(Value::I16(-v)),
                        Value::I32(v) => Ok(Value::I32(-v)),
                        Value::I64(v) => Ok(Value::I64(-v)),
                        Value::F32(v) => Ok(Value::F32(-v)),
                        Value::F64(v) => Ok(Value::F64(-v)),
                        operand => bail!("cannot negate {operand:?}"),
                    },
                    UnaryOp::Convert => convert(operand, &e.ty),
                }
            }
        }
    }
}

fn eval_binary(e: &ExprBinary, input: &mut impl Input) -> Result<Value> {
    let lhs = e.lhs.eval_ref(input)?;

    // AND/OR follow Kleene logic, so a known operand can decide the result
    // even when the other is NULL.
    match e.op {
        BinaryOp::And => {
            let rhs = e.rhs.eval_ref(input)?;
            return Ok(match (lhs.as_bool(), rhs.as_bool()) {
                (Some(false), _) | (_, Some(false)) => false.into(),
                (Some(true), Some(true)) => true.into(),
                _ => Value::Null,
            });
        }
        BinaryOp::Or => {
            let rhs = e.rhs.eval_ref(input)?;
            return Ok(match (lhs.as_bool(), rhs.as_bool()) {
                (Some(true), _) | (_, Some(true)) => true.into(),
                (Some(false), Some(false)) => false.into(),
                _ => Value::Null,
            });
        }
        BinaryOp::Coalesce => {
            return if lhs.is_null() {
                e.rhs.eval_ref(input)
            } else {
                Ok(lhs)
            };
        }
        _ => {}
    }

    let rhs = e.rhs.eval_ref(input)?;

    if lhs.is_null() || rhs.is_null() {
        return Ok(Value::Null);
    }

    if e.op.is_comparison() {
        // Operands carry the store's comparison rules, e.g. case-insensitive
        // string collation.
        let ordering = match e.lhs.type_mapping().or(e.rhs.type_mapping()) {
            Some(mapping) => mapping.comparer.compare(&lhs, &rhs),
            None => lhs.sql_cmp(&rhs),
        };

        let Some(ordering) = ordering else {
            bail!("cannot compare {lhs:?} with {rhs:?}");
        };

        let result = match e.op {
            BinaryOp::Eq => ordering == Ordering::Equal,
            BinaryOp::Ne => ordering != Ordering::Equal,
            BinaryOp::Lt => ordering == Ordering::Less,
            BinaryOp::Le => ordering != Ordering::Greater,
            BinaryOp::Gt => ordering == Ordering::Greater,
            _ => ordering != Ordering::Less,
        };

        return Ok(result.into());
    }

    match (&lhs, &rhs) {
        (Value::String(a), Value::String(b)) if e.op == BinaryOp::Add => {
            return Ok(Value::String(format!("{a}{b}")));
        }
        (Value::Bool(a), Value::Bool(b)) if e.op.is_bitwise() => {
            return Ok(match e.op {
                BinaryOp::BitAnd => (*a && *b).into(),
                _ => (*a || *b).into(),
            });
        }
        _ => {}
    }

    if let (Some(a), Some(b)) = (lhs.to_i64(), rhs.to_i64()) {
        let result = match e.op {
            BinaryOp::Add => a.checked_add(b),
            BinaryOp::Subtract => a.checked_sub(b),
            BinaryOp::Multiply => a.checked_mul(b),
            BinaryOp::Divide => a.checked_div(b),
            BinaryOp::Modulo => a.checked_rem(b),
            BinaryOp::BitAnd => Some(a & b),
            BinaryOp::BitOr => Some(a | b),
            _ => None,
        };

        let Some(result) = result else {
            bail!("integer overflow or division by zero evaluating {lhs:?} {} {rhs:?}", e.op);
        };

        return convert(Value::I64(result), &e.ty);
    }

    if let (Some(a), Some(b)) = (lhs.to_f64(), rhs.to_f64()) {
        let result = match e.op {
            BinaryOp::Add => a + b,
            BinaryOp::Subtract => a - b,
            BinaryOp::Multiply => a * b,
            BinaryOp::Divide => a / b,
            BinaryOp::Modulo => a % b,
            op => bail!("operator {op} requires integer operands"),
        };

        return convert(Value::F64(result), &e.ty);
    }

    bail!("cannot evaluate {lhs:?} {} {rhs:?}", e.op)
}

fn eval_in(e: &ExprIn, input: &mut impl Input) -> Result<Value> {
    let operand = e.expr.eval_ref(input)?;

    let items = match &e.values {
        InValues::List(items) => items
            .iter()
            .map(|item| item.eval_ref(input))
            .collect::<Result<Vec<_>>>()?,
        InValues::Parameter(parameter) => match input.parameter(parameter) {
            Some(Value::List(items)) => items,
            Some(value) => bail!("parameter `{}` is not a list; value={value:?}", parameter.name),
            None => bail!("no value for parameter `{}`", parameter.name),
        },
        InValues::Subquery(_) => bail!("cannot evaluate IN (subquery) outside the database"),
    };

    let found = if items.is_empty() {
        Some(false)
    } else if operand.is_null() {
        None
    } else if items.iter().any(|item| operand.sql_eq(item) == Some(true)) {
        Some(true)
    } else if items.iter().any(Value::is_null) {
        None
    } else {
        Some(false)
    };

    Ok(match found {
        Some(found) => (found != e.negated).into(),
        None => Value::Null,
    })
}

fn eval_like(e: &ExprLike, input: &mut impl Input) -> Result<Value> {
    let value = e.expr.eval_ref(input)?;
    let pattern = e.pattern.eval_ref(input)?;
    let escape = match &e.escape {
        Some(escape) => escape.eval_ref(input)?,
        None => Value::Null,
    };

    let (Value::String(value), Value::String(pattern)) = (&value, &pattern) else {
        return Ok(Value::Null);
    };

    let escape = escape.as_str().and_then(|escape| escape.chars().next());
    let value: Vec<char> = value.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();

    Ok(like_matches(&value, &pattern, escape).into())
}

fn like_matches(value: &[char], pattern: &[char], escape: Option<char>) -> bool {
    let Some((&first, rest)) = pattern.split_first() else {
        return value.is_empty();
    };

    match first {
        c if Some(c) == escape => match rest.split_first() {
            Some((&literal, rest)) => {
                value.first() == Some(&literal) && like_matches(&value[1..], rest, escape)
            }
            None => value.is_empty(),
        },
        '%' => (0..=value.len()).any(|skip| like_matches(&value[skip..], rest, escape)),
        '_' => !value.is_empty() && like_matches(&value[1..], rest, escape),
        c => value.first() == Some(&c) && like_matches(&value[1..], rest, escape),
    }
}

fn convert(value: Value, ty: &Type) -> Result<Value> {
    let converted = match (ty.non_nullable(), &value) {
        (_, Value::Null) => Some(Value::Null),
        (Type::I16, _) => value.to_i64().and_then(|v| i16::try_from(v).ok()).map(Value::I16),
        (Type::I32, _) => value.to_i64().and_then(|v| i32::try_from(v).ok()).map(Value::I32),
        (Type::I64, _) => value.to_i64().map(Value::I64),
        (Type::F32, _) => value.to_f64().map(|v| Value::F32(v as f32)),
        (Type::F64, _) => value.to_f64().map(Value::F64),
        _ => Some(value.clone()),
    };

    converted.ok_or_else(|| err!("cannot convert {value:?} to {ty}"))
}
