use super::{TypeMapping, TypeMappingSource};
use crate::{
    stmt::{Expr, InValues, UnaryOp},
    Error, Result,
};
use std::sync::Arc;

impl TypeMappingSource {
    /// Assigns type mappings to `expr` and its children.
    ///
    /// A node that already carries a mapping is returned unchanged, so the
    /// first assignment wins and applying twice is the same as applying once.
    /// `mapping`, when given, is the mapping the caller expects the node to
    /// have; operator nodes may infer a different one for their operands.
    pub fn apply_mapping(&self, expr: Expr, mapping: Option<&Arc<TypeMapping>>) -> Result<Expr> {
        if expr.type_mapping().is_some() {
            return Ok(expr);
        }

        match expr {
            Expr::Fragment(_) => Ok(expr),
            Expr::Column(mut e) => {
                e.mapping = mapping.cloned().or_else(|| self.find(&e.ty));
                Ok(e.into())
            }
            Expr::Constant(mut e) => {
                e.mapping = mapping
                    .cloned()
                    .or_else(|| self.find_for_value(&e.value))
                    .or_else(|| self.find(&e.ty));
                Ok(e.into())
            }
            Expr::Parameter(mut e) => {
                let ty = e.ty.list_item().unwrap_or(&e.ty);
                e.mapping = mapping.cloned().or_else(|| self.find(ty));
                Ok(e.into())
            }
            Expr::Binary(mut e) if e.op.is_comparison() => {
                let inferred = self.infer(&[&*e.lhs, &*e.rhs])?;
                *e.lhs = self.apply_mapping(e.lhs.take(), Some(&inferred))?;
                *e.rhs = self.apply_mapping(e.rhs.take(), Some(&inferred))?;
                e.mapping = Some(self.bool_mapping());
                Ok(e.into())
            }
            Expr::Binary(mut e) if e.op.is_logical() => {
                let bool_mapping = self.bool_mapping();
                *e.lhs = self.apply_mapping(e.lhs.take(), Some(&bool_mapping))?;
                *e.rhs = self.apply_mapping(e.rhs.take(), Some(&bool_mapping))?;
                e.mapping = Some(bool_mapping);
                Ok(e.into())
            }
            Expr::Binary(mut e) => {
                let inferred = mapping
                    .cloned()
                    .or_else(|| e.lhs.type_mapping().cloned())
                    .or_else(|| e.rhs.type_mapping().cloned())
                    .or_else(|| self.find(&e.ty));
                *e.lhs = self.apply_mapping(e.lhs.take(), inferred.as_ref())?;
                *e.rhs = self.apply_mapping(e.rhs.take(), inferred.as_ref())?;
                e.mapping = inferred;
                Ok(e.into())
            }
            Expr::Unary(mut e) => {
                match e.op {
                    UnaryOp::Not => {
                        let bool_mapping = self.bool_mapping();
                        *e.operand = self.apply_mapping(e.operand.take(), Some(&bool_mapping))?;
                        e.mapping = Some(bool_mapping);
                    }
                    UnaryOp::IsNull | UnaryOp::IsNotNull => {
                        *e.operand = self.apply_mapping(e.operand.take(), None)?;
                        e.mapping = Some(self.bool_mapping());
                    }
                    UnaryOp::Negate => {
                        let inferred = mapping
                            .cloned()
                            .or_else(|| e.operand.type_mapping().cloned())
                            .or_else(|| self.find(&e.ty));
                        *e.operand = self.apply_mapping(e.operand.take(), inferred.as_ref())?;
                        e.mapping = inferred;
                    }
                    UnaryOp::Convert => {
                        *e.operand = self.apply_mapping(e.operand.take(), None)?;
                        e.mapping = mapping.cloned().or_else(|| self.find(&e.ty));
                    }
                }
                Ok(e.into())
            }
            Expr::Case(mut e) => {
                let result_mapping = mapping
                    .cloned()
                    .or_else(|| e.else_result.as_ref().and_then(|e| e.type_mapping().cloned()))
                    .or_else(|| e.whens.iter().find_map(|w| w.result.type_mapping().cloned()))
                    .or_else(|| self.find(&e.ty));

                match e.operand.take() {
                    Some(operand) => {
                        let mut operands: Vec<&Expr> = vec![&*operand];
                        operands.extend(e.whens.iter().map(|when| &when.test));
                        let inferred = self.infer(&operands)?;

                        e.operand = Some(Box::new(self.apply_mapping(*operand, Some(&inferred))?));
                        for when in &mut e.whens {
                            when.test = self.apply_mapping(when.test.take(), Some(&inferred))?;
                        }
                    }
                    None => {
                        let bool_mapping = self.bool_mapping();
                        for when in &mut e.whens {
                            when.test = self.apply_mapping(when.test.take(), Some(&bool_mapping))?;
                        }
                    }
                }

                for when in &mut e.whens {
                    when.result = self.apply_mapping(when.result.take(), result_mapping.as_ref())?;
                }

                if let Some(else_result) = &mut e.else_result {
                    **else_result = self.apply_mapping(else_result.take(), result_mapping.as_ref())?;
                }

                e.mapping = result_mapping;
                Ok(e.into())
            }
            Expr::Func(mut e) => {
                e.mapping = mapping.cloned().or_else(|| self.find(&e.ty));
                Ok(e.into())
            }
            Expr::Exists(mut e) => {
                e.mapping = Some(self.bool_mapping());
                Ok(e.into())
            }
            Expr::In(mut e) => {
                let inferred = match &e.values {
                    InValues::List(items) => {
                        let mut operands: Vec<&Expr> = vec![&*e.expr];
                        operands.extend(items);
                        self.infer(&operands)?
                    }
                    InValues::Parameter(parameter) => e
                        .expr
                        .type_mapping()
                        .cloned()
                        .or_else(|| parameter.mapping.clone())
                        .or_else(|| self.find(e.expr.ty()))
                        .or_else(|| parameter.ty.list_item().and_then(|ty| self.find(ty)))
                        .ok_or_else(|| {
                            Error::internal_consistency(format!(
                                "no type mapping for IN over parameter `{}`",
                                parameter.name
                            ))
                        })?,
                    InValues::Subquery(subquery) => match &subquery.projection[..] {
                        [projection] => projection.expr.type_mapping().cloned().ok_or_else(|| {
                            Error::internal_consistency("IN subquery projection has no type mapping")
                        })?,
                        _ => {
                            return Err(Error::internal_consistency(
                                "IN subquery must project exactly one column",
                            ))
                        }
                    },
                };

                *e.expr = self.apply_mapping(e.expr.take(), Some(&inferred))?;
                match &mut e.values {
                    InValues::List(items) => {
                        for item in items {
                            *item = self.apply_mapping(item.take(), Some(&inferred))?;
                        }
                    }
                    InValues::Parameter(parameter) => {
                        if parameter.mapping.is_none() {
                            parameter.mapping = Some(inferred);
                        }
                    }
                    InValues::Subquery(_) => {}
                }

                e.mapping = Some(self.bool_mapping());
                Ok(e.into())
            }
            Expr::Like(mut e) => {
                let mut operands: Vec<&Expr> = vec![&*e.expr, &*e.pattern];
                operands.extend(e.escape.as_deref());
                let inferred = self.infer(&operands)?;

                *e.expr = self.apply_mapping(e.expr.take(), Some(&inferred))?;
                *e.pattern = self.apply_mapping(e.pattern.take(), Some(&inferred))?;
                if let Some(escape) = &mut e.escape {
                    **escape = self.apply_mapping(escape.take(), Some(&inferred))?;
                }

                e.mapping = Some(self.bool_mapping());
                Ok(e.into())
            }
        }
    }

    /// Assigns the default mapping for the expression's own type.
    pub fn apply_default_mapping(&self, expr: Expr) -> Result<Expr> {
        self.apply_mapping(expr, None)
    }

    /// Infers one mapping shared by `operands`: the first one already mapped,
    /// else the default for the first operand with a known type.
    fn infer(&self, operands: &[&Expr]) -> Result<Arc<TypeMapping>> {
        operands
            .iter()
            .find_map(|operand| operand.type_mapping().cloned())
            .or_else(|| {
                operands.iter().find_map(|operand| match operand.as_constant() {
                    Some(value) if !value.is_null() => self.find_for_value(value),
                    _ => self.find(operand.ty()),
                })
            })
            .ok_or_else(|| {
                Error::internal_consistency(format!(
                    "cannot infer a type mapping for operands {operands:?}"
                ))
            })
    }
}
