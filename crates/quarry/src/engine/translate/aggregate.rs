use super::QueryTranslator;
use quarry_core::{
    query::Lambda,
    shape::{Cardinality, OnNull, ProjectionMember, Shaper, ShaperValue},
    stmt::{Expr, Type},
    Error, Result,
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Aggregate {
    Sum,
    Average,
    Min,
    Max,
}

impl QueryTranslator<'_> {
    /// `COUNT(*)` over the current rows, after applying `predicate`.
    pub(super) fn count(&mut self, predicate: Option<&Lambda>, long: bool) -> Result<()> {
        if let Some(predicate) = predicate {
            self.filter(predicate)?;
        }

        self.select.prepare_for_aggregate();

        let (name, ty) = if long {
            (self.engine.factory.capability().count_big, Type::I64)
        } else {
            ("COUNT", Type::I32)
        };
        let count = self.engine.factory.apply(Expr::count_star(name, ty.clone()))?;

        self.select.clear_ordering();
        self.select
            .replace_projection_mapping([(ProjectionMember::root(), count)]);
        self.shaper = Shaper::value(ProjectionMember::root(), ty);
        self.cardinality = Cardinality::Scalar;
        Ok(())
    }

    /// Wraps the single projected value in `aggregate`.
    pub(super) fn aggregate(&mut self, aggregate: Aggregate, selector: Option<&Lambda>) -> Result<()> {
        if let Some(selector) = selector {
            self.project(selector)?;
        }

        let Some(leaf) = self.shaper.as_value().cloned() else {
            return Err(Error::translation_unsupported(format!(
                "`{aggregate}` requires a single-column projection"
            )));
        };

        self.select.prepare_for_aggregate();

        let Some(operand) = self.select.mapped(&leaf.member).cloned() else {
            return Err(Error::internal_consistency(format!(
                "aggregated leaf {} has no mapped expression",
                leaf.member
            )));
        };

        let operand_ty = operand.ty().non_nullable().clone();
        if matches!(aggregate, Aggregate::Sum | Aggregate::Average) && !operand_ty.is_numeric() {
            return Err(Error::translation_unsupported(format!(
                "`{aggregate}` over non-numeric type {operand_ty}"
            )));
        }

        let expr = self.aggregate_expr(aggregate, operand, &operand_ty)?;
        let result_ty = expr.ty().non_nullable().clone();

        let on_null = if leaf.ty.is_nullable() {
            OnNull::Propagate
        } else if aggregate == Aggregate::Sum {
            OnNull::Default(result_ty.default_value())
        } else {
            OnNull::Fail(aggregate.to_string())
        };

        let ty = if leaf.ty.is_nullable() {
            Type::nullable(result_ty)
        } else {
            result_ty
        };

        // Min and Max return stored values, which still need converting
        let converter = match aggregate {
            Aggregate::Min | Aggregate::Max => leaf.converter,
            Aggregate::Sum | Aggregate::Average => None,
        };

        self.select.clear_ordering();
        self.select
            .replace_projection_mapping([(ProjectionMember::root(), expr)]);
        self.shaper = Shaper::Value(ShaperValue {
            member: ProjectionMember::root(),
            ty,
            on_null,
            converter,
        });
        self.cardinality = Cardinality::Scalar;
        Ok(())
    }

    /// The aggregate call, computing single precision values in double
    /// precision and averaging integers as doubles.
    fn aggregate_expr(&self, aggregate: Aggregate, operand: Expr, ty: &Type) -> Result<Expr> {
        let factory = &self.engine.factory;

        match aggregate {
            Aggregate::Sum if *ty == Type::F32 => {
                let wide = factory.convert(operand, Type::F64)?;
                let sum = factory.func("SUM", vec![wide], Type::F64)?;
                factory.convert(sum, Type::F32)
            }
            Aggregate::Sum => factory.func("SUM", vec![operand], ty.clone()),
            Aggregate::Average if ty.is_integer() => {
                let wide = factory.convert(operand, Type::F64)?;
                factory.func("AVG", vec![wide], Type::F64)
            }
            Aggregate::Average if *ty == Type::F32 => {
                let wide = factory.convert(operand, Type::F64)?;
                let avg = factory.func("AVG", vec![wide], Type::F64)?;
                factory.convert(avg, Type::F32)
            }
            Aggregate::Average => factory.func("AVG", vec![operand], ty.clone()),
            Aggregate::Min => factory.func("MIN", vec![operand], ty.clone()),
            Aggregate::Max => factory.func("MAX", vec![operand], ty.clone()),
        }
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Aggregate::Sum => "Sum",
            Aggregate::Average => "Average",
            Aggregate::Min => "Min",
            Aggregate::Max => "Max",
        })
    }
}
