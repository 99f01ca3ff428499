mod aggregate;
mod element;
mod filter;
mod order;
mod paging;
mod project;
mod quantifier;

mod scalar;
use scalar::{ScalarTranslator, Scope, Translated};

use aggregate::Aggregate;
use element::Element;

use super::Engine;
use quarry_core::{
    query::{Lambda, Operator, QueryExpr},
    schema::Entity,
    shape::{Cardinality, OnNull, ProjectionMember, ShapedQuery, Shaper, ShaperValue},
    stmt::{Expr, Select, Table},
    Error, Result,
};
use tracing::debug;

/// Folds a query's operators into one select and the shaper reading its
/// rows.
struct QueryTranslator<'a> {
    engine: &'a Engine,

    select: Select,

    shaper: Shaper,

    cardinality: Cardinality,

    /// The terminal operator already applied, if any. Nothing may follow it.
    terminal: Option<&'static str>,
}

impl Engine {
    pub(crate) fn translate(&self, query: &QueryExpr) -> Result<ShapedQuery> {
        let entity = self.schema.entity(&query.source)?;
        let mut translator = QueryTranslator::new(self, entity)?;

        for operator in &query.operators {
            translator.operator(operator)?;
        }

        Ok(translator.finish())
    }
}

impl<'a> QueryTranslator<'a> {
    /// Starts from every property of `entity`, each at the path `[property]`.
    fn new(engine: &'a Engine, entity: &Entity) -> Result<QueryTranslator<'a>> {
        let alias = entity.table_alias();
        let select = Select::from_table(Table {
            name: entity.table.clone(),
            schema: entity.schema.clone(),
            alias: alias.clone(),
        });

        let mut mapping = Vec::with_capacity(entity.properties.len());
        let mut members = Vec::with_capacity(entity.properties.len());

        for property in &entity.properties {
            let member = ProjectionMember::from_path([&property.name]);
            mapping.push((member.clone(), engine.factory.column(&alias, property)?));
            members.push((
                property.name.clone(),
                Shaper::Value(ShaperValue {
                    member,
                    ty: property.host_ty(),
                    on_null: OnNull::Propagate,
                    converter: property.converter.clone(),
                }),
            ));
        }

        let mut translator = QueryTranslator {
            engine,
            select,
            shaper: Shaper::Object {
                name: Some(entity.name.clone()),
                members,
            },
            cardinality: Cardinality::Sequence,
            terminal: None,
        };
        translator.select.replace_projection_mapping(mapping);

        Ok(translator)
    }

    fn operator(&mut self, operator: &Operator) -> Result<()> {
        if let Some(terminal) = self.terminal {
            return Err(Error::translation_unsupported(format!(
                "operator `{}` after terminal operator `{terminal}`",
                operator.name()
            )));
        }

        debug!(operator = operator.name(), "translating operator");

        match operator {
            Operator::Filter(predicate) => self.filter(predicate)?,
            Operator::Project(selector) => self.project(selector)?,
            Operator::OrderBy(key) => self.order_by(key, true)?,
            Operator::OrderByDescending(key) => self.order_by(key, false)?,
            Operator::ThenBy(key) => self.then_by(key, true)?,
            Operator::ThenByDescending(key) => self.then_by(key, false)?,
            Operator::Skip(count) => self.skip(count)?,
            Operator::Take(count) => self.take(count)?,
            Operator::Distinct => self.select.apply_distinct(),
            Operator::Count(predicate) => self.count(predicate.as_ref(), false)?,
            Operator::LongCount(predicate) => self.count(predicate.as_ref(), true)?,
            Operator::Sum(selector) => self.aggregate(Aggregate::Sum, selector.as_ref())?,
            Operator::Average(selector) => self.aggregate(Aggregate::Average, selector.as_ref())?,
            Operator::Min(selector) => self.aggregate(Aggregate::Min, selector.as_ref())?,
            Operator::Max(selector) => self.aggregate(Aggregate::Max, selector.as_ref())?,
            Operator::First(predicate) => self.element(Element::First, false, predicate.as_ref())?,
            Operator::FirstOrDefault(predicate) => {
                self.element(Element::First, true, predicate.as_ref())?
            }
            Operator::Single(predicate) => self.element(Element::Single, false, predicate.as_ref())?,
            Operator::SingleOrDefault(predicate) => {
                self.element(Element::Single, true, predicate.as_ref())?
            }
            Operator::Last(predicate) => self.element(Element::Last, false, predicate.as_ref())?,
            Operator::LastOrDefault(predicate) => {
                self.element(Element::Last, true, predicate.as_ref())?
            }
            Operator::Any(predicate) => self.any(predicate.as_ref())?,
            Operator::All(predicate) => self.all(predicate)?,
            Operator::Contains(item) => self.contains(item)?,
            Operator::SelectMany(_)
            | Operator::Join
            | Operator::GroupBy(_)
            | Operator::Union
            | Operator::Intersect
            | Operator::Except
            | Operator::Reverse
            | Operator::OfType(_)
            | Operator::Cast(_)
            | Operator::SkipWhile(_)
            | Operator::TakeWhile(_)
            | Operator::ElementAt(_) => {
                return Err(Error::translation_unsupported(format!(
                    "operator `{}` has no SQL translation",
                    operator.name()
                )));
            }
        }

        if operator.is_terminal() {
            self.terminal = Some(operator.name());
        }

        Ok(())
    }

    /// A scalar translator binding `lambda`'s parameter to the current rows.
    fn scalar<'s>(&'s self, lambda: &'s Lambda) -> ScalarTranslator<'s> {
        ScalarTranslator::new(
            self.engine,
            Some(Scope {
                param: &lambda.param,
                select: &self.select,
                shaper: &self.shaper,
            }),
        )
    }

    /// A scalar translator with no row in scope, for counts and items.
    fn unscoped(&self) -> ScalarTranslator<'_> {
        ScalarTranslator::new(self.engine, None)
    }

    /// Makes the select a brand-new scalar select producing `expr`, read by a
    /// single leaf at the root.
    fn replace_with_scalar(&mut self, expr: Expr) {
        let ty = expr.ty().clone();
        self.select = Select::scalar(expr);
        self.shaper = Shaper::value(ProjectionMember::root(), ty);
        self.cardinality = Cardinality::Scalar;
    }

    fn finish(mut self) -> ShapedQuery {
        self.select.apply_projection();

        ShapedQuery {
            select: self.select,
            shaper: self.shaper,
            cardinality: self.cardinality,
        }
    }
}
