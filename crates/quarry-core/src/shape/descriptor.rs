use super::{Cardinality, OnNull, ProjectionMember, Shaper, ShaperValue};
use crate::{
    stmt::{ProjectionMapping, Select, Type, Value},
    Error, Result,
};
use indexmap::IndexMap;

/// Connects each shaper leaf to the row index that produces it.
///
/// This is what the compiled query hands to the materializer, together with
/// the SQL text.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDescriptor {
    pub shaper: Shaper,
    pub cardinality: Cardinality,
    slots: IndexMap<ProjectionMember, usize>,
}

impl ShapeDescriptor {
    /// Resolves every leaf of `shaper` against the applied projection of
    /// `select`.
    ///
    /// Fails when a leaf has no projection, or a mapped projection has no
    /// leaf.
    pub fn new(shaper: Shaper, select: &Select, cardinality: Cardinality) -> Result<ShapeDescriptor> {
        let ProjectionMapping::Applied(applied) = &select.mapping else {
            return Err(Error::internal_consistency(
                "shape descriptor built before the projection was applied",
            ));
        };

        let mut slots = IndexMap::with_capacity(applied.len());
        for leaf in shaper.leaves() {
            let Some(&index) = applied.get(&leaf.member) else {
                return Err(Error::internal_consistency(format!(
                    "shaper leaf `{}` has no projection",
                    leaf.member
                )));
            };

            if index >= select.projection.len() {
                return Err(Error::internal_consistency(format!(
                    "shaper leaf `{}` maps to missing projection {index}",
                    leaf.member
                )));
            }

            slots.insert(leaf.member.clone(), index);
        }

        if let Some(orphan) = applied.keys().find(|member| !slots.contains_key(*member)) {
            return Err(Error::internal_consistency(format!(
                "projection for `{orphan}` is not read by the shaper"
            )));
        }

        Ok(ShapeDescriptor {
            shaper,
            cardinality,
            slots,
        })
    }

    /// The row index holding `member`.
    pub fn slot(&self, member: &ProjectionMember) -> Option<usize> {
        self.slots.get(member).copied()
    }

    pub fn members(&self) -> impl Iterator<Item = &ProjectionMember> {
        self.slots.keys()
    }

    /// Builds one result from one row.
    ///
    /// Objects become [`Value::Record`]s with fields in member order. A leaf
    /// whose slot is `NULL` follows its [`OnNull`] rule.
    pub fn materialize(&self, row: &[Value]) -> Result<Value> {
        self.materialize_shaper(&self.shaper, row)
    }

    /// Builds the final result from all rows, applying the cardinality.
    ///
    /// Sequences produce a [`Value::List`]. Element operators without a
    /// default fail on an empty result.
    pub fn materialize_rows(&self, rows: &[Vec<Value>]) -> Result<Value> {
        match self.cardinality {
            Cardinality::Sequence => Ok(Value::List(
                rows.iter()
                    .map(|row| self.materialize(row))
                    .collect::<Result<_>>()?,
            )),
            Cardinality::First { or_default } | Cardinality::Single { or_default } => {
                match (rows.first(), or_default) {
                    (Some(row), _) => self.materialize(row),
                    (None, true) => Ok(Value::Null),
                    (None, false) => Err(Error::aggregate_empty_input(match self.cardinality {
                        Cardinality::Single { .. } => "Single",
                        _ => "First",
                    })),
                }
            }
            Cardinality::Scalar => match rows.first() {
                Some(row) => self.materialize(row),
                None => self.materialize(&[]),
            },
        }
    }

    fn materialize_shaper(&self, shaper: &Shaper, row: &[Value]) -> Result<Value> {
        match shaper {
            Shaper::Value(leaf) => self.materialize_leaf(leaf, row),
            Shaper::Object { members, .. } => Ok(Value::Record(
                members
                    .iter()
                    .map(|(_, shaper)| self.materialize_shaper(shaper, row))
                    .collect::<Result<_>>()?,
            )),
        }
    }

    fn materialize_leaf(&self, leaf: &ShaperValue, row: &[Value]) -> Result<Value> {
        let value = self
            .slot(&leaf.member)
            .and_then(|index| row.get(index))
            .cloned()
            .unwrap_or(Value::Null);

        if value.is_null() {
            return match &leaf.on_null {
                OnNull::Propagate => Ok(Value::Null),
                OnNull::Default(default) => Ok(default.clone()),
                OnNull::Fail(aggregate) => Err(Error::aggregate_empty_input(aggregate.clone())),
            };
        }

        let value = match &leaf.converter {
            Some(converter) => converter.from_provider(&value)?,
            None => value,
        };

        coerce(value, leaf.ty.non_nullable())
    }
}

/// Databases widen or narrow numeric results, and some return booleans as
/// integers. Brings a row value back to the leaf type.
fn coerce(value: Value, ty: &Type) -> Result<Value> {
    let coerced = match (ty, &value) {
        (Type::Bool, Value::Bool(_)) => value,
        (Type::Bool, _) => match value.to_i64() {
            Some(v) => Value::Bool(v != 0),
            None => return Err(Error::internal_consistency(format!("cannot read {value:?} as bool"))),
        },
        (Type::I16, _) | (Type::I32, _) | (Type::I64, _) if value.to_i64().is_some() => {
            let v = value.to_i64().unwrap_or_default();
            let narrowed = match ty {
                Type::I16 => i16::try_from(v).ok().map(Value::I16),
                Type::I32 => i32::try_from(v).ok().map(Value::I32),
                _ => Some(Value::I64(v)),
            };

            match narrowed {
                Some(narrowed) => narrowed,
                None => {
                    return Err(Error::internal_consistency(format!(
                        "value {v} out of range for {ty}"
                    )))
                }
            }
        }
        (Type::F32, _) => match value.to_f64() {
            Some(v) => Value::F32(v as f32),
            None => value,
        },
        (Type::F64, _) => match value.to_f64() {
            Some(v) => Value::F64(v),
            None => value,
        },
        _ => value,
    };

    Ok(coerced)
}
