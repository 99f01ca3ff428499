use super::ProjectionMember;
use crate::{schema::ValueConverter, stmt::Type, stmt::Value};

/// A tree mirroring the structure of one result object.
#[derive(Debug, Clone, PartialEq)]
pub enum Shaper {
    /// A leaf read from one projection slot.
    Value(ShaperValue),

    /// An object built from named members, in declaration order.
    Object {
        name: Option<String>,
        members: Vec<(String, Shaper)>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShaperValue {
    pub member: ProjectionMember,

    /// Type the materialized value is coerced to.
    pub ty: Type,

    pub on_null: OnNull,

    /// Applied to non-null values read from the row.
    pub converter: Option<ValueConverter>,
}

/// What a leaf does when its slot holds `NULL`.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum OnNull {
    /// The leaf is `NULL` too.
    #[default]
    Propagate,

    /// The leaf takes this value. `Sum` over no rows yields zero this way.
    Default(Value),

    /// The aggregate named here had no input rows.
    Fail(String),
}

impl Shaper {
    pub fn value(member: ProjectionMember, ty: Type) -> Shaper {
        Shaper::Value(ShaperValue {
            member,
            ty,
            on_null: OnNull::Propagate,
            converter: None,
        })
    }

    pub fn object<S: Into<String>>(
        name: Option<String>,
        members: impl IntoIterator<Item = (S, Shaper)>,
    ) -> Shaper {
        Shaper::Object {
            name,
            members: members
                .into_iter()
                .map(|(name, shaper)| (name.into(), shaper))
                .collect(),
        }
    }

    /// Every leaf, depth first in member order.
    pub fn leaves(&self) -> Vec<&ShaperValue> {
        let mut leaves = vec![];
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a ShaperValue>) {
        match self {
            Shaper::Value(value) => leaves.push(value),
            Shaper::Object { members, .. } => {
                for (_, shaper) in members {
                    shaper.collect_leaves(leaves);
                }
            }
        }
    }

    /// The sub-shaper reached by following `path` through object members.
    pub fn get(&self, path: &[String]) -> Option<&Shaper> {
        let Some((first, rest)) = path.split_first() else {
            return Some(self);
        };

        match self {
            Shaper::Object { members, .. } => members
                .iter()
                .find(|(name, _)| name == first)
                .and_then(|(_, shaper)| shaper.get(rest)),
            Shaper::Value(_) => None,
        }
    }

    pub fn as_value(&self) -> Option<&ShaperValue> {
        match self {
            Shaper::Value(value) => Some(value),
            Shaper::Object { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> Shaper {
        Shaper::object(
            Some("Customer".to_string()),
            [
                ("Id", Shaper::value(ProjectionMember::from_path(["Id"]), Type::I32)),
                (
                    "Address",
                    Shaper::object(
                        None,
                        [(
                            "City",
                            Shaper::value(
                                ProjectionMember::from_path(["Address", "City"]),
                                Type::nullable(Type::String),
                            ),
                        )],
                    ),
                ),
            ],
        )
    }

    #[test]
    fn leaves_are_depth_first() {
        let shaper = customer();
        let members: Vec<_> = shaper.leaves().iter().map(|leaf| leaf.member.to_string()).collect();
        assert_eq!(members, ["Id", "Address.City"]);
    }

    #[test]
    fn get_follows_member_path() {
        let shaper = customer();
        let path = ["Address".to_string(), "City".to_string()];
        let city = shaper.get(&path).and_then(Shaper::as_value).unwrap();
        assert_eq!(city.ty, Type::nullable(Type::String));
        assert!(shaper.get(&["Missing".to_string()]).is_none());
    }
}
