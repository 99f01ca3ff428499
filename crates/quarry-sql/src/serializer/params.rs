use super::{Formatter, ToSql};

use quarry_core::{
    mapping::TypeMapping,
    stmt::{ExprParameter, Type},
    Flavor,
};
use std::sync::Arc;

/// Collects the parameters referenced by a statement.
pub trait Params {
    fn push(&mut self, param: &ExprParameter) -> Placeholder;

    /// Called when a list parameter was inlined as literals instead of bound.
    fn expanded(&mut self, name: &str) {
        let _ = name;
    }
}

/// Position of a bound parameter, starting at 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub name: String,
    pub position: usize,
}

/// A parameter the caller must bind before executing the statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterInfo {
    pub name: String,
    pub ty: Type,
    pub mapping: Option<Arc<TypeMapping>>,
}

/// Parameters in first-occurrence order, one entry per name.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParameterList {
    pub parameters: Vec<ParameterInfo>,

    /// List parameters rendered inline from their runtime values.
    pub expanded: Vec<String>,
}

impl ParameterList {
    pub fn new() -> ParameterList {
        ParameterList::default()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl Params for ParameterList {
    fn push(&mut self, param: &ExprParameter) -> Placeholder {
        let position = match self.parameters.iter().position(|p| p.name == param.name) {
            Some(index) => index + 1,
            None => {
                self.parameters.push(ParameterInfo {
                    name: param.name.clone(),
                    ty: param.ty.clone(),
                    mapping: param.mapping.clone(),
                });
                self.parameters.len()
            }
        };

        Placeholder {
            name: param.name.clone(),
            position,
        }
    }

    fn expanded(&mut self, name: &str) {
        if !self.expanded.iter().any(|n| n == name) {
            self.expanded.push(name.to_string());
        }
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match f.serializer.flavor {
            Flavor::SqlServer | Flavor::Sqlite => {
                f.dst.push('@');
                f.dst.push_str(&self.name);
            }
            Flavor::Postgresql => {
                f.dst.push('$');
                f.dst.push_str(&self.position.to_string());
            }
        }
    }
}
