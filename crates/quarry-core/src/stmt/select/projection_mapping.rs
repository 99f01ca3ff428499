use crate::{shape::ProjectionMember, stmt::Expr};
use indexmap::IndexMap;

/// Links shaper leaves to what a select produces for them.
///
/// While a select is being built the mapping is `Pending` and holds the
/// expression for each member. [`Select::apply_projection`] turns it into
/// `Applied`, where each member points at a projection index.
///
/// [`Select::apply_projection`]: super::Select::apply_projection
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionMapping {
    Pending(IndexMap<ProjectionMember, Expr>),
    Applied(IndexMap<ProjectionMember, usize>),
}

impl ProjectionMapping {
    pub fn pending(entries: impl IntoIterator<Item = (ProjectionMember, Expr)>) -> ProjectionMapping {
        ProjectionMapping::Pending(entries.into_iter().collect())
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, ProjectionMapping::Applied(_))
    }

    pub fn len(&self) -> usize {
        match self {
            ProjectionMapping::Pending(map) => map.len(),
            ProjectionMapping::Applied(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The pending expression for `member`.
    pub fn expr(&self, member: &ProjectionMember) -> Option<&Expr> {
        match self {
            ProjectionMapping::Pending(map) => map.get(member),
            ProjectionMapping::Applied(_) => None,
        }
    }

    /// The projection index for `member`, once applied.
    pub fn index(&self, member: &ProjectionMember) -> Option<usize> {
        match self {
            ProjectionMapping::Pending(_) => None,
            ProjectionMapping::Applied(map) => map.get(member).copied(),
        }
    }

    pub fn members(&self) -> Box<dyn Iterator<Item = &ProjectionMember> + '_> {
        match self {
            ProjectionMapping::Pending(map) => Box::new(map.keys()),
            ProjectionMapping::Applied(map) => Box::new(map.keys()),
        }
    }

    /// Records a pending expression. An applied mapping is discarded first.
    pub fn insert(&mut self, member: ProjectionMember, expr: Expr) {
        if self.is_applied() {
            *self = ProjectionMapping::default();
        }

        if let ProjectionMapping::Pending(map) = self {
            map.insert(member, expr);
        }
    }

    /// Iterates over pending expressions, for passes that rewrite them.
    pub fn pending_exprs_mut(&mut self) -> impl Iterator<Item = &mut Expr> {
        let exprs = match self {
            ProjectionMapping::Pending(map) => Some(map.values_mut()),
            ProjectionMapping::Applied(_) => None,
        };
        exprs.into_iter().flatten()
    }

    pub fn pending_exprs(&self) -> impl Iterator<Item = &Expr> {
        let exprs = match self {
            ProjectionMapping::Pending(map) => Some(map.values()),
            ProjectionMapping::Applied(_) => None,
        };
        exprs.into_iter().flatten()
    }
}

impl Default for ProjectionMapping {
    fn default() -> Self {
        ProjectionMapping::Pending(IndexMap::new())
    }
}
