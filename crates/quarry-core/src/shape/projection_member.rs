use std::fmt;

/// The path from the result root to one leaf of the shaper tree.
///
/// The root path is empty and identifies a scalar result.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectionMember {
    path: Vec<String>,
}

impl ProjectionMember {
    pub fn root() -> ProjectionMember {
        ProjectionMember::default()
    }

    pub fn from_path<I, S>(path: I) -> ProjectionMember
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ProjectionMember {
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns a new member one level below this one.
    pub fn append(&self, name: impl Into<String>) -> ProjectionMember {
        let mut path = self.path.clone();
        path.push(name.into());
        ProjectionMember { path }
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// The innermost member name, used as a column alias hint.
    pub fn last(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }
}

impl fmt::Display for ProjectionMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return f.write_str("<root>");
        }
        f.write_str(&self.path.join("."))
    }
}

impl fmt::Debug for ProjectionMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProjectionMember({self})")
    }
}
