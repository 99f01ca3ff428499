use std::fmt;

/// A method identified by its declaring type and name, e.g.
/// `String.StartsWith`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Method {
    pub declaring: String,
    pub name: String,
}

impl Method {
    pub fn new(declaring: impl Into<String>, name: impl Into<String>) -> Method {
        Method {
            declaring: declaring.into(),
            name: name.into(),
        }
    }

    pub fn is(&self, declaring: &str, name: &str) -> bool {
        self.declaring == declaring && self.name == name
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.declaring, self.name)
    }
}
