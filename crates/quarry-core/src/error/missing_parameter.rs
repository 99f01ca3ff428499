use super::Error;

/// Error when SQL generation needs a parameter value that was not supplied.
///
/// Only list-valued parameters used in `IN` are expanded at generation time.
#[derive(Debug)]
pub(super) struct MissingParameter {
    name: Box<str>,
}

impl std::error::Error for MissingParameter {}

impl core::fmt::Display for MissingParameter {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no value supplied for parameter `{}`", self.name)
    }
}

impl Error {
    /// Creates a missing parameter error.
    pub fn missing_parameter(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingParameter(MissingParameter {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing parameter error.
    pub fn is_missing_parameter(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::MissingParameter(_)))
    }
}
