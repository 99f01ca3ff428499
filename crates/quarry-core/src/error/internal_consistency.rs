use super::Error;

/// Error when the compiled tree violates an invariant the pipeline relies on.
///
/// This occurs when:
/// - An expression is still missing its type mapping after propagation
/// - An `IN (subquery)` has no projection to infer a type mapping from
/// - A projection mapping references a member the shaper does not contain
///
/// These errors indicate a bug in the compiler and are never retried.
#[derive(Debug)]
pub(super) struct InternalConsistency {
    message: Box<str>,
}

impl std::error::Error for InternalConsistency {}

impl core::fmt::Display for InternalConsistency {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "internal consistency: {}", self.message)
    }
}

impl Error {
    /// Creates an internal consistency error.
    pub fn internal_consistency(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InternalConsistency(InternalConsistency {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an internal
    /// consistency error.
    pub fn is_internal_consistency(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::InternalConsistency(_)))
    }
}
