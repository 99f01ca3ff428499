use super::Error;

/// Error when an aggregate with no defined empty result runs over zero rows.
///
/// `Average`, `Min` and `Max` with a non-nullable result type raise this
/// while materializing the single result row. `Sum` never does.
#[derive(Debug)]
pub(super) struct AggregateEmptyInput {
    aggregate: Box<str>,
}

impl std::error::Error for AggregateEmptyInput {}

impl core::fmt::Display for AggregateEmptyInput {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}: sequence contains no elements", self.aggregate)
    }
}

impl Error {
    /// Creates an aggregate empty input error for the named aggregate.
    pub fn aggregate_empty_input(aggregate: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::AggregateEmptyInput(AggregateEmptyInput {
            aggregate: aggregate.into().into(),
        }))
    }

    /// Returns `true` if this error is an aggregate empty input error.
    pub fn is_aggregate_empty_input(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::AggregateEmptyInput(_)))
    }
}
