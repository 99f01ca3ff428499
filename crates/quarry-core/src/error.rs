mod adhoc;
mod aggregate_empty_input;
mod internal_consistency;
mod missing_parameter;
mod translation_unsupported;

use adhoc::AdhocError;
use aggregate_empty_input::AggregateEmptyInput;
use internal_consistency::InternalConsistency;
use missing_parameter::MissingParameter;
use std::sync::Arc;
use translation_unsupported::TranslationUnsupported;

/// Returns early with an ad-hoc error built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Builds an ad-hoc error from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while compiling a query.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl Error {
    /// Creates an ad-hoc error from format arguments.
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Error {
        Error::from(ErrorKind::Adhoc(AdhocError::new(args)))
    }

    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context
    /// is shown first, followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let kind = match consequent.inner {
            Some(inner) => match Arc::try_unwrap(inner) {
                Ok(inner) if inner.cause.is_none() => inner.kind,
                Ok(inner) => ErrorKind::Adhoc(AdhocError::new(format_args!("{}", inner.kind))),
                Err(shared) => ErrorKind::Adhoc(AdhocError::new(format_args!("{}", shared.kind))),
            },
            None => ErrorKind::Unknown,
        };

        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            })),
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    /// Returns `true` if any error in the chain satisfies `f`.
    fn any_in_chain(&self, f: impl Fn(&ErrorKind) -> bool) -> bool {
        self.chain().any(|err| f(err.kind()))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    TranslationUnsupported(TranslationUnsupported),
    InternalConsistency(InternalConsistency),
    AggregateEmptyInput(AggregateEmptyInput),
    MissingParameter(MissingParameter),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            TranslationUnsupported(err) => core::fmt::Display::fmt(err, f),
            InternalConsistency(err) => core::fmt::Display::fmt(err, f),
            AggregateEmptyInput(err) => core::fmt::Display::fmt(err, f),
            MissingParameter(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown quarry error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

impl From<uuid::Error> for Error {
    fn from(err: uuid::Error) -> Error {
        Error::from(anyhow::Error::from(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

impl IntoError for &str {
    fn into_error(self) -> Error {
        Error::from_args(format_args!("{self}"))
    }
}

impl IntoError for String {
    fn into_error(self) -> Error {
        Error::from_args(format_args!("{self}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        // Error stays one word wide
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("test error: {}", 42));
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let root = err!("root cause");
        let chained = root.context(err!("middle context")).context(err!("top context"));
        assert_eq!(
            chained.to_string(),
            "top context: middle context: root cause"
        );
    }

    #[test]
    fn anyhow_bridge() {
        let anyhow_err = anyhow::anyhow!("something failed");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "something failed");
    }

    #[test]
    fn translation_unsupported_with_context() {
        let err = Error::translation_unsupported("method `Foo.Bar`")
            .context("translating Filter operator");
        assert_eq!(
            err.to_string(),
            "translating Filter operator: translation unsupported: method `Foo.Bar`"
        );
        assert!(err.is_translation_unsupported());
        assert!(!err.is_internal_consistency());
    }

    #[test]
    fn internal_consistency_error() {
        let err = Error::internal_consistency("column `t.Name` has no type mapping");
        assert_eq!(
            err.to_string(),
            "internal consistency: column `t.Name` has no type mapping"
        );
        assert!(err.is_internal_consistency());
    }

    #[test]
    fn aggregate_empty_input_error() {
        let err = Error::aggregate_empty_input("Average");
        assert_eq!(
            err.to_string(),
            "Average: sequence contains no elements"
        );
        assert!(err.is_aggregate_empty_input());
    }

    #[test]
    fn missing_parameter_error() {
        let err = Error::missing_parameter("ids");
        assert_eq!(err.to_string(), "no value supplied for parameter `ids`");
        assert!(err.is_missing_parameter());
    }
}
