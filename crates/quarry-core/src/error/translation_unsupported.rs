use super::Error;

/// Error when a query operator or scalar fragment has no SQL equivalent.
///
/// This occurs when:
/// - An operator such as `GroupBy` or `Join` appears in the operator sequence
/// - A method call or member access is not recognized by any translator
/// - A constant has a type with no registered type mapping
///
/// The compiler never falls back to client evaluation. Callers decide
/// whether to recover.
#[derive(Debug)]
pub(super) struct TranslationUnsupported {
    fragment: Box<str>,
}

impl std::error::Error for TranslationUnsupported {}

impl core::fmt::Display for TranslationUnsupported {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "translation unsupported: {}", self.fragment)
    }
}

impl Error {
    /// Creates a translation unsupported error.
    ///
    /// The fragment describes the operator or expression that could not be
    /// translated.
    pub fn translation_unsupported(fragment: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::TranslationUnsupported(
            TranslationUnsupported {
                fragment: fragment.into().into(),
            },
        ))
    }

    /// Returns `true` if this error, or any error it wraps, is a translation
    /// unsupported error.
    pub fn is_translation_unsupported(&self) -> bool {
        self.any_in_chain(|kind| matches!(kind, super::ErrorKind::TranslationUnsupported(_)))
    }
}
