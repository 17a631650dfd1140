//! Form controller errors

use formkit_validator::foundation::UsageError;

/// Errors raised by [`FormController`](crate::FormController).
///
/// Like [`UsageError`] these are programmer errors; invalid user input is
/// reported through error entries, never here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// No field is registered under this name.
    #[error("no field named '{name}' is registered")]
    UnknownField {
        /// The requested name.
        name: String,
    },

    /// A field validator was driven incorrectly.
    #[error(transparent)]
    Usage(#[from] UsageError),
}

impl FormError {
    pub(crate) fn unknown(name: &str) -> Self {
        FormError::UnknownField {
            name: name.to_owned(),
        }
    }
}
