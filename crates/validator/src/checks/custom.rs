//! Caller-defined predicate check

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::foundation::{BUILT_IN_CHECKS, UsageError, Validate, ValidationError};

/// Shared predicate over a field value; `true` means the value passes.
pub type PredicateFn = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Rejects names a custom check cannot report under: the empty name and
/// the names of the built-in rules.
pub fn ensure_custom_name(name: &str) -> Result<(), UsageError> {
    if name.is_empty() {
        return Err(UsageError::EmptyCheckName);
    }
    if BUILT_IN_CHECKS.contains(&name) {
        return Err(UsageError::ReservedCheckName {
            name: name.to_owned(),
        });
    }
    Ok(())
}

/// Runs a caller-supplied predicate under a named check.
///
/// # Examples
///
/// ```rust
/// use formkit_validator::checks::Predicate;
/// use formkit_validator::foundation::Validate;
///
/// let taken = ["admin", "root"];
/// let unique = Predicate::new("unique", move |v: &str| !taken.iter().any(|t| *t == v))
///     .unwrap()
///     .with_message("taken");
///
/// assert!(unique.validate("alice").is_ok());
/// let err = unique.validate("admin").unwrap_err();
/// assert_eq!(err.code, "unique");
/// assert_eq!(err.message.as_deref(), Some("taken"));
/// ```
#[derive(Clone)]
pub struct Predicate {
    name: Cow<'static, str>,
    message: Option<Cow<'static, str>>,
    predicate: PredicateFn,
}

impl Predicate {
    /// Creates a named predicate check.
    ///
    /// Returns [`UsageError::EmptyCheckName`] when `name` is empty and
    /// [`UsageError::ReservedCheckName`] when it names a built-in rule.
    pub fn new<F>(name: impl Into<Cow<'static, str>>, predicate: F) -> Result<Self, UsageError>
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::from_shared(name, Arc::new(predicate))
    }

    /// Creates a named check from an already shared predicate.
    pub fn from_shared(
        name: impl Into<Cow<'static, str>>,
        predicate: PredicateFn,
    ) -> Result<Self, UsageError> {
        let name = name.into();
        ensure_custom_name(&name)?;
        Ok(Self {
            name,
            message: None,
            predicate,
        })
    }

    /// Sets the message recorded when the predicate rejects a value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Check name the predicate reports under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fixed failure message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl Validate for Predicate {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if (self.predicate)(input) {
            return Ok(());
        }
        let error = ValidationError::predicate_failed(self.name.clone());
        Err(match &self.message {
            Some(message) => error.with_message(message.clone()),
            None => error,
        })
    }
}
