//! Error types for validation failures and API misuse
//!
//! Two classes of error flow through the engine and they never mix:
//!
//! - [`ValidationError`] describes a *user input* failure. It is recorded,
//!   rendered and recovered from by correcting the input.
//! - [`UsageError`] describes a *programmer* mistake (detached field,
//!   non-string value, nameless or misnamed custom check). It is returned
//!   as `Err` and must be propagated.
//!
//! Check codes use `Cow<'static, str>` for zero-allocation in the common
//! case of the built-in checks.

use std::borrow::Cow;
use std::fmt;

use crate::i18n::catalog;

/// Check name of the length rule.
pub const HAS_LENGTH: &str = "hasLength";
/// Check name of the alphabetic-only rule.
pub const IS_ALPHA: &str = "isAlpha";
/// Check name of the email-shape rule.
pub const IS_EMAIL: &str = "isEmail";

/// Check names owned by the built-in rules. Custom checks cannot use them.
pub const BUILT_IN_CHECKS: [&str; 3] = [HAS_LENGTH, IS_ALPHA, IS_EMAIL];

// ============================================================================
// REASON
// ============================================================================

/// Structured cause of a failed check.
///
/// Carries the typed parameters the message catalog needs, so messages are
/// produced by `(reason, locale) -> text` rather than string templating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// Value is shorter than the configured minimum.
    TooShort { min: usize, actual: usize },
    /// Value is longer than the configured maximum.
    TooLong { max: usize, actual: usize },
    /// Value length differs from the configured exact length.
    WrongLength { exact: usize, actual: usize },
    /// Value contains something other than ASCII letters.
    NotAlphabetic,
    /// Value is not shaped like `text@text.text`.
    InvalidEmail,
    /// A caller-supplied predicate rejected the value.
    PredicateFailed,
}

impl Reason {
    /// Stable identifier of the variant, used as the catalog key.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Reason::TooShort { .. } => "tooShort",
            Reason::TooLong { .. } => "tooLong",
            Reason::WrongLength { .. } => "wrongLength",
            Reason::NotAlphabetic => "notAlphabetic",
            Reason::InvalidEmail => "invalidEmail",
            Reason::PredicateFailed => "predicateFailed",
        }
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure produced by a single check.
///
/// # Examples
///
/// ```rust
/// use formkit_validator::foundation::{Reason, ValidationError};
///
/// let error = ValidationError::too_short(5, 3);
/// assert_eq!(error.code, "hasLength");
/// assert_eq!(error.reason, Reason::TooShort { min: 5, actual: 3 });
/// assert_eq!(error.to_string(), "hasLength: Minimum length is 5 characters");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the failing check, e.g. `"hasLength"` or a custom name.
    pub code: Cow<'static, str>,

    /// Why the check failed.
    pub reason: Reason,

    /// Caller-supplied message that replaces the catalog text.
    pub message: Option<Cow<'static, str>>,
}

impl ValidationError {
    /// Creates a new validation error for a check code and reason.
    pub fn new(code: impl Into<Cow<'static, str>>, reason: Reason) -> Self {
        Self {
            code: code.into(),
            reason,
            message: None,
        }
    }

    /// Replaces the catalog message with a fixed one.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {message}", self.code),
            None => write!(f, "{}: {}", self.code, catalog::english(&self.reason, &self.code)),
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "too short" length error.
    pub fn too_short(min: usize, actual: usize) -> Self {
        Self::new(HAS_LENGTH, Reason::TooShort { min, actual })
    }

    /// Creates a "too long" length error.
    pub fn too_long(max: usize, actual: usize) -> Self {
        Self::new(HAS_LENGTH, Reason::TooLong { max, actual })
    }

    /// Creates a "wrong exact length" error.
    pub fn wrong_length(exact: usize, actual: usize) -> Self {
        Self::new(HAS_LENGTH, Reason::WrongLength { exact, actual })
    }

    /// Creates a "letters only" error.
    pub fn not_alphabetic() -> Self {
        Self::new(IS_ALPHA, Reason::NotAlphabetic)
    }

    /// Creates an "invalid email" error.
    pub fn invalid_email() -> Self {
        Self::new(IS_EMAIL, Reason::InvalidEmail)
    }

    /// Creates a failed custom-check error.
    pub fn predicate_failed(check: impl Into<Cow<'static, str>>) -> Self {
        Self::new(check, Reason::PredicateFailed)
    }
}

// ============================================================================
// USAGE ERROR
// ============================================================================

/// Programmer errors raised when the engine is driven incorrectly.
///
/// These are never recorded as error entries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    /// The bound field holds no value at all (detached or never mounted).
    #[error("field '{field}' has no value bound to it")]
    FieldMissing {
        /// Name of the bound field.
        field: String,
    },

    /// The bound field holds something other than a string.
    #[error("field '{field}' holds a {found} value, expected a string")]
    NonStringValue {
        /// Name of the bound field.
        field: String,
        /// JSON kind of the value found.
        found: &'static str,
    },

    /// A custom check was invoked without a name.
    #[error("custom check requires a non-empty check name")]
    EmptyCheckName,

    /// A custom check took the name of a built-in rule.
    #[error("check name '{name}' is reserved for a built-in rule")]
    ReservedCheckName {
        /// The rejected name.
        name: String,
    },
}

// ============================================================================
// TESTS
// ============================================================================
