//! String length check
//!
//! Length is measured in Unicode scalar values (chars), so `"héllo"` is
//! five characters long.

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// LENGTH BOUNDS
// ============================================================================

/// Validates a string length against optional minimum, maximum and exact
/// bounds. A bound of zero is unset.
///
/// Only one violation is reported per run. Bounds are tried in the order
/// `min`, `max`, `exact` and the first violated one wins, so a value that is
/// both shorter than `min` and different from `exact` reports "too short".
///
/// # Examples
///
/// ```rust
/// use formkit_validator::checks::LengthBounds;
/// use formkit_validator::foundation::{Reason, Validate};
///
/// let bounds = LengthBounds::new(3, 10, 5);
/// assert!(bounds.validate("hello").is_ok());
///
/// let err = bounds.validate("hi").unwrap_err();
/// assert_eq!(err.reason, Reason::TooShort { min: 3, actual: 2 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LengthBounds {
    /// Minimum length (inclusive). Zero never fails.
    pub min: usize,
    /// Maximum length (inclusive). Zero means unbounded.
    pub max: usize,
    /// Required exact length. Zero means unchecked.
    pub exact: usize,
}

impl LengthBounds {
    /// Creates a new length check.
    #[must_use]
    pub const fn new(min: usize, max: usize, exact: usize) -> Self {
        Self { min, max, exact }
    }

    /// Returns `true` when no bound is set, so the check can never fail.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.min == 0 && self.max == 0 && self.exact == 0
    }
}

impl Validate for LengthBounds {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let len = input.chars().count();

        if len < self.min {
            Err(ValidationError::too_short(self.min, len))
        } else if self.max != 0 && len > self.max {
            Err(ValidationError::too_long(self.max, len))
        } else if self.exact != 0 && len != self.exact {
            Err(ValidationError::wrong_length(self.exact, len))
        } else {
            Ok(())
        }
    }
}

/// Creates a length check.
#[must_use]
pub const fn has_length(min: usize, max: usize, exact: usize) -> LengthBounds {
    LengthBounds::new(min, max, exact)
}

// ============================================================================
// TESTS
// ============================================================================
