//! Macros for creating checks with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`]: create a zero-sized check (struct + Validate impl + factory fn)
//!
//! # Examples
//!
//! ```rust,ignore
//! use formkit_validator::validator;
//! use formkit_validator::foundation::{Reason, ValidationError};
//!
//! validator! {
//!     pub NotEmpty for str;
//!     rule(input) { !input.is_empty() }
//!     error(input) { ValidationError::new("notEmpty", Reason::PredicateFailed) }
//!     fn not_empty();
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a zero-sized check: struct definition, `Validate` implementation
/// and an optional `const` factory function.
///
/// The struct always derives `Debug, Clone, Copy, PartialEq, Eq, Hash`.
/// Checks that carry configuration, like
/// [`LengthBounds`](crate::checks::LengthBounds), implement `Validate` by hand.
///
/// ```rust,ignore
/// validator! {
///     pub NotEmpty for str;
///     rule(input) { !input.is_empty() }
///     error(input) { ValidationError::new("notEmpty", Reason::PredicateFailed) }
///     fn not_empty();
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // With factory fn
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // Struct and impl only
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::{Reason, Validate, ValidationError};

    crate::validator! {
        /// Test-only unit check.
        NotEmpty for str;
        rule(input) { !input.is_empty() }
        error(input) { ValidationError::new("notEmpty", Reason::PredicateFailed) }
        fn not_empty();
    }

    #[test]
    fn test_unit_variant() {
        assert!(not_empty().validate("x").is_ok());
        let err = not_empty().validate("").unwrap_err();
        assert_eq!(err.code, "notEmpty");
    }
}
