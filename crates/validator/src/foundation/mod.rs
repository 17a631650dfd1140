//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the engine:
//!
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ValidationError`], [`Reason`], [`UsageError`]
//!
//! # Architecture
//!
//! Checks are generic over their input type, providing compile-time
//! guarantees:
//!
//! ```rust,ignore
//! use formkit_validator::foundation::Validate;
//!
//! struct Alphabetic;
//!
//! impl Validate for Alphabetic {
//!     type Input = str;  // Only validates strings
//!
//!     fn validate(&self, input: &str) -> Result<(), ValidationError> {
//!         // ...
//!     }
//! }
//! ```
//!
//! A failing check returns a structured error with a typed [`Reason`];
//! the message shown to the user is produced later by the catalog in the
//! user's locale.

// Module declarations
pub mod error;
pub mod traits;

// Re-export everything at the foundation level for convenience
pub use error::{
    BUILT_IN_CHECKS, HAS_LENGTH, IS_ALPHA, IS_EMAIL, Reason, UsageError, ValidationError,
};
pub use traits::Validate;
