//! Built-in checks
//!
//! Each check is a [`Validate`](crate::foundation::Validate) implementation
//! over `str` and is stateless. The stateful per-field bookkeeping lives in
//! [`FieldValidator`](crate::engine::FieldValidator).
//!
//! - [`LengthBounds`]: min / max / exact character count
//! - [`Alphabetic`]: ASCII letters only
//! - [`Email`]: `text@text.text` shape
//! - [`Predicate`]: caller-supplied predicate under a custom name

pub mod custom;
pub mod length;
pub mod pattern;

pub use custom::{Predicate, PredicateFn, ensure_custom_name};
pub use length::{LengthBounds, has_length};
pub use pattern::{Alphabetic, Email, alphabetic, email};
