//! Prelude module for convenient imports.
//!
//! Provides a single `use formkit_validator::prelude::*;` import that brings
//! in the engine, rule sets, settings and the check trait.

pub use crate::checks::{Alphabetic, Email, LengthBounds, Predicate, alphabetic, email, has_length};
pub use crate::engine::{ErrorEntry, FieldValidator, Handlers};
pub use crate::field::{BoundField, InputField, Validity};
pub use crate::foundation::{Reason, UsageError, Validate, ValidationError};
pub use crate::i18n::{Locale, LocalizedMessage, Settings};
pub use crate::rules::{Rule, RuleConfigError, RuleSet};
