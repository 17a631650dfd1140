//! # formkit-validator
//!
//! Per-field validation for client-side forms.
//!
//! ## Quick Start
//!
//! ```rust
//! use formkit_validator::prelude::*;
//!
//! let rules = RuleSet::from_json(r#"{ "hasLength": { "min": 3 }, "isEmail": true }"#)?;
//! let mut email_field = FieldValidator::for_input(
//!     "email",
//!     "a@b",
//!     rules,
//!     Settings::new(Locale::En),
//! );
//!
//! let errors = email_field.validate()?;
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].check_name, "isEmail");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Layout
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) trait and error types
//! - [`checks`]: stateless built-in checks
//! - [`rules`]: the tagged [`RuleSet`](rules::RuleSet) and its JSON form
//! - [`i18n`]: locales, settings and the message catalog
//! - [`field`]: the bound field and its validity marker
//! - [`engine`]: the stateful [`FieldValidator`](engine::FieldValidator)

pub mod checks;
pub mod engine;
pub mod field;
pub mod foundation;
pub mod i18n;
mod macros;
pub mod prelude;
pub mod rules;
