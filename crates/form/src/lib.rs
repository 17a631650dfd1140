//! # formkit-form
//!
//! The enclosing form: owns one [`FieldValidator`] per field, the form-wide
//! value map and the latest error list of every field.
//!
//! Nothing here is global. The UI holds a [`FormController`] and routes
//! input events to it by field name.
//!
//! ```rust
//! use formkit_form::FormController;
//! use formkit_validator::prelude::*;
//!
//! let mut form = FormController::new(Settings::default());
//! form.register_field("login", RuleSet::new().has_length(3, 0, 0));
//! form.register_field("email", RuleSet::new().is_email());
//!
//! form.set_value("login", "al")?;
//! form.set_value("email", "al@example.com")?;
//!
//! let report = form.submit()?;
//! assert!(!report.valid);
//! assert_eq!(report.errors["login"][0].check_name, "hasLength");
//! assert!(!report.errors.contains_key("email"));
//! # Ok::<(), formkit_form::FormError>(())
//! ```

pub mod controller;
pub mod error;

pub use controller::{FormController, FormReport};
pub use error::FormError;

pub use formkit_validator::engine::FieldValidator;
