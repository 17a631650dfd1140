//! Per-field validation engine
//!
//! A [`FieldValidator`] is bound to one field and one [`RuleSet`]. Each
//! check either records an [`ErrorEntry`] under its check name or removes
//! the one recorded earlier, so the list never holds two entries for the
//! same check and re-running with an unchanged value changes nothing.
//!
//! ```rust
//! use formkit_validator::prelude::*;
//!
//! let rules = RuleSet::new().has_length(3, 0, 0).is_alpha();
//! let mut validator = FieldValidator::new(
//!     InputField::new("login", "a1"),
//!     rules,
//!     Handlers::new(),
//!     Settings::default(),
//! );
//!
//! let errors = validator.validate()?;
//! assert_eq!(errors.len(), 2);
//! assert_eq!(validator.field().validity(), Some(Validity::Invalid));
//! # Ok::<(), UsageError>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::checks::{alphabetic, email, ensure_custom_name};
use crate::field::{BoundField, InputField, Validity, text_of};
use crate::foundation::{HAS_LENGTH, IS_ALPHA, IS_EMAIL, UsageError, Validate, ValidationError};
use crate::i18n::{Locale, Settings, catalog};
use crate::rules::RuleSet;

// ============================================================================
// ERROR ENTRY
// ============================================================================

/// One currently failing check with its rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEntry {
    /// Name of the failing check.
    pub check_name: String,
    /// Message in the validator's locale.
    pub message: String,
    /// Set when the locale had no message for this check and the English
    /// text was used instead.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fallback: bool,
}

impl ErrorEntry {
    /// Creates an entry.
    pub fn new(check_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            check_name: check_name.into(),
            message: message.into(),
            fallback: false,
        }
    }

    /// Marks the message as rendered in the fallback locale.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.check_name, self.message)
    }
}

// ============================================================================
// HANDLERS
// ============================================================================

/// Callback invoked with the complete error list after every pass.
pub type FinishCallback = Box<dyn FnMut(&[ErrorEntry])>;

/// Caller hooks into the validation lifecycle.
#[derive(Default)]
pub struct Handlers {
    on_validation_finish: Option<FinishCallback>,
}

impl Handlers {
    /// Creates handlers with no callbacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the callback run after each [`FieldValidator::validate`] call.
    #[must_use = "builder methods must be chained or built"]
    pub fn on_validation_finish<C>(mut self, callback: C) -> Self
    where
        C: FnMut(&[ErrorEntry]) + 'static,
    {
        self.on_validation_finish = Some(Box::new(callback));
        self
    }

    fn finish(&mut self, errors: &[ErrorEntry]) {
        if let Some(callback) = self.on_validation_finish.as_mut() {
            callback(errors);
        }
    }
}

impl fmt::Debug for Handlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field(
                "on_validation_finish",
                &self.on_validation_finish.as_ref().map(|_| "<callback>"),
            )
            .finish()
    }
}

// ============================================================================
// FIELD VALIDATOR
// ============================================================================

/// Validates one field against one rule set and keeps the failing checks.
///
/// Every check method returns `Ok(true)` when the check passes, `Ok(false)`
/// when it recorded an error, and `Err(UsageError)` when the bound field
/// cannot be validated at all. A usage error leaves the error list and the
/// field's marker untouched.
#[derive(Debug)]
pub struct FieldValidator<F: BoundField = InputField> {
    field: F,
    rules: RuleSet,
    handlers: Handlers,
    settings: Settings,
    errors: Vec<ErrorEntry>,
}

impl<F: BoundField> FieldValidator<F> {
    /// Binds a validator to a field.
    pub fn new(field: F, rules: RuleSet, handlers: Handlers, settings: Settings) -> Self {
        Self {
            field,
            rules,
            handlers,
            settings,
            errors: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Individual checks
    // ------------------------------------------------------------------

    /// Checks the value length against the configured `hasLength` bounds.
    ///
    /// Reports at most one of too short, too long or wrong exact length, in
    /// that order. Without a `hasLength` rule the check always passes.
    pub fn has_length(&mut self) -> Result<bool, UsageError> {
        let bounds = self.rules.length().unwrap_or_default();
        self.run(HAS_LENGTH, &bounds)
    }

    /// Checks that the value holds ASCII letters only.
    pub fn is_alpha(&mut self) -> Result<bool, UsageError> {
        self.run(IS_ALPHA, &alphabetic())
    }

    /// Checks that the value is shaped like an email address.
    pub fn is_email(&mut self) -> Result<bool, UsageError> {
        self.run(IS_EMAIL, &email())
    }

    /// Runs `predicate` over the value under `check_name`.
    ///
    /// On failure records `message`, or the localized
    /// "`<check_name>` check failed" when `message` is `None`. The names of
    /// the built-in rules are reserved and rejected as a usage error.
    pub fn custom_check<P>(
        &mut self,
        predicate: P,
        check_name: &str,
        message: Option<&str>,
    ) -> Result<bool, UsageError>
    where
        P: Fn(&str) -> bool,
    {
        ensure_custom_name(check_name)?;
        let value = text_of(&self.field)?;
        let outcome = if predicate(value) {
            Ok(())
        } else {
            let error = ValidationError::predicate_failed(check_name.to_owned());
            Err(match message {
                Some(message) => error.with_message(message.to_owned()),
                None => error,
            })
        };
        Ok(record(
            &mut self.errors,
            self.settings.current_language,
            check_name,
            outcome,
        ))
    }

    // ------------------------------------------------------------------
    // Full pass
    // ------------------------------------------------------------------

    /// Runs every rule in order, marks the field and calls the finish
    /// callback once with the complete error list.
    pub fn validate(&mut self) -> Result<&[ErrorEntry], UsageError> {
        let locale = self.settings.current_language;
        let value = text_of(&self.field)?;

        for rule in &self.rules {
            let passed = record(
                &mut self.errors,
                locale,
                rule.check_name(),
                rule.validate(value),
            );
            tracing::trace!(check = rule.check_name(), passed, "check finished");
        }

        self.field.mark(Validity::from_bool(self.errors.is_empty()));
        tracing::debug!(
            field = self.field.name(),
            checks = self.rules.len(),
            errors = self.errors.len(),
            "validation finished"
        );
        self.handlers.finish(&self.errors);
        Ok(&self.errors)
    }

    // ------------------------------------------------------------------
    // State
    // ------------------------------------------------------------------

    /// Returns `true` when no check is currently failing.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Currently failing checks, in the order they first failed.
    #[must_use]
    pub fn errors(&self) -> &[ErrorEntry] {
        &self.errors
    }

    /// The entry recorded for `check`, if it is failing.
    #[must_use]
    pub fn error_for(&self, check: &str) -> Option<&ErrorEntry> {
        self.errors.iter().find(|e| e.check_name == check)
    }

    /// Drops all entries and the field's validity marker.
    pub fn reset(&mut self) {
        self.errors.clear();
        self.field.clear_mark();
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// The bound field.
    pub fn field(&self) -> &F {
        &self.field
    }

    /// The bound field, for value updates.
    pub fn field_mut(&mut self) -> &mut F {
        &mut self.field
    }

    /// Unbinds and returns the field.
    pub fn into_field(self) -> F {
        self.field
    }

    /// The rules this validator runs.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Replaces the rules. Entries of checks the new set does not contain
    /// are dropped; the rest are refreshed by the next pass.
    pub fn set_rules(&mut self, rules: RuleSet) {
        self.errors.retain(|entry| rules.contains(&entry.check_name));
        self.rules = rules;
    }

    /// Current settings.
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Replaces the settings. Messages switch locale on the next pass.
    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    fn run<V>(&mut self, check: &str, validator: &V) -> Result<bool, UsageError>
    where
        V: Validate<Input = str>,
    {
        let value = text_of(&self.field)?;
        let outcome = validator.validate(value);
        Ok(record(
            &mut self.errors,
            self.settings.current_language,
            check,
            outcome,
        ))
    }
}

impl FieldValidator<InputField> {
    /// Binds a validator to a fresh text input holding `value`.
    pub fn for_input(
        name: impl Into<String>,
        value: impl Into<String>,
        rules: RuleSet,
        settings: Settings,
    ) -> Self {
        Self::new(
            InputField::new(name, value.into()),
            rules,
            Handlers::new(),
            settings,
        )
    }
}

/// Upserts or removes the entry for `check`. Returns `true` on pass.
fn record(
    errors: &mut Vec<ErrorEntry>,
    locale: Locale,
    check: &str,
    outcome: Result<(), ValidationError>,
) -> bool {
    match outcome {
        Ok(()) => {
            errors.retain(|entry| entry.check_name != check);
            true
        }
        Err(error) => {
            let (message, fallback) = match error.message {
                Some(message) => (message.into_owned(), false),
                None => {
                    let rendered = catalog::message(&error.reason, check, locale);
                    let fallback = rendered.is_fallback();
                    (rendered.text, fallback)
                }
            };
            match errors.iter_mut().find(|entry| entry.check_name == check) {
                Some(entry) => {
                    entry.message = message;
                    entry.fallback = fallback;
                }
                None => errors.push(ErrorEntry::new(check, message).with_fallback(fallback)),
            }
            false
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn validator(value: &str, rules: RuleSet) -> FieldValidator {
        FieldValidator::for_input("login", value, rules, Settings::default())
    }

    #[test]
    fn test_too_short_reports_only_min() {
        let mut v = validator("ab", RuleSet::new().has_length(3, 1, 7));
        let errors = v.validate().unwrap().to_vec();
        assert_eq!(
            errors,
            vec![ErrorEntry::new("hasLength", "Minimum length is 3 characters")]
        );
    }

    #[test]
    fn test_has_length_without_rule_clears_entry() {
        let mut v = validator("ab", RuleSet::new().has_length(3, 0, 0));
        assert_eq!(v.has_length(), Ok(false));
        v.set_rules(RuleSet::new().is_alpha());
        assert!(v.is_valid());
        assert_eq!(v.has_length(), Ok(true));
    }

    #[test]
    fn test_message_refreshes_in_place() {
        let mut v = validator("ab", RuleSet::new().has_length(3, 0, 0).is_email());
        v.validate().unwrap();
        v.set_settings(Settings::new(Locale::Ru));
        v.validate().unwrap();

        assert_eq!(v.errors().len(), 2);
        assert_eq!(v.errors()[0].check_name, "hasLength");
        assert_eq!(v.errors()[0].message, "Минимальная длина 3 символов");
    }

    #[test]
    fn test_fallback_flag_follows_locale() {
        let mut v = validator("1", RuleSet::new().is_alpha());
        v.set_settings(Settings::new(Locale::Ru));
        v.validate().unwrap();
        assert_eq!(
            v.error_for("isAlpha"),
            Some(&ErrorEntry::new("isAlpha", "Only Latin letters are allowed").with_fallback(true))
        );

        v.set_settings(Settings::new(Locale::En));
        v.validate().unwrap();
        assert_eq!(v.error_for("isAlpha").map(|e| e.fallback), Some(false));
    }

    #[test]
    fn test_custom_check_default_message_is_localized() {
        let mut v = validator("x", RuleSet::new());
        v.set_settings(Settings::new(Locale::Ru));
        assert_eq!(v.custom_check(|_| false, "unique", None), Ok(false));
        assert_eq!(
            v.error_for("unique").map(|e| e.message.as_str()),
            Some("Проверка unique не пройдена")
        );
    }

    #[test]
    fn test_custom_check_rejects_built_in_name() {
        let mut v = validator("ab", RuleSet::new().has_length(5, 0, 0));
        v.validate().unwrap();

        assert_eq!(
            v.custom_check(|_| true, "hasLength", None),
            Err(UsageError::ReservedCheckName {
                name: "hasLength".into()
            })
        );
        assert_eq!(
            v.error_for("hasLength").map(|e| e.message.as_str()),
            Some("Minimum length is 5 characters")
        );
    }

    #[test]
    fn test_usage_error_skips_callback_and_marker() {
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let mut v = FieldValidator::new(
            InputField::new("age", json!(7)),
            RuleSet::new().is_alpha(),
            Handlers::new().on_validation_finish(move |_| *counter.borrow_mut() += 1),
            Settings::default(),
        );

        assert!(matches!(
            v.validate(),
            Err(UsageError::NonStringValue { found: "number", .. })
        ));
        assert_eq!(*calls.borrow(), 0);
        assert_eq!(v.field().validity(), None);
    }

    #[test]
    fn test_reset_clears_marker() {
        let mut v = validator("1", RuleSet::new().is_alpha());
        v.validate().unwrap();
        v.reset();
        assert!(v.errors().is_empty());
        assert_eq!(v.field().validity(), None);
    }
}
