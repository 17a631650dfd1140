//! Form-wide state and event routing

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

use formkit_validator::engine::{ErrorEntry, FieldValidator, Handlers};
use formkit_validator::field::{BoundField, InputField};
use formkit_validator::i18n::{Locale, Settings};
use formkit_validator::rules::RuleSet;

use crate::FormError;

/// Outcome of [`FormController::submit`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormReport {
    /// `true` when no field has a failing check.
    pub valid: bool,
    /// Failing fields only, in registration order.
    pub errors: IndexMap<String, Vec<ErrorEntry>>,
    /// Every field's current value, in registration order.
    pub values: Map<String, Value>,
}

/// Owns the validators and aggregated state of one form.
///
/// The aggregated error map holds the list returned by each field's latest
/// validation pass. Passes for different fields are independent; the last
/// pass per field wins.
#[derive(Debug)]
pub struct FormController {
    settings: Settings,
    fields: IndexMap<String, FieldValidator<InputField>>,
    errors: IndexMap<String, Vec<ErrorEntry>>,
}

impl FormController {
    /// Creates an empty form.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            fields: IndexMap::new(),
            errors: IndexMap::new(),
        }
    }

    /// Registers a field with an empty value, replacing any field of the
    /// same name.
    pub fn register_field(
        &mut self,
        name: impl Into<String>,
        rules: RuleSet,
    ) -> &mut FieldValidator<InputField> {
        self.register_field_with(name, rules, Handlers::new())
    }

    /// Registers a field with its own finish callback.
    pub fn register_field_with(
        &mut self,
        name: impl Into<String>,
        rules: RuleSet,
        handlers: Handlers,
    ) -> &mut FieldValidator<InputField> {
        let name = name.into();
        let validator =
            FieldValidator::new(InputField::new(name.clone(), ""), rules, handlers, self.settings);
        self.errors.shift_remove(&name);
        match self.fields.entry(name) {
            indexmap::map::Entry::Occupied(mut slot) => {
                slot.insert(validator);
                slot.into_mut()
            }
            indexmap::map::Entry::Vacant(slot) => slot.insert(validator),
        }
    }

    /// Removes a field and its recorded errors, as when it unmounts.
    pub fn unregister_field(&mut self, name: &str) -> Option<FieldValidator<InputField>> {
        self.errors.shift_remove(name);
        self.fields.shift_remove(name)
    }

    /// Updates a field's value. Does not validate.
    pub fn set_value(&mut self, name: &str, value: impl Into<Value>) -> Result<(), FormError> {
        self.field_mut(name)?.field_mut().set_value(value);
        Ok(())
    }

    /// Validates one field, as on blur, and stores its error list.
    pub fn blur(&mut self, name: &str) -> Result<&[ErrorEntry], FormError> {
        let errors = self.field_mut(name)?.validate()?.to_vec();
        tracing::trace!(field = name, errors = errors.len(), "field validated");
        let slot = self.errors.entry(name.to_owned()).or_default();
        *slot = errors;
        Ok(slot)
    }

    /// Validates every field and reports the whole form.
    ///
    /// Stops at the first usage error; fields validated before it keep
    /// their fresh lists.
    pub fn submit(&mut self) -> Result<FormReport, FormError> {
        let names: Vec<String> = self.fields.keys().cloned().collect();
        for name in &names {
            self.blur(name)?;
        }

        let errors: IndexMap<String, Vec<ErrorEntry>> = self
            .errors
            .iter()
            .filter(|(_, list)| !list.is_empty())
            .map(|(name, list)| (name.clone(), list.clone()))
            .collect();
        let report = FormReport {
            valid: errors.is_empty(),
            errors,
            values: self.values(),
        };
        tracing::debug!(
            fields = self.fields.len(),
            failing = report.errors.len(),
            valid = report.valid,
            "form submitted"
        );
        Ok(report)
    }

    /// Switches every field to a new locale.
    ///
    /// Fields that were already validated are validated again so their
    /// messages change language immediately.
    pub fn set_language(&mut self, locale: Locale) -> Result<(), FormError> {
        self.settings = Settings::new(locale);
        for validator in self.fields.values_mut() {
            validator.set_settings(self.settings);
        }
        let validated: Vec<String> = self.errors.keys().cloned().collect();
        for name in &validated {
            self.blur(name)?;
        }
        Ok(())
    }

    /// Latest error list of a field; empty when it passed or never ran.
    #[must_use]
    pub fn errors_for(&self, name: &str) -> &[ErrorEntry] {
        self.errors.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns `true` when no stored error list has entries.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.values().all(Vec::is_empty)
    }

    /// Snapshot of every field's current value.
    #[must_use]
    pub fn values(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|(name, validator)| {
                let value = validator.field().value().cloned().unwrap_or(Value::Null);
                (name.clone(), value)
            })
            .collect()
    }

    /// The validator registered under `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldValidator<InputField>> {
        self.fields.get(name)
    }

    /// Current settings.
    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Clears every field's errors and validity marker. Values are kept.
    pub fn reset(&mut self) {
        for validator in self.fields.values_mut() {
            validator.reset();
        }
        self.errors.clear();
    }

    fn field_mut(&mut self, name: &str) -> Result<&mut FieldValidator<InputField>, FormError> {
        self.fields
            .get_mut(name)
            .ok_or_else(|| FormError::unknown(name))
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
