//! The field a validator is bound to
//!
//! The engine reads the field's current value and writes back a validity
//! marker, the equivalent of a `data-valid` attribute that other parts of
//! the UI can query. Values are JSON values because that is what form state
//! holds; only strings can be validated.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::foundation::UsageError;

/// Outcome marker written to a field after each validation pass.
///
/// Serializes to its attribute form, `"true"` or `"false"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Validity {
    /// The last pass recorded no errors.
    #[serde(rename = "true")]
    Valid,
    /// The last pass recorded at least one error.
    #[serde(rename = "false")]
    Invalid,
}

impl Validity {
    /// Returns `Valid` when `is_valid` is true.
    #[must_use]
    pub const fn from_bool(is_valid: bool) -> Self {
        if is_valid {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }

    /// Attribute form of the marker: `"true"` or `"false"`.
    #[must_use]
    pub const fn as_attr(self) -> &'static str {
        match self {
            Validity::Valid => "true",
            Validity::Invalid => "false",
        }
    }
}

/// A field a [`FieldValidator`](crate::engine::FieldValidator) can be bound to.
pub trait BoundField {
    /// Name identifying the field within its form.
    fn name(&self) -> &str;

    /// Current value, or `None` when nothing is bound.
    fn value(&self) -> Option<&Value>;

    /// Records the outcome of the latest validation pass.
    fn mark(&mut self, validity: Validity);

    /// The marker written by the latest pass, `None` before the first one.
    fn validity(&self) -> Option<Validity>;

    /// Clears the validity marker.
    fn clear_mark(&mut self);
}

/// Reads the field's value as text, or explains why it cannot.
pub fn text_of<F: BoundField + ?Sized>(field: &F) -> Result<&str, UsageError> {
    match field.value() {
        None => Err(UsageError::FieldMissing {
            field: field.name().to_owned(),
        }),
        Some(Value::String(text)) => Ok(text),
        Some(other) => Err(UsageError::NonStringValue {
            field: field.name().to_owned(),
            found: kind_of(other),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// INPUT FIELD
// ============================================================================

/// A plain text input: a name, a value and a validity marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputField {
    name: String,
    value: Option<Value>,
    validity: Option<Validity>,
}

impl InputField {
    /// Creates a field holding a value.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            validity: None,
        }
    }

    /// Creates a field with no value bound yet.
    pub fn detached(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            validity: None,
        }
    }

    /// Replaces the current value.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = Some(value.into());
    }
}

impl BoundField for InputField {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    fn mark(&mut self, validity: Validity) {
        self.validity = Some(validity);
    }

    fn validity(&self) -> Option<Validity> {
        self.validity
    }

    fn clear_mark(&mut self) {
        self.validity = None;
    }
}
