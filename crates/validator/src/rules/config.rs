//! Declarative rule configuration
//!
//! The UI layer describes rules as a JSON mapping from rule name to rule
//! configuration:
//!
//! ```json
//! { "hasLength": { "min": 3, "max": 20 }, "isAlpha": true, "isEmail": false }
//! ```
//!
//! Entries run in document order. A falsy entry (`false`, `0`, `null`, `""`)
//! disables its rule. Custom predicates cannot be expressed here; add them
//! to the parsed [`RuleSet`] with [`RuleSet::custom`].

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use super::{Rule, RuleSet};
use crate::checks::LengthBounds;
use crate::foundation::{HAS_LENGTH, IS_ALPHA, IS_EMAIL};

/// Errors raised while building a [`RuleSet`] from its declarative form.
#[derive(Debug, thiserror::Error)]
pub enum RuleConfigError {
    /// The document is not a JSON object.
    #[error("invalid rule configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A rule name the engine does not know.
    #[error("unknown rule '{name}'")]
    UnknownRule {
        /// The offending key.
        name: String,
    },

    /// A known rule with a malformed body.
    #[error("invalid configuration for rule '{name}': {reason}")]
    InvalidRule {
        /// The rule name.
        name: String,
        /// What was wrong with it.
        reason: String,
    },
}

/// Body of a `hasLength` entry. Missing bounds are unset.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LengthConfig {
    #[serde(default)]
    min: usize,
    #[serde(default)]
    max: usize,
    #[serde(default)]
    exact: usize,
}

impl From<LengthConfig> for LengthBounds {
    fn from(config: LengthConfig) -> Self {
        LengthBounds::new(config.min, config.max, config.exact)
    }
}

impl RuleSet {
    /// Parses a rule set from its JSON mapping form, keeping document order.
    ///
    /// ```rust
    /// use formkit_validator::rules::RuleSet;
    ///
    /// let rules = RuleSet::from_json(r#"{ "isEmail": true, "hasLength": { "max": 64 } }"#)?;
    /// assert_eq!(rules.check_names().collect::<Vec<_>>(), ["isEmail", "hasLength"]);
    /// # Ok::<(), formkit_validator::rules::RuleConfigError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self, RuleConfigError> {
        let entries: IndexMap<String, Value> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Builds a rule set from already parsed `(name, configuration)` entries.
    pub fn from_entries<I>(entries: I) -> Result<Self, RuleConfigError>
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let mut rules = RuleSet::new();
        for (name, config) in entries {
            if let Some(rule) = parse_rule(&name, config)? {
                rules.push(rule);
            } else {
                tracing::trace!(rule = %name, "rule disabled by falsy configuration");
            }
        }
        Ok(rules)
    }
}

fn parse_rule(name: &str, config: Value) -> Result<Option<Rule>, RuleConfigError> {
    let rule = match name {
        HAS_LENGTH | IS_ALPHA | IS_EMAIL if !is_truthy(&config) => return Ok(None),
        HAS_LENGTH => {
            if !config.is_object() {
                return Err(invalid(name, "expected an object with min, max or exact"));
            }
            let bounds: LengthConfig =
                serde_json::from_value(config).map_err(|e| invalid(name, e.to_string()))?;
            Rule::Length(bounds.into())
        }
        IS_ALPHA => Rule::Alpha,
        IS_EMAIL => Rule::Email,
        other => {
            return Err(RuleConfigError::UnknownRule {
                name: other.to_owned(),
            });
        }
    };
    Ok(Some(rule))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn invalid(name: &str, reason: impl Into<String>) -> RuleConfigError {
    RuleConfigError::InvalidRule {
        name: name.to_owned(),
        reason: reason.into(),
    }
}
