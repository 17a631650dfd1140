//! Rule sets
//!
//! A [`RuleSet`] is the full declarative configuration of checks for one
//! field. Rules are a closed sum type dispatched with `match`; the only open
//! extension point is [`Rule::Custom`].
//!
//! ```rust
//! use formkit_validator::rules::RuleSet;
//!
//! let rules = RuleSet::new().has_length(3, 20, 0).is_alpha();
//! assert_eq!(rules.check_names().collect::<Vec<_>>(), ["hasLength", "isAlpha"]);
//! ```

pub mod config;

use crate::checks::{LengthBounds, Predicate, alphabetic, email};
use crate::foundation::{HAS_LENGTH, IS_ALPHA, IS_EMAIL, UsageError, Validate, ValidationError};

pub use config::RuleConfigError;

// ============================================================================
// RULE
// ============================================================================

/// One independently configurable check.
#[derive(Debug, Clone)]
pub enum Rule {
    /// `hasLength`: character count bounds.
    Length(LengthBounds),
    /// `isAlpha`: ASCII letters only.
    Alpha,
    /// `isEmail`: `text@text.text` shape.
    Email,
    /// A named caller-supplied predicate.
    Custom(Predicate),
}

impl Rule {
    /// Name the rule's error entries are recorded under.
    #[must_use]
    pub fn check_name(&self) -> &str {
        match self {
            Rule::Length(_) => HAS_LENGTH,
            Rule::Alpha => IS_ALPHA,
            Rule::Email => IS_EMAIL,
            Rule::Custom(predicate) => predicate.name(),
        }
    }
}

impl Validate for Rule {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self {
            Rule::Length(bounds) => bounds.validate(input),
            Rule::Alpha => alphabetic().validate(input),
            Rule::Email => email().validate(input),
            Rule::Custom(predicate) => predicate.validate(input),
        }
    }
}

impl From<LengthBounds> for Rule {
    fn from(bounds: LengthBounds) -> Self {
        Rule::Length(bounds)
    }
}

impl From<Predicate> for Rule {
    fn from(predicate: Predicate) -> Self {
        Rule::Custom(predicate)
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// Ordered rules for one field. Each check name appears at most once.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a rule. A rule with the same check name is replaced in place,
    /// keeping its original position.
    pub fn push(&mut self, rule: impl Into<Rule>) {
        let rule = rule.into();
        match self
            .rules
            .iter_mut()
            .find(|existing| existing.check_name() == rule.check_name())
        {
            Some(existing) => *existing = rule,
            None => self.rules.push(rule),
        }
    }

    /// Builder form of [`push`](Self::push).
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, rule: impl Into<Rule>) -> Self {
        self.push(rule);
        self
    }

    /// Adds a `hasLength` rule. Zero bounds are unset.
    #[must_use = "builder methods must be chained or built"]
    pub fn has_length(self, min: usize, max: usize, exact: usize) -> Self {
        self.with(LengthBounds::new(min, max, exact))
    }

    /// Adds the `isAlpha` rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_alpha(self) -> Self {
        self.with(Rule::Alpha)
    }

    /// Adds the `isEmail` rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn is_email(self) -> Self {
        self.with(Rule::Email)
    }

    /// Adds a named predicate rule with an optional fixed failure message.
    ///
    /// Fails with [`UsageError::EmptyCheckName`] when `name` is empty and
    /// with [`UsageError::ReservedCheckName`] when it is the name of a
    /// built-in rule, so a custom check never displaces one.
    pub fn custom<F>(
        self,
        name: impl Into<String>,
        message: Option<&str>,
        predicate: F,
    ) -> Result<Self, UsageError>
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let name: String = name.into();
        let mut check = Predicate::new(name, predicate)?;
        if let Some(message) = message {
            check = check.with_message(message.to_owned());
        }
        Ok(self.with(check))
    }

    /// Removes the rule recorded under `check`, returning it.
    pub fn remove(&mut self, check: &str) -> Option<Rule> {
        let index = self.rules.iter().position(|r| r.check_name() == check)?;
        Some(self.rules.remove(index))
    }

    /// The configured length bounds, if a `hasLength` rule is present.
    #[must_use]
    pub fn length(&self) -> Option<LengthBounds> {
        self.rules.iter().find_map(|rule| match rule {
            Rule::Length(bounds) => Some(*bounds),
            _ => None,
        })
    }

    /// Returns `true` if a rule is recorded under `check`.
    #[must_use]
    pub fn contains(&self, check: &str) -> bool {
        self.rules.iter().any(|r| r.check_name() == check)
    }

    /// Check names in run order.
    pub fn check_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.rules.iter().map(Rule::check_name)
    }

    /// Rules in run order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        let mut set = RuleSet::new();
        for rule in iter {
            set.push(rule);
        }
        set
    }
}

// ============================================================================
// TESTS
// ============================================================================
