//! Locales, user settings and the message catalog
//!
//! Two locales are supported and that is the whole i18n story: messages
//! are produced by [`catalog::message`] from a typed
//! [`Reason`](crate::foundation::Reason), never by string templating.

pub mod catalog;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use catalog::{LocalizedMessage, MissingTranslation, message, missing_translations};

// ============================================================================
// LOCALE
// ============================================================================

/// A supported message locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English. The reference locale: every message exists in it.
    #[default]
    #[serde(rename = "EN", alias = "en")]
    En,
    /// Russian.
    #[serde(rename = "RU", alias = "ru")]
    Ru,
}

impl Locale {
    /// All supported locales, reference locale first.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ru];

    /// Upper-case locale code, as used in settings.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Ru => "RU",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when parsing a locale code that is not supported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{0}', expected EN or RU")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            code if code.eq_ignore_ascii_case("en") => Ok(Locale::En),
            code if code.eq_ignore_ascii_case("ru") => Ok(Locale::Ru),
            other => Err(UnknownLocale(other.to_owned())),
        }
    }
}

// ============================================================================
// SETTINGS
// ============================================================================

/// Per-validator settings supplied by the UI layer.
///
/// ```rust
/// use formkit_validator::i18n::{Locale, Settings};
///
/// let settings = Settings::from_json(r#"{ "currentLanguage": "RU" }"#).unwrap();
/// assert_eq!(settings.current_language, Locale::Ru);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Locale error messages are rendered in.
    #[serde(default)]
    pub current_language: Locale,
}

impl Settings {
    /// Creates settings for a locale.
    #[must_use]
    pub const fn new(current_language: Locale) -> Self {
        Self { current_language }
    }

    /// Parses settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
