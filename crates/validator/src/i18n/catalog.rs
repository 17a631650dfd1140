//! Message catalog
//!
//! `message(reason, check, locale)` is the single entry point that turns a
//! failed check into user-facing text.
//!
//! # Fallback policy
//!
//! English is the reference locale and [`english`] is total: the `match`
//! over [`Reason`] is exhaustive, so a new reason cannot ship without an
//! English message. Other locales may have gaps. When the requested locale
//! has no entry, [`message`] returns the English text, records the locale
//! actually used in [`LocalizedMessage::locale`], and logs a warning. It never
//! returns an empty string. [`missing_translations`] lists the known gaps.

use crate::foundation::Reason;
use crate::i18n::Locale;

/// A rendered message together with the locale it was rendered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedMessage {
    /// The message text.
    pub text: String,
    /// Locale the text is actually in.
    pub locale: Locale,
    /// Locale the caller asked for.
    pub requested: Locale,
}

impl LocalizedMessage {
    /// Returns `true` when the requested locale had no entry.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.locale != self.requested
    }
}

/// A reason kind with no entry in a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MissingTranslation {
    /// The [`Reason::kind`] lacking a message.
    pub kind: &'static str,
    /// The locale lacking it.
    pub locale: Locale,
}

/// Renders the message for a failed check in the requested locale,
/// applying the English fallback.
#[must_use]
pub fn message(reason: &Reason, check: &str, locale: Locale) -> LocalizedMessage {
    if let Some(text) = translate(reason, check, locale) {
        return LocalizedMessage {
            text,
            locale,
            requested: locale,
        };
    }

    tracing::warn!(
        check,
        kind = reason.kind(),
        requested = %locale,
        "missing translation, falling back to EN"
    );
    LocalizedMessage {
        text: english(reason, check),
        locale: Locale::En,
        requested: locale,
    }
}

/// Looks up the message for a locale without any fallback.
#[must_use]
pub fn translate(reason: &Reason, check: &str, locale: Locale) -> Option<String> {
    match locale {
        Locale::En => Some(english(reason, check)),
        Locale::Ru => russian(reason, check),
    }
}

/// English messages.
#[must_use]
pub fn english(reason: &Reason, check: &str) -> String {
    match *reason {
        Reason::TooShort { min, .. } => format!("Minimum length is {min} characters"),
        Reason::TooLong { max, .. } => format!("Maximum length is {max} characters"),
        Reason::WrongLength { exact, .. } => format!("Length must be exactly {exact} characters"),
        Reason::NotAlphabetic => "Only Latin letters are allowed".to_owned(),
        Reason::InvalidEmail => "Enter a valid email address".to_owned(),
        Reason::PredicateFailed => format!("{check} check failed"),
    }
}

fn russian(reason: &Reason, check: &str) -> Option<String> {
    let text = match *reason {
        Reason::TooShort { min, .. } => format!("Минимальная длина {min} символов"),
        Reason::TooLong { max, .. } => format!("Максимальная длина {max} символов"),
        Reason::WrongLength { exact, .. } => format!("Длина должна быть ровно {exact} символов"),
        Reason::NotAlphabetic => return None,
        Reason::InvalidEmail => "Введите корректный адрес электронной почты".to_owned(),
        Reason::PredicateFailed => format!("Проверка {check} не пройдена"),
    };
    Some(text)
}

/// One representative of every reason kind.
static EVERY_REASON: [Reason; 6] = [
    Reason::TooShort { min: 1, actual: 0 },
    Reason::TooLong { max: 1, actual: 2 },
    Reason::WrongLength { exact: 1, actual: 2 },
    Reason::NotAlphabetic,
    Reason::InvalidEmail,
    Reason::PredicateFailed,
];

/// Lists every `(reason kind, locale)` pair with no catalog entry.
#[must_use]
pub fn missing_translations() -> Vec<MissingTranslation> {
    Locale::ALL
        .iter()
        .flat_map(|&locale| {
            EVERY_REASON
                .iter()
                .filter(move |reason| translate(reason, "check", locale).is_none())
                .map(move |reason| MissingTranslation {
                    kind: reason.kind(),
                    locale,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_is_never_fallback() {
        for reason in &EVERY_REASON {
            let msg = message(reason, "check", Locale::En);
            assert!(!msg.is_fallback());
            assert!(!msg.text.is_empty());
        }
    }

    #[test]
    fn test_russian_length_message() {
        let msg = message(&Reason::TooShort { min: 3, actual: 1 }, "hasLength", Locale::Ru);
        insta::assert_snapshot!(msg.text, @"Минимальная длина 3 символов");
        assert!(!msg.is_fallback());
    }

    #[test]
    fn test_alpha_falls_back_to_english_in_russian() {
        let msg = message(&Reason::NotAlphabetic, "isAlpha", Locale::Ru);
        assert!(msg.is_fallback());
        assert_eq!(msg.locale, Locale::En);
        assert_eq!(msg.requested, Locale::Ru);
        assert_eq!(msg.text, "Only Latin letters are allowed");
    }

    #[test]
    fn test_translate_has_no_fallback() {
        assert_eq!(translate(&Reason::NotAlphabetic, "isAlpha", Locale::Ru), None);
    }

    #[test]
    fn test_predicate_message_names_check() {
        insta::assert_snapshot!(
            english(&Reason::PredicateFailed, "unique"),
            @"unique check failed"
        );
    }

    #[test]
    fn test_known_gaps() {
        assert_eq!(
            missing_translations(),
            vec![MissingTranslation {
                kind: "notAlphabetic",
                locale: Locale::Ru,
            }]
        );
    }
}
