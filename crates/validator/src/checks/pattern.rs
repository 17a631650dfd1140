//! String shape checks
//!
//! Both checks are deliberately narrow: `Alphabetic` accepts ASCII letters
//! only, and `Email` accepts anything shaped like `text@text.text`.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;

static ALPHA_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]*$").expect("alpha pattern compiles"));

// No whitespace anywhere, exactly one `@`, at least one dot after it.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

// ============================================================================
// ALPHABETIC
// ============================================================================

crate::validator! {
    /// Validates that a string contains only ASCII letters.
    ///
    /// The empty string passes; pair with a length rule to require input.
    pub Alphabetic for str;
    rule(input) { ALPHA_REGEX.is_match(input) }
    error(input) { ValidationError::not_alphabetic() }
    fn alphabetic();
}

// ============================================================================
// EMAIL
// ============================================================================

crate::validator! {
    /// Validates email shape: `text@text.text` without whitespace or a
    /// second `@`. This is not an RFC 5322 parser.
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_email() }
    fn email();
}

// ============================================================================
// TESTS
// ============================================================================
