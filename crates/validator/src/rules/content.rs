//! Character-class rules
//!
//! Each rule requires at least one password character from a fixed ASCII
//! class. Non-ASCII letters and digits never satisfy these rules.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{RuleId, SPECIAL_CHARACTERS};

static UPPERCASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[A-Z]").expect("uppercase class is a valid regex"));

static LOWERCASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[a-z]").expect("lowercase class is a valid regex"));

static DIGIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]").expect("digit class is a valid regex"));

static SPECIAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[{}]", regex::escape(SPECIAL_CHARACTERS)))
        .expect("escaped special set is a valid regex")
});

// ============================================================================
// UPPERCASE
// ============================================================================

crate::rule! {
    /// Validates that the password contains an ASCII uppercase letter (`A-Z`).
    pub HasUppercase => RuleId::Uppercase;
    check(pair) { UPPERCASE_REGEX.is_match(pair.password) }
    fn has_uppercase();
}

// ============================================================================
// LOWERCASE
// ============================================================================

crate::rule! {
    /// Validates that the password contains an ASCII lowercase letter (`a-z`).
    pub HasLowercase => RuleId::Lowercase;
    check(pair) { LOWERCASE_REGEX.is_match(pair.password) }
    fn has_lowercase();
}

// ============================================================================
// DIGIT
// ============================================================================

crate::rule! {
    /// Validates that the password contains an ASCII digit (`0-9`).
    pub HasDigit => RuleId::Digit;
    check(pair) { DIGIT_REGEX.is_match(pair.password) }
    fn has_digit();
}

// ============================================================================
// SPECIAL CHARACTER
// ============================================================================

crate::rule! {
    /// Validates that the password contains one of [`SPECIAL_CHARACTERS`].
    pub HasSpecial => RuleId::Special;
    check(pair) { SPECIAL_REGEX.is_match(pair.password) }
    fn has_special();
}

// ============================================================================
// TESTS
// ============================================================================
