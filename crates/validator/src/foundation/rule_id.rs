//! Rule identifiers
//!
//! Every rule in a [`RuleSet`](crate::rules::RuleSet) is tagged with a
//! [`RuleId`]. The id is the key for message tables and overrides, and the
//! declaration order of the variants is the canonical evaluation order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::ParseRuleIdError;

/// Minimum number of characters a password must contain.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Characters accepted by the special-character rule.
///
/// This set is fixed: `~`, backtick and whitespace are not special.
pub const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*()_-+={[}]|:;"'<,>."#;

/// Identifies one of the built-in password rules.
///
/// Variants are declared in evaluation order, so `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    /// Password and confirmation must be identical.
    Mismatch,
    /// Password must be at least [`MIN_PASSWORD_LENGTH`] characters.
    MinLength,
    /// Password must contain an ASCII uppercase letter.
    Uppercase,
    /// Password must contain an ASCII lowercase letter.
    Lowercase,
    /// Password must contain an ASCII digit.
    Digit,
    /// Password must contain one of [`SPECIAL_CHARACTERS`].
    Special,
}

impl RuleId {
    /// Number of rule ids.
    pub const COUNT: usize = 6;

    /// All rule ids in evaluation order.
    pub const ALL: [RuleId; Self::COUNT] = [
        RuleId::Mismatch,
        RuleId::MinLength,
        RuleId::Uppercase,
        RuleId::Lowercase,
        RuleId::Digit,
        RuleId::Special,
    ];

    /// Stable snake_case code, used for serialization and display.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            RuleId::Mismatch => "mismatch",
            RuleId::MinLength => "min_length",
            RuleId::Uppercase => "uppercase",
            RuleId::Lowercase => "lowercase",
            RuleId::Digit => "digit",
            RuleId::Special => "special",
        }
    }

    /// camelCase key used by form components for message overrides.
    #[must_use]
    pub const fn prop_name(self) -> &'static str {
        match self {
            RuleId::Mismatch => "passwordMismatch",
            RuleId::MinLength => "minLength",
            RuleId::Uppercase => "uppercase",
            RuleId::Lowercase => "lowercase",
            RuleId::Digit => "number",
            RuleId::Special => "special",
        }
    }

    /// Built-in failure message.
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            RuleId::Mismatch => "Passwords do not match",
            RuleId::MinLength => "Password must be at least 6 characters long",
            RuleId::Uppercase => "Password must contain at least one uppercase letter",
            RuleId::Lowercase => "Password must contain at least one lowercase letter",
            RuleId::Digit => "Password must contain at least one number",
            RuleId::Special => {
                r#"Password must contain at least one special character (!@#$%^&*()_-+={[}]|:;"'<,>.)"#
            }
        }
    }

    /// Short requirement label, suitable for a checklist shown before any input.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            RuleId::Mismatch => "Matches confirmation",
            RuleId::MinLength => "At least 6 characters long",
            RuleId::Uppercase => "Contains uppercase letter",
            RuleId::Lowercase => "Contains lowercase letter",
            RuleId::Digit => "Contains number",
            RuleId::Special => "Contains special character",
        }
    }

    /// Position of this id in [`RuleId::ALL`].
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for RuleId {
    type Err = ParseRuleIdError;

    /// Accepts either the snake_case [`code`](RuleId::code) or the
    /// camelCase [`prop_name`](RuleId::prop_name).
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        RuleId::ALL
            .into_iter()
            .find(|id| id.code() == key || id.prop_name() == key)
            .ok_or_else(|| ParseRuleIdError {
                key: key.to_owned(),
            })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_declaration_order() {
        for (position, id) in RuleId::ALL.iter().enumerate() {
            assert_eq!(id.index(), position);
        }
        let mut sorted = RuleId::ALL;
        sorted.sort();
        assert_eq!(sorted, RuleId::ALL);
    }

    #[test]
    fn test_parse_codes_and_prop_names() {
        assert_eq!("min_length".parse::<RuleId>().unwrap(), RuleId::MinLength);
        assert_eq!("minLength".parse::<RuleId>().unwrap(), RuleId::MinLength);
        assert_eq!("passwordMismatch".parse::<RuleId>().unwrap(), RuleId::Mismatch);
        assert_eq!("number".parse::<RuleId>().unwrap(), RuleId::Digit);
        assert_eq!("digit".parse::<RuleId>().unwrap(), RuleId::Digit);
    }

    #[test]
    fn test_parse_unknown_key() {
        let err = "maxLength".parse::<RuleId>().unwrap_err();
        assert_eq!(err.key, "maxLength");
        assert!("MinLength".parse::<RuleId>().is_err());
    }

    #[test]
    fn test_display_uses_code() {
        assert_eq!(RuleId::Special.to_string(), "special");
        assert_eq!(RuleId::MinLength.to_string(), "min_length");
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&RuleId::MinLength).unwrap();
        assert_eq!(json, "\"min_length\"");
        let id: RuleId = serde_json::from_str("\"digit\"").unwrap();
        assert_eq!(id, RuleId::Digit);
    }

    #[test]
    fn test_special_message_lists_the_set() {
        assert!(RuleId::Special.default_message().contains(SPECIAL_CHARACTERS));
    }
}
