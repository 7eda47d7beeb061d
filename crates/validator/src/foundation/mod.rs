//! Core rule types and traits
//!
//! This module contains the fundamental building blocks of the rule system:
//!
//! - **Input**: `CandidatePair`
//! - **Identity**: `RuleId` and the canonical constants
//! - **Traits**: `Rule`
//! - **Errors**: `Failure`, `Failures`, `ParseRuleIdError`
//!
//! # Architecture
//!
//! ## 1. Pure predicates
//!
//! A rule only inspects the pair it is given. There is no hidden state, so
//! evaluating the same pair twice always yields the same outcome:
//!
//! ```rust,ignore
//! use passgate_validator::foundation::{CandidatePair, Rule};
//! use passgate_validator::rules::has_digit;
//!
//! let pair = CandidatePair::new("abc1", "abc1");
//! assert_eq!(has_digit().validate(&pair), has_digit().validate(&pair));
//! ```
//!
//! ## 2. Failures are data
//!
//! An unsatisfied rule yields a [`Failure`] value carrying its [`RuleId`]
//! and message. Nothing in the crate panics or returns an error for any
//! string input.

pub mod error;
pub mod pair;
pub mod rule_id;
pub mod traits;

pub use error::{Failure, Failures, ParseRuleIdError};
pub use pair::CandidatePair;
pub use rule_id::{MIN_PASSWORD_LENGTH, RuleId, SPECIAL_CHARACTERS};
pub use traits::Rule;

/// Checks a pair against several rules without short-circuiting.
///
/// Every rule runs; each unsatisfied one contributes its default-message
/// failure in slice order.
///
/// # Examples
///
/// ```rust,ignore
/// use passgate_validator::foundation::{CandidatePair, validate_with_all};
/// use passgate_validator::rules::{has_digit, has_uppercase};
///
/// let result = validate_with_all(&CandidatePair::new("abc", "abc"), &[&has_uppercase(), &has_digit()]);
/// assert_eq!(result.unwrap_err().len(), 2);
/// ```
pub fn validate_with_all(pair: &CandidatePair<'_>, rules: &[&dyn Rule]) -> Result<(), Failures> {
    rules
        .iter()
        .filter_map(|rule| rule.validate(pair).err())
        .collect::<Failures>()
        .into_result(())
}

#[cfg(test)]
mod core_tests {
    use super::*;

    #[derive(Debug)]
    struct NeedsConfirmation;

    impl Rule for NeedsConfirmation {
        fn id(&self) -> RuleId {
            RuleId::Mismatch
        }

        fn is_satisfied(&self, pair: &CandidatePair<'_>) -> bool {
            pair.is_confirmed()
        }
    }

    #[derive(Debug)]
    struct NeverSatisfied;

    impl Rule for NeverSatisfied {
        fn id(&self) -> RuleId {
            RuleId::Lowercase
        }

        fn is_satisfied(&self, _pair: &CandidatePair<'_>) -> bool {
            false
        }
    }

    #[test]
    fn test_validate_with_all_success() {
        let pair = CandidatePair::new("a", "a");
        assert!(validate_with_all(&pair, &[&NeedsConfirmation]).is_ok());
    }

    #[test]
    fn test_validate_with_all_collects_every_failure() {
        let pair = CandidatePair::new("a", "b");
        let failures = validate_with_all(&pair, &[&NeverSatisfied, &NeedsConfirmation]).unwrap_err();
        let rules: Vec<_> = failures.iter().map(|f| f.rule).collect();
        assert_eq!(rules, vec![RuleId::Lowercase, RuleId::Mismatch]);
    }
}
