//! Rule evaluation
//!
//! Runs every rule of a [`RuleSet`] against one [`CandidatePair`] and
//! collects all failures. Evaluation never short-circuits: a form must show
//! every outstanding problem at once.

use serde::Serialize;

use crate::foundation::{CandidatePair, Failure, Failures, Rule, RuleId, validate_with_all};
use crate::messages::{MessageOverrides, MessageTable};
use crate::rules::RuleSet;

// ============================================================================
// RESULT
// ============================================================================

/// Outcome of one evaluation.
///
/// `is_valid()` is true exactly when `failures()` is empty. Failures appear
/// in rule evaluation order, one per unsatisfied rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    failures: Failures,
    is_valid: bool,
}

impl ValidationResult {
    fn from_failures(failures: Failures) -> Self {
        let is_valid = failures.is_empty();
        Self { failures, is_valid }
    }

    /// Returns true when every rule was satisfied.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// The unsatisfied rules with their messages, in evaluation order.
    #[must_use]
    pub fn failures(&self) -> &[Failure] {
        self.failures.as_slice()
    }

    /// Ids of the unsatisfied rules, in evaluation order.
    pub fn failed_rules(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.failures.iter().map(|failure| failure.rule)
    }

    /// Messages of the unsatisfied rules, in evaluation order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(|failure| &*failure.message)
    }

    /// Returns true if `rule` failed.
    #[must_use]
    pub fn has_failed(&self, rule: RuleId) -> bool {
        self.failures.contains(rule)
    }

    /// Consumes the result, returning the failure collection.
    #[must_use]
    pub fn into_failures(self) -> Failures {
        self.failures
    }

    /// Converts to a `Result`, `Err` carrying every failure.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), Failures> {
        self.failures.into_result(())
    }
}

// ============================================================================
// EVALUATION
// ============================================================================

/// Evaluates `pair` against `rules`, labelling failures from `messages`.
///
/// Deterministic and total: every string pair produces a result. The pair's
/// contents are never logged.
#[must_use]
pub fn evaluate_with(
    rules: &RuleSet,
    pair: CandidatePair<'_>,
    messages: &MessageTable,
) -> ValidationResult {
    let checks: Vec<&dyn Rule> = rules.iter().collect();
    let failures = match validate_with_all(&pair, &checks) {
        Ok(()) => Failures::new(),
        Err(failures) => failures
            .into_iter()
            .map(|failure| {
                tracing::trace!(rule = %failure.rule, "rule not satisfied");
                let message = messages.message(failure.rule);
                failure.with_message(message)
            })
            .collect(),
    };

    let result = ValidationResult::from_failures(failures);
    tracing::debug!(
        rules = rules.len(),
        failures = result.failures.len(),
        is_valid = result.is_valid,
        "evaluated candidate pair"
    );
    result
}

/// Evaluates a password and confirmation against the standard rules.
///
/// Unspecified overrides fall back to the built-in messages.
///
/// # Examples
///
/// ```rust,ignore
/// use passgate_validator::{RuleId, evaluate};
///
/// let result = evaluate("Tes1!", "Tes1!", None);
/// assert_eq!(result.failed_rules().collect::<Vec<_>>(), vec![RuleId::MinLength]);
/// ```
#[must_use]
pub fn evaluate(
    candidate: &str,
    confirmation: &str,
    overrides: Option<&MessageOverrides>,
) -> ValidationResult {
    let rules = RuleSet::standard();
    let messages = match overrides {
        Some(overrides) => rules.merge(overrides),
        None => rules.default_messages(),
    };
    evaluate_with(rules, CandidatePair::new(candidate, confirmation), &messages)
}

/// The built-in message for every rule, usable before any input exists.
#[must_use]
pub fn default_messages() -> MessageTable {
    MessageTable::defaults()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{has_digit, min_length};
    use pretty_assertions::assert_eq;

    fn failed(result: &ValidationResult) -> Vec<RuleId> {
        result.failed_rules().collect()
    }

    #[test]
    fn test_valid_password() {
        let result = evaluate("Test123!", "Test123!", None);
        assert!(result.is_valid());
        assert!(result.failures().is_empty());
    }

    #[test]
    fn test_mismatch_only() {
        let result = evaluate("Test123!", "Test123!!", None);
        assert_eq!(failed(&result), vec![RuleId::Mismatch]);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_empty_pair() {
        let result = evaluate("", "", None);
        assert_eq!(
            failed(&result),
            vec![
                RuleId::MinLength,
                RuleId::Uppercase,
                RuleId::Lowercase,
                RuleId::Digit,
                RuleId::Special,
            ]
        );
    }

    #[test]
    fn test_everything_fails_in_declaration_order() {
        // Short, no classes, and mismatched.
        let result = evaluate(" ", "", None);
        assert_eq!(failed(&result), RuleId::ALL.to_vec());
    }

    #[test]
    fn test_overrides_replace_only_named_messages() {
        let overrides = MessageOverrides::new().with(RuleId::Uppercase, "Add a capital");
        let result = evaluate("test1", "test1", Some(&overrides));

        let messages: Vec<_> = result.messages().collect();
        assert_eq!(
            messages,
            vec![
                "Password must be at least 6 characters long",
                "Add a capital",
                r#"Password must contain at least one special character (!@#$%^&*()_-+={[}]|:;"'<,>.)"#,
            ]
        );
    }

    #[test]
    fn test_custom_rule_set() {
        let rules = RuleSet::builder().rule(min_length(8)).rule(has_digit()).build();
        let result = rules.evaluate(CandidatePair::new("abcdefg", "zzz"), &default_messages());
        assert_eq!(failed(&result), vec![RuleId::MinLength, RuleId::Digit]);
        assert!(result.has_failed(RuleId::Digit));
        assert!(!result.has_failed(RuleId::Mismatch));
    }

    #[test]
    fn test_relabels_collected_failures() {
        let pair = CandidatePair::new("abc", "abd");
        let rules = RuleSet::standard();
        let checks: Vec<&dyn Rule> = rules.iter().collect();
        let collected = validate_with_all(&pair, &checks).unwrap_err();

        let overrides = MessageOverrides::new().with(RuleId::Mismatch, "Passwords don't match");
        let result = rules.evaluate(pair, &rules.merge(&overrides));

        assert_eq!(
            failed(&result),
            collected.iter().map(|failure| failure.rule).collect::<Vec<_>>()
        );
        assert_eq!(result.failures()[0].message, "Passwords don't match");
        assert_eq!(result.failures()[1].message, collected.as_slice()[1].message);
    }

    #[test]
    fn test_into_result() {
        assert!(evaluate("Test123!", "Test123!", None).into_result().is_ok());

        let failures = evaluate("Test123!", "nope", None).into_result().unwrap_err();
        assert_eq!(failures.len(), 1);
    }

    #[test]
    fn test_serializes_for_presentation() {
        let value = serde_json::to_value(evaluate("Tes1!", "Tes1!", None)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "failures": [
                    { "rule": "min_length", "message": "Password must be at least 6 characters long" }
                ],
                "is_valid": false
            })
        );
    }
}
