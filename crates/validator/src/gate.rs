//! Submission gate
//!
//! On each submit the latest pair is evaluated from scratch. The accept
//! callback runs exactly once, with the password, and only when every rule
//! passes. There is no retained dirty or touched tracking.
//!
//! [`FormState`] is the caller-owned state a form keeps between renders:
//! the two inputs plus the outcome of the last submission.

use std::fmt;

use crate::evaluator::ValidationResult;
use crate::foundation::{CandidatePair, Failure, Failures};
use crate::messages::MessageTable;
use crate::rules::RuleSet;

/// Status text shown after an accepted submission.
pub const SUCCESS_MESSAGE: &str = "Password is valid!";

// ============================================================================
// SUBMISSION
// ============================================================================

/// Outcome of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Every rule passed and the accept callback was invoked.
    Accepted,
    /// At least one rule failed; the callback was not invoked.
    Rejected(ValidationResult),
}

impl Submission {
    /// Returns true if the accept callback was invoked.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted)
    }

    /// Failures to render; empty when accepted.
    #[must_use]
    pub fn failures(&self) -> &[Failure] {
        match self {
            Submission::Accepted => &[],
            Submission::Rejected(result) => result.failures(),
        }
    }

    /// Success indicator to render instead of failures.
    #[must_use]
    pub fn status_message(&self) -> Option<&'static str> {
        match self {
            Submission::Accepted => Some(SUCCESS_MESSAGE),
            Submission::Rejected(_) => None,
        }
    }
}

/// Evaluates `pair` and, only if it is valid, calls `on_accept` with the
/// password.
pub fn submit<F>(
    rules: &RuleSet,
    pair: CandidatePair<'_>,
    messages: &MessageTable,
    on_accept: F,
) -> Submission
where
    F: FnOnce(&str),
{
    let result = rules.evaluate(pair, messages);
    if result.is_valid() {
        tracing::debug!("submission accepted");
        on_accept(pair.password);
        Submission::Accepted
    } else {
        tracing::debug!(failures = result.failures().len(), "submission rejected");
        Submission::Rejected(result)
    }
}

// ============================================================================
// FORM STATE
// ============================================================================

/// Caller-owned form state: the two inputs and the last submission outcome.
///
/// Editing an input does not clear the displayed outcome; only the next
/// [`submit`](FormState::submit) replaces it.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormState {
    password: String,
    confirmation: String,
    failures: Failures,
    is_valid: bool,
}

impl FormState {
    /// Empty inputs, no failures, not yet valid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the password input.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Replaces the confirmation input.
    pub fn set_confirmation(&mut self, confirmation: impl Into<String>) {
        self.confirmation = confirmation.into();
    }

    /// The current password input.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// The current confirmation input.
    #[must_use]
    pub fn confirmation(&self) -> &str {
        &self.confirmation
    }

    /// Failures from the last submission.
    #[must_use]
    pub fn failures(&self) -> &[Failure] {
        self.failures.as_slice()
    }

    /// True after a submission that passed every rule.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// [`SUCCESS_MESSAGE`] after an accepted submission.
    #[must_use]
    pub fn status_message(&self) -> Option<&'static str> {
        self.is_valid.then_some(SUCCESS_MESSAGE)
    }

    /// The current inputs as a pair.
    #[must_use]
    pub fn pair(&self) -> CandidatePair<'_> {
        CandidatePair::new(&self.password, &self.confirmation)
    }

    /// Re-evaluates the current inputs and records the outcome.
    ///
    /// Returns true when the submission was accepted and `on_accept` ran.
    pub fn submit<F>(&mut self, rules: &RuleSet, messages: &MessageTable, on_accept: F) -> bool
    where
        F: FnOnce(&str),
    {
        let outcome = submit(rules, self.pair(), messages, on_accept);
        self.is_valid = outcome.is_accepted();
        self.failures = match outcome {
            Submission::Accepted => Failures::new(),
            Submission::Rejected(result) => result.into_failures(),
        };
        self.is_valid
    }
}

impl fmt::Debug for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormState")
            .field("password", &"<redacted>")
            .field("confirmation", &"<redacted>")
            .field("failures", &self.failures)
            .field("is_valid", &self.is_valid)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
