//! Failure types for unsatisfied rules
//!
//! A failing rule is ordinary data, not a fault: [`Failure`] pairs the
//! [`RuleId`] with the message to show, and [`Failures`] keeps them in
//! evaluation order.
//!
//! Messages use `Cow<'static, str>` so built-in messages are never
//! allocated.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

use crate::foundation::RuleId;

// ============================================================================
// FAILURE
// ============================================================================

/// One unsatisfied rule and the message to display for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Failure {
    /// The rule that was not satisfied.
    pub rule: RuleId,

    /// Human-readable message, either the built-in default or an override.
    pub message: Cow<'static, str>,
}

impl Failure {
    /// Creates a failure with an explicit message.
    pub fn new(rule: RuleId, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }

    /// Creates a failure carrying the rule's built-in message.
    #[must_use]
    pub fn with_default_message(rule: RuleId) -> Self {
        Self::new(rule, rule.default_message())
    }

    /// Replaces the message, keeping the rule id.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.rule, self.message)
    }
}

impl std::error::Error for Failure {}

// ============================================================================
// FAILURE COLLECTION
// ============================================================================

/// Ordered collection of failures, at most one per rule.
///
/// Inline capacity covers every built-in rule, so evaluation never
/// allocates for the list itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Failures {
    failures: SmallVec<[Failure; RuleId::COUNT]>,
}

impl Failures {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            failures: SmallVec::new(),
        }
    }

    /// Appends a failure.
    pub fn add(&mut self, failure: Failure) {
        self.failures.push(failure);
    }

    /// Returns the number of failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Returns true if no rule failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns the failures as a slice, in evaluation order.
    #[must_use]
    pub fn as_slice(&self) -> &[Failure] {
        &self.failures
    }

    /// Iterates over the failures in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Failure> {
        self.failures.iter()
    }

    /// Returns true if the given rule is among the failures.
    #[must_use]
    pub fn contains(&self, rule: RuleId) -> bool {
        self.failures.iter().any(|failure| failure.rule == rule)
    }

    /// Converts to a `Result`, `Ok` when empty.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, Failures> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<Failure> for Failures {
    fn from_iter<I: IntoIterator<Item = Failure>>(iter: I) -> Self {
        Self {
            failures: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Failures {
    type Item = Failure;
    type IntoIter = smallvec::IntoIter<[Failure; RuleId::COUNT]>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl<'a> IntoIterator for &'a Failures {
    type Item = &'a Failure;
    type IntoIter = std::slice::Iter<'a, Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

impl fmt::Display for Failures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Password rejected with {} failure(s):", self.failures.len())?;
        for (i, failure) in self.failures.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for Failures {}

// ============================================================================
// PARSE ERRORS
// ============================================================================

/// Returned when a string does not name any rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown password rule `{key}`")]
pub struct ParseRuleIdError {
    /// The key that failed to parse.
    pub key: String,
}

// ============================================================================
// TESTS
// ============================================================================
