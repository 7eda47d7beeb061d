//! Core traits for the rule system
//!
//! This module defines the trait every password rule implements.

use std::fmt;

use crate::foundation::{CandidatePair, Failure, RuleId};

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// A named, pure predicate over a [`CandidatePair`].
///
/// Rules hold no mutable state, so a single instance can be shared across
/// any number of concurrent evaluations.
///
/// # Examples
///
/// ```rust,ignore
/// use passgate_validator::foundation::{CandidatePair, Rule, RuleId};
///
/// #[derive(Debug)]
/// struct HasDigit;
///
/// impl Rule for HasDigit {
///     fn id(&self) -> RuleId {
///         RuleId::Digit
///     }
///
///     fn is_satisfied(&self, pair: &CandidatePair<'_>) -> bool {
///         pair.password.bytes().any(|b| b.is_ascii_digit())
///     }
/// }
///
/// assert!(HasDigit.validate(&CandidatePair::new("abc1", "abc1")).is_ok());
/// ```
pub trait Rule: Send + Sync + fmt::Debug {
    /// The id under which failures of this rule are reported.
    fn id(&self) -> RuleId;

    /// Returns true when the pair satisfies the rule.
    fn is_satisfied(&self, pair: &CandidatePair<'_>) -> bool;

    /// Built-in message used when no override is supplied.
    fn default_message(&self) -> &'static str {
        self.id().default_message()
    }

    /// Checks the pair, reporting a [`Failure`] with the default message.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the rule is satisfied
    /// * `Err(Failure)` otherwise
    fn validate(&self, pair: &CandidatePair<'_>) -> Result<(), Failure> {
        if self.is_satisfied(pair) {
            Ok(())
        } else {
            Err(Failure::new(self.id(), self.default_message()))
        }
    }
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn id(&self) -> RuleId {
        (**self).id()
    }

    fn is_satisfied(&self, pair: &CandidatePair<'_>) -> bool {
        (**self).is_satisfied(pair)
    }

    fn default_message(&self) -> &'static str {
        (**self).default_message()
    }
}

// ============================================================================
// TESTS
// ============================================================================
