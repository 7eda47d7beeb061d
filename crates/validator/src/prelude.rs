//! Prelude module for convenient imports.
//!
//! Provides a single `use passgate_validator::prelude::*;` import that brings
//! in the rule trait, the built-in rules, message types and the gate.

// ============================================================================
// FOUNDATION: Core traits, ids, errors
// ============================================================================

pub use crate::foundation::{
    CandidatePair, Failure, Failures, MIN_PASSWORD_LENGTH, ParseRuleIdError, Rule, RuleId,
    SPECIAL_CHARACTERS, validate_with_all,
};

// ============================================================================
// RULES: Built-in rules and the catalog
// ============================================================================

pub use crate::rules::{
    HasDigit, HasLowercase, HasSpecial, HasUppercase, MatchesConfirmation, MinLength, RuleSet,
    RuleSetBuilder, has_digit, has_lowercase, has_special, has_uppercase, matches_confirmation,
    min_length,
};

// ============================================================================
// EVALUATION: Messages, evaluator, submission gate
// ============================================================================

pub use crate::evaluator::{ValidationResult, default_messages, evaluate, evaluate_with};
pub use crate::gate::{FormState, SUCCESS_MESSAGE, Submission, submit};
pub use crate::messages::{MessageOverrides, MessageTable, OverridesError};
