//! # passgate-validator
//!
//! Password composition rules with a confirmation check, caller-overridable
//! failure messages, and a submission gate that only accepts a password when
//! every rule passes.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use passgate_validator::prelude::*;
//!
//! let result = evaluate("Test123!", "Test123!", None);
//! assert!(result.is_valid());
//!
//! let result = evaluate("test123!", "test123!", None);
//! assert_eq!(result.failed_rules().collect::<Vec<_>>(), vec![RuleId::Uppercase]);
//! ```
//!
//! ## Rules
//!
//! The standard [`RuleSet`](rules::RuleSet) runs, in order:
//!
//! 1. [`MatchesConfirmation`](rules::MatchesConfirmation): password equals confirmation
//! 2. [`MinLength`](rules::MinLength): at least 6 characters
//! 3. [`HasUppercase`](rules::HasUppercase): contains `A-Z`
//! 4. [`HasLowercase`](rules::HasLowercase): contains `a-z`
//! 5. [`HasDigit`](rules::HasDigit): contains `0-9`
//! 6. [`HasSpecial`](rules::HasSpecial): contains one of `!@#$%^&*()_-+={[}]|:;"'<,>.`
//!
//! Every rule runs on every evaluation; failures are reported in this order.
//!
//! ## Custom Messages
//!
//! Supply a [`MessageOverrides`](messages::MessageOverrides) to replace any
//! subset of messages. Rules without an override keep their default text.
//!
//! ## Submitting
//!
//! [`gate::submit`] and [`gate::FormState`] run the evaluation and invoke an
//! accept callback with the password only when the result is valid.

pub mod evaluator;
pub mod foundation;
pub mod gate;
mod macros;
pub mod messages;
pub mod prelude;
pub mod rules;

pub use evaluator::{ValidationResult, default_messages, evaluate};
pub use foundation::{CandidatePair, Failure, RuleId};
pub use messages::{MessageOverrides, MessageTable};
