//! Built-in password rules
//!
//! This module provides the six rules of the standard catalog and the
//! [`RuleSet`] that orders them.
//!
//! # Rules
//!
//! - **Confirmation**: [`MatchesConfirmation`]
//! - **Length**: [`MinLength`]
//! - **Character classes**: [`HasUppercase`], [`HasLowercase`], [`HasDigit`],
//!   [`HasSpecial`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use passgate_validator::prelude::*;
//!
//! let strict = RuleSet::builder()
//!     .rule(min_length(12))
//!     .rule(has_digit())
//!     .build();
//! ```

pub mod confirmation;
pub mod content;
pub mod length;
pub mod set;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use confirmation::{MatchesConfirmation, matches_confirmation};
pub use content::{
    HasDigit, HasLowercase, HasSpecial, HasUppercase, has_digit, has_lowercase, has_special,
    has_uppercase,
};
pub use length::{MinLength, min_length};
pub use set::{RuleSet, RuleSetBuilder};
