//! Password length rule
//!
//! Length is measured in Unicode scalar values (chars), so multi-byte
//! characters count once each. The confirmation is ignored.

use crate::foundation::{MIN_PASSWORD_LENGTH, RuleId};

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::rule! {
    /// Validates that the password has at least `min` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } => RuleId::MinLength;
    check(self, pair) { pair.password.chars().count() >= self.min }
    new(min: usize) { Self { min } }
    fn min_length(min: usize);
}

impl Default for MinLength {
    fn default() -> Self {
        Self::new(MIN_PASSWORD_LENGTH)
    }
}

// ============================================================================
// TESTS
// ============================================================================
