//! Confirmation rule
//!
//! The only rule that looks at both halves of the pair.

use crate::foundation::RuleId;

// ============================================================================
// MATCHES CONFIRMATION
// ============================================================================

crate::rule! {
    /// Validates that the password equals its confirmation.
    ///
    /// Comparison is exact and case-sensitive. Two empty strings match.
    pub MatchesConfirmation => RuleId::Mismatch;
    check(pair) { pair.is_confirmed() }
    fn matches_confirmation();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{CandidatePair, Rule};

    #[test]
    fn test_identical_pair() {
        assert!(MatchesConfirmation.validate(&CandidatePair::new("Test123!", "Test123!")).is_ok());
    }

    #[test]
    fn test_trailing_extra_character() {
        let failure = MatchesConfirmation
            .validate(&CandidatePair::new("Test123!", "Test123!!"))
            .unwrap_err();
        assert_eq!(failure.rule, RuleId::Mismatch);
        assert_eq!(failure.message, "Passwords do not match");
    }

    #[test]
    fn test_case_sensitive() {
        assert!(!matches_confirmation().is_satisfied(&CandidatePair::new("abc", "ABC")));
    }

    #[test]
    fn test_empty_pair_matches() {
        assert!(matches_confirmation().is_satisfied(&CandidatePair::new("", "")));
        assert!(!matches_confirmation().is_satisfied(&CandidatePair::new("", " ")));
    }
}
