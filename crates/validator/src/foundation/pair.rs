//! The input to one evaluation.

use std::fmt;

/// A password together with its confirmation.
///
/// Both halves are borrowed for the duration of a single evaluation. The
/// `Debug` impl never prints either string.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidatePair<'a> {
    /// The candidate password.
    pub password: &'a str,
    /// The repeated entry that must equal `password`.
    pub confirmation: &'a str,
}

impl<'a> CandidatePair<'a> {
    /// Creates a pair from a password and its confirmation.
    #[must_use]
    pub const fn new(password: &'a str, confirmation: &'a str) -> Self {
        Self {
            password,
            confirmation,
        }
    }

    /// Returns true when both halves are byte-for-byte equal.
    #[inline]
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.password == self.confirmation
    }
}

impl fmt::Debug for CandidatePair<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CandidatePair")
            .field("password", &"<redacted>")
            .field("confirmation", &"<redacted>")
            .finish()
    }
}
