//! Ordered rule catalog
//!
//! A [`RuleSet`] is built once and shared read-only across evaluations.
//! [`RuleSet::standard`] holds the six built-in rules in their canonical
//! order; [`RuleSet::builder`] composes custom catalogs.

use std::fmt;
use std::sync::LazyLock;

use crate::evaluator::{self, ValidationResult};
use crate::foundation::{CandidatePair, Rule, RuleId};
use crate::messages::{MessageOverrides, MessageTable};
use crate::rules::{
    MinLength, has_digit, has_lowercase, has_special, has_uppercase, matches_confirmation,
};

static STANDARD: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::builder()
        .rule(matches_confirmation())
        .rule(MinLength::default())
        .rule(has_uppercase())
        .rule(has_lowercase())
        .rule(has_digit())
        .rule(has_special())
        .build()
});

// ============================================================================
// RULE SET
// ============================================================================

/// An ordered, immutable list of rules.
///
/// Evaluation visits rules in the order they were added. Each [`RuleId`]
/// appears at most once, so a result never holds two failures for one rule.
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    /// The canonical catalog: mismatch, min length, uppercase, lowercase,
    /// digit, special.
    #[must_use]
    pub fn standard() -> &'static RuleSet {
        &STANDARD
    }

    /// Starts an empty builder.
    #[must_use]
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Iterates over the rules in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|rule| &**rule)
    }

    /// Iterates over the rule ids in evaluation order.
    pub fn ids(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.rules.iter().map(|rule| rule.id())
    }

    /// Returns the rule registered under `id`, if any.
    #[must_use]
    pub fn get(&self, id: RuleId) -> Option<&dyn Rule> {
        self.iter().find(|rule| rule.id() == id)
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the set has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The built-in message for every rule id.
    #[must_use]
    pub fn default_messages(&self) -> MessageTable {
        MessageTable::defaults()
    }

    /// Produces the effective message table: overrides where present,
    /// defaults everywhere else.
    #[must_use]
    pub fn merge(&self, overrides: &MessageOverrides) -> MessageTable {
        MessageTable::with_overrides(overrides)
    }

    /// Runs every rule against `pair` and reports all failures.
    #[must_use]
    pub fn evaluate(&self, pair: CandidatePair<'_>, messages: &MessageTable) -> ValidationResult {
        evaluator::evaluate_with(self, pair, messages)
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`RuleSet`].
#[derive(Default)]
pub struct RuleSetBuilder {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSetBuilder {
    /// Appends a rule.
    ///
    /// If a rule with the same id was already added it is replaced in
    /// place, keeping its original position.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        let id = rule.id();
        let rule: Box<dyn Rule> = Box::new(rule);
        match self.rules.iter_mut().find(|existing| existing.id() == id) {
            Some(slot) => *slot = rule,
            None => self.rules.push(rule),
        }
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub fn build(self) -> RuleSet {
        RuleSet { rules: self.rules }
    }
}

impl fmt::Debug for RuleSetBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSetBuilder")
            .field("rules", &self.rules.iter().map(|r| r.id()).collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::min_length;

    #[test]
    fn test_standard_order() {
        let ids: Vec<_> = RuleSet::standard().ids().collect();
        assert_eq!(ids, RuleId::ALL.to_vec());
    }

    #[test]
    fn test_standard_is_shared() {
        assert!(std::ptr::eq(RuleSet::standard(), RuleSet::standard()));
    }

    #[test]
    fn test_builder_keeps_insertion_order() {
        let set = RuleSet::builder()
            .rule(has_digit())
            .rule(matches_confirmation())
            .build();
        let ids: Vec<_> = set.ids().collect();
        assert_eq!(ids, vec![RuleId::Digit, RuleId::Mismatch]);
    }

    #[test]
    fn test_builder_replaces_duplicate_id_in_place() {
        let set = RuleSet::builder()
            .rule(min_length(6))
            .rule(has_digit())
            .rule(min_length(10))
            .build();

        assert_eq!(set.len(), 2);
        assert_eq!(set.ids().collect::<Vec<_>>(), vec![RuleId::MinLength, RuleId::Digit]);

        let pair = CandidatePair::new("12345678", "12345678");
        assert!(!set.get(RuleId::MinLength).unwrap().is_satisfied(&pair));
    }

    #[test]
    fn test_empty_set_accepts_everything() {
        let set = RuleSet::builder().build();
        assert!(set.is_empty());
        let result = set.evaluate(CandidatePair::new("", "x"), &MessageTable::defaults());
        assert!(result.is_valid());
    }

    #[test]
    fn test_debug_lists_ids() {
        let debug = format!("{:?}", RuleSet::standard());
        assert_eq!(debug, "[Mismatch, MinLength, Uppercase, Lowercase, Digit, Special]");
    }
}
