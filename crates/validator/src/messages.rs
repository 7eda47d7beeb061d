//! Failure messages and caller overrides
//!
//! [`MessageOverrides`] is the partial mapping a caller supplies per
//! evaluation. [`MessageTable`] is the effective, complete table produced by
//! merging overrides over the built-in defaults.
//!
//! Overrides are permissive: any string is accepted (including empty), and
//! unknown keys in a JSON document are skipped rather than rejected.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::ops::Index;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::foundation::RuleId;

// ============================================================================
// ERRORS
// ============================================================================

/// Returned when an override document cannot be read.
#[derive(Debug, thiserror::Error)]
pub enum OverridesError {
    /// The document is not a JSON object of string values.
    #[error("invalid message override document: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// OVERRIDES
// ============================================================================

/// Caller-supplied replacement messages, keyed by rule.
///
/// # Examples
///
/// ```rust,ignore
/// use passgate_validator::prelude::*;
///
/// let overrides = MessageOverrides::new().with(RuleId::Mismatch, "Passwords don't match");
///
/// let from_json = MessageOverrides::from_json(r#"{ "passwordMismatch": "Passwords don't match" }"#)?;
/// assert_eq!(overrides, from_json);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageOverrides {
    messages: HashMap<RuleId, String>,
}

impl MessageOverrides {
    /// Creates an empty override map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses overrides from a JSON object.
    ///
    /// Keys may be rule codes (`min_length`) or component prop names
    /// (`minLength`). When two keys name the same rule, the later one wins.
    pub fn from_json(document: &str) -> Result<Self, OverridesError> {
        Ok(serde_json::from_str(document)?)
    }

    /// Adds or replaces the message for `rule`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, rule: RuleId, message: impl Into<String>) -> Self {
        self.insert(rule, message);
        self
    }

    /// Sets the message for `rule`, returning the previous override.
    pub fn insert(&mut self, rule: RuleId, message: impl Into<String>) -> Option<String> {
        self.messages.insert(rule, message.into())
    }

    /// Sets the message for the rule named by `key`.
    ///
    /// Returns `false` and leaves the map unchanged when `key` names no rule.
    pub fn insert_key(&mut self, key: &str, message: impl Into<String>) -> bool {
        match key.parse::<RuleId>() {
            Ok(rule) => {
                self.insert(rule, message);
                true
            }
            Err(err) => {
                tracing::debug!(key = %err.key, "ignoring override for unknown rule");
                false
            }
        }
    }

    /// Returns the override for `rule`, if any.
    #[must_use]
    pub fn get(&self, rule: RuleId) -> Option<&str> {
        self.messages.get(&rule).map(String::as_str)
    }

    /// Returns the number of overridden rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if nothing is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(RuleId, S)> for MessageOverrides {
    fn from_iter<I: IntoIterator<Item = (RuleId, S)>>(iter: I) -> Self {
        let mut overrides = Self::new();
        overrides.extend(iter);
        overrides
    }
}

impl<S: Into<String>> Extend<(RuleId, S)> for MessageOverrides {
    fn extend<I: IntoIterator<Item = (RuleId, S)>>(&mut self, iter: I) {
        for (rule, message) in iter {
            self.insert(rule, message);
        }
    }
}

impl<'de> Deserialize<'de> for MessageOverrides {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OverridesVisitor;

        impl<'de> Visitor<'de> for OverridesVisitor {
            type Value = MessageOverrides;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of rule keys to message strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut overrides = MessageOverrides::new();
                while let Some(key) = map.next_key::<String>()? {
                    match key.parse::<RuleId>() {
                        Ok(rule) => {
                            overrides.insert(rule, map.next_value::<String>()?);
                        }
                        Err(err) => {
                            tracing::debug!(key = %err.key, "ignoring override for unknown rule");
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }
                Ok(overrides)
            }
        }

        deserializer.deserialize_map(OverridesVisitor)
    }
}

// ============================================================================
// EFFECTIVE TABLE
// ============================================================================

/// A complete message table with one entry per [`RuleId`].
///
/// Built-in entries are borrowed; only overridden entries allocate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTable {
    messages: [Cow<'static, str>; RuleId::COUNT],
}

impl MessageTable {
    /// The built-in messages.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            messages: RuleId::ALL.map(|rule| Cow::Borrowed(rule.default_message())),
        }
    }

    /// Defaults with every present override applied.
    #[must_use]
    pub fn with_overrides(overrides: &MessageOverrides) -> Self {
        Self {
            messages: RuleId::ALL.map(|rule| match overrides.get(rule) {
                Some(message) => Cow::Owned(message.to_owned()),
                None => Cow::Borrowed(rule.default_message()),
            }),
        }
    }

    /// Returns the message for `rule`.
    #[must_use]
    pub fn get(&self, rule: RuleId) -> &str {
        &self.messages[rule.index()]
    }

    /// Returns an owned handle to the message, borrowed when it is a default.
    pub(crate) fn message(&self, rule: RuleId) -> Cow<'static, str> {
        self.messages[rule.index()].clone()
    }

    /// Returns true when `rule` still uses its built-in message.
    #[must_use]
    pub fn is_default(&self, rule: RuleId) -> bool {
        self.get(rule) == rule.default_message()
    }

    /// Iterates over `(rule, message)` in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = (RuleId, &str)> {
        RuleId::ALL
            .into_iter()
            .zip(self.messages.iter().map(|message| &**message))
    }
}

impl Default for MessageTable {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Index<RuleId> for MessageTable {
    type Output = str;

    fn index(&self, rule: RuleId) -> &str {
        self.get(rule)
    }
}

impl Serialize for MessageTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(RuleId::COUNT))?;
        for (rule, message) in self.iter() {
            map.serialize_entry(&rule, message)?;
        }
        map.end()
    }
}

// ============================================================================
// TESTS
// ============================================================================
