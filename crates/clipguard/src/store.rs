//! Rule store boundary.
//!
//! Owns the flattened, ordered rule set the engines consume: built-in rules
//! first, custom rules appended. All rule edits go through here so name
//! collisions and invalid patterns are rejected at the boundary instead of
//! surfacing at match time.

use regex::Regex;
use tracing::debug;

use crate::config::RulesConfig;
use crate::error::{Error, Result};
use crate::rules::{builtin_rules, Rule, RuleSet};

/// Ordered collection of built-in and custom masking rules.
#[derive(Debug, Clone)]
pub struct RuleStore {
    rules: RuleSet,
}

impl RuleStore {
    /// Create a store holding only the built-in rules.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    /// Build a store from configuration: built-ins (minus the disabled
    /// list), then custom rules in configuration order.
    ///
    /// Disabled names that match no rule are ignored with a debug log; the
    /// configuration may mention rules that no longer exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a custom rule reuses an existing name or its
    /// pattern does not compile.
    pub fn from_config(config: &RulesConfig) -> Result<Self> {
        let mut store = Self::new();
        for name in &config.disabled {
            if store.rules.contains_key(name) {
                store.set_enabled(name, false)?;
            } else {
                debug!(rule = %name, "disabled rule not found, ignoring");
            }
        }
        for (name, rule) in &config.custom {
            store.add_custom(name, &rule.pattern, &rule.replacement)?;
            if !rule.enabled {
                store.set_enabled(name, false)?;
            }
        }
        Ok(store)
    }

    /// Read-only snapshot of the flattened rule set, in evaluation order.
    #[must_use]
    pub fn ruleset(&self) -> &RuleSet {
        &self.rules
    }

    /// Number of rules in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the store holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Append a custom rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is already taken (by a built-in or a
    /// custom rule) or the pattern does not compile.
    pub fn add_custom(&mut self, name: &str, pattern: &str, replacement: &str) -> Result<()> {
        if self.rules.contains_key(name) {
            return Err(Error::RuleExists {
                name: name.to_string(),
            });
        }
        if let Err(source) = Regex::new(pattern) {
            return Err(Error::InvalidPattern {
                name: name.to_string(),
                source,
            });
        }
        self.rules
            .insert(name.to_string(), Rule::custom(pattern, replacement));
        Ok(())
    }

    /// Remove a custom rule. Built-in rules can only be disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule does not exist or is built-in.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        match self.rules.get(name) {
            None => Err(Error::RuleNotFound {
                name: name.to_string(),
            }),
            Some(rule) if rule.builtin => Err(Error::BuiltinRule {
                name: name.to_string(),
            }),
            Some(_) => {
                // shift_remove keeps the order of the remaining rules intact.
                self.rules.shift_remove(name);
                Ok(())
            }
        }
    }

    /// Enable or disable a rule by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule does not exist.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> Result<()> {
        match self.rules.get_mut(name) {
            Some(rule) => {
                rule.enabled = enabled;
                Ok(())
            }
            None => Err(Error::RuleNotFound {
                name: name.to_string(),
            }),
        }
    }
}

impl Default for RuleStore {
    fn default() -> Self {
        Self::new()
    }
}
