//! Core rule types for clipguard.
//!
//! Defines the declarative masking rules, the ordered rule set they live in,
//! and the result type shared by the masking and link-cleaning engines.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single detection-and-substitution rule.
///
/// The rule's name is the key of the [`RuleSet`] entry that holds it and is
/// not duplicated here. A rule whose pattern fails to compile is skipped at
/// match time; it is never a fatal condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Regular expression source text to match.
    pub pattern: String,

    /// Literal text substituted for every match.
    pub replacement: String,

    /// Disabled rules are excluded from matching entirely.
    pub enabled: bool,

    /// Built-in rules cannot be deleted, only disabled.
    #[serde(default)]
    pub builtin: bool,
}

impl Rule {
    /// Create an enabled custom rule.
    #[must_use]
    pub fn custom(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
            enabled: true,
            builtin: false,
        }
    }

    fn builtin(pattern: &str, replacement: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
            enabled: true,
            builtin: true,
        }
    }
}

/// An ordered mapping from rule name to [`Rule`].
///
/// Insertion order is the evaluation order: masking applies rules
/// sequentially, each operating on the previous rule's output, so iteration
/// order is observable behavior and must be explicit rather than incidental.
pub type RuleSet = IndexMap<String, Rule>;

/// Outcome of one masking or cleaning pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// The (possibly transformed) text.
    pub text: String,

    /// True iff `text` differs byte-for-byte from the input.
    pub changed: bool,
}

impl MatchResult {
    /// A pass that left the input untouched.
    #[must_use]
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            changed: false,
        }
    }
}

/// The built-in rules, default-enabled, in display order.
///
/// Replacement placeholders are chosen so they never match any built-in
/// pattern themselves, which keeps masking idempotent.
#[must_use]
pub fn builtin_rules() -> RuleSet {
    let mut rules = RuleSet::new();
    rules.insert(
        "Email".to_string(),
        Rule::builtin(
            r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b",
            "[REDACTED_EMAIL]",
        ),
    );
    rules.insert(
        "IPv4 Address".to_string(),
        Rule::builtin(
            r"\b(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\b",
            "[REDACTED_IP]",
        ),
    );
    rules.insert(
        "Phone Number (US)".to_string(),
        Rule::builtin(
            r"\b(?:\+?1[-.\s]?)?\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})\b",
            "[REDACTED_PHONE]",
        ),
    );
    rules.insert(
        "Credit Card".to_string(),
        Rule::builtin(r"\b(?:\d{4}[-\s]?){3}\d{4}\b", "[REDACTED_CC]"),
    );
    rules.insert(
        "SSN".to_string(),
        Rule::builtin(r"\b\d{3}-\d{2}-\d{4}\b", "[REDACTED_SSN]"),
    );
    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_rules_order() {
        let rules = builtin_rules();
        let names: Vec<&str> = rules.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            vec![
                "Email",
                "IPv4 Address",
                "Phone Number (US)",
                "Credit Card",
                "SSN"
            ]
        );
    }

    #[test]
    fn test_builtin_rules_all_enabled_and_builtin() {
        for (name, rule) in &builtin_rules() {
            assert!(rule.enabled, "rule {name} should default to enabled");
            assert!(rule.builtin, "rule {name} should be marked built-in");
        }
    }

    #[test]
    fn test_builtin_patterns_compile() {
        for (name, rule) in &builtin_rules() {
            assert!(
                regex::Regex::new(&rule.pattern).is_ok(),
                "pattern for {name} does not compile"
            );
        }
    }

    #[test]
    fn test_builtin_replacements_do_not_match_any_rule() {
        let rules = builtin_rules();
        for (_, rule) in &rules {
            let regex = regex::Regex::new(&rule.pattern).unwrap();
            for (_, other) in &rules {
                assert!(!regex.is_match(&other.replacement));
            }
        }
    }

    #[test]
    fn test_rule_custom() {
        let rule = Rule::custom(r"\bsecret\b", "[HIDDEN]");
        assert_eq!(rule.pattern, r"\bsecret\b");
        assert_eq!(rule.replacement, "[HIDDEN]");
        assert!(rule.enabled);
        assert!(!rule.builtin);
    }

    #[test]
    fn test_rule_deserialize_builtin_defaults_false() {
        let json = r#"{"pattern": "x", "replacement": "y", "enabled": true}"#;
        let rule: Rule = serde_json::from_str(json).unwrap();
        assert!(!rule.builtin);
    }

    #[test]
    fn test_rule_serde_roundtrip() {
        let rule = Rule::custom("a+", "b");
        let json = serde_json::to_string(&rule).unwrap();
        let back: Rule = serde_json::from_str(&json).unwrap();
        assert_eq!(rule, back);
    }

    #[test]
    fn test_ruleset_preserves_insertion_order() {
        let mut rules = RuleSet::new();
        rules.insert("zeta".to_string(), Rule::custom("z", "1"));
        rules.insert("alpha".to_string(), Rule::custom("a", "2"));
        let names: Vec<&str> = rules.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_match_result_unchanged() {
        let result = MatchResult::unchanged("hello");
        assert_eq!(result.text, "hello");
        assert!(!result.changed);
    }
}
