//! Pattern matcher: detects and masks sensitive data in text.
//!
//! Applies an ordered rule set to arbitrary text. Before any substitution a
//! single-item heuristic runs: when the whole trimmed input is exactly one
//! match of one enabled rule, the text is judged a deliberate copy of that
//! item and left alone.
//!
//! # Example
//!
//! ```
//! use clipguard::{builtin_rules, mask};
//!
//! let rules = builtin_rules();
//!
//! // An address embedded in larger text is masked.
//! let result = mask("contact: john@example.com", &rules);
//! assert_eq!(result.text, "contact: [REDACTED_EMAIL]");
//! assert!(result.changed);
//!
//! // A bare address was copied deliberately and stays intact.
//! let result = mask("john@example.com", &rules);
//! assert!(!result.changed);
//! ```

use regex::{NoExpand, Regex};
use tracing::debug;

use crate::rules::{MatchResult, RuleSet};

/// An enabled rule with its pattern compiled.
struct CompiledRule<'a> {
    name: &'a str,
    regex: Regex,
    replacement: &'a str,
}

/// Compile the enabled rules in ruleset order, skipping invalid patterns.
fn compile_enabled(rules: &RuleSet) -> Vec<CompiledRule<'_>> {
    rules
        .iter()
        .filter(|(_, rule)| rule.enabled)
        .filter_map(|(name, rule)| match Regex::new(&rule.pattern) {
            Ok(regex) => Some(CompiledRule {
                name,
                regex,
                replacement: &rule.replacement,
            }),
            Err(error) => {
                debug!(rule = %name, %error, "skipping rule with invalid pattern");
                None
            }
        })
        .collect()
}

/// True when the trimmed text is exactly one match of one rule.
///
/// Checked strictly per rule: a rule qualifies only if it alone produces a
/// single match spanning the entire text. Matches of different rules are
/// never combined.
fn is_single_sensitive_item(trimmed: &str, compiled: &[CompiledRule<'_>]) -> bool {
    for rule in compiled {
        let mut matches = rule.regex.find_iter(trimmed);
        if let Some(first) = matches.next() {
            if matches.next().is_none() && first.start() == 0 && first.end() == trimmed.len() {
                debug!(rule = %rule.name, "single sensitive item, leaving unmasked");
                return true;
            }
        }
    }
    false
}

/// Mask every sensitive match in `text` according to `rules`.
///
/// Rules apply sequentially in ruleset order, each operating on the previous
/// rule's output, so a replacement may itself be matched by a later rule.
/// Replacements are literal; capture-group references are not expanded.
///
/// Empty or whitespace-only input, a ruleset with no enabled rules, and
/// input that is a single sensitive item all come back unchanged. No failure
/// mode reaches the caller: malformed rules are skipped.
#[must_use]
pub fn mask(text: &str, rules: &RuleSet) -> MatchResult {
    if text.trim().is_empty() {
        return MatchResult::unchanged(text);
    }

    let compiled = compile_enabled(rules);

    if is_single_sensitive_item(text.trim(), &compiled) {
        return MatchResult::unchanged(text);
    }

    let mut masked = text.to_string();
    for rule in &compiled {
        masked = rule
            .regex
            .replace_all(&masked, NoExpand(rule.replacement))
            .into_owned();
    }

    let changed = masked != text;
    MatchResult {
        text: masked,
        changed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{builtin_rules, Rule};

    fn custom_set(rules: &[(&str, &str, &str)]) -> RuleSet {
        rules
            .iter()
            .map(|(name, pattern, replacement)| {
                ((*name).to_string(), Rule::custom(*pattern, *replacement))
            })
            .collect()
    }

    #[test]
    fn test_empty_input_unchanged() {
        let result = mask("", &builtin_rules());
        assert_eq!(result.text, "");
        assert!(!result.changed);
    }

    #[test]
    fn test_whitespace_input_unchanged() {
        let result = mask("  \n\t ", &builtin_rules());
        assert_eq!(result.text, "  \n\t ");
        assert!(!result.changed);
    }

    #[test]
    fn test_no_enabled_rules_unchanged() {
        let mut rules = builtin_rules();
        for (_, rule) in &mut rules {
            rule.enabled = false;
        }
        let result = mask("contact: john@example.com", &rules);
        assert!(!result.changed);
        assert_eq!(result.text, "contact: john@example.com");
    }

    #[test]
    fn test_single_email_left_alone() {
        let result = mask("john@example.com", &builtin_rules());
        assert_eq!(result.text, "john@example.com");
        assert!(!result.changed);
    }

    #[test]
    fn test_single_email_with_surrounding_whitespace_left_alone() {
        let result = mask("  john@example.com\n", &builtin_rules());
        assert!(!result.changed);
    }

    #[test]
    fn test_embedded_email_masked() {
        let result = mask("contact: john@example.com", &builtin_rules());
        assert_eq!(result.text, "contact: [REDACTED_EMAIL]");
        assert!(result.changed);
    }

    #[test]
    fn test_single_ssn_left_alone() {
        let result = mask("123-45-6789", &builtin_rules());
        assert!(!result.changed);
    }

    #[test]
    fn test_embedded_ssn_masked() {
        let result = mask("SSN: 123-45-6789", &builtin_rules());
        assert_eq!(result.text, "SSN: [REDACTED_SSN]");
        assert!(result.changed);
    }

    #[test]
    fn test_disabled_rule_never_fires() {
        let mut rules = builtin_rules();
        rules.get_mut("SSN").unwrap().enabled = false;

        let standalone = mask("123-45-6789", &rules);
        assert!(!standalone.changed);

        let embedded = mask("SSN: 123-45-6789", &rules);
        assert!(!embedded.changed);
        assert_eq!(embedded.text, "SSN: 123-45-6789");
    }

    #[test]
    fn test_two_matches_of_same_rule_both_masked() {
        let result = mask("a@b.com c@d.com", &builtin_rules());
        assert_eq!(result.text, "[REDACTED_EMAIL] [REDACTED_EMAIL]");
        assert!(result.changed);
    }

    #[test]
    fn test_matches_of_different_rules_all_masked() {
        let result = mask("john@example.com and 10.0.0.1", &builtin_rules());
        assert_eq!(result.text, "[REDACTED_EMAIL] and [REDACTED_IP]");
        assert!(result.changed);
    }

    #[test]
    fn test_sequential_composition() {
        // The first rule's replacement is matched by the second rule; both
        // fire because each rule operates on the previous rule's output.
        let rules = custom_set(&[("first", "alpha", "bravo"), ("second", "bravo", "charlie")]);
        let result = mask("say alpha", &rules);
        assert_eq!(result.text, "say charlie");
        assert!(result.changed);
    }

    #[test]
    fn test_evaluation_order_is_ruleset_order() {
        let forward = custom_set(&[("first", "a", "b"), ("second", "b", "c")]);
        let reversed = custom_set(&[("second", "b", "c"), ("first", "a", "b")]);
        assert_eq!(mask("x a", &forward).text, "x c");
        assert_eq!(mask("x a", &reversed).text, "x b");
    }

    #[test]
    fn test_replacement_is_literal() {
        let rules = custom_set(&[("digits", r"(\d+)", "[$1]")]);
        let result = mask("x 42", &rules);
        assert_eq!(result.text, "x [$1]");
    }

    #[test]
    fn test_invalid_pattern_skipped() {
        let mut rules = RuleSet::new();
        rules.insert("broken".to_string(), Rule::custom("[invalid", "x"));
        rules.extend(builtin_rules());

        let result = mask("contact: a@b.com", &rules);
        assert_eq!(result.text, "contact: [REDACTED_EMAIL]");
        assert!(result.changed);
    }

    #[test]
    fn test_mask_is_idempotent() {
        let rules = builtin_rules();
        let first = mask("contact: john@example.com from 10.0.0.1", &rules);
        assert!(first.changed);

        let second = mask(&first.text, &rules);
        assert_eq!(second.text, first.text);
        assert!(!second.changed);
    }

    #[test]
    fn test_mask_is_deterministic() {
        let rules = builtin_rules();
        let input = "card 4111-1111-1111-1111 and phone (555) 123-4567";
        assert_eq!(mask(input, &rules), mask(input, &rules));
    }

    #[test]
    fn test_single_phone_left_alone() {
        let result = mask("555-123-4567", &builtin_rules());
        assert!(!result.changed);
    }

    #[test]
    fn test_embedded_credit_card_masked() {
        let result = mask("pay with 4111 1111 1111 1111 today", &builtin_rules());
        assert_eq!(result.text, "pay with [REDACTED_CC] today");
        assert!(result.changed);
    }

    #[test]
    fn test_plain_text_unchanged() {
        let result = mask("nothing sensitive here", &builtin_rules());
        assert_eq!(result.text, "nothing sensitive here");
        assert!(!result.changed);
    }
}
