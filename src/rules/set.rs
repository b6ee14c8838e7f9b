// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule sets and rule set merging.

use serde::Serialize;
use std::collections::BTreeMap;

use super::rule::RuleConfig;

/// A linter configuration: baseline rule sets plus rule overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    /// Names of external rule sets this one builds on.
    pub extends: Vec<String>,
    /// Rules by name.
    pub rules: BTreeMap<String, RuleConfig>,
}

impl RuleSet {
    /// A rule set that only extends the named baselines.
    pub fn extending<I, S>(baselines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extends: baselines.into_iter().map(Into::into).collect(),
            rules: BTreeMap::new(),
        }
    }

    /// Add or replace a rule.
    pub fn with_rule(mut self, name: impl Into<String>, rule: RuleConfig) -> Self {
        self.rules.insert(name.into(), rule);
        self
    }

    /// Look up a rule by name.
    pub fn rule(&self, name: &str) -> Option<&RuleConfig> {
        self.rules.get(name)
    }
}

/// Merge two rule sets, with the overrides taking precedence.
///
/// Rules are replaced key-for-key. Baselines keep the base order, followed
/// by override baselines not already present.
pub fn merge_rule_sets(base: RuleSet, overrides: RuleSet) -> RuleSet {
    let mut extends = base.extends;
    for name in overrides.extends {
        if !extends.contains(&name) {
            extends.push(name);
        }
    }

    let mut rules = base.rules;
    rules.extend(overrides.rules);

    RuleSet { extends, rules }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Applicability, Severity};

    fn rule(severity: Severity, values: &[&str]) -> RuleConfig {
        RuleConfig::new(
            severity,
            Applicability::Always,
            values.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_overrides_win_key_for_key() {
        let base = RuleSet::default()
            .with_rule("type-enum", rule(Severity::Warning, &["feat"]))
            .with_rule("scope-enum", rule(Severity::Error, &["api"]));
        let overrides = RuleSet::default().with_rule("type-enum", rule(Severity::Error, &["fix"]));

        let merged = merge_rule_sets(base, overrides);
        assert_eq!(merged.rule("type-enum"), Some(&rule(Severity::Error, &["fix"])));
        assert_eq!(merged.rule("scope-enum"), Some(&rule(Severity::Error, &["api"])));
    }

    #[test]
    fn test_extends_deduplicated_in_order() {
        let base = RuleSet::extending(["a", "b"]);
        let overrides = RuleSet::extending(["b", "c"]);
        let merged = merge_rule_sets(base, overrides);
        assert_eq!(merged.extends, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_merge_with_empty_is_identity() {
        let base = RuleSet::extending(["a"]).with_rule("type-enum", rule(Severity::Error, &["feat"]));
        assert_eq!(merge_rule_sets(base.clone(), RuleSet::default()), base);
    }

    #[test]
    fn test_serialized_shape() {
        let set = RuleSet::extending(["@commitlint/config-conventional"])
            .with_rule("type-enum", rule(Severity::Error, &["feat", "fix"]));
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "extends": ["@commitlint/config-conventional"],
                "rules": { "type-enum": [2, "always", ["feat", "fix"]] }
            })
        );
    }
}
