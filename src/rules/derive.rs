// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Deriving the lint rule set from the registry.

use crate::config::LintConfig;
use crate::registry::Registry;

use super::rule::{Applicability, RuleConfig, Severity};
use super::set::{merge_rule_sets, RuleSet};

/// The external rule set the derived rules are layered on.
pub const BASELINE: &str = "@commitlint/config-conventional";

/// Name of the rule constraining the commit type token.
pub const TYPE_ENUM: &str = "type-enum";

/// Build the `type-enum` rule allowing exactly the registry's types.
///
/// Values keep registry order. An empty registry yields a rule that
/// rejects every type.
pub fn type_enum_rule(registry: &Registry) -> RuleConfig {
    RuleConfig::new(
        Severity::Error,
        Applicability::Always,
        registry.types.iter().map(|t| t.value.clone()).collect(),
    )
}

/// Build the lint rule set with default settings.
pub fn lint_rule_set(registry: &Registry) -> RuleSet {
    lint_rule_set_with(registry, &LintConfig::default())
}

/// Build the lint rule set using the given settings.
pub fn lint_rule_set_with(registry: &Registry, lint: &LintConfig) -> RuleSet {
    let type_enum = RuleConfig {
        severity: lint.type_enum_severity,
        ..type_enum_rule(registry)
    };

    tracing::debug!(
        extends = ?lint.extends,
        types = type_enum.values.len(),
        "Deriving lint rule set"
    );

    let base = RuleSet::extending(lint.extends.iter().cloned());
    let overrides = RuleSet::default().with_rule(TYPE_ENUM, type_enum);
    merge_rule_sets(base, overrides)
}
