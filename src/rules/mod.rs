// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Lint rule derivation.
//!
//! This module projects the registry's commit types into the rule set an
//! external commit-message linter loads.

mod check;
mod derive;
mod rule;
mod set;

pub use check::{HeaderParts, TypeCheck};
pub use derive::{lint_rule_set, lint_rule_set_with, type_enum_rule, BASELINE, TYPE_ENUM};
pub use rule::{Applicability, RuleConfig, Severity};
pub use set::{merge_rule_sets, RuleSet};
