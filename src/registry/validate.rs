// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Registry consistency checks.

use regex::Regex;
use std::collections::HashSet;

use crate::error::{CzError, RegistryError, Result};

use super::schema::{PromptField, Registry};

impl Registry {
    /// Check the registry for data problems.
    ///
    /// All problems are collected before failing so a single run reports
    /// everything that needs fixing.
    pub fn validate(&self) -> Result<()> {
        let issues = self.issues();
        if issues.is_empty() {
            tracing::debug!(types = self.types.len(), scopes = self.scopes.len(), "Registry is valid");
            Ok(())
        } else {
            Err(CzError::Registry(RegistryError::Invalid { issues }))
        }
    }

    /// List every data problem in the registry.
    pub fn issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        check_types(self, &mut issues);
        check_scopes(self, &mut issues);
        check_questions(self, &mut issues);
        check_breaking(self, &mut issues);
        check_ticket(self, &mut issues);

        issues
    }
}

fn check_types(registry: &Registry, issues: &mut Vec<String>) {
    if registry.types.is_empty() {
        issues.push("no commit types defined".to_string());
        return;
    }

    let mut seen = HashSet::new();
    for entry in &registry.types {
        if entry.value.is_empty() {
            issues.push("commit type with empty identifier".to_string());
            continue;
        }
        if entry.value.chars().any(char::is_whitespace) {
            issues.push(format!("commit type '{}' contains whitespace", entry.value));
        }
        if !seen.insert(entry.value.as_str()) {
            issues.push(format!("duplicate commit type '{}'", entry.value));
        }
    }
}

fn check_scopes(registry: &Registry, issues: &mut Vec<String>) {
    match registry.scopes.iter().filter(|s| s.is_empty()).count() {
        1 => {}
        0 => issues.push("scopes must contain the empty skip entry".to_string()),
        n => issues.push(format!("empty skip scope appears {} times", n)),
    }
}

fn check_questions(registry: &Registry, issues: &mut Vec<String>) {
    let mut seen = HashSet::new();
    for field in &registry.skip_questions {
        if !seen.insert(*field) {
            issues.push(format!("prompt field '{}' skipped more than once", field));
        }
    }

    for field in registry.prompt_fields() {
        if registry.message(field).is_none() {
            issues.push(format!("no prompt message for '{}'", field));
        }
    }

    if registry.is_skipped(PromptField::Type) {
        issues.push("the 'type' prompt cannot be skipped".to_string());
    }
}

fn check_breaking(registry: &Registry, issues: &mut Vec<String>) {
    for value in &registry.allow_breaking_changes {
        if registry.find_type(value).is_none() {
            issues.push(format!(
                "allow_breaking_changes names unknown type '{}'",
                value
            ));
        }
    }
}

fn check_ticket(registry: &Registry, issues: &mut Vec<String>) {
    let Some(ticket) = &registry.ticket else {
        return;
    };

    if ticket.required && !ticket.allow {
        issues.push("ticket number is required but not allowed".to_string());
    }
    if !ticket.pattern.is_empty() {
        if let Err(e) = Regex::new(&ticket.pattern) {
            issues.push(format!("invalid ticket pattern '{}': {}", ticket.pattern, e));
        }
    }
}
