// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit type and scope registry.
//!
//! The registry is the single source both exported configurations are
//! built from: the commit prompt reads it directly and the lint rule set
//! derives its allowed types from it.

mod catalog;
mod schema;
mod validate;

use lazy_static::lazy_static;

pub use schema::{PromptField, Registry, TicketSettings, TypeEntry};

lazy_static! {
    static ref CANONICAL: Registry = catalog::canonical();
}

/// Get the compiled-in registry.
pub fn registry() -> &'static Registry {
    &CANONICAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_accessor_returns_same_instance() {
        assert!(std::ptr::eq(registry(), registry()));
    }

    #[test]
    fn test_type_identifiers_unique_and_whitespace_free() {
        let values = registry().type_values();
        let unique: HashSet<&str> = values.iter().copied().collect();
        assert_eq!(unique.len(), values.len());
        assert!(values.iter().all(|v| !v.chars().any(char::is_whitespace)));
    }

    #[test]
    fn test_skip_scope_present_once() {
        assert_eq!(registry().scopes.iter().filter(|s| s.is_empty()).count(), 1);
        assert_eq!(registry().named_scopes().count(), registry().scopes.len() - 1);
    }

    #[test]
    fn test_skip_questions_are_known_fields() {
        let known: HashSet<&str> = [
            "body",
            "breaking",
            "footer",
            "type",
            "scope",
            "subject",
            "confirmCommit",
        ]
        .into_iter()
        .collect();
        assert!(registry()
            .skip_questions
            .iter()
            .all(|f| known.contains(f.as_str())));
        assert_eq!(
            registry().skip_questions,
            vec![PromptField::Body, PromptField::Breaking, PromptField::Footer]
        );
    }
}
