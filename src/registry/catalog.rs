// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The compiled-in commit type and scope catalog.

use std::collections::BTreeMap;

use super::schema::{PromptField, Registry, TypeEntry};

/// Build the canonical registry.
pub(crate) fn canonical() -> Registry {
    Registry {
        types: canonical_types(),
        scopes: canonical_scopes(),
        messages: canonical_messages(),
        skip_questions: vec![PromptField::Body, PromptField::Breaking, PromptField::Footer],
        allow_breaking_changes: Vec::new(),
        ticket: None,
    }
}

fn canonical_types() -> Vec<TypeEntry> {
    vec![
        TypeEntry::new(
            "improve",
            "improve: Some updates to existing functionality etc",
            "Improvements",
        ),
        TypeEntry::new("chore", "chore: Other changes", "Chores"),
        TypeEntry::new("feat", "feat: New feature", "Features"),
        TypeEntry::new("fix", "fix: Bug fix", "Bug Fixes"),
        TypeEntry::new("docs", "docs: Changes to documentation only", "Documentation"),
        TypeEntry::new(
            "style",
            "style: Changes to appearance that do not affect functionality",
            "Styles",
        ),
        TypeEntry::new(
            "revert",
            "revert: (Release Notes)Reverting changes or removing existing features",
            "Reverts",
        ),
        TypeEntry::new(
            "refactor",
            "refactor: (Release Notes)Code changes that are not bug fixes or feature additions",
            "Code Refactoring",
        ),
        TypeEntry::new(
            "perf",
            "perf: (Release Notes)Changes to improve performance",
            "Performance",
        ),
        TypeEntry::new(
            "test",
            "test: Adding missing tests or modifying existing tests",
            "Tests",
        ),
        TypeEntry::new(
            "build",
            "build: Changes to build process or dependencies",
            "Build",
        ),
        TypeEntry::new("ci", "ci: Changes to CI configuration or scripts", "CI"),
    ]
}

fn canonical_scopes() -> Vec<String> {
    [
        "",
        // Core modules
        "marks",
        "features",
        "shared",
        "config",
        "api",
        "keymap",
        "util",
        // Marks
        "quote",
        "heading",
        "list",
        "olist",
        "checkbox",
        "codeblock",
        // Features
        "toggle",
        "convert",
        "autolist",
        "olist-recalc",
        // Testing
        "test",
        // Documentation and metadata
        "readme",
        "changelog",
        "claude",
        "docs",
        // Development and CI/CD
        "git",
        "workflow",
        "release",
        "setup",
        "other",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn canonical_messages() -> BTreeMap<PromptField, String> {
    BTreeMap::from([
        (PromptField::Type, "Select type:\n".to_string()),
        (
            PromptField::Scope,
            "Select scope (press Enter to skip):\n".to_string(),
        ),
        (PromptField::Subject, "Enter subject:\n".to_string()),
        (
            PromptField::ConfirmCommit,
            "Proceed with the commit:\n".to_string(),
        ),
    ])
}
