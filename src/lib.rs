// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! czrules - Commit Convention Registry
//!
//! A single source of truth for a project's commit types and scopes, and
//! the commit-message lint rules derived from it.
//!
//! # Features
//!
//! - **Registry**: Ordered commit types, scopes, prompt messages and skipped prompts
//! - **Rule Derivation**: `type-enum` lint rule built from the registry's types
//! - **Export**: Prompt and linter configuration modules for the external tools
//! - **Validation**: Edit-time consistency checks for registry data
//!
//! # Example
//!
//! ```
//! use czrules::registry::registry;
//! use czrules::rules::{lint_rule_set, TYPE_ENUM};
//!
//! let rules = lint_rule_set(registry());
//! let type_enum = rules.rule(TYPE_ENUM).unwrap();
//!
//! assert!(type_enum.permits("feat"));
//! assert!(!type_enum.permits("wip"));
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod git;
pub mod registry;
pub mod rules;

// Re-exports for convenience
pub use config::CzConfig;
pub use error::{CzError, Result};
pub use registry::{registry, Registry};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of czrules.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The short git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// `git describe` output at compile time (if available).
    pub const GIT_DESCRIBE: Option<&str> = option_env!("VERGEN_GIT_DESCRIBE");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        let build = GIT_DESCRIBE.or(GIT_SHA);
        match (build, GIT_COMMIT_DATE) {
            (Some(build), Some(date)) => format!("{} ({} {})", VERSION, build, date),
            (Some(build), None) => format!("{} ({})", VERSION, build),
            _ => VERSION.to_string(),
        }
    }

}
