// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for czrules.
//!
//! Errors are grouped by the part of the crate that raises them and folded
//! into [`CzError`] for propagation.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for czrules operations.
#[derive(Error, Debug)]
pub enum CzError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Registry data errors
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    // Rule evaluation errors
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    // Export errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // UI/Interactive errors
    #[error("UI error: {0}")]
    Ui(String),

    // User cancelled operation
    #[error("Operation cancelled by user")]
    Cancelled,

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl From<dialoguer::Error> for CzError {
    fn from(err: dialoguer::Error) -> Self {
        CzError::Ui(err.to_string())
    }
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Problems with registry data.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("{} problem(s) found:\n  - {}", .issues.len(), .issues.join("\n  - "))]
    Invalid { issues: Vec<String> },

    #[error("registry has {count} problem(s)")]
    Problems { count: usize },
}

/// Rule-related errors.
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Commit type '{commit_type}' rejected by {rule} (allowed: {allowed})")]
    Rejected {
        rule: String,
        commit_type: String,
        allowed: String,
    },

    #[error("Could not find a commit type in header: '{header}'")]
    MalformedHeader { header: String },
}

/// Export-related errors.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to render {what}: {message}")]
    RenderFailed { what: String, message: String },

    #[error("Refusing to overwrite existing file: {path}")]
    FileExists { path: PathBuf },

    #[error("Failed to write {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },
}

/// Result type alias for czrules operations.
pub type Result<T> = std::result::Result<T, CzError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CzError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
