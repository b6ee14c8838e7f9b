// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from czrules.toml.

use serde::{Deserialize, Serialize};

use crate::registry::Registry;
use crate::rules::{Severity, BASELINE};

/// The main configuration structure for czrules.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CzConfig {
    /// Project registry. The compiled-in registry is used when absent.
    pub registry: Option<Registry>,

    /// Lint rule derivation settings.
    pub lint: LintConfig,

    /// Export file names.
    pub export: ExportConfig,
}

impl CzConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }

    /// The registry in effect.
    pub fn registry(&self) -> &Registry {
        self.registry
            .as_ref()
            .unwrap_or_else(|| crate::registry::registry())
    }
}

/// Lint rule derivation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LintConfig {
    /// External rule sets the derived rules extend.
    pub extends: Vec<String>,

    /// Severity level of the derived type-enum rule (0, 1 or 2).
    pub type_enum_severity: Severity,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            extends: vec![BASELINE.to_string()],
            type_enum_severity: Severity::Error,
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// File the commit prompt loads.
    pub prompt_file: String,

    /// File the commit linter loads.
    pub lint_file: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            prompt_file: ".cz-config.js".to_string(),
            lint_file: "commitlint.config.js".to_string(),
        }
    }
}
