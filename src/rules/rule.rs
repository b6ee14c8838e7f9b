// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Lint rule values.

use serde::ser::SerializeTuple;
use serde::{Deserialize, Serialize, Serializer};

/// Rule severity, serialized as the linter's numeric level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    Disabled,
    Warning,
    Error,
}

impl Severity {
    /// Numeric level understood by the linter.
    pub fn level(&self) -> u8 {
        match self {
            Severity::Disabled => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }

    /// Get the display name of the severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Disabled => "off",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, String> {
        match level {
            0 => Ok(Severity::Disabled),
            1 => Ok(Severity::Warning),
            2 => Ok(Severity::Error),
            n => Err(format!("invalid severity level {} (expected 0, 1 or 2)", n)),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.level()
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a rule's values must match or must not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    Always,
    Never,
}

impl Applicability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Applicability::Always => "always",
            Applicability::Never => "never",
        }
    }
}

/// A single rule entry: `[severity, applicability, values]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleConfig {
    pub severity: Severity,
    pub applicability: Applicability,
    pub values: Vec<String>,
}

impl RuleConfig {
    /// Create a new rule entry.
    pub fn new(severity: Severity, applicability: Applicability, values: Vec<String>) -> Self {
        Self {
            severity,
            applicability,
            values,
        }
    }

    /// Evaluate an enum rule against a single token.
    ///
    /// A disabled rule permits everything. An `always` rule with no values
    /// permits nothing.
    pub fn permits(&self, token: &str) -> bool {
        if self.severity == Severity::Disabled {
            return true;
        }

        let listed = self.values.iter().any(|v| v == token);
        match self.applicability {
            Applicability::Always => listed,
            Applicability::Never => !listed,
        }
    }
}

impl Serialize for RuleConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.severity)?;
        tuple.serialize_element(&self.applicability)?;
        tuple.serialize_element(&self.values)?;
        tuple.end()
    }
}

impl std::fmt::Display for RuleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}, [{}]]",
            self.severity,
            self.applicability.as_str(),
            self.values.join(", ")
        )
    }
}
