// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Checking a commit type token against the derived rule set.

use crate::error::{CzError, Result, RuleError};
use console::style;
use lazy_static::lazy_static;
use regex::Regex;

use super::derive::TYPE_ENUM;
use super::rule::RuleConfig;
use super::set::RuleSet;

lazy_static! {
    /// Matches `type(scope)!: subject` as well as a bare `type`.
    static ref HEADER_REGEX: Regex = Regex::new(
        r"^(?P<type>[^\s():!]+)(?:\((?P<scope>[^)]*)\))?(?P<breaking>!)?(?::\s*(?P<subject>.*))?$"
    )
    .expect("header regex is valid");
}

/// Parts of a commit header relevant to the type check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderParts {
    pub commit_type: String,
    pub scope: Option<String>,
    pub is_breaking: bool,
}

impl HeaderParts {
    /// Parse the first line of a commit message.
    pub fn parse(message: &str) -> Result<Self> {
        let header = message.trim().lines().next().unwrap_or("").trim_end();

        let captures = HEADER_REGEX.captures(header).ok_or_else(|| {
            CzError::Rule(RuleError::MalformedHeader {
                header: header.to_string(),
            })
        })?;

        Ok(Self {
            commit_type: captures["type"].to_string(),
            scope: captures
                .name("scope")
                .map(|m| m.as_str().to_string())
                .filter(|s| !s.is_empty()),
            is_breaking: captures.name("breaking").is_some(),
        })
    }
}

/// Outcome of checking one header.
#[derive(Debug, Clone)]
pub struct TypeCheck {
    /// The header as given.
    pub header: String,
    /// Parsed header parts.
    pub parts: HeaderParts,
    /// The rule applied, if the rule set has one.
    pub rule: Option<RuleConfig>,
}

impl TypeCheck {
    /// Check a header's type token against a rule set.
    pub fn run(rule_set: &RuleSet, header: &str) -> Result<Self> {
        let parts = HeaderParts::parse(header)?;
        let rule = rule_set.rule(TYPE_ENUM).cloned();

        tracing::debug!(commit_type = %parts.commit_type, has_rule = rule.is_some(), "Checking type");

        Ok(Self {
            header: header.trim().to_string(),
            parts,
            rule,
        })
    }

    /// Whether the type token passes.
    pub fn is_permitted(&self) -> bool {
        self.rule
            .as_ref()
            .map(|r| r.permits(&self.parts.commit_type))
            .unwrap_or(true)
    }

    /// Convert a rejection into an error.
    pub fn into_result(self) -> Result<Self> {
        if self.is_permitted() {
            return Ok(self);
        }

        let allowed = self
            .rule
            .as_ref()
            .map(|r| r.values.join(", "))
            .unwrap_or_default();

        Err(CzError::Rule(RuleError::Rejected {
            rule: TYPE_ENUM.to_string(),
            commit_type: self.parts.commit_type,
            allowed,
        }))
    }

    /// Print the outcome to stdout, as JSON when `json` is set.
    pub fn print(&self, json: bool) {
        if json {
            self.print_json();
        } else {
            self.print_text();
        }
    }

    /// The outcome as a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": self.is_permitted(),
            "header": self.header,
            "type": self.parts.commit_type,
            "scope": self.parts.scope,
            "breaking": self.parts.is_breaking,
            "rule": self.rule,
        })
    }

    fn print_text(&self) {
        let status = if self.is_permitted() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };
        println!("{} {} {}", status, style(&self.parts.commit_type).cyan(), self.header);

        if !self.is_permitted() {
            if let Some(ref rule) = self.rule {
                println!(
                    "  {} {}",
                    style("→").dim(),
                    style(format!("Use one of: {}", rule.values.join(", "))).dim()
                );
            }
        }
    }

    fn print_json(&self) {
        println!(
            "{}",
            serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
        );
    }
}
