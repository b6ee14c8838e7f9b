// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Registry data structures.
//!
//! The same structures are read from the `[registry]` table of czrules.toml.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One allowed commit type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEntry {
    /// Identifier used in the commit header (`feat`, `fix`, ...).
    pub value: String,
    /// Label shown by the commit prompt.
    pub name: String,
    /// Release-notes section title.
    pub title: String,
}

impl TypeEntry {
    /// Create a new type entry.
    pub fn new(value: impl Into<String>, name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: name.into(),
            title: title.into(),
        }
    }

    /// The prompt label without its leading `value:` prefix.
    pub fn description(&self) -> &str {
        self.name
            .strip_prefix(self.value.as_str())
            .and_then(|rest| rest.strip_prefix(':'))
            .map(str::trim_start)
            .unwrap_or(self.name.as_str())
    }
}

/// Fields the commit prompt knows how to ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PromptField {
    Type,
    Scope,
    TicketNumber,
    Subject,
    Body,
    Breaking,
    Footer,
    ConfirmCommit,
}

impl PromptField {
    /// Get the name the prompt tool uses for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptField::Type => "type",
            PromptField::Scope => "scope",
            PromptField::TicketNumber => "ticketNumber",
            PromptField::Subject => "subject",
            PromptField::Body => "body",
            PromptField::Breaking => "breaking",
            PromptField::Footer => "footer",
            PromptField::ConfirmCommit => "confirmCommit",
        }
    }

    /// Get all prompt fields, in the order the prompt asks them.
    pub fn all() -> &'static [PromptField] {
        &[
            PromptField::Type,
            PromptField::Scope,
            PromptField::TicketNumber,
            PromptField::Subject,
            PromptField::Body,
            PromptField::Breaking,
            PromptField::Footer,
            PromptField::ConfirmCommit,
        ]
    }
}

impl std::str::FromStr for PromptField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PromptField::all()
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("unknown prompt field '{}'", s))
    }
}

impl TryFrom<String> for PromptField {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PromptField> for String {
    fn from(field: PromptField) -> Self {
        field.as_str().to_string()
    }
}

impl std::fmt::Display for PromptField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ticket reference settings for the commit prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicketSettings {
    /// Whether the prompt asks for a ticket number.
    pub allow: bool,
    /// Whether a ticket number must be given.
    pub required: bool,
    /// Prefix placed before the ticket number.
    pub prefix: String,
    /// Regular expression a ticket number must match (empty accepts all).
    pub pattern: String,
}

impl Default for TicketSettings {
    fn default() -> Self {
        Self {
            allow: true,
            required: false,
            prefix: "#".to_string(),
            pattern: String::new(),
        }
    }
}

/// The commit type and scope registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    /// Allowed commit types, in prompt order.
    pub types: Vec<TypeEntry>,

    /// Allowed scopes. The empty string lets the user skip the scope.
    pub scopes: Vec<String>,

    /// Prompt text per field.
    #[serde(default)]
    pub messages: BTreeMap<PromptField, String>,

    /// Fields the prompt must not ask about.
    #[serde(default)]
    pub skip_questions: Vec<PromptField>,

    /// Types that may declare breaking changes.
    #[serde(default)]
    pub allow_breaking_changes: Vec<String>,

    /// Ticket reference settings (prompt does not ask when absent).
    #[serde(default)]
    pub ticket: Option<TicketSettings>,
}

impl Registry {
    /// Type identifiers, in registry order.
    pub fn type_values(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.value.as_str()).collect()
    }

    /// Look up a type by identifier.
    pub fn find_type(&self, value: &str) -> Option<&TypeEntry> {
        self.types.iter().find(|t| t.value == value)
    }

    /// Release-notes section title for a type.
    pub fn release_title(&self, value: &str) -> Option<&str> {
        self.find_type(value).map(|t| t.title.as_str())
    }

    /// Whether the prompt skips a field.
    pub fn is_skipped(&self, field: PromptField) -> bool {
        self.skip_questions.contains(&field)
    }

    /// Whether the prompt asks for a ticket number.
    pub fn asks_ticket(&self) -> bool {
        self.ticket.as_ref().map(|t| t.allow).unwrap_or(false)
    }

    /// Fields the prompt asks about, in prompt order.
    ///
    /// `ticketNumber` is only asked when ticket numbers are allowed.
    pub fn prompt_fields(&self) -> Vec<PromptField> {
        PromptField::all()
            .iter()
            .copied()
            .filter(|f| *f != PromptField::TicketNumber || self.asks_ticket())
            .filter(|f| !self.is_skipped(*f))
            .collect()
    }

    /// Prompt text for a field.
    pub fn message(&self, field: PromptField) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    /// Scopes a commit may name, without the skip entry.
    pub fn named_scopes(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(String::as_str).filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_entry_description() {
        let entry = TypeEntry::new("feat", "feat: New feature", "Features");
        assert_eq!(entry.description(), "New feature");

        let bare = TypeEntry::new("feat", "A new feature", "Features");
        assert_eq!(bare.description(), "A new feature");
    }

    #[test]
    fn test_prompt_field_from_str() {
        assert_eq!("confirmCommit".parse::<PromptField>(), Ok(PromptField::ConfirmCommit));
        assert_eq!("body".parse::<PromptField>(), Ok(PromptField::Body));
        assert_eq!("ticketNumber".parse::<PromptField>(), Ok(PromptField::TicketNumber));
        assert!("ticket".parse::<PromptField>().is_err());
    }

    #[test]
    fn test_prompt_field_serializes_as_name() {
        let json = serde_json::to_string(&PromptField::ConfirmCommit).unwrap();
        assert_eq!(json, "\"confirmCommit\"");
    }

    #[test]
    fn test_parse_registry_from_toml() {
        let toml_str = r#"
scopes = ["", "api"]
skip_questions = ["body", "footer"]

[[types]]
value = "feat"
name = "feat: New feature"
title = "Features"

[messages]
type = "Select type:"
confirmCommit = "Proceed?"
"#;
        let registry: Registry = toml::from_str(toml_str).unwrap();
        assert_eq!(registry.type_values(), vec!["feat"]);
        assert_eq!(registry.message(PromptField::Type), Some("Select type:"));
        assert_eq!(registry.message(PromptField::ConfirmCommit), Some("Proceed?"));
        assert!(registry.is_skipped(PromptField::Body));
        assert!(registry.ticket.is_none());
    }

    #[test]
    fn test_prompt_fields_excludes_skipped() {
        let registry = Registry {
            types: vec![],
            scopes: vec![String::new()],
            messages: BTreeMap::new(),
            skip_questions: vec![PromptField::Body, PromptField::Breaking, PromptField::Footer],
            allow_breaking_changes: vec![],
            ticket: None,
        };
        assert_eq!(
            registry.prompt_fields(),
            vec![
                PromptField::Type,
                PromptField::Scope,
                PromptField::Subject,
                PromptField::ConfirmCommit
            ]
        );
    }

    #[test]
    fn test_prompt_fields_include_ticket_when_allowed() {
        let mut registry = Registry {
            types: vec![],
            scopes: vec![String::new()],
            messages: BTreeMap::new(),
            skip_questions: vec![PromptField::Body, PromptField::Breaking, PromptField::Footer],
            allow_breaking_changes: vec![],
            ticket: Some(TicketSettings::default()),
        };
        assert_eq!(
            registry.prompt_fields(),
            vec![
                PromptField::Type,
                PromptField::Scope,
                PromptField::TicketNumber,
                PromptField::Subject,
                PromptField::ConfirmCommit
            ]
        );

        registry.ticket = Some(TicketSettings {
            allow: false,
            ..TicketSettings::default()
        });
        assert!(!registry.prompt_fields().contains(&PromptField::TicketNumber));
    }
}
