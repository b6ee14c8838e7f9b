// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rendering the registry and rule set in the shapes external tools load.

use handlebars::Handlebars;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::{CzError, ExportError, Result};
use crate::registry::{PromptField, Registry, TypeEntry};
use crate::rules::RuleSet;

/// CommonJS module wrapper for exported objects.
const MODULE_TEMPLATE: &str = "// {{{file}}}: generated by czrules, do not edit by hand.\nmodule.exports = {{{body}}};\n";

/// The registry as the commit prompt expects it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PromptModule<'a> {
    types: &'a [TypeEntry],
    scopes: &'a [String],
    messages: &'a BTreeMap<PromptField, String>,
    skip_questions: &'a [PromptField],
    #[serde(skip_serializing_if = "is_empty")]
    allow_breaking_changes: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    allow_ticket_number: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_ticket_number_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ticket_number_prefix: Option<&'a str>,
    #[serde(rename = "ticketNumberRegExp", skip_serializing_if = "Option::is_none")]
    ticket_number_regexp: Option<&'a str>,
}

fn is_empty<T>(items: &&[T]) -> bool {
    items.is_empty()
}

impl<'a> From<&'a Registry> for PromptModule<'a> {
    fn from(registry: &'a Registry) -> Self {
        let ticket = registry.ticket.as_ref();
        Self {
            types: &registry.types,
            scopes: &registry.scopes,
            messages: &registry.messages,
            skip_questions: &registry.skip_questions,
            allow_breaking_changes: &registry.allow_breaking_changes,
            allow_ticket_number: ticket.map(|t| t.allow),
            is_ticket_number_required: ticket.map(|t| t.required),
            ticket_number_prefix: ticket.map(|t| t.prefix.as_str()),
            ticket_number_regexp: ticket.map(|t| t.pattern.as_str()),
        }
    }
}

fn to_json<T: Serialize>(what: &str, value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| {
        CzError::Export(ExportError::RenderFailed {
            what: what.to_string(),
            message: e.to_string(),
        })
    })
}

/// Render the registry as pretty JSON.
pub fn render_registry_json(registry: &Registry) -> Result<String> {
    to_json("registry", &PromptModule::from(registry))
}

/// Render a rule set as pretty JSON.
pub fn render_rule_set_json(rule_set: &RuleSet) -> Result<String> {
    to_json("rule set", rule_set)
}

/// Render the registry as a prompt configuration module.
pub fn render_prompt_module(registry: &Registry, file: &str) -> Result<String> {
    render_module(file, &render_registry_json(registry)?)
}

/// Render a rule set as a linter configuration module.
pub fn render_lint_module(rule_set: &RuleSet, file: &str) -> Result<String> {
    render_module(file, &render_rule_set_json(rule_set)?)
}

fn render_module(file: &str, body: &str) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);

    let render_error = |message: String| {
        CzError::Export(ExportError::RenderFailed {
            what: file.to_string(),
            message,
        })
    };

    handlebars
        .register_template_string("module", MODULE_TEMPLATE)
        .map_err(|e| render_error(e.to_string()))?;

    handlebars
        .render(
            "module",
            &serde_json::json!({ "file": file, "body": body }),
        )
        .map_err(|e| render_error(e.to_string()))
}
