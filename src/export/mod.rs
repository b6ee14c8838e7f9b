// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Export of the prompt and linter configuration modules.

mod render;
mod writer;

pub use render::{
    render_lint_module, render_prompt_module, render_registry_json, render_rule_set_json,
};
pub use writer::{write_exports, ExportPlan};
