// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::CzConfig;

/// Get the default configuration.
pub fn default_config() -> CzConfig {
    CzConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r##"# czrules configuration
#
# Without a [registry] table the compiled-in commit types and scopes are used.

[lint]
extends = ["@commitlint/config-conventional"]
# 0 = off, 1 = warning, 2 = error
type_enum_severity = 2

[export]
prompt_file = ".cz-config.js"
lint_file = "commitlint.config.js"

# [registry]
# scopes = ["", "core", "cli", "docs"]
# skip_questions = ["body", "breaking", "footer"]
# allow_breaking_changes = ["feat", "fix"]
#
# [[registry.types]]
# value = "feat"
# name = "feat: New feature"
# title = "Features"
#
# [[registry.types]]
# value = "fix"
# name = "fix: Bug fix"
# title = "Bug Fixes"
#
# [registry.messages]
# type = "Select type:\n"
# scope = "Select scope (press Enter to skip):\n"
# subject = "Enter subject:\n"
# confirmCommit = "Proceed with the commit:\n"
# ticketNumber = "Enter ticket number (press Enter to skip):\n"
#
# [registry.ticket]
# allow = true
# required = false
# prefix = "#"
# pattern = ""
"##
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert!(config.registry.is_none());
    }

    #[test]
    fn test_example_config_parseable() {
        let example = example_config();
        let config: CzConfig = toml::from_str(example).expect("Example config should parse");
        assert_eq!(config, default_config());
    }

    #[test]
    fn test_example_registry_parseable_when_uncommented() {
        let uncommented: String = example_config()
            .lines()
            .skip_while(|line| *line != "# [registry]")
            .filter_map(|line| line.strip_prefix("# "))
            .collect::<Vec<_>>()
            .join("\n");
        let config: CzConfig = toml::from_str(&uncommented).expect("Registry example should parse");
        let registry = config.registry.expect("registry table present");
        assert_eq!(registry.type_values(), vec!["feat", "fix"]);
        assert!(registry.validate().is_ok());
    }
}
