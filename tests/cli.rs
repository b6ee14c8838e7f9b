// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command run from an empty directory so no stray czrules.toml is picked up.
fn czrules(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("czrules").unwrap();
    cmd.current_dir(dir.path()).env("HOME", dir.path());
    cmd
}

const TWO_TYPES: &str = r#"
[registry]
scopes = ["", "core"]
skip_questions = ["body", "breaking", "footer"]

[[registry.types]]
value = "feat"
name = "feat: New feature"
title = "Features"

[[registry.types]]
value = "fix"
name = "fix: Bug fix"
title = "Bug Fixes"

[registry.messages]
type = "Select type:"
scope = "Select scope:"
subject = "Enter subject:"
confirmCommit = "Proceed?"
"#;

#[test]
fn test_validate_compiled_registry() {
    let dir = TempDir::new().unwrap();
    czrules(&dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Registry is valid (12 types, 27 scopes)"));
}

#[test]
fn test_validate_reports_every_problem() {
    let dir = TempDir::new().unwrap();
    let config = TWO_TYPES.replace("scopes = [\"\", \"core\"]", "scopes = [\"core\"]")
        + "\n[[registry.types]]\nvalue = \"feat\"\nname = \"feat: again\"\ntitle = \"Features\"\n";
    fs::write(dir.path().join("czrules.toml"), config).unwrap();

    czrules(&dir)
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("duplicate commit type 'feat'"))
        .stdout(predicate::str::contains("scopes must contain the empty skip entry"))
        .stderr(predicate::str::contains("registry has 2 problem(s)"))
        .stderr(predicate::str::contains("duplicate commit type").not());
}

#[test]
fn test_rules_json_from_project_registry() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("czrules.toml"), TWO_TYPES).unwrap();

    let output = czrules(&dir)
        .args(["rules", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "extends": ["@commitlint/config-conventional"],
            "rules": { "type-enum": [2, "always", ["feat", "fix"]] }
        })
    );
}

#[test]
fn test_check_accepts_registered_type() {
    let dir = TempDir::new().unwrap();
    czrules(&dir)
        .args(["check", "improve(olist): renumber on paste"])
        .assert()
        .success()
        .stdout(predicate::str::contains("improve"));
}

#[test]
fn test_check_rejects_unknown_type() {
    let dir = TempDir::new().unwrap();
    czrules(&dir)
        .args(["check", "wip: half done"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Commit type 'wip' rejected by type-enum"));
}

#[test]
fn test_export_writes_both_modules() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");
    fs::create_dir(&out).unwrap();

    czrules(&dir)
        .args(["export", "--dir"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let prompt = fs::read_to_string(out.join(".cz-config.js")).unwrap();
    let lint = fs::read_to_string(out.join("commitlint.config.js")).unwrap();
    assert!(prompt.contains("\"skipQuestions\""));
    assert!(lint.contains("\"type-enum\""));

    // Without --force and without a terminal, existing files are kept.
    czrules(&dir)
        .args(["export", "--dir"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Refusing to overwrite"));

    czrules(&dir)
        .args(["export", "--force", "--dir"])
        .arg(&out)
        .assert()
        .success();
    assert_eq!(fs::read_to_string(out.join(".cz-config.js")).unwrap(), prompt);
}

#[test]
fn test_show_json_matches_registry() {
    let dir = TempDir::new().unwrap();
    let output = czrules(&dir)
        .args(["show", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["types"].as_array().unwrap().len(), 12);
    assert_eq!(json["scopes"][0], "");
}

#[test]
fn test_init_creates_config_once() {
    let dir = TempDir::new().unwrap();
    czrules(&dir).arg("init").assert().success();
    assert!(dir.path().join("czrules.toml").exists());

    czrules(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    czrules(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn test_init_and_version_ignore_broken_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("czrules.toml"), "[lint\nbroken").unwrap();

    czrules(&dir).arg("show").assert().failure();
    czrules(&dir).args(["init", "--force"]).assert().success();
    czrules(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("czrules"));

    // The broken file was replaced by the example.
    czrules(&dir).arg("validate").assert().success();
}

#[test]
fn test_missing_config_path() {
    let dir = TempDir::new().unwrap();
    czrules(&dir)
        .args(["--config", "nope.toml", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}
