// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::config::CzConfig;
use crate::error::{ConfigError, CzError, RegistryError, Result, ResultExt};
use crate::export::{render_registry_json, render_rule_set_json, ExportPlan};
use crate::registry::Registry;
use crate::rules::{lint_rule_set_with, TypeCheck};

use super::args::{CheckArgs, Cli, Commands, ExportArgs, InitArgs, OutputFormat};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Neither command reads the configuration.
    match &cli.command {
        Commands::Init(args) => return run_init(args),
        Commands::Version => return run_version(),
        _ => {}
    }

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        CzConfig::load_from(config_path)?
    } else {
        CzConfig::load()?
    };

    match &cli.command {
        Commands::Show => run_show(&cli, &config),
        Commands::Validate => run_validate(&cli, &config),
        Commands::Rules => run_rules(&cli, &config),
        Commands::Export(args) => run_export(&config, args),
        Commands::Check(args) => run_check(&cli, &config, args),
        Commands::Init(_) | Commands::Version => Ok(()),
    }
}

fn is_json(cli: &Cli) -> bool {
    cli.format == Some(OutputFormat::Json)
}

/// Run the show command.
fn run_show(cli: &Cli, config: &CzConfig) -> Result<()> {
    let registry = config.registry();

    if is_json(cli) {
        println!("{}", render_registry_json(registry)?);
    } else {
        print_registry(registry);
    }

    Ok(())
}

fn print_registry(registry: &Registry) {
    println!("{}", style("Types").bold());
    for entry in &registry.types {
        println!(
            "  {:10} {} {}",
            style(&entry.value).green(),
            entry.description(),
            style(format!("[{}]", entry.title)).dim()
        );
    }

    println!("\n{}", style("Scopes").bold());
    for scope in &registry.scopes {
        if scope.is_empty() {
            println!("  {}", style("(skip)").dim());
        } else {
            println!("  {}", scope);
        }
    }

    println!("\n{}", style("Prompts").bold());
    for field in registry.prompt_fields() {
        let text = registry.message(field).unwrap_or("").trim_end();
        println!("  {:14} {}", style(field.as_str()).cyan(), text);
    }

    if !registry.skip_questions.is_empty() {
        let skipped: Vec<&str> = registry.skip_questions.iter().map(|f| f.as_str()).collect();
        println!("\n{} {}", style("Skipped:").bold(), skipped.join(", "));
    }
}

/// Run the validate command.
fn run_validate(cli: &Cli, config: &CzConfig) -> Result<()> {
    let registry = config.registry();
    let issues = registry.issues();

    if is_json(cli) {
        let json = serde_json::json!({
            "valid": issues.is_empty(),
            "types": registry.types.len(),
            "scopes": registry.scopes.len(),
            "issues": issues,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
    } else if issues.is_empty() {
        println!(
            "{} Registry is valid ({} types, {} scopes)",
            style("✓").green().bold(),
            registry.types.len(),
            registry.named_scopes().count()
        );
    } else {
        for issue in &issues {
            println!("{} {}", style("✗").red().bold(), issue);
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        // The issues are already on stdout.
        Err(CzError::Registry(RegistryError::Problems {
            count: issues.len(),
        }))
    }
}

/// Run the rules command.
fn run_rules(cli: &Cli, config: &CzConfig) -> Result<()> {
    let rule_set = lint_rule_set_with(config.registry(), &config.lint);

    if is_json(cli) {
        println!("{}", render_rule_set_json(&rule_set)?);
    } else {
        println!("{} {}", style("extends:").bold(), rule_set.extends.join(", "));
        for (name, rule) in &rule_set.rules {
            println!("{} {}", style(format!("{}:", name)).cyan(), rule);
        }
    }

    Ok(())
}

/// Run the export command.
fn run_export(config: &CzConfig, args: &ExportArgs) -> Result<()> {
    tracing::debug!("Running export command with args: {:?}", args);

    let dir = match &args.dir {
        Some(dir) => dir.clone(),
        None => crate::git::default_export_dir().context("export")?,
    };

    let plan = ExportPlan::new(&dir, config)?;
    let existing = plan.existing();
    let mut overwrite = args.force;

    if !overwrite && !existing.is_empty() && Term::stdout().is_term() {
        let names: Vec<String> = existing.iter().map(|p| p.display().to_string()).collect();
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Overwrite {}?", names.join(", ")))
            .default(false)
            .interact()?;

        if !confirmed {
            return Err(CzError::Cancelled);
        }
        overwrite = true;
    }

    for path in plan.write(overwrite)? {
        println!("{} Wrote {}", style("✓").green().bold(), path.display());
    }

    Ok(())
}

/// Run the check command.
fn run_check(cli: &Cli, config: &CzConfig, args: &CheckArgs) -> Result<()> {
    let rule_set = lint_rule_set_with(config.registry(), &config.lint);
    let check = TypeCheck::run(&rule_set, &args.header)?;

    check.print(is_json(cli));
    check.into_result().map(|_| ())
}

/// Run the init command.
fn run_init(args: &InitArgs) -> Result<()> {
    use crate::config::default::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = std::path::Path::new("czrules.toml");

    if config_path.exists() && !args.force {
        return Err(CzError::Config(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }));
    }

    std::fs::write(config_path, example_config()).context("init")?;

    println!("{} Created czrules.toml", style("✓").green().bold());

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("czrules {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}
