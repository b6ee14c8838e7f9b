// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// czrules - commit type/scope registry and lint rule exporter
///
/// Keeps the commit prompt and the commit linter configuration in sync.
#[derive(Parser, Debug)]
#[command(name = "czrules")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Commit type/scope registry and lint rule exporter", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the commit type and scope registry
    Show,

    /// Check the registry for data problems
    Validate,

    /// Print the derived lint rule set
    Rules,

    /// Write the prompt and linter configuration files
    Export(ExportArgs),

    /// Check a commit header's type against the lint rules
    Check(CheckArgs),

    /// Initialize czrules configuration
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the export command.
#[derive(Parser, Debug, Default, Clone)]
pub struct ExportArgs {
    /// Output directory (default: repository root, else current directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Overwrite existing files without asking
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Commit header such as "feat(api): add endpoint", or a bare type
    pub header: String,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Default, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}
