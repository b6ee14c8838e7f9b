// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Writing the exported configuration files.

use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::config::CzConfig;
use crate::error::{CzError, ExportError, Result};
use crate::rules::lint_rule_set_with;

use super::render::{render_lint_module, render_prompt_module};

/// Files to be written by an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPlan {
    files: Vec<(PathBuf, String)>,
}

impl ExportPlan {
    /// Render both modules for the given configuration into `dir`.
    pub fn new(dir: &Path, config: &CzConfig) -> Result<Self> {
        let registry = config.registry();
        let rule_set = lint_rule_set_with(registry, &config.lint);

        let prompt = render_prompt_module(registry, &config.export.prompt_file)?;
        let lint = render_lint_module(&rule_set, &config.export.lint_file)?;

        Ok(Self {
            files: vec![
                (dir.join(&config.export.prompt_file), prompt),
                (dir.join(&config.export.lint_file), lint),
            ],
        })
    }

    /// Target paths, in write order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(|(path, _)| path.as_path())
    }

    /// Targets that already exist on disk.
    pub fn existing(&self) -> Vec<&Path> {
        self.paths().filter(|p| p.exists()).collect()
    }

    /// Write every file.
    ///
    /// Nothing is written when a target exists and `overwrite` is false.
    /// Contents are staged next to their targets and only moved into place
    /// once every file has been staged, so a failed write leaves the
    /// targets as they were.
    pub fn write(&self, overwrite: bool) -> Result<Vec<PathBuf>> {
        if !overwrite {
            if let Some(path) = self.existing().first() {
                return Err(CzError::Export(ExportError::FileExists {
                    path: path.to_path_buf(),
                }));
            }
        }

        if let Some(path) = self.paths().find(|p| p.is_dir()) {
            return Err(write_failed(path, "target is a directory"));
        }

        let mut staged = Vec::with_capacity(self.files.len());
        for (path, content) in &self.files {
            staged.push((path, stage(path, content)?));
        }

        let mut written = Vec::with_capacity(staged.len());
        for (path, file) in staged {
            tracing::debug!("Writing {:?}", path);
            file.persist(path).map_err(|e| write_failed(path, e.error))?;
            written.push(path.clone());
        }

        Ok(written)
    }
}

fn write_failed(path: &Path, message: impl ToString) -> CzError {
    CzError::Export(ExportError::WriteFailed {
        path: path.to_path_buf(),
        message: message.to_string(),
    })
}

/// Write `content` to a temporary file in the target's directory.
fn stage(path: &Path, content: &str) -> Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(|e| write_failed(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| write_failed(path, e))?;
    Ok(file)
}

/// Render and write both modules into `dir`.
pub fn write_exports(dir: &Path, config: &CzConfig, overwrite: bool) -> Result<Vec<PathBuf>> {
    ExportPlan::new(dir, config)?.write(overwrite)
}
