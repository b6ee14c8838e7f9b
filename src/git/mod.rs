// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Only used to find where exported files belong.

use git2::Repository;
use std::path::{Path, PathBuf};

/// Find the work tree root of the repository containing `start`.
///
/// Returns `None` outside a repository and for bare repositories.
pub fn work_tree_root(start: &Path) -> Option<PathBuf> {
    let repo = match Repository::discover(start) {
        Ok(repo) => repo,
        Err(e) => {
            tracing::debug!("No git repository at {:?}: {}", start, e.message());
            return None;
        }
    };

    repo.workdir().map(Path::to_path_buf)
}

/// Directory exports go to when none is given: the repository root, or the
/// current directory outside a repository.
pub fn default_export_dir() -> std::io::Result<PathBuf> {
    let current = std::env::current_dir()?;
    Ok(work_tree_root(&current).unwrap_or(current))
}
