// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command handlers.
//!
//! ```text
//! cli args --> cmd handlers --> registry / git / graph / setup
//! ```
//!
//! Handlers print user-facing results to stdout; operational detail goes
//! through tracing.

pub mod config;
pub mod git;
pub mod graph;
pub mod repo;
pub mod setup;

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{GitError, Result};
use crate::registry::Database;

/// Open the registry at the configured database path.
pub(crate) fn open_registry(config: &Config) -> Result<Database> {
    let path = config.paths.database()?;
    Ok(Database::open_at(path)?)
}

/// Resolve a repository selector to a working-directory path.
///
/// An existing directory path wins; otherwise the selector is looked up in
/// the registry by name. `None` means the current directory.
pub(crate) fn resolve_repo(config: &Config, selector: Option<&str>) -> Result<PathBuf> {
    let Some(selector) = selector else {
        return Ok(std::env::current_dir()?);
    };

    let path = Path::new(selector);
    if path.is_dir() {
        return Ok(path.to_path_buf());
    }

    let db = open_registry(config)?;
    if let Some(record) = db.find_by_name(selector)? {
        return Ok(PathBuf::from(record.path));
    }

    Err(GitError::RepoNotFound {
        path: selector.to_string(),
    }
    .into())
}
