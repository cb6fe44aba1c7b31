// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git query operations.
//!
//! ```text
//! is_git_repo / current_branch --> GixBackend  --> .git/ (no subprocess)
//! recent_commits / branches /
//! graph_log                    --> ShellBackend --> git CLI stdout
//! ```
//!
//! Queries whose textual output is the result go through the CLI; pure
//! state inspection uses gix.

use crate::error::DeckResult;
use std::path::Path;

use super::backend::{GitQuery, GixBackend, ShellBackend};

#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    GixBackend::is_git_repo(path)
}

/// Get current branch name (None if HEAD is detached).
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or head resolution fails.
pub fn current_branch(path: &Path) -> DeckResult<Option<String>> {
    GixBackend::current_branch(path)
}

/// Last `count` commits as oneline entries.
///
/// # Errors
///
/// Returns a `GitError` if the log command fails.
pub fn recent_commits(repo_path: &Path, count: usize) -> DeckResult<Vec<String>> {
    ShellBackend::recent_commits(repo_path, count)
}

/// Local branch names, short form.
///
/// # Errors
///
/// Returns a `GitError` if the branch command fails.
pub fn local_branches(repo_path: &Path) -> DeckResult<Vec<String>> {
    ShellBackend::local_branches(repo_path)
}

/// Raw decorated graph-log lines for the reconstructor, color disabled.
///
/// # Errors
///
/// Returns a `GitError` if the log command fails.
pub fn graph_log(repo_path: &Path, limit: Option<usize>) -> DeckResult<Vec<String>> {
    ShellBackend::graph_log(repo_path, limit)
}
