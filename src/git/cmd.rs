// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command operations using the shell backend.
//!
//! ```text
//! cmd.rs --> ShellBackend --> git executable (credentials, remotes)
//! ```
//!
//! `pull` and `push` take no remote/branch arguments: the repository's own
//! tracking configuration decides, exactly as running them by hand would.

use crate::error::DeckResult;
use std::path::Path;

use super::backend::{GitMutation, ShellBackend};

/// Fetch from a remote. Returns the command's stdout.
///
/// # Errors
///
/// Returns a `GitError` carrying git's stderr if the fetch fails.
pub fn fetch(repo_path: &Path, remote: &str) -> DeckResult<String> {
    ShellBackend::fetch(repo_path, remote)
}

/// Pull into the current branch from its tracking remote.
///
/// # Errors
///
/// Returns a `GitError` carrying git's stderr if the pull fails.
pub fn pull(repo_path: &Path) -> DeckResult<String> {
    ShellBackend::pull(repo_path)
}

/// Push the current branch to its tracking remote.
///
/// # Errors
///
/// Returns a `GitError` carrying git's stderr if the push fails.
pub fn push(repo_path: &Path) -> DeckResult<String> {
    ShellBackend::push(repo_path)
}

/// Checkout a branch, tag, or commit.
///
/// # Errors
///
/// Returns a `GitError` carrying git's stderr if the checkout fails.
pub fn checkout(repo_path: &Path, what: &str) -> DeckResult<()> {
    ShellBackend::checkout(repo_path, what)
}
