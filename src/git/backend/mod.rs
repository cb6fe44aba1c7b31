// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (read)     --> GixBackend (pure Rust gix)
//! GitMutation (write) --> ShellBackend (git CLI)
//! output queries      --> ShellBackend (git CLI, stdout is the result)
//! ```

use crate::error::{DeckResult, GitError, GixError};
use std::path::Path;

// --- Query Trait (Read-only operations) ---

/// Read-only git query operations that need no subprocess.
pub trait GitQuery {
    /// Check if path is inside a git work tree.
    fn is_git_repo(path: &Path) -> bool;

    /// Get current branch name (None if HEAD is detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or head resolution fails.
    fn current_branch(path: &Path) -> DeckResult<Option<String>>;
}

// --- Mutation Trait (Write operations) ---

/// Git operations that modify repository state or talk to remotes.
///
/// These use shell git for full CLI compatibility: credential helpers,
/// tracking-branch defaults for bare `pull`/`push`, SSH configuration.
pub trait GitMutation {
    /// Fetch from a remote. Returns the command's stdout.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the fetch operation fails.
    fn fetch(repo_path: &Path, remote: &str) -> DeckResult<String>;

    /// Pull into the current branch from its tracking remote.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the pull operation fails.
    fn pull(repo_path: &Path) -> DeckResult<String>;

    /// Push the current branch to its tracking remote.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the push operation fails.
    fn push(repo_path: &Path) -> DeckResult<String>;

    /// Checkout a branch, tag, or commit.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the checkout operation fails.
    fn checkout(repo_path: &Path, what: &str) -> DeckResult<()>;
}

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust git backend using gix.
///
/// Repository discovery and branch queries without spawning subprocesses.
pub struct GixBackend;

impl GitQuery for GixBackend {
    fn is_git_repo(path: &Path) -> bool {
        gix::discover(path).is_ok()
    }

    fn current_branch(path: &Path) -> DeckResult<Option<String>> {
        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend driving the git CLI.
///
/// The program is resolved once per process by [`crate::setup::git_program`]:
/// a provisioned portable installation when present, then `PATH`.
pub struct ShellBackend;

impl ShellBackend {
    /// Execute a git command. Sets `GCM_INTERACTIVE=never` and
    /// `GIT_TERMINAL_PROMPT=0` so nothing ever blocks on a prompt.
    pub(crate) fn git_command(args: &[&str], cwd: &Path) -> DeckResult<String> {
        use std::process::Command;

        let output = Command::new(crate::setup::git_program())
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|e| std::io::Error::new(e.kind(), format!("failed to execute git: {e}")))?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Last `count` commit subjects, one line each.
    pub(crate) fn recent_commits(repo_path: &Path, count: usize) -> DeckResult<Vec<String>> {
        let n = count.to_string();
        let output = Self::git_command(&["log", "--oneline", "-n", &n], repo_path)?;
        Ok(split_lines(&output))
    }

    /// Local branch names, short form.
    pub(crate) fn local_branches(repo_path: &Path) -> DeckResult<Vec<String>> {
        let output = Self::git_command(&["branch", "--format=%(refname:short)"], repo_path)?;
        Ok(split_lines(&output))
    }

    /// Decorated topological log with graph glyphs, color disabled.
    ///
    /// One visual entry per line, ready for the graph reconstructor.
    pub(crate) fn graph_log(repo_path: &Path, limit: Option<usize>) -> DeckResult<Vec<String>> {
        let mut args = vec![
            "log",
            "--graph",
            "--oneline",
            "--decorate",
            "--color=never",
        ];
        let n;
        if let Some(limit) = limit {
            n = limit.to_string();
            args.extend(&["-n", n.as_str()]);
        }
        let output = Self::git_command(&args, repo_path)?;
        Ok(split_lines(&output))
    }
}

impl GitMutation for ShellBackend {
    fn fetch(repo_path: &Path, remote: &str) -> DeckResult<String> {
        Self::git_command(&["fetch", remote], repo_path)
    }

    fn pull(repo_path: &Path) -> DeckResult<String> {
        Self::git_command(&["pull"], repo_path)
    }

    fn push(repo_path: &Path) -> DeckResult<String> {
        Self::git_command(&["push"], repo_path)
    }

    fn checkout(repo_path: &Path, what: &str) -> DeckResult<()> {
        Self::git_command(
            &["-c", "advice.detachedHead=false", "checkout", "-q", what],
            repo_path,
        )?;
        Ok(())
    }
}

/// Split trimmed command output into lines, dropping a trailing empty tail.
fn split_lines(output: &str) -> Vec<String> {
    if output.is_empty() {
        return Vec::new();
    }
    output.lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests;
