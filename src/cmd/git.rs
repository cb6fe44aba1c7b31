// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command implementations.
//!
//! Failures of the underlying git commands surface with git's own stderr
//! text; nothing is rephrased here.

use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

use crate::cli::git::{BranchesArgs, CheckoutArgs, FetchArgs, PullArgs, PushArgs, StatusArgs};
use crate::config::Config;
use crate::error::Result;
use crate::git::{cmd, query};

use super::{open_registry, resolve_repo};

/// Status payload for `--json` output.
#[derive(Debug, Serialize)]
struct RepoStatus {
    branch: Option<String>,
    commits: Vec<String>,
}

/// Show current branch and recent commits.
///
/// # Errors
///
/// Returns an error if the repository cannot be resolved or queried.
pub fn run_status_command(args: &StatusArgs, config: &Config) -> Result<()> {
    let path = resolve_repo(config, args.repo.as_deref())?;
    let branch = query::current_branch(&path)?;
    let commits = query::recent_commits(&path, args.count)?;

    if args.json {
        let status = RepoStatus { branch, commits };
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("branch: {}", branch.as_deref().unwrap_or("(detached HEAD)"));
    for commit in &commits {
        println!("  {commit}");
    }
    Ok(())
}

/// Fetch from a remote.
///
/// # Errors
///
/// Returns an error if the fetch fails.
pub fn run_fetch_command(args: &FetchArgs, config: &Config, dry_run: bool) -> Result<()> {
    let path = resolve_repo(config, args.repo.as_deref())?;
    let remote = args.remote.as_deref().unwrap_or(&config.git.remote);

    if dry_run {
        debug!(repo = %path.display(), remote, "would fetch");
        return Ok(());
    }

    let output = cmd::fetch(&path, remote)?;
    info!(repo = %path.display(), remote, "fetched");
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Pull the current branch from its tracking remote.
///
/// # Errors
///
/// Returns an error if the pull fails.
pub fn run_pull_command(args: &PullArgs, config: &Config, dry_run: bool) -> Result<()> {
    let path = resolve_repo(config, args.repo.as_deref())?;

    if dry_run {
        debug!(repo = %path.display(), "would pull");
        return Ok(());
    }

    let output = cmd::pull(&path)?;
    info!(repo = %path.display(), "pulled");
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Push the current branch to its tracking remote.
///
/// # Errors
///
/// Returns an error if the push fails.
pub fn run_push_command(args: &PushArgs, config: &Config, dry_run: bool) -> Result<()> {
    let path = resolve_repo(config, args.repo.as_deref())?;

    if dry_run {
        debug!(repo = %path.display(), "would push");
        return Ok(());
    }

    let output = cmd::push(&path)?;
    info!(repo = %path.display(), "pushed");
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// List one repository's branches, or the current branch of every tracked
/// repository when no repository is given.
///
/// # Errors
///
/// Returns an error if the selected repository cannot be queried or the
/// registry cannot be read.
pub fn run_branches_command(args: &BranchesArgs, config: &Config) -> Result<()> {
    if let Some(selector) = args.repo.as_deref() {
        let path = resolve_repo(config, Some(selector))?;
        let current = query::current_branch(&path)?;
        for branch in query::local_branches(&path)? {
            let marker = if current.as_deref() == Some(branch.as_str()) {
                "*"
            } else {
                " "
            };
            println!("{marker} {branch}");
        }
        return Ok(());
    }

    let db = open_registry(config)?;
    for repo in db.list_repos()? {
        let branch = match query::current_branch(Path::new(&repo.path)) {
            Ok(Some(branch)) => branch,
            Ok(None) => "(detached)".to_string(),
            Err(_) => "(unavailable)".to_string(),
        };
        if !args.all && (branch == "master" || branch == "main") {
            continue;
        }
        println!("{:30} {branch}", repo.name);
    }
    Ok(())
}

/// Checkout a branch, tag, or commit.
///
/// # Errors
///
/// Returns an error if the checkout fails.
pub fn run_checkout_command(args: &CheckoutArgs, config: &Config, dry_run: bool) -> Result<()> {
    let path = resolve_repo(config, args.repo.as_deref())?;

    if dry_run {
        debug!(repo = %path.display(), what = %args.what, "would checkout");
        return Ok(());
    }

    cmd::checkout(&path, &args.what)?;
    info!(repo = %path.display(), what = %args.what, "checked out");
    println!("Checked out {}", args.what);
    Ok(())
}
