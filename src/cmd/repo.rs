// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Registry command implementations.

use anyhow::Context;
use tracing::info;

use crate::cli::repo::{AddArgs, RemoveArgs, ReposArgs};
use crate::config::Config;
use crate::error::{GitError, RegistryError, Result};
use crate::git::query::is_git_repo;

use super::open_registry;

/// Track a repository. The path must exist and hold a git repository.
///
/// # Errors
///
/// Returns an error if the path cannot be canonicalized, is not a git
/// repository, or the registry cannot be written.
pub fn run_add_command(args: &AddArgs, config: &Config) -> Result<()> {
    let path = std::fs::canonicalize(&args.path)
        .with_context(|| format!("failed to resolve {}", args.path.display()))?;

    if !is_git_repo(&path) {
        return Err(GitError::NotARepository {
            path: path.display().to_string(),
        }
        .into());
    }

    let name = match &args.name {
        Some(name) => name.clone(),
        None => path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| anyhow::anyhow!("cannot derive a name for {}", path.display()))?,
    };

    let db = open_registry(config)?;
    let path_str = path.display().to_string();
    if db.add_repo(&name, &path_str)? {
        info!(repo = %name, path = %path_str, "tracked repository");
        println!("Tracking {name} ({path_str})");
    } else {
        println!("Already tracking {path_str}");
    }
    Ok(())
}

/// Stop tracking a repository, addressed by name or numeric id.
///
/// # Errors
///
/// Returns an error if no tracked repository matches the selector.
pub fn run_remove_command(args: &RemoveArgs, config: &Config) -> Result<()> {
    let db = open_registry(config)?;

    let id = match db.find_by_name(&args.target)? {
        Some(record) => record.id,
        None => args.target.parse::<i64>().map_err(|_| {
            RegistryError::NotFound(format!("repository '{}'", args.target))
        })?,
    };

    db.remove_repo(id)?;
    info!(target = %args.target, "removed repository");
    println!("Removed {}", args.target);
    Ok(())
}

/// List tracked repositories.
///
/// # Errors
///
/// Returns an error if the registry cannot be read.
pub fn run_repos_command(args: &ReposArgs, config: &Config) -> Result<()> {
    let db = open_registry(config)?;
    let repos = db.list_repos()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&repos)?);
        return Ok(());
    }

    if repos.is_empty() {
        println!("No repositories tracked. Use `gitdeck add <path>`.");
        return Ok(());
    }

    for repo in repos {
        println!("{:>4}  {:20}  {}", repo.id, repo.name, repo.path);
    }
    Ok(())
}
