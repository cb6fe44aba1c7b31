// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! gitdeck [global options] <command>
//! version | options
//! add / remove / repos            repository registry
//! status / fetch / pull / push
//! branches / checkout             git operations
//! graph                           lane-projected commit graph
//! setup-git                       portable git provisioning
//! ```

pub mod git;
pub mod global;
pub mod graph;
pub mod repo;
pub mod setup;


use crate::cli::git::{BranchesArgs, CheckoutArgs, FetchArgs, PullArgs, PushArgs, StatusArgs};
use crate::cli::global::GlobalOptions;
use crate::cli::graph::GraphArgs;
use crate::cli::repo::{AddArgs, RemoveArgs, ReposArgs};
use crate::cli::setup::SetupGitArgs;
use clap::{Parser, Subcommand};

/// gitdeck - local Git repository dashboard
///
/// Tracks a set of local git repositories, shows their status, and runs
/// common git operations against them.
#[derive(Debug, Parser)]
#[command(
    name = "gitdeck",
    author,
    version,
    about = "Local Git repository dashboard",
    long_about = "Track local git repositories, inspect their status and\n\
                  commit graphs, and run fetch/pull/push/checkout against\n\
                  them through the installed (or bundled) git executable.\n\n\
                  Repositories are registered with `gitdeck add` and can then\n\
                  be addressed by name from any working directory. Commands\n\
                  taking an optional [REPO] fall back to the current\n\
                  directory when it is omitted.",
    after_help = "CONFIG FILES:\n\n\
                  gitdeck reads an optional `gitdeck.toml` from the current\n\
                  directory, then any files given with --config, in order,\n\
                  then GITDECK_* environment variables. Command-line flags\n\
                  override everything else."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Tracks a repository in the registry.
    Add(AddArgs),

    /// Removes a repository from the registry.
    Remove(RemoveArgs),

    /// Lists tracked repositories.
    Repos(ReposArgs),

    /// Shows current branch and recent commits.
    Status(StatusArgs),

    /// Fetches from a remote.
    Fetch(FetchArgs),

    /// Pulls the current branch from its tracking remote.
    Pull(PullArgs),

    /// Pushes the current branch to its tracking remote.
    Push(PushArgs),

    /// Lists branches, or the current branch of every tracked repository.
    Branches(BranchesArgs),

    /// Checks out a branch, tag, or commit.
    Checkout(CheckoutArgs),

    /// Renders the commit graph as branch lanes.
    Graph(GraphArgs),

    /// Downloads a portable git for this platform.
    #[command(name = "setup-git")]
    SetupGit(SetupGitArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
///
/// # Errors
///
/// Returns a clap error when the arguments do not form a valid command
/// line.
pub fn parse_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
