// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command arguments.
//!
//! ```text
//! status [REPO] [-n N] [--json]
//!   → current branch + recent commits
//! fetch [REPO] [--remote R]
//! pull [REPO] / push [REPO]
//!   → tracking configuration decides remote and branch
//! branches [REPO] [--all]
//!   → one repo's branches, or current branch per tracked repo
//! checkout WHAT [REPO]
//! ```
//!
//! `REPO` is a directory path or a registered name; the current directory
//! when omitted.

use clap::Args;

/// Arguments for the `status` command.
#[derive(Debug, Clone, Args)]
pub struct StatusArgs {
    /// Repository path or registered name.
    #[arg(value_name = "REPO")]
    pub repo: Option<String>,

    /// Number of recent commits to show.
    #[arg(short = 'n', long = "count", value_name = "N", default_value_t = 10)]
    pub count: usize,

    /// Print the status as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `fetch` command.
#[derive(Debug, Clone, Args)]
pub struct FetchArgs {
    /// Repository path or registered name.
    #[arg(value_name = "REPO")]
    pub repo: Option<String>,

    /// Remote to fetch from. Defaults to the configured `git.remote`.
    #[arg(short = 'r', long, value_name = "REMOTE")]
    pub remote: Option<String>,
}

/// Arguments for the `pull` command.
#[derive(Debug, Clone, Args)]
pub struct PullArgs {
    /// Repository path or registered name.
    #[arg(value_name = "REPO")]
    pub repo: Option<String>,
}

/// Arguments for the `push` command.
#[derive(Debug, Clone, Args)]
pub struct PushArgs {
    /// Repository path or registered name.
    #[arg(value_name = "REPO")]
    pub repo: Option<String>,
}

/// Arguments for the `branches` command.
#[derive(Debug, Clone, Default, Args)]
pub struct BranchesArgs {
    /// Repository path or registered name. When omitted, shows the current
    /// branch of every tracked repository instead.
    #[arg(value_name = "REPO")]
    pub repo: Option<String>,

    /// In the tracked-repositories listing, include repositories sitting on
    /// their trunk branch.
    #[arg(short = 'a', long)]
    pub all: bool,
}

/// Arguments for the `checkout` command.
#[derive(Debug, Clone, Args)]
pub struct CheckoutArgs {
    /// Branch, tag, or commit to check out.
    #[arg(value_name = "WHAT")]
    pub what: String,

    /// Repository path or registered name.
    #[arg(value_name = "REPO")]
    pub repo: Option<String>,
}
