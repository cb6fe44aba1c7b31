// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Registry command arguments.
//!
//! ```text
//! add PATH [--name NAME]   → track a repository
//! remove NAME|ID           → stop tracking
//! repos                    → list (no arguments)
//! ```

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `add` command.
#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// Path of the repository to track.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Display name for the repository. Defaults to the directory name.
    #[arg(short = 'n', long, value_name = "NAME")]
    pub name: Option<String>,
}

/// Arguments for the `remove` command.
#[derive(Debug, Clone, Args)]
pub struct RemoveArgs {
    /// Repository name, or its numeric id as shown by `repos`.
    #[arg(value_name = "NAME|ID")]
    pub target: String,
}

/// Arguments for the `repos` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ReposArgs {
    /// Print the tracked repositories as JSON.
    #[arg(long)]
    pub json: bool,
}
