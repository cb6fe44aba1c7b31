// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Setup command arguments.

use clap::Args;

/// Arguments for the `setup-git` command.
#[derive(Debug, Clone, Default, Args)]
pub struct SetupGitArgs {
    /// Re-download even when a portable git is already provisioned.
    #[arg(short = 'f', long)]
    pub force: bool,
}
