// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Setup command implementation.

use crate::cli::setup::SetupGitArgs;
use crate::config::Config;
use crate::error::Result;
use crate::setup;

/// Provision a portable git under the configured root.
///
/// # Errors
///
/// Returns an error if the platform is unsupported or download/extraction
/// fails.
pub async fn run_setup_command(args: &SetupGitArgs, config: &Config, dry_run: bool) -> Result<()> {
    let root = config.paths.portable_git()?;
    let exe = setup::run_setup(root, args.force, dry_run).await?;

    if dry_run {
        println!("Would provision portable git at {}", exe.display());
    } else {
        println!("Portable git at {}", exe.display());
    }
    Ok(())
}
