// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Graph command arguments.
//!
//! ```text
//! graph [REPO] [-n N] [--json]
//!   → decorated log, reconstructed into branch lanes
//! ```

use clap::Args;

/// Arguments for the `graph` command.
#[derive(Debug, Clone, Args)]
pub struct GraphArgs {
    /// Repository path or registered name.
    #[arg(value_name = "REPO")]
    pub repo: Option<String>,

    /// Number of log entries to request. Defaults to the configured
    /// `graph.limit`.
    #[arg(short = 'n', long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Print the lane projection as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}
