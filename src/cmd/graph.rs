// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Graph command implementation.
//!
//! ```text
//! git log --graph ... --> graph::parse --> graph::project --> render
//! ```

use std::fmt::Write as _;
use tracing::debug;

use crate::cli::graph::GraphArgs;
use crate::config::Config;
use crate::error::Result;
use crate::git::query;
use crate::graph::{self, LaneRegistry};

use super::resolve_repo;

/// Reconstruct and print the commit graph of a repository.
///
/// # Errors
///
/// Returns an error if the repository cannot be resolved or the log command
/// fails. Reconstruction itself never fails.
pub fn run_graph_command(args: &GraphArgs, config: &Config) -> Result<()> {
    let path = resolve_repo(config, args.repo.as_deref())?;
    let limit = args.limit.unwrap_or(config.graph.limit);

    let lines = query::graph_log(&path, Some(limit))?;
    let commits = graph::parse_with_default(&lines, &config.graph.trunk);
    let lanes = graph::project_with_trunk(&commits, &config.graph.trunk);
    debug!(
        lines = lines.len(),
        commits = commits.len(),
        lanes = lanes.len(),
        "graph reconstructed"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&lanes)?);
        return Ok(());
    }

    if lanes.is_empty() {
        println!("no commits");
        return Ok(());
    }
    print!("{}", render_lanes(&lanes));
    Ok(())
}

/// Render the lane projection as plain text, one block per lane in creation
/// order, naming the parent lane at the point of divergence.
#[must_use]
pub fn render_lanes(registry: &LaneRegistry) -> String {
    let mut out = String::new();
    for lane in registry.lanes() {
        match lane.parent() {
            Some(parent) => {
                let _ = writeln!(
                    out,
                    "{} (off {})",
                    lane.name(),
                    registry.lane(parent).name()
                );
            }
            None => {
                let _ = writeln!(out, "{}", lane.name());
            }
        }
        for commit in lane.commits() {
            let _ = writeln!(out, "  * {} {} ({})", commit.hash, commit.subject, commit.author);
        }
    }
    out
}
