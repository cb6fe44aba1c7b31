// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch lane projection.
//!
//! ```text
//! ParsedCommit sequence
//!        |
//!        v
//!   LaneRegistry::record      existing lane, or:
//!     name == trunk        -> new root lane
//!     trunk already exists -> new lane parented on trunk
//!     otherwise            -> new root lane (first commit was off-trunk)
//! ```
//!
//! Lanes are a presentation grouping, not a Git concept. The registry is
//! rebuilt from scratch on every invocation; there is no incremental update.

use std::collections::HashMap;

use serde::Serialize;

use super::parse::ParsedCommit;
use super::{DEFAULT_LANE, NO_MESSAGE, UNKNOWN_AUTHOR};

/// Handle to a lane inside a [`LaneRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LaneId(usize);

impl LaneId {
    /// Position of the lane in creation order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One commit as placed on a lane, with placeholders applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaneCommit {
    pub hash: String,
    pub subject: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl LaneCommit {
    fn from_parsed(commit: &ParsedCommit) -> Self {
        let subject = if commit.message.is_empty() {
            NO_MESSAGE.to_string()
        } else {
            commit.message.clone()
        };
        let author = commit
            .author
            .clone()
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
        Self {
            hash: commit.hash.clone(),
            subject,
            author,
            timestamp: commit.timestamp.clone(),
        }
    }
}

/// A named drawing track holding a run of commits.
#[derive(Debug, Clone, Serialize)]
pub struct BranchLane {
    name: String,
    /// Lane this one branches off, for rendering purposes only. `None` for
    /// root lanes.
    parent: Option<LaneId>,
    commits: Vec<LaneCommit>,
}

impl BranchLane {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn parent(&self) -> Option<LaneId> {
        self.parent
    }

    #[must_use]
    pub fn commits(&self) -> &[LaneCommit] {
        &self.commits
    }
}

/// Explicit lane registry keyed by name.
///
/// Lane creation order is preserved; exactly one lane name is designated
/// the trunk and resolves to a root lane.
#[derive(Debug, Clone, Serialize)]
pub struct LaneRegistry {
    trunk: String,
    lanes: Vec<BranchLane>,
    #[serde(skip)]
    by_name: HashMap<String, LaneId>,
}

impl Default for LaneRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_LANE)
    }
}

impl LaneRegistry {
    #[must_use]
    pub fn new(trunk: impl Into<String>) -> Self {
        Self {
            trunk: trunk.into(),
            lanes: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Name of the trunk lane for this registry.
    #[must_use]
    pub fn trunk_name(&self) -> &str {
        &self.trunk
    }

    /// Return the lane named `name`, creating it first when missing.
    ///
    /// A new non-trunk lane is parented on the trunk lane when the trunk
    /// already exists; otherwise it becomes a second root (this happens only
    /// when the very first commit recorded belongs to a non-trunk lane).
    pub fn resolve(&mut self, name: &str) -> LaneId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }

        let parent = if name == self.trunk {
            None
        } else {
            self.by_name.get(self.trunk.as_str()).copied()
        };

        let id = LaneId(self.lanes.len());
        self.lanes.push(BranchLane {
            name: name.to_string(),
            parent,
            commits: Vec::new(),
        });
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Append a commit to its resolved lane.
    pub fn record(&mut self, commit: &ParsedCommit) {
        let name = if commit.branch.is_empty() {
            commit
                .refs
                .iter()
                .find(|r| !r.is_empty())
                .map_or(self.trunk.clone(), Clone::clone)
        } else {
            commit.branch.clone()
        };
        let id = self.resolve(&name);
        self.lanes[id.0].commits.push(LaneCommit::from_parsed(commit));
    }

    #[must_use]
    pub fn lane(&self, id: LaneId) -> &BranchLane {
        &self.lanes[id.0]
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BranchLane> {
        self.by_name.get(name).map(|&id| &self.lanes[id.0])
    }

    /// Lanes in creation order.
    pub fn lanes(&self) -> impl Iterator<Item = &BranchLane> {
        self.lanes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }
}

/// Project commits onto lanes with the default trunk name.
#[must_use]
pub fn project(commits: &[ParsedCommit]) -> LaneRegistry {
    project_with_trunk(commits, DEFAULT_LANE)
}

/// Project commits onto lanes, naming the trunk lane `trunk`.
///
/// Input order is preserved within each lane. Like [`super::parse`], this
/// never fails: an empty commit sequence yields an empty registry.
#[must_use]
pub fn project_with_trunk(commits: &[ParsedCommit], trunk: &str) -> LaneRegistry {
    let mut registry = LaneRegistry::new(trunk);
    for commit in commits {
        registry.record(commit);
    }
    registry
}
