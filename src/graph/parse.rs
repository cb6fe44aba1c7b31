// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Raw log line classification and parsing.
//!
//! ```text
//! "* a1b2c3d (HEAD -> main, origin/main) Initial commit"
//!     |        |                          |
//!   glyphs    hash    decorations       subject
//! ```
//!
//! Two patterns are tried in order: decorated first, then bare. A line
//! matching neither is a pure connector line (or noise) and is dropped —
//! an explicit [`LogLine::Unrecognized`], not an error. Input is expected
//! to have color codes disabled upstream.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::DEFAULT_LANE;

/// Commit line with a parenthesized decoration list after the hash.
static DECORATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[|*\\/\s]*([0-9a-f]{7,})\s+\(([^)]+)\)\s*(.*)$")
        .expect("decorated pattern is valid")
});

/// Commit line with no decoration list.
static BARE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[|*\\/\s]*([0-9a-f]{7,})\s+(.*)$").expect("bare pattern is valid")
});

/// Classification of one raw log line.
///
/// The three cases are exhaustive so the "drop" branch is auditable rather
/// than an implicit fallthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLine {
    /// Commit line carrying a decoration list.
    Decorated {
        hash: String,
        /// Comma-split decoration tokens, each trimmed of surrounding
        /// whitespace. Empty tokens are preserved.
        refs: Vec<String>,
        message: String,
    },
    /// Commit line without decorations.
    Bare { hash: String, message: String },
    /// Not a commit line (e.g. a pure graph-connector line with no hash).
    Unrecognized,
}

/// Classify a single raw line. Never fails.
#[must_use]
pub fn classify(line: &str) -> LogLine {
    if let Some(caps) = DECORATED.captures(line) {
        let refs = caps[2]
            .split(',')
            .map(|r| r.trim().to_string())
            .collect();
        return LogLine::Decorated {
            hash: caps[1].to_string(),
            refs,
            message: caps[3].to_string(),
        };
    }

    if let Some(caps) = BARE.captures(line) {
        return LogLine::Bare {
            hash: caps[1].to_string(),
            message: caps[2].to_string(),
        };
    }

    LogLine::Unrecognized
}

/// One commit reconstructed from a log line.
///
/// `hash` is the abbreviated hex identifier — unique within a single parse
/// pass, not globally (abbreviations can collide across very large
/// histories; accepted approximation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCommit {
    pub hash: String,
    pub message: String,
    pub refs: Vec<String>,
    /// Lane this commit is assigned to: first non-empty ref, otherwise the
    /// inherited default lane name.
    pub branch: String,
    /// Author name when upstream provides it; the projection substitutes a
    /// placeholder otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl ParsedCommit {
    /// Build a commit from one raw line, or `None` for non-commit lines.
    #[must_use]
    pub fn from_line(line: &str, default_lane: &str) -> Option<Self> {
        match classify(line) {
            LogLine::Decorated {
                hash,
                refs,
                message,
            } => {
                let branch = refs
                    .iter()
                    .find(|r| !r.is_empty())
                    .cloned()
                    .unwrap_or_else(|| default_lane.to_string());
                Some(Self {
                    hash,
                    message,
                    refs,
                    branch,
                    author: None,
                    timestamp: None,
                })
            }
            LogLine::Bare { hash, message } => Some(Self {
                hash,
                message,
                refs: Vec::new(),
                branch: default_lane.to_string(),
                author: None,
                timestamp: None,
            }),
            LogLine::Unrecognized => None,
        }
    }
}

/// Parse a sequence of raw log lines into commits.
///
/// Total over arbitrary text: lines matching neither pattern are excluded
/// from the result, order is preserved, nothing is deduplicated, and empty
/// input yields an empty result. Pure — safe to call concurrently.
pub fn parse<I>(lines: I) -> Vec<ParsedCommit>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    parse_with_default(lines, DEFAULT_LANE)
}

/// [`parse`] with a custom default lane name for undecorated commits.
pub fn parse_with_default<I>(lines: I, default_lane: &str) -> Vec<ParsedCommit>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| ParsedCommit::from_line(line.as_ref(), default_lane))
        .collect()
}
