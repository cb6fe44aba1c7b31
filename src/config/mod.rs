// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. gitdeck.toml (cwd)
//! 3. --config FILE (repeatable, in order)
//! 4. GITDECK_* env vars
//! 5. CLI overrides (--database, --dry)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GITDECK_GLOBAL__DRY=true        → global.dry = true
//! GITDECK_GIT__REMOTE=upstream    → git.remote = "upstream"
//! GITDECK_GRAPH__TRUNK=main       → graph.trunk = "main"
//! ```

pub mod loader;
pub mod paths;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use paths::PathsConfig;
use types::{GitConfig, GlobalConfig, GraphConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Git invocation options.
    pub git: GitConfig,
    /// Graph reconstruction options.
    pub graph: GraphConfig,
    /// Paths configuration.
    pub paths: PathsConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gitdeck::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("gitdeck.toml")
    ///     .with_env_prefix("GITDECK")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML,
    /// or does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match
    /// the `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format configuration options for display.
    ///
    /// Deterministically ordered `key = value` lines covering every option.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let format_path = |p: &Option<std::path::PathBuf>| {
            p.as_ref()
                .map_or_else(|| "(unset)".to_string(), |p| p.display().to_string())
        };

        let mut options = BTreeMap::new();
        options.insert("git.remote", self.git.remote.clone());
        options.insert("global.dry", self.global.dry.to_string());
        options.insert(
            "global.file_log_level",
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert("global.log_file", format_path(&self.global.log_file));
        options.insert(
            "global.output_log_level",
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert("graph.limit", self.graph.limit.to_string());
        options.insert("graph.trunk", self.graph.trunk.clone());
        options.insert("paths.data", format_path(&self.paths.data));
        options.insert("paths.database", format_path(&self.paths.database));
        options.insert("paths.portable_git", format_path(&self.paths.portable_git));

        options
            .into_iter()
            .map(|(key, value)| format!("{key} = {value}"))
            .collect()
    }
}
