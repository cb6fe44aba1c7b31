// gitdeck: local Git repository dashboard
//
// SPDX-FileCopyrightText: 2026 gitdeck contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Portable git provisioning and git program resolution.
//!
//! ```text
//! run_setup(root)
//!     |
//!     v
//! archive_for(os)        per-platform release archive
//!     |
//!     v
//! net::Downloader        staging dir (tempfile)
//!     |
//!     v
//! unzip / tar -xzf  -->  <root>/<os>-<arch>/bin/git
//!
//! git_program(): portable install if provisioned, else PATH, else "git"
//! (resolved once per process)
//! ```

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::{debug, info};

use crate::error::{DeckResult, Result, SetupError};
use crate::net::Downloader;

/// Name of the git executable on this platform.
const GIT_EXE: &str = if cfg!(windows) { "git.exe" } else { "git" };

/// Archive compression of a portable git release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Zip,
    TarGz,
}

impl ArchiveKind {
    /// Staging file name for the downloaded archive.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Zip => "git.zip",
            Self::TarGz => "git.tar.gz",
        }
    }
}

/// A downloadable portable git release.
#[derive(Debug, Clone, Copy)]
pub struct GitArchive {
    pub url: &'static str,
    pub kind: ArchiveKind,
}

/// Portable git release for the given OS, `None` when no build is published.
///
/// Only 64-bit builds exist upstream; the architecture only selects the
/// installation directory.
#[must_use]
pub fn archive_for(os: &str) -> Option<GitArchive> {
    match os {
        "windows" => Some(GitArchive {
            url: "https://github.com/git-for-windows/git/releases/download/v2.45.2.windows.1/PortableGit-2.45.2-64-bit.zip",
            kind: ArchiveKind::Zip,
        }),
        "linux" => Some(GitArchive {
            url: "https://github.com/shiftkey/desktop/releases/download/release-3.3.4-linux1/git-2.40.1-linux.tar.gz",
            kind: ArchiveKind::TarGz,
        }),
        _ => None,
    }
}

/// Installation directory for the current platform under `root`.
fn platform_dir(root: &Path) -> PathBuf {
    root.join(format!(
        "{}-{}",
        std::env::consts::OS,
        std::env::consts::ARCH
    ))
}

/// Path the provisioned git executable would live at under `root`.
#[must_use]
pub fn portable_git_exe(root: &Path) -> PathBuf {
    platform_dir(root).join("bin").join(GIT_EXE)
}

/// Find the git program to run: provisioned portable install first, then
/// `PATH`, then a bare `"git"` left to the OS to resolve.
#[must_use]
pub fn locate_git(portable_root: Option<&Path>) -> PathBuf {
    if let Some(root) = portable_root {
        let exe = portable_git_exe(root);
        if exe.is_file() {
            return exe;
        }
    }
    which::which("git").unwrap_or_else(|_| PathBuf::from("git"))
}

static GIT_PROGRAM: OnceLock<PathBuf> = OnceLock::new();

/// Pin the git program for this process, preferring a portable install
/// under `portable_root`. Later calls are no-ops.
pub fn init_git_program(portable_root: Option<&Path>) {
    let _ = GIT_PROGRAM.set(locate_git(portable_root));
}

/// The git program used by the shell backend. Falls back to `PATH`
/// resolution when [`init_git_program`] was never called.
pub(crate) fn git_program() -> &'static Path {
    GIT_PROGRAM.get_or_init(|| locate_git(None)).as_path()
}

/// Extract an archive into `dest` by shelling out to `unzip`/`tar`.
fn extract(archive: &Path, dest: &Path, kind: ArchiveKind) -> DeckResult<()> {
    use std::process::Command;

    let archive_str = archive.display().to_string();
    let dest_str = dest.display().to_string();
    let (program, args) = match kind {
        ArchiveKind::Zip => ("unzip", vec!["-o", archive_str.as_str(), "-d", dest_str.as_str()]),
        ArchiveKind::TarGz => ("tar", vec!["-xzf", archive_str.as_str(), "-C", dest_str.as_str()]),
    };

    let output = Command::new(program)
        .args(&args)
        .output()
        .map_err(|e| SetupError::ExtractFailed {
            archive: archive_str.clone(),
            message: format!("failed to run {program}: {e}"),
        })?;

    if !output.status.success() {
        return Err(SetupError::ExtractFailed {
            archive: archive_str,
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into());
    }
    Ok(())
}

/// Provision a portable git installation under `portable_root`.
///
/// Skips work when the executable is already present unless `force` is set.
/// Returns the path of the (would-be) executable.
///
/// # Errors
///
/// Returns an error if the platform has no published portable build, the
/// download fails, or extraction fails.
pub async fn run_setup(portable_root: &Path, force: bool, dry_run: bool) -> Result<PathBuf> {
    let os = std::env::consts::OS;
    let arch = std::env::consts::ARCH;
    let archive = archive_for(os).ok_or_else(|| SetupError::UnsupportedPlatform {
        os: os.to_string(),
        arch: arch.to_string(),
    })?;

    let target = platform_dir(portable_root).join("bin");
    let exe = portable_git_exe(portable_root);

    if exe.is_file() && !force {
        info!(path = %exe.display(), "portable git already provisioned");
        return Ok(exe);
    }

    if dry_run {
        debug!(url = archive.url, "would download portable git");
        debug!(dest = %target.display(), "would extract archive");
        return Ok(exe);
    }

    std::fs::create_dir_all(&target)?;

    let staging = tempfile::tempdir()?;
    let archive_path = staging.path().join(archive.kind.file_name());

    info!(url = archive.url, "downloading portable git");
    Downloader::new()
        .url(archive.url)
        .file(&archive_path)
        .download()
        .await?;

    extract(&archive_path, &target, archive.kind)?;
    info!(path = %exe.display(), "portable git ready");
    Ok(exe)
}
