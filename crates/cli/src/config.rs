use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use sabnotify_notify::credentials::DEFAULT_CREDS_FILE;
use sabnotify_notify::log::DEFAULT_LOG_FILE;

use crate::cli::CliArgs;

/// Files used by one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayPaths {
    pub creds: PathBuf,
    pub log_file: PathBuf,
}

impl RelayPaths {
    /// Resolve paths from CLI overrides, falling back to files beside the
    /// executable.
    pub fn resolve(args: &CliArgs) -> Result<Self> {
        let exe_dir = executable_dir()?;
        let paths = Self::resolve_in(&exe_dir, args.creds.as_deref(), args.log_file.as_deref());
        debug!(?paths, "Resolved relay paths");
        Ok(paths)
    }

    fn resolve_in(base: &Path, creds: Option<&str>, log_file: Option<&str>) -> Self {
        Self {
            creds: creds
                .map(PathBuf::from)
                .unwrap_or_else(|| base.join(DEFAULT_CREDS_FILE)),
            log_file: log_file
                .map(PathBuf::from)
                .unwrap_or_else(|| base.join(DEFAULT_LOG_FILE)),
        }
    }
}

/// Directory holding the running executable.
fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("could not determine executable path")?;
    exe.parent()
        .map(Path::to_path_buf)
        .context("executable has no parent directory")
}
