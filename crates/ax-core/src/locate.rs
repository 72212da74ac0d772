//! Runtime lookup of the helper binary.
//!
//! A path fixed at build time is checked as-is and never falls back to a
//! search. Development builds search next to the running executable.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::AxConfig;
use crate::daemon_path::DaemonPath;

/// Errors that can occur when looking up the helper binary.
#[derive(Error, Debug)]
pub enum LocateError {
    #[error("axlockd not found (searched: {})", display_paths(.searched))]
    NotFound { searched: Vec<PathBuf> },

    #[error("axlockd is not an executable file: {}", .0.display())]
    NotExecutable(PathBuf),

    #[error("cannot determine current executable: {0}")]
    CurrentExe(#[source] io::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Finds the helper binary for a given config.
#[derive(Debug, Clone)]
pub struct DaemonLocator {
    daemon_path: DaemonPath,
    daemon_name: String,
    search_dirs: Option<Vec<PathBuf>>,
}

impl DaemonLocator {
    /// Create a locator that searches the running executable's directory.
    pub fn new(config: &AxConfig) -> Self {
        Self {
            daemon_path: config.daemon_path(),
            daemon_name: config.daemon_name().to_string(),
            search_dirs: None,
        }
    }

    /// Replace the directories searched when no path was fixed at build time.
    pub fn with_search_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.search_dirs = Some(dirs.into_iter().map(Into::into).collect());
        self
    }

    /// Return the path of an executable helper binary.
    pub fn locate(&self) -> Result<PathBuf, LocateError> {
        match self.daemon_path {
            DaemonPath::Configured(path) => self.check_configured(Path::new(path)),
            DaemonPath::Unset => self.search(),
        }
    }

    fn check_configured(&self, path: &Path) -> Result<PathBuf, LocateError> {
        tracing::debug!(path = %path.display(), "checking build-time daemon path");
        match probe(path) {
            Probe::Executable => {
                tracing::info!(path = %path.display(), "found axlockd");
                Ok(path.to_path_buf())
            }
            Probe::NotExecutable => {
                tracing::warn!(path = %path.display(), "build-time daemon path is not executable");
                Err(LocateError::NotExecutable(path.to_path_buf()))
            }
            Probe::Missing => {
                tracing::warn!(path = %path.display(), "build-time daemon path does not exist");
                Err(LocateError::NotFound {
                    searched: vec![path.to_path_buf()],
                })
            }
        }
    }

    fn search(&self) -> Result<PathBuf, LocateError> {
        let dirs = match &self.search_dirs {
            Some(dirs) => dirs.clone(),
            None => vec![exe_dir()?],
        };

        let mut searched = Vec::with_capacity(dirs.len());
        let mut not_executable = None;

        for dir in dirs {
            let candidate = dir.join(&self.daemon_name);
            tracing::debug!(candidate = %candidate.display(), "checking daemon candidate");

            match probe(&candidate) {
                Probe::Executable => {
                    tracing::info!(path = %candidate.display(), "found axlockd");
                    return Ok(candidate);
                }
                Probe::NotExecutable => {
                    if not_executable.is_none() {
                        not_executable = Some(candidate.clone());
                    }
                }
                Probe::Missing => {}
            }
            searched.push(candidate);
        }

        tracing::warn!(searched = searched.len(), "axlockd not found");
        match not_executable {
            Some(path) => Err(LocateError::NotExecutable(path)),
            None => Err(LocateError::NotFound { searched }),
        }
    }
}

fn exe_dir() -> Result<PathBuf, LocateError> {
    let exe = std::env::current_exe().map_err(LocateError::CurrentExe)?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        LocateError::CurrentExe(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        ))
    })
}

enum Probe {
    Executable,
    NotExecutable,
    Missing,
}

fn probe(path: &Path) -> Probe {
    let Ok(meta) = fs::metadata(path) else {
        return Probe::Missing;
    };
    if !meta.is_file() {
        return Probe::NotExecutable;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if meta.permissions().mode() & 0o111 == 0 {
            return Probe::NotExecutable;
        }
    }

    Probe::Executable
}
