//! Startup configuration.
//!
//! Built once when the program starts and passed by reference to
//! whatever needs to find or launch the helper.

use serde::Serialize;

use crate::daemon_path::DaemonPath;

/// File name of the helper binary.
pub const DAEMON_BINARY_NAME: &str = "axlockd";

/// Resolved configuration for locating the helper binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxConfig {
    /// Build-time helper location
    daemon_path: DaemonPath,
    /// File name used by the runtime lookup
    daemon_name: String,
}

impl AxConfig {
    /// Create a config around an already resolved daemon path.
    pub fn new(daemon_path: DaemonPath) -> Self {
        Self {
            daemon_path,
            daemon_name: DAEMON_BINARY_NAME.to_string(),
        }
    }

    /// Create the config for this build.
    pub fn from_build() -> Self {
        let config = Self::new(DaemonPath::from_build());
        match config.daemon_path {
            DaemonPath::Configured(path) => {
                tracing::debug!(path, "distribution build: daemon path fixed at build time")
            }
            DaemonPath::Unset => {
                tracing::debug!("development build: daemon path resolved at run time")
            }
        }
        config
    }

    /// Override the helper file name used by the runtime lookup.
    pub fn with_daemon_name(mut self, name: impl Into<String>) -> Self {
        self.daemon_name = name.into();
        self
    }

    pub fn daemon_path(&self) -> DaemonPath {
        self.daemon_path
    }

    pub fn daemon_name(&self) -> &str {
        &self.daemon_name
    }
}
