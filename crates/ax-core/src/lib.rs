//! Locating the axlockd helper binary for ax.
//!
//! The helper's location is fixed at build time for distribution builds
//! (`AXLOCKD_PATH`) and looked up at run time for development builds.
//! Build an [`AxConfig`] once at startup, then hand it to a
//! [`DaemonLocator`] when the helper is needed.

pub mod config;
pub mod daemon_path;
pub mod locate;

// Re-export commonly used types
pub use config::{AxConfig, DAEMON_BINARY_NAME};
pub use daemon_path::DaemonPath;
pub use locate::{DaemonLocator, LocateError};
